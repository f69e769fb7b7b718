use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{ensure, Result};
use log::{debug, info};

use crate::console::Console;
use crate::move_log::LogStore;
use crate::player::Player;
use crate::tic_tac_toe::{Board, Marker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner { name: String, marker: Marker },
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner { name, .. } => write!(f, "{} wins!", name),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Runs rounds between two fixed players until the console declines a rematch.
/// The first player holds X and always moves first.
pub struct GameLoop<R, W, S> {
    players: [Player; 2],
    console: Console<R, W>,
    store: S,
}

impl<R: BufRead, W: Write, S: LogStore> GameLoop<R, W, S> {
    pub fn new(players: [Player; 2], console: Console<R, W>, store: S) -> Self {
        Self {
            players,
            console,
            store,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub fn run(&mut self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = self.play_round()?;
            info!("round {} finished: {}", outcomes.len() + 1, outcome);
            outcomes.push(outcome);
            if !self.console.prompt_play_again()? {
                break;
            }
        }
        self.console.farewell()?;
        Ok(outcomes)
    }

    pub fn play_round(&mut self) -> Result<Outcome> {
        let mut board = Board::new();
        let mut log = self.store.open_round()?;
        log.start(&self.players[0], &self.players[1])?;
        debug!("starting game {}", log.game_number());

        let mut current = 0;
        let mut move_count = 0;
        loop {
            let player = &self.players[current];
            self.console.show_board(&board)?;

            let position = player.get_move(&board, &mut self.console)?;
            board.place_move(position, player.marker())?;
            move_count += 1;
            ensure!(move_count <= 9, "more than nine moves in one round");

            self.console.show_stats(&board.marker_counts())?;
            log.record_move(move_count, player, position, &board)?;

            let outcome = if board.check_winner(player.marker()) {
                self.console.show_board(&board)?;
                self.console.announce_winner(player.name())?;
                Outcome::Winner {
                    name: player.name().to_string(),
                    marker: player.marker(),
                }
            } else if board.is_full() {
                self.console.show_board(&board)?;
                self.console.announce_draw()?;
                Outcome::Draw
            } else {
                current = 1 - current;
                continue;
            };

            log.record_result(&outcome)?;
            return Ok(outcome);
        }
    }
}
