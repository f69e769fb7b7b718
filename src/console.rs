//! Prompts and messages for a game played over a text stream.
//!
//! Everything is generic over the reader and writer so the binary can use
//! locked stdin/stdout while tests drive a byte slice and a `Vec<u8>`.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use log::debug;

use crate::error::GameError;
use crate::player::Player;
use crate::tic_tac_toe::{Board, Cell, Marker, Position};

/// Keeps only the ASCII digits of `raw`.
pub fn clean_input(raw: &str) -> Result<String, GameError> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        return Err(GameError::NoDigits);
    }
    Ok(cleaned)
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn prompt_name(&mut self, prompt: &str) -> Result<String> {
        match self.read_line(prompt)? {
            Some(line) => Ok(line.trim().to_string()),
            None => bail!("input closed while waiting for a player name"),
        }
    }

    pub fn read_move(&mut self, player: &Player, board: &Board) -> Result<Position> {
        let prompt = format!(
            "{}'s Turn ({}):\nEnter a position (1-9): ",
            player.name(),
            player.marker()
        );
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                bail!("input closed while waiting for {}'s move", player.name());
            };
            let cleaned = match clean_input(&line) {
                Ok(cleaned) => cleaned,
                Err(err) => {
                    debug!("rejected input {:?}: {}", line.trim_end(), err);
                    writeln!(self.writer, "Please enter a number between 1 and 9.")?;
                    continue;
                }
            };
            if board.is_valid_move(&cleaned) {
                return Ok(cleaned.parse::<Position>()?);
            }
            writeln!(
                self.writer,
                "Invalid move. Please choose an available position (1-9)."
            )?;
        }
    }

    /// End of input is taken as "no".
    pub fn prompt_play_again(&mut self) -> Result<bool> {
        loop {
            let Some(line) = self.read_line("\nWould you like to play again? (yes/no): ")? else {
                writeln!(self.writer)?;
                return Ok(false);
            };
            match line.trim().to_lowercase().as_str() {
                "yes" | "y" => {
                    writeln!(self.writer, "\nStarting a new game...\n")?;
                    return Ok(true);
                }
                "no" | "n" => return Ok(false),
                _ => writeln!(self.writer, "Please answer with 'yes' or 'no'.")?,
            }
        }
    }

    pub fn welcome(&mut self, first: &str, second: &str) -> Result<()> {
        writeln!(self.writer, "\nWelcome, {} and {}!", first, second)?;
        Ok(())
    }

    pub fn show_positions(&mut self) -> Result<()> {
        write!(self.writer, "{}", Board::new())?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.writer, "\nCurrent Board:")?;
        writeln!(self.writer, "{}", board)?;
        Ok(())
    }

    pub fn show_stats(&mut self, counts: &HashMap<Cell, usize>) -> Result<()> {
        let count = |marker| counts.get(&Cell::Filled(marker)).copied().unwrap_or(0);
        writeln!(
            self.writer,
            "Board stats: {} X's, {} O's",
            count(Marker::X),
            count(Marker::O)
        )?;
        Ok(())
    }

    pub fn announce_computer_move(&mut self, player: &Player, position: Position) -> Result<()> {
        writeln!(
            self.writer,
            "{}'s Turn ({}):\nComputer selects position {}",
            player.name(),
            player.marker(),
            position
        )?;
        Ok(())
    }

    pub fn announce_winner(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "\nCongratulations, {}! You win!", name)?;
        Ok(())
    }

    pub fn announce_draw(&mut self) -> Result<()> {
        writeln!(self.writer, "The game ended in a draw!")?;
        Ok(())
    }

    pub fn farewell(&mut self) -> Result<()> {
        writeln!(self.writer, "Thanks for playing Tic-Tac-Toe!")?;
        self.writer.flush()?;
        Ok(())
    }
}
