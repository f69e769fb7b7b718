use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::console::Console;
use crate::tic_tac_toe::{Board, Marker, Position};

/// Name that opts a seat into automated play when players are built from names alone.
pub const COMPUTER_NAME: &str = "Computer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Human,
    Automated,
}

impl Mode {
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case(COMPUTER_NAME) {
            Mode::Automated
        } else {
            Mode::Human
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
    mode: Mode,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker, mode: Mode) -> Self {
        Self {
            name: name.into(),
            marker,
            mode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_automated(&self) -> bool {
        self.mode == Mode::Automated
    }

    pub fn get_move<R: BufRead, W: Write>(
        &self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<Position> {
        match self.mode {
            Mode::Automated => {
                let position = choose_random(board, &mut rand::thread_rng())?;
                console.announce_computer_move(self, position)?;
                Ok(position)
            }
            Mode::Human => console.read_move(self, board),
        }
    }
}

/// Picks uniformly among the open cells of `board`.
pub fn choose_random<G: Rng + ?Sized>(board: &Board, rng: &mut G) -> Result<Position> {
    let position = board
        .available_moves()
        .choose(rng)
        .ok_or_else(|| anyhow!("no available moves on a full board"))?;
    debug!("random selection: {}", position);
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(Mode::from_name("Computer"), Mode::Automated);
        assert_eq!(Mode::from_name("computer"), Mode::Automated);
        assert_eq!(Mode::from_name("COMPUTER "), Mode::Automated);
        assert_eq!(Mode::from_name("Computer2"), Mode::Human);
        assert_eq!(Mode::from_name("Alice"), Mode::Human);
    }

    #[test]
    fn test_mode_is_explicit() {
        let player = Player::new("Computer", Marker::X, Mode::Human);
        assert!(!player.is_automated());
        let player = Player::new("Alice", Marker::O, Mode::Automated);
        assert!(player.is_automated());
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker(), Marker::O);
    }

    #[test]
    fn test_choose_random_stays_in_available() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        let mut marker = Marker::X;
        while !board.is_full() {
            for _ in 0..50 {
                let position = choose_random(&board, &mut rng).unwrap();
                assert!(board.is_open(position));
                assert!(board.available_moves().any(|p| p == position));
            }
            let position = choose_random(&board, &mut rng).unwrap();
            board.place_move(position, marker).unwrap();
            marker = marker.opponent();
        }
        assert!(choose_random(&board, &mut rng).is_err());
    }

    #[test]
    fn test_choose_random_single_open_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        for n in 1..=8 {
            board
                .place_move(Position::new(n).unwrap(), Marker::X)
                .unwrap();
        }
        for _ in 0..10 {
            assert_eq!(
                choose_random(&board, &mut rng).unwrap(),
                Position::new(9).unwrap()
            );
        }
    }

    #[test]
    fn test_automated_get_move() {
        let mut board = Board::new();
        board.place_move(Position::new(5).unwrap(), Marker::X).unwrap();
        let player = Player::new("Computer", Marker::O, Mode::Automated);
        let mut console = Console::new(&b""[..], Vec::new());
        for _ in 0..20 {
            let position = player.get_move(&board, &mut console).unwrap();
            assert_ne!(position.get(), 5);
        }
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.contains("Computer selects position"));
    }
}
