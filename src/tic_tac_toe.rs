use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::GameError;
use crate::history::MoveHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Marker),
}

/// A display position, 1 through 9, counted left to right and top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    pub fn new(position: usize) -> Result<Self, GameError> {
        match position {
            1..=9 => Ok(Self(position as u8)),
            _ => Err(GameError::InvalidMove(position.to_string())),
        }
    }

    fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Cell index in `0..9`.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| GameError::InvalidMove(trimmed.to_string()))
            .and_then(Position::new)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rows, columns, then diagonals.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; 9],
    history: MoveHistory,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            history: MoveHistory::new(),
        }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True iff `position` parses to 1-9 and names an empty cell.
    pub fn is_valid_move(&self, position: &str) -> bool {
        position
            .parse::<Position>()
            .map(|position| self.is_open(position))
            .unwrap_or(false)
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.cells[position.index()] == Cell::Empty
    }

    pub fn place_move(&mut self, position: Position, marker: Marker) -> Result<(), GameError> {
        if !self.is_open(position) {
            return Err(GameError::InvalidMove(position.to_string()));
        }
        let index = position.index();
        if !self.history.push(index, self.cells[index]) {
            return Err(GameError::InvalidMove(position.to_string()));
        }
        self.cells[index] = Cell::Filled(marker);
        debug!("placed {} at {}", marker, position);
        Ok(())
    }

    /// Reverts the most recent placement. Returns false when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some((index, previous)) => {
                self.cells[index] = previous;
                debug!("undid move at {}", Position::from_index(index));
                true
            }
            None => false,
        }
    }

    pub fn available_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| Position::from_index(index))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    pub fn check_winner(&self, marker: Marker) -> bool {
        let won = TRIPLES
            .iter()
            .any(|triple| triple.iter().all(|&i| self.cells[i] == Cell::Filled(marker)));
        trace!("check_winner({}) = {}", marker, won);
        won
    }

    pub fn winner(&self) -> Option<Marker> {
        [Marker::X, Marker::O]
            .into_iter()
            .find(|marker| self.check_winner(*marker))
    }

    /// Tally of every cell value, `Empty` included.
    pub fn marker_counts(&self) -> HashMap<Cell, usize> {
        let mut counts = HashMap::from([
            (Cell::Empty, 0),
            (Cell::Filled(Marker::X), 0),
            (Cell::Filled(Marker::O), 0),
        ]);
        for cell in &self.cells {
            *counts.entry(*cell).or_insert(0) += 1;
        }
        counts
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn formatted_state(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => Position::from_index(row * 3 + col).to_string(),
                    Cell::Filled(marker) => marker.to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {} ", symbols[0], symbols[1], symbols[2])?;
            if row < 2 {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}
