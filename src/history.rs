use crate::tic_tac_toe::Cell;

/// A board never holds more than nine placed markers, so neither does its history.
pub const CAPACITY: usize = 9;

/// Fixed-capacity stack of `(cell index, previous cell)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveHistory {
    entries: [(usize, Cell); CAPACITY],
    len: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            entries: [(0, Cell::Empty); CAPACITY],
            len: 0,
        }
    }

    /// Returns false, leaving the history untouched, when it is already full.
    pub fn push(&mut self, index: usize, previous: Cell) -> bool {
        if self.len == CAPACITY {
            return false;
        }
        self.entries[self.len] = (index, previous);
        self.len += 1;
        true
    }

    pub fn pop(&mut self) -> Option<(usize, Cell)> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.entries[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}
