//! Grid state and the place/retract mutation protocol

use std::fmt;

use super::{Pos, Stone};

/// Square game board with a side length fixed at construction.
///
/// All mutation goes through [`place`](Board::place) and
/// [`retract`](Board::retract). The search layer relies on that pair for
/// backtracking: it places a speculative stone and retracts it again
/// after recursing, always in LIFO order on the same cell. The board
/// does not track pairing itself; callers own that discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    black_stones: u32,
    white_stones: u32,
}

impl Board {
    /// Create an empty board of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            black_stones: 0,
            white_stones: 0,
        }
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// Check if position is on the board
    #[inline]
    pub fn in_range(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Stone at position, or `None` for out-of-range coordinates
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        if self.in_range(pos) {
            Some(self.cells[self.idx(pos)])
        } else {
            None
        }
    }

    /// Check if a stone may be placed here: in range and empty
    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.stone_at(pos) == Some(Stone::Empty)
    }

    /// Place a stone on an empty in-range cell.
    ///
    /// Returns false and leaves the board untouched when the cell is out
    /// of range, occupied, or `stone` is Empty. This is the single
    /// mutation entry point for real moves and speculative search moves
    /// alike.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_legal(pos) {
            return false;
        }
        match stone {
            Stone::Black => self.black_stones += 1,
            Stone::White => self.white_stones += 1,
            Stone::Empty => return false,
        }
        let idx = self.idx(pos);
        self.cells[idx] = stone;
        true
    }

    /// Reset an in-range cell to empty; out-of-range calls do nothing.
    ///
    /// Only meant to undo a prior [`place`](Board::place) on the same
    /// cell. Unpaired or out-of-order calls are a caller error the board
    /// does not detect.
    pub fn retract(&mut self, pos: Pos) {
        if !self.in_range(pos) {
            return;
        }
        let idx = self.idx(pos);
        match self.cells[idx] {
            Stone::Black => self.black_stones -= 1,
            Stone::White => self.white_stones -= 1,
            Stone::Empty => return,
        }
        self.cells[idx] = Stone::Empty;
    }

    /// Count cells holding `stone`; for Empty, the number of free cells
    #[inline]
    pub fn stone_count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black_stones,
            Stone::White => self.white_stones,
            Stone::Empty => self.cells.len() as u32 - self.black_stones - self.white_stones,
        }
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count(Stone::Empty) == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
