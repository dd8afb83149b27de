//! Board evaluation from the searching side's point of view
//!
//! The searcher scores terminal nodes through an [`Evaluator`], so the
//! metric can be swapped without touching the search itself. The
//! baseline is [`StoneCount`]: the number of stones the searching side
//! has on the board, nothing else.

use crate::board::{Board, Stone};

/// Static position evaluation for the side the search is playing.
///
/// `stone` is always the root mover's color, whichever side placed the
/// last speculative stone. Higher scores are better for that color.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, stone: Stone) -> i32;
}

/// Counts the searching side's stones.
///
/// Blind to arrangement and to the opponent; a position one move from
/// defeat scores the same as a balanced one with equal material.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoneCount;

impl Evaluator for StoneCount {
    #[inline]
    fn evaluate(&self, board: &Board, stone: Stone) -> i32 {
        board.stone_count(stone) as i32
    }
}
