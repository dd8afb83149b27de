//! Win condition checking for Gomoku
//!
//! A side wins with five consecutive stones of its color along one of
//! the four axis directions. Longer runs count too: every run of six or
//! more contains a five-cell window that matches.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's a five-in-a-row for the given color.
///
/// Probes every cell holding `stone` for a run of five starting at that
/// cell along each direction.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_line(board, stone).is_some()
}

/// Find the first five-in-a-row for `stone` in scan order.
///
/// Returns the five cells of the run starting from its scan-order
/// earliest cell, or `None` when no run exists. Empty never has a run.
pub fn find_five_line(board: &Board, stone: Stone) -> Option<[Pos; 5]> {
    if stone == Stone::Empty {
        return None;
    }
    for row in 0..board.size() {
        for col in 0..board.size() {
            let start = Pos::new(row, col);
            if board.stone_at(start) != Some(stone) {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                if let Some(line) = run_of_five(board, start, dr, dc, stone) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Probe one direction for five consecutive `stone` cells from `start`.
fn run_of_five(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone) -> Option<[Pos; 5]> {
    let mut line = [start; 5];
    for i in 1..5 {
        let r = start.row as i32 + dr * i;
        let c = start.col as i32 + dc * i;
        if r < 0 || c < 0 {
            return None;
        }
        let pos = Pos::new(r as usize, c as usize);
        if board.stone_at(pos) != Some(stone) {
            return None;
        }
        line[i as usize] = pos;
    }
    Some(line)
}
