//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The searcher walks every legal cell in row-major order down to a
//! fixed ply depth. It never copies the board: a speculative stone is
//! placed and retracted around each branch, so the caller's board is
//! unchanged once the search returns.
//!
//! Two rules hold at every node and are part of the contract:
//!
//! - the terminal check tests the root mover's five-in-a-row, whichever
//!   side is to act at that node
//! - terminal nodes are scored by the configured [`Evaluator`] from the
//!   root mover's point of view
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(9);
//! board.place(Pos::new(4, 4), Stone::White);
//!
//! let mut searcher = Searcher::new(2);
//! let best = searcher.decide_move(&mut board, Stone::Black);
//! assert!(best.is_some());
//! // The probe stones are all retracted again.
//! assert_eq!(board.stone_count(Stone::Black), 0);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{Evaluator, StoneCount};
use crate::rules::has_five_in_row;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Fixed-depth minimax searcher.
///
/// Holds configuration only: the ply depth, the pruning toggle and the
/// evaluator. Nothing is cached between calls, so one searcher can serve
/// any number of positions in any order.
pub struct Searcher {
    max_depth: u32,
    pruning: bool,
    evaluator: Box<dyn Evaluator>,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with the default stone-count evaluator.
    ///
    /// `max_depth` is in plies and is clamped to at least 1: with a zero
    /// horizon the recursion could only stop on a full board.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self::with_evaluator(max_depth, Box::new(StoneCount))
    }

    /// Create a searcher with a custom evaluator.
    #[must_use]
    pub fn with_evaluator(max_depth: u32, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            max_depth: max_depth.max(1),
            pruning: true,
            evaluator,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta pruning.
    ///
    /// Pruning changes how many nodes are visited, never the move or the
    /// score; with it off the search degrades to plain full minimax.
    pub fn set_pruning(&mut self, pruning: bool) {
        self.pruning = pruning;
    }

    /// Pick the best move for `stone`, or `None` when the board is full.
    ///
    /// The board is mutated while the search runs and restored to its
    /// original content before this returns.
    pub fn decide_move(&mut self, board: &mut Board, stone: Stone) -> Option<Pos> {
        self.search(board, stone).best_move
    }

    /// Search the position and report the move with its statistics.
    ///
    /// Every legal cell is tried in row-major order with a fresh
    /// full alpha-beta window, so root values are exact and ties go to
    /// the earliest-enumerated cell.
    pub fn search(&mut self, board: &mut Board, stone: Stone) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = i32::MIN;

        if stone == Stone::Empty {
            return SearchResult {
                best_move,
                score: best_score,
                nodes: self.nodes,
            };
        }

        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if !board.is_legal(pos) {
                    continue;
                }
                board.place(pos, stone);
                let score = self.min_value(board, stone, i32::MIN, i32::MAX, 1);
                board.retract(pos);

                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Minimizing ply: the opponent of the root mover places next.
    fn min_value(
        &mut self,
        board: &mut Board,
        stone: Stone,
        alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;

        if self.is_terminal(board, stone, ply) {
            return self.evaluator.evaluate(board, stone);
        }

        let reply = stone.opponent();
        let mut value = i32::MAX;

        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if !board.is_legal(pos) {
                    continue;
                }
                board.place(pos, reply);
                value = value.min(self.max_value(board, stone, alpha, beta, ply + 1));
                board.retract(pos);

                if self.pruning {
                    if value <= alpha {
                        // Alpha cutoff
                        return value;
                    }
                    beta = beta.min(value);
                }
            }
        }

        value
    }

    /// Maximizing ply: the root mover places next.
    fn max_value(
        &mut self,
        board: &mut Board,
        stone: Stone,
        mut alpha: i32,
        beta: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;

        if self.is_terminal(board, stone, ply) {
            return self.evaluator.evaluate(board, stone);
        }

        let mut value = i32::MIN;

        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if !board.is_legal(pos) {
                    continue;
                }
                board.place(pos, stone);
                value = value.max(self.min_value(board, stone, alpha, beta, ply + 1));
                board.retract(pos);

                if self.pruning {
                    if value >= beta {
                        // Beta cutoff
                        return value;
                    }
                    alpha = alpha.max(value);
                }
            }
        }

        value
    }

    /// Terminal test, identical at every node: horizon reached, board
    /// full, or the root mover already holding five in a row.
    fn is_terminal(&self, board: &Board, stone: Stone, ply: u32) -> bool {
        ply == self.max_depth || board.is_full() || has_five_in_row(board, stone)
    }
}
