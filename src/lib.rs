//! Terminal Gomoku with a fixed-depth minimax engine
//!
//! Five-in-a-row on a square board of any side length, played between
//! any mix of terminal input and engine participants. The engine runs a
//! full-width minimax with alpha-beta pruning over one shared board,
//! placing and retracting speculative stones instead of copying state.
//!
//! # Architecture
//!
//! - [`board`]: grid state and the place/retract mutation protocol
//! - [`rules`]: five-in-a-row detection
//! - [`eval`]: position evaluation, injectable into the search
//! - [`search`]: fixed-depth minimax with alpha-beta pruning
//! - [`player`]: terminal and engine participants
//! - [`game`]: the turn loop
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Pos, Searcher, Stone};
//!
//! let mut board = Board::new(15);
//! board.place(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new(2);
//! if let Some(reply) = searcher.decide_move(&mut board, Stone::White) {
//!     board.place(reply, Stone::White);
//! }
//! assert_eq!(board.stone_count(Stone::White), 1);
//! ```

pub mod board;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use eval::{Evaluator, StoneCount};
pub use game::{Game, Outcome};
pub use player::{EnginePlayer, HumanPlayer, Player};
pub use rules::{find_five_line, has_five_in_row};
pub use search::{SearchResult, Searcher};
