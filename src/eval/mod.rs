//! Position evaluation for the search

pub mod heuristic;

// Re-exports
pub use heuristic::{Evaluator, StoneCount};
