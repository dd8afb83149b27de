//! Search module for the Gomoku engine
//!
//! Fixed-depth minimax over every legal cell, with optional alpha-beta
//! pruning. There is no caching and no move ordering: each decision is
//! a single full-width pass.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
