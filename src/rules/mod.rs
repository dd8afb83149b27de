//! Game rules: win detection

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line, has_five_in_row};
