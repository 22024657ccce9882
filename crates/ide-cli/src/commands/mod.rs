//! Command implementations for ide-cli

pub mod listing;
pub mod replace;
pub mod serve;

pub use listing::{run_index, run_sources};
pub use replace::run_replace;
pub use serve::run_serve;
