//! Filesystem layer for the Elm IDE support crates
//!
//! Provides predicate-driven directory walking, safe text I/O and a
//! format-agnostic configuration store.

pub mod config;
pub mod error;
pub mod io;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use walk::{IgnorePredicate, Walker};
