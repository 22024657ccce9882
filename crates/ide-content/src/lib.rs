//! Range-addressed text editing for the Elm IDE support layer
//!
//! Applies line/column addressed edits to source files while leaving every
//! byte outside the edited range, line terminators included, untouched.

pub mod edit;
pub mod error;
pub mod position;
pub mod replace;

pub use edit::Edit;
pub use error::{Error, Result};
pub use position::{Position, Range};
pub use replace::{insert_in_file, read_range, replace_in_file, replace_in_str};
