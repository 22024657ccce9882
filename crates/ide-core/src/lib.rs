//! Host-facing layer of the Elm IDE support crates
//!
//! This crate ties the Layer 0 crates together behind a [`Session`] and a
//! closed set of [`Command`]s:
//!
//! - **Configuration**: [`IdeConfig`], loaded from TOML, JSON or YAML
//! - **Session**: the open project and configuration, passed to every call
//! - **Dispatch**: one exhaustive [`dispatch`] from `Command` to `Response`
//!
//! # Architecture
//!
//! ```text
//!                 ide-cli / host
//!                       |
//!                   ide-core
//!                       |
//!         +-------------+-------------+
//!         |             |             |
//!      ide-fs      ide-content   ide-project
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ide_core::{Command, IdeConfig, Response, Session, dispatch};
//!
//! let session = Session::new(IdeConfig::default()).with_project("/work/app");
//! match dispatch(&session, Command::ListUserSourceFiles { project_root: None }) {
//!     Response::UserSourceFiles(files) => println!("{} sources", files.len()),
//!     other => eprintln!("{other:?}"),
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod operations;
pub mod session;

pub use command::{Command, Response, dispatch};
pub use config::IdeConfig;
pub use error::{Error, ErrorKind, Result};
pub use operations::{list_files_for_index, list_user_source_files, replace_in_file};
pub use session::Session;
