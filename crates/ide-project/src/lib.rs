//! Elm project knowledge for the IDE support layer.
//!
//! This crate reads a project's `elm.json`, turns it into ignore predicates
//! for [`ide_fs::Walker`], and uses them to list first-party sources and to
//! assemble the corpus a search/autocomplete index should cover.

pub mod cache;
pub mod constants;
pub mod dependency;
pub mod error;
pub mod indexer;
pub mod lister;
pub mod manifest;
pub mod predicate;

pub use cache::DependencyCache;
pub use constants::{MANIFEST_FILENAME, ProjectPath, SOURCE_EXTENSION};
pub use dependency::DependencyId;
pub use error::{Error, Result};
pub use indexer::{IndexEntry, ProjectIndexer, list_files_for_index};
pub use lister::list_user_source_files;
pub use manifest::ManifestDescriptor;
pub use predicate::{DependencyCachePredicate, ProjectIndexPredicate, UserSourcePredicate};
