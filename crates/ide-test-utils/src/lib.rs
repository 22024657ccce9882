//! Shared test utilities for the Elm IDE support workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll project trees. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`](project::TestProject), a temporary Elm
//!   project next to a temporary Elm home with a package store
//! - [`manifest`] — [`ManifestSpec`](manifest::ManifestSpec) builder for
//!   `elm.json` contents

pub mod manifest;
pub mod project;

pub use manifest::ManifestSpec;
pub use project::TestProject;
