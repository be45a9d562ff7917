// src/config/mod.rs

//! Graph definition files.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a definition from disk or a string (`loader.rs`).
//! - Validate it and turn it into a [`crate::dag::Dag`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_graph_path, load_and_validate, load_from_path, load_from_str};
pub use model::{EdgeSpec, RawGraphFile};
pub use validate::validate_graph_file;
