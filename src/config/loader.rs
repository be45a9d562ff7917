// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::RawGraphFile;
use crate::dag::Dag;
use crate::errors::Result;

/// Parse a graph definition from TOML text without validating it.
pub fn load_from_str(contents: &str) -> Result<RawGraphFile> {
    let raw: RawGraphFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Load a graph definition from a given path and return the raw model.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] to
/// get a [`Dag`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    load_from_str(&contents)
}

/// Load a graph definition from path, validate it and build the graph.
///
/// Cycles are not an error here; they are reported by
/// [`Dag::topological_order`] like for any other graph.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Dag> {
    let raw = load_from_path(path)?;
    Dag::try_from(raw)
}

/// `Dagx.toml` in the current working directory.
pub fn default_graph_path() -> PathBuf {
    PathBuf::from("Dagx.toml")
}
