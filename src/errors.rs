// src/errors.rs

//! Crate-wide error types and aliases.

use thiserror::Error;

/// Structural failures of a topological sort.
///
/// These describe the caller's graph, not a transient condition, so there
/// is nothing to retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DagError {
    #[error("graph has no nodes; topological order is undefined")]
    EmptyGraph,

    #[error("cycle detected; no topological order exists")]
    CycleDetected,
}

impl DagError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            DagError::EmptyGraph => "dagx.empty_graph",
            DagError::CycleDetected => "dagx.cycle_detected",
        }
    }
}

#[derive(Error, Debug)]
pub enum DagxError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Dag(#[from] DagError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DagxError>;
