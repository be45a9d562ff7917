// src/config/model.rs

use serde::Deserialize;

/// Graph definition as read from a TOML file.
///
/// ```toml
/// nodes = ["lint"]
///
/// [[edge]]
/// from = "fetch"
/// to = "build"
///
/// [[edge]]
/// from = "build"
/// to = "test"
/// ```
///
/// Both keys are optional. Nodes that only appear in edges need not be
/// listed under `nodes`; that list exists for isolated nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGraphFile {
    #[serde(default)]
    pub nodes: Vec<String>,

    /// One entry per `[[edge]]` table. Repeats are kept as parallel edges.
    #[serde(default, rename = "edge")]
    pub edges: Vec<EdgeSpec>,
}

/// `[[edge]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}
