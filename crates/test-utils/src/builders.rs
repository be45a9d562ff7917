#![allow(dead_code)]

use anyhow::Context;
use dagx::Dag;
use dagx::config::{EdgeSpec, RawGraphFile};

/// Builder for `Dag` to simplify test setup.
pub struct DagBuilder {
    dag: Dag,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self { dag: Dag::new() }
    }

    pub fn node(mut self, id: &str) -> Self {
        self.dag.add_node(id);
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.dag.add_edge(from, to);
        self
    }

    /// Add `ids[0] -> ids[1] -> ... -> ids[n-1]`.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        for pair in ids.windows(2) {
            self.dag.add_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn build(self) -> Dag {
        self.dag
    }
}

impl Default for DagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RawGraphFile`, mirroring what a TOML definition holds.
pub struct GraphFileBuilder {
    raw: RawGraphFile,
}

impl GraphFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraphFile::default(),
        }
    }

    pub fn node(mut self, id: &str) -> Self {
        self.raw.nodes.push(id.to_string());
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.raw.edges.push(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
        });
        self
    }

    pub fn build_raw(self) -> RawGraphFile {
        self.raw
    }

    pub fn build(self) -> anyhow::Result<Dag> {
        Dag::try_from(self.raw).context("graph definition from builder failed validation")
    }
}

impl Default for GraphFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and validate an inline TOML definition.
pub fn dag_from_toml(src: &str) -> anyhow::Result<Dag> {
    let raw = dagx::config::load_from_str(src).context("invalid TOML graph definition")?;
    Dag::try_from(raw).context("graph definition failed validation")
}
