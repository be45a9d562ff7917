// src/config/validate.rs

use tracing::debug;

use crate::config::model::RawGraphFile;
use crate::dag::Dag;
use crate::errors::{DagxError, Result};

impl TryFrom<RawGraphFile> for Dag {
    type Error = DagxError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_graph_file(&raw)?;

        let mut dag = Dag::new();
        for id in raw.nodes.iter() {
            dag.add_node(id);
        }
        for edge in raw.edges.iter() {
            dag.add_edge(&edge.from, &edge.to);
        }

        debug!(
            nodes = dag.node_count(),
            edges = dag.edge_count(),
            "built graph from definition"
        );
        Ok(dag)
    }
}

/// Check a raw definition before it is turned into a [`Dag`].
///
/// `Dag` silently drops empty ids; a definition file containing one is
/// almost certainly a typo, so it is rejected here instead.
pub fn validate_graph_file(raw: &RawGraphFile) -> Result<()> {
    validate_node_ids(raw)?;
    validate_edge_endpoints(raw)?;
    Ok(())
}

fn validate_node_ids(raw: &RawGraphFile) -> Result<()> {
    if let Some(pos) = raw.nodes.iter().position(|id| id.trim().is_empty()) {
        return Err(DagxError::ConfigError(format!(
            "`nodes` entry {} is empty",
            pos
        )));
    }
    Ok(())
}

fn validate_edge_endpoints(raw: &RawGraphFile) -> Result<()> {
    for (pos, edge) in raw.edges.iter().enumerate() {
        if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
            return Err(DagxError::ConfigError(format!(
                "[[edge]] {} has an empty endpoint (from = '{}', to = '{}')",
                pos, edge.from, edge.to
            )));
        }
    }
    Ok(())
}
