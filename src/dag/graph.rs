// src/dag/graph.rs

use std::collections::HashMap;

use tracing::{debug, trace};

/// Internal node structure: stores immediate children and parents.
#[derive(Debug, Clone, Default)]
pub(crate) struct DagNode {
    /// Targets of outgoing edges, in edge-insertion order.
    pub(crate) children: Vec<String>,
    /// Sources of incoming edges, in edge-insertion order.
    pub(crate) parents: Vec<String>,
}

/// A single stored edge occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

/// In-memory directed graph keyed by node id.
///
/// Forward and reverse adjacency live side by side in one map entry per
/// node, so every id that appears in an adjacency list is also a key.
/// Parallel edges are kept: adding `a -> b` twice stores it twice.
///
/// Iteration over nodes follows `HashMap` order and is therefore
/// unspecified. Only the per-node order of children and parents is stable.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    pub(crate) nodes: HashMap<String, DagNode>,
}

impl Dag {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with no edges.
    ///
    /// Empty ids are ignored, as are ids that already exist.
    pub fn add_node(&mut self, id: &str) {
        if id.is_empty() {
            debug!("ignoring empty node id");
            return;
        }
        if !self.nodes.contains_key(id) {
            trace!(node = id, "adding node");
            self.nodes.insert(id.to_string(), DagNode::default());
        }
    }

    /// Append an edge `from -> to`, creating missing endpoints.
    ///
    /// No de-duplication takes place. An edge with an empty endpoint is
    /// dropped entirely and leaves the graph untouched.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from.is_empty() || to.is_empty() {
            debug!(from, to, "ignoring edge with empty endpoint");
            return;
        }

        self.add_node(from);
        self.add_node(to);

        trace!(from, to, "adding edge");
        if let Some(node) = self.nodes.get_mut(from) {
            node.children.push(to.to_string());
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.parents.push(from.to_string());
        }
    }

    /// All node ids, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Every stored edge occurrence, duplicates included.
    ///
    /// Edges leaving the same node come out in insertion order; the order
    /// across nodes is unspecified.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.nodes.iter().flat_map(|(from, node)| {
            node.children.iter().map(move |to| Edge {
                from: from.as_str(),
                to: to.as_str(),
            })
        })
    }

    /// Immediate parents of `id`; empty if `id` is unknown.
    pub fn parents(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.parents.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate children of `id`; empty if `id` is unknown.
    pub fn children(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of incoming edges, counted with multiplicity.
    pub fn in_degree(&self, id: &str) -> usize {
        self.parents(id).len()
    }

    /// Number of outgoing edges, counted with multiplicity.
    pub fn out_degree(&self, id: &str) -> usize {
        self.children(id).len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edge occurrences.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.children.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes without incoming edges, in unspecified order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parents.is_empty())
            .map(|(id, _)| id.as_str())
    }
}

impl<A, B> Extend<(A, B)> for Dag
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from.as_ref(), to.as_ref());
        }
    }
}

impl<A, B> FromIterator<(A, B)> for Dag
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut dag = Dag::new();
        dag.extend(iter);
        dag
    }
}
