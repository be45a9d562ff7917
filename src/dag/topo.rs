// src/dag/topo.rs

//! Topological sorting via Kahn's algorithm.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::dag::graph::Dag;
use crate::errors::DagError;

impl Dag {
    /// Compute a linear order in which every edge points forward.
    ///
    /// In-degrees count edge occurrences, so a parallel edge must be
    /// consumed once per copy before its target becomes ready. Nodes that
    /// are ready at the same time come out in `HashMap` order, which is not
    /// deterministic.
    ///
    /// Fails with [`DagError::EmptyGraph`] when there are no nodes and with
    /// [`DagError::CycleDetected`] when some nodes can never become ready.
    pub fn topological_order(&self) -> Result<Vec<String>, DagError> {
        if self.nodes.is_empty() {
            return Err(DagError::EmptyGraph);
        }

        let mut in_degree: HashMap<&str, usize> =
            self.nodes.keys().map(|id| (id.as_str(), 0)).collect();
        for child in self.nodes.values().flat_map(|n| n.children.iter()) {
            if let Some(deg) = in_degree.get_mut(child.as_str()) {
                *deg += 1;
            }
        }

        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(self.nodes.len());
        while let Some(id) = queue.pop_front() {
            trace!(node = id, "emitting node");
            order.push(id.to_string());

            for child in self.children(id) {
                if let Some(deg) = in_degree.get_mut(child.as_str()) {
                    *deg = deg.saturating_sub(1);
                    if *deg == 0 {
                        queue.push_back(child.as_str());
                    }
                }
            }
        }

        if order.len() != self.nodes.len() {
            debug!(
                sorted = order.len(),
                total = self.nodes.len(),
                "topological sort stalled; graph has a cycle"
            );
            return Err(DagError::CycleDetected);
        }

        Ok(order)
    }

    /// `true` iff [`Dag::topological_order`] fails with a cycle.
    ///
    /// An empty graph is not cyclic.
    pub fn has_cycle(&self) -> bool {
        matches!(self.topological_order(), Err(DagError::CycleDetected))
    }
}
