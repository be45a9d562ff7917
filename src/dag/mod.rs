// src/dag/mod.rs

//! Graph store and topological ordering.
//!
//! - [`graph`] holds the adjacency structure and structural queries.
//! - [`topo`] adds Kahn's-algorithm ordering and cycle detection to [`Dag`].

pub mod graph;
pub mod topo;

pub use graph::{Dag, Edge};
