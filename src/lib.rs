// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;

use std::io::Write;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::errors::Result;

pub use crate::dag::{Dag, Edge};
pub use crate::errors::{DagError, DagxError};

/// What `run` found out about the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Acyclic,
    Cyclic,
}

/// High-level entry point used by `main.rs`.
///
/// Loads the definition at `args.graph` and writes either the topological
/// order (one node per line) or, with `--check`, a one-line verdict to `out`.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<Outcome> {
    let dag = load_and_validate(&args.graph)?;
    info!(
        path = %args.graph.display(),
        nodes = dag.node_count(),
        edges = dag.edge_count(),
        "loaded graph"
    );

    if args.check {
        return report_check(&dag, out);
    }

    let order = dag.topological_order()?;
    for id in order.iter() {
        writeln!(out, "{id}")?;
    }
    debug!(len = order.len(), "printed topological order");
    Ok(Outcome::Acyclic)
}

fn report_check(dag: &Dag, out: &mut impl Write) -> Result<Outcome> {
    match dag.topological_order() {
        Ok(_) => {
            writeln!(out, "acyclic")?;
            Ok(Outcome::Acyclic)
        }
        Err(DagError::CycleDetected) => {
            writeln!(out, "cycle detected")?;
            Ok(Outcome::Cyclic)
        }
        Err(e @ DagError::EmptyGraph) => Err(e.into()),
    }
}
