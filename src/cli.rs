// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_graph_path;

/// Command-line arguments for `dagx`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagx",
    version,
    about = "Print a topological order for a graph definition, or report its cycle.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph definition (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_graph_path())]
    pub graph: PathBuf,

    /// Only report whether the graph is acyclic.
    ///
    /// Exits non-zero when a cycle is found.
    #[arg(long)]
    pub check: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGX_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
