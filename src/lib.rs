//! # Ferris Loop - Enumerate Simple Cycles in Directed Graphs
//!
//! Ferris Loop lists every simple (elementary) directed cycle of a graph
//! stored as a dense adjacency matrix. Each cycle is reported exactly once,
//! starting from its smallest vertex, and the result is sorted by length.
//!
//! ## Main Components
//!
//! - **Graph**: fixed-size directed graph with an `n × n` adjacency relation
//! - **Detector**: the backtracking cycle enumerator
//! - **Reports**: human-readable and JSON renderings of the cycles found
//!
//! ## Usage
//!
//! ### Enumerating the cycles of a hand-built graph
//!
//! ```
//! use ferris_loop::detector::CycleEnumerator;
//! use ferris_loop::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(4)?;
//! for (from, to) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 2)] {
//!     graph.set_edge(from, to, true)?;
//! }
//!
//! let cycles = CycleEnumerator::new().find_all_simple_cycles(&graph);
//!
//! // Shortest first: 2 → 3 → 2, then 0 → 1 → 2 → 0
//! assert_eq!(cycles.cycle_count(), 2);
//! assert_eq!(cycles.cycles()[0].path(), &[2, 3, 2]);
//! assert_eq!(cycles.cycles()[1].path(), &[0, 1, 2, 0]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Random graphs and reports
//!
//! ```
//! use ferris_loop::detector::CycleEnumerator;
//! use ferris_loop::graph::{DensityCoin, RandomEdgeGenerator};
//! use ferris_loop::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // 6 vertices, every ordered pair present with 30% probability
//! let coin = DensityCoin::seeded(30, 2024)?;
//! let graph = RandomEdgeGenerator::new(coin).generate(6)?;
//!
//! let cycles = CycleEnumerator::new().find_all_simple_cycles(&graph);
//! let json = JsonReportGenerator::new().generate_report(&cycles)?;
//! assert!(json.contains("\"cycle_count\""));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
