use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, GraphArgs};

#[derive(Parser)]
#[command(
    name = "ferris-loop",
    about = "🎡 Enumerate every simple directed cycle in a random graph",
    long_about = "ferris-loop generates a random directed graph from a vertex count and an edge \
                  density, then lists every simple cycle in it, shortest first. Each cycle is \
                  reported once, starting from its smallest vertex.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ride every loop in the graph
    ///
    /// Generates a random graph and enumerates all of its simple cycles.
    #[command(
        long_about = "Generate a random directed graph and enumerate every simple cycle in it \
                      with a backtracking depth-first search. Cycles are sorted by length; the \
                      report shows the first few (see --max-cycles) together with the total \
                      count and the time the enumeration took. Self-loops count as cycles of \
                      length one."
    )]
    Inspect {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Write the report to a file instead of stdout
        #[arg(short, long, env = "FERRIS_LOOP_OUTPUT")]
        output: Option<PathBuf>,

        /// Exit with error code if cycles found
        #[arg(long, env = "FERRIS_LOOP_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// See the full lineup of edges
    ///
    /// Generates a random graph and lists its edges without searching for
    /// cycles.
    #[command(
        long_about = "Generate a random directed graph and print every edge it contains. Use \
                      the same --nodes, --density and --seed as an inspect run to see the graph \
                      that run worked on."
    )]
    Lineup {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
