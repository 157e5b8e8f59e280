//! Command implementations for ferris-loop CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Ride every loop in the graph
//! - lineup: See the full lineup of edges

pub mod inspect;
pub mod lineup;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
    }
}
