//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod lineup;

use std::fs;
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::GraphSourceConfig;
use crate::constants::graph::RECOMMENDED_VERTEX_COUNT;
use crate::graph::{DensityCoin, Graph, RandomEdgeGenerator};
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Build the random graph described by `source`
///
/// When no seed was given a fresh one is drawn and printed, so the run can
/// be reproduced with `--seed`.
pub(crate) fn generate_graph(
    source: &GraphSourceConfig,
    progress: Option<&mut ProgressReporter>,
) -> Result<Graph> {
    if !RECOMMENDED_VERTEX_COUNT.contains(&source.vertex_count) {
        eprintln!(
            "{} {} vertices requested; {}-{} is recommended",
            style("⚠").yellow().bold(),
            style(source.vertex_count).yellow(),
            RECOMMENDED_VERTEX_COUNT.start(),
            RECOMMENDED_VERTEX_COUNT.end()
        );
    }

    let seed = source.seed.unwrap_or_else(rand::random);
    if source.seed.is_none() {
        eprintln!("  {} Seed: {}", style("→").dim(), style(seed).bold());
    }

    let coin = DensityCoin::seeded(source.density, seed)?;
    let mut generator = RandomEdgeGenerator::new(coin);

    match progress {
        Some(p) => {
            p.start_generation(source.vertex_count.max(0) as usize, source.density);
            let graph = generator.generate(source.vertex_count);
            p.finish_generation(graph.as_ref().map_or(0, Graph::edge_count));
            Ok(graph?)
        }
        None => Ok(generator.generate(source.vertex_count)?),
    }
}

/// Write a finished report to `output`, or to stdout
pub(crate) fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, report)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write report to '{}'", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).bold()
            );
        }
        None => print!("{report}"),
    }
    Ok(())
}
