//! Lineup command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::LineupConfig;
use crate::executors::{CommandExecutor, generate_graph, write_report};
use crate::reports::LineupReportGenerator;

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Lining up the edges...\n", style("🎡").cyan());

        let graph =
            generate_graph(&config.source, None).wrap_err("Failed to generate graph")?;

        let report = LineupReportGenerator::new(config.format)
            .generate_report(&graph)
            .wrap_err("Failed to generate edge lineup")?;

        write_report(&report, None)
    }
}
