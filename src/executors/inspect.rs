//! Inspect command executor

use std::time::Instant;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::detector::CycleEnumerator;
use crate::executors::{CommandExecutor, generate_graph, write_report};
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Looking for simple cycles in a random graph...\n",
            style("🎡").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        let graph = generate_graph(&config.source, progress.as_mut())
            .wrap_err("Failed to generate graph")?;

        if let Some(p) = progress.as_mut() {
            p.start_enumeration(graph.size());
        }

        let started = Instant::now();
        let cycles =
            CycleEnumerator::new().find_all_simple_cycles_with_progress(&graph, progress.as_ref());
        let elapsed = started.elapsed();

        if let Some(p) = progress.as_mut() {
            p.finish_enumeration(cycles.cycle_count());
        }

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_cycles)
                .with_elapsed(elapsed)
                .generate_report(&cycles),
            OutputFormat::Json => JsonReportGenerator::new()
                .with_max_cycles(config.max_cycles)
                .with_elapsed(elapsed)
                .generate_report(&cycles),
        }
        .wrap_err("Failed to generate report")?;

        write_report(&report, config.output.as_deref())?;

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && cycles.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
