//! Human-readable console report generation

use std::fmt::Write;
use std::time::Duration;

use console::style;

use super::{ReportGenerator, format_millis, one_based};
use crate::detector::CycleSet;
use crate::error::FerrisLoopError;
use crate::utils::string::pluralize;

/// Lists cycles with 1-based vertex labels
pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    elapsed: Option<Duration>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self {
            max_cycles,
            elapsed: None,
        }
    }

    /// Include how long the enumeration took
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, cycles: &CycleSet) -> Result<String, FerrisLoopError> {
        let mut output = String::new();
        let total = cycles.cycle_count();

        write!(
            output,
            "\n{} Found {} simple {} in a graph of {} {}",
            if cycles.has_cycles() {
                style("🔄").yellow()
            } else {
                style("✅").green()
            },
            style(total).bold(),
            pluralize("cycle", total),
            cycles.vertex_count(),
            if cycles.vertex_count() == 1 {
                "vertex"
            } else {
                "vertices"
            },
        )?;
        if let Some(elapsed) = self.elapsed {
            write!(output, " in {} ms", style(format_millis(elapsed)).cyan())?;
        }
        writeln!(output, ".")?;

        if !cycles.has_cycles() {
            return Ok(output);
        }
        writeln!(output)?;

        let shown = self.max_cycles.map_or(total, |limit| limit.min(total));
        for (i, cycle) in cycles.iter().take(shown).enumerate() {
            let labels: Vec<String> = one_based(cycle.path())
                .map(|label| label.to_string())
                .collect();
            writeln!(
                output,
                "  {} {} {}",
                style(format!("#{}", i + 1)).dim(),
                style(labels.join(" → ")).bold(),
                style(format!("(length {})", cycle.len())).dim()
            )?;
        }

        if shown < total {
            writeln!(
                output,
                "\n{} …and {} more hidden. Use --max-cycles or --all-cycles to see more.",
                style("ℹ️").blue(),
                style(total - shown).yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::CycleEnumerator;
    use crate::graph::Graph;

    fn triangle_with_loop() -> CycleSet {
        let mut graph = Graph::with_size(3);
        for (from, to) in [(0, 1), (1, 2), (2, 0), (2, 2)] {
            graph.set_edge(from, to, true).unwrap();
        }
        CycleEnumerator::new().find_all_simple_cycles(&graph)
    }

    #[test]
    fn test_human_report_no_cycles() {
        let cycles = CycleEnumerator::new().find_all_simple_cycles(&Graph::with_size(4));
        let report = console::strip_ansi_codes(
            &HumanReportGenerator::new(None)
                .generate_report(&cycles)
                .unwrap(),
        )
        .to_string();

        assert!(report.contains("Found 0 simple cycles in a graph of 4 vertices."));
        assert!(!report.contains("#1"));
    }

    #[test]
    fn test_human_report_uses_one_based_labels() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&triangle_with_loop())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("Found 2 simple cycles in a graph of 3 vertices"));
        assert!(report.contains("#1 3 → 3 (length 1)"));
        assert!(report.contains("#2 1 → 2 → 3 → 1 (length 3)"));
        assert!(!report.contains("more hidden"));
    }

    #[test]
    fn test_human_report_truncates() {
        let report = HumanReportGenerator::new(Some(1))
            .generate_report(&triangle_with_loop())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("#1 3 → 3"));
        assert!(!report.contains("#2"));
        assert!(report.contains("…and 1 more hidden"));
    }

    #[test]
    fn test_human_report_elapsed() {
        let report = HumanReportGenerator::new(None)
            .with_elapsed(Duration::from_micros(1500))
            .generate_report(&triangle_with_loop())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("in 1.5000 ms."));
    }
}
