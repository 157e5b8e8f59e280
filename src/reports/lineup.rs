//! Edge listing for the lineup command

use std::fmt::Write;

use console::style;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::FerrisLoopError;
use crate::graph::Graph;
use crate::utils::string::pluralize;

pub struct LineupReportGenerator {
    format: OutputFormat,
}

impl LineupReportGenerator {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn generate_report(&self, graph: &Graph) -> Result<String, FerrisLoopError> {
        match self.format {
            OutputFormat::Human => Self::human(graph),
            OutputFormat::Json => Self::json(graph),
        }
    }

    fn human(graph: &Graph) -> Result<String, FerrisLoopError> {
        let mut output = String::new();
        let edge_count = graph.edge_count();

        writeln!(
            output,
            "\n{} {} {}, {} {}:",
            style("🎡").cyan(),
            style(graph.size()).bold(),
            if graph.size() == 1 {
                "vertex"
            } else {
                "vertices"
            },
            style(edge_count).bold(),
            pluralize("edge", edge_count)
        )?;

        for from in 0..graph.size() {
            let targets: Vec<String> = graph
                .successors(from)
                .map(|to| (to + 1).to_string())
                .collect();
            if targets.is_empty() {
                continue;
            }
            writeln!(
                output,
                "  {} {} {}",
                style(from + 1).yellow().bold(),
                style("→").dim(),
                targets.join(", ")
            )?;
        }

        Ok(output)
    }

    fn json(graph: &Graph) -> Result<String, FerrisLoopError> {
        let edges: Vec<[usize; 2]> = graph.edges().map(|(from, to)| [from, to]).collect();
        let report = json!({
            "vertex_count": graph.size(),
            "edge_count": edges.len(),
            "edges": edges,
        });

        serde_json::to_string_pretty(&report).map_err(FerrisLoopError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::with_size(3);
        for (from, to) in [(0, 1), (0, 2), (2, 2)] {
            graph.set_edge(from, to, true).unwrap();
        }
        graph
    }

    #[test]
    fn test_human_lineup() {
        let report = LineupReportGenerator::new(OutputFormat::Human)
            .generate_report(&sample_graph())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("3 vertices, 3 edges:"));
        assert!(report.contains("  1 → 2, 3\n"));
        assert!(report.contains("  3 → 3\n"));
        assert!(!report.contains("  2 →"));
    }

    #[test]
    fn test_human_lineup_groups_targets_by_source() {
        let mut graph = Graph::with_size(4);
        for (from, to) in [(3, 0), (1, 3), (3, 2), (1, 0), (0, 3)] {
            graph.set_edge(from, to, true).unwrap();
        }
        let report = LineupReportGenerator::new(OutputFormat::Human)
            .generate_report(&graph)
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        let rows: Vec<&str> = report.lines().filter(|line| line.contains(" → ")).collect();
        assert_eq!(rows, vec!["  1 → 4", "  2 → 1, 4", "  4 → 1, 3"]);
    }

    #[test]
    fn test_json_lineup() {
        let report = LineupReportGenerator::new(OutputFormat::Json)
            .generate_report(&sample_graph())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["vertex_count"], 3);
        assert_eq!(json["edge_count"], 3);
        assert_eq!(json["edges"], json!([[0, 1], [0, 2], [2, 2]]));
    }
}
