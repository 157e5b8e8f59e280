//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output, 1-based vertex labels
//! - json: JSON format for programmatic use, 0-based vertex indices
//! - lineup: edge listings of a graph in either format

pub mod human;
pub mod json;
pub mod lineup;

use std::time::Duration;

use crate::detector::CycleSet;
use crate::error::FerrisLoopError;

/// Common trait for all cycle report generators
pub trait ReportGenerator {
    /// Generate a report from one enumeration result
    fn generate_report(&self, cycles: &CycleSet) -> Result<String, FerrisLoopError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use lineup::LineupReportGenerator;

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

fn format_millis(elapsed: Duration) -> String {
    format!("{:.4}", millis(elapsed))
}

/// Vertex labels as people count them
fn one_based(vertices: &[usize]) -> impl Iterator<Item = usize> + '_ {
    vertices.iter().map(|v| v + 1)
}
