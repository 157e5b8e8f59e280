//! JSON format report generation

use std::time::Duration;

use serde_json::json;

use super::{ReportGenerator, millis};
use crate::detector::CycleSet;
use crate::error::FerrisLoopError;

/// Emits every cycle as a 0-based closed path
///
/// `max_cycles` only limits the `cycles` array; `cycle_count` is always the
/// full total.
#[derive(Default)]
pub struct JsonReportGenerator {
    max_cycles: Option<usize>,
    elapsed: Option<Duration>,
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, cycles: &CycleSet) -> Result<String, FerrisLoopError> {
        let shown: Vec<_> = cycles
            .iter()
            .take(self.max_cycles.unwrap_or(usize::MAX))
            .map(|cycle| {
                json!({
                    "length": cycle.len(),
                    "path": cycle,
                })
            })
            .collect();

        let mut report = json!({
            "vertex_count": cycles.vertex_count(),
            "has_cycles": cycles.has_cycles(),
            "cycle_count": cycles.cycle_count(),
            "cycles": shown,
        });
        if let Some(elapsed) = self.elapsed {
            report["elapsed_ms"] = json!(millis(elapsed));
        }

        serde_json::to_string_pretty(&report).map_err(FerrisLoopError::Json)
    }
}
