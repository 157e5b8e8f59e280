//! Configuration constants for ferris-loop
//!
//! This module contains the defaults used by the CLI. Every one of them can
//! be overridden through command-line flags or `FERRIS_LOOP_*` environment
//! variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames; the last one is shown once the spinner finishes
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎡 ", "🎡⊙", "🎡◐", "🎡◓", "🎡◑", "🎡◒", "🎡○", "🎡●", "✓",
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Number of cycles listed in a report unless told otherwise
    pub const DEFAULT_MAX_CYCLES: usize = 5;
}

/// Random graph configuration
pub mod graph {
    use std::ops::RangeInclusive;

    pub const DEFAULT_VERTEX_COUNT: i64 = 5;

    /// Edge probability in percent
    pub const DEFAULT_DENSITY: u32 = 30;

    /// Vertex counts that enumerate quickly enough to stay interactive
    pub const RECOMMENDED_VERTEX_COUNT: RangeInclusive<i64> = 2..=20;
}
