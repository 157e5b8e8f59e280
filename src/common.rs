//! Common functionality shared across commands

use clap::Args;

use crate::constants::graph::{DEFAULT_DENSITY, DEFAULT_VERTEX_COUNT};
use crate::constants::output::DEFAULT_MAX_CYCLES;

/// Random graph arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of vertices
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_VERTEX_COUNT,
        allow_hyphen_values = true,
        env = "FERRIS_LOOP_NODES"
    )]
    pub nodes: i64,

    /// Probability of each directed edge, in percent (0-100)
    #[arg(short, long, default_value_t = DEFAULT_DENSITY, env = "FERRIS_LOOP_DENSITY")]
    pub density: u32,

    /// Seed for the random generator (a fresh seed is drawn if omitted)
    #[arg(long, env = "FERRIS_LOOP_SEED")]
    pub seed: Option<u64>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "FERRIS_LOOP_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display
    #[arg(long, default_value_t = DEFAULT_MAX_CYCLES, env = "FERRIS_LOOP_MAX_CYCLES")]
    pub max_cycles: usize,

    /// Display every cycle (overrides --max-cycles)
    #[arg(long, env = "FERRIS_LOOP_ALL_CYCLES")]
    pub all_cycles: bool,
}

impl CycleDisplayArgs {
    /// Display limit, `None` meaning "show everything"
    pub fn limit(&self) -> Option<usize> {
        if self.all_cycles {
            None
        } else {
            Some(self.max_cycles)
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::FerrisLoopError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::FerrisLoopError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_limit() {
        let args = CycleDisplayArgs {
            max_cycles: 3,
            all_cycles: false,
        };
        assert_eq!(args.limit(), Some(3));
    }

    #[test]
    fn test_cycle_display_all_overrides_max() {
        let args = CycleDisplayArgs {
            max_cycles: 3,
            all_cycles: true,
        };
        assert_eq!(args.limit(), None);
    }
}
