//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphSourceConfig, InspectConfig};
use crate::error::FerrisLoopError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisLoopError> {
        match command {
            Commands::Inspect {
                graph,
                format,
                cycle_display,
                output,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_source(GraphSourceConfig::from_args(&graph)?)
                .with_format(format.format)
                .with_max_cycles(cycle_display.limit())
                .with_output(output)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(FerrisLoopError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for enumerating the cycles of a random graph
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_inspect_config_from_command() {
        let command = parse(&[
            "ferris-loop",
            "inspect",
            "--nodes",
            "8",
            "--density",
            "45",
            "--seed",
            "3",
            "--format",
            "json",
            "--max-cycles",
            "10",
            "--output",
            "cycles.json",
        ]);
        let config = InspectConfig::try_from(command).unwrap();

        assert_eq!(config.source.vertex_count, 8);
        assert_eq!(config.source.density, 45);
        assert_eq!(config.source.seed, Some(3));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.max_cycles, Some(10));
        assert_eq!(config.output, Some(PathBuf::from("cycles.json")));
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_inspect_all_cycles() {
        let command = parse(&["ferris-loop", "inspect", "--all-cycles"]);
        let config = InspectConfig::try_from(command).unwrap();
        assert_eq!(config.max_cycles, None);
    }

    #[test]
    fn test_inspect_rejects_density_over_hundred() {
        let command = parse(&["ferris-loop", "inspect", "--density", "120"]);
        assert!(InspectConfig::try_from(command).is_err());
    }

    #[test]
    fn test_wrong_command_type() {
        let command = parse(&["ferris-loop", "lineup"]);
        let err = InspectConfig::try_from(command).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid command type for InspectConfig"
        );
    }
}
