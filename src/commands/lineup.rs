//! Lineup command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphSourceConfig, LineupConfig};
use crate::error::FerrisLoopError;

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self, FerrisLoopError> {
        match command {
            Commands::Lineup { graph, format } => LineupConfig::builder()
                .with_source(GraphSourceConfig::from_args(&graph)?)
                .with_format(format.format)
                .build(),
            _ => Err(FerrisLoopError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command for listing the edges of a random graph
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}
