//! Lineup command configuration

use super::GraphSourceConfig;
use crate::cli::OutputFormat;

/// Configuration for the lineup command
#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub source: GraphSourceConfig,
    pub format: OutputFormat,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct LineupConfigBuilder {
    source: Option<GraphSourceConfig>,
    format: Option<OutputFormat>,
}

impl LineupConfigBuilder {
    pub fn with_source(mut self, source: GraphSourceConfig) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for LineupConfigBuilder {
    type Config = LineupConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopError> {
        Ok(LineupConfig {
            source: self.source.ok_or_else(|| {
                crate::error::FerrisLoopError::ConfigurationError {
                    message: "Missing required field: source".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::FerrisLoopError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
        })
    }
}
