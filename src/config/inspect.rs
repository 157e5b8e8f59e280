//! Inspect command configuration

use std::path::PathBuf;

use super::GraphSourceConfig;
use crate::cli::OutputFormat;

/// Configuration for the inspect command
///
/// This struct contains all options for generating a graph, enumerating its
/// cycles and reporting them.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Graph to generate
    pub source: GraphSourceConfig,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of cycles to list (None = all)
    pub max_cycles: Option<usize>,
    /// Report destination (None = stdout)
    pub output: Option<PathBuf>,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    source: Option<GraphSourceConfig>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    output: Option<PathBuf>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            format: None,
            max_cycles: None,
            output: None,
            error_on_cycles: None,
        }
    }

    pub fn with_source(mut self, source: GraphSourceConfig) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, crate::error::FerrisLoopError> {
        Ok(InspectConfig {
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
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::FerrisLoopError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
            output: self.output,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::FerrisLoopError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn source() -> GraphSourceConfig {
        GraphSourceConfig {
            vertex_count: 5,
            density: 30,
            seed: None,
        }
    }

    #[test]
    fn test_builder_defaults_output_to_stdout() {
        let config = InspectConfig::builder()
            .with_source(source())
            .with_format(OutputFormat::Human)
            .with_max_cycles(Some(5))
            .with_error_on_cycles(false)
            .build()
            .unwrap();

        assert_eq!(config.output, None);
        assert_eq!(config.max_cycles, Some(5));
    }

    #[test]
    fn test_builder_missing_format() {
        let err = InspectConfig::builder()
            .with_source(source())
            .with_max_cycles(None)
            .with_error_on_cycles(true)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}
