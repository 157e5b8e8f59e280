//! Random graph configuration shared by every command

use crate::common::GraphArgs;
use crate::error::FerrisLoopError;

/// Where the graph under test comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSourceConfig {
    /// Requested vertex count; negative values are rejected when the graph
    /// is built, not here
    pub vertex_count: i64,
    /// Edge probability in percent
    pub density: u32,
    /// RNG seed, `None` for a fresh one
    pub seed: Option<u64>,
}

impl GraphSourceConfig {
    pub fn builder() -> GraphSourceConfigBuilder {
        GraphSourceConfigBuilder::default()
    }

    pub fn from_args(args: &GraphArgs) -> Result<Self, FerrisLoopError> {
        Self::builder()
            .vertex_count(args.nodes)
            .density(args.density)
            .seed(args.seed)
            .build()
    }
}

/// Builder for GraphSourceConfig
#[derive(Default)]
pub struct GraphSourceConfigBuilder {
    vertex_count: Option<i64>,
    density: Option<u32>,
    seed: Option<u64>,
}

impl GraphSourceConfigBuilder {
    pub fn vertex_count(mut self, vertex_count: i64) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    pub fn density(mut self, density: u32) -> Self {
        self.density = Some(density);
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<GraphSourceConfig, FerrisLoopError> {
        let density = self
            .density
            .ok_or_else(|| FerrisLoopError::ConfigurationError {
                message: "Missing required field: density".to_string(),
            })?;
        if density > 100 {
            return Err(FerrisLoopError::ConfigurationError {
                message: format!("Edge density must be between 0 and 100, got {density}"),
            });
        }

        Ok(GraphSourceConfig {
            vertex_count: self
                .vertex_count
                .ok_or_else(|| FerrisLoopError::ConfigurationError {
                    message: "Missing required field: vertex_count".to_string(),
                })?,
            density,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_complete() {
        let config = GraphSourceConfig::builder()
            .vertex_count(7)
            .density(25)
            .seed(Some(3))
            .build()
            .unwrap();
        assert_eq!(
            config,
            GraphSourceConfig {
                vertex_count: 7,
                density: 25,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn test_missing_vertex_count() {
        let err = GraphSourceConfig::builder().density(10).build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: vertex_count"
        );
    }

    #[test]
    fn test_density_out_of_range() {
        let err = GraphSourceConfig::builder()
            .vertex_count(3)
            .density(150)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn test_negative_vertex_count_passes_through() {
        let config = GraphSourceConfig::builder()
            .vertex_count(-5)
            .density(0)
            .build()
            .unwrap();
        assert_eq!(config.vertex_count, -5);
    }
}
