//! # Configuration Module
//!
//! Configuration structures for the ferris-loop commands. Each command has
//! its own config with a builder; the graph source settings are shared.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: generate a graph, enumerate and report its cycles
//! - **LineupConfig**: generate a graph and list its edges
//! - **GraphSourceConfig**: vertex count, density and seed of the random
//!   graph
//!
//! ## Example
//!
//! ```
//! use ferris_loop::cli::OutputFormat;
//! use ferris_loop::common::ConfigBuilder;
//! use ferris_loop::config::{GraphSourceConfig, InspectConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = GraphSourceConfig::builder()
//!     .vertex_count(6)
//!     .density(40)
//!     .seed(Some(7))
//!     .build()?;
//!
//! let config = InspectConfig::builder()
//!     .with_source(source)
//!     .with_format(OutputFormat::Json)
//!     .with_max_cycles(None)
//!     .with_error_on_cycles(false)
//!     .build()?;
//!
//! assert_eq!(config.source.vertex_count, 6);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod inspect;
pub mod lineup;

pub use common::GraphSourceConfig;
pub use inspect::InspectConfig;
pub use lineup::LineupConfig;
