//! # Graph Module
//!
//! The dense directed graph the cycle enumerator works on, plus the random
//! edge producer the CLI uses to fill it.
//!
//! ## Components
//!
//! - **Graph**: fixed vertex count with an `n × n` adjacency relation
//! - **RandomEdgeGenerator**: flips an [`EdgeCoin`] once per ordered vertex
//!   pair and adds the edges that come up `true`
//! - **DensityCoin** / **ScriptedCoin**: seeded-random and scripted coins
//!
//! ## Example
//!
//! ```
//! use ferris_loop::graph::{DensityCoin, Graph, RandomEdgeGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::new(3)?;
//! graph.set_edge(0, 1, true)?;
//! assert!(graph.has_edge(0, 1)?);
//! assert!(graph.has_edge(3, 0).is_err());
//!
//! let coin = DensityCoin::seeded(100, 42)?;
//! let full = RandomEdgeGenerator::new(coin).generate(3)?;
//! assert_eq!(full.edge_count(), 9);
//! # Ok(())
//! # }
//! ```

mod generator;
mod types;

pub use generator::{DensityCoin, EdgeCoin, RandomEdgeGenerator, ScriptedCoin};
pub use types::Graph;
