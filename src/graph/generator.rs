//! Random edge production
//!
//! The generator is the only thing that fills a [`Graph`] in the CLI. Its
//! randomness comes from an [`EdgeCoin`], so tests can swap the seeded RNG
//! for a scripted sequence of outcomes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Graph;
use crate::error::FerrisLoopError;

/// Source of "should this edge exist" decisions
pub trait EdgeCoin {
    fn flip(&mut self) -> bool;
}

/// Coin that lands on `true` with probability `density` percent
pub struct DensityCoin<R = StdRng> {
    rng: R,
    density: u32,
}

impl DensityCoin<StdRng> {
    /// Deterministic coin backed by a seeded [`StdRng`]
    pub fn seeded(density: u32, seed: u64) -> Result<Self, FerrisLoopError> {
        Self::with_rng(density, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DensityCoin<R> {
    pub fn with_rng(density: u32, rng: R) -> Result<Self, FerrisLoopError> {
        if density > 100 {
            return Err(FerrisLoopError::ConfigurationError {
                message: format!("Edge density must be between 0 and 100, got {density}"),
            });
        }
        Ok(Self { rng, density })
    }

    pub fn density(&self) -> u32 {
        self.density
    }
}

impl<R: Rng> EdgeCoin for DensityCoin<R> {
    fn flip(&mut self) -> bool {
        self.rng.gen_range(0..100) < self.density
    }
}

/// Coin that replays a fixed list of outcomes, then keeps answering `false`
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoin {
    outcomes: VecDeque<bool>,
}

impl ScriptedCoin {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

impl EdgeCoin for ScriptedCoin {
    fn flip(&mut self) -> bool {
        self.outcomes.pop_front().unwrap_or(false)
    }
}

/// Fills a graph by flipping one coin per ordered vertex pair
pub struct RandomEdgeGenerator<C> {
    coin: C,
}

impl<C: EdgeCoin> RandomEdgeGenerator<C> {
    pub fn new(coin: C) -> Self {
        Self { coin }
    }

    /// Visit every `(i, j)` row-major, self-pairs included, and add the edge
    /// whenever the coin says so. Existing edges are never removed.
    pub fn populate(&mut self, graph: &mut Graph) -> Result<(), FerrisLoopError> {
        let n = graph.size();
        for from in 0..n {
            for to in 0..n {
                if self.coin.flip() {
                    graph.set_edge(from, to, true)?;
                }
            }
        }
        Ok(())
    }

    /// Build a fresh graph of `vertex_count` vertices and populate it
    pub fn generate(&mut self, vertex_count: i64) -> Result<Graph, FerrisLoopError> {
        let mut graph = Graph::new(vertex_count)?;
        self.populate(&mut graph)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::GraphError;

    #[test]
    fn test_zero_density_has_no_edges() {
        let coin = DensityCoin::seeded(0, 7).unwrap();
        let graph = RandomEdgeGenerator::new(coin).generate(10).unwrap();

        for i in 0..10 {
            for j in 0..10 {
                assert!(!graph.has_edge(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_full_density_fills_matrix() {
        let coin = DensityCoin::seeded(100, 7).unwrap();
        let graph = RandomEdgeGenerator::new(coin).generate(4).unwrap();
        assert_eq!(graph.edge_count(), 16);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let first = RandomEdgeGenerator::new(DensityCoin::seeded(40, 1234).unwrap())
            .generate(8)
            .unwrap();
        let second = RandomEdgeGenerator::new(DensityCoin::seeded(40, 1234).unwrap())
            .generate(8)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_density_above_hundred_is_rejected() {
        let err = DensityCoin::seeded(101, 0).err().unwrap();
        assert!(matches!(err, FerrisLoopError::ConfigurationError { .. }));
    }

    #[test]
    fn test_scripted_coin_is_row_major() {
        // 2x2: (0,0) (0,1) (1,0) (1,1)
        let coin = ScriptedCoin::new([false, true, true, false]);
        let graph = RandomEdgeGenerator::new(coin).generate(2).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_populate_never_clears_edges() {
        let mut graph = Graph::with_size(2);
        graph.set_edge(1, 1, true).unwrap();

        let mut generator = RandomEdgeGenerator::new(ScriptedCoin::new([true]));
        generator.populate(&mut graph).unwrap();

        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_generate_negative_size() {
        let err = RandomEdgeGenerator::new(ScriptedCoin::default())
            .generate(-5)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            FerrisLoopError::Graph(GraphError::InvalidSize { size: -5 })
        ));
    }
}
