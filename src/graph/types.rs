//! Core graph types
//!
//! This module contains the dense adjacency relation that the cycle
//! enumerator walks.

use crate::error::GraphError;

/// A directed graph over the vertices `0..size()`, stored as a dense
/// row-major adjacency matrix
///
/// Self-loops are allowed; parallel edges are not representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<bool>,
}

impl Graph {
    /// Create an edgeless graph, rejecting negative vertex counts and counts
    /// whose `n * n` matrix cannot be allocated
    pub fn new(vertex_count: i64) -> Result<Self, GraphError> {
        let invalid = || GraphError::InvalidSize { size: vertex_count };
        let size = usize::try_from(vertex_count).map_err(|_| invalid())?;
        let cells = size.checked_mul(size).ok_or_else(invalid)?;

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(cells).map_err(|_| invalid())?;
        adjacency.resize(cells, false);

        Ok(Self {
            vertex_count: size,
            adjacency,
        })
    }

    /// Create an edgeless graph with `vertex_count` vertices
    ///
    /// # Panics
    ///
    /// Panics if `vertex_count * vertex_count` overflows `usize`. Use
    /// [`Graph::new`] for counts that come from user input.
    pub fn with_size(vertex_count: usize) -> Self {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .expect("adjacency matrix size overflows usize");
        Self {
            vertex_count,
            adjacency: vec![false; cells],
        }
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Add (`present = true`) or remove the edge `from → to`
    pub fn set_edge(&mut self, from: usize, to: usize, present: bool) -> Result<(), GraphError> {
        let slot = self.slot(from, to)?;
        self.adjacency[slot] = present;
        Ok(())
    }

    /// Whether the edge `from → to` exists
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, GraphError> {
        let slot = self.slot(from, to)?;
        Ok(self.adjacency[slot])
    }

    /// Number of present edges, self-loops included
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|&&present| present).count()
    }

    /// Present edges as `(from, to)` pairs in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count;
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(move |(slot, _)| (slot / n, slot % n))
    }

    /// Targets of `from` in ascending order
    ///
    /// Callers must pass an index below `size()`; the enumerator and the
    /// lineup report only ever walk vertices they got from this graph.
    pub(crate) fn successors(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.vertex_count;
        self.adjacency[from * n..(from + 1) * n]
            .iter()
            .enumerate()
            .filter_map(|(to, &present)| present.then_some(to))
    }

    fn slot(&self, from: usize, to: usize) -> Result<usize, GraphError> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return Err(GraphError::IndexOutOfRange {
                from,
                to,
                size: self.vertex_count,
            });
        }
        Ok(from * self.vertex_count + to)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_node_count_initialization() {
        let graph = Graph::new(10).unwrap();
        assert_eq!(graph.size(), 10);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_size_is_rejected() {
        assert_eq!(Graph::new(-5), Err(GraphError::InvalidSize { size: -5 }));
    }

    #[test]
    fn test_oversized_matrix_is_rejected() {
        // (2^32)^2 overflows a 64-bit usize
        let size = 1i64 << 32;
        assert_eq!(Graph::new(size), Err(GraphError::InvalidSize { size }));
        assert_eq!(
            Graph::new(i64::MAX),
            Err(GraphError::InvalidSize { size: i64::MAX })
        );
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_with_size_panics_on_overflow() {
        let _ = Graph::with_size(usize::MAX);
    }

    #[test]
    fn test_zero_size_is_valid() {
        let graph = Graph::new(0).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_fresh_graph_has_no_edges() {
        let n = 10;
        let graph = Graph::with_size(n);
        for i in 0..n {
            for j in 0..n {
                assert!(!graph.has_edge(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_set_and_clear_edge() {
        let mut graph = Graph::with_size(3);
        graph.set_edge(0, 2, true).unwrap();
        graph.set_edge(1, 1, true).unwrap();

        assert!(graph.has_edge(0, 2).unwrap());
        assert!(!graph.has_edge(2, 0).unwrap());
        assert!(graph.has_edge(1, 1).unwrap());
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 2), (1, 1)]);

        graph.set_edge(0, 2, false).unwrap();
        assert!(!graph.has_edge(0, 2).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut graph = Graph::with_size(3);
        let expected = GraphError::IndexOutOfRange {
            from: 3,
            to: 0,
            size: 3,
        };

        assert_eq!(graph.set_edge(3, 0, true), Err(expected.clone()));
        assert_eq!(graph.has_edge(3, 0), Err(expected));
        assert!(graph.has_edge(0, 7).is_err());

        // A rejected mutation leaves the relation untouched
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_successors_are_ascending() {
        let mut graph = Graph::with_size(4);
        graph.set_edge(1, 3, true).unwrap();
        graph.set_edge(1, 0, true).unwrap();
        graph.set_edge(1, 1, true).unwrap();

        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(graph.successors(2).count(), 0);
    }
}
