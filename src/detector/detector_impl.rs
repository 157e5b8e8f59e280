use std::fmt;

use serde::Serialize;

use crate::graph::Graph;
use crate::progress::ProgressReporter;

/// A simple directed cycle, stored as a closed path that starts and ends at
/// its smallest vertex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    path: Vec<usize>,
}

impl Cycle {
    /// Close `open_path` back onto its first vertex
    fn close(open_path: &[usize]) -> Self {
        let mut path = Vec::with_capacity(open_path.len() + 1);
        path.extend_from_slice(open_path);
        path.push(open_path[0]);
        Self { path }
    }

    /// The closed path `[v0, v1, …, vk-1, v0]`
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The distinct vertices `[v0, v1, …, vk-1]` in traversal order
    pub fn vertices(&self) -> &[usize] {
        &self.path[..self.path.len() - 1]
    }

    /// Number of distinct vertices (equivalently, of edges)
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    /// Always false; a cycle has at least one vertex
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> usize {
        self.path[0]
    }

    pub fn is_self_loop(&self) -> bool {
        self.len() == 1
    }

    fn is_canonical(&self) -> bool {
        self.vertices().iter().all(|&v| v >= self.start())
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// Every simple cycle of one graph, shortest first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleSet {
    vertex_count: usize,
    cycles: Vec<Cycle>,
}

impl CycleSet {
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Vertex count of the graph the cycles were taken from
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cycle> {
        self.cycles.iter()
    }

    pub fn into_vec(self) -> Vec<Cycle> {
        self.cycles
    }
}

impl<'a> IntoIterator for &'a CycleSet {
    type Item = &'a Cycle;
    type IntoIter = std::slice::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

/// Per-start-vertex search state. Lives for one start vertex only.
struct Search<'g> {
    graph: &'g Graph,
    start: usize,
    on_path: Vec<bool>,
    path: Vec<usize>,
}

impl Search<'_> {
    fn explore(&mut self, current: usize, found: &mut Vec<Cycle>) {
        let graph = self.graph;
        for next in graph.successors(current) {
            if next == self.start {
                found.push(Cycle::close(&self.path));
            } else if next > self.start && !self.on_path[next] {
                self.on_path[next] = true;
                self.path.push(next);
                self.explore(next, found);
                self.path.pop();
                self.on_path[next] = false;
            }
        }
    }
}

/// Enumerator for the simple cycles of a [`Graph`]
///
/// Runs a backtracking depth-first search from every vertex `s` in ascending
/// order, only stepping onto vertices larger than `s`. A cycle is therefore
/// reported exactly once, from its smallest vertex, and no rotation needs to
/// be filtered out afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEnumerator;

impl CycleEnumerator {
    pub fn new() -> Self {
        Self
    }

    /// Find every simple cycle, sorted by length
    ///
    /// Cycles of equal length keep discovery order: by start vertex, then by
    /// depth-first visiting order with neighbours taken in ascending index.
    pub fn find_all_simple_cycles(&self, graph: &Graph) -> CycleSet {
        self.find_all_simple_cycles_with_progress(graph, None)
    }

    pub(crate) fn find_all_simple_cycles_with_progress(
        &self,
        graph: &Graph,
        progress: Option<&ProgressReporter>,
    ) -> CycleSet {
        let n = graph.size();
        let mut cycles = Vec::new();

        for start in 0..n {
            let mut search = Search {
                graph,
                start,
                on_path: vec![false; n],
                path: vec![start],
            };
            search.on_path[start] = true;
            search.explore(start, &mut cycles);

            if let Some(p) = progress {
                p.start_vertex_done(start);
            }
        }

        debug_assert!(
            cycles.iter().all(Cycle::is_canonical),
            "every cycle must start at its smallest vertex"
        );

        // Vec::sort_by_key is stable, so discovery order breaks ties
        cycles.sort_by_key(Cycle::len);

        CycleSet {
            vertex_count: n,
            cycles,
        }
    }
}
