//! # Cycle Enumeration Module
//!
//! This module finds every simple (elementary) directed cycle of a
//! [`Graph`](crate::graph::Graph).
//!
//! ## Algorithm
//!
//! A backtracking depth-first search is started from each vertex `s` in
//! ascending order. The search only extends the current path onto vertices
//! with an index greater than `s`, and records a cycle whenever an edge leads
//! back to `s`. Each cycle is thus produced once, rotated so that it starts
//! at its smallest vertex. The result is then stably sorted by length.
//!
//! The number of simple cycles can grow exponentially with the vertex count;
//! there is no cap on the output.
//!
//! ## Key Components
//!
//! - **CycleEnumerator**: runs the search
//! - **CycleSet**: the sorted result of one run
//! - **Cycle**: one closed path `[v0, …, vk-1, v0]`
//!
//! ## Example
//!
//! ```
//! use ferris_loop::detector::CycleEnumerator;
//! use ferris_loop::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 → 1 → 2 → 0, plus a self-loop on 2
//! let mut graph = Graph::new(3)?;
//! graph.set_edge(0, 1, true)?;
//! graph.set_edge(1, 2, true)?;
//! graph.set_edge(2, 0, true)?;
//! graph.set_edge(2, 2, true)?;
//!
//! let cycles = CycleEnumerator::new().find_all_simple_cycles(&graph);
//!
//! assert_eq!(cycles.cycle_count(), 2);
//! assert_eq!(cycles.cycles()[0].path(), &[2, 2]);
//! assert_eq!(cycles.cycles()[1].path(), &[0, 1, 2, 0]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
