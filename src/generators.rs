//! Seeded random instance generators for tests and benchmarks.

use crate::graph::CutGraph;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Generates a connected graph on vertices `0..vertex_count` with integral
/// capacities in `1..=max_capacity`.
///
/// A random spanning tree guarantees connectivity, then up to
/// `extra_edges` additional distinct edges are sprinkled in. The same seed
/// always produces the same graph.
pub fn random_connected_graph(
    vertex_count: usize,
    extra_edges: usize,
    max_capacity: u32,
    seed: u64,
) -> CutGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = CutGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 1..vertex_count {
        let u = rng.random_range(0..v);
        let capacity = rng.random_range(1..=max_capacity) as f64;
        graph.add_edge(u, v, capacity);
    }

    let mut added = 0;
    for _ in 0..extra_edges.saturating_mul(20) {
        if added == extra_edges {
            break;
        }
        let u = rng.random_range(0..vertex_count);
        let v = rng.random_range(0..vertex_count);
        if u == v || graph.capacity(u, v).is_some() {
            continue;
        }
        let capacity = rng.random_range(1..=max_capacity) as f64;
        graph.add_edge(u, v, capacity);
        added += 1;
    }
    graph
}

#[cfg(test)]
#[path = "unit_tests/generators.rs"]
mod tests;
