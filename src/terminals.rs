//! Terminal suggestion heuristics.

use crate::error::{CutError, Result};
use crate::graph::CutGraph;

/// Suggests the `k` vertices of largest capacity-weighted degree as
/// terminals, smallest id first among equal degrees.
///
/// High-degree vertices tend to sit in the interior of dense regions,
/// which makes separating them a non-trivial instance; this is the
/// heuristic used when a dataset comes without designated terminals.
pub fn top_degree_terminals(graph: &CutGraph, k: usize) -> Result<Vec<usize>> {
    if k < 2 {
        return Err(CutError::InvalidInput(format!(
            "need at least 2 terminals, got {k}"
        )));
    }
    if k > graph.num_vertices() {
        return Err(CutError::InvalidInput(format!(
            "asked for {k} terminals from a graph with {} vertices",
            graph.num_vertices()
        )));
    }
    let mut by_degree: Vec<(usize, f64)> = graph
        .vertices()
        .into_iter()
        .map(|v| (v, graph.weighted_degree(v)))
        .collect();
    by_degree.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .expect("degrees are finite")
            .then(a.0.cmp(&b.0))
    });
    Ok(by_degree.into_iter().take(k).map(|(v, _)| v).collect())
}

#[cfg(test)]
#[path = "unit_tests/terminals.rs"]
mod tests;
