//! Minimum isolating cut.
//!
//! Given disjoint vertex sets S (sources) and K (sinks), the minimum
//! isolating cut is a minimum-capacity S-to-K cut. The returned source side
//! is source-maximal: every other minimum cut's source side is a subset of
//! it. This is the primitive isolation branching uses both for lower bounds
//! and to decide which vertices can be contracted into a terminal.

use crate::error::{CutError, Result};
use crate::flow::FlowNetwork;
use crate::graph::CutGraph;
use std::collections::{BTreeSet, HashMap};

/// The result of a minimum isolating cut computation.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolatingCut {
    /// Source-maximal source side; contains every source vertex and no sink.
    pub source_side: BTreeSet<usize>,
    /// Total capacity of edges leaving the source side.
    pub weight: f64,
}

/// Computes the minimum isolating cut separating `sources` from `sinks`.
///
/// A super-source is attached to every source vertex and a super-sink to
/// every sink vertex with infinite-capacity arcs; after a max-flow run the
/// sink side is everything that still reaches the super-sink in the
/// residual network, and the source side is its complement. The input graph
/// is not modified.
///
/// If either set is empty the cut is trivial: `(sources, 0.0)`. Overlapping
/// sets fail with [`CutError::InvalidCut`].
///
/// # Example
///
/// ```
/// use ktcut::{minimum_isolating_cut, CutGraph};
/// use std::collections::BTreeSet;
///
/// let graph = CutGraph::from_weighted_edges([
///     (1, 2, 2.0),
///     (2, 3, 3.0),
///     (3, 4, 2.0),
///     (4, 5, 2.0),
///     (4, 6, 2.0),
/// ]);
/// let cut = minimum_isolating_cut(
///     &graph,
///     &BTreeSet::from([1]),
///     &BTreeSet::from([5, 6]),
/// )
/// .unwrap();
/// assert_eq!(cut.source_side, BTreeSet::from([1, 2, 3]));
/// assert_eq!(cut.weight, 2.0);
/// ```
pub fn minimum_isolating_cut(
    graph: &CutGraph,
    sources: &BTreeSet<usize>,
    sinks: &BTreeSet<usize>,
) -> Result<IsolatingCut> {
    if let Some(&shared) = sources.intersection(sinks).next() {
        return Err(CutError::InvalidCut(shared));
    }
    if sources.is_empty() || sinks.is_empty() {
        return Ok(IsolatingCut {
            source_side: sources.clone(),
            weight: 0.0,
        });
    }
    for &v in sources.iter().chain(sinks.iter()) {
        if !graph.contains(v) {
            return Err(CutError::InvalidInput(format!(
                "vertex {v} is not in the graph"
            )));
        }
    }

    let vertices = graph.vertices();
    let position: HashMap<usize, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();
    let n = vertices.len();
    let (super_source, super_sink) = (n, n + 1);

    let mut network = FlowNetwork::new(n + 2);
    for (u, v, capacity) in graph.edges() {
        network.add_arc(position[&u], position[&v], capacity, capacity);
    }
    for &s in sources {
        network.add_arc(super_source, position[&s], f64::INFINITY, 0.0);
    }
    for &k in sinks {
        network.add_arc(position[&k], super_sink, f64::INFINITY, 0.0);
    }

    let weight = network.max_flow(super_source, super_sink);
    let sink_side = network.residual_sink_side(super_sink);

    assert!(
        sink_side[super_sink],
        "isolating cut: super-sink fell out of the sink side"
    );
    assert!(
        !sink_side[super_source],
        "isolating cut: super-source ended up on the sink side"
    );

    let source_side: BTreeSet<usize> = vertices
        .iter()
        .enumerate()
        .filter(|&(i, _)| !sink_side[i])
        .map(|(_, &v)| v)
        .collect();

    Ok(IsolatingCut {
        source_side,
        weight,
    })
}

#[cfg(test)]
#[path = "unit_tests/cut.rs"]
mod tests;
