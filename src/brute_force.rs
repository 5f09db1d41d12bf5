//! Exhaustive reference solver.
//!
//! Enumerates every assignment of non-terminal vertices to terminals and
//! keeps the cheapest cut. Exponential in the number of free vertices;
//! exists to cross-check the branch-and-bound solver on small instances.

use crate::error::Result;
use crate::graph::CutGraph;
use crate::solver::validate_instance;
use std::collections::{BTreeMap, BTreeSet};

/// Finds an optimal k-terminal cut by enumerating all k^(n-k) assignments.
///
/// Returns the first optimal partition in lexicographic assignment order
/// together with its cut value (unrounded).
pub fn brute_force(
    graph: &CutGraph,
    terminals: &[usize],
) -> Result<(BTreeMap<usize, BTreeSet<usize>>, f64)> {
    validate_instance(graph, terminals)?;

    let terminal_set: BTreeSet<usize> = terminals.iter().copied().collect();
    let free: Vec<usize> = graph
        .vertices()
        .into_iter()
        .filter(|v| !terminal_set.contains(v))
        .collect();
    let k = terminals.len();

    let mut assignment = vec![0usize; free.len()];
    let mut best_value = f64::INFINITY;
    let mut best_partition = BTreeMap::new();
    loop {
        let mut partition: BTreeMap<usize, BTreeSet<usize>> = terminals
            .iter()
            .map(|&t| (t, BTreeSet::from([t])))
            .collect();
        for (slot, &v) in free.iter().enumerate() {
            partition
                .get_mut(&terminals[assignment[slot]])
                .expect("terminal key")
                .insert(v);
        }
        let value = graph.cut_weight(&partition);
        if value < best_value {
            best_value = value;
            best_partition = partition;
        }

        // advance the mixed-radix counter
        let mut slot = 0;
        loop {
            if slot == assignment.len() {
                return Ok((best_partition, best_value));
            }
            assignment[slot] += 1;
            if assignment[slot] < k {
                break;
            }
            assignment[slot] = 0;
            slot += 1;
        }
    }
}

#[cfg(test)]
#[path = "unit_tests/brute_force.rs"]
mod tests;
