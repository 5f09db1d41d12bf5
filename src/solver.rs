//! The isolation branching entry point.

use crate::branching::tree::{Report, SearchTree, VertexSelection};
use crate::error::{CutError, Result};
use crate::graph::CutGraph;
use crate::persistence::{self, Persistence};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome classification of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SolveStatus {
    /// The returned cut is provably optimal.
    Optimal,
    /// The time budget expired; the returned cut is feasible but only
    /// known to be within `gap` of the optimum.
    TimeLimitExceeded {
        /// `best_upper - best_lower` at the moment the budget expired.
        gap: f64,
    },
}

/// A solved k-terminal cut instance.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    /// Original vertices assigned to each terminal; blocks are pairwise
    /// disjoint, cover the whole graph, and each contains its terminal.
    pub partition: BTreeMap<usize, BTreeSet<usize>>,
    /// Total capacity crossing the partition, rounded to 8 decimal places.
    pub cut_value: f64,
    /// Whether the cut is optimal or a bounded-suboptimal early exit.
    pub status: SolveStatus,
    /// The persistence mode that was actually applied (downgraded to
    /// `None` when the LP solver fails or is unavailable).
    pub persistence: Persistence,
    /// Final diagnostic record of the search.
    pub report: Report,
}

/// Exact solver for the k-terminal cut problem.
///
/// Best-first branch-and-bound over partial terminal assignments, with
/// minimum isolating cuts supplying both the lower bounds and the
/// per-node contractions.
///
/// # Example
///
/// ```
/// use ktcut::{CutGraph, IsolationBranching};
///
/// // A 4-cycle of capacity 2 with one terminal hanging off each corner.
/// let mut graph = CutGraph::new();
/// for (u, v) in [(5, 6), (6, 7), (7, 8), (8, 5)] {
///     graph.add_edge(u, v, 2.0);
/// }
/// for (u, v) in [(1, 5), (2, 6), (3, 7), (4, 8)] {
///     graph.add_edge(u, v, 3.0);
/// }
///
/// let solution = IsolationBranching::new()
///     .solve(&graph, &[1, 2, 3, 4])
///     .unwrap();
/// assert_eq!(solution.cut_value, 8.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IsolationBranching {
    /// LP persistence preprocessing mode.
    pub persistence: Persistence,
    /// Emit one JSON diagnostic line per search step.
    pub reporting: bool,
    /// Wall-clock budget in seconds; `None` runs to optimality.
    pub time_limit: Option<f64>,
    /// Policy for choosing the vertex to branch on.
    pub vertex_selection: VertexSelection,
}

impl IsolationBranching {
    /// Creates a solver with default settings: no persistence, no
    /// reporting, no time limit, highest-degree branching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the persistence preprocessing mode.
    pub fn with_persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = persistence;
        self
    }

    /// Enables per-step diagnostic reporting.
    pub fn with_reporting(mut self, reporting: bool) -> Self {
        self.reporting = reporting;
        self
    }

    /// Sets a wall-clock budget in seconds.
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Sets the vertex selection policy.
    pub fn with_vertex_selection(mut self, vertex_selection: VertexSelection) -> Self {
        self.vertex_selection = vertex_selection;
        self
    }

    /// Solves the instance, never mutating the caller's graph.
    ///
    /// Returns the optimal partition and cut value, or a bounded-suboptimal
    /// pair when a time limit was supplied and expired. An LP failure
    /// during persistence preprocessing downgrades to no persistence and
    /// keeps going.
    pub fn solve(&self, graph: &CutGraph, terminals: &[usize]) -> Result<Solution> {
        validate_instance(graph, terminals)?;

        let (candidates, applied) = match self.persistence {
            Persistence::None => (
                persistence::default_candidates(graph, terminals),
                Persistence::None,
            ),
            mode => match persistence::terminal_candidates(graph, terminals, mode) {
                Ok(map) => (map, mode),
                Err(CutError::SolverFailure(_)) => (
                    persistence::default_candidates(graph, terminals),
                    Persistence::None,
                ),
                Err(other) => return Err(other),
            },
        };

        let mut tree = SearchTree::new(graph, terminals, candidates, self.vertex_selection)?;
        let outcome = tree.run(self.reporting, self.time_limit)?;

        let partition = SearchTree::extract_partition(terminals, &outcome.node);
        let cut_value = round8(graph.cut_weight(&partition));
        let status = if outcome.timed_out {
            SolveStatus::TimeLimitExceeded {
                gap: round8(outcome.best_upper - outcome.best_lower),
            }
        } else {
            SolveStatus::Optimal
        };
        let report = tree
            .last_report()
            .cloned()
            .expect("the search produced a final report");

        Ok(Solution {
            partition,
            cut_value,
            status,
            persistence: applied,
            report,
        })
    }
}

/// Rejects malformed instances before any work happens.
pub(crate) fn validate_instance(graph: &CutGraph, terminals: &[usize]) -> Result<()> {
    if graph.num_vertices() == 0 {
        return Err(CutError::InvalidInput("graph has no vertices".into()));
    }
    if terminals.len() < 2 {
        return Err(CutError::InvalidInput(format!(
            "need at least 2 terminals, got {}",
            terminals.len()
        )));
    }
    let distinct: BTreeSet<usize> = terminals.iter().copied().collect();
    if distinct.len() != terminals.len() {
        return Err(CutError::InvalidInput("terminals contain duplicates".into()));
    }
    for &t in terminals {
        if !graph.contains(t) {
            return Err(CutError::InvalidInput(format!(
                "terminal {t} is not in the graph"
            )));
        }
    }
    Ok(())
}

/// Externally visible cut values are rounded to 8 decimal places.
pub(crate) fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

#[cfg(test)]
#[path = "unit_tests/solver.rs"]
mod tests;
