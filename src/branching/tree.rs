//! Best-first search over live branch nodes.

use crate::branching::node::BranchNode;
use crate::branching::root::BranchRoot;
use crate::error::Result;
use crate::graph::CutGraph;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap};
use std::time::Instant;

/// Policy for picking the vertex to branch on.
///
/// The highest-degree vertex most strongly influences the bounds and most
/// often triggers large isolating-cut contractions in the children, so it
/// is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexSelection {
    /// Unassigned vertex of maximum capacity-weighted degree, smallest id
    /// among ties.
    #[default]
    HighestDegree,
    /// Unassigned vertex with the smallest id.
    FirstUnassigned,
}

impl VertexSelection {
    fn choose(&self, graph: &CutGraph, unassigned: &[usize]) -> Option<usize> {
        match self {
            Self::FirstUnassigned => unassigned.first().copied(),
            Self::HighestDegree => {
                let mut best: Option<(f64, usize)> = None;
                for &v in unassigned {
                    let degree = graph.weighted_degree(v);
                    if best.map_or(true, |(d, _)| degree > d) {
                        best = Some((degree, v));
                    }
                }
                best.map(|(_, v)| v)
            }
        }
    }
}

/// One diagnostic record per search step, and the final summary returned
/// with every solution.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Number of original vertices absorbed by each terminal.
    pub source_set_sizes: BTreeMap<usize, usize>,
    /// Depth of the node this record describes.
    pub node_depth: usize,
    /// Lower bound of the node this record describes.
    pub node_lower_bound: f64,
    /// Upper bound of the node this record describes.
    pub node_upper_bound: f64,
    /// Unassigned vertices remaining in the node's graph.
    pub unassigned_vertices: usize,
    /// Smallest lower bound over the live frontier.
    pub best_lower_bound: f64,
    /// Smallest upper bound over every node created so far.
    pub best_upper_bound: f64,
    /// Live nodes awaiting exploration.
    pub nodes_unexplored: usize,
    /// Nodes created since the search began.
    pub nodes_total: usize,
    /// Wall-clock seconds since the tree was initialized.
    pub elapsed_seconds: f64,
}

/// What the main loop hands back to the entry point.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    /// The incumbent, completed into a leaf.
    pub node: BranchNode,
    /// Frontier best lower bound at exit (equals the optimum on the
    /// optimal routes).
    pub best_lower: f64,
    /// Best upper bound at exit.
    pub best_upper: f64,
    /// True when the time budget expired before optimality was proven.
    pub timed_out: bool,
}

struct FrontierEntry {
    key: Reverse<(OrderedFloat<f64>, u64)>,
    node: BranchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for FrontierEntry {}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// The branch-and-bound tree: a frontier of live nodes ordered by lower
/// bound, the global best bounds, and the incumbent node achieving the
/// best upper bound.
pub struct SearchTree {
    terminals: Vec<usize>,
    terminals_by_vertex: HashMap<usize, BTreeSet<usize>>,
    vertex_selection: VertexSelection,
    frontier: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    best_upper: f64,
    incumbent: Option<BranchNode>,
    nodes_total: usize,
    nodes_explored: usize,
    start: Instant,
    last_report: Option<Report>,
}

impl SearchTree {
    /// Runs root preprocessing and seeds the frontier with the first live
    /// node.
    pub(crate) fn new(
        graph: &CutGraph,
        terminals: &[usize],
        terminals_by_vertex: HashMap<usize, BTreeSet<usize>>,
        vertex_selection: VertexSelection,
    ) -> Result<Self> {
        let mut root = BranchRoot::new(graph, terminals);
        root.initial_isolating_cuts()?;
        let first = BranchNode::new(root.into_graph(), terminals, None, 0)?;

        let mut tree = Self {
            terminals: terminals.to_vec(),
            terminals_by_vertex,
            vertex_selection,
            frontier: BinaryHeap::new(),
            next_seq: 0,
            best_upper: f64::INFINITY,
            incumbent: None,
            nodes_total: 0,
            nodes_explored: 0,
            start: Instant::now(),
            last_report: None,
        };
        tree.admit(first);
        Ok(tree)
    }

    /// Records a freshly created node: updates the incumbent and pushes the
    /// node onto the frontier.
    fn admit(&mut self, node: BranchNode) {
        self.nodes_total += 1;
        if node.upper_bound() < self.best_upper {
            self.best_upper = node.upper_bound();
            self.incumbent = Some(node.clone());
        }
        let key = Reverse((OrderedFloat(node.lower_bound()), self.next_seq));
        self.next_seq += 1;
        self.frontier.push(FrontierEntry { key, node });
    }

    /// Smallest lower bound over the live frontier.
    pub fn best_lower_bound(&self) -> f64 {
        self.frontier
            .peek()
            .map_or(0.0, |entry| entry.node.lower_bound())
    }

    /// Smallest upper bound over every node created so far.
    pub fn best_upper_bound(&self) -> f64 {
        self.best_upper
    }

    /// Live nodes awaiting exploration.
    pub fn nodes_unexplored(&self) -> usize {
        self.frontier.len()
    }

    /// Nodes created since the search began.
    pub fn nodes_total(&self) -> usize {
        self.nodes_total
    }

    /// Nodes popped and branched so far.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// The last per-step diagnostic record, if any step has run.
    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    fn report_for(&self, node: &BranchNode) -> Report {
        let source_set_sizes = self
            .terminals
            .iter()
            .map(|&t| (t, node.graph().combined(t).len()))
            .collect();
        Report {
            source_set_sizes,
            node_depth: node.depth(),
            node_lower_bound: node.lower_bound(),
            node_upper_bound: node.upper_bound(),
            unassigned_vertices: node.unassigned_vertices().len(),
            best_lower_bound: self.best_lower_bound(),
            best_upper_bound: self.best_upper,
            nodes_unexplored: self.frontier.len(),
            nodes_total: self.nodes_total,
            elapsed_seconds: self.start.elapsed().as_secs_f64(),
        }
    }

    /// Runs the best-first loop to termination.
    ///
    /// Terminates when the frontier's best lower bound reaches the best
    /// upper bound, when a popped node is a leaf, or when the time budget
    /// expires. The returned node is always a leaf: on early exit the
    /// incumbent is completed by folding its unassigned vertices into the
    /// terminal with the largest adjacent capacity, which never exceeds
    /// the incumbent's upper bound.
    pub(crate) fn run(
        &mut self,
        reporting: bool,
        time_limit: Option<f64>,
    ) -> Result<SearchOutcome> {
        let mut timed_out = false;
        loop {
            if let Some(limit) = time_limit {
                if self.start.elapsed().as_secs_f64() >= limit {
                    timed_out = true;
                    break;
                }
            }
            let Some(best_lower) = self.frontier.peek().map(|e| e.node.lower_bound()) else {
                break;
            };
            if best_lower >= self.best_upper {
                break;
            }

            let node = self.frontier.pop().expect("frontier was just peeked").node;
            self.nodes_explored += 1;

            let unassigned = node.unassigned_vertices();
            if unassigned.is_empty() {
                // Leaf: its bounds coincide, so it is optimal.
                self.best_upper = self.best_upper.min(node.upper_bound());
                self.incumbent = Some(node);
                break;
            }

            let vertex = self
                .vertex_selection
                .choose(node.graph(), &unassigned)
                .expect("unassigned set is non-empty");
            let allowed = self
                .terminals_by_vertex
                .get(&vertex)
                .cloned()
                .unwrap_or_else(|| self.terminals.iter().copied().collect());

            for child in node.branch(vertex, &allowed)? {
                self.admit(child);
            }

            let report = self.report_for(&node);
            if reporting {
                println!("{}", serde_json::to_string(&report).unwrap_or_default());
            }
            self.last_report = Some(report);
        }

        let best_lower = if self.frontier.is_empty() {
            self.best_upper
        } else {
            self.best_lower_bound().min(self.best_upper)
        };
        let mut node = self
            .incumbent
            .take()
            .expect("the search created at least one node");
        node.assign_remaining()?;
        self.last_report = Some(self.report_for(&node));

        Ok(SearchOutcome {
            node,
            best_lower,
            best_upper: self.best_upper,
            timed_out,
        })
    }

    /// Maps each terminal to the original vertices assigned to it,
    /// terminal included.
    pub(crate) fn extract_partition(
        terminals: &[usize],
        node: &BranchNode,
    ) -> BTreeMap<usize, BTreeSet<usize>> {
        terminals
            .iter()
            .map(|&t| {
                let mut block = node.graph().combined(t);
                block.insert(t);
                (t, block)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../unit_tests/branching/tree.rs"]
mod tests;
