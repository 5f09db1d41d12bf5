//! A node in the isolation branching tree.

use crate::cut::minimum_isolating_cut;
use crate::error::Result;
use crate::graph::CutGraph;
use std::collections::BTreeSet;

/// Lower bounds are monotone along any branch; a child may undershoot its
/// parent by at most this much before the search aborts, which absorbs the
/// rounding noise of floating-point max-flow.
const BOUND_TOLERANCE: f64 = 1e-6;

/// One node of the branch-and-bound tree.
///
/// The node owns its working graph: any vertex contracted into a terminal
/// is assigned to that terminal, every other non-terminal vertex is
/// unassigned. Construction contracts the newly assigned vertex, runs an
/// isolating cut from its terminal against the rest, contracts the returned
/// source side, and derives the bound pair from the result.
#[derive(Debug, Clone)]
pub struct BranchNode {
    graph: CutGraph,
    terminals: Vec<usize>,
    depth: usize,
    lower_bound: f64,
    upper_bound: f64,
}

impl BranchNode {
    /// Builds a node from a working graph, optionally applying a new
    /// `(vertex, terminal)` assignment first.
    pub fn new(
        graph: CutGraph,
        terminals: &[usize],
        assignment: Option<(usize, usize)>,
        depth: usize,
    ) -> Result<Self> {
        let mut node = Self {
            graph,
            terminals: terminals.to_vec(),
            depth,
            lower_bound: 0.0,
            upper_bound: 0.0,
        };
        if let Some((vertex, terminal)) = assignment {
            node.graph.contract(terminal, vertex)?;
            node.isolating_cut_expansion(terminal)?;
        }
        node.recompute_bounds();
        Ok(node)
    }

    /// Runs the isolating cut from `terminal` against all other terminals
    /// and contracts the source side into `terminal`.
    fn isolating_cut_expansion(&mut self, terminal: usize) -> Result<()> {
        let sources = BTreeSet::from([terminal]);
        let sinks: BTreeSet<usize> = self
            .terminals
            .iter()
            .copied()
            .filter(|&t| t != terminal)
            .collect();
        let cut = minimum_isolating_cut(&self.graph, &sources, &sinks)?;
        let mut absorbed = cut.source_side;
        absorbed.remove(&terminal);
        if !absorbed.is_empty() {
            self.graph.contract_set(terminal, &absorbed)?;
        }
        Ok(())
    }

    /// Derives the bound pair from terminal-adjacent capacities.
    ///
    /// With E_TT the capacity between terminal pairs and E_TU the capacity
    /// between terminals and unassigned vertices, the standard isolation
    /// branching bounds are LB = E_TT + E_TU / 2 and UB = E_TT + E_TU.
    fn recompute_bounds(&mut self) {
        let terminal_set: BTreeSet<usize> = self.terminals.iter().copied().collect();
        let mut terminal_terminal = 0.0;
        let mut terminal_unassigned = 0.0;
        for (u, v, capacity) in self.graph.edges() {
            match (terminal_set.contains(&u), terminal_set.contains(&v)) {
                (true, true) => terminal_terminal += capacity,
                (true, false) | (false, true) => terminal_unassigned += capacity,
                (false, false) => {}
            }
        }
        self.lower_bound = terminal_terminal + terminal_unassigned / 2.0;
        self.upper_bound = terminal_terminal + terminal_unassigned;
    }

    /// Creates one child per allowed terminal, assigning `vertex` to it.
    ///
    /// # Panics
    ///
    /// Panics if a child's lower bound falls below this node's by more than
    /// the floating-point tolerance; that indicates a broken bound
    /// computation, not a recoverable condition.
    pub fn branch(&self, vertex: usize, allowed_terminals: &BTreeSet<usize>) -> Result<Vec<Self>> {
        let mut children = Vec::with_capacity(allowed_terminals.len());
        for &terminal in allowed_terminals {
            let child = Self::new(
                self.graph.clone(),
                &self.terminals,
                Some((vertex, terminal)),
                self.depth + 1,
            )?;
            assert!(
                child.lower_bound >= self.lower_bound - BOUND_TOLERANCE,
                "branching on vertex {vertex} produced a child with lower bound {} \
                 below its parent's {}",
                child.lower_bound,
                self.lower_bound,
            );
            children.push(child);
        }
        Ok(children)
    }

    /// Vertices of the working graph not yet assigned to any terminal.
    pub fn unassigned_vertices(&self) -> Vec<usize> {
        let terminal_set: BTreeSet<usize> = self.terminals.iter().copied().collect();
        self.graph
            .vertices()
            .into_iter()
            .filter(|v| !terminal_set.contains(v))
            .collect()
    }

    /// True when every vertex is assigned; the bounds then coincide with
    /// the objective value of the cut this node represents.
    pub fn is_leaf(&self) -> bool {
        self.graph.num_vertices() == self.terminals.len()
    }

    /// Folds all remaining unassigned vertices into the single terminal
    /// with the largest capacity towards them, turning this node into a
    /// leaf whose objective does not exceed the node's upper bound.
    pub(crate) fn assign_remaining(&mut self) -> Result<()> {
        let unassigned: BTreeSet<usize> = self.unassigned_vertices().into_iter().collect();
        if unassigned.is_empty() {
            return Ok(());
        }
        let mut target = self.terminals[0];
        let mut best = f64::NEG_INFINITY;
        for &terminal in &self.terminals {
            let adjacent: f64 = unassigned
                .iter()
                .filter_map(|&v| self.graph.capacity(terminal, v))
                .sum();
            if adjacent > best {
                best = adjacent;
                target = terminal;
            }
        }
        self.graph.contract_set(target, &unassigned)?;
        self.recompute_bounds();
        Ok(())
    }

    /// The node's working graph.
    pub fn graph(&self) -> &CutGraph {
        &self.graph
    }

    /// The terminals, in input order.
    pub fn terminals(&self) -> &[usize] {
        &self.terminals
    }

    /// Depth in the tree (the root preprocessing node is depth 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Valid underestimate of the optimum of any completion of this node.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Cost bound of a feasible completion constructible from this node.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

#[cfg(test)]
#[path = "../unit_tests/branching/node.rs"]
mod tests;
