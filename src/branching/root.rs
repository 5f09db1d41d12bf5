//! Root-level preprocessing for the branch-and-bound tree.

use crate::cut::minimum_isolating_cut;
use crate::error::Result;
use crate::graph::CutGraph;
use std::collections::BTreeSet;

/// Owns a working copy of the input graph and performs the k initial
/// isolating cuts before the first search node exists.
///
/// After preprocessing, each terminal has absorbed a maximal set of
/// vertices that lie on its side in every optimal solution, so the search
/// starts from a graph that is already as contracted as isolation allows.
#[derive(Debug, Clone)]
pub struct BranchRoot {
    graph: CutGraph,
    terminals: Vec<usize>,
}

impl BranchRoot {
    /// Takes a working copy of the caller's graph.
    pub fn new(graph: &CutGraph, terminals: &[usize]) -> Self {
        Self {
            graph: graph.clone(),
            terminals: terminals.to_vec(),
        }
    }

    /// Runs the k initial isolating cuts, one per terminal in input order,
    /// contracting each returned source side into its terminal.
    pub fn initial_isolating_cuts(&mut self) -> Result<()> {
        for i in 0..self.terminals.len() {
            let terminal = self.terminals[i];
            let sources = BTreeSet::from([terminal]);
            let sinks: BTreeSet<usize> = self
                .terminals
                .iter()
                .copied()
                .filter(|&t| t != terminal)
                .collect();
            let cut = minimum_isolating_cut(&self.graph, &sources, &sinks)?;
            assert!(
                cut.source_side.contains(&terminal),
                "initial isolating cut for terminal {terminal} lost its terminal"
            );
            let mut absorbed = cut.source_side;
            absorbed.remove(&terminal);
            if !absorbed.is_empty() {
                self.graph.contract_set(terminal, &absorbed)?;
            }
        }
        Ok(())
    }

    /// Hands the preprocessed graph to the search tree.
    pub fn into_graph(self) -> CutGraph {
        self.graph
    }
}

#[cfg(test)]
#[path = "../unit_tests/branching/root.rs"]
mod tests;
