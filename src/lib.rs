//! # ktcut
//!
//! An exact solver for the **k-terminal cut** problem (also called the
//! multi-terminal or multiway cut): partition the vertices of a
//! capacity-weighted undirected graph into k blocks, one per designated
//! terminal, minimizing the total capacity of edges between blocks. The
//! problem is NP-hard for k >= 3, so this is an optimization engine, not a
//! polynomial algorithm.
//!
//! The core is **isolation branching**: best-first branch-and-bound whose
//! nodes are partial terminal assignments, and whose branching step uses
//! minimum isolating cuts both to bound each node from below and to
//! contract vertices that provably belong to a terminal. An optional
//! preprocessing pass solves the LP relaxation once and uses its
//! *persistence* properties to shrink each vertex's candidate terminal set.
//!
//! ## Example
//!
//! ```rust
//! use ktcut::prelude::*;
//!
//! // Three terminals around a triangle of intermediate vertices.
//! let mut graph = CutGraph::new();
//! for (u, v) in [(1, 12), (1, 13), (2, 12), (2, 23), (3, 13), (3, 23)] {
//!     graph.add_edge(u, v, 2.0);
//! }
//! for (u, v) in [(12, 13), (13, 23), (12, 23)] {
//!     graph.add_edge(u, v, 1.0);
//! }
//!
//! let solution = IsolationBranching::new().solve(&graph, &[1, 2, 3]).unwrap();
//! assert_eq!(solution.cut_value, 8.0);
//! assert!(solution.partition[&1].contains(&1));
//! ```
//!
//! ## Feature flags
//!
//! The LP/IP formulation is gated behind an LP backend feature; the
//! default is `lp-highs`. With every `lp-*` feature disabled the search
//! still runs, and requesting persistence quietly degrades to none.

pub mod branching;
pub mod brute_force;
pub mod cut;
pub mod error;
pub(crate) mod flow;
#[cfg(feature = "lp-solver")]
pub mod formulation;
pub mod generators;
pub mod graph;
pub mod instances;
pub mod persistence;
pub mod solver;
pub mod terminals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::branching::{BranchNode, BranchRoot, Report, SearchTree, VertexSelection};
    pub use crate::brute_force::brute_force;
    pub use crate::cut::{minimum_isolating_cut, IsolatingCut};
    pub use crate::error::{CutError, Result};
    #[cfg(feature = "lp-solver")]
    pub use crate::formulation::{CutFormulation, IpSolution, LpRelaxation};
    pub use crate::graph::CutGraph;
    pub use crate::persistence::{check_persistence, terminal_candidates, Persistence};
    pub use crate::solver::{IsolationBranching, Solution, SolveStatus};
    pub use crate::terminals::top_degree_terminals;
}

// Re-export commonly used items at crate root
pub use cut::{minimum_isolating_cut, IsolatingCut};
pub use error::{CutError, Result};
pub use graph::CutGraph;
pub use persistence::Persistence;
pub use solver::{IsolationBranching, Solution, SolveStatus};
