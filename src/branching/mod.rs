//! The isolation branching search tree.
//!
//! A [`node::BranchNode`] is a partial assignment of vertices to terminals,
//! encoded as a working graph in which assigned vertices have been
//! contracted into their terminal. [`root::BranchRoot`] runs the k initial
//! isolating cuts, and [`tree::SearchTree`] drives the best-first
//! branch-and-bound loop over live nodes.

pub mod node;
pub mod root;
pub mod tree;

pub use node::BranchNode;
pub use root::BranchRoot;
pub use tree::{Report, SearchTree, VertexSelection};
