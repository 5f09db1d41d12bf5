//! Error types for the ktcut library.

use thiserror::Error;

/// Errors that can occur while building instances or running the solvers.
///
/// Internal invariant violations (a child node whose lower bound falls below
/// its parent's, an isolating cut whose super-source ends up on the sink
/// side) are programming errors and panic instead of surfacing here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CutError {
    /// The instance handed to a solver is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A contraction was asked to fold a vertex into itself.
    #[error("invalid contraction: vertex {0} cannot absorb itself")]
    InvalidContraction(usize),

    /// The source and sink sets of an isolating cut overlap.
    #[error("invalid cut: vertex {0} is in both the source and sink sets")]
    InvalidCut(usize),

    /// The LP solver used for persistence preprocessing failed.
    #[error("lp solver failure: {0}")]
    SolverFailure(String),
}

/// Result type alias for ktcut operations.
pub type Result<T> = std::result::Result<T, CutError>;
