use thiserror::Error;

/// Error produced when a search cannot be carried out
/// with the data it was given.
///
/// An unreachable goal is not an error: engines report it
/// with an empty path and [Cost::Infinite](crate::Cost::Infinite).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No heuristic estimate for state {0}")]
    MissingHeuristic(String),

    #[error("No edge from {from} to {to} in the graph")]
    MissingEdge { from: String, to: String },

    #[error("Tree root has no children to move to")]
    EmptyTree,

    #[error("Path cost overflowed reaching state {0}")]
    CostOverflow(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
