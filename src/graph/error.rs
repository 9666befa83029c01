//! Error types for graph operations.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when validating or processing a graph.
///
/// A disconnected graph is not an error: the engines return a spanning
/// forest (Kruskal) or the start vertex's tree (Prim) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint or start vertex is not in `[0, num_vertices)`.
    #[error("{context}: vertex {vertex} out of range for graph with {num_vertices} vertices")]
    VertexOutOfRange {
        vertex: usize,
        num_vertices: usize,
        context: &'static str,
    },

    /// An adjacency list entry stored under `vertex` does not start at `vertex`.
    #[error("{context}: edge stored under vertex {vertex} starts at vertex {src}")]
    MalformedAdjacency {
        vertex: usize,
        src: usize,
        context: &'static str,
    },

    /// Invalid argument value.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
}
