use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConnectivityError>;

/// Errors raised when a caller breaks the contract of the connectivity core
/// or one of its collaborators.
#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("edge index {index} is out of range for {len} edges")]
    EdgeOutOfRange { index: usize, len: usize },
    #[error("vertex {vertex} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },
    #[error("self loop at vertex {vertex}")]
    SelfLoop { vertex: usize },
    #[error("requested {requested} edges but only {max} distinct pairs exist")]
    TooManyEdges { requested: usize, max: usize },
    #[error("requested {requested} deletions but the graph has {available} edges")]
    TooManyDeletions { requested: usize, available: usize },
    #[error("malformed adjacency line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
