//! Graph-subsystem error type.

use thiserror::Error;

use evr_core::NodeId;

/// Errors produced by `evr-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV parse error: {0}")]
    Csv(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
