//! Toolkit base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `evr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `evr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
