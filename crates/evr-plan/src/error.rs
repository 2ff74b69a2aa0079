//! Planning-session error type.

use thiserror::Error;

use evr_graph::GraphError;

/// Errors produced by `evr-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("both a start and an end point must be set before routing")]
    MissingEndpoints,

    #[error("the road network has no nodes to snap to")]
    EmptyNetwork,

    #[error("no active route to simulate traffic on")]
    NothingToSimulate,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
