use tdv_core::{NodeId, RouteId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("route {0} has fewer than two path nodes, nothing to replay")]
    EmptyRoute(RouteId),

    #[error("route {route} visits {node}, which is outside the instance")]
    NodeOutOfRange { route: RouteId, node: NodeId },
}

pub type SimResult<T> = Result<T, SimError>;
