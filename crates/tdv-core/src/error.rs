//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `TdvError` via `From` impls, or keep them separate and wrap `TdvError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::{ClusterId, NodeId};

/// The top-level error type for `tdv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TdvError {
    #[error("node {0} not found in instance")]
    NodeNotFound(NodeId),

    #[error("cluster {0} not found in instance")]
    ClusterNotFound(ClusterId),

    #[error("invalid document: {0}")]
    Document(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `tdv-*` crates.
pub type TdvResult<T> = Result<T, TdvError>;
