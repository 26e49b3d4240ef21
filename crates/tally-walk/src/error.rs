//! Traversal error types.

use tally_types::Position;
use thiserror::Error;

/// Errors returned by a bounded [`Walker`](crate::Walker).
///
/// Errors a pass finds in its own hooks are the visitor's business and never
/// pass through here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The tree is nested deeper than the walker allows.
    #[error("depth limit of {limit} exceeded at {node} node ({pos})")]
    DepthExceeded {
        limit: usize,
        node: &'static str,
        pos: Position,
    },
}

/// Walk result type alias.
pub type WalkResult<T> = Result<T, WalkError>;
