//! A configurable walker with an optional depth guard and walk statistics.

use serde::{Deserialize, Serialize};
use tally_types::Node;

use crate::error::{WalkError, WalkResult};
use crate::visitor::{Visit, Visitor};
use crate::walk::for_each_child;

/// Counters gathered during one [`Walker::walk`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Number of `before` calls.
    pub visited: usize,
    /// Number of `before` calls that returned [`Visit::Stop`].
    pub pruned: usize,
    /// Number of `after` calls.
    pub completed: usize,
    /// Deepest level reached; the root is at depth 1.
    pub max_depth: usize,
}

/// Walks a tree with the same visiting contract as [`walk`](crate::walk),
/// optionally refusing trees nested deeper than a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walker {
    max_depth: Option<usize>,
}

impl Walker {
    /// A walker with no depth limit.
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// A walker that fails with [`WalkError::DepthExceeded`] instead of
    /// visiting any node deeper than `limit`.
    pub fn with_max_depth(limit: usize) -> Self {
        Self {
            max_depth: Some(limit),
        }
    }

    /// The configured depth limit, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Walk `node` with `visitor`.
    ///
    /// When the depth guard trips, the walk stops immediately: the offending
    /// node's `before` is not called and no pending `after` hook of its
    /// ancestors runs.
    pub fn walk(&self, visitor: &mut dyn Visitor, node: &Node) -> WalkResult<WalkStats> {
        let mut stats = WalkStats::default();
        match self.visit(visitor, node, 1, &mut stats) {
            Ok(()) => {
                tracing::debug!(
                    root = node.kind.name(),
                    visited = stats.visited,
                    pruned = stats.pruned,
                    max_depth = stats.max_depth,
                    "walk finished"
                );
                Ok(stats)
            }
            Err(err) => {
                tracing::warn!(error = %err, visited = stats.visited, "walk aborted");
                Err(err)
            }
        }
    }

    fn visit(
        &self,
        visitor: &mut dyn Visitor,
        node: &Node,
        depth: usize,
        stats: &mut WalkStats,
    ) -> WalkResult<()> {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(WalkError::DepthExceeded {
                    limit,
                    node: node.kind.name(),
                    pos: node.pos,
                });
            }
        }

        stats.visited += 1;
        stats.max_depth = stats.max_depth.max(depth);

        let visitor = match visitor.before(node) {
            Visit::Continue(v) => v,
            Visit::Stop => {
                stats.pruned += 1;
                tracing::trace!(node = node.kind.name(), pos = %node.pos, depth, "pruned");
                return Ok(());
            }
        };

        for_each_child(node, |child| self.visit(visitor, child, depth + 1, stats))?;

        visitor.after(node);
        stats.completed += 1;
        Ok(())
    }
}
