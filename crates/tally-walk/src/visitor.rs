//! The behavior contract every pass implements to plug into [`walk`](crate::walk).

use std::fmt;

use tally_types::Node;

/// What [`Visitor::before`] asks the engine to do with a node's subtree.
pub enum Visit<'v> {
    /// Descend into the children with this visitor, then call its
    /// [`after`](Visitor::after) on the node.
    ///
    /// The visitor may be the one `before` was called on, a sub-visitor it
    /// owns, or any other visitor that outlives the borrow.
    Continue(&'v mut dyn Visitor),
    /// Skip the children and the matching `after` call.
    Stop,
}

impl fmt::Debug for Visit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visit::Continue(_) => f.write_str("Continue"),
            Visit::Stop => f.write_str("Stop"),
        }
    }
}

/// Pre-order and post-order hooks for a traversal.
///
/// A pass that has fully handled a subtree in `before` returns
/// [`Visit::Stop`]; otherwise it returns `Visit::Continue(self)` or hands the
/// subtree to a specialized visitor.
pub trait Visitor {
    /// Called when the engine first reaches `node`, before any child.
    fn before(&mut self, node: &Node) -> Visit<'_>;

    /// Called once every child of `node` has been walked, on the visitor
    /// returned by the matching `before`.
    fn after(&mut self, _node: &Node) {}
}
