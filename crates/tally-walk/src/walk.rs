//! Depth-first traversal of a tally AST.

use std::convert::Infallible;

use tally_types::{Node, NodeKind};

use crate::visitor::{Visit, Visitor};

/// Walk `node` and its subtree with `visitor`.
///
/// `before` runs on the node first. If it returns [`Visit::Stop`] the walk
/// returns at once and `after` is not called for this node. Otherwise every
/// child is walked in [`for_each_child`] order with the visitor `before`
/// returned, and that same visitor receives `after(node)`.
///
/// Recursion depth equals tree depth and is not bounded here; use
/// [`Walker::with_max_depth`](crate::Walker::with_max_depth) for untrusted
/// input.
pub fn walk(visitor: &mut dyn Visitor, node: &Node) {
    let visitor = match visitor.before(node) {
        Visit::Continue(v) => v,
        Visit::Stop => return,
    };

    let Ok(()) = for_each_child(node, |child| {
        walk(visitor, child);
        Ok::<(), Infallible>(())
    });

    visitor.after(node);
}

/// Call `f` on each direct child of `node`, in traversal order.
///
/// | Kind | Children |
/// |---|---|
/// | `StmtList`, `ExprList`, `Def`, `Deco` | every child, in order |
/// | `Cond` | condition (if any), truth branch, else branch (if any) |
/// | `Builtin` | argument list (if any) |
/// | `BinaryExpr` | left operand, right operand |
/// | `UnaryExpr` | operand |
/// | `IndexedExpr` | index, then base |
/// | terminals | none |
///
/// Stops at the first error `f` returns.
pub fn for_each_child<'n, E>(
    node: &'n Node,
    mut f: impl FnMut(&'n Node) -> Result<(), E>,
) -> Result<(), E> {
    match &node.kind {
        NodeKind::StmtList { children }
        | NodeKind::ExprList { children }
        | NodeKind::Def { children, .. }
        | NodeKind::Deco { children, .. } => children.iter().try_for_each(f),

        NodeKind::Cond {
            cond,
            truth,
            else_branch,
        } => {
            if let Some(cond) = cond.as_deref() {
                f(cond)?;
            }
            f(truth)?;
            if let Some(else_branch) = else_branch.as_deref() {
                f(else_branch)?;
            }
            Ok(())
        }

        NodeKind::Builtin { args, .. } => match args.as_deref() {
            Some(args) => f(args),
            None => Ok(()),
        },

        NodeKind::BinaryExpr { lhs, rhs, .. } => {
            f(lhs)?;
            f(rhs)
        }

        NodeKind::UnaryExpr { operand, .. } => f(operand),

        NodeKind::IndexedExpr { base, index } => {
            f(index)?;
            f(base)
        }

        NodeKind::Regex { .. }
        | NodeKind::Id { .. }
        | NodeKind::CaptureRef { .. }
        | NodeKind::Decl { .. }
        | NodeKind::StringConst { .. }
        | NodeKind::IntConst { .. }
        | NodeKind::FloatConst { .. }
        | NodeKind::Next
        | NodeKind::Otherwise => Ok(()),
    }
}
