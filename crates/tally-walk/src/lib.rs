//! Depth-first traversal engine for the tally AST.
//!
//! Every compiler pass (type checking, symbol resolution, code generation,
//! pretty-printing) shares one traversal algorithm and differs only in the
//! [`Visitor`] it supplies:
//!
//! ```text
//! before(node) ── Stop ──────────────────────────────▶ done (no after)
//!      │
//!      └─ Continue(v) ─▶ walk(v, child) for each child ─▶ v.after(node)
//! ```
//!
//! Child order per node kind is documented on [`for_each_child`].
//! [`Walker`] adds an opt-in depth guard and walk statistics, and
//! [`TraceRecorder`] records the event sequence of a walk.

mod error;
mod trace;
mod visitor;
mod walk;
mod walker;

pub use error::{WalkError, WalkResult};
pub use trace::{label, Phase, Trace, TraceEvent, TraceRecorder};
pub use visitor::{Visit, Visitor};
pub use walk::{for_each_child, walk};
pub use walker::{WalkStats, Walker};
