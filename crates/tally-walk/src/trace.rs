//! A recording visitor, for AST dumps and for checking traversal order.

use std::fmt;

use serde::{Deserialize, Serialize};
use tally_types::{Node, NodeKind, Position};

use crate::visitor::{Visit, Visitor};

/// Which hook produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }
}

/// One hook invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub phase: Phase,
    /// Node label, e.g. `BinaryExpr +` or `IntConst 1`.
    pub node: String,
    pub pos: Position,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.phase.as_str(), self.node)
    }
}

/// The ordered events of one or more walks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// One `before(...)` / `after(...)` line per event.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }

    /// Events as `before(...)` / `after(...)` strings, for assertions.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// Short label for a node: the variant name plus its operator, name or value.
pub fn label(node: &Node) -> String {
    let name = node.kind.name();
    match &node.kind {
        NodeKind::Builtin { name: callee, .. }
        | NodeKind::Def { name: callee, .. }
        | NodeKind::Deco { name: callee, .. }
        | NodeKind::Id { name: callee }
        | NodeKind::CaptureRef { name: callee } => format!("{name} {callee}"),
        NodeKind::Decl {
            name: metric_name,
            metric,
            ..
        } => format!("{name} {} {metric_name}", metric.as_str()),
        NodeKind::BinaryExpr { op, .. } => format!("{name} {}", op.as_str()),
        NodeKind::UnaryExpr { op, .. } => format!("{name} {}", op.as_str()),
        NodeKind::Regex { pattern } => format!("{name} /{pattern}/"),
        NodeKind::StringConst { text } => format!("{name} {text:?}"),
        NodeKind::IntConst { value } => format!("{name} {value}"),
        NodeKind::FloatConst { value } => format!("{name} {value}"),
        NodeKind::StmtList { .. }
        | NodeKind::ExprList { .. }
        | NodeKind::Cond { .. }
        | NodeKind::IndexedExpr { .. }
        | NodeKind::Next
        | NodeKind::Otherwise => name.to_string(),
    }
}

/// Records every `before` and `after` call it receives.
///
/// By default it never prunes. [`TraceRecorder::pruning`] stops at nodes
/// matching a predicate; the pruned node's `before` event is still recorded.
#[derive(Default)]
pub struct TraceRecorder {
    trace: Trace,
    prune: Option<Box<dyn Fn(&Node) -> bool>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that returns [`Visit::Stop`] for nodes where `prune` is true.
    pub fn pruning(prune: impl Fn(&Node) -> bool + 'static) -> Self {
        Self {
            trace: Trace::default(),
            prune: Some(Box::new(prune)),
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    fn record(&mut self, phase: Phase, node: &Node) {
        self.trace.events.push(TraceEvent {
            phase,
            node: label(node),
            pos: node.pos,
        });
    }
}

impl fmt::Debug for TraceRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceRecorder")
            .field("events", &self.trace.len())
            .field("pruning", &self.prune.is_some())
            .finish()
    }
}

impl Visitor for TraceRecorder {
    fn before(&mut self, node: &Node) -> Visit<'_> {
        self.record(Phase::Before, node);
        if self.prune.as_ref().is_some_and(|prune| prune(node)) {
            return Visit::Stop;
        }
        Visit::Continue(self)
    }

    fn after(&mut self, node: &Node) {
        self.record(Phase::After, node);
    }
}
