//! AST node types for the tally language.
//!
//! Every node carries a [`Position`] for error reporting.
//! Children are owned through `Box` and `Vec`, so a tree can never share a
//! subtree or point back at an ancestor. Child order is source order and is
//! significant to every pass.

use crate::Position;
use serde::{Deserialize, Serialize};

// ══════════════════════════════════════════════════════════════════════════════
// Node
// ══════════════════════════════════════════════════════════════════════════════

/// A single syntax-tree element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Position,
}

impl Node {
    pub fn new(kind: NodeKind, pos: Position) -> Self {
        Self { kind, pos }
    }

    /// Serialize the tree to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a tree from JSON.
    ///
    /// A document naming a variant that is not part of [`NodeKind`] fails
    /// here, before any pass can see it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The kind of node, with its payload and owned children.
///
/// The set is closed. Passes match on it exhaustively, so adding a variant
/// forces every traversal to decide how to handle it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // ── Sequences ──
    /// A block of statements.
    StmtList { children: Vec<Node> },
    /// A comma-separated expression list, e.g. builtin arguments or metric keys.
    ExprList { children: Vec<Node> },

    // ── Control flow ──
    /// `cond { truth } [otherwise { else_branch }]`
    ///
    /// `cond` is absent for the unconditional blocks the parser synthesizes.
    Cond {
        cond: Option<Box<Node>>,
        truth: Box<Node>,
        else_branch: Option<Box<Node>>,
    },

    // ── Expressions ──
    /// `name(args)`: call of a built-in function such as `strptime` or `len`.
    Builtin {
        name: String,
        args: Option<Box<Node>>,
    },
    /// `lhs op rhs`
    BinaryExpr {
        lhs: Box<Node>,
        op: BinOp,
        rhs: Box<Node>,
    },
    /// `op operand`, or `operand op` for the postfix increment and decrement.
    UnaryExpr { op: UnaryOp, operand: Box<Node> },
    /// `base[index]`
    IndexedExpr { base: Box<Node>, index: Box<Node> },

    // ── Definitions ──
    /// `def name { children }`: a named block used by decorators.
    Def { name: String, children: Vec<Node> },
    /// `@name { children }`: a block wrapped by the definition `name`.
    Deco { name: String, children: Vec<Node> },

    // ── Terminals ──
    /// `/pattern/`
    Regex { pattern: String },
    /// A bare identifier, usually a metric name.
    Id { name: String },
    /// `$name` or `$1`: a reference to a regex capture group.
    CaptureRef { name: String },
    /// `counter name by key1, key2 as "exported"`
    Decl {
        name: String,
        metric: MetricKind,
        keys: Vec<String>,
        hidden: bool,
        exported_name: Option<String>,
    },
    /// `"text"`
    StringConst { text: String },
    /// `42`
    IntConst { value: i64 },
    /// `3.14`
    ///
    /// Literals that overflow to infinity, and NaN, are written to JSON as
    /// the strings `"inf"`, `"-inf"` and `"NaN"`.
    FloatConst {
        #[serde(with = "float_literal")]
        value: f64,
    },
    /// `next`: placeholder inside a `def` body where the decorated block runs.
    Next,
    /// `otherwise`: matches when no sibling condition did.
    Otherwise,
}

impl NodeKind {
    /// Stable variant name, used in traces, logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::StmtList { .. } => "StmtList",
            NodeKind::ExprList { .. } => "ExprList",
            NodeKind::Cond { .. } => "Cond",
            NodeKind::Builtin { .. } => "Builtin",
            NodeKind::BinaryExpr { .. } => "BinaryExpr",
            NodeKind::UnaryExpr { .. } => "UnaryExpr",
            NodeKind::IndexedExpr { .. } => "IndexedExpr",
            NodeKind::Def { .. } => "Def",
            NodeKind::Deco { .. } => "Deco",
            NodeKind::Regex { .. } => "Regex",
            NodeKind::Id { .. } => "Id",
            NodeKind::CaptureRef { .. } => "CaptureRef",
            NodeKind::Decl { .. } => "Decl",
            NodeKind::StringConst { .. } => "StringConst",
            NodeKind::IntConst { .. } => "IntConst",
            NodeKind::FloatConst { .. } => "FloatConst",
            NodeKind::Next => "Next",
            NodeKind::Otherwise => "Otherwise",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    // Logical
    Or,
    And,
    // Comparison
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    // Regex
    Match,
    NotMatch,
    // Bitwise
    BitAnd,
    BitOr,
    Xor,
    Shl,
    Shr,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    // Assignment
    Assign,
    AddAssign,
}

impl BinOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::Less => "<",
            BinOp::Greater => ">",
            BinOp::LessEq => "<=",
            BinOp::GreaterEq => ">=",
            BinOp::Match => "=~",
            BinOp::NotMatch => "!~",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::Xor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::Assign => "=",
            BinOp::AddAssign => "+=",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `!x`
    Not,
    /// `-x`
    Neg,
    /// `x++`
    Inc,
    /// `x--`
    Dec,
}

impl UnaryOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::Inc => "++",
            UnaryOp::Dec => "--",
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Declarations
// ══════════════════════════════════════════════════════════════════════════════

/// The kind of metric a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Counter,
    Gauge,
    Timer,
    Text,
    Histogram,
}

impl MetricKind {
    /// The keyword that declares this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Timer => "timer",
            MetricKind::Text => "text",
            MetricKind::Histogram => "histogram",
        }
    }
}

/// JSON form of float literals. JSON numbers cannot hold non-finite values,
/// so those travel as strings.
mod float_literal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!(
                    "invalid float literal {other:?}, expected a number, \"inf\", \"-inf\" or \"NaN\""
                ))),
            },
        }
    }
}
