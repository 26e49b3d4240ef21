//! Shared types for the tally compiler.
//!
//! This crate defines the AST node types and source positions shared by the
//! traversal engine and every compiler pass built on top of it.

mod position;
pub mod ast;

pub use ast::{BinOp, MetricKind, Node, NodeKind, UnaryOp};
pub use position::Position;
