//! Syntax tree node types.
//!
//! Expressions are flat: children are [`ExprId`](crate::ExprId) indices into
//! an [`ExprArena`](crate::ExprArena). Statements are expressions too; a
//! `let` or a loop simply evaluates to unit.

mod expr;
mod items;
mod operators;

pub use expr::{Expr, ExprKind};
pub use items::{Function, Module, Param};
pub use operators::{BinaryOp, UnaryOp};
