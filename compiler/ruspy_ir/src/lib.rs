//! Ruspy IR - syntax tree and shared front-end types.
//!
//! This crate contains the data structures every other Ruspy crate agrees on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The expression arena and node kinds produced by the parser
//! - Module and function declarations
//!
//! # Design
//!
//! - **Intern identifiers**: strings become `Name(u32)`
//! - **Flatten the tree**: children are `ExprId(u32)` indices into an
//!   `ExprArena`, never `Box<Expr>`
//!
//! Float literals are stored as `u64` bits so that every node kind is `Eq` and `Hash`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, Expr, ExprKind, Function, Module, Param, UnaryOp};
pub use expr_id::{ExprId, ExprRange, ParamRange};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
