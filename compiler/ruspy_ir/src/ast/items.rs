//! Module-level declarations.

use crate::{ExprId, Name, ParamRange, Span};

/// Function parameter; the optional type annotation is kept for display
/// only and never checked.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: Option<Name>,
    pub span: Span,
}

/// Top-level `fn name(params) { body }`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    pub name: Name,
    pub params: ParamRange,
    pub body: ExprId,
    pub span: Span,
}

/// A parsed source file in module mode: its function declarations in
/// source order, duplicates included.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Module {
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new() -> Self {
        Module::default()
    }
}
