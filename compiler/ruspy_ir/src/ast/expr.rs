//! Expression nodes.

use std::fmt;

use crate::{BinaryOp, ExprId, ExprRange, Name, ParamRange, Span, UnaryOp};

/// Expression node: a kind plus the source span it was parsed from.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Every syntactic form the interpreter understands.
///
/// Optional children use [`ExprId::INVALID`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    // Literals
    Int(i64),
    /// Float literal stored as bits.
    Float(u64),
    Bool(bool),
    Str(Name),
    Null,

    /// Variable reference.
    Ident(Name),

    /// `let name = init`: binds in the current scope.
    Let { name: Name, init: ExprId },

    /// `name = value`: rebinds the nearest owner, or creates a local.
    Assign { name: Name, value: ExprId },

    /// `name op= value`
    AssignOp {
        name: Name,
        op: BinaryOp,
        value: ExprId,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary { op: UnaryOp, operand: ExprId },

    /// `expr as target`; the target is a type name such as `int`.
    Cast { expr: ExprId, target: Name },

    Call { func: ExprId, args: ExprRange },

    /// `if cond { .. } else ..`; an `else if` chain nests another `If`
    /// in `else_branch`.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    For {
        binding: Name,
        iter: ExprId,
        body: ExprId,
    },

    While { cond: ExprId, body: ExprId },

    /// `|a, b| body`
    Lambda { params: ParamRange, body: ExprId },

    /// Function declaration nested in a block.
    FnDecl {
        name: Name,
        params: ParamRange,
        body: ExprId,
    },

    /// `start..end` or `start..=end`
    Range {
        start: ExprId,
        end: ExprId,
        inclusive: bool,
    },

    /// `{ stmts; result }`; `result` is `INVALID` when the block ends
    /// with `;` or is empty.
    Block { stmts: ExprRange, result: ExprId },

    /// `return` with an optional value.
    Return(ExprId),
    Break,
    Continue,

    /// Placeholder produced during parse error recovery.
    Error,
}

impl ExprKind {
    /// Float literal helper.
    #[inline]
    pub fn float(value: f64) -> Self {
        ExprKind::Float(value.to_bits())
    }

    /// Whether this is a block-like form that can end a statement without `;`.
    pub const fn is_block_like(&self) -> bool {
        matches!(
            self,
            ExprKind::Block { .. }
                | ExprKind::If { .. }
                | ExprKind::For { .. }
                | ExprKind::While { .. }
                | ExprKind::FnDecl { .. }
        )
    }
}
