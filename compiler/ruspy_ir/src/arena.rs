//! Contiguous storage for the flat syntax tree.

use std::fmt;
use std::sync::Arc;

use crate::{Expr, ExprId, ExprRange, Param, ParamRange};

/// Owner of every expression, expression list and parameter of one parse.
///
/// Child references are [`ExprId`] indices; argument and statement lists
/// are [`ExprRange`]s into `expr_lists`.
#[derive(Clone, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    params: Vec<Param>,
}

/// Arena shared by the interpreter and the values it hands out.
pub type SharedArena = Arc<ExprArena>;

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a source of `source_len` bytes (about one node per 8 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated / 2),
            params: Vec::with_capacity(estimated / 16),
        }
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "arena indices are u32 by construction"
    )]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Non-panicking lookup, `None` for `INVALID` or foreign ids.
    #[inline]
    pub fn try_get_expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "arena indices are u32 and lists are capped at u16::MAX by the parser"
    )]
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len() as u32;
        self.expr_lists.extend(exprs);
        let len = (self.expr_lists.len() - start as usize) as u16;
        ExprRange::new(start, len)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "arena indices are u32 and lists are capped at u16::MAX by the parser"
    )]
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = self.params.len() as u32;
        self.params.extend(params);
        let len = (self.params.len() - start as usize) as u16;
        ParamRange::new(start, len)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Param] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("expr_lists", &self.expr_lists.len())
            .field("params", &self.params.len())
            .finish()
    }
}
