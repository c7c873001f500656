//! Operator matching helpers for the precedence chain.

use ruspy_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_or_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::PipePipe).then_some(BinaryOp::Or)
    }

    pub(crate) fn match_and_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::AmpAmp).then_some(BinaryOp::And)
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_bitor_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::Pipe).then_some(BinaryOp::BitOr)
    }

    pub(crate) fn match_bitxor_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::Caret).then_some(BinaryOp::BitXor)
    }

    pub(crate) fn match_bitand_op(&self) -> Option<BinaryOp> {
        (self.current_kind() == TokenKind::Amp).then_some(BinaryOp::BitAnd)
    }

    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// Compound assignment operator after an identifier (`+=` and friends).
    pub(crate) fn match_compound_assign_op(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::PlusEq => Some(BinaryOp::Add),
            TokenKind::MinusEq => Some(BinaryOp::Sub),
            TokenKind::StarEq => Some(BinaryOp::Mul),
            TokenKind::SlashEq => Some(BinaryOp::Div),
            TokenKind::PercentEq => Some(BinaryOp::Mod),
            _ => None,
        }
    }
}
