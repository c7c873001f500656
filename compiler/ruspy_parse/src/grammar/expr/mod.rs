//! Expression parsing.
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, identifiers, grouping and control-flow forms

mod operators;
mod primary;

use ruspy_diagnostic::ErrorCode;
use ruspy_ir::{BinaryOp, Expr, ExprId, ExprKind, ExprRange, Span, TokenKind, UnaryOp};
use ruspy_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// Absolute value of `i64::MIN` as `u64`, for negation folding.
const I64_MIN_ABS: u64 = 9_223_372_036_854_775_808;

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Wrapped in `ensure_sufficient_stack` so deeply nested input grows the
    /// stack instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assign())
    }

    /// `IDENT ("=" | op=) expr | lambda`
    fn parse_assign(&mut self) -> Result<ExprId, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let next = self.peek_next_kind();
            let compound = Self::match_compound_assign_op(next);
            if next == TokenKind::Eq || compound.is_some() {
                let start = self.advance().span;
                self.advance();
                let value = self.parse_expr()?;
                let span = start.merge(self.span_of(value));
                let kind = match compound {
                    Some(op) => ExprKind::AssignOp { name, op, value },
                    None => ExprKind::Assign { name, value },
                };
                return Ok(self.arena.alloc_expr(Expr::new(kind, span)));
            }
        }

        let expr = self.parse_lambda()?;
        if self.check(TokenKind::Eq) || Self::match_compound_assign_op(self.current_kind()).is_some() {
            return Err(ParseError::new(
                ErrorCode::E1003,
                "invalid assignment target: only a plain name can be assigned",
                self.span_of(expr).merge(self.current_span()),
            ));
        }
        Ok(expr)
    }

    /// `"|" params? "|" expr | "||" expr | range`
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.current_span();
        let params = match self.current_kind() {
            TokenKind::PipePipe => {
                self.advance();
                self.arena.alloc_params([])
            }
            TokenKind::Pipe => {
                self.advance();
                self.parse_params(TokenKind::Pipe)
                    .map_err(|e| e.in_context(ErrorContext::Closure))?
            }
            _ => return self.parse_range(),
        };

        let body = self
            .parse_expr()
            .map_err(|e| e.in_context(ErrorContext::Closure))?;
        let span = start.merge(self.span_of(body));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Lambda { params, body }, span)))
    }

    /// `or (".." or | "..=" or)?`
    fn parse_range(&mut self) -> Result<ExprId, ParseError> {
        let start = self.parse_or()?;

        let inclusive = match self.current_kind() {
            TokenKind::DotDot => false,
            TokenKind::DotDotEq => true,
            _ => return Ok(start),
        };
        self.advance();
        let end = self.parse_or()?;

        let span = self.span_of(start).merge(self.span_of(end));
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Range {
                start,
                end,
                inclusive,
            },
            span,
        )))
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_and, Self::match_or_op)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_comparison, Self::match_and_op)
    }

    /// Comparisons do not associate: `a < b < c` is rejected.
    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_bitor()?;
        let Some(op) = self.match_comparison_op() else {
            return Ok(left);
        };
        self.advance();
        let right = self.parse_bitor()?;

        if self.match_comparison_op().is_some() {
            return Err(ParseError::new(
                ErrorCode::E1001,
                "comparison operators cannot be chained; use `&&` to combine comparisons",
                self.current_span(),
            ));
        }

        Ok(self.alloc_binary(op, left, right))
    }

    fn parse_bitor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_bitxor, Self::match_bitor_op)
    }

    fn parse_bitxor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_bitand, Self::match_bitxor_op)
    }

    fn parse_bitand(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_shift, Self::match_bitand_op)
    }

    fn parse_shift(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_additive, Self::match_shift_op)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_multiplicative, Self::match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_left_assoc(Self::parse_cast, Self::match_multiplicative_op)
    }

    /// One left-associative precedence level.
    fn parse_left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<ExprId, ParseError>,
        matcher: fn(&Self) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = matcher(self) {
            self.advance();
            let right = operand(self)?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    /// `unary ("as" IDENT)*`
    fn parse_cast(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_unary()?;
        while self.eat(TokenKind::As) {
            let (target, target_span) = self.expect_ident()?;
            let span = self.span_of(expr).merge(target_span);
            expr = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Cast { expr, target }, span));
        }
        Ok(expr)
    }

    /// Prefix `-` and `!`.
    ///
    /// `-` directly before an integer literal folds into one `Int` node, so
    /// `-9223372036854775808` is representable.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_call();
        };
        let start = self.current_span();

        if op == UnaryOp::Neg {
            if let TokenKind::Int(n) = self.peek_next_kind() {
                self.advance();
                let span = start.merge(self.advance().span);
                let value = if n == I64_MIN_ABS {
                    i64::MIN
                } else {
                    match i64::try_from(n) {
                        Ok(v) => -v,
                        Err(_) => return Err(Self::int_too_large(span)),
                    }
                };
                return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Int(value), span)));
            }
        }

        self.advance();
        let operand = self.parse_unary()?;
        let span = start.merge(self.span_of(operand));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }

    /// `atom ("(" args? ")")*`
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let mut func = self.parse_primary()?;
        while self.eat(TokenKind::LParen) {
            let args = self
                .parse_call_args()
                .map_err(|e| e.in_context(ErrorContext::CallArguments))?;
            let span = self.span_of(func).merge(self.previous_span());
            func = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Call { func, args }, span));
        }
        Ok(func)
    }

    /// Arguments after `(`, consuming the closing `)`.
    fn parse_call_args(&mut self) -> Result<ExprRange, ParseError> {
        let mut args = Vec::new();
        while !self.check(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RParen)?;
        self.check_list_len(args.len(), "call arguments", close)?;
        Ok(self.arena.alloc_expr_list(args))
    }

    #[cold]
    pub(crate) fn int_too_large(span: Span) -> ParseError {
        ParseError::new(
            ErrorCode::E0002,
            format!("integer literal is too large (maximum is {})", i64::MAX),
            span,
        )
    }
}
