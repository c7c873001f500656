//! Primary expressions: literals, names, grouping, blocks and the
//! control-flow forms.

use ruspy_ir::{Expr, ExprId, ExprKind, ExprRange, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Int(n) => {
                let value = i64::try_from(n).map_err(|_| Self::int_too_large(span))?;
                ExprKind::Int(value)
            }
            TokenKind::Float(bits) => ExprKind::Float(bits),
            TokenKind::String(name) => ExprKind::Str(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Null => ExprKind::Null,
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::Break => ExprKind::Break,
            TokenKind::Continue => ExprKind::Continue,

            TokenKind::LParen => return self.parse_paren(),
            TokenKind::LBrace => return self.parse_block(),
            TokenKind::If => {
                return self
                    .parse_if()
                    .map_err(|e| e.in_context(ErrorContext::IfExpression))
            }
            TokenKind::For => {
                return self
                    .parse_for()
                    .map_err(|e| e.in_context(ErrorContext::ForLoop))
            }
            TokenKind::While => {
                return self
                    .parse_while()
                    .map_err(|e| e.in_context(ErrorContext::WhileLoop))
            }
            TokenKind::Return => return self.parse_return(),

            found => return Err(ParseError::expected_expression(found, span)),
        };

        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// `( expr )`, or `()` for the unit value.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::LParen)?;
        if self.check(TokenKind::RParen) {
            let span = start.merge(self.advance().span);
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::Block {
                    stmts: ExprRange::EMPTY,
                    result: ExprId::INVALID,
                },
                span,
            )));
        }

        let inner = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(inner)
    }

    /// `"if" expr block ("else" (if | block))?`
    fn parse_if(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.eat(TokenKind::Else) {
            if self.check(TokenKind::If) {
                self.parse_if()?
            } else {
                self.parse_block()?
            }
        } else {
            ExprId::INVALID
        };

        let end = if else_branch.is_valid() {
            else_branch
        } else {
            then_branch
        };
        let span = start.merge(self.span_of(end));
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )))
    }

    /// `"for" IDENT "in" expr block`
    fn parse_for(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::For)?;
        let (binding, _) = self.expect_ident()?;
        self.expect(TokenKind::In)?;
        let iter = self.parse_expr()?;
        let body = self.parse_block()?;
        let span = start.merge(self.span_of(body));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::For { binding, iter, body }, span)))
    }

    /// `"while" expr block`
    fn parse_while(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::While)?;
        let cond = self.parse_expr()?;
        let body = self.parse_block()?;
        let span = start.merge(self.span_of(body));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::While { cond, body }, span)))
    }

    /// `"return" expr?`; the value is omitted before `;`, `}`, `)` or `,`.
    fn parse_return(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::Return)?;
        let value = match self.current_kind() {
            TokenKind::Semicolon
            | TokenKind::RBrace
            | TokenKind::RParen
            | TokenKind::Comma
            | TokenKind::Eof => ExprId::INVALID,
            _ => self.parse_expr()?,
        };
        let span = if value.is_valid() {
            start.merge(self.span_of(value))
        } else {
            start
        };
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Return(value), span)))
    }
}
