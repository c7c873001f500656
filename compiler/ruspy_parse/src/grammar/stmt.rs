//! Statements, sequences and blocks.

use ruspy_ir::{Expr, ExprId, ExprKind, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Script body: a sequence up to end of input.
    ///
    /// A lone expression is returned as-is; anything else is wrapped in a
    /// root block. The evaluator runs a root block's statements in the
    /// global scope, not a child scope.
    pub(crate) fn parse_script(&mut self) -> ExprId {
        let start = self.current_span();
        let (stmts, result) = self.parse_seq(TokenKind::Eof);

        if stmts.is_empty() && result.is_valid() {
            return result;
        }

        let span = start.merge(self.current_span());
        let stmts = self.arena.alloc_expr_list(stmts);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Block { stmts, result }, span))
    }

    /// `{ seq }`
    pub(crate) fn parse_block(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::LBrace)?;
        let (stmts, result) = self.parse_seq(TokenKind::RBrace);
        let end = self
            .expect(TokenKind::RBrace)
            .map_err(|e| e.in_context(ErrorContext::Block))?;

        self.check_list_len(stmts.len(), "statements in one block", end)?;
        let stmts = self.arena.alloc_expr_list(stmts);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Block { stmts, result },
            start.merge(end),
        )))
    }

    /// `stmt (";" stmt)* ";"?` up to (not including) `terminator`.
    ///
    /// Returns the statements evaluated for effect and the trailing result
    /// expression, which is `INVALID` when the sequence is empty or ends
    /// with `;`. Block-like statements (`if`, loops, blocks, nested `fn`)
    /// need no `;` before the next statement. Errors are recorded and the
    /// parser resumes at the next statement.
    pub(crate) fn parse_seq(&mut self, terminator: TokenKind) -> (Vec<ExprId>, ExprId) {
        let mut stmts = Vec::new();

        loop {
            if self.check(terminator) || self.is_at_end() {
                return (stmts, ExprId::INVALID);
            }
            if self.eat(TokenKind::Semicolon) {
                continue;
            }

            let before = self.cursor.position();
            let stmt = match self.parse_stmt() {
                Ok(id) => id,
                Err(error) => {
                    self.record(error);
                    self.synchronize_statement();
                    if self.cursor.position() == before {
                        self.advance();
                    }
                    continue;
                }
            };

            if self.eat(TokenKind::Semicolon) {
                stmts.push(stmt);
            } else if self.check(terminator) || self.is_at_end() {
                return (stmts, stmt);
            } else if self.arena.get_expr(stmt).kind.is_block_like() {
                stmts.push(stmt);
            } else {
                self.record(ParseError::unexpected(
                    self.current_kind(),
                    "`;`",
                    self.current_span(),
                ));
                stmts.push(stmt);
                self.synchronize_statement();
            }
        }
    }

    /// `stmt := "let" IDENT (":" IDENT)? "=" expr | "fn" fn_decl | expr`
    fn parse_stmt(&mut self) -> Result<ExprId, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self
                .parse_let()
                .map_err(|e| e.in_context(ErrorContext::LetBinding)),
            TokenKind::Fn => {
                let start = self.advance().span;
                let (name, params, body) = self
                    .parse_function_rest()
                    .map_err(|e| e.in_context(ErrorContext::FunctionDef))?;
                let span = start.merge(self.span_of(body));
                Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::FnDecl { name, params, body }, span)))
            }
            // A statement that starts with a block-like form ends with it:
            // `if c { a } -1` is two statements, not a subtraction.
            TokenKind::LBrace | TokenKind::If | TokenKind::For | TokenKind::While => {
                self.parse_primary()
            }
            _ => self.parse_expr(),
        }
    }

    fn parse_let(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(TokenKind::Let)?;
        let (name, _) = self.expect_ident()?;
        if self.eat(TokenKind::Colon) {
            self.expect_ident()?;
        }
        self.expect(TokenKind::Eq)?;
        let init = self.parse_expr()?;
        let span = start.merge(self.span_of(init));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Let { name, init }, span)))
    }
}
