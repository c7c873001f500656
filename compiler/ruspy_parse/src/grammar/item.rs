//! Function declarations and parameter lists.

use ruspy_diagnostic::ErrorCode;
use ruspy_ir::{ExprId, Function, Module, Name, Param, ParamRange, TokenKind};

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `module := fn_decl* EOF`
    pub(crate) fn parse_module_items(&mut self) -> Module {
        let mut module = Module::new();

        while !self.is_at_end() {
            if self.check(TokenKind::Fn) {
                match self.parse_function() {
                    Ok(function) => module.functions.push(function),
                    Err(error) => {
                        self.record(error);
                        self.advance();
                        self.synchronize_item();
                    }
                }
            } else {
                let span = self.current_span();
                self.record(ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "expected `fn` declaration at module level, found {}",
                        self.current_kind().display_name()
                    ),
                    span,
                ));
                self.advance();
                self.synchronize_item();
            }
        }

        module
    }

    /// `fn name(params) { body }`, with the cursor on `fn`.
    pub(crate) fn parse_function(&mut self) -> Result<Function, ParseError> {
        let start = self.expect(TokenKind::Fn)?;
        let (name, params, body) = self
            .parse_function_rest()
            .map_err(|e| e.in_context(ErrorContext::FunctionDef))?;
        let span = start.merge(self.span_of(body));
        Ok(Function {
            name,
            params,
            body,
            span,
        })
    }

    /// Everything after `fn`: name, parameter list and body block.
    pub(crate) fn parse_function_rest(&mut self) -> Result<(Name, ParamRange, ExprId), ParseError> {
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let params = self
            .parse_params(TokenKind::RParen)
            .map_err(|e| e.in_context(ErrorContext::Parameters))?;
        let body = self.parse_block()?;
        Ok((name, params, body))
    }

    /// `param ("," param)* ","? close`, consuming `close`.
    ///
    /// `param := IDENT (":" IDENT)?`; the annotation is kept but never checked.
    pub(crate) fn parse_params(&mut self, close: TokenKind) -> Result<ParamRange, ParseError> {
        let mut params = Vec::new();

        while !self.check(close) {
            let (name, span) = self.expect_ident()?;
            let ty = if self.eat(TokenKind::Colon) {
                Some(self.expect_ident()?.0)
            } else {
                None
            };
            params.push(Param {
                name,
                ty,
                span: span.merge(self.previous_span()),
            });

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        let close_span = self.expect(close)?;
        self.check_list_len(params.len(), "parameters", close_span)?;

        Ok(self.arena.alloc_params(params))
    }
}
