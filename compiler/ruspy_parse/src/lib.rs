//! Recursive descent parser for Ruspy.
//!
//! Produces a flat syntax tree in an [`ExprArena`]. Two entry points match
//! the two ways source is run:
//!
//! - [`parse_expression`]: a script, i.e. `;`-separated statements whose
//!   last expression is the result.
//! - [`parse_module`]: a file of top-level `fn` declarations.
//!
//! The parser recovers at statement boundaries, so one pass reports every
//! independent syntax error.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use ruspy_diagnostic::ErrorCode;
use ruspy_ir::{ExprArena, ExprId, Module, Name, Span, StringInterner, Token, TokenKind, TokenList};

/// Result of parsing a script.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    /// Root expression; `INVALID` only when parsing failed outright.
    pub root: ExprId,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Result of parsing a module file.
#[derive(Debug)]
pub struct ModuleOutput {
    pub arena: ExprArena,
    pub module: Module,
    pub errors: Vec<ParseError>,
}

impl ModuleOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a script: statements separated by `;`, evaluated for the value of
/// the last one.
pub fn parse_expression(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    tracing::trace!(tokens = tokens.len(), "parse_expression");
    let mut parser = Parser::new(tokens, interner);
    let root = parser.parse_script();
    ParseOutput {
        arena: parser.arena,
        root,
        errors: parser.errors,
    }
}

/// Parse a module: a sequence of `fn` declarations.
pub fn parse_module(tokens: &TokenList, interner: &StringInterner) -> ModuleOutput {
    tracing::trace!(tokens = tokens.len(), "parse_module");
    let mut parser = Parser::new(tokens, interner);
    let module = parser.parse_module_items();
    ModuleOutput {
        arena: parser.arena,
        module,
        errors: parser.errors,
    }
}

/// Parser state: the token cursor, the arena being filled and the errors
/// recorded so far.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            arena: ExprArena::with_capacity(tokens.len() * 4),
            errors: Vec::new(),
        }
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_next_kind(&self) -> TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    /// Consume `kind` if it is next.
    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with "expected `kind`".
    fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unexpected(
                self.current_kind(),
                kind.display_name(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier (or `_`) and return its name.
    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.advance().span)),
            TokenKind::Underscore => Ok((self.interner.intern("_"), self.advance().span)),
            found => Err(ParseError::unexpected(
                found,
                "identifier",
                self.current_span(),
            )),
        }
    }

    /// Skip to a statement boundary after an error: past the next `;` or up
    /// to the next `}` at the current nesting level.
    fn synchronize_statement(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::RBrace if depth == 0 => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Skip to the next top-level `fn` after an error in module mode.
    fn synchronize_item(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                TokenKind::Eof => return,
                TokenKind::Fn if depth == 0 => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
    }

    #[cold]
    fn record(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.try_get_expr(id).map_or(Span::DUMMY, |e| e.span)
    }

    fn check_list_len(&self, len: usize, what: &str, span: Span) -> Result<(), ParseError> {
        if len > usize::from(u16::MAX) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!("too many {what} (limit is {})", u16::MAX),
                span,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
