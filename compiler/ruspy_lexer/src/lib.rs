//! Lexer for Ruspy using logos with string interning.
//!
//! Whitespace and comments are dropped; every other byte of the input ends
//! up in exactly one token, with unrecognized input becoming
//! [`TokenKind::Error`]. The list always ends with [`TokenKind::Eof`].

mod escape;
mod lex_error;

use logos::{FilterResult, Logos};
use ruspy_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // Consumed by the callback; only an unterminated comment surfaces, as an error.
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("fn")]
    Fn,
    #[token("let")]
    Let,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("as")]
    As,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("_")]
    Underscore,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("..")]
    DotDot,
    #[token("..=")]
    DotDotEq,

    // Integers; `None` from a callback (overflow, no digits) is a lex error.
    #[regex(r"[0-9][0-9_]*", |lex| parse_int(lex.slice(), 0, 10))]
    #[regex(r"0[bB][01_]*", |lex| parse_int(lex.slice(), 2, 2))]
    #[regex(r"0[oO][0-7_]*", |lex| parse_int(lex.slice(), 2, 8))]
    #[regex(r"0[xX][0-9a-fA-F_]*", |lex| parse_int(lex.slice(), 2, 16))]
    Int(u64),

    // Floats need a fraction, an exponent, or a width suffix.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?(f32|f64)?", |lex| parse_float(lex.slice()))]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+(f32|f64)?", |lex| parse_float(lex.slice()))]
    #[regex(r"[0-9][0-9_]*(f32|f64)", |lex| parse_float(lex.slice()))]
    Float(f64),

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*|_[a-zA-Z0-9_]+")]
    Ident,
}

/// Skip a non-nested `/* ... */` comment. Without a closing `*/` the rest
/// of the input becomes one error token.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}

/// Parse an integer literal body, skipping a `prefix_len`-byte radix prefix.
fn parse_int(slice: &str, prefix_len: usize, radix: u32) -> Option<u64> {
    let digits: String = slice[prefix_len..].chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(&digits, radix).ok()
}

/// Parse a float literal; an `f32` suffix rounds to single precision.
#[allow(
    clippy::cast_possible_truncation,
    reason = "rounding to f32 is what the suffix asks for"
)]
fn parse_float(slice: &str) -> Option<f64> {
    let (body, single) = if let Some(body) = slice.strip_suffix("f32") {
        (body, true)
    } else {
        (slice.strip_suffix("f64").unwrap_or(slice), false)
    };
    let cleaned: String = body.chars().filter(|&c| c != '_').collect();
    let value = cleaned.parse::<f64>().ok()?;
    Some(if single {
        f64::from(value as f32)
    } else {
        value
    })
}

/// Tokens plus every lexical error, in source order.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
///
/// Lexical errors are kept in the stream as `TokenKind::Error`; use
/// [`lex_with_errors`] to also get them classified.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    lex_with_errors(source, interner).tokens
}

/// Lex source code, collecting classified errors alongside the tokens.
pub fn lex_with_errors(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 3 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match result {
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => {
                output.errors.push(LexError::classify(slice, span));
                TokenKind::Error
            }
        };
        output.tokens.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    output.tokens.push(Token::new(TokenKind::Eof, eof));
    output
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f.to_bits()),
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&escape::unescape_string(body)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::BlockComment => TokenKind::Error,

        RawToken::Fn => TokenKind::Fn,
        RawToken::Let => TokenKind::Let,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::While => TokenKind::While,
        RawToken::Return => TokenKind::Return,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::As => TokenKind::As,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Underscore => TokenKind::Underscore,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Eq => TokenKind::Eq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::DotDotEq => TokenKind::DotDotEq,
    }
}
