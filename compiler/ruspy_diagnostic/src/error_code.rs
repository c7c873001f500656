//! Error codes for all Ruspy diagnostics.

use std::fmt;

/// Error codes, grouped by phase in the first digit:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E6xxx: evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character or unterminated token
    E0001,
    /// Malformed or out-of-range literal
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,
    /// Only `fn` declarations are allowed at module level
    E1004,

    // Runtime Errors (E6xxx)
    /// Undefined name
    E6001,
    /// Type error
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Division or modulo by zero
    E6004,
    /// Module has no `main`
    E6005,
    /// `break`, `continue` or `return` outside its construct
    E6006,
    /// Call depth limit exceeded
    E6007,
    /// Other runtime error
    E6099,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6099,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6099 => "E6099",
        }
    }

    /// Parse a code such as `"E6001"` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }

    /// Long-form explanation shown by `ruspy explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "The lexer found a character that does not start any token, or a \
                 string literal that is never closed."
            }
            ErrorCode::E0002 => {
                "A numeric literal is malformed or does not fit in 64 bits, for \
                 example `0b` with no digits or `99999999999999999999`."
            }
            ErrorCode::E1001 => "The parser found a token that cannot appear at this position.",
            ErrorCode::E1002 => {
                "An expression was expected, for example after a binary operator or \
                 after `=`."
            }
            ErrorCode::E1003 => {
                "Only plain names can be assigned to: `x = 1` is valid, `1 = x` and \
                 `f() = x` are not."
            }
            ErrorCode::E1004 => {
                "A module file may only contain `fn` declarations. Use `ruspy eval` \
                 (or `--script`) to evaluate loose statements."
            }
            ErrorCode::E6001 => {
                "NameError: a name was read before any `let`, assignment, parameter \
                 or declaration bound it, and it is not a builtin."
            }
            ErrorCode::E6002 => {
                "TypeError: an operator, cast, condition or call was applied to a \
                 value of the wrong kind, such as `1 + true`, `if 1 { }` or `3()`."
            }
            ErrorCode::E6003 => {
                "ArityError: a function was called with a different number of \
                 arguments than it declares."
            }
            ErrorCode::E6004 => {
                "DivisionError: an integer was divided by zero or taken modulo zero. \
                 Float division follows IEEE rules and does not raise."
            }
            ErrorCode::E6005 => {
                "ModuleError: `ruspy run` loads the module and calls `main()`, but \
                 the module declares no function named `main`."
            }
            ErrorCode::E6006 => {
                "SyntaxError: `break` or `continue` was executed outside a loop, or \
                 `return` outside a function."
            }
            ErrorCode::E6007 => {
                "The call stack grew past the configured limit, usually because of \
                 unbounded recursion. Raise it with `--max-depth=N`."
            }
            ErrorCode::E6099 => "A builtin function failed, for example `sqrt(-1)`.",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
