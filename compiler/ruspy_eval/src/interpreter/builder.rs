//! `InterpreterBuilder` for creating configured interpreters.

use ruspy_ir::{SharedArena, SharedInterner};

use super::Interpreter;
use crate::{register_prelude, stdout_handler, Environment, SharedPrintHandler};

/// Limits applied during evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of nested user-function calls.
    pub max_call_depth: usize,
}

impl InterpreterConfig {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// Builder for [`Interpreter`].
///
/// Output goes to stdout unless a print handler is set.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    arena: SharedArena,
    print_handler: Option<SharedPrintHandler>,
    config: InterpreterConfig,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner, arena: SharedArena) -> Self {
        InterpreterBuilder {
            interner,
            arena,
            print_handler: None,
            config: InterpreterConfig::default(),
        }
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the interpreter with the prelude bound in its global scope.
    pub fn build(self) -> Interpreter {
        let mut env = Environment::new();
        register_prelude(&mut env, &self.interner);
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
            call_depth: 0,
        }
    }
}
