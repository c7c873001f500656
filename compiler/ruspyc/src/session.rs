//! Sessions: the lex, parse and evaluate pipeline over one interpreter.

use std::sync::Arc;

use ruspy_eval::errors::undefined_variable;
use ruspy_eval::{
    buffer_handler, stdout_handler, Interpreter, InterpreterBuilder, InterpreterConfig, ModuleMap,
    SharedPrintHandler, Value,
};
use ruspy_ir::{ExprArena, ExprId, Module, StringInterner, TokenList};

use crate::RuspyError;

/// An interpreter fed one source text at a time.
///
/// Globals, including functions, persist between calls: a function
/// defined by one [`Session::eval`] can be called from the next.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Session printing to stdout with the default limits.
    pub fn new() -> Self {
        Session::with_options(stdout_handler(), InterpreterConfig::default())
    }

    /// Session whose `print`/`println` output is captured; read it with
    /// [`Session::output`].
    pub fn buffered() -> Self {
        Session::with_options(buffer_handler(), InterpreterConfig::default())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Session::with_options(print_handler, InterpreterConfig::default())
    }

    pub fn with_options(print_handler: SharedPrintHandler, config: InterpreterConfig) -> Self {
        let interpreter =
            InterpreterBuilder::new(Arc::new(StringInterner::new()), Arc::new(ExprArena::new()))
                .print_handler(print_handler)
                .config(config)
                .build();
        Session { interpreter }
    }

    /// Evaluate `source` as a script and return the value of its last
    /// statement.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval(&mut self, source: &str) -> Result<Value, RuspyError> {
        let (arena, root) = self.parse_script(source)?;
        self.interpreter.set_arena(Arc::new(arena));
        Ok(self.interpreter.evaluate(root)?)
    }

    /// Load `source` as a module of `fn` declarations. The functions
    /// become globals of this session; none of them runs.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(&mut self, source: &str) -> Result<ModuleMap, RuspyError> {
        let (arena, module) = self.parse_module(source)?;
        self.interpreter.set_arena(Arc::new(arena));
        Ok(self.interpreter.load_module(&module)?)
    }

    /// Load `source` as a module and call its `main()`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, source: &str) -> Result<Value, RuspyError> {
        let (arena, module) = self.parse_module(source)?;
        self.interpreter.set_arena(Arc::new(arena));
        Ok(self.interpreter.run_module(&module)?)
    }

    /// Load `source` as a module and keep it, with this session, for
    /// calling its functions from Rust.
    pub fn into_module(mut self, source: &str) -> Result<LoadedModule, RuspyError> {
        let functions = self.load(source)?;
        Ok(LoadedModule {
            session: self,
            functions,
        })
    }

    /// Call a function value with already-evaluated arguments.
    pub fn call(&mut self, callee: &Value, args: &[Value]) -> Result<Value, RuspyError> {
        Ok(self.interpreter.call_value(callee, args)?)
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.interpreter.global(name)
    }

    /// Output captured so far; empty when printing to stdout.
    pub fn output(&self) -> String {
        self.interpreter.print_handler().get_output()
    }

    pub fn clear_output(&self) {
        self.interpreter.print_handler().clear();
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    fn parse_script(&self, source: &str) -> Result<(ExprArena, ExprId), RuspyError> {
        let tokens = self.lex(source)?;
        let parsed = ruspy_parse::parse_expression(&tokens, self.interpreter.interner());
        if parsed.has_errors() {
            return Err(RuspyError::Parse(parsed.errors));
        }
        Ok((parsed.arena, parsed.root))
    }

    fn parse_module(&self, source: &str) -> Result<(ExprArena, Module), RuspyError> {
        let tokens = self.lex(source)?;
        let parsed = ruspy_parse::parse_module(&tokens, self.interpreter.interner());
        if parsed.has_errors() {
            return Err(RuspyError::Parse(parsed.errors));
        }
        Ok((parsed.arena, parsed.module))
    }

    /// Lexical errors stop the pipeline before parsing, so the parser's
    /// follow-on errors are not reported.
    fn lex(&self, source: &str) -> Result<TokenList, RuspyError> {
        let lexed = ruspy_lexer::lex_with_errors(source, self.interpreter.interner());
        if lexed.has_errors() {
            return Err(RuspyError::from_lex_errors(&lexed.errors, source));
        }
        Ok(lexed.tokens)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// The functions of a loaded module, callable from Rust.
pub struct LoadedModule {
    session: Session,
    functions: ModuleMap,
}

impl LoadedModule {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.functions.get(name)
    }

    /// Function names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.names()
    }

    pub fn functions(&self) -> &ModuleMap {
        &self.functions
    }

    /// Call the module function `name`. An unknown name is a `NameError`.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, RuspyError> {
        let function = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))?;
        self.session.call(&function, args)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
