//! Module loading: a file of top-level `fn` declarations.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use ruspy_ir::Module;

use crate::errors::{missing_main, EvalError};
use crate::{FunctionValue, Interpreter, ScopeRef, Value};

/// Functions of a loaded module, keyed by name, in order of first
/// declaration.
#[derive(Clone, Debug, Default)]
pub struct ModuleMap {
    names: Vec<Arc<str>>,
    values: FxHashMap<Arc<str>, Value>,
}

impl ModuleMap {
    /// Insert or overwrite; an overwritten name keeps its original position.
    fn insert(&mut self, name: Arc<str>, value: Value) {
        if self.values.insert(Arc::clone(&name), value).is_none() {
            self.names.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| &**n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names
            .iter()
            .filter_map(|n| self.values.get(n).map(|v| (&**n, v)))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Interpreter {
    /// Define every function of `module` in the global scope, in source
    /// order. A later declaration of a name replaces the earlier one. No
    /// function body runs.
    ///
    /// `module` must have been parsed into this interpreter's current arena.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load_module(&mut self, module: &Module) -> Result<ModuleMap, EvalError> {
        let mut map = ModuleMap::default();
        for func in &module.functions {
            let name: Arc<str> = Arc::from(self.interner.lookup(func.name));
            let value = Value::Function(FunctionValue {
                name: Some(Arc::clone(&name)),
                params: func.params,
                body: func.body,
                captured: ScopeRef::global(),
                arena: Arc::clone(&self.arena),
            });
            self.env.define_global(func.name, value.clone());
            map.insert(name, value);
        }
        tracing::debug!(functions = map.len(), "module loaded");
        Ok(map)
    }

    /// Load `module`, then call its `main` with no arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_module(&mut self, module: &Module) -> Result<Value, EvalError> {
        let map = self.load_module(module)?;
        let main = map.get("main").ok_or_else(missing_main)?;
        self.call_value(main, &[])
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use ruspy_ir::StringInterner;

    use crate::{buffer_handler, ErrorCategory, EvalError, Interpreter, InterpreterBuilder, Value};

    use super::ModuleMap;

    fn load(source: &str) -> (Interpreter, Result<ModuleMap, EvalError>, ruspy_ir::Module) {
        let interner = Arc::new(StringInterner::new());
        let tokens = ruspy_lexer::lex(source, &interner);
        let parsed = ruspy_parse::parse_module(&tokens, &interner);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let mut interpreter = InterpreterBuilder::new(interner, Arc::new(parsed.arena))
            .print_handler(buffer_handler())
            .build();
        let map = interpreter.load_module(&parsed.module);
        (interpreter, map, parsed.module)
    }

    #[test]
    fn test_load_keeps_declaration_order() {
        let (_, map, _) = load("fn b() { 1 } fn a() { 2 } fn c() { 3 }");
        let map = map.unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(map.len(), 3);
        assert!(map.contains("a"));
        assert!(!map.contains("main"));
    }

    #[test]
    fn test_later_declaration_overwrites() {
        let (mut interpreter, map, _) = load("fn f() { 1 } fn g() { 0 } fn f() { 2 }");
        let map = map.unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["f", "g"]);
        let f = map.get("f").unwrap().clone();
        assert_eq!(interpreter.call_value(&f, &[]).unwrap(), Value::Int(2));
    }

    #[test]
    fn test_functions_are_global() {
        let (mut interpreter, map, _) = load(
            "fn even(n) { if n == 0 { true } else { odd(n - 1) } }
             fn odd(n) { if n == 0 { false } else { even(n - 1) } }",
        );
        let even = map.unwrap().get("even").unwrap().clone();
        assert_eq!(
            interpreter.call_value(&even, &[Value::Int(10)]).unwrap(),
            Value::Bool(true)
        );
        assert!(interpreter.global("odd").is_some());
    }

    #[test]
    fn test_load_does_not_run_bodies() {
        let (interpreter, map, _) = load("fn main() { println(\"ran\") }");
        assert!(map.is_ok());
        assert_eq!(interpreter.print_handler().get_output(), "");
    }

    #[test]
    fn test_run_module_calls_main() {
        let (mut interpreter, _, module) = load("fn main() { println(\"hello world!\") }");
        let result = interpreter.run_module(&module).unwrap();
        assert_eq!(result, Value::Unit);
        assert_eq!(interpreter.print_handler().get_output(), "hello world!\n");
    }

    #[test]
    fn test_run_module_without_main() {
        let (mut interpreter, _, module) = load("fn helper() { 1 }");
        let err = interpreter.run_module(&module).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ModuleError);
    }

    #[test]
    fn test_main_with_parameters_is_arity_error() {
        let (mut interpreter, _, module) = load("fn main(argv) { argv }");
        let err = interpreter.run_module(&module).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ArityError);
    }

    #[test]
    fn test_empty_module() {
        let (_, map, _) = load("");
        assert!(map.unwrap().is_empty());
    }
}
