//! RAII scope guards.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside a
//! scope calls interpreter methods directly. Dropping the guard restores
//! the previous scope on every exit path, `?` included.
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.env.define(name, value);
//! scoped.eval(body)?;
//! // previous scope restored here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::ScopeId;

pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    saved: ScopeId,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.leave(self.saved);
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a fresh child of the current scope.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        let saved = self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            saved,
        }
    }

    /// Enter a fresh child of `scope`, typically a function's captured
    /// scope, detaching from the caller's chain.
    pub fn scoped_in(&mut self, scope: ScopeId) -> ScopedInterpreter<'_> {
        let saved = self.env.enter(scope);
        ScopedInterpreter {
            interpreter: self,
            saved,
        }
    }
}
