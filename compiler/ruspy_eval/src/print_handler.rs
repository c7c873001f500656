//! Destination for `print` and `println`.
//!
//! Programs write to stdout; tests and embedders capture output in a
//! buffer and inspect it after evaluation. Dispatch is a plain enum.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes each line to the process's stdout.
#[derive(Default, Debug)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        // A closed pipe must not abort evaluation.
        let _ = writeln!(out, "{msg}");
    }
}

/// Captures output in memory.
#[derive(Default, Debug)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler, chosen when the interpreter is built.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Captured output; always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Handler shared between the interpreter and whoever built it.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("hello");
        handler.println("world");
        assert_eq!(handler.get_output(), "hello\nworld\n");
    }

    #[test]
    fn test_buffer_clear() {
        let handler = buffer_handler();
        handler.println("x");
        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_stdout_captures_nothing() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output(), "");
        handler.clear();
    }

    #[test]
    fn test_shared_handle_sees_interpreter_output() {
        let handler = buffer_handler();
        let alias = Arc::clone(&handler);
        alias.println("from alias");
        assert_eq!(handler.get_output(), "from alias\n");
    }
}
