//! Native stack growth for recursive tree walks.
//!
//! The parser and the evaluator recurse once per nesting level of the
//! source. Every recursive entry point is wrapped in
//! [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the current one runs low. On `wasm32` the wrapper is a plain
//! call.
//!
//! Runaway *user* recursion (`fn f() { f() }`) is not this crate's concern:
//! the interpreter bounds call depth separately and reports an error long
//! before memory is exhausted.

/// Grow when fewer than this many bytes remain.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes left on the current stack segment, if the platform can tell.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
