//! Diagnostics for Ruspy.
//!
//! Every user-facing failure, from a stray character to a runtime
//! `NameError`, is turned into a [`Diagnostic`] carrying an [`ErrorCode`],
//! a message and labeled spans, then rendered by an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
