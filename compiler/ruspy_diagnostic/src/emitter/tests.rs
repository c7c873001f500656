use pretty_assertions::assert_eq;
use ruspy_ir::Span;

use super::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use crate::{Diagnostic, ErrorCode};

fn render(diag: &Diagnostic, source: Option<&str>, colors: bool) -> String {
    let mode = if colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    if let Some(src) = source {
        emitter = emitter.with_source(src).with_file_path("demo.rpy");
    }
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn test_snippet_with_caret() {
    let source = "fn main() {\n    x + y\n}";
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("undefined variable `y`")
        .with_label(Span::new(20, 21), "not found in this scope");

    let text = render(&diag, Some(source), false);
    let expected = "\
error[E6001]: undefined variable `y`
  --> demo.rpy:2:9
  |
2 |     x + y
  |         ^ not found in this scope

";
    assert_eq!(text, expected);
}

#[test]
fn test_without_source_falls_back_to_offsets() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token")
        .with_label(Span::new(3, 4), "here")
        .with_note("expected `)`");

    let text = render(&diag, None, false);
    assert!(text.starts_with("error[E1001]: unexpected token\n"));
    assert!(text.contains("--> 3..4: here"));
    assert!(text.contains("= note: expected `)`"));
}

#[test]
fn test_colors_emit_ansi() {
    let diag = Diagnostic::error(ErrorCode::E6004).with_message("division by zero");
    let text = render(&diag, None, true);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E6004"));
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(
        text,
        "error: aborting due to previous error\nerror: aborting due to 3 previous errors\n"
    );
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
    assert!(!ColorMode::Auto.should_use_colors(false));
}
