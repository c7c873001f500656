//! Human-readable output with optional ANSI color.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// When to color output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Renders diagnostics rustc-style:
///
/// ```text
/// error[E6001]: undefined variable `y`
///   --> demo.rpy:2:9
///    |
///  2 |     x + y
///    |         ^ not found in this scope
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<(String, LineOffsetTable)>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so labels render with snippets.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some((source.to_owned(), LineOffsetTable::build(source)));
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        self.file_path = Some(path.to_owned());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }

    fn emit_label(&mut self, label: &Label, severity: Severity) {
        let Some((source, table)) = self.source.take() else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = writeln!(self.writer, "  {marker} {:?}: {}", label.span, label.message);
            return;
        };

        let start = label.span.start as usize;
        let (line, col) = table.line_col(&source, start);
        let text = table.line_text(&source, line);
        let gutter = line.to_string().len();

        let location = match &self.file_path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = write!(self.writer, "{:gutter$} ", "");
        self.paint(marker, colors::GUTTER);
        let _ = writeln!(self.writer, " {location}");

        let pad = format!("{:gutter$} ", "");
        self.paint(&format!("{pad}|"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.paint(&format!("{line} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");

        // Underline at least one column, clamped to the end of this line.
        let available = text.chars().count().saturating_sub(col - 1).max(1);
        let width = (label.span.len() as usize).clamp(1, available);
        let underline_char = if label.is_primary { "^" } else { "-" };
        let underline = underline_char.repeat(width);
        self.paint(&format!("{pad}|"), colors::GUTTER);
        let _ = write!(self.writer, " {:indent$}", "", indent = col - 1);
        let color = if label.is_primary {
            Self::severity_color(severity)
        } else {
            colors::GUTTER
        };
        self.paint(&format!("{underline} {}", label.message), color);
        let _ = writeln!(self.writer);

        self.source = Some((source, table));
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity;
        self.paint(&severity.to_string(), Self::severity_color(severity));
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]: {}{}",
                colors::BOLD,
                diagnostic.code,
                diagnostic.message,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]: {}", diagnostic.code, diagnostic.message);
        }
        let _ = writeln!(self.writer);

        if diagnostic.labels.is_empty() {
            if let Some(path) = self.file_path.clone() {
                let _ = writeln!(self.writer, "  --> {path}");
            }
        }
        for label in &diagnostic.labels {
            self.emit_label(label, severity);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        match error_count {
            0 => {}
            1 => {
                self.paint("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to previous error");
            }
            n => {
                self.paint("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to {n} previous errors");
            }
        }
    }
}
