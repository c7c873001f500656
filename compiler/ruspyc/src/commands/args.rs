//! Command-line argument parsing.

use ruspy_diagnostic::emitter::ColorMode;
use ruspy_eval::{InterpreterConfig, SharedPrintHandler};

use super::CliError;
use crate::Session;

/// What to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load a module and call `main()`.
    Run { path: String },
    /// Evaluate a file as a script and print its value.
    Eval { path: String },
    /// Evaluate source given on the command line.
    Inline { source: String },
    Lex { path: String },
    Parse { path: String },
    Explain { code: String },
    Help,
    Version,
}

/// Flags accepted by every command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    pub max_call_depth: usize,
    /// Treat the file as a script rather than a module.
    pub script: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            color: ColorMode::Auto,
            max_call_depth: InterpreterConfig::DEFAULT_MAX_CALL_DEPTH,
            script: false,
        }
    }
}

impl CliOptions {
    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig {
            max_call_depth: self.max_call_depth,
        }
    }

    pub(crate) fn session(&self, print_handler: SharedPrintHandler) -> Session {
        Session::with_options(print_handler, self.interpreter_config())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: CliOptions,
}

/// Parse the arguments after the program name.
///
/// Flags may appear anywhere. With no command, prints help. A bare file
/// path runs it as a module, or as a script with `--script`.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut options = CliOptions::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut inline: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| CliError::InvalidFlag {
                flag: "--color",
                value: value.to_string(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = value
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| CliError::InvalidFlag {
                    flag: "--max-depth",
                    value: value.to_string(),
                })?;
        } else if arg == "--script" {
            options.script = true;
        } else if arg == "-e" {
            let source = iter
                .next()
                .ok_or_else(|| CliError::Usage("-e requires a source argument".to_string()))?;
            inline = Some(source.clone());
        } else {
            positional.push(arg);
        }
    }

    let command = match (inline, positional.as_slice()) {
        (Some(source), []) => Command::Inline { source },
        (Some(_), [extra, ..]) => {
            return Err(CliError::Usage(format!(
                "unexpected argument '{extra}' after -e"
            )))
        }
        (None, []) => Command::Help,
        (None, [command, rest @ ..]) => parse_command(command, rest, options.script)?,
    };
    Ok(Invocation { command, options })
}

fn parse_command(command: &str, rest: &[&str], script: bool) -> Result<Command, CliError> {
    let operand = |usage: &str| -> Result<String, CliError> {
        match rest {
            [one] => Ok((*one).to_string()),
            [] => Err(CliError::Usage(format!("usage: ruspy {usage}"))),
            [_, extra, ..] => Err(CliError::Usage(format!("unexpected argument '{extra}'"))),
        }
    };

    let command = match command {
        "run" => Command::Run {
            path: operand("run <file.rpy>")?,
        },
        "eval" => Command::Eval {
            path: operand("eval <file.rpy>")?,
        },
        "lex" => Command::Lex {
            path: operand("lex <file.rpy>")?,
        },
        "parse" => Command::Parse {
            path: operand("parse <file.rpy>")?,
        },
        "explain" | "--explain" => Command::Explain {
            code: operand("explain <E####>")?,
        },
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        path if looks_like_source(path) => {
            if let [extra, ..] = rest {
                return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
            }
            let path = path.to_string();
            if script {
                Command::Eval { path }
            } else {
                Command::Run { path }
            }
        }
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn looks_like_source(arg: &str) -> bool {
    !arg.starts_with('-')
        && std::path::Path::new(arg)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("rpy"))
}
