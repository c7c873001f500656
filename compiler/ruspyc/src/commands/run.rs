//! The `run` and `eval` commands.

use ruspy_eval::stdout_handler;

use super::{read_file, report, CliError, CliOptions};

/// Load a module file and call its `main()`.
pub fn run_file(path: &str, options: &CliOptions) -> Result<(), CliError> {
    let source = read_file(path)?;
    let mut session = options.session(stdout_handler());
    session
        .run(&source)
        .map(|_| ())
        .map_err(|e| report(&e, &source, Some(path), options))
}

/// Evaluate a file as a script and print `> value`.
pub fn eval_file(path: &str, options: &CliOptions) -> Result<(), CliError> {
    let source = read_file(path)?;
    eval_and_print(&source, Some(path), options)
}

/// Evaluate source passed with `-e`.
pub fn eval_inline(source: &str, options: &CliOptions) -> Result<(), CliError> {
    eval_and_print(source, None, options)
}

fn eval_and_print(source: &str, path: Option<&str>, options: &CliOptions) -> Result<(), CliError> {
    let mut session = options.session(stdout_handler());
    match session.eval(source) {
        Ok(value) => {
            println!("> {value}");
            Ok(())
        }
        Err(e) => Err(report(&e, source, path, options)),
    }
}
