//! The `explain` command: describe an error code.

use ruspy_diagnostic::ErrorCode;

use super::CliError;

pub fn explain_error(code: &str) -> Result<(), CliError> {
    let code = ErrorCode::parse(code).ok_or_else(|| CliError::UnknownErrorCode(code.to_string()))?;
    println!("{code}: {}", code.description());
    Ok(())
}
