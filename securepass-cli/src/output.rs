// securepass-cli/src/output.rs
use serde::Serialize;
use std::io::IsTerminal;

/// True when stdout is a TTY and styled human output is appropriate;
/// piped output gets the JSON envelope instead.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Standard JSON response envelope
#[derive(Debug, Serialize)]
pub struct Response<T> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorResponse>,
}

impl<T> Response<T> {
    pub fn ok(result: T) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(error: ErrorResponse) -> Response<()> {
        Response::<()> {
            ok: false,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    type_: &'static str,
    message: String,
}

impl ErrorResponse {
    pub fn validation_failed(message: String) -> Self {
        Self {
            type_: "validation_failed",
            message,
        }
    }
}

/// Exit codes for script consumption
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    PermanentError = 2,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

// Print response to stdout
pub fn print_response<T: Serialize>(resp: &Response<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(resp)?);
    Ok(())
}

/// Print a styled success message
pub fn print_success(message: &str) {
    let term = console::Term::stdout();
    let _ = term.write_str(&format!("{} {}\n", console::style("✓").green(), message));
}

/// Print a styled error message
pub fn print_error(message: &str) {
    let term = console::Term::stderr();
    let _ = term.write_str(&format!("{} {}\n", console::style("Error:").red(), message));
}

/// Print a styled key/value header
pub fn print_header(key: &str, value: &str) {
    let term = console::Term::stdout();
    let _ = term.write_str(&format!("{}: {}\n", console::style(key).bold(), value));
}
