//! Shared error and exit-code types for CLI commands.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Input failed validation (e.g. no categorized file among the inputs).
    ValidationFailed = 1,
    /// A file could not be read or written.
    IoError = 2,
    /// A document could not be parsed.
    ParseError = 3,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error raised by a CLI command, carrying a user-facing message and the
/// exit code the process should terminate with.
#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Validation,
    Io,
    Parse,
}

impl CliError {
    /// Creates a validation error (rejected or unusable input).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (file read/write failure).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a parse error (malformed document).
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Parse,
            message: message.into(),
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::ValidationFailed,
            ErrorKind::Io => ExitCode::IoError,
            ErrorKind::Parse => ExitCode::ParseError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_distinct_exit_codes() {
        assert_eq!(
            CliError::validation("v").exit_code(),
            ExitCode::ValidationFailed
        );
        assert_eq!(CliError::io("i").exit_code(), ExitCode::IoError);
        assert_eq!(CliError::parse("p").exit_code(), ExitCode::ParseError);
    }

    #[test]
    fn test_display_is_the_plain_message() {
        assert_eq!(CliError::validation("no category").to_string(), "no category");
    }
}
