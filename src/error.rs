//! Errors a command can end with.
//!
//! None of these ever leave the executor as a panic or an `Err`: it renders
//! each one as a single `error` line, optionally followed by a hint line, and
//! an exit code.

use thiserror::Error;

/// Exit code for a generic failure.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an unknown command, as in POSIX shells.
pub const EXIT_NOT_FOUND: i32 = 127;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("{cmd}: {path}: No such file or directory")]
    NotFound { cmd: &'static str, path: String },

    #[error("{cmd}: {path}: Not a directory")]
    NotADirectory { cmd: &'static str, path: String },

    #[error("{cmd}: {path}: Is a directory")]
    IsADirectory { cmd: &'static str, path: String },

    #[error("{cmd}: cannot access '{path}': {reason}")]
    CannotAccess {
        cmd: &'static str,
        path: String,
        reason: &'static str,
    },

    #[error("{cmd}: missing {what}")]
    Missing {
        cmd: &'static str,
        what: &'static str,
        hint: Option<String>,
    },

    #[error("{cmd}: invalid option '{value}'")]
    InvalidOption {
        cmd: &'static str,
        value: String,
        hint: Option<String>,
    },

    #[error("{cmd}: invalid {what} '{value}'")]
    InvalidValue {
        cmd: &'static str,
        what: &'static str,
        value: String,
        hint: Option<String>,
    },

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{0}: no display host attached")]
    NoHost(String),
}

impl ShellError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::CommandNotFound(_) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }

    /// Follow-up line printed under the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            ShellError::Missing { hint, .. }
            | ShellError::InvalidOption { hint, .. }
            | ShellError::InvalidValue { hint, .. } => hint.clone(),
            ShellError::CommandNotFound(_) => {
                Some("Type 'help' to see available commands.".to_string())
            }
            ShellError::NoHost(_) => None,
            ShellError::NotFound { .. }
            | ShellError::NotADirectory { .. }
            | ShellError::IsADirectory { .. }
            | ShellError::CannotAccess { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        let err = ShellError::NotFound { cmd: "cd", path: "void".into() };
        assert_eq!(err.to_string(), "cd: void: No such file or directory");
        let err = ShellError::Missing { cmd: "cat", what: "file operand", hint: None };
        assert_eq!(err.to_string(), "cat: missing file operand");
        let err = ShellError::CommandNotFound("frobnicate".into());
        assert_eq!(err.to_string(), "frobnicate: command not found");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ShellError::CommandNotFound("x".into()).exit_code(), EXIT_NOT_FOUND);
        assert_eq!(ShellError::NoHost("network".into()).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_hint_for_unknown_command() {
        let hint = ShellError::CommandNotFound("x".into()).hint();
        assert!(hint.unwrap().contains("help"));
    }
}
