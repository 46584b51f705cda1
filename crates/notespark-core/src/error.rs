//! Error types and exit codes for notespark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (missing vault, too few eligible notes, unknown note)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vault, insufficient corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notespark operations
#[derive(Error, Debug)]
pub enum SparkError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("insufficient corpus: {current} eligible note(s), at least {required} required")]
    InsufficientCorpus { current: usize, required: usize },

    #[error("note not found: {path}")]
    NoteNotFound { path: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SparkError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SparkError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SparkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SparkError::UsageError(_) | SparkError::InvalidValue { .. } => ExitCode::Usage,

            SparkError::VaultNotFound { .. }
            | SparkError::InsufficientCorpus { .. }
            | SparkError::NoteNotFound { .. } => ExitCode::Data,

            SparkError::Io(_)
            | SparkError::Json(_)
            | SparkError::Toml(_)
            | SparkError::FailedOperationWithTarget { .. }
            | SparkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SparkError::UsageError(_) => "usage_error",
            SparkError::InvalidValue { .. } => "invalid_value",
            SparkError::VaultNotFound { .. } => "vault_not_found",
            SparkError::InsufficientCorpus { .. } => "insufficient_corpus",
            SparkError::NoteNotFound { .. } => "note_not_found",
            SparkError::Io(_) => "io_error",
            SparkError::Json(_) => "json_error",
            SparkError::Toml(_) => "toml_error",
            SparkError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SparkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let SparkError::InsufficientCorpus { current, required } = self {
            error_obj["current"] = serde_json::json!(current);
            error_obj["required"] = serde_json::json!(required);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for notespark operations
pub type Result<T> = std::result::Result<T, SparkError>;
