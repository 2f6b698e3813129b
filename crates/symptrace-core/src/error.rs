//! Error types and exit codes for symptrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown symptom)
//! - 3: Data error (missing or invalid graph document, failed graph check)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::SessionState;

/// Exit codes for the symptrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unusable graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during symptrace operations
#[derive(Error, Debug)]
pub enum SymptraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    /// A terminal interactive session was asked for another question or answer.
    #[error("session already finished ({outcome}); start a new session")]
    SessionFinished { outcome: SessionState },

    // Data errors (exit code 3)
    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("graph check failed: {count} issue(s) found")]
    GraphCheckFailed { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SymptraceError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SymptraceError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SymptraceError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        SymptraceError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SymptraceError::UnknownFormat(_)
            | SymptraceError::UnknownAlgorithm(_)
            | SymptraceError::UsageError(_)
            | SymptraceError::UnknownSymptom(_)
            | SymptraceError::SessionFinished { .. }
            | SymptraceError::Unsupported { .. } => ExitCode::Usage,

            SymptraceError::InvalidGraph { .. }
            | SymptraceError::GraphCheckFailed { .. }
            | SymptraceError::NotFound { .. } => ExitCode::Data,

            SymptraceError::Io(_)
            | SymptraceError::Json(_)
            | SymptraceError::FailedOperationWithTarget { .. }
            | SymptraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SymptraceError::UnknownFormat(_) => "unknown_format",
            SymptraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            SymptraceError::UsageError(_) => "usage_error",
            SymptraceError::UnknownSymptom(_) => "unknown_symptom",
            SymptraceError::SessionFinished { .. } => "session_finished",
            SymptraceError::InvalidGraph { .. } => "invalid_graph",
            SymptraceError::GraphCheckFailed { .. } => "graph_check_failed",
            SymptraceError::Io(_) => "io_error",
            SymptraceError::Json(_) => "json_error",
            SymptraceError::NotFound { .. } => "not_found",
            SymptraceError::Unsupported { .. } => "unsupported",
            SymptraceError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SymptraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for symptrace operations
pub type Result<T> = std::result::Result<T, SymptraceError>;
