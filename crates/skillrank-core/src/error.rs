//! Error types and exit codes for skillrank
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, empty query, invalid colony configuration)
//! - 3: Data/store error (missing store, unreadable corpus, malformed tags,
//!   malformed CSV/JSON/TOML files)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the skillrank CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, bad corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during skillrank operations
#[derive(Error, Debug)]
pub enum SkillrankError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid colony configuration: {field} {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("no skills provided")]
    EmptyQuery,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found at {path:?} (run `skillrank init` first)")]
    StoreNotFound { path: PathBuf },

    #[error("invalid tag list {input:?}: {reason}")]
    InvalidTags { input: String, reason: String },

    #[error("invalid corpus {path:?}: {reason}")]
    InvalidCorpus { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SkillrankError {
    /// Create an error for a rejected colony parameter
    pub fn invalid_configuration(field: &str, reason: impl std::fmt::Display) -> Self {
        SkillrankError::InvalidConfiguration {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a tag list that could not be parsed
    pub fn invalid_tags(input: &str, reason: impl std::fmt::Display) -> Self {
        SkillrankError::InvalidTags {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SkillrankError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SkillrankError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        SkillrankError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SkillrankError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkillrankError::UnknownFormat(_)
            | SkillrankError::UsageError(_)
            | SkillrankError::InvalidConfiguration { .. }
            | SkillrankError::EmptyQuery
            | SkillrankError::InvalidValue { .. } => ExitCode::Usage,

            SkillrankError::StoreNotFound { .. }
            | SkillrankError::InvalidTags { .. }
            | SkillrankError::InvalidCorpus { .. }
            | SkillrankError::AlreadyExists { .. }
            | SkillrankError::NotFound { .. }
            | SkillrankError::Json(_)
            | SkillrankError::Toml(_)
            | SkillrankError::Csv(_) => ExitCode::Data,

            SkillrankError::Io(_)
            | SkillrankError::FailedOperationWithTarget { .. }
            | SkillrankError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SkillrankError::UnknownFormat(_) => "unknown_format",
            SkillrankError::UsageError(_) => "usage_error",
            SkillrankError::InvalidConfiguration { .. } => "invalid_configuration",
            SkillrankError::EmptyQuery => "empty_query",
            SkillrankError::InvalidValue { .. } => "invalid_value",
            SkillrankError::StoreNotFound { .. } => "store_not_found",
            SkillrankError::InvalidTags { .. } => "invalid_tags",
            SkillrankError::InvalidCorpus { .. } => "invalid_corpus",
            SkillrankError::AlreadyExists { .. } => "already_exists",
            SkillrankError::NotFound { .. } => "not_found",
            SkillrankError::Io(_) => "io_error",
            SkillrankError::Json(_) => "json_error",
            SkillrankError::Toml(_) => "toml_error",
            SkillrankError::Csv(_) => "csv_error",
            SkillrankError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SkillrankError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for skillrank operations
pub type Result<T> = std::result::Result<T, SkillrankError>;
