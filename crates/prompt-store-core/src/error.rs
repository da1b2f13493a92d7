//! Error types for the prompt store library.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Comprehensive error type for all prompt store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No prompt exists with the given ID
    #[error("Prompt not found: {id}")]
    NotFound { id: String },
    /// Another prompt already uses this title
    #[error("A prompt with this title already exists: {title}")]
    DuplicateTitle { title: String },
    /// Title is empty or longer than the allowed maximum
    #[error("Title must be 1-200 characters: {reason}")]
    InvalidTitle { reason: String },
    /// Tag does not match the allowed character class or length
    #[error(
        "Tag '{tag}' contains invalid characters. Use only letters, numbers, dash, and underscore."
    )]
    InvalidTag { tag: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Machine-readable classification of caller-facing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    DuplicateTitle,
    InvalidTitle,
    InvalidTag,
    InvalidInput,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DuplicateTitle => "DUPLICATE_TITLE",
            ErrorCode::InvalidTitle => "INVALID_TITLE",
            ErrorCode::InvalidTag => "INVALID_TAG",
            ErrorCode::InvalidInput => "INVALID_INPUT",
        }
    }

    /// Default human-readable message for the code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "Prompt not found",
            ErrorCode::DuplicateTitle => "A prompt with this title already exists",
            ErrorCode::InvalidTitle => "Title must be 1-200 characters",
            ErrorCode::InvalidTag => {
                "Tag contains invalid characters. Use only letters, numbers, dash, and underscore."
            }
            ErrorCode::InvalidInput => "Invalid input parameters",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a structured error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Structured error returned to callers: `{"error": {"code", "message"}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Creates a response carrying the code's default message.
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    /// Creates a response with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StoreError {
        StoreError::Database {
            message: self.message,
            source,
        }
    }
}

impl StoreError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Classifies the error. `None` means the failure is fatal and
    /// unclassified (storage corruption, I/O, configuration).
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            StoreError::NotFound { .. } => Some(ErrorCode::NotFound),
            StoreError::DuplicateTitle { .. } => Some(ErrorCode::DuplicateTitle),
            StoreError::InvalidTitle { .. } => Some(ErrorCode::InvalidTitle),
            StoreError::InvalidTag { .. } => Some(ErrorCode::InvalidTag),
            StoreError::InvalidInput { .. } => Some(ErrorCode::InvalidInput),
            _ => None,
        }
    }

    /// Converts a classified error into its structured response.
    ///
    /// Returns `None` for fatal errors, which callers must surface as
    /// failures rather than as a typed result.
    pub fn to_response(&self) -> Option<ErrorResponse> {
        let code = self.code()?;
        let message = match self {
            StoreError::NotFound { .. } | StoreError::DuplicateTitle { .. } => {
                code.default_message().to_string()
            }
            _ => self.to_string(),
        };
        Some(ErrorResponse::with_message(code, message))
    }
}

/// Returns true when SQLite rejected a write because of a UNIQUE
/// constraint. PRIMARY KEY and CHECK failures are not included.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(code, _) => {
            code.code == rusqlite::ErrorCode::ConstraintViolation
                && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StoreError::database(message).with_source(e))
    }
}

/// Result type alias for prompt store operations
pub type Result<T> = std::result::Result<T, StoreError>;
