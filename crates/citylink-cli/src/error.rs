//! Error handling for the CityLink CLI.
//!
//! This module provides a hierarchical error type system using `thiserror`.
//! Each variant is meant to be actionable: configuration and input errors
//! carry a hint, and engine failures name the stage that failed.
//!
//! # Architecture
//!
//! - **Top-level errors** (`CliError`) represent broad categories of failures
//! - **Domain-specific errors** (`ConfigError`, `InputError`) provide detailed context
//! - **Engine errors** (`ReachError`, `MatrixError`) convert automatically via `#[from]`
//! - **Context helpers** (`ResultExt`) attach paths and hints
//!
//! # Example
//!
//! ```rust,no_run
//! use citylink_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn load(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod diagnostic;

use citylink_graph::{MatrixError, ReachError};
use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (missing input, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed neighbor table file
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Reachability engine failures
    #[error("Engine error: {0}")]
    Graph(#[from] ReachError),

    /// Neighbor table shape or cell errors
    #[error("Invalid neighbor table: {0}")]
    Matrix(#[from] MatrixError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// Mutually exclusive options were specified
    #[error("Conflicting options: {0}\n\nHint: These options cannot be used together")]
    ConflictingOptions(String),
}

/// Neighbor table parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// File contains no tokens at all
    #[error("Neighbor table is empty\n\nHint: The first value must be the number of cities")]
    Empty,

    /// First token is not a positive city count
    #[error("Invalid city count '{token}' on line {line}\n\nHint: The first value must be a positive integer")]
    InvalidSize { line: usize, token: String },

    /// A cell is not 0 or 1
    #[error("Invalid cell '{token}' on line {line}\n\nHint: Neighbor table cells must be 0 or 1")]
    InvalidCell { line: usize, token: String },

    /// Fewer than N×N cells
    #[error("Expected {expected} cells but found {found}\n\nHint: A table for N cities needs N rows of N values")]
    TooFewCells { expected: usize, found: usize },

    /// Extra tokens after the N×N cells
    #[error("Unexpected '{token}' on line {line} after the last row\n\nHint: Remove trailing data or fix the city count")]
    TrailingData { line: usize, token: String },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
