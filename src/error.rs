// Error types for the test kit

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for test-kit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the data provider, fixtures, and page objects
#[derive(Debug, Error)]
pub enum Error {
    /// Requested fixture file does not exist under the data root
    #[error("fixture file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Fixture file exists but its content could not be parsed
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Requested worksheet is absent from the workbook
    #[error("sheet '{sheet}' not found in {}", path.display())]
    SheetNotFound { sheet: String, path: PathBuf },

    /// A required fixture's filter criteria matched no record
    ///
    /// This is a hard stop: an absent required record indicates a data-setup
    /// bug, not a condition the test should skip over.
    #[error("no fixture record matches {criteria}")]
    MissingFixtureRecord { criteria: String },

    /// Browser interaction did not complete within its timeout
    #[error("'{operation}' timed out after {timeout_ms}ms")]
    InteractionTimeout { operation: String, timeout_ms: u64 },

    /// Element not found by selector
    #[error("element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Page-state assertion failed
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// Error reported by the underlying browser engine
    #[error("driver error: {0}")]
    Driver(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
