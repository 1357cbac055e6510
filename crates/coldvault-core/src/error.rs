//! Error types for vault operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `VaultError`.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Remote operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Paginated vault listing.
    ListVaults,
    /// Inventory-retrieval job initiation.
    InitiateJob,
    /// Job output download.
    GetJobOutput,
    /// Archive deletion.
    DeleteArchive,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ListVaults => "ListVaults",
            Self::InitiateJob => "InitiateJob",
            Self::GetJobOutput => "GetJobOutput",
            Self::DeleteArchive => "DeleteArchive",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while talking to a vault service.
#[derive(Error, Debug)]
pub enum VaultError {
    /// The remote service rejected the call or could not be reached.
    #[error("{operation} failed{}: {message}", .code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
    Service {
        /// Operation that failed.
        operation: Operation,
        /// Service error code, when the service returned one.
        code: Option<String>,
        /// Human-readable error message.
        message: String,
    },

    /// The service answered but a required field was missing.
    #[error("{operation} returned an incomplete response: missing {field}")]
    IncompleteResponse {
        /// Operation whose response was incomplete.
        operation: Operation,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Job output could not be decoded as an inventory document.
    #[error("failed to decode inventory: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A local file could not be read.
    #[error("cannot read {path}: {source}")]
    File {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The client could not be set up.
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl VaultError {
    /// Creates a service error without an error code.
    pub fn service(operation: Operation, message: impl Into<String>) -> Self {
        Self::Service {
            operation,
            code: None,
            message: message.into(),
        }
    }

    /// Returns `true` if the error originated from the remote service.
    ///
    /// # Examples
    ///
    /// ```
    /// use coldvault_core::VaultError;
    /// use coldvault_core::error::Operation;
    ///
    /// let err = VaultError::service(Operation::DeleteArchive, "throttled");
    /// assert!(err.is_remote());
    /// ```
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Service { .. } | Self::IncompleteResponse { .. }
        )
    }
}
