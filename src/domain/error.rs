//! Domain-level error types for immich-purge-orphans.
//!
//! Run-level failures are `AppError` and abort the program. Per-asset
//! failures are `DeleteError` and only ever skip the asset they belong to.

use std::path::Path;

use thiserror::Error;

use super::models::FailureKind;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or both API keys were not supplied.
    #[error("Both admin and user API keys are required.")]
    CredentialMissing,

    /// The server address could not be turned into a base URL.
    #[error("Invalid Immich address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The orphan report could not be retrieved or decoded.
    #[error("Failed to fetch assets: {message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {message}")]
    Http {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Report serialization failed.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a fetch error from a transport or decode failure.
    pub fn fetch(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fetch {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a fetch error for a non-success status.
    pub fn fetch_status(status: u16, reason: &str) -> Self {
        Self::Fetch {
            message: format!("server responded with {status} {reason}"),
            source: None,
        }
    }

    /// Create a JSON error.
    pub fn json(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create a config error pointing at the offending file.
    pub fn config(path: &Path, message: impl std::fmt::Display) -> Self {
        Self::Config {
            message: format!("{}: {message}", path.display()),
        }
    }

    /// Process exit code for this error.
    ///
    /// Usage problems (missing keys, bad address, bad config) exit with 2,
    /// runtime failures with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::CredentialMissing | Self::InvalidAddress { .. } | Self::Config { .. } => 2,
            Self::Fetch { .. } | Self::Http { .. } | Self::Json { .. } | Self::Io { .. } => 1,
        }
    }
}

/// Failure to delete a single asset. Never fatal to the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    /// The server answered 400, which almost always means the user key
    /// does not own the asset.
    #[error(
        "Failed to delete asset {entity_id} due to potential API key mismatch. \
         Ensure you're using the asset owner's API key as the User API key."
    )]
    ApiKeyMismatch { entity_id: String },

    /// Any other non-success status or transport failure.
    #[error("Failed to delete asset {entity_id}: {message}")]
    Failed { entity_id: String, message: String },
}

impl DeleteError {
    /// Classify a non-success DELETE status.
    #[must_use]
    pub fn from_status(entity_id: &str, status: u16, reason: &str) -> Self {
        if status == 400 {
            Self::ApiKeyMismatch {
                entity_id: entity_id.to_string(),
            }
        } else {
            Self::Failed {
                entity_id: entity_id.to_string(),
                message: format!("server responded with {status} {reason}"),
            }
        }
    }

    /// Category recorded in the deletion report.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::ApiKeyMismatch { .. } => FailureKind::ApiKeyMismatch,
            Self::Failed { .. } => FailureKind::Failed,
        }
    }

    /// The asset this failure belongs to.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::ApiKeyMismatch { entity_id } | Self::Failed { entity_id, .. } => entity_id,
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
