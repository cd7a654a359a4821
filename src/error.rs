//! Unified error types for userdeck.
//!
//! Library code returns [`UserdeckError`]; the binary wraps it in `anyhow`
//! for top-level reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for userdeck operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UserdeckError {
    /// The user collection could not be fetched or decoded
    #[error("Failed to fetch users: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific fetch failure kinds.
///
/// The TUI collapses all of these into a single user-visible error state;
/// the distinction exists for logs and for the non-interactive `fetch` command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned status {status}")]
    Status { status: u16 },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Convenient Result type for userdeck operations
pub type Result<T> = std::result::Result<T, UserdeckError>;

impl UserdeckError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The fetch failure kind, if this is a fetch error.
    #[must_use]
    pub const fn fetch_kind(&self) -> Option<&FetchErrorKind> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UserdeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for UserdeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::fetch(
            "decoding response body",
            FetchErrorKind::InvalidResponse(err.to_string()),
        )
    }
}
