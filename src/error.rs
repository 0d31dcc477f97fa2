// Error types for gh-cache.
// Handles GitHub API errors, repository resolution errors, and general failures.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("Invalid repository \"{0}\", expected the OWNER/REPO format")]
    InvalidRepo(String),

    #[error("Could not resolve the current repository: {0}")]
    RepoResolution(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CacheError>;

const GENERIC_ERROR_MESSAGE: &str = "We could not process your request due to internal error.";

/// An error paired with the message shown to the user.
#[derive(Debug)]
pub struct HandledError {
    pub message: String,
    pub source: CacheError,
}

impl HandledError {
    /// Classify an API error into a user-facing message: 404 takes the
    /// caller-supplied message, other client errors surface the server's
    /// message, everything else collapses to a generic one.
    pub fn classify(err: CacheError, not_found_msg: &str) -> Self {
        let message = match &err {
            CacheError::HttpStatus { status: 404, .. } => not_found_msg.to_string(),
            CacheError::HttpStatus { status, message } if (400..500).contains(status) => {
                message.clone()
            }
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        };
        Self {
            message,
            source: err,
        }
    }
}

impl From<CacheError> for HandledError {
    fn from(err: CacheError) -> Self {
        Self {
            message: err.to_string(),
            source: err,
        }
    }
}

impl std::fmt::Display for HandledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
