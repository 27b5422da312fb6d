//! Error types for the repository access layer.
//!
//! Every engine failure is translated into a `GitError` carrying the libgit2
//! status code, the error class and a non-empty message. Callers tell a
//! resolve failure apart from an internal failure with `AppError::is_not_found`,
//! which looks at the status code only.
//!
//! Presentation mapping (owned by the caller):
//! - `is_not_found()` → 404
//! - anything else → 500

use std::fmt;
use std::io;

use libgit2_sys as raw;
use serde::Serialize;
use thiserror::Error;

/// Upper bound on the diagnostic text read from the engine.
pub const MAX_DIAGNOSTIC_LEN: usize = 512;

/// Substituted when the engine fails without saying why.
pub const UNKNOWN_GIT_ERROR: &str = "unknown git error";

/// A translated engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitError {
    /// Negative libgit2 status code (`GIT_ENOTFOUND`, `GIT_EINVALIDSPEC`, ...)
    pub code: i32,
    /// libgit2 error class (`GIT_ERROR_REFERENCE`, `GIT_ERROR_OS`, ...)
    pub class: raw::git_error_t,
    /// Human-readable message, never empty
    pub message: String,
}

impl GitError {
    /// Translate a status code and the engine's diagnostic buffer.
    ///
    /// At most `MAX_DIAGNOSTIC_LEN` bytes are looked at and the text stops at
    /// the first NUL, mirroring a C string living in a fixed buffer.
    pub fn from_status(code: i32, class: raw::git_error_t, diagnostic: &[u8]) -> Self {
        let bounded = &diagnostic[..diagnostic.len().min(MAX_DIAGNOSTIC_LEN)];
        let text = match bounded.iter().position(|&b| b == 0) {
            Some(nul) => &bounded[..nul],
            None => bounded,
        };

        let message = String::from_utf8_lossy(text).trim().to_string();
        let message = if message.is_empty() {
            UNKNOWN_GIT_ERROR.to_string()
        } else {
            message
        };

        Self { code, class, message }
    }

    /// Translate a filesystem failure hit while scanning for repositories.
    pub fn from_io(context: &str, err: &io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound => raw::GIT_ENOTFOUND,
            _ => raw::GIT_ERROR,
        };
        let message = format!("{}: {}", context, err);
        Self::from_status(code, raw::GIT_ERROR_OS, message.as_bytes())
    }

    /// Build a not-found error for lookups the engine itself does not fail.
    pub fn not_found(class: raw::git_error_t, message: &str) -> Self {
        Self::from_status(raw::GIT_ENOTFOUND, class, message.as_bytes())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code,
            raw::GIT_ENOTFOUND | raw::GIT_EINVALIDSPEC | raw::GIT_EAMBIGUOUS
        )
    }
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for GitError {}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        Self::from_status(err.raw_code(), err.raw_class(), err.message().as_bytes())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl AppError {
    /// Status code of the underlying engine failure, if any.
    pub fn code(&self) -> Option<i32> {
        match self {
            AppError::Git(e) => Some(e.code),
            AppError::InvalidPath(_) => None,
        }
    }

    /// True when the failure means "no such repository or revision".
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Git(e) => e.is_not_found(),
            AppError::InvalidPath(_) => true,
        }
    }
}

impl From<git2::Error> for AppError {
    fn from(err: git2::Error) -> Self {
        AppError::Git(err.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
