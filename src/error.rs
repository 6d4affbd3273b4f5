//! Unified error types for country-timeline.
//!
//! The core deliberately has almost no failure modes: out-of-range dates,
//! inverted intervals, and missing countries are auto-corrected, never
//! surfaced. What remains is the single user-visible rejection (an empty
//! country selection) plus the I/O and request-shape errors the binary can
//! hit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for country-timeline operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TimelineError {
    /// No visited countries were supplied; the one rejection the layout
    /// engine ever produces. The display text is the user-facing message.
    #[error("Please select at least one country and enter the age you first visited.")]
    EmptySelection,

    /// A request value could not be interpreted (malformed date string,
    /// unknown continent name, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl TimelineError {
    /// Helper to wrap an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: message.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, TimelineError>;
