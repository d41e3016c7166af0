//! Error types for property transfer
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The error surface is deliberately small. Copy is exact-or-loud:
//! encountering a property kind without an encoding rule aborts the whole
//! copy. Paste is best-effort: shape mismatches, unresolved paths, and failed
//! identity lookups are skips, not errors, and never appear here.

use crate::handle::PropertyKind;
use thiserror::Error;

/// Result type alias for transfer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for property transfer
#[derive(Debug, Error)]
pub enum Error {
    /// A leaf property's declared kind has no encoding rule.
    ///
    /// This is a configuration gap to fix by adding a codec rule, not a
    /// recoverable runtime condition. It aborts the whole copy; nothing is
    /// written to the clipboard.
    #[error("property kind {kind:?} is not supported")]
    UnsupportedKind {
        /// The declared kind with no encoding rule
        kind: PropertyKind,
    },

    /// Clipboard text did not parse as a transfer document.
    ///
    /// Surfaces to the user only as "nothing to paste"; the availability
    /// gates swallow it before any paste action is offered.
    #[error("malformed transfer document: {0}")]
    MalformedDocument(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedDocument(e.to_string())
    }
}
