//! Error handling for TableKit.
//!
//! The layout engine itself is built from total functions (mutations
//! clamp, removals on bad indices are no-ops), so errors only arise at
//! the plan-file boundary: reading, writing, and decoding plan
//! documents.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Top-level error type for plan-file operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the schema.
    #[error("Invalid plan document: {0}")]
    Document(#[from] serde_json::Error),

    /// The document declares a format version this build cannot read.
    #[error("Unsupported plan format version: {found}")]
    UnsupportedVersion {
        /// The version string found in the document.
        found: String,
    },
}

/// Convenience result alias for plan-file operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = Error::UnsupportedVersion {
            found: "9.0".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported plan format version: 9.0");
    }
}
