//! Error types for lectio-export.

/// Error type for all fallible operations in the lectio-export crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Returned when an export format name is not recognised.
    #[error("unknown export format: {name:?} (expected csv, json or html)")]
    UnknownFormat {
        /// The name that was provided.
        name: String,
    },

    /// Wraps a failure from the CSV writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a JSON encoding or decoding failure.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when an imported document carries an unsupported version.
    #[error("unsupported export version {found:?}")]
    UnsupportedVersion {
        /// Version string found in the document.
        found: String,
    },
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json {
            reason: e.to_string(),
        }
    }
}
