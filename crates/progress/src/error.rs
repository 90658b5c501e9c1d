//! Error types for lectio-progress.

use std::path::PathBuf;

/// Error type for all fallible operations in the lectio-progress crate.
///
/// Covers the storage backends (file I/O and JSON encoding), lookups of
/// saved plans that do not exist, and progress updates that do not fit
/// the plan they are recorded against.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Returned when the store file cannot be read or written.
    #[error("store I/O failed for {}: {source}", path.display())]
    Io {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a stored value cannot be encoded or decoded.
    #[error("invalid stored value under '{key}': {reason}")]
    Serialization {
        /// Store key (or file path) of the value.
        key: String,
        /// Description of the encoding failure.
        reason: String,
    },

    /// Returned when a saved plan key does not exist.
    #[error("no saved plan under '{key}'")]
    PlanNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Returned when a day lies outside the plan.
    #[error("day {day} is outside the plan (1..={duration})")]
    DayOutOfRange {
        /// Requested day.
        day: u32,
        /// Plan duration.
        duration: u32,
    },

    /// Returned when a section has nothing to read on the given day.
    #[error("section '{section}' has no reading on day {day}")]
    SectionNotScheduled {
        /// Requested day.
        day: u32,
        /// Requested section label.
        section: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_std_error() {
        let err = ProgressError::PlanNotFound {
            key: "bible-plan-30-1".into(),
        };
        let _: &dyn std::error::Error = &err;
        assert_eq!(err.to_string(), "no saved plan under 'bible-plan-30-1'");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = ProgressError::Io {
            path: PathBuf::from("/tmp/store.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("/tmp/store.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ProgressError>();
    }
}
