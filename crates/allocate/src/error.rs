//! Error types for the lectio-allocate crate.

/// Error type for the fallible edges of the lectio-allocate crate.
///
/// Plan generation itself cannot fail. These errors arise only when
/// reading values back in: parsing a verse-range string or accepting a
/// deserialized plan whose shape is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocateError {
    /// Returned when a verse range is not of the form `start-end` with
    /// `1 <= start <= end`.
    #[error("invalid verse range: {text:?}")]
    InvalidVerseRange {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when a stored plan declares a duration of zero days.
    #[error("plan must last at least one day")]
    ZeroDuration,

    /// Returned when a stored plan's day records do not match its duration.
    #[error("plan declares {duration} days but holds {days} day records")]
    DayCountMismatch {
        /// Declared duration.
        duration: u32,
        /// Number of day records present.
        days: usize,
    },

    /// Returned when a stored plan's day records are not numbered 1..=duration.
    #[error("day record {index} is numbered {day}")]
    DayNumbering {
        /// 0-based position of the record.
        index: usize,
        /// Day number found at that position.
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_verse_range() {
        let err = AllocateError::InvalidVerseRange {
            text: "9-3".to_string(),
        };
        assert_eq!(err.to_string(), "invalid verse range: \"9-3\"");
    }

    #[test]
    fn error_day_count_mismatch() {
        let err = AllocateError::DayCountMismatch {
            duration: 30,
            days: 29,
        };
        assert_eq!(
            err.to_string(),
            "plan declares 30 days but holds 29 day records"
        );
    }

    #[test]
    fn error_zero_duration() {
        assert_eq!(
            AllocateError::ZeroDuration.to_string(),
            "plan must last at least one day"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<AllocateError>();
    }
}
