//! Error types for lectio-passage.

/// Error type for all fallible operations in the lectio-passage crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassageError {
    /// Returned when a fallback chain has no providers to try.
    #[error("no passage providers configured")]
    NoProviders,

    /// Returned when every provider in a chain failed.
    #[error("all providers failed for '{reference}': {}", render_failures(.failures))]
    AllProvidersFailed {
        /// Reference that was requested.
        reference: String,
        /// `(provider, reason)` for every attempt, in order.
        failures: Vec<(String, String)>,
    },

    /// Returned when a translation id is not in the catalog.
    #[error("unknown translation: {id:?}")]
    UnknownTranslation {
        /// The id that was provided.
        id: String,
    },
}

fn render_failures(failures: &[(String, String)]) -> String {
    failures
        .iter()
        .map(|(provider, reason)| format!("{provider}: {reason}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_failure() {
        let err = PassageError::AllProvidersFailed {
            reference: "John 3".into(),
            failures: vec![
                ("primary".into(), "timeout".into()),
                ("backup".into(), "not found".into()),
            ],
        };
        assert_eq!(
            err.to_string(),
            "all providers failed for 'John 3': primary: timeout; backup: not found"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PassageError>();
    }
}
