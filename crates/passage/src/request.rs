//! Passage requests and provider outcomes.

use lectio_allocate::BookPortion;

use crate::translation::DEFAULT_TRANSLATION;

/// A request for the text of one book portion in one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassageRequest {
    portion: BookPortion,
    translation: String,
}

impl PassageRequest {
    /// Builds a request for `portion` in `translation`.
    pub fn new(portion: &BookPortion, translation: impl Into<String>) -> Self {
        Self {
            portion: portion.clone(),
            translation: translation.into(),
        }
    }

    /// Builds a request in the default translation.
    pub fn with_default_translation(portion: &BookPortion) -> Self {
        Self::new(portion, DEFAULT_TRANSLATION)
    }

    /// Returns a copy of this request in another translation.
    pub fn in_translation(&self, translation: impl Into<String>) -> Self {
        Self::new(&self.portion, translation)
    }

    /// Returns the book name.
    pub fn book(&self) -> &str {
        self.portion.book()
    }

    /// Returns the chapters, if any.
    pub fn chapters(&self) -> Option<&[u32]> {
        self.portion.chapters()
    }

    /// Returns the book-local verse range, if any.
    pub fn verses(&self) -> Option<&str> {
        self.portion.verses()
    }

    /// Returns the translation id.
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Returns the reference a provider should look up.
    pub fn reference(&self) -> String {
        self.portion.reference()
    }

    /// Returns the short provider code of the book, if it is known.
    pub fn book_code(&self) -> Option<&'static str> {
        lectio_canon::book_code(self.portion.book())
    }
}

/// What a provider returns for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassageOutcome {
    /// The passage text was found.
    Success {
        /// Displayable text.
        text: String,
        /// Reference as reported by the provider.
        reference: String,
    },
    /// The provider could not serve the request.
    Failure {
        /// Why the request failed.
        reason: String,
    },
}

impl PassageOutcome {
    /// Shorthand for a failure.
    pub fn failure(reason: impl Into<String>) -> Self {
        PassageOutcome::Failure {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`PassageOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, PassageOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accessors() {
        let portion = BookPortion::new("1 Samuel", Some(vec![3, 4]), Some("60-120".into()));
        let req = PassageRequest::new(&portion, "web");
        assert_eq!(req.book(), "1 Samuel");
        assert_eq!(req.chapters(), Some(&[3, 4][..]));
        assert_eq!(req.verses(), Some("60-120"));
        assert_eq!(req.translation(), "web");
        assert_eq!(req.reference(), "1 Samuel 3-4");
        assert_eq!(req.book_code(), Some("1sa"));
        assert_eq!(req.in_translation("kjv").translation(), "kjv");
    }

    #[test]
    fn default_translation() {
        let portion = BookPortion::new("Jude", None, Some("1-25".into()));
        let req = PassageRequest::with_default_translation(&portion);
        assert_eq!(req.translation(), "kjv");
        assert_eq!(req.reference(), "Jude 1-25");
    }

    #[test]
    fn unknown_book_has_no_code() {
        let portion = BookPortion::new("Tobit", None, None);
        assert_eq!(PassageRequest::new(&portion, "kjv").book_code(), None);
    }
}
