//! Error types for the lectio-canon crate.

/// Error type for all fallible operations in the lectio-canon crate.
///
/// Every variant describes a structural defect in a canon table: an
/// unknown section label, a malformed book, or sections that break the
/// canonical reading order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// Returned when a section label is not one of the six fixed labels.
    #[error("unknown section: {label:?}")]
    UnknownSection {
        /// The label that was provided.
        label: String,
    },

    /// Returned when a book has an empty name.
    #[error("book name must not be empty")]
    EmptyBookName,

    /// Returned when a book has no chapters.
    #[error("book '{book}' has no chapters")]
    NoChapters {
        /// Name of the offending book.
        book: String,
    },

    /// Returned when a chapter has a verse count of zero.
    #[error("book '{book}' chapter {chapter} has zero verses")]
    EmptyChapter {
        /// Name of the offending book.
        book: String,
        /// 1-indexed chapter number.
        chapter: usize,
    },

    /// Returned when a section has no books.
    #[error("section '{section}' has no books")]
    NoBooks {
        /// Label of the offending section.
        section: String,
    },

    /// Returned when a section declares a total of zero verses.
    #[error("section '{section}' declares zero verses")]
    ZeroTotal {
        /// Label of the offending section.
        section: String,
    },

    /// Returned by the strict check when a declared section total
    /// disagrees with its books.
    #[error("section '{section}' declares {declared} verses but its books sum to {actual}")]
    TotalMismatch {
        /// Label of the offending section.
        section: String,
        /// Declared total.
        declared: u32,
        /// Sum of the book totals.
        actual: u32,
    },

    /// Returned when a table has no sections.
    #[error("canon table has no sections")]
    NoSections,

    /// Returned when sections are duplicated or out of canonical order.
    #[error("section '{section}' is out of canonical order or duplicated")]
    SectionOrder {
        /// Label of the first section found out of place.
        section: String,
    },

    /// Returned when the same book name appears twice in a table.
    #[error("book '{book}' appears more than once")]
    DuplicateBook {
        /// Name of the repeated book.
        book: String,
    },
}
