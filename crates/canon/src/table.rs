//! Sections and the complete canon table.

use std::collections::BTreeSet;

use crate::book::Book;
use crate::error::CanonError;
use crate::section_name::SectionName;

/// An ordered run of books sharing one section label.
///
/// A section carries two totals. `total_verses` is the declared length
/// that quotas and day windows are computed from. `book_verses` is the sum
/// of the books' chapter counts, which bounds what can actually be read.
/// The two are equal unless a total was declared explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: SectionName,
    books: Vec<Book>,
    total_verses: u32,
    book_verses: u32,
}

impl Section {
    /// Creates a section whose total is the sum of its books.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::NoBooks`] if `books` is empty.
    pub fn new(name: SectionName, books: Vec<Book>) -> Result<Self, CanonError> {
        if books.is_empty() {
            return Err(CanonError::NoBooks {
                section: name.to_string(),
            });
        }
        Ok(Self::assemble(name, books))
    }

    /// Creates a section with an explicitly declared verse total.
    ///
    /// The declared total may differ from the sum of the books. A larger
    /// total stretches the section's windows past its last verse, so the
    /// trailing days collect nothing; a smaller one leaves the tail of the
    /// last books unread. Use [`Section::check_total`] to reject either.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::ZeroTotal`] when `declared` is zero, plus any
    /// error from [`Section::new`].
    pub fn with_declared_total(
        name: SectionName,
        books: Vec<Book>,
        declared: u32,
    ) -> Result<Self, CanonError> {
        if declared == 0 {
            return Err(CanonError::ZeroTotal {
                section: name.to_string(),
            });
        }
        let mut section = Self::new(name, books)?;
        section.total_verses = declared;
        Ok(section)
    }

    /// Builds a section from trusted static data without validation.
    pub(crate) fn assemble(name: SectionName, books: Vec<Book>) -> Self {
        let book_verses = books.iter().map(Book::total_verses).sum();
        Self {
            name,
            books,
            total_verses: book_verses,
            book_verses,
        }
    }

    /// Like [`Section::assemble`], with a declared total.
    pub(crate) fn assemble_declared(name: SectionName, books: Vec<Book>, declared: u32) -> Self {
        let mut section = Self::assemble(name, books);
        section.total_verses = declared;
        section
    }

    /// Returns the section label.
    pub fn name(&self) -> SectionName {
        self.name
    }

    /// Returns the books in canonical order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the declared number of verses in the section.
    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }

    /// Returns the sum of the book totals.
    pub fn book_verses(&self) -> u32 {
        self.book_verses
    }

    /// Returns `true` when the declared total equals the sum of the books.
    pub fn is_consistent(&self) -> bool {
        self.total_verses == self.book_verses
    }

    /// Checks the declared total against the sum of the books.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::TotalMismatch`] when they differ.
    pub fn check_total(&self) -> Result<(), CanonError> {
        if self.is_consistent() {
            return Ok(());
        }
        Err(CanonError::TotalMismatch {
            section: self.name.to_string(),
            declared: self.total_verses,
            actual: self.book_verses,
        })
    }
}

/// Immutable description of every section, book and chapter to be read.
///
/// Sections are held in strictly canonical order with no duplicates, and
/// every book name is unique across the table. A table may contain any
/// non-empty subset of the six sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonTable {
    sections: Vec<Section>,
}

impl CanonTable {
    /// Creates a table from sections given in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::NoSections`] for an empty list,
    /// [`CanonError::SectionOrder`] when a section repeats or precedes
    /// one that should come before it, and [`CanonError::DuplicateBook`]
    /// when a book name is reused.
    pub fn new(sections: Vec<Section>) -> Result<Self, CanonError> {
        if sections.is_empty() {
            return Err(CanonError::NoSections);
        }
        for pair in sections.windows(2) {
            if pair[1].name <= pair[0].name {
                return Err(CanonError::SectionOrder {
                    section: pair[1].name.to_string(),
                });
            }
        }
        let mut seen = BTreeSet::new();
        for book in sections.iter().flat_map(|s| s.books.iter()) {
            if !seen.insert(book.name()) {
                return Err(CanonError::DuplicateBook {
                    book: book.name().to_string(),
                });
            }
        }
        Ok(Self { sections })
    }

    pub(crate) fn assemble(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Returns the sections in canonical order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by label.
    pub fn section(&self, name: SectionName) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Looks up a book by exact name, returning it with its section.
    pub fn book(&self, name: &str) -> Option<(&Section, &Book)> {
        self.sections.iter().find_map(|section| {
            section
                .books
                .iter()
                .find(|b| b.name() == name)
                .map(|b| (section, b))
        })
    }

    /// Returns the number of books across all sections.
    pub fn book_count(&self) -> usize {
        self.sections.iter().map(|s| s.books.len()).sum()
    }

    /// Returns the declared number of verses across all sections.
    pub fn total_verses(&self) -> u32 {
        self.sections.iter().map(Section::total_verses).sum()
    }

    /// Returns the number of verses the books actually hold.
    pub fn book_verses(&self) -> u32 {
        self.sections.iter().map(Section::book_verses).sum()
    }

    /// Checks every section's declared total against its books.
    ///
    /// # Errors
    ///
    /// Returns the first [`CanonError::TotalMismatch`] found.
    pub fn check_totals(&self) -> Result<(), CanonError> {
        self.sections.iter().try_for_each(Section::check_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, chapters: &[u32]) -> Book {
        Book::new(name, chapters.to_vec()).unwrap()
    }

    #[test]
    fn section_total_is_sum_of_books() {
        let section = Section::new(
            SectionName::Wisdom,
            vec![book("A", &[10, 5]), book("B", &[7])],
        )
        .unwrap();
        assert_eq!(section.total_verses(), 22);
        assert_eq!(section.book_verses(), 22);
        assert!(section.is_consistent());
        assert_eq!(section.books().len(), 2);
    }

    #[test]
    fn section_rejects_no_books() {
        let err = Section::new(SectionName::Psalms, vec![]).unwrap_err();
        assert_eq!(
            err,
            CanonError::NoBooks {
                section: "Psalms".to_string()
            }
        );
    }

    #[test]
    fn declared_total_may_differ_from_books() {
        let larger =
            Section::with_declared_total(SectionName::Psalms, vec![book("Psalms", &[15; 150])], 2461)
                .unwrap();
        assert_eq!(larger.total_verses(), 2461);
        assert_eq!(larger.book_verses(), 2250);
        assert!(!larger.is_consistent());

        let smaller =
            Section::with_declared_total(SectionName::History, vec![book("A", &[3, 4])], 5).unwrap();
        assert_eq!(smaller.total_verses(), 5);
        assert_eq!(smaller.book_verses(), 7);
    }

    #[test]
    fn declared_total_strict_check() {
        let exact = Section::with_declared_total(SectionName::History, vec![book("A", &[3])], 3)
            .unwrap();
        assert!(exact.is_consistent());
        assert_eq!(exact.check_total(), Ok(()));

        let off = Section::with_declared_total(SectionName::History, vec![book("A", &[3])], 4)
            .unwrap();
        let err = off.check_total().unwrap_err();
        assert!(matches!(
            err,
            CanonError::TotalMismatch {
                declared: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn declared_total_rejects_zero() {
        let err = Section::with_declared_total(SectionName::Wisdom, vec![book("A", &[3])], 0)
            .unwrap_err();
        assert_eq!(
            err,
            CanonError::ZeroTotal {
                section: "Wisdom".to_string()
            }
        );
    }

    #[test]
    fn table_totals_split_declared_and_books() {
        let table = CanonTable::new(vec![
            Section::with_declared_total(SectionName::History, vec![book("A", &[10])], 12).unwrap(),
            Section::new(SectionName::Revelation, vec![book("B", &[3])]).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.total_verses(), 15);
        assert_eq!(table.book_verses(), 13);
        assert!(matches!(
            table.check_totals(),
            Err(CanonError::TotalMismatch { declared: 12, actual: 10, .. })
        ));
    }

    #[test]
    fn table_accepts_canonical_subset() {
        let table = CanonTable::new(vec![
            Section::new(SectionName::History, vec![book("A", &[2])]).unwrap(),
            Section::new(SectionName::Revelation, vec![book("B", &[3])]).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.total_verses(), 5);
        assert_eq!(table.book_count(), 2);
        assert!(table.section(SectionName::Psalms).is_none());
        let (section, found) = table.book("B").unwrap();
        assert_eq!(section.name(), SectionName::Revelation);
        assert_eq!(found.total_verses(), 3);
    }

    #[test]
    fn table_rejects_empty() {
        assert_eq!(CanonTable::new(vec![]), Err(CanonError::NoSections));
    }

    #[test]
    fn table_rejects_out_of_order() {
        let err = CanonTable::new(vec![
            Section::new(SectionName::Prophets, vec![book("A", &[2])]).unwrap(),
            Section::new(SectionName::Wisdom, vec![book("B", &[3])]).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CanonError::SectionOrder {
                section: "Wisdom".to_string()
            }
        );
    }

    #[test]
    fn table_rejects_duplicate_section() {
        let err = CanonTable::new(vec![
            Section::new(SectionName::Wisdom, vec![book("A", &[2])]).unwrap(),
            Section::new(SectionName::Wisdom, vec![book("B", &[3])]).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, CanonError::SectionOrder { .. }));
    }

    #[test]
    fn table_rejects_duplicate_book() {
        let err = CanonTable::new(vec![
            Section::new(SectionName::History, vec![book("A", &[2])]).unwrap(),
            Section::new(SectionName::Psalms, vec![book("A", &[3])]).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CanonError::DuplicateBook {
                book: "A".to_string()
            }
        );
    }
}
