//! A single book and its per-chapter verse counts.

use crate::error::CanonError;

/// A book of the Bible with the verse count of each chapter.
///
/// Chapter `i` (1-indexed) has `chapters()[i - 1]` verses. Construction
/// guarantees a non-empty name, at least one chapter, and no zero-verse
/// chapters, so every book spans at least one verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    chapters: Vec<u32>,
    total_verses: u32,
}

impl Book {
    /// Creates a book from its name and per-chapter verse counts.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::EmptyBookName`] for a blank name,
    /// [`CanonError::NoChapters`] for an empty chapter list and
    /// [`CanonError::EmptyChapter`] for any chapter with zero verses.
    pub fn new(name: impl Into<String>, chapters: Vec<u32>) -> Result<Self, CanonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CanonError::EmptyBookName);
        }
        if chapters.is_empty() {
            return Err(CanonError::NoChapters { book: name });
        }
        if let Some(idx) = chapters.iter().position(|&v| v == 0) {
            return Err(CanonError::EmptyChapter {
                book: name,
                chapter: idx + 1,
            });
        }
        let total_verses = chapters.iter().sum();
        Ok(Self {
            name,
            chapters,
            total_verses,
        })
    }

    /// Builds a book from trusted static data without validation.
    pub(crate) fn from_static(name: &str, chapters: &[u32]) -> Self {
        Self {
            name: name.to_string(),
            chapters: chapters.to_vec(),
            total_verses: chapters.iter().sum(),
        }
    }

    /// Returns the book name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-chapter verse counts.
    pub fn chapters(&self) -> &[u32] {
        &self.chapters
    }

    /// Returns the number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns the number of verses in the whole book.
    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }
}
