//! Carving one section's verse window into book portions.

use lectio_canon::Section;
use serde::{Deserialize, Serialize};

use crate::chapters::chapters_for_verse_range;
use crate::window::VerseWindow;

/// The part of one book read on one day.
///
/// `verses` is a book-local `"start-end"` range; `chapters` lists every
/// chapter that range touches. Both are optional on the wire so stored
/// plans that omit them still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPortion {
    book: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chapters: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    verses: Option<String>,
}

impl BookPortion {
    /// Creates a book portion.
    pub fn new(book: impl Into<String>, chapters: Option<Vec<u32>>, verses: Option<String>) -> Self {
        Self {
            book: book.into(),
            chapters,
            verses,
        }
    }

    /// Returns the book name.
    pub fn book(&self) -> &str {
        &self.book
    }

    /// Returns the chapters touched, if recorded.
    pub fn chapters(&self) -> Option<&[u32]> {
        self.chapters.as_deref()
    }

    /// Returns the book-local verse range string, if recorded.
    pub fn verses(&self) -> Option<&str> {
        self.verses.as_deref()
    }

    /// Parses the verse range back into a book-local window.
    pub fn verse_window(&self) -> Option<VerseWindow> {
        self.verses.as_deref().and_then(|v| v.parse().ok())
    }

    /// Formats a human-readable reference for display or text lookup.
    ///
    /// One chapter gives `"Book 3"`, several give `"Book 3-5"` (first to
    /// last), no chapters fall back to `"Book 1-40"` from the verse range,
    /// and nothing at all gives just the book name.
    pub fn reference(&self) -> String {
        match (self.chapters(), self.verses()) {
            (Some([only]), _) => format!("{} {only}", self.book),
            (Some([first, .., last]), _) => format!("{} {first}-{last}", self.book),
            (_, Some(verses)) => format!("{} {verses}", self.book),
            _ => self.book.clone(),
        }
    }
}

/// One section's reading for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPortion {
    books: Vec<BookPortion>,
    verses_count: u32,
}

impl ReadingPortion {
    /// Creates a portion from its books and collected verse count.
    pub fn new(books: Vec<BookPortion>, verses_count: u32) -> Self {
        Self {
            books,
            verses_count,
        }
    }

    /// Returns the contributing books in canonical order.
    pub fn books(&self) -> &[BookPortion] {
        &self.books
    }

    /// Returns the number of verses actually collected.
    pub fn verses_count(&self) -> u32 {
        self.verses_count
    }

    /// Returns `true` when no verses were collected.
    pub fn is_empty(&self) -> bool {
        self.verses_count == 0
    }
}

/// Carves the section-local verse `window` out of `section`.
///
/// Books are walked in canonical order with a running section-local
/// cursor. A book contributes when its span overlaps the window and the
/// window is not yet fully collected; its contribution is the overlap in
/// book-local coordinates together with the chapters that overlap
/// touches. The returned `verses_count` is what was actually collected,
/// which is less than `window.len()` when the window runs past the end of
/// the section.
///
/// # Example
///
/// ```ignore
/// let section = Section::new(SectionName::History, vec![Book::new("Genesis", vec![50, 50])?])?;
/// let portion = generate_reading_portion(&section, VerseWindow::new(51, 100).unwrap());
/// assert_eq!(portion.books()[0].verses(), Some("51-100"));
/// assert_eq!(portion.books()[0].chapters(), Some(&[2][..]));
/// ```
pub fn generate_reading_portion(section: &Section, window: VerseWindow) -> ReadingPortion {
    let needed = window.len();
    let mut collected = 0;
    let mut books = Vec::new();
    let mut cursor = 1;

    for book in section.books() {
        let book_verses = book.total_verses();
        let span = VerseWindow::spanning(cursor, book_verses);

        if span.overlaps(window) && collected < needed {
            let local_start = window.start().saturating_sub(cursor) + 1;
            let local_end = book_verses.min(window.end() - cursor + 1);

            if let Some(local) = VerseWindow::new(local_start, local_end) {
                let chapters = chapters_for_verse_range(book, local);
                books.push(BookPortion {
                    book: book.name().to_string(),
                    chapters: (!chapters.is_empty()).then_some(chapters),
                    verses: Some(local.to_string()),
                });
                collected += local.len();
            }
        }

        cursor += book_verses;
        if cursor > window.end() {
            break;
        }
    }

    ReadingPortion::new(books, collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_canon::{Book, SectionName};

    fn section(books: &[(&str, &[u32])]) -> Section {
        let books = books
            .iter()
            .map(|&(name, chapters)| Book::new(name, chapters.to_vec()).unwrap())
            .collect();
        Section::new(SectionName::History, books).unwrap()
    }

    fn window(start: u32, end: u32) -> VerseWindow {
        VerseWindow::new(start, end).unwrap()
    }

    #[test]
    fn single_book_halves() {
        let s = section(&[("Genesis", &[50, 50])]);

        let first = generate_reading_portion(&s, window(1, 50));
        assert_eq!(first.verses_count(), 50);
        assert_eq!(
            first.books(),
            &[BookPortion::new("Genesis", Some(vec![1]), Some("1-50".into()))]
        );

        let second = generate_reading_portion(&s, window(51, 100));
        assert_eq!(
            second.books(),
            &[BookPortion::new("Genesis", Some(vec![2]), Some("51-100".into()))]
        );
    }

    #[test]
    fn crosses_book_boundary() {
        let s = section(&[("A", &[10, 10]), ("B", &[5, 5]), ("C", &[8])]);
        let portion = generate_reading_portion(&s, window(15, 27));
        assert_eq!(portion.verses_count(), 13);
        assert_eq!(
            portion.books(),
            &[
                BookPortion::new("A", Some(vec![2]), Some("15-20".into())),
                BookPortion::new("B", Some(vec![1, 2]), Some("1-7".into())),
            ]
        );
    }

    #[test]
    fn spans_three_books() {
        let s = section(&[("A", &[4]), ("B", &[3]), ("C", &[6])]);
        let portion = generate_reading_portion(&s, window(4, 9));
        let names: Vec<&str> = portion.books().iter().map(BookPortion::book).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(portion.books()[0].verses(), Some("4-4"));
        assert_eq!(portion.books()[1].verses(), Some("1-3"));
        assert_eq!(portion.books()[2].verses(), Some("1-2"));
        assert_eq!(portion.verses_count(), 6);
    }

    #[test]
    fn single_verse_book() {
        let s = section(&[("Tiny", &[1])]);
        let portion = generate_reading_portion(&s, window(1, 1));
        assert_eq!(portion.verses_count(), 1);
        assert_eq!(portion.books()[0].chapters(), Some(&[1][..]));
        assert_eq!(portion.books()[0].verses(), Some("1-1"));
    }

    #[test]
    fn window_past_section_end_collects_remainder() {
        let s = section(&[("A", &[5])]);
        let portion = generate_reading_portion(&s, window(4, 10));
        assert_eq!(portion.verses_count(), 2);
        assert_eq!(portion.books()[0].verses(), Some("4-5"));
    }

    #[test]
    fn window_beyond_section_is_empty() {
        let s = section(&[("A", &[5])]);
        let portion = generate_reading_portion(&s, window(6, 10));
        assert!(portion.is_empty());
        assert!(portion.books().is_empty());
    }

    #[test]
    fn reference_formats() {
        let one = BookPortion::new("John", Some(vec![3]), Some("60-95".into()));
        assert_eq!(one.reference(), "John 3");
        let many = BookPortion::new("John", Some(vec![3, 4, 5]), Some("60-200".into()));
        assert_eq!(many.reference(), "John 3-5");
        let verses_only = BookPortion::new("Jude", None, Some("1-25".into()));
        assert_eq!(verses_only.reference(), "Jude 1-25");
        let bare = BookPortion::new("Jude", Some(vec![]), None);
        assert_eq!(bare.reference(), "Jude");
    }

    #[test]
    fn verse_window_parses_back() {
        let p = BookPortion::new("A", None, Some("3-9".into()));
        assert_eq!(p.verse_window(), VerseWindow::new(3, 9));
        assert_eq!(BookPortion::new("A", None, None).verse_window(), None);
    }

    #[test]
    fn serializes_with_camel_case_and_skips_none() {
        let portion = ReadingPortion::new(vec![BookPortion::new("Jude", None, Some("1-25".into()))], 25);
        let json = serde_json::to_string(&portion).unwrap();
        assert_eq!(
            json,
            r#"{"books":[{"book":"Jude","verses":"1-25"}],"versesCount":25}"#
        );
        let back: ReadingPortion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, portion);
    }
}
