//! Book-local verse ranges to chapter numbers.

use lectio_canon::Book;

use crate::window::VerseWindow;

/// Returns the 1-indexed chapters of `book` whose verses overlap `window`.
///
/// `window` is in book-local coordinates. Chapters are walked in order
/// with a running verse cursor, and chapter `i` is included when its own
/// span `[chapter_start, chapter_end]` overlaps the window. The walk
/// stops once the cursor passes the end of the window.
///
/// # Example
///
/// ```ignore
/// let book = Book::new("Genesis", vec![50, 50])?;
/// let window = VerseWindow::new(45, 60).unwrap();
/// assert_eq!(chapters_for_verse_range(&book, window), vec![1, 2]);
/// ```
pub fn chapters_for_verse_range(book: &Book, window: VerseWindow) -> Vec<u32> {
    let mut chapters = Vec::new();
    let mut cursor = 1;
    for (idx, &verses) in book.chapters().iter().enumerate() {
        let span = VerseWindow::spanning(cursor, verses);
        if span.overlaps(window) {
            chapters.push(idx as u32 + 1);
        }
        cursor += verses;
        if cursor > window.end() {
            break;
        }
    }
    chapters
}
