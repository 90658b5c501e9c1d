//! Inclusive 1-indexed verse windows.

use std::fmt;
use std::str::FromStr;

use crate::error::AllocateError;

/// An inclusive `[start, end]` range of 1-indexed verses.
///
/// The same type is used in section-local, book-local and chapter-local
/// coordinates; the context decides which. `1 <= start <= end` always
/// holds, so a window is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseWindow {
    start: u32,
    end: u32,
}

impl VerseWindow {
    /// Creates a window, or `None` unless `1 <= start <= end`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start >= 1 && start <= end).then_some(Self { start, end })
    }

    /// Creates the window of `len` verses starting at `start`.
    ///
    /// Callers guarantee `start >= 1` and `len >= 1`.
    pub(crate) fn spanning(start: u32, len: u32) -> Self {
        debug_assert!(start >= 1 && len >= 1);
        Self {
            start,
            end: start + len - 1,
        }
    }

    /// Returns the first verse.
    pub fn start(self) -> u32 {
        self.start
    }

    /// Returns the last verse.
    pub fn end(self) -> u32 {
        self.end
    }

    /// Returns the number of verses covered.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u32 {
        self.end - self.start + 1
    }

    /// Returns `true` when the two windows share at least one verse.
    pub fn overlaps(self, other: Self) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    /// Returns the verses common to both windows.
    pub fn intersect(self, other: Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }
}

impl fmt::Display for VerseWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for VerseWindow {
    type Err = AllocateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AllocateError::InvalidVerseRange {
            text: s.to_string(),
        };
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let end: u32 = end.trim().parse().map_err(|_| invalid())?;
        Self::new(start, end).ok_or_else(invalid)
    }
}
