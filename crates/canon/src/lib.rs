//! # lectio-canon
//!
//! Structural facts about the text being partitioned: six sections in
//! canonical order, each an ordered list of books, each book an ordered
//! list of per-chapter verse counts.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Book (chapters)"] -->|"Section::new()"| B["Section (total_verses, book_verses)"]
//!     B -->|"CanonTable::new()"| C["CanonTable"]
//!     D["static data"] -->|"CanonTable::standard()"| C
//!     C -->|".book(name)"| A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use lectio_canon::{Book, CanonTable, Section, SectionName};
//!
//! let standard = CanonTable::standard();
//! assert_eq!(standard.sections().len(), 6);
//!
//! let custom = CanonTable::new(vec![Section::new(
//!     SectionName::History,
//!     vec![Book::new("Genesis", vec![50, 50])?],
//! )?])?;
//! assert_eq!(custom.total_verses(), 100);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `section_name` | The six fixed section labels |
//! | `book` | Book with per-chapter verse counts |
//! | `table` | Section and canon table with invariant checks |
//! | `standard` | Built-in 66-book canon |
//! | `codes` | Provider book codes |
//! | `error` | Error types |

mod book;
mod codes;
mod error;
mod section_name;
mod standard;
mod table;

pub use book::Book;
pub use codes::book_code;
pub use error::CanonError;
pub use section_name::SectionName;
pub use standard::{
    GENESIS_TRUNCATED_CHAPTERS, PSALM_APPROX_VERSES, PSALM_COUNT, STANDARD_SECTION_TOTALS,
};
pub use table::{CanonTable, Section};
