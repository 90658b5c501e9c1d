//! Proportional reading-portion allocation for lectio.
//!
//! Given a [`CanonTable`](lectio_canon::CanonTable) and a number of days,
//! this crate decides which books, chapters and verses each section
//! contributes to each day. Every section is read in parallel at a pace
//! proportional to its size, every verse is read exactly once, and the
//! whole computation is a pure function of its inputs.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌────────────────────┐
//!  │  PlanQuota    │────▶│  section window   │────▶│  portion carving    │
//!  │ (daily share) │     │  (day d, section) │     │ (books + chapters)  │
//!  └──────────────┘     └──────────────────┘     └────────────────────┘
//! ```
//!
//! Carving is self-similar: a section window is cut into book-local
//! windows, and each book-local window is mapped to chapters with the
//! same overlap rule ([`VerseWindow::overlaps`]).
//!
//! # Quick start
//!
//! ```ignore
//! use std::num::NonZeroU32;
//! use lectio_allocate::generate_study_plan;
//! use lectio_canon::{CanonTable, SectionName};
//!
//! let plan = generate_study_plan(CanonTable::standard(), NonZeroU32::new(365).unwrap());
//! let day_one = plan.day(1).unwrap();
//! for (section, portion) in day_one.sections() {
//!     println!("{section}: {} verses", portion.verses_count());
//! }
//! assert_eq!(plan.section_finish_day(SectionName::Revelation), Some(202));
//! ```

mod chapters;
mod error;
mod plan;
mod portion;
mod quota;
mod window;

pub use chapters::chapters_for_verse_range;
pub use error::AllocateError;
pub use plan::{DailyReading, StudyPlan, generate_study_plan};
pub use portion::{BookPortion, ReadingPortion, generate_reading_portion};
pub use quota::{PlanQuota, SectionQuota};
pub use window::VerseWindow;
