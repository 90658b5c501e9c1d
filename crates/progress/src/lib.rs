//! # lectio-progress
//!
//! Reading progress for generated plans, and the persistence behind it.
//!
//! ```text
//! Progress (day -> section -> bool)
//!     |
//!     +-- ProgressTracker<S>  "bible-study-section-progress" / "bible-study-plans"
//!     +-- PlanStore<S>        "bible-plan-{duration}-{millis}" snapshots
//!     |
//!     S: KeyValueStore = MemoryStore | FileStore (one JSON object file)
//!
//! ProgressSummary::compute(plan, progress) -> completed days, %, per section
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use lectio_progress::{FileStore, ProgressTracker, plan_id};
//!
//! let mut tracker = ProgressTracker::new(FileStore::new("lectio-store.json"));
//! let progress = tracker.mark(&plan_id(365), 1, SectionName::Psalms, true)?;
//! assert!(progress.is_complete(1, SectionName::Psalms));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `progress` | Per-section completion map |
//! | `store` | Key-value store trait and backends |
//! | `tracker` | Progress keyed by plan id |
//! | `plans` | Saved plan snapshots |
//! | `summary` | Completion figures |
//! | `error` | Error types |

mod error;
mod plans;
mod progress;
mod store;
mod summary;
mod tracker;

pub use error::ProgressError;
pub use plans::{PlanStore, SAVED_PLAN_PREFIX, SavedPlan, SavedPlanEntry, saved_plan_key};
pub use progress::Progress;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use summary::{ProgressSummary, SectionSummary};
pub use tracker::{LEGACY_PROGRESS_KEY, ProgressTracker, SECTION_PROGRESS_KEY, plan_id};
