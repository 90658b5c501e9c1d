//! # lectio-export
//!
//! Renders a study plan and its progress for use outside the tool.
//!
//! ```text
//! (StudyPlan, Progress) --> to_csv  --> Day,Completed,Section,Books,Verses Count
//!                       --> to_json --> {plan, progress, exportDate, version}  --> from_json
//!                       --> to_html --> printable page
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use lectio_export::{ExportFormat, export, export_file_name};
//!
//! let now = chrono::Utc::now();
//! let text = export(&plan, &progress, ExportFormat::Csv, now)?;
//! let name = export_file_name(plan.duration(), ExportFormat::Csv, now.date_naive());
//! std::fs::write(name, text)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `format` | Format selection and file naming |
//! | `csv_export` | CSV rows per day and section |
//! | `json_export` | JSON envelope and import |
//! | `html_export` | Printable page |
//! | `error` | Error types |

mod csv_export;
mod error;
mod format;
mod html_export;
mod json_export;

pub use csv_export::{describe_book, to_csv, write_csv};
pub use error::ExportError;
pub use format::{ExportFormat, export_file_name};
pub use html_export::{escape_html, to_html};
pub use json_export::{EXPORT_VERSION, ExportEnvelope, from_json, to_json};

use chrono::{DateTime, Utc};
use lectio_allocate::StudyPlan;
use lectio_progress::Progress;

/// Renders `plan` and `progress` in `format`, stamped with `now`.
#[tracing::instrument(skip(plan, progress), fields(duration = plan.duration()))]
pub fn export(
    plan: &StudyPlan,
    progress: &Progress,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<String, ExportError> {
    let text = match format {
        ExportFormat::Csv => to_csv(plan, progress)?,
        ExportFormat::Json => to_json(plan, progress, now)?,
        ExportFormat::Html => to_html(plan, progress, now.date_naive()),
    };
    tracing::debug!(bytes = text.len(), "export rendered");
    Ok(text)
}
