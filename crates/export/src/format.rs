//! Export format selection and file naming.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One row per day and section.
    Csv,
    /// Plan and progress envelope that can be imported again.
    #[default]
    Json,
    /// Printable page.
    Html,
}

impl ExportFormat {
    /// Returns the file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "html" | "htm" | "print" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Returns the conventional file name for an export made on `date`.
///
/// ```ignore
/// let name = export_file_name(365, ExportFormat::Csv, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(name, "bible-study-plan-365days-2024-01-15.csv");
/// ```
pub fn export_file_name(duration: u32, format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "bible-study-plan-{duration}days-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
