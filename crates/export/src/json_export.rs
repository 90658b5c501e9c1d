//! Re-importable JSON export.

use chrono::{DateTime, Utc};
use lectio_allocate::StudyPlan;
use lectio_progress::Progress;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExportError;

/// Version tag written into every JSON export.
pub const EXPORT_VERSION: &str = "1.0";

/// A plan, its progress and the export time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    plan: StudyPlan,
    progress: Progress,
    export_date: DateTime<Utc>,
    version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    plan: StudyPlan,
    #[serde(default)]
    progress: Value,
    export_date: DateTime<Utc>,
    version: String,
}

impl ExportEnvelope {
    /// Returns the exported plan.
    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    /// Returns the exported progress.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Returns when the export was made.
    pub fn export_date(&self) -> DateTime<Utc> {
        self.export_date
    }

    /// Splits the envelope into its plan and progress.
    pub fn into_parts(self) -> (StudyPlan, Progress) {
        (self.plan, self.progress)
    }
}

/// Renders `{plan, progress, exportDate, version}` as pretty JSON.
pub fn to_json(
    plan: &StudyPlan,
    progress: &Progress,
    exported_at: DateTime<Utc>,
) -> Result<String, ExportError> {
    let envelope = ExportEnvelope {
        plan: plan.clone(),
        progress: progress.clone(),
        export_date: exported_at,
        version: EXPORT_VERSION.to_string(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Reads a JSON export back.
///
/// Whole-day progress from older exports is expanded to section progress.
pub fn from_json(text: &str) -> Result<ExportEnvelope, ExportError> {
    let raw: RawEnvelope = serde_json::from_str(text)?;
    if raw.version != EXPORT_VERSION {
        return Err(ExportError::UnsupportedVersion { found: raw.version });
    }
    let progress = Progress::from_json_value(&raw.plan, raw.progress)?;
    Ok(ExportEnvelope {
        plan: raw.plan,
        progress,
        export_date: raw.export_date,
        version: raw.version,
    })
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use chrono::TimeZone;
    use lectio_allocate::generate_study_plan;
    use lectio_canon::{CanonTable, SectionName};

    fn plan() -> StudyPlan {
        generate_study_plan(CanonTable::standard(), NonZeroU32::new(7).unwrap())
    }

    #[test]
    fn envelope_fields() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let json = to_json(&plan(), &Progress::new(), at).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["plan"]["duration"], 7);
        assert_eq!(value["exportDate"], "2024-01-15T09:30:00Z");
        assert!(value["progress"].as_object().unwrap().is_empty());
    }

    #[test]
    fn reads_back() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let mut progress = Progress::new();
        progress.set(3, SectionName::Wisdom, true);
        let json = to_json(&plan(), &progress, at).unwrap();

        let envelope = from_json(&json).unwrap();
        assert_eq!(envelope.plan(), &plan());
        assert_eq!(envelope.progress(), &progress);
        assert_eq!(envelope.export_date(), at);
    }

    #[test]
    fn rejects_other_versions() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let json = to_json(&plan(), &Progress::new(), at)
            .unwrap()
            .replace("\"1.0\"", "\"2.0\"");
        assert!(matches!(
            from_json(&json),
            Err(ExportError::UnsupportedVersion { .. })
        ));
    }
}
