//! Aggregate progress figures for a plan.

use lectio_allocate::StudyPlan;
use lectio_canon::SectionName;
use serde::Serialize;

use crate::progress::Progress;

/// Completion figures for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    /// Section label.
    pub section: SectionName,
    /// Days on which the section is read.
    pub portions_total: u32,
    /// Of those, days marked completed.
    pub portions_completed: u32,
    /// Verses allocated to the section.
    pub verses_total: u32,
    /// Verses in completed portions.
    pub verses_read: u32,
}

/// Plan-wide completion figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Plan length in days.
    pub duration: u32,
    /// Days whose every section is completed.
    pub completed_days: u32,
    /// `completed_days / duration` as a whole percentage, rounded.
    pub percentage: u32,
    /// Per-section figures in canonical order.
    pub sections: Vec<SectionSummary>,
}

impl ProgressSummary {
    /// Summarizes `progress` against `plan`.
    pub fn compute(plan: &StudyPlan, progress: &Progress) -> Self {
        let completed_days = progress.completed_days(plan);
        let mut sections: Vec<SectionSummary> = Vec::new();
        for name in SectionName::ALL {
            let mut summary = SectionSummary {
                section: name,
                portions_total: 0,
                portions_completed: 0,
                verses_total: 0,
                verses_read: 0,
            };
            for (day, portion) in plan.section_portions(name) {
                summary.portions_total += 1;
                summary.verses_total += portion.verses_count();
                if progress.is_complete(day, name) {
                    summary.portions_completed += 1;
                    summary.verses_read += portion.verses_count();
                }
            }
            if summary.portions_total > 0 {
                sections.push(summary);
            }
        }

        Self {
            duration: plan.duration(),
            completed_days,
            percentage: (f64::from(completed_days) / f64::from(plan.duration().max(1)) * 100.0)
                .round() as u32,
            sections,
        }
    }

    /// Returns the fraction of days completed, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.completed_days) / f64::from(self.duration.max(1))
    }

    /// Returns the verses read across all sections.
    pub fn verses_read(&self) -> u64 {
        self.sections.iter().map(|s| u64::from(s.verses_read)).sum()
    }
}
