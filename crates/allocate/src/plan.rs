//! Study plan generation.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use lectio_canon::{CanonTable, SectionName};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AllocateError;
use crate::portion::{ReadingPortion, generate_reading_portion};
use crate::quota::PlanQuota;

/// Everything read on one day of a plan.
///
/// Only sections with verses that day are present. `completed` is the
/// legacy whole-day flag kept for stored plans; per-section progress is
/// tracked separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReading {
    day: u32,
    sections: BTreeMap<SectionName, ReadingPortion>,
    #[serde(default)]
    completed: bool,
}

impl DailyReading {
    /// Creates a day record.
    pub fn new(day: u32, sections: BTreeMap<SectionName, ReadingPortion>) -> Self {
        Self {
            day,
            sections,
            completed: false,
        }
    }

    /// Returns the 1-indexed day number.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the day's portions keyed by section, in canonical order.
    pub fn sections(&self) -> &BTreeMap<SectionName, ReadingPortion> {
        &self.sections
    }

    /// Returns one section's portion for the day.
    pub fn portion(&self, section: SectionName) -> Option<&ReadingPortion> {
        self.sections.get(&section)
    }

    /// Returns the number of verses read across all sections.
    pub fn verses_count(&self) -> u32 {
        self.sections.values().map(ReadingPortion::verses_count).sum()
    }

    /// Returns `true` when no section has verses this day.
    pub fn is_rest_day(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns the legacy whole-day completion flag.
    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// A complete reading plan: one [`DailyReading`] per day.
///
/// Records are numbered `1..=duration` in order and `duration` is at
/// least 1. Deserialization enforces that shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStudyPlan")]
pub struct StudyPlan {
    duration: u32,
    daily_plan: Vec<DailyReading>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStudyPlan {
    duration: u32,
    daily_plan: Vec<DailyReading>,
}

impl TryFrom<RawStudyPlan> for StudyPlan {
    type Error = AllocateError;

    fn try_from(raw: RawStudyPlan) -> Result<Self, Self::Error> {
        if raw.duration == 0 {
            return Err(AllocateError::ZeroDuration);
        }
        if raw.daily_plan.len() != raw.duration as usize {
            return Err(AllocateError::DayCountMismatch {
                duration: raw.duration,
                days: raw.daily_plan.len(),
            });
        }
        for (index, reading) in raw.daily_plan.iter().enumerate() {
            if reading.day as usize != index + 1 {
                return Err(AllocateError::DayNumbering {
                    index,
                    day: reading.day,
                });
            }
        }
        Ok(Self {
            duration: raw.duration,
            daily_plan: raw.daily_plan,
        })
    }
}

impl StudyPlan {
    /// Returns the plan length in days.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns every day record in order.
    pub fn daily_plan(&self) -> &[DailyReading] {
        &self.daily_plan
    }

    /// Returns the record for 1-indexed `day`.
    pub fn day(&self, day: u32) -> Option<&DailyReading> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.daily_plan.get(idx)
    }

    /// Iterates over `(day, portion)` for every day a section is read.
    pub fn section_portions(
        &self,
        section: SectionName,
    ) -> impl Iterator<Item = (u32, &ReadingPortion)> + '_ {
        self.daily_plan
            .iter()
            .filter_map(move |d| d.portion(section).map(|p| (d.day, p)))
    }

    /// Returns the last day on which `section` is read.
    pub fn section_finish_day(&self, section: SectionName) -> Option<u32> {
        self.section_portions(section).map(|(day, _)| day).last()
    }

    /// Returns the number of verses allocated across the whole plan.
    pub fn total_verses_allocated(&self) -> u64 {
        self.daily_plan
            .iter()
            .map(|d| u64::from(d.verses_count()))
            .sum()
    }
}

/// Partitions `canon` into `days` daily readings.
///
/// For every day and every section, the section's window for that day
/// (see [`PlanQuota`]) is carved with
/// [`generate_reading_portion`]. Exhausted sections and windows that
/// collect no verses are left out of the day's record, so short sections
/// drop out of the plan before long ones. The result is fully determined
/// by `canon` and `days`.
#[tracing::instrument(skip(canon), fields(days = days.get()))]
pub fn generate_study_plan(canon: &CanonTable, days: NonZeroU32) -> StudyPlan {
    let quota = PlanQuota::compute(canon, days);
    debug!(
        total_verses = quota.total_verses(),
        verses_per_day = quota.verses_per_day(),
        "computed daily quota"
    );
    for share in quota.sections() {
        debug!(
            section = %share.section(),
            verses_per_day = share.verses_per_day(),
            finish_day = share.finish_day(),
            "section share"
        );
    }

    let daily_plan = (1..=days.get())
        .map(|day| {
            let mut sections = BTreeMap::new();
            for (section, share) in canon.sections().iter().zip(quota.sections()) {
                let Some(window) = share.window(day) else {
                    continue;
                };
                let portion = generate_reading_portion(section, window);
                if !portion.is_empty() {
                    sections.insert(section.name(), portion);
                }
            }
            DailyReading::new(day, sections)
        })
        .collect();

    StudyPlan {
        duration: days.get(),
        daily_plan,
    }
}
