//! Per-section completion state for one plan.

use std::collections::BTreeMap;

use lectio_allocate::StudyPlan;
use lectio_canon::SectionName;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProgressError;

/// Completion flags keyed by day, then by section.
///
/// Absent entries read as not completed. Serializes as the nested
/// `{"<day>": {"<section>": bool}}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    days: BTreeMap<u32, BTreeMap<SectionName, bool>>,
}

impl Progress {
    /// Creates an empty progress map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts legacy whole-day flags into section progress.
    ///
    /// Every section read on a flagged day is marked with that flag.
    /// Days the plan does not contain are ignored.
    pub fn from_legacy_days(plan: &StudyPlan, days: &BTreeMap<u32, bool>) -> Self {
        let mut progress = Self::new();
        for (&day, &completed) in days {
            let Some(reading) = plan.day(day) else {
                continue;
            };
            for &section in reading.sections().keys() {
                progress.set(day, section, completed);
            }
        }
        progress
    }

    /// Decodes stored progress in either layout.
    ///
    /// Section maps (`{"1": {"Psalms": true}}`) are read directly; whole-day
    /// maps (`{"1": true}`) are expanded against `plan` with
    /// [`Progress::from_legacy_days`]. `null` reads as empty.
    pub fn from_json_value(plan: &StudyPlan, value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::new());
        }
        match serde_json::from_value::<Self>(value.clone()) {
            Ok(progress) => Ok(progress),
            Err(_) => {
                let days: BTreeMap<u32, bool> = serde_json::from_value(value)?;
                Ok(Self::from_legacy_days(plan, &days))
            }
        }
    }

    /// Records the completion flag of one section on one day.
    pub fn set(&mut self, day: u32, section: SectionName, completed: bool) {
        self.days.entry(day).or_default().insert(section, completed);
    }

    /// Records a flag after checking the section is read on that day.
    pub fn set_checked(
        &mut self,
        plan: &StudyPlan,
        day: u32,
        section: SectionName,
        completed: bool,
    ) -> Result<(), ProgressError> {
        let reading = plan.day(day).ok_or(ProgressError::DayOutOfRange {
            day,
            duration: plan.duration(),
        })?;
        if reading.portion(section).is_none() {
            return Err(ProgressError::SectionNotScheduled {
                day,
                section: section.to_string(),
            });
        }
        self.set(day, section, completed);
        Ok(())
    }

    /// Returns whether one section on one day is marked completed.
    pub fn is_complete(&self, day: u32, section: SectionName) -> bool {
        self.days
            .get(&day)
            .and_then(|sections| sections.get(&section))
            .copied()
            .unwrap_or(false)
    }

    /// Flips one flag and returns the new value.
    pub fn toggle(&mut self, day: u32, section: SectionName) -> bool {
        let next = !self.is_complete(day, section);
        self.set(day, section, next);
        next
    }

    /// Returns the recorded flags for one day.
    pub fn day_sections(&self, day: u32) -> Option<&BTreeMap<SectionName, bool>> {
        self.days.get(&day)
    }

    /// Removes every recorded flag.
    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Returns `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns whether every section read on `day` is marked completed.
    ///
    /// Days with nothing to read count as complete; days outside the plan
    /// do not.
    pub fn is_day_complete(&self, plan: &StudyPlan, day: u32) -> bool {
        plan.day(day).is_some_and(|reading| {
            reading
                .sections()
                .keys()
                .all(|&section| self.is_complete(day, section))
        })
    }

    /// Returns the number of plan days that are complete.
    pub fn completed_days(&self, plan: &StudyPlan) -> u32 {
        plan.daily_plan()
            .iter()
            .filter(|reading| self.is_day_complete(plan, reading.day()))
            .count() as u32
    }

    /// Collapses section flags into legacy whole-day flags for `plan`.
    pub fn to_legacy_days(&self, plan: &StudyPlan) -> BTreeMap<u32, bool> {
        plan.daily_plan()
            .iter()
            .map(|reading| (reading.day(), self.is_day_complete(plan, reading.day())))
            .collect()
    }
}
