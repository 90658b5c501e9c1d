//! Saved plans with their progress.

use chrono::{DateTime, Utc};
use lectio_allocate::StudyPlan;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ProgressError;
use crate::progress::Progress;
use crate::store::KeyValueStore;

/// Prefix shared by every saved-plan key.
pub const SAVED_PLAN_PREFIX: &str = "bible-plan-";

/// A plan snapshot together with its progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    plan: StudyPlan,
    progress: Progress,
    saved_date: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSavedPlan {
    plan: StudyPlan,
    #[serde(default)]
    progress: Value,
    saved_date: DateTime<Utc>,
}

impl SavedPlan {
    /// Creates a snapshot.
    pub fn new(plan: StudyPlan, progress: Progress, saved_date: DateTime<Utc>) -> Self {
        Self {
            plan,
            progress,
            saved_date,
        }
    }

    /// Returns the saved plan.
    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    /// Returns the saved progress.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Returns when the snapshot was taken.
    pub fn saved_date(&self) -> DateTime<Utc> {
        self.saved_date
    }

    /// Splits the snapshot into its plan and progress.
    pub fn into_parts(self) -> (StudyPlan, Progress) {
        (self.plan, self.progress)
    }

    fn from_value(key: &str, value: Value) -> Result<Self, ProgressError> {
        let invalid = |e: serde_json::Error| ProgressError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        };
        let raw: RawSavedPlan = serde_json::from_value(value).map_err(invalid)?;
        let progress = Progress::from_json_value(&raw.plan, raw.progress).map_err(invalid)?;
        Ok(Self {
            plan: raw.plan,
            progress,
            saved_date: raw.saved_date,
        })
    }
}

/// A saved plan listed with its store key.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlanEntry {
    /// Store key of the snapshot.
    pub key: String,
    /// The snapshot itself.
    pub saved: SavedPlan,
}

/// Saved-plan snapshots kept in a [`KeyValueStore`].
///
/// Each snapshot lives under `bible-plan-{duration}-{millis}`, where
/// `millis` is the save time in Unix milliseconds.
#[derive(Debug)]
pub struct PlanStore<S> {
    store: S,
}

impl<S: KeyValueStore> PlanStore<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Saves a snapshot taken at `now` and returns its key.
    ///
    /// If the key for `now` is taken, the millisecond stamp is advanced
    /// until a free key is found.
    #[tracing::instrument(skip_all, fields(duration = plan.duration()))]
    pub fn save(
        &mut self,
        plan: &StudyPlan,
        progress: &Progress,
        now: DateTime<Utc>,
    ) -> Result<String, ProgressError> {
        let existing = self.store.keys()?;
        let mut millis = now.timestamp_millis();
        let mut key = saved_plan_key(plan.duration(), millis);
        while existing.contains(&key) {
            millis += 1;
            key = saved_plan_key(plan.duration(), millis);
        }

        let saved = SavedPlan::new(plan.clone(), progress.clone(), now);
        let value = serde_json::to_value(&saved).map_err(|e| ProgressError::Serialization {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&key, value)?;
        debug!(%key, "plan saved");
        Ok(key)
    }

    /// Loads one snapshot.
    pub fn load(&self, key: &str) -> Result<SavedPlan, ProgressError> {
        let value = self
            .store
            .get(key)?
            .ok_or_else(|| ProgressError::PlanNotFound {
                key: key.to_string(),
            })?;
        SavedPlan::from_value(key, value)
    }

    /// Replaces the progress of an existing snapshot, keeping its date.
    pub fn update_progress(&mut self, key: &str, progress: &Progress) -> Result<(), ProgressError> {
        let saved = self.load(key)?;
        let updated = SavedPlan::new(saved.plan, progress.clone(), saved.saved_date);
        let value = serde_json::to_value(&updated).map_err(|e| ProgressError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, value)
    }

    /// Lists every readable snapshot, newest first.
    ///
    /// Entries that fail to decode are logged and skipped.
    pub fn list(&self) -> Result<Vec<SavedPlanEntry>, ProgressError> {
        let mut entries = Vec::new();
        for key in self.store.keys()? {
            if !key.starts_with(SAVED_PLAN_PREFIX) {
                continue;
            }
            let Some(value) = self.store.get(&key)? else {
                continue;
            };
            match SavedPlan::from_value(&key, value) {
                Ok(saved) => entries.push(SavedPlanEntry { key, saved }),
                Err(e) => warn!(%key, error = %e, "skipping unreadable saved plan"),
            }
        }
        entries.sort_by(|a, b| b.saved.saved_date.cmp(&a.saved.saved_date));
        Ok(entries)
    }

    /// Deletes one snapshot, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> Result<bool, ProgressError> {
        if !key.starts_with(SAVED_PLAN_PREFIX) {
            return Ok(false);
        }
        self.store.remove(key)
    }
}

/// Builds the store key for a snapshot.
pub fn saved_plan_key(duration: u32, millis: i64) -> String {
    format!("{SAVED_PLAN_PREFIX}{duration}-{millis}")
}
