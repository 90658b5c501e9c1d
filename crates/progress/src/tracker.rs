//! Progress persistence keyed by plan id.

use std::collections::BTreeMap;

use lectio_canon::SectionName;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ProgressError;
use crate::progress::Progress;
use crate::store::KeyValueStore;

/// Store key holding section progress for every plan.
pub const SECTION_PROGRESS_KEY: &str = "bible-study-section-progress";

/// Store key holding legacy whole-day progress for every plan.
pub const LEGACY_PROGRESS_KEY: &str = "bible-study-plans";

/// Returns the plan id used for a generated plan of `duration` days.
pub fn plan_id(duration: u32) -> String {
    format!("plan-{duration}-days")
}

/// Reads and writes [`Progress`] for plans identified by id.
///
/// All plans share the [`SECTION_PROGRESS_KEY`] entry, a
/// `planId -> day -> section -> bool` object.
#[derive(Debug)]
pub struct ProgressTracker<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressTracker<S> {
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

    /// Loads the section progress of one plan, empty if none is stored.
    pub fn load(&self, plan_id: &str) -> Result<Progress, ProgressError> {
        let mut all: BTreeMap<String, Progress> = self.read(SECTION_PROGRESS_KEY)?;
        Ok(all.remove(plan_id).unwrap_or_default())
    }

    /// Replaces the stored progress of one plan.
    pub fn save(&mut self, plan_id: &str, progress: &Progress) -> Result<(), ProgressError> {
        let mut all: BTreeMap<String, Progress> = self.read(SECTION_PROGRESS_KEY)?;
        all.insert(plan_id.to_string(), progress.clone());
        self.write(SECTION_PROGRESS_KEY, &all)
    }

    /// Records one section flag for one plan and returns the updated progress.
    #[tracing::instrument(skip(self))]
    pub fn mark(
        &mut self,
        plan_id: &str,
        day: u32,
        section: SectionName,
        completed: bool,
    ) -> Result<Progress, ProgressError> {
        let mut progress = self.load(plan_id)?;
        progress.set(day, section, completed);
        self.save(plan_id, &progress)?;
        debug!("section progress saved");
        Ok(progress)
    }

    /// Forgets everything recorded for one plan.
    pub fn reset(&mut self, plan_id: &str) -> Result<(), ProgressError> {
        let mut all: BTreeMap<String, Progress> = self.read(SECTION_PROGRESS_KEY)?;
        let mut legacy: BTreeMap<String, BTreeMap<u32, bool>> = self.read(LEGACY_PROGRESS_KEY)?;
        if all.remove(plan_id).is_some() {
            self.write(SECTION_PROGRESS_KEY, &all)?;
        }
        if legacy.remove(plan_id).is_some() {
            self.write(LEGACY_PROGRESS_KEY, &legacy)?;
        }
        Ok(())
    }

    /// Loads the legacy whole-day flags of one plan.
    pub fn load_legacy(&self, plan_id: &str) -> Result<BTreeMap<u32, bool>, ProgressError> {
        let mut all: BTreeMap<String, BTreeMap<u32, bool>> = self.read(LEGACY_PROGRESS_KEY)?;
        Ok(all.remove(plan_id).unwrap_or_default())
    }

    /// Records one legacy whole-day flag.
    pub fn mark_legacy_day(
        &mut self,
        plan_id: &str,
        day: u32,
        completed: bool,
    ) -> Result<(), ProgressError> {
        let mut all: BTreeMap<String, BTreeMap<u32, bool>> = self.read(LEGACY_PROGRESS_KEY)?;
        all.entry(plan_id.to_string())
            .or_default()
            .insert(day, completed);
        self.write(LEGACY_PROGRESS_KEY, &all)
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, ProgressError> {
        match self.store.get(key)? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| ProgressError::Serialization {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), ProgressError> {
        let value = serde_json::to_value(value).map_err(|e| ProgressError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(key, value)
    }
}
