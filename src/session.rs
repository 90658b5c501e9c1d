//! Resolving a plan source to a plan, its progress and where to save it.

use anyhow::{Context, Result};
use tracing::info;

use lectio_allocate::{StudyPlan, generate_study_plan};
use lectio_progress::{FileStore, PlanStore, Progress, ProgressTracker, plan_id};

use crate::cli::PlanSource;
use crate::config::LectioConfig;
use crate::convert;

enum Origin {
    /// A snapshot in the plan store.
    Saved(String),
    /// A freshly generated plan tracked under its plan id.
    Tracked(String),
}

/// A plan opened for a command, together with its progress.
pub struct Session {
    plan: StudyPlan,
    progress: Progress,
    origin: Origin,
}

impl Session {
    /// Loads a saved plan, or regenerates one and loads its tracked progress.
    pub fn open(source: &PlanSource, config: &LectioConfig) -> Result<Self> {
        let store = FileStore::new(&config.storage.path);
        if let Some(key) = &source.plan {
            let saved = PlanStore::new(store)
                .load(key)
                .with_context(|| format!("failed to load saved plan {key}"))?;
            info!(%key, duration = saved.plan().duration(), "saved plan loaded");
            let (plan, progress) = saved.into_parts();
            return Ok(Self {
                plan,
                progress,
                origin: Origin::Saved(key.clone()),
            });
        }

        let days = convert::validate_days(source.days.unwrap_or(config.plan.days), &config.plan)?;
        let canon = convert::load_canon(&config.canon)?;
        let plan = generate_study_plan(&canon, days);
        let id = plan_id(days.get());
        let progress = ProgressTracker::new(store)
            .load(&id)
            .with_context(|| format!("failed to load progress for {id}"))?;
        Ok(Self {
            plan,
            progress,
            origin: Origin::Tracked(id),
        })
    }

    pub fn plan(&self) -> &StudyPlan {
        &self.plan
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }

    /// Saved-plan key or plan id.
    pub fn label(&self) -> &str {
        match &self.origin {
            Origin::Saved(key) | Origin::Tracked(key) => key,
        }
    }

    /// Writes the progress back to where it came from.
    pub fn persist(&self, config: &LectioConfig) -> Result<()> {
        let store = FileStore::new(&config.storage.path);
        match &self.origin {
            Origin::Saved(key) => PlanStore::new(store)
                .update_progress(key, &self.progress)
                .with_context(|| format!("failed to update saved plan {key}"))?,
            Origin::Tracked(id) => ProgressTracker::new(store)
                .save(id, &self.progress)
                .with_context(|| format!("failed to save progress for {id}"))?,
        }
        info!(plan = self.label(), store = %config.storage.path.display(), "progress saved");
        Ok(())
    }
}
