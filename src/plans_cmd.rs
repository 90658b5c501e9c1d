//! Plans command: list and delete saved plans.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use lectio_progress::{FileStore, PlanStore, ProgressSummary};

use crate::cli::{PlansAction, PlansArgs};
use crate::config::LectioConfig;

/// Dispatch a saved-plan action.
pub fn run(args: PlansArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("plans").entered();
    let mut store = PlanStore::new(FileStore::new(&config.storage.path));

    match args.action {
        PlansAction::List => {
            let entries = store.list().context("failed to list saved plans")?;
            if entries.is_empty() {
                println!("No saved plans in {}", config.storage.path.display());
                return Ok(());
            }
            for entry in entries {
                let summary = ProgressSummary::compute(entry.saved.plan(), entry.saved.progress());
                println!(
                    "{}  {}-day plan  saved {}  {}/{} days ({}%)",
                    entry.key,
                    summary.duration,
                    entry.saved.saved_date().format("%Y-%m-%d %H:%M"),
                    summary.completed_days,
                    summary.duration,
                    summary.percentage
                );
            }
        }
        PlansAction::Delete { key } => {
            if !store.delete(&key).context("failed to delete saved plan")? {
                bail!("no saved plan under {key:?}");
            }
            info!(%key, "saved plan deleted");
            println!("Deleted {key}");
        }
    }
    Ok(())
}
