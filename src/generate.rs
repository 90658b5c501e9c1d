use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, info_span};

use lectio_allocate::{PlanQuota, generate_study_plan};
use lectio_progress::{FileStore, PlanStore, Progress};

use crate::cli::GenerateArgs;
use crate::config::LectioConfig;
use crate::convert;

/// Generate a plan and emit it as JSON.
pub fn run(args: GenerateArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Resolve length and canon
    let days = convert::validate_days(args.days.unwrap_or(config.plan.days), &config.plan)?;
    let canon = convert::load_canon(&config.canon)?;

    // 2. Report the quotas driving the plan
    let quota = PlanQuota::compute(&canon, days);
    info!(
        days = days.get(),
        total_verses = quota.total_verses(),
        book_verses = canon.book_verses(),
        verses_per_day = quota.verses_per_day(),
        "daily quota"
    );
    for share in quota.sections() {
        info!(
            section = %share.section(),
            verses_per_day = share.verses_per_day(),
            last_window_day = share.finish_day(),
            "section share"
        );
    }

    // 3. Build and serialize
    let plan = generate_study_plan(&canon, days);
    for section in canon.sections() {
        debug!(
            section = %section.name(),
            finish_day = plan.section_finish_day(section.name()),
            "section finished"
        );
    }
    let json = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write plan: {}", path.display()))?;
            info!(path = %path.display(), "plan written");
        }
        None => println!("{json}"),
    }

    // 4. Optionally snapshot into the store
    if args.save {
        let mut store = PlanStore::new(FileStore::new(&config.storage.path));
        let key = store
            .save(&plan, &Progress::new(), Utc::now())
            .context("failed to save plan")?;
        info!(%key, store = %config.storage.path.display(), "plan saved");
        eprintln!("Saved plan: {key}");
    }

    Ok(())
}
