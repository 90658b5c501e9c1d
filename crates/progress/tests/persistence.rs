//! Tracker and plan store sharing one store file.

use std::num::NonZeroU32;

use chrono::{TimeZone, Utc};
use lectio_allocate::generate_study_plan;
use lectio_canon::{CanonTable, SectionName};
use lectio_progress::{
    FileStore, KeyValueStore, PlanStore, Progress, ProgressSummary, ProgressTracker, plan_id,
};

#[test]
fn tracker_and_plans_share_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lectio-store.json");
    let plan = generate_study_plan(CanonTable::standard(), NonZeroU32::new(30).unwrap());

    let mut tracker = ProgressTracker::new(FileStore::new(&path));
    for &section in plan.day(1).unwrap().sections().keys() {
        tracker.mark(&plan_id(30), 1, section, true).unwrap();
    }

    let mut plans = PlanStore::new(FileStore::new(&path));
    let progress = tracker.load(&plan_id(30)).unwrap();
    let saved_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let key = plans.save(&plan, &progress, saved_at).unwrap();

    let keys = FileStore::new(&path).keys().unwrap();
    assert!(keys.contains(&key));
    assert!(keys.contains(&"bible-study-section-progress".to_string()));

    let reopened = PlanStore::new(FileStore::new(&path));
    let listed = reopened.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].key, key);

    let summary = ProgressSummary::compute(listed[0].saved.plan(), listed[0].saved.progress());
    assert_eq!(summary.completed_days, 1);
    assert_eq!(summary.percentage, 3);
}

#[test]
fn missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    let tracker = ProgressTracker::new(store);
    assert_eq!(tracker.load("plan-1-days").unwrap(), Progress::new());
    assert!(!dir.path().join("absent.json").exists());

    let plans = PlanStore::new(FileStore::new(dir.path().join("absent.json")));
    assert!(plans.list().unwrap().is_empty());
}

#[test]
fn progress_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    ProgressTracker::new(FileStore::new(&path))
        .mark("plan-365-days", 200, SectionName::Revelation, true)
        .unwrap();
    let progress = ProgressTracker::new(FileStore::new(&path))
        .load("plan-365-days")
        .unwrap();
    assert!(progress.is_complete(200, SectionName::Revelation));
}
