//! Progress command: mark sections and report completion.

use anyhow::Result;
use tracing::{info, info_span};

use lectio_progress::ProgressSummary;

use crate::cli::{MarkArgs, ProgressAction, ProgressArgs, StatusArgs};
use crate::config::LectioConfig;
use crate::convert;
use crate::session::Session;

/// Dispatch a progress action.
pub fn run(args: ProgressArgs, config: &LectioConfig) -> Result<()> {
    match args.action {
        ProgressAction::Mark(mark) => run_mark(mark, config),
        ProgressAction::Status(status) => run_status(status, config),
    }
}

fn run_mark(args: MarkArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("progress_mark").entered();
    let section = convert::parse_section(&args.section)?;
    let mut session = Session::open(&args.source, config)?;

    let completed = !args.undo;
    let plan = session.plan().clone();
    session
        .progress_mut()
        .set_checked(&plan, args.day, section, completed)?;
    session.persist(config)?;
    info!(day = args.day, %section, completed, "section marked");

    let day_done = session.progress().is_day_complete(&plan, args.day);
    println!(
        "Day {} {section}: {}{}",
        args.day,
        if completed { "read" } else { "unread" },
        if day_done { " (day complete)" } else { "" }
    );
    Ok(())
}

fn run_status(args: StatusArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("progress_status").entered();
    let session = Session::open(&args.source, config)?;
    let summary = ProgressSummary::compute(session.plan(), session.progress());

    println!(
        "{}: {} of {} days completed ({}%)",
        session.label(),
        summary.completed_days,
        summary.duration,
        summary.percentage
    );
    for s in &summary.sections {
        println!(
            "  {:<14} {:>4}/{:<4} portions  {:>6}/{:<6} verses",
            s.section.as_str(),
            s.portions_completed,
            s.portions_total,
            s.verses_read,
            s.verses_total
        );
    }
    Ok(())
}
