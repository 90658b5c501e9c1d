//! Show command: print one day's reading.

use anyhow::{Result, bail};
use tracing::info_span;

use lectio_passage::PassageRequest;

use crate::cli::ShowArgs;
use crate::config::LectioConfig;
use crate::convert;
use crate::session::Session;

/// Print every section's portion for one day.
pub fn run(args: ShowArgs, config: &LectioConfig) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let session = Session::open(&args.source, config)?;
    let plan = session.plan();
    let Some(reading) = plan.day(args.day) else {
        bail!("day {} is outside the plan (1..={})", args.day, plan.duration());
    };

    let translation = convert::resolve_translation(
        args.translation
            .as_deref()
            .unwrap_or(&config.passage.translation),
    );

    println!(
        "Day {} of {} ({}) - {} verses - {}",
        reading.day(),
        plan.duration(),
        session.label(),
        reading.verses_count(),
        translation.abbreviation
    );
    if reading.is_rest_day() {
        println!("  Nothing scheduled. Every section is finished.");
        return Ok(());
    }

    for (&section, portion) in reading.sections() {
        let mark = if session.progress().is_complete(reading.day(), section) {
            "[x]"
        } else {
            "[ ]"
        };
        println!("{mark} {section} ({} verses)", portion.verses_count());
        for book in portion.books() {
            let request = PassageRequest::new(book, translation.id);
            let verses = request.verses().unwrap_or("-");
            match request.book_code() {
                Some(code) => println!("      {}  v. {verses}  [{code}]", request.reference()),
                None => println!("      {}  v. {verses}", request.reference()),
            }
        }
    }
    Ok(())
}
