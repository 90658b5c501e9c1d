//! Tabular export.

use std::io::Write;

use csv::{Terminator, WriterBuilder};
use lectio_allocate::{BookPortion, StudyPlan};
use lectio_progress::Progress;
use serde::Serialize;

use crate::error::ExportError;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Completed")]
    completed: &'static str,
    #[serde(rename = "Section")]
    section: &'a str,
    #[serde(rename = "Books")]
    books: String,
    #[serde(rename = "Verses Count")]
    verses_count: u32,
}

/// Formats one book portion as `Book (Ch: 1, 2) (V: 1-56)`.
pub fn describe_book(portion: &BookPortion) -> String {
    let mut text = portion.book().to_string();
    if let Some(chapters) = portion.chapters() {
        let list: Vec<String> = chapters.iter().map(u32::to_string).collect();
        text.push_str(&format!(" (Ch: {})", list.join(", ")));
    }
    if let Some(verses) = portion.verses() {
        text.push_str(&format!(" (V: {verses})"));
    }
    text
}

/// Writes the plan as CSV, one row per day and section.
///
/// Columns are `Day,Completed,Section,Books,Verses Count`. `Completed` is
/// `Yes` when that section is marked on that day.
pub fn write_csv<W: Write>(
    writer: W,
    plan: &StudyPlan,
    progress: &Progress,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for reading in plan.daily_plan() {
        for (&section, portion) in reading.sections() {
            let books: Vec<String> = portion.books().iter().map(describe_book).collect();
            wtr.serialize(CsvRow {
                day: reading.day(),
                completed: if progress.is_complete(reading.day(), section) {
                    "Yes"
                } else {
                    "No"
                },
                section: section.as_str(),
                books: books.join("; "),
                verses_count: portion.verses_count(),
            })?;
        }
    }
    wtr.flush().map_err(|e| ExportError::Csv {
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Renders the plan as a CSV string.
pub fn to_csv(plan: &StudyPlan, progress: &Progress) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, plan, progress)?;
    String::from_utf8(buf).map_err(|e| ExportError::Csv {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use lectio_allocate::generate_study_plan;
    use lectio_canon::{Book, CanonTable, Section, SectionName};

    #[test]
    fn describe_book_formats() {
        let full = BookPortion::new("Genesis", Some(vec![1, 2]), Some("1-56".into()));
        assert_eq!(describe_book(&full), "Genesis (Ch: 1, 2) (V: 1-56)");
        let bare = BookPortion::new("Jude", None, None);
        assert_eq!(describe_book(&bare), "Jude");
    }

    #[test]
    fn rows_and_quoting() {
        let canon = CanonTable::new(vec![
            Section::new(SectionName::History, vec![Book::new("Genesis", vec![50, 50]).unwrap()])
                .unwrap(),
        ])
        .unwrap();
        let plan = generate_study_plan(&canon, NonZeroU32::new(1).unwrap());
        let mut progress = Progress::new();
        progress.set(1, SectionName::History, true);

        let csv = to_csv(&plan, &progress).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Day,Completed,Section,Books,Verses Count");
        assert_eq!(lines[1], "1,Yes,History,\"Genesis (Ch: 1, 2) (V: 1-100)\",100");
        assert_eq!(lines.len(), 2);
    }
}
