//! Printable HTML export.

use std::fmt::Write;

use chrono::NaiveDate;
use lectio_allocate::StudyPlan;
use lectio_canon::SectionName;
use lectio_progress::{Progress, ProgressSummary};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.header { text-align: center; margin-bottom: 30px; border-bottom: 2px solid #ccc; padding-bottom: 20px; }
.progress { background: #f0f0f0; padding: 15px; margin-bottom: 20px; border-radius: 8px; }
.day { margin-bottom: 25px; page-break-inside: avoid; }
.day-header { background: #4f46e5; color: white; padding: 10px; border-radius: 5px; margin-bottom: 10px; }
.section { margin: 10px 0; padding: 10px; border-left: 4px solid #4f46e5; background: #f8fafc; }
.book { margin: 5px 0; font-weight: bold; }
.verses { margin-left: 20px; color: #666; }
.completed { background: #dcfce7; border-left-color: #16a34a; }
@media print { body { margin: 0; } .day { page-break-inside: avoid; } }
";

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn section_blurb(section: SectionName) -> &'static str {
    match section {
        SectionName::History => "History books (Genesis to Job)",
        SectionName::Psalms => "Psalms",
        SectionName::Wisdom => "Wisdom literature (Proverbs to Song of Songs)",
        SectionName::Prophets => "Prophets (Isaiah to Malachi)",
        SectionName::NewTestament => "New Testament (Matthew to Jude)",
        SectionName::Revelation => "Revelation",
    }
}

/// Renders a self-contained printable page for the plan.
///
/// Completed days and sections are highlighted. Every piece of plan text
/// is escaped.
pub fn to_html(plan: &StudyPlan, progress: &Progress, generated_on: NaiveDate) -> String {
    let summary = ProgressSummary::compute(plan, progress);
    let title = format!("{}-Day Bible Study Plan", plan.duration());
    let mut html = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n"
    );
    let _ = write!(
        html,
        "<div class=\"header\">\n<h1>{title}</h1>\n<p>Progress: {} of {} days completed ({}%)</p>\n<p>Generated on: {}</p>\n</div>\n",
        summary.completed_days,
        plan.duration(),
        summary.percentage,
        generated_on.format("%Y-%m-%d"),
    );

    let _ = write!(
        html,
        "<div class=\"progress\">\n<h3>Plan Overview</h3>\n<p>This plan will take you through the entire Bible in {} days with balanced daily readings from:</p>\n<ul>\n",
        plan.duration()
    );
    for s in &summary.sections {
        let _ = writeln!(html, "<li>{}</li>", escape_html(section_blurb(s.section)));
    }
    html.push_str("</ul>\n</div>\n");

    for reading in plan.daily_plan() {
        let day = reading.day();
        let day_done = progress.is_day_complete(plan, day);
        let _ = write!(
            html,
            "<div class=\"day\">\n<div class=\"day-header\">\n<h3>Day {day}{}</h3>\n</div>\n",
            if day_done { " &#10003; Completed" } else { "" }
        );
        if reading.is_rest_day() {
            html.push_str("<div class=\"section\"><div class=\"verses\">No reading scheduled</div></div>\n");
        }
        for (&section, portion) in reading.sections() {
            let class = if progress.is_complete(day, section) {
                "section completed"
            } else {
                "section"
            };
            let _ = write!(
                html,
                "<div class=\"{class}\">\n<h4>{}</h4>\n",
                escape_html(section.as_str())
            );
            for book in portion.books() {
                let _ = writeln!(html, "<div class=\"book\">{}</div>", escape_html(book.book()));
                if let Some(chapters) = book.chapters() {
                    let list: Vec<String> = chapters.iter().map(u32::to_string).collect();
                    let _ = writeln!(
                        html,
                        "<div class=\"verses\">Chapters: {}</div>",
                        list.join(", ")
                    );
                }
                if let Some(verses) = book.verses() {
                    let _ = writeln!(
                        html,
                        "<div class=\"verses\">Verses: {}</div>",
                        escape_html(verses)
                    );
                }
            }
            let _ = write!(
                html,
                "<div class=\"verses\">~{} verses</div>\n</div>\n",
                portion.verses_count()
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use lectio_allocate::generate_study_plan;
    use lectio_canon::{Book, CanonTable, Section};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"A & B\"</b>"),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn page_structure() {
        let canon = CanonTable::new(vec![
            Section::new(
                SectionName::Wisdom,
                vec![Book::new("Song of <Songs>", vec![4, 4]).unwrap()],
            )
            .unwrap(),
        ])
        .unwrap();
        let plan = generate_study_plan(&canon, NonZeroU32::new(2).unwrap());
        let mut progress = Progress::new();
        progress.set(1, SectionName::Wisdom, true);
        let html = to_html(&plan, &progress, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>2-Day Bible Study Plan</h1>"));
        assert!(html.contains("Progress: 1 of 2 days completed (50%)"));
        assert!(html.contains("Generated on: 2024-02-29"));
        assert!(html.contains("Day 1 &#10003; Completed"));
        assert!(html.contains("Song of &lt;Songs&gt;"));
        assert!(!html.contains("<Songs>"));
        assert!(html.contains("Verses: 5-8"));
        assert!(html.contains("<li>Wisdom literature (Proverbs to Song of Songs)</li>"));
        assert_eq!(html.matches("class=\"day\"").count(), 2);
    }
}
