//! Pure conversion functions: TOML config structs and CLI strings -> crate types.

use std::num::NonZeroU32;
use std::path::Path;

use anyhow::{Context, Result, bail};

use lectio_canon::{Book, CanonTable, Section, SectionName};
use lectio_export::ExportFormat;
use lectio_passage::Translation;
use tracing::warn;

use crate::config::{CanonFileToml, CanonToml, PlanToml};

/// Checks a requested plan length against the configured bounds.
pub fn validate_days(days: u32, plan: &PlanToml) -> Result<NonZeroU32> {
    if plan.min_days == 0 || plan.min_days > plan.max_days {
        bail!(
            "invalid [plan] bounds: min_days = {}, max_days = {}",
            plan.min_days,
            plan.max_days
        );
    }
    if days < plan.min_days || days > plan.max_days {
        bail!(
            "plan length must be between {} and {} days, got {days}",
            plan.min_days,
            plan.max_days
        );
    }
    NonZeroU32::new(days).context("plan length must be at least 1 day")
}

/// Parses a section label given on the command line.
pub fn parse_section(s: &str) -> Result<SectionName> {
    s.parse::<SectionName>()
        .with_context(|| format!("expected one of: {}", section_list()))
}

fn section_list() -> String {
    SectionName::ALL
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses an export format name.
pub fn parse_format(s: &str) -> Result<ExportFormat> {
    Ok(s.parse::<ExportFormat>()?)
}

/// Resolves a translation id, falling back to the default for unknown ids.
pub fn resolve_translation(id: &str) -> &'static Translation {
    Translation::find(id).unwrap_or_else(|| {
        let fallback = Translation::default_translation();
        warn!(requested = id, fallback = fallback.id, "unknown translation");
        fallback
    })
}

/// Builds a [`CanonTable`] from a parsed custom canon file.
///
/// With `strict`, every declared section total must equal the sum of its
/// books.
pub fn build_canon(file: &CanonFileToml, strict: bool) -> Result<CanonTable> {
    let mut sections = Vec::with_capacity(file.sections.len());
    for section in &file.sections {
        let name = parse_section(&section.name)?;
        let books = section
            .books
            .iter()
            .map(|b| Book::new(b.name.as_str(), b.chapters.clone()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid book in section {name}"))?;
        let built = match section.total_verses {
            Some(declared) => Section::with_declared_total(name, books, declared)?,
            None => Section::new(name, books)?,
        };
        if strict {
            built.check_total()?;
        } else if !built.is_consistent() {
            warn!(
                section = %name,
                declared = built.total_verses(),
                books = built.book_verses(),
                "declared section total differs from its books"
            );
        }
        sections.push(built);
    }
    Ok(CanonTable::new(sections)?)
}

/// Loads the configured canon: a custom file if set, otherwise the built-in one.
pub fn load_canon(canon: &CanonToml) -> Result<CanonTable> {
    match &canon.path {
        Some(path) => read_canon_file(path, canon.strict_totals),
        None => Ok(CanonTable::standard().clone()),
    }
}

fn read_canon_file(path: &Path, strict: bool) -> Result<CanonTable> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read canon file: {}", path.display()))?;
    let file: CanonFileToml = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse canon file: {}", path.display()))?;
    build_canon(&file, strict).with_context(|| format!("invalid canon file: {}", path.display()))
}
