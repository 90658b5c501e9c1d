use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level lectio configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LectioConfig {
    /// Plan length settings.
    #[serde(default)]
    pub plan: PlanToml,

    /// Canon source.
    #[serde(default)]
    pub canon: CanonToml,

    /// Progress and saved-plan storage.
    #[serde(default)]
    pub storage: StorageToml,

    /// Export defaults.
    #[serde(default)]
    pub export: ExportToml,

    /// Passage lookup defaults.
    #[serde(default)]
    pub passage: PassageToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_min_days")]
    pub min_days: u32,
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            days: default_days(),
            min_days: default_min_days(),
            max_days: default_max_days(),
        }
    }
}

fn default_days() -> u32 {
    365
}
fn default_min_days() -> u32 {
    1
}
fn default_max_days() -> u32 {
    1000
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CanonToml {
    /// Custom canon file; the built-in canon when unset.
    pub path: Option<PathBuf>,
    /// Reject custom sections whose declared total differs from their books.
    #[serde(default)]
    pub strict_totals: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageToml {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StorageToml {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("lectio-store.json")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            dir: None,
        }
    }
}

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassageToml {
    #[serde(default = "default_translation")]
    pub translation: String,
}

impl Default for PassageToml {
    fn default() -> Self {
        Self {
            translation: default_translation(),
        }
    }
}

fn default_translation() -> String {
    lectio_passage::DEFAULT_TRANSLATION.to_string()
}

/// Custom canon file: sections in canonical order, each with its books.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonFileToml {
    #[serde(rename = "section")]
    pub sections: Vec<SectionToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionToml {
    pub name: String,
    /// Drives the section's quota; the sum of the books when absent.
    #[serde(default)]
    pub total_verses: Option<u32>,
    #[serde(rename = "book")]
    pub books: Vec<BookToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookToml {
    pub name: String,
    pub chapters: Vec<u32>,
}

/// Loads the configuration at `path`, or the defaults if it does not exist.
pub fn load(path: &Path) -> Result<LectioConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(LectioConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: LectioConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: LectioConfig = toml::from_str("").unwrap();
        assert_eq!(config.plan.days, 365);
        assert_eq!(config.plan.min_days, 1);
        assert_eq!(config.plan.max_days, 1000);
        assert!(config.canon.path.is_none());
        assert!(!config.canon.strict_totals);
        assert_eq!(config.storage.path, PathBuf::from("lectio-store.json"));
        assert_eq!(config.export.format, "json");
        assert_eq!(config.passage.translation, "kjv");
    }

    #[test]
    fn partial_sections() {
        let config: LectioConfig = toml::from_str(
            r#"
            [plan]
            days = 90

            [export]
            format = "csv"
            dir = "exports"
            "#,
        )
        .unwrap();
        assert_eq!(config.plan.days, 90);
        assert_eq!(config.plan.max_days, 1000);
        assert_eq!(config.export.dir, Some(PathBuf::from("exports")));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<LectioConfig>("[plan]\nweeks = 3\n").is_err());
        assert!(toml::from_str::<LectioConfig>("[theme]\ndark = true\n").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.plan.days, 365);
    }

    #[test]
    fn canon_file_shape() {
        let canon: CanonFileToml = toml::from_str(
            r#"
            [[section]]
            name = "History"
            total_verses = 100

            [[section.book]]
            name = "Genesis"
            chapters = [50, 50]
            "#,
        )
        .unwrap();
        assert_eq!(canon.sections.len(), 1);
        assert_eq!(canon.sections[0].books[0].chapters, vec![50, 50]);
    }
}
