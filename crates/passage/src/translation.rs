//! Known translations.

use crate::error::PassageError;

/// Id of the translation used when none is requested or a request fails.
pub const DEFAULT_TRANSLATION: &str = "kjv";

/// One translation a provider may serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    /// Lower-case id sent to providers.
    pub id: &'static str,
    /// Full name.
    pub name: &'static str,
    /// Display abbreviation.
    pub abbreviation: &'static str,
    /// Whether providers need an API key to serve it.
    pub requires_key: bool,
}

const fn t(
    id: &'static str,
    name: &'static str,
    abbreviation: &'static str,
    requires_key: bool,
) -> Translation {
    Translation {
        id,
        name,
        abbreviation,
        requires_key,
    }
}

/// Every translation in the catalog, default first.
pub const TRANSLATIONS: &[Translation] = &[
    t("kjv", "King James Version", "KJV", false),
    t("web", "World English Bible", "WEB", false),
    t("asv", "American Standard Version", "ASV", false),
    t("bbe", "Bible in Basic English", "BBE", false),
    t("ylt", "Young's Literal Translation", "YLT", false),
    t("niv", "New International Version", "NIV", true),
    t("esv", "English Standard Version", "ESV", true),
    t("nlt", "New Living Translation", "NLT", true),
    t("csb", "Christian Standard Bible", "CSB", true),
    t("nasb", "New American Standard Bible", "NASB", true),
];

impl Translation {
    /// Returns the default translation.
    pub fn default_translation() -> &'static Translation {
        &TRANSLATIONS[0]
    }

    /// Looks up a translation by id, ignoring case.
    pub fn find(id: &str) -> Option<&'static Translation> {
        let id = id.trim();
        TRANSLATIONS.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Looks up a translation by id, failing on unknown ids.
    pub fn require(id: &str) -> Result<&'static Translation, PassageError> {
        Self::find(id).ok_or_else(|| PassageError::UnknownTranslation { id: id.to_string() })
    }

    /// Returns the free translations.
    pub fn free() -> impl Iterator<Item = &'static Translation> {
        TRANSLATIONS.iter().filter(|t| !t.requires_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_kjv() {
        assert_eq!(Translation::default_translation().id, DEFAULT_TRANSLATION);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(Translation::find("WEB").unwrap().name, "World English Bible");
        assert!(Translation::find("klingon").is_none());
        assert!(matches!(
            Translation::require("klingon"),
            Err(PassageError::UnknownTranslation { .. })
        ));
    }

    #[test]
    fn ids_are_unique_and_lowercase() {
        for (i, a) in TRANSLATIONS.iter().enumerate() {
            assert_eq!(a.id, a.id.to_ascii_lowercase());
            assert!(TRANSLATIONS[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert_eq!(Translation::free().count(), 5);
    }
}
