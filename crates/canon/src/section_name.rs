//! The six fixed section labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanonError;

/// One of the six top-level groupings of biblical books.
///
/// The derived `Ord` follows canonical reading order, which is also the
/// order in which sections appear in a [`CanonTable`](crate::CanonTable)
/// and in each day's reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionName {
    /// Genesis to Job.
    History,
    /// The Psalter.
    Psalms,
    /// Proverbs to Song of Songs.
    Wisdom,
    /// Isaiah to Malachi.
    Prophets,
    /// Matthew to Jude.
    #[serde(rename = "New Testament")]
    NewTestament,
    /// The Apocalypse.
    Revelation,
}

impl SectionName {
    /// All labels in canonical order.
    pub const ALL: [SectionName; 6] = [
        SectionName::History,
        SectionName::Psalms,
        SectionName::Wisdom,
        SectionName::Prophets,
        SectionName::NewTestament,
        SectionName::Revelation,
    ];

    /// Returns the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::History => "History",
            Self::Psalms => "Psalms",
            Self::Wisdom => "Wisdom",
            Self::Prophets => "Prophets",
            Self::NewTestament => "New Testament",
            Self::Revelation => "Revelation",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = CanonError;

    /// Parses a label case-insensitively. `"NewTestament"` and `"nt"` are
    /// accepted alongside `"New Testament"` for command-line convenience.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "history" => Ok(Self::History),
            "psalms" => Ok(Self::Psalms),
            "wisdom" => Ok(Self::Wisdom),
            "prophets" => Ok(Self::Prophets),
            "newtestament" | "nt" => Ok(Self::NewTestament),
            "revelation" => Ok(Self::Revelation),
            _ => Err(CanonError::UnknownSection {
                label: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted() {
        let mut sorted = SectionName::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionName::ALL);
    }

    #[test]
    fn display_labels() {
        let labels: Vec<String> = SectionName::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "History",
                "Psalms",
                "Wisdom",
                "Prophets",
                "New Testament",
                "Revelation"
            ]
        );
    }

    #[test]
    fn parse_roundtrip_all() {
        for name in SectionName::ALL {
            assert_eq!(name.as_str().parse::<SectionName>().unwrap(), name);
        }
    }

    #[test]
    fn parse_variants() {
        assert_eq!(
            "new-testament".parse::<SectionName>().unwrap(),
            SectionName::NewTestament
        );
        assert_eq!("NT".parse::<SectionName>().unwrap(), SectionName::NewTestament);
        assert_eq!("PSALMS".parse::<SectionName>().unwrap(), SectionName::Psalms);
    }

    #[test]
    fn parse_unknown() {
        let err = "Gospels".parse::<SectionName>().unwrap_err();
        assert_eq!(
            err,
            CanonError::UnknownSection {
                label: "Gospels".to_string()
            }
        );
    }

    #[test]
    fn serde_uses_display_label() {
        let json = serde_json::to_string(&SectionName::NewTestament).unwrap();
        assert_eq!(json, "\"New Testament\"");
        let back: SectionName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionName::NewTestament);
    }
}
