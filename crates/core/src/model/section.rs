use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::variant::VariantKind;

/// Raised when a section is unknown or not part of the active variant.
///
/// Sections form a closed list, so this always points at a caller bug
/// (a stale link, a typo in a launch flag) rather than a learner mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidSectionError {
    #[error("unknown section: {0:?}")]
    Unknown(String),

    #[error("section `{section}` is not enabled in the {variant} variant")]
    NotEnabled {
        section: Section,
        variant: VariantKind,
    },
}

/// One navigable topic screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Intro,
    Autonomy,
    Justice,
    Privacy,
    Beneficence,
    Summary,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Intro,
        Section::Autonomy,
        Section::Justice,
        Section::Privacy,
        Section::Beneficence,
        Section::Summary,
    ];

    /// The four pillar sections, in teaching order.
    pub const PILLARS: [Section; 4] = [
        Section::Autonomy,
        Section::Justice,
        Section::Privacy,
        Section::Beneficence,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Autonomy => "autonomy",
            Section::Justice => "justice",
            Section::Privacy => "privacy",
            Section::Beneficence => "beneficence",
            Section::Summary => "summary",
        }
    }

    /// Label used by the sidebar navigation.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Intro => "Intro: The Four Pillars",
            Section::Autonomy => "Autonomy: Consent Demo",
            Section::Justice => "Justice: Sampling Demo",
            Section::Privacy => "Privacy: Security Demo",
            Section::Beneficence => "Beneficence: Impact Demo",
            Section::Summary => "Summary",
        }
    }

    #[must_use]
    pub fn is_pillar(self) -> bool {
        Self::PILLARS.contains(&self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = InvalidSectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == normalized)
            .ok_or_else(|| InvalidSectionError::Unknown(raw.to_string()))
    }
}
