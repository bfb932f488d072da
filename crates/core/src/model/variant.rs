use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::autonomy::AutonomyLevel;
use crate::model::justice::{JusticeModel, OutreachModel, StrategyTable};
use crate::model::privacy::TierThresholds;
use crate::model::section::Section;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantError {
    #[error("unknown variant: {0:?}")]
    Unknown(String),

    #[error("variant title cannot be empty")]
    EmptyTitle,

    #[error("a variant needs at least one section")]
    NoSections,

    #[error("the intro section must come first")]
    IntroNotFirst,

    #[error("section `{0}` listed more than once")]
    DuplicateSection(Section),

    #[error("a variant needs 2 or 3 autonomy levels, got {0}")]
    AutonomyLevelCount(usize),

    #[error("autonomy levels must be strictly increasing")]
    AutonomyLevelsUnordered,
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Named configuration preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    /// Full narrated tour with outreach slider and a closing summary.
    #[default]
    Guided,
    /// Three recruitment strategies against an adjustable goal.
    Workshop,
    /// Shortened tour: two strategies, two consent styles.
    Briefing,
}

impl VariantKind {
    pub const ALL: [VariantKind; 3] = [
        VariantKind::Guided,
        VariantKind::Workshop,
        VariantKind::Briefing,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            VariantKind::Guided => "guided",
            VariantKind::Workshop => "workshop",
            VariantKind::Briefing => "briefing",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for VariantKind {
    type Err = VariantError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        VariantKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| VariantError::Unknown(raw.to_string()))
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Everything that differs between lesson variants.
///
/// Sections, consent styles, the justice model and tier thresholds are data;
/// the session logic is shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantConfig {
    kind: VariantKind,
    title: String,
    sections: Vec<Section>,
    autonomy_levels: Vec<AutonomyLevel>,
    justice: JusticeModel,
    tiers: TierThresholds,
}

impl VariantConfig {
    /// # Errors
    ///
    /// Returns `VariantError` if the title is blank, the section list is empty,
    /// does not start with `Intro` or repeats a section, or the autonomy levels
    /// are not 2–3 strictly increasing values.
    pub fn new(
        kind: VariantKind,
        title: impl Into<String>,
        sections: Vec<Section>,
        autonomy_levels: Vec<AutonomyLevel>,
        justice: JusticeModel,
        tiers: TierThresholds,
    ) -> Result<Self, VariantError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(VariantError::EmptyTitle);
        }
        let Some(first) = sections.first() else {
            return Err(VariantError::NoSections);
        };
        if *first != Section::Intro {
            return Err(VariantError::IntroNotFirst);
        }
        for (idx, section) in sections.iter().enumerate() {
            if sections[..idx].contains(section) {
                return Err(VariantError::DuplicateSection(*section));
            }
        }
        if !(2..=3).contains(&autonomy_levels.len()) {
            return Err(VariantError::AutonomyLevelCount(autonomy_levels.len()));
        }
        if autonomy_levels.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(VariantError::AutonomyLevelsUnordered);
        }

        Ok(Self {
            kind,
            title,
            sections,
            autonomy_levels,
            justice,
            tiers,
        })
    }

    /// Built-in configuration for `kind`.
    #[must_use]
    pub fn preset(kind: VariantKind) -> Self {
        let tour = vec![
            Section::Intro,
            Section::Autonomy,
            Section::Justice,
            Section::Privacy,
            Section::Beneficence,
        ];
        match kind {
            VariantKind::Guided => {
                let mut sections = tour;
                sections.push(Section::Summary);
                Self {
                    kind,
                    title: "Ethically Sourced Biomedical Data".to_string(),
                    sections,
                    autonomy_levels: AutonomyLevel::ALL.to_vec(),
                    justice: JusticeModel::Outreach(OutreachModel::guided()),
                    tiers: TierThresholds::default(),
                }
            }
            VariantKind::Workshop => Self {
                kind,
                title: "Ethical Data Acquisition Workshop".to_string(),
                sections: tour,
                autonomy_levels: AutonomyLevel::ALL.to_vec(),
                justice: JusticeModel::Strategies(StrategyTable::workshop()),
                tiers: TierThresholds::default(),
            },
            VariantKind::Briefing => Self {
                kind,
                title: "Ethical Data Acquisition Briefing".to_string(),
                sections: tour,
                autonomy_levels: vec![AutonomyLevel::Jargon, AutonomyLevel::Empowered],
                justice: JusticeModel::Strategies(StrategyTable::briefing()),
                tiers: TierThresholds::default(),
            },
        }
    }

    /// Replace the justice model, keeping everything else.
    #[must_use]
    pub fn with_justice(mut self, justice: JusticeModel) -> Self {
        self.justice = justice;
        self
    }

    #[must_use]
    pub fn with_tiers(mut self, tiers: TierThresholds) -> Self {
        self.tiers = tiers;
        self
    }

    #[must_use]
    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// First section of the tour; always `Intro` for a validated config.
    #[must_use]
    pub fn first_section(&self) -> Section {
        self.sections.first().copied().unwrap_or(Section::Intro)
    }

    #[must_use]
    pub fn autonomy_levels(&self) -> &[AutonomyLevel] {
        &self.autonomy_levels
    }

    #[must_use]
    pub fn has_autonomy_level(&self, level: AutonomyLevel) -> bool {
        self.autonomy_levels.contains(&level)
    }

    #[must_use]
    pub fn justice(&self) -> &JusticeModel {
        &self.justice
    }

    #[must_use]
    pub fn tiers(&self) -> &TierThresholds {
        &self.tiers
    }
}
