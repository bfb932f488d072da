mod copy;
mod strings;

use thiserror::Error;

use crate::model::{
    AutonomyLevel, DisplayBlock, JusticeModel, JusticeOutcome, OutreachStatus, Section, Tier,
    Track, TrackBundle, VariantConfig,
};

pub use copy::SectionCopy;
pub use strings::{BuiltinTrackStrings, DisplayStringProvider, TrackTable};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no display strings for track `{0}`")]
    MissingBundle(Track),

    #[error("track `{track}` has an empty `{field}`")]
    EmptyField { track: Track, field: &'static str },

    #[error("track `{track}` has an invalid dataset link: {link}")]
    InvalidDatasetLink { track: Track, link: String },

    #[error("section `{section}` has empty copy")]
    EmptyCopy { section: Section },

    #[error("section `{section}` leaves a placeholder unresolved: {text:?}")]
    UnresolvedPlaceholder { section: Section, text: String },
}

/// Page text for one section after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledCopy {
    pub title: String,
    pub narrator: String,
    pub instruction: Option<String>,
}

/// Narrative copy filled in for one track's display strings.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    bundle: &'a TrackBundle,
}

impl<'a> Catalog<'a> {
    #[must_use]
    pub fn new(bundle: &'a TrackBundle) -> Self {
        Self { bundle }
    }

    #[must_use]
    pub fn bundle(&self) -> &'a TrackBundle {
        self.bundle
    }

    #[must_use]
    pub fn section(&self, section: Section) -> FilledCopy {
        let SectionCopy {
            title,
            narrator,
            instruction,
        } = copy::section_copy(section);
        FilledCopy {
            title: self.bundle.fill(title),
            narrator: self.bundle.fill(narrator),
            instruction: instruction.map(|text| self.bundle.fill(text)),
        }
    }

    /// Blocks shown regardless of widget state.
    #[must_use]
    pub fn static_blocks(&self, section: Section) -> Vec<DisplayBlock> {
        copy::static_blocks(section)
            .into_iter()
            .map(|block| self.fill(block))
            .collect()
    }

    /// Block for a consent style; `None` yields the prompt block.
    #[must_use]
    pub fn autonomy(&self, level: Option<AutonomyLevel>) -> DisplayBlock {
        let block = match level {
            Some(level) => copy::autonomy_block(level),
            None => copy::autonomy_prompt(),
        };
        self.fill(block)
    }

    #[must_use]
    pub fn justice(&self, outcome: &JusticeOutcome) -> DisplayBlock {
        self.fill(copy::justice_block(outcome))
    }

    #[must_use]
    pub fn outreach(&self, status: OutreachStatus) -> DisplayBlock {
        self.fill(copy::outreach_block(status))
    }

    #[must_use]
    pub fn tier(&self, tier: Tier) -> DisplayBlock {
        self.fill(copy::tier_block(tier))
    }

    #[must_use]
    pub fn beneficence(&self, loop_closed: bool) -> DisplayBlock {
        self.fill(copy::beneficence_block(loop_closed))
    }

    fn fill(&self, block: DisplayBlock) -> DisplayBlock {
        block.map_text(|text| self.bundle.fill(text))
    }

    /// Every block `section` can ever show under `variant`.
    fn reachable_blocks(&self, section: Section, variant: &VariantConfig) -> Vec<DisplayBlock> {
        let mut blocks = self.static_blocks(section);
        match section {
            Section::Intro | Section::Summary => {}
            Section::Autonomy => {
                blocks.push(self.autonomy(None));
                blocks.extend(
                    variant
                        .autonomy_levels()
                        .iter()
                        .map(|level| self.autonomy(Some(*level))),
                );
            }
            Section::Justice => match variant.justice() {
                JusticeModel::Strategies(table) => {
                    for pass in [true, false] {
                        blocks.push(self.justice(&JusticeOutcome {
                            current: table.baseline(),
                            goal: table.default_goal(),
                            pass,
                        }));
                    }
                }
                JusticeModel::Outreach(_) => {
                    blocks.push(self.outreach(OutreachStatus::Homogeneous));
                    blocks.push(self.outreach(OutreachStatus::Representative));
                }
            },
            Section::Privacy => {
                for tier in [Tier::Secure, Tier::Vulnerable, Tier::AtRisk] {
                    blocks.push(self.tier(tier));
                }
            }
            Section::Beneficence => {
                blocks.push(self.beneficence(false));
                blocks.push(self.beneficence(true));
            }
        }
        blocks
    }
}

/// Check that every section enabled by `variant` has complete copy for every track.
///
/// Runs once at startup so a gap fails the launch instead of rendering blank.
///
/// # Errors
///
/// Returns `CatalogError::EmptyCopy` for blank titles, narration or blocks and
/// `CatalogError::UnresolvedPlaceholder` when a `{...}` template survives filling.
pub fn validate(variant: &VariantConfig, tracks: &TrackTable) -> Result<(), CatalogError> {
    for track in Track::ALL {
        let catalog = Catalog::new(tracks.get(track));
        for section in variant.sections() {
            let section = *section;
            let copy = catalog.section(section);
            if copy.title.trim().is_empty() || copy.narrator.trim().is_empty() {
                return Err(CatalogError::EmptyCopy { section });
            }
            check_resolved(section, &copy.title)?;
            check_resolved(section, &copy.narrator)?;
            if let Some(instruction) = copy.instruction.as_deref() {
                check_resolved(section, instruction)?;
            }

            for block in catalog.reachable_blocks(section, variant) {
                if block.is_blank() {
                    return Err(CatalogError::EmptyCopy { section });
                }
                check_resolved(section, block.body())?;
                if let Some(heading) = block.heading() {
                    check_resolved(section, heading)?;
                }
            }
        }
    }
    Ok(())
}

fn check_resolved(section: Section, text: &str) -> Result<(), CatalogError> {
    if text.contains('{') || text.contains('}') {
        return Err(CatalogError::UnresolvedPlaceholder {
            section,
            text: text.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Percent, VariantKind};

    fn sample_outcome(current: u32, goal: u32) -> JusticeOutcome {
        let current = Percent::clamped(current);
        let goal = Percent::clamped(goal);
        JusticeOutcome {
            current,
            goal,
            pass: current >= goal,
        }
    }

    fn clinical() -> TrackBundle {
        TrackTable::builtin().get(Track::Clinical).clone()
    }

    #[test]
    fn every_preset_validates_against_builtin_strings() {
        let tracks = TrackTable::builtin();
        for kind in VariantKind::ALL {
            validate(&VariantConfig::preset(kind), &tracks).unwrap();
        }
    }

    #[test]
    fn autonomy_blocks_are_distinct_and_idempotent() {
        let bundle = clinical();
        let catalog = Catalog::new(&bundle);
        let blocks: Vec<DisplayBlock> = AutonomyLevel::ALL
            .iter()
            .map(|level| catalog.autonomy(Some(*level)))
            .collect();
        for block in &blocks {
            assert!(!block.is_blank());
        }
        assert_ne!(blocks[0], blocks[1]);
        assert_ne!(blocks[1], blocks[2]);
        assert_ne!(blocks[0], blocks[2]);
        assert_eq!(
            catalog.autonomy(Some(AutonomyLevel::Standard)),
            catalog.autonomy(Some(AutonomyLevel::Standard))
        );
        assert!(!blocks.contains(&catalog.autonomy(None)));
    }

    #[test]
    fn copy_uses_track_terminology() {
        let tracks = TrackTable::builtin();
        let clinical = Catalog::new(tracks.get(Track::Clinical)).section(Section::Justice);
        let basic = Catalog::new(tracks.get(Track::BasicScience)).section(Section::Justice);
        assert!(clinical.narrator.contains("rural and low-income patients"));
        assert!(basic.narrator.contains("African and Indigenous ancestry"));
        assert!(
            basic
                .instruction
                .as_deref()
                .is_some_and(|text| text.contains("GTEx"))
        );
    }

    #[test]
    fn justice_block_reports_figures() {
        let bundle = clinical();
        let catalog = Catalog::new(&bundle);
        let passed = catalog.justice(&sample_outcome(30, 30));
        assert_eq!(passed.heading(), Some("Goal met"));
        assert!(passed.body().contains("**30%** (goal 30%)"));
        let failed = catalog.justice(&sample_outcome(25, 30));
        assert_eq!(failed.heading(), Some("Goal not met"));
    }

    #[test]
    fn tier_blocks_carry_tier_label() {
        let bundle = clinical();
        let catalog = Catalog::new(&bundle);
        assert_eq!(catalog.tier(Tier::Secure).heading(), Some("SECURE"));
        assert_eq!(catalog.tier(Tier::AtRisk).heading(), Some("AT RISK"));
    }

    #[test]
    fn unknown_placeholder_is_caught() {
        let err = check_resolved(Section::Intro, "Hello {donor}").unwrap_err();
        assert!(matches!(err, CatalogError::UnresolvedPlaceholder { .. }));
    }
}
