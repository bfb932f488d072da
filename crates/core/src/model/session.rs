use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Catalog, TrackTable};
use crate::model::{
    AutonomyLevel, DisplayBlock, InvalidSectionError, JusticeError, JusticeModel, JusticeOutcome,
    LoopState, OutreachOutcome, Percent, Section, SecurityError, SecurityLayer, SecurityLayers,
    SessionId, Tier, Track, TrackBundle, VariantConfig, VariantKind, evaluate_justice,
    evaluate_security,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    InvalidSection(#[from] InvalidSectionError),

    #[error("communication style `{level}` is not offered in the {variant} variant")]
    LevelNotEnabled {
        level: AutonomyLevel,
        variant: VariantKind,
    },

    #[error("the {variant} variant does not run the {requested} justice demo")]
    JusticeModelMismatch {
        variant: VariantKind,
        requested: &'static str,
    },

    #[error(transparent)]
    Justice(#[from] JusticeError),

    #[error(transparent)]
    Security(#[from] SecurityError),
}

//
// ─── WIDGET STATE ──────────────────────────────────────────────────────────────
//

/// Current justice widget values; the shape follows the variant's model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JusticeInputs {
    Strategies { flags: Vec<bool>, goal: Percent },
    Outreach { effort: u8 },
}

/// Derived justice result for whichever model is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JusticeReport {
    Strategies(JusticeOutcome),
    Outreach(OutreachOutcome),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one learner walking through the lesson.
///
/// Created at session start and dropped at session end. Track, section and
/// each section's widgets are independent: changing one never touches another.
#[derive(Debug, Clone)]
pub struct LessonSession {
    id: SessionId,
    variant: Arc<VariantConfig>,
    tracks: Arc<TrackTable>,
    track: Track,
    section: Section,
    autonomy: Option<AutonomyLevel>,
    justice: JusticeInputs,
    security: SecurityLayers,
    beneficence: LoopState,
}

impl LessonSession {
    /// Start a session at the variant's first section with every widget at its default.
    #[must_use]
    pub fn new(variant: Arc<VariantConfig>, tracks: Arc<TrackTable>) -> Self {
        let justice = match variant.justice() {
            JusticeModel::Strategies(table) => JusticeInputs::Strategies {
                flags: table.empty_flags(),
                goal: table.default_goal(),
            },
            JusticeModel::Outreach(model) => JusticeInputs::Outreach {
                effort: model.default_effort(),
            },
        };

        Self {
            id: SessionId::new(),
            section: variant.first_section(),
            variant,
            tracks,
            track: Track::default(),
            autonomy: None,
            justice,
            security: SecurityLayers::default(),
            beneficence: LoopState::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Display strings for the active track.
    #[must_use]
    pub fn bundle(&self) -> &TrackBundle {
        self.tracks.get(self.track)
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(self.bundle())
    }

    #[must_use]
    pub fn autonomy_level(&self) -> Option<AutonomyLevel> {
        self.autonomy
    }

    #[must_use]
    pub fn justice_inputs(&self) -> &JusticeInputs {
        &self.justice
    }

    #[must_use]
    pub fn security_layers(&self) -> SecurityLayers {
        self.security
    }

    #[must_use]
    pub fn loop_state(&self) -> LoopState {
        self.beneficence
    }

    #[must_use]
    pub fn loop_closed(&self) -> bool {
        self.beneficence.is_closed()
    }

    //
    // ─── NAVIGATION ───────────────────────────────────────────────────────────
    //

    /// Switch the display-string bundle. Nothing else changes.
    pub fn select_track(&mut self, track: Track) {
        self.track = track;
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidSection` if the variant does not include `section`.
    pub fn select_section(&mut self, section: Section) -> Result<(), SessionError> {
        if !self.variant.has_section(section) {
            return Err(InvalidSectionError::NotEnabled {
                section,
                variant: self.variant.kind(),
            }
            .into());
        }
        self.section = section;
        Ok(())
    }

    /// Parse a section slug and select it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSection` for unknown or disabled sections.
    pub fn select_section_named(&mut self, raw: &str) -> Result<Section, SessionError> {
        let section = raw.parse::<Section>()?;
        self.select_section(section)?;
        Ok(section)
    }

    //
    // ─── AUTONOMY ─────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError::LevelNotEnabled` if the variant does not offer `level`.
    pub fn set_autonomy_level(&mut self, level: AutonomyLevel) -> Result<DisplayBlock, SessionError> {
        if !self.variant.has_autonomy_level(level) {
            return Err(SessionError::LevelNotEnabled {
                level,
                variant: self.variant.kind(),
            });
        }
        self.autonomy = Some(level);
        Ok(self.autonomy_block())
    }

    /// Block for the current style, or the prompt block before one is picked.
    #[must_use]
    pub fn autonomy_block(&self) -> DisplayBlock {
        self.catalog().autonomy(self.autonomy)
    }

    //
    // ─── JUSTICE ──────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError` when the variant runs the outreach demo or `key`
    /// names no strategy.
    pub fn set_strategy(&mut self, key: &str, enabled: bool) -> Result<JusticeOutcome, SessionError> {
        let kind = self.variant.kind();
        let JusticeModel::Strategies(table) = self.variant.justice() else {
            return Err(mismatch(kind, "strategy"));
        };
        let idx = table.index_of(key)?;
        let JusticeInputs::Strategies { flags, goal } = &mut self.justice else {
            return Err(mismatch(kind, "strategy"));
        };
        let slot = flags.get_mut(idx).ok_or(JusticeError::FlagCount {
            expected: table.len(),
            got: idx,
        })?;
        *slot = enabled;
        Ok(evaluate_justice(table, flags, *goal)?)
    }

    /// # Errors
    ///
    /// Returns `SessionError` when `goal > 100` or the variant runs the outreach demo.
    pub fn set_justice_goal(&mut self, goal: u32) -> Result<JusticeOutcome, SessionError> {
        let kind = self.variant.kind();
        let JusticeModel::Strategies(table) = self.variant.justice() else {
            return Err(mismatch(kind, "strategy"));
        };
        let goal = Percent::new(goal)?;
        let JusticeInputs::Strategies {
            flags,
            goal: current_goal,
        } = &mut self.justice
        else {
            return Err(mismatch(kind, "strategy"));
        };
        *current_goal = goal;
        Ok(evaluate_justice(table, flags, goal)?)
    }

    /// # Errors
    ///
    /// Returns `SessionError` for off-step or out-of-range effort, or when the
    /// variant runs the strategy demo.
    pub fn set_outreach_effort(&mut self, effort: u32) -> Result<OutreachOutcome, SessionError> {
        let kind = self.variant.kind();
        let JusticeModel::Outreach(model) = self.variant.justice() else {
            return Err(mismatch(kind, "outreach"));
        };
        let effort = model.check_effort(effort)?;
        let JusticeInputs::Outreach { effort: current } = &mut self.justice else {
            return Err(mismatch(kind, "outreach"));
        };
        *current = effort;
        Ok(model.evaluate(effort))
    }

    /// Evaluate the justice widgets as they stand.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the stored inputs no longer match the variant's model.
    pub fn justice_report(&self) -> Result<JusticeReport, SessionError> {
        let kind = self.variant.kind();
        match (self.variant.justice(), &self.justice) {
            (JusticeModel::Strategies(table), JusticeInputs::Strategies { flags, goal }) => {
                Ok(JusticeReport::Strategies(evaluate_justice(table, flags, *goal)?))
            }
            (JusticeModel::Outreach(model), JusticeInputs::Outreach { effort }) => {
                Ok(JusticeReport::Outreach(model.evaluate(*effort)))
            }
            (JusticeModel::Strategies(_), _) => Err(mismatch(kind, "outreach")),
            (JusticeModel::Outreach(_), _) => Err(mismatch(kind, "strategy")),
        }
    }

    //
    // ─── PRIVACY ──────────────────────────────────────────────────────────────
    //

    pub fn set_security_layer(&mut self, layer: SecurityLayer, enabled: bool) -> Tier {
        self.security.set(layer, enabled);
        self.security_tier()
    }

    /// Replace all four layers at once.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Security` unless exactly four flags are given.
    pub fn set_security_layers(&mut self, flags: &[bool]) -> Result<Tier, SessionError> {
        self.security = SecurityLayers::from_slice(flags)?;
        Ok(self.security_tier())
    }

    #[must_use]
    pub fn security_tier(&self) -> Tier {
        evaluate_security(&self.security, self.variant.tiers())
    }

    //
    // ─── BENEFICENCE ──────────────────────────────────────────────────────────
    //

    /// Flip the "loop closed" toggle and return its new value.
    pub fn toggle_beneficence_loop(&mut self) -> bool {
        self.beneficence.toggle()
    }
}

fn mismatch(variant: VariantKind, requested: &'static str) -> SessionError {
    SessionError::JusticeModelMismatch { variant, requested }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn session(kind: VariantKind) -> LessonSession {
        LessonSession::new(
            Arc::new(VariantConfig::preset(kind)),
            Arc::new(TrackTable::builtin()),
        )
    }

    #[test]
    fn starts_from_documented_defaults() {
        let s = session(VariantKind::Workshop);
        assert_eq!(s.track(), Track::Clinical);
        assert_eq!(s.section(), Section::Intro);
        assert_eq!(s.autonomy_level(), None);
        assert_eq!(s.security_layers().score(), 0);
        assert_eq!(s.security_tier(), Tier::AtRisk);
        assert!(!s.loop_closed());
        assert_eq!(
            s.justice_inputs(),
            &JusticeInputs::Strategies {
                flags: vec![false; 3],
                goal: Percent::new(30).unwrap(),
            }
        );

        let guided = session(VariantKind::Guided);
        assert_eq!(guided.justice_inputs(), &JusticeInputs::Outreach { effort: 10 });
    }

    #[test]
    fn summary_only_selectable_in_guided() {
        let mut guided = session(VariantKind::Guided);
        guided.select_section(Section::Summary).unwrap();
        assert_eq!(guided.section(), Section::Summary);

        let mut workshop = session(VariantKind::Workshop);
        let err = workshop.select_section(Section::Summary).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidSection(InvalidSectionError::NotEnabled {
                section: Section::Summary,
                variant: VariantKind::Workshop,
            })
        );
        assert_eq!(workshop.section(), Section::Intro);
    }

    #[test]
    fn select_section_named_rejects_unknown() {
        let mut s = session(VariantKind::Workshop);
        assert_eq!(s.select_section_named("privacy").unwrap(), Section::Privacy);
        let err = s.select_section_named("ethics").unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidSection(InvalidSectionError::Unknown(_))
        ));
        assert_eq!(s.section(), Section::Privacy);
    }

    #[test]
    fn track_selection_leaves_everything_else_alone() {
        let mut s = session(VariantKind::Workshop);
        s.select_section(Section::Privacy).unwrap();
        s.set_security_layer(SecurityLayer::Encryption, true);
        s.set_strategy("liaison", true).unwrap();
        s.set_autonomy_level(AutonomyLevel::Empowered).unwrap();
        s.toggle_beneficence_loop();

        let before = (
            s.section(),
            s.security_layers(),
            s.justice_inputs().clone(),
            s.autonomy_level(),
            s.loop_closed(),
        );
        s.select_track(Track::BasicScience);
        let after = (
            s.section(),
            s.security_layers(),
            s.justice_inputs().clone(),
            s.autonomy_level(),
            s.loop_closed(),
        );
        assert_eq!(before, after);
        assert_eq!(s.track(), Track::BasicScience);
    }

    #[test]
    fn section_selection_leaves_track_and_widgets_alone() {
        let mut s = session(VariantKind::Workshop);
        s.select_track(Track::BasicScience);
        s.set_security_layers(&[true, true, false, false]).unwrap();
        s.set_justice_goal(25).unwrap();

        for section in [Section::Justice, Section::Beneficence, Section::Intro] {
            s.select_section(section).unwrap();
            assert_eq!(s.track(), Track::BasicScience);
            assert_eq!(s.security_tier(), Tier::Vulnerable);
            assert!(matches!(
                s.justice_inputs(),
                JusticeInputs::Strategies { goal, .. } if goal.value() == 25
            ));
        }
    }

    #[test]
    fn track_round_trip_restores_bundle() {
        let mut s = session(VariantKind::Guided);
        let original = s.bundle().clone();
        s.select_track(Track::BasicScience);
        assert_ne!(s.bundle(), &original);
        s.select_track(Track::Clinical);
        assert_eq!(s.bundle(), &original);
    }

    #[test]
    fn autonomy_level_must_be_offered() {
        let mut briefing = session(VariantKind::Briefing);
        let err = briefing.set_autonomy_level(AutonomyLevel::Standard).unwrap_err();
        assert!(matches!(err, SessionError::LevelNotEnabled { .. }));
        assert_eq!(briefing.autonomy_level(), None);

        let block = briefing.set_autonomy_level(AutonomyLevel::Empowered).unwrap();
        assert_eq!(block, briefing.autonomy_block());
        let again = briefing.set_autonomy_level(AutonomyLevel::Empowered).unwrap();
        assert_eq!(block, again);
    }

    #[test]
    fn strategies_accumulate_towards_goal() {
        let mut s = session(VariantKind::Workshop);
        assert_eq!(s.set_strategy("liaison", true).unwrap().current.value(), 15);
        let outcome = s.set_strategy("logistics", true).unwrap();
        assert_eq!(outcome.current.value(), 25);
        assert!(!outcome.pass);
        let outcome = s.set_strategy("translation", true).unwrap();
        assert_eq!(outcome.current.value(), 30);
        assert!(outcome.pass);
        let outcome = s.set_strategy("liaison", false).unwrap();
        assert_eq!(outcome.current.value(), 20);
    }

    #[test]
    fn goal_out_of_range_is_rejected_without_mutation() {
        let mut s = session(VariantKind::Workshop);
        let err = s.set_justice_goal(101).unwrap_err();
        assert_eq!(err, SessionError::Justice(JusticeError::PercentOutOfRange(101)));
        assert!(matches!(
            s.justice_inputs(),
            JusticeInputs::Strategies { goal, .. } if goal.value() == 30
        ));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let mut s = session(VariantKind::Briefing);
        let err = s.set_strategy("logistics", true).unwrap_err();
        assert_eq!(
            err,
            SessionError::Justice(JusticeError::UnknownStrategy("logistics".to_string()))
        );
    }

    #[test]
    fn justice_model_mismatch_is_reported() {
        let mut guided = session(VariantKind::Guided);
        assert!(matches!(
            guided.set_strategy("liaison", true),
            Err(SessionError::JusticeModelMismatch { .. })
        ));
        let mut workshop = session(VariantKind::Workshop);
        assert!(matches!(
            workshop.set_outreach_effort(20),
            Err(SessionError::JusticeModelMismatch { .. })
        ));
    }

    #[test]
    fn outreach_effort_drives_report() {
        let mut s = session(VariantKind::Guided);
        let outcome = s.set_outreach_effort(40).unwrap();
        assert_eq!(outcome.effort, 40);
        match s.justice_report().unwrap() {
            JusticeReport::Outreach(report) => assert_eq!(report, outcome),
            JusticeReport::Strategies(_) => panic!("expected outreach report"),
        }
        assert!(s.set_outreach_effort(45).is_err());
        assert!(matches!(
            s.justice_inputs(),
            JusticeInputs::Outreach { effort: 40 }
        ));
    }

    #[test]
    fn fifth_security_flag_is_rejected() {
        let mut s = session(VariantKind::Workshop);
        let err = s.set_security_layers(&[true; 5]).unwrap_err();
        assert_eq!(err, SessionError::Security(SecurityError::LayerCount(5)));
        assert_eq!(s.set_security_layers(&[true; 4]).unwrap(), Tier::Secure);
    }

    #[test]
    fn beneficence_toggle_is_an_involution() {
        let mut s = session(VariantKind::Workshop);
        let original = s.loop_closed();
        s.toggle_beneficence_loop();
        s.toggle_beneficence_loop();
        assert_eq!(s.loop_closed(), original);
    }

    #[test]
    fn sessions_are_isolated() {
        let variant = Arc::new(VariantConfig::preset(VariantKind::Workshop));
        let tracks = Arc::new(TrackTable::builtin());
        let mut first = LessonSession::new(Arc::clone(&variant), Arc::clone(&tracks));
        let second = LessonSession::new(variant, tracks);
        first.set_security_layers(&[true; 4]).unwrap();
        first.select_track(Track::BasicScience);
        assert_ne!(first.id(), second.id());
        assert_eq!(second.security_tier(), Tier::AtRisk);
        assert_eq!(second.track(), Track::Clinical);
    }
}
