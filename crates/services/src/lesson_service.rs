use std::sync::Arc;

use tracing::{debug, info, warn};

use ethics_core::catalog::{self, BuiltinTrackStrings, DisplayStringProvider, TrackTable};
use ethics_core::model::{
    AutonomyLevel, ChartDataset, CycleStage, DisplayBlock, JusticeInputs, JusticeModel,
    JusticeReport, LessonSession, Section, SecurityLayer, SessionError, Track, VariantConfig,
    VariantKind,
};

use crate::charts;
use crate::config::LessonConfig;
use crate::error::LessonServiceError;
use crate::section_view::{
    DatasetLink, LayerOption, SectionView, SectionWidget, StageProgress, StrategyOption,
};

/// One learner interaction, as dispatched by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SelectTrack(Track),
    SelectSection(Section),
    SetAutonomyLevel(AutonomyLevel),
    SetStrategy { key: String, enabled: bool },
    SetJusticeGoal(u32),
    SetOutreachEffort(u32),
    SetSecurityLayer { layer: SecurityLayer, enabled: bool },
    ToggleBeneficenceLoop,
}

/// Session factory and section-view assembly for one validated variant.
///
/// Immutable after construction; clone it freely, sessions share the
/// underlying configuration through `Arc`.
#[derive(Debug, Clone)]
pub struct LessonService {
    variant: Arc<VariantConfig>,
    tracks: Arc<TrackTable>,
}

impl LessonService {
    /// Resolve display strings and check the catalog before any session starts.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Catalog` if a track bundle is missing or
    /// incomplete, or if an enabled section has blank or unresolved copy.
    pub fn new(
        variant: VariantConfig,
        provider: &dyn DisplayStringProvider,
    ) -> Result<Self, LessonServiceError> {
        let tracks = TrackTable::resolve(provider)?;
        catalog::validate(&variant, &tracks)?;
        info!(
            variant = %variant.kind(),
            sections = variant.sections().len(),
            "lesson catalog validated"
        );
        Ok(Self {
            variant: Arc::new(variant),
            tracks: Arc::new(tracks),
        })
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError` if the config is invalid or the catalog fails validation.
    pub fn from_config(
        config: LessonConfig,
        provider: &dyn DisplayStringProvider,
    ) -> Result<Self, LessonServiceError> {
        Self::new(config.into_variant()?, provider)
    }

    /// Preset `kind` with the built-in track strings.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Catalog` if the built-in copy fails validation.
    pub fn builtin(kind: VariantKind) -> Result<Self, LessonServiceError> {
        Self::new(VariantConfig::preset(kind), &BuiltinTrackStrings)
    }

    #[must_use]
    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    #[must_use]
    pub fn tracks(&self) -> &TrackTable {
        &self.tracks
    }

    #[must_use]
    pub fn start_session(&self) -> LessonSession {
        let session = LessonSession::new(Arc::clone(&self.variant), Arc::clone(&self.tracks));
        info!(
            session = %session.id(),
            variant = %self.variant.kind(),
            "lesson session started"
        );
        session
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Session` if `section` is not part of the variant.
    pub fn start_session_at(
        &self,
        track: Track,
        section: Section,
    ) -> Result<LessonSession, LessonServiceError> {
        let mut session = self.start_session();
        session.select_track(track);
        session.select_section(section)?;
        Ok(session)
    }

    /// Apply one interaction to `session`.
    ///
    /// Rejected input leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Session` for out-of-domain input.
    pub fn apply(
        &self,
        session: &mut LessonSession,
        action: SessionAction,
    ) -> Result<(), LessonServiceError> {
        let result = dispatch(session, &action);
        if let Err(err) = &result {
            warn!(session = %session.id(), ?action, error = %err, "rejected input");
        }
        Ok(result?)
    }

    /// Assemble everything the UI needs to draw the current section.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Session` if the justice inputs no longer
    /// match the variant's model.
    pub fn section_view(&self, session: &LessonSession) -> Result<SectionView, LessonServiceError> {
        let section = session.section();
        let catalog = session.catalog();
        let copy = catalog.section(section);
        let bundle = session.bundle();

        let (widget, outcome, chart) = match section {
            Section::Intro | Section::Summary => (SectionWidget::None, None, None),
            Section::Autonomy => (
                SectionWidget::Autonomy {
                    options: session.variant().autonomy_levels().to_vec(),
                    selected: session.autonomy_level(),
                },
                Some(session.autonomy_block()),
                None,
            ),
            Section::Justice => {
                let (widget, block, chart) = justice_parts(session)?;
                (widget, Some(block), Some(chart))
            }
            Section::Privacy => {
                let layers = session.security_layers();
                let tier = session.security_tier();
                (
                    SectionWidget::Privacy {
                        layers: SecurityLayer::ALL
                            .into_iter()
                            .map(|layer| LayerOption {
                                layer,
                                enabled: layers.is_enabled(layer),
                            })
                            .collect(),
                        score: layers.score(),
                        tier,
                    },
                    Some(catalog.tier(tier)),
                    None,
                )
            }
            Section::Beneficence => {
                let state = session.loop_state();
                (
                    SectionWidget::Beneficence {
                        closed: state.is_closed(),
                        stages: CycleStage::ALL
                            .into_iter()
                            .map(|stage| StageProgress {
                                stage,
                                percent: state.stage_progress(stage),
                            })
                            .collect(),
                    },
                    Some(catalog.beneficence(state.is_closed())),
                    Some(charts::data_cycle(&state)),
                )
            }
        };

        Ok(SectionView {
            section,
            track: session.track(),
            title: copy.title,
            narrator: copy.narrator,
            instruction: copy.instruction,
            dataset: DatasetLink {
                name: bundle.dataset_name.clone(),
                url: bundle.dataset_link.clone(),
            },
            blocks: catalog.static_blocks(section),
            widget,
            outcome,
            chart,
        })
    }
}

fn dispatch(session: &mut LessonSession, action: &SessionAction) -> Result<(), SessionError> {
    let id = session.id();
    match action {
        SessionAction::SelectTrack(track) => {
            session.select_track(*track);
            debug!(session = %id, %track, "track selected");
        }
        SessionAction::SelectSection(section) => {
            session.select_section(*section)?;
            debug!(session = %id, %section, "section selected");
        }
        SessionAction::SetAutonomyLevel(level) => {
            session.set_autonomy_level(*level)?;
            debug!(session = %id, %level, "consent style selected");
        }
        SessionAction::SetStrategy { key, enabled } => {
            let outcome = session.set_strategy(key, *enabled)?;
            debug!(
                session = %id,
                current = %outcome.current,
                goal = %outcome.goal,
                pass = outcome.pass,
                "justice evaluated"
            );
        }
        SessionAction::SetJusticeGoal(goal) => {
            let outcome = session.set_justice_goal(*goal)?;
            debug!(
                session = %id,
                current = %outcome.current,
                goal = %outcome.goal,
                pass = outcome.pass,
                "justice evaluated"
            );
        }
        SessionAction::SetOutreachEffort(effort) => {
            let outcome = session.set_outreach_effort(*effort)?;
            debug!(
                session = %id,
                effort = outcome.effort,
                diversity = outcome.diversity,
                status = ?outcome.status,
                "outreach evaluated"
            );
        }
        SessionAction::SetSecurityLayer { layer, enabled } => {
            let tier = session.set_security_layer(*layer, *enabled);
            debug!(session = %id, ?layer, enabled, tier = tier.label(), "security evaluated");
        }
        SessionAction::ToggleBeneficenceLoop => {
            let closed = session.toggle_beneficence_loop();
            debug!(session = %id, closed, "beneficence loop toggled");
        }
    }
    Ok(())
}

fn justice_parts(
    session: &LessonSession,
) -> Result<(SectionWidget, DisplayBlock, ChartDataset), SessionError> {
    let catalog = session.catalog();
    match (
        session.variant().justice(),
        session.justice_inputs(),
        session.justice_report()?,
    ) {
        (
            JusticeModel::Strategies(table),
            JusticeInputs::Strategies { flags, .. },
            JusticeReport::Strategies(outcome),
        ) => {
            let options = table
                .strategies()
                .iter()
                .zip(flags)
                .map(|(strategy, enabled)| StrategyOption {
                    key: strategy.key().to_string(),
                    label: strategy.label().to_string(),
                    help: strategy.help().to_string(),
                    weight: strategy.weight(),
                    enabled: *enabled,
                })
                .collect();
            Ok((
                SectionWidget::Strategies {
                    options,
                    goal: outcome.goal,
                    current: outcome.current,
                    pass: outcome.pass,
                },
                catalog.justice(&outcome),
                charts::strategy_composition(&outcome),
            ))
        }
        (JusticeModel::Outreach(model), _, JusticeReport::Outreach(outcome)) => Ok((
            SectionWidget::Outreach {
                effort: outcome.effort,
                step: model.step(),
                diversity: outcome.diversity,
                status: outcome.status,
            },
            catalog.outreach(outcome.status),
            charts::outreach_composition(&outcome),
        )),
        _ => Err(SessionError::JusticeModelMismatch {
            variant: session.variant().kind(),
            requested: "justice",
        }),
    }
}
