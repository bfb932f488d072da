use ethics_core::model::{
    AutonomyLevel, ChartDataset, CycleStage, DisplayBlock, OutreachStatus, Percent, Section,
    SecurityLayer, Tier, Track,
};

/// Presentation-agnostic snapshot of the active section.
///
/// Text is already filled in for the active track but still markdown; the UI
/// decides how to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub section: Section,
    pub track: Track,
    pub title: String,
    pub narrator: String,
    pub instruction: Option<String>,
    pub dataset: DatasetLink,
    pub blocks: Vec<DisplayBlock>,
    pub widget: SectionWidget,
    /// Block derived from the current widget state.
    pub outcome: Option<DisplayBlock>,
    pub chart: Option<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLink {
    pub name: String,
    pub url: String,
}

/// Interactive controls for a section and their current values.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionWidget {
    None,
    Autonomy {
        options: Vec<AutonomyLevel>,
        selected: Option<AutonomyLevel>,
    },
    Strategies {
        options: Vec<StrategyOption>,
        goal: Percent,
        current: Percent,
        pass: bool,
    },
    Outreach {
        effort: u8,
        step: u8,
        diversity: f64,
        status: OutreachStatus,
    },
    Privacy {
        layers: Vec<LayerOption>,
        score: u8,
        tier: Tier,
    },
    Beneficence {
        closed: bool,
        stages: Vec<StageProgress>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOption {
    pub key: String,
    pub label: String,
    pub help: String,
    pub weight: Percent,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOption {
    pub layer: SecurityLayer,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageProgress {
    pub stage: CycleStage,
    pub percent: u8,
}
