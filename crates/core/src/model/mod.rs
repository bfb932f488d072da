mod autonomy;
mod beneficence;
mod block;
mod chart;
mod ids;
mod justice;
mod privacy;
mod section;
mod session;
mod track;
mod variant;

pub use ids::SessionId;

pub use autonomy::{AutonomyError, AutonomyLevel};
pub use beneficence::{CycleStage, LoopState};
pub use block::{DisplayBlock, Tone};
pub use chart::{ChartDataset, ChartEntry, ChartKind};
pub use justice::{
    JusticeError, JusticeModel, JusticeOutcome, OutreachModel, OutreachOutcome, OutreachStatus,
    Percent, Strategy, StrategyTable, evaluate_justice,
};
pub use privacy::{
    SecurityError, SecurityLayer, SecurityLayers, Tier, TierThresholds, evaluate_security,
};
pub use section::{InvalidSectionError, Section};
pub use session::{JusticeInputs, JusticeReport, LessonSession, SessionError};
pub use track::{Track, TrackBundle, TrackError};
pub use variant::{VariantConfig, VariantError, VariantKind};
