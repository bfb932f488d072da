#![forbid(unsafe_code)]

pub mod charts;
pub mod config;
pub mod error;
pub mod lesson_service;
pub mod section_view;

pub use config::{JusticeConfig, LessonConfig, StrategyConfig, TierConfig};
pub use error::{ConfigError, LessonServiceError};
pub use lesson_service::{LessonService, SessionAction};
pub use section_view::{
    DatasetLink, LayerOption, SectionView, SectionWidget, StageProgress, StrategyOption,
};
