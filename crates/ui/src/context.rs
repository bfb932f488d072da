use std::sync::Arc;

use ethics_core::model::{Section, Track};
use services::LessonService;

pub trait UiApp: Send + Sync {
    fn lesson_service(&self) -> Arc<LessonService>;

    fn initial_track(&self) -> Track {
        Track::default()
    }

    fn initial_section(&self) -> Section {
        Section::Intro
    }
}

#[derive(Clone)]
pub struct AppContext {
    lesson_service: Arc<LessonService>,
    initial_track: Track,
    initial_section: Section,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_service: app.lesson_service(),
            initial_track: app.initial_track(),
            initial_section: app.initial_section(),
        }
    }

    #[must_use]
    pub fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    #[must_use]
    pub fn initial_track(&self) -> Track {
        self.initial_track
    }

    /// Section requested at launch; the view falls back to the first section
    /// and shows an error if the variant does not include it.
    #[must_use]
    pub fn initial_section(&self) -> Section {
        self.initial_section
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
