use ethics_core::model::SessionError;
use services::LessonServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The learner picked something this lesson does not offer.
    Rejected,
    Internal,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Rejected => "That option isn't available in this lesson.",
            ViewError::Internal => "Something went wrong. Please try again.",
        }
    }
}

impl From<LessonServiceError> for ViewError {
    fn from(err: LessonServiceError) -> Self {
        match err {
            LessonServiceError::Session(SessionError::JusticeModelMismatch { .. }) => {
                ViewError::Internal
            }
            LessonServiceError::Session(_) => ViewError::Rejected,
            _ => ViewError::Internal,
        }
    }
}
