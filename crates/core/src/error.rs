use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{
    AutonomyError, InvalidSectionError, JusticeError, SecurityError, SessionError, TrackError,
    VariantError,
};

/// Any failure raised by the lesson model.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Section(#[from] InvalidSectionError),
    #[error(transparent)]
    Autonomy(#[from] AutonomyError),
    #[error(transparent)]
    Justice(#[from] JusticeError),
    #[error(transparent)]
    Security(#[from] SecurityError),
    #[error(transparent)]
    Variant(#[from] VariantError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
