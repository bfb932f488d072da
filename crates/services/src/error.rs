//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use ethics_core::catalog::CatalogError;
use ethics_core::model::{JusticeError, SecurityError, SessionError, VariantError};

/// Errors emitted while loading a `LessonConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Variant(#[from] VariantError),
    #[error(transparent)]
    Justice(#[from] JusticeError),
    #[error(transparent)]
    Security(#[from] SecurityError),
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
