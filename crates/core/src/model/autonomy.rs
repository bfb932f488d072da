use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AutonomyError {
    #[error("unknown communication style: {0:?}")]
    Unknown(String),
}

/// Clarity of consent communication, ordered from least to most empowering.
///
/// - `Jargon`: legal boilerplate the participant signs without understanding
/// - `Standard`: plain-language translation of the same terms
/// - `Empowered`: an ongoing dialogue that makes withdrawal rights explicit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutonomyLevel {
    Jargon,
    Standard,
    Empowered,
}

impl AutonomyLevel {
    pub const ALL: [AutonomyLevel; 3] = [
        AutonomyLevel::Jargon,
        AutonomyLevel::Standard,
        AutonomyLevel::Empowered,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AutonomyLevel::Jargon => "Standard Legalese",
            AutonomyLevel::Standard => "Simplified Language",
            AutonomyLevel::Empowered => "Empowered Dialogue",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            AutonomyLevel::Jargon => "jargon",
            AutonomyLevel::Standard => "standard",
            AutonomyLevel::Empowered => "empowered",
        }
    }
}

impl fmt::Display for AutonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AutonomyLevel {
    type Err = AutonomyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        AutonomyLevel::ALL
            .into_iter()
            .find(|level| level.slug() == normalized || level.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| AutonomyError::Unknown(raw.to_string()))
    }
}
