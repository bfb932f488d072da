use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackError {
    #[error("unknown track: {0:?}")]
    Unknown(String),
}

/// Narrative context that parameterizes the terminology shown to the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// Patients, clinical records and hospital cohorts.
    #[default]
    Clinical,
    /// Donors, biospecimens and foundational research datasets.
    BasicScience,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Clinical, Track::BasicScience];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Track::Clinical => "Clinical Science",
            Track::BasicScience => "Basic Science",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Track::Clinical => "clinical",
            Track::BasicScience => "basic-science",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Track {
    type Err = TrackError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "clinical" | "clinical-science" => Ok(Track::Clinical),
            "basic-science" | "basic" | "foundational-science" => Ok(Track::BasicScience),
            _ => Err(TrackError::Unknown(raw.to_string())),
        }
    }
}

/// Display strings a track substitutes into narrative copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackBundle {
    pub dataset_name: String,
    pub dataset_link: String,
    pub subject_term: String,
    pub sample_term: String,
    pub underserved_example: String,
}

impl TrackBundle {
    /// Placeholder keys recognised by [`TrackBundle::fill`].
    pub const PLACEHOLDERS: [&'static str; 4] =
        ["{dataset}", "{subject}", "{sample}", "{underserved}"];

    /// Replace track placeholders in a copy template.
    #[must_use]
    pub fn fill(&self, template: &str) -> String {
        template
            .replace("{dataset}", &self.dataset_name)
            .replace("{subject}", &self.subject_term)
            .replace("{sample}", &self.sample_term)
            .replace("{underserved}", &self.underserved_example)
    }

    /// Field name/value pairs, in declaration order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("dataset_name", self.dataset_name.as_str()),
            ("dataset_link", self.dataset_link.as_str()),
            ("subject_term", self.subject_term.as_str()),
            ("sample_term", self.sample_term.as_str()),
            ("underserved_example", self.underserved_example.as_str()),
        ]
    }
}
