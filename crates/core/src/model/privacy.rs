use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SecurityError {
    #[error("expected exactly 4 security layers, got {0}")]
    LayerCount(usize),

    #[error("tier thresholds must satisfy 0 < vulnerable ({vulnerable_min}) < secure ({secure_min}) <= 4")]
    InvalidThresholds { secure_min: u8, vulnerable_min: u8 },
}

/// One of the four protections a data protocol can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityLayer {
    Encryption,
    AccessControl,
    Deidentification,
    Audits,
}

impl SecurityLayer {
    pub const ALL: [SecurityLayer; 4] = [
        SecurityLayer::Encryption,
        SecurityLayer::AccessControl,
        SecurityLayer::Deidentification,
        SecurityLayer::Audits,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SecurityLayer::Encryption => 0,
            SecurityLayer::AccessControl => 1,
            SecurityLayer::Deidentification => 2,
            SecurityLayer::Audits => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SecurityLayer::Encryption => "End-to-End Encryption",
            SecurityLayer::AccessControl => "Role-Based Access Control",
            SecurityLayer::Deidentification => "De-identification",
            SecurityLayer::Audits => "Regular Security Audits",
        }
    }

    #[must_use]
    pub fn help(self) -> &'static str {
        match self {
            SecurityLayer::Encryption => {
                "Ensures data is unreadable to anyone without the decryption key, even if intercepted."
            }
            SecurityLayer::AccessControl => {
                "Ensures only authorized personnel (e.g., PI, Data Manager) can access sensitive files."
            }
            SecurityLayer::Deidentification => {
                "Removes direct identifiers (names, SSN) from the dataset used for analysis."
            }
            SecurityLayer::Audits => "Routine checks to find vulnerabilities before attackers do.",
        }
    }
}

/// On/off state for each [`SecurityLayer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityLayers([bool; 4]);

impl SecurityLayers {
    #[must_use]
    pub fn new(layers: [bool; 4]) -> Self {
        Self(layers)
    }

    /// # Errors
    ///
    /// Returns `SecurityError::LayerCount` unless exactly four flags are given.
    pub fn from_slice(flags: &[bool]) -> Result<Self, SecurityError> {
        <[bool; 4]>::try_from(flags)
            .map(Self)
            .map_err(|_| SecurityError::LayerCount(flags.len()))
    }

    pub fn set(&mut self, layer: SecurityLayer, enabled: bool) {
        self.0[layer.index()] = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self, layer: SecurityLayer) -> bool {
        self.0[layer.index()]
    }

    /// Number of enabled layers, `0..=4`.
    #[must_use]
    pub fn score(&self) -> u8 {
        // At most four layers, so the count always fits.
        self.0.iter().fold(0, |acc, on| acc + u8::from(*on))
    }

    #[must_use]
    pub fn as_array(&self) -> [bool; 4] {
        self.0
    }
}

/// Security outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Secure,
    Vulnerable,
    AtRisk,
}

impl Tier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tier::Secure => "SECURE",
            Tier::Vulnerable => "VULNERABLE",
            Tier::AtRisk => "AT RISK",
        }
    }
}

/// Step function from layer score to [`Tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierThresholds {
    secure_min: u8,
    vulnerable_min: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            secure_min: 4,
            vulnerable_min: 2,
        }
    }
}

impl TierThresholds {
    /// # Errors
    ///
    /// Returns `SecurityError::InvalidThresholds` unless
    /// `0 < vulnerable_min < secure_min <= 4`.
    pub fn new(secure_min: u8, vulnerable_min: u8) -> Result<Self, SecurityError> {
        if vulnerable_min == 0 || vulnerable_min >= secure_min || secure_min > 4 {
            return Err(SecurityError::InvalidThresholds {
                secure_min,
                vulnerable_min,
            });
        }
        Ok(Self {
            secure_min,
            vulnerable_min,
        })
    }

    #[must_use]
    pub fn secure_min(&self) -> u8 {
        self.secure_min
    }

    #[must_use]
    pub fn vulnerable_min(&self) -> u8 {
        self.vulnerable_min
    }

    #[must_use]
    pub fn classify(&self, score: u8) -> Tier {
        if score >= self.secure_min {
            Tier::Secure
        } else if score >= self.vulnerable_min {
            Tier::Vulnerable
        } else {
            Tier::AtRisk
        }
    }
}

#[must_use]
pub fn evaluate_security(layers: &SecurityLayers, thresholds: &TierThresholds) -> Tier {
    thresholds.classify(layers.score())
}
