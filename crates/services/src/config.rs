//! JSON overrides layered on top of a variant preset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use ethics_core::model::{
    JusticeModel, OutreachModel, Strategy, StrategyTable, TierThresholds, VariantConfig,
    VariantKind,
};

use crate::error::ConfigError;

/// On-disk lesson configuration.
///
/// Every field is optional. A missing `variant` means `guided`, and missing
/// overrides fall back to that variant's preset.
///
/// ```json
/// { "variant": "workshop", "tiers": { "secure_min": 3, "vulnerable_min": 1 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LessonConfig {
    #[serde(default)]
    pub variant: VariantKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justice: Option<JusticeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<TierConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case", deny_unknown_fields)]
pub enum JusticeConfig {
    Strategies {
        baseline: u32,
        goal: u32,
        strategies: Vec<StrategyConfig>,
    },
    Outreach {
        base: f64,
        slope: f64,
        threshold: f64,
        step: u8,
        default_effort: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    pub key: String,
    #[serde(default)]
    pub label: String,
    pub weight: u32,
    #[serde(default)]
    pub help: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    pub secure_min: u8,
    pub vulnerable_min: u8,
}

impl LessonConfig {
    /// Config that uses `variant`'s preset unchanged.
    #[must_use]
    pub fn preset(variant: VariantKind) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid config.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), variant = %config.variant, "loaded lesson config");
        Ok(config)
    }

    /// Apply the overrides to the preset and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a weight, goal, threshold or outreach
    /// parameter is out of range.
    pub fn into_variant(self) -> Result<VariantConfig, ConfigError> {
        let mut variant = VariantConfig::preset(self.variant);
        if let Some(justice) = self.justice {
            variant = variant.with_justice(justice.into_model()?);
        }
        if let Some(tiers) = self.tiers {
            variant = variant.with_tiers(TierThresholds::new(tiers.secure_min, tiers.vulnerable_min)?);
        }
        Ok(variant)
    }
}

impl JusticeConfig {
    fn into_model(self) -> Result<JusticeModel, ConfigError> {
        let model = match self {
            JusticeConfig::Strategies {
                baseline,
                goal,
                strategies,
            } => {
                let strategies = strategies
                    .into_iter()
                    .map(|s| Strategy::new(s.key, s.label, s.weight, s.help))
                    .collect::<Result<Vec<_>, _>>()?;
                JusticeModel::Strategies(StrategyTable::new(baseline, goal, strategies)?)
            }
            JusticeConfig::Outreach {
                base,
                slope,
                threshold,
                step,
                default_effort,
            } => JusticeModel::Outreach(OutreachModel::new(
                base,
                slope,
                threshold,
                step,
                default_effort,
            )?),
        };
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethics_core::model::{JusticeError, SecurityError};

    #[test]
    fn empty_object_is_the_guided_preset() {
        let config = LessonConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LessonConfig::preset(VariantKind::Guided));
        assert_eq!(
            config.into_variant().unwrap(),
            VariantConfig::preset(VariantKind::Guided)
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = LessonConfig::from_json_str(r#"{"variant":"workshop","colour":"red"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_fields_inside_justice_are_rejected() {
        let raw = r#"{
            "variant": "workshop",
            "justice": {
                "model": "strategies",
                "baseline": 5,
                "goal": 30,
                "goal_cap": 90,
                "strategies": [
                    { "key": "a", "weight": 10 },
                    { "key": "b", "weight": 5 }
                ]
            }
        }"#;
        let err = LessonConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("goal_cap"), "unexpected error: {err}");

        let raw = r#"{
            "justice": {
                "model": "outreach",
                "base": 10.0,
                "slope": 0.4,
                "threshold": 25.0,
                "step": 10,
                "default_effort": 10,
                "ceiling": 50
            }
        }"#;
        assert!(matches!(
            LessonConfig::from_json_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn tier_override_is_validated() {
        let config = LessonConfig {
            tiers: Some(TierConfig {
                secure_min: 2,
                vulnerable_min: 3,
            }),
            ..LessonConfig::preset(VariantKind::Workshop)
        };
        let err = config.into_variant().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Security(SecurityError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn strategy_weight_over_100_is_rejected() {
        let raw = r#"{
            "variant": "workshop",
            "justice": {
                "model": "strategies",
                "baseline": 5,
                "goal": 30,
                "strategies": [
                    { "key": "a", "weight": 150 },
                    { "key": "b", "weight": 5 }
                ]
            }
        }"#;
        let err = LessonConfig::from_json_str(raw)
            .unwrap()
            .into_variant()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Justice(JusticeError::PercentOutOfRange(150))
        ));
    }

    #[test]
    fn preset_round_trips_through_json() {
        let config = LessonConfig {
            tiers: Some(TierConfig {
                secure_min: 3,
                vulnerable_min: 1,
            }),
            ..LessonConfig::preset(VariantKind::Briefing)
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LessonConfig::from_json_str(&json).unwrap(), config);
    }
}
