use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum JusticeError {
    #[error("percentage must be within 0..=100, got {0}")]
    PercentOutOfRange(u32),

    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),

    #[error("strategy key cannot be empty")]
    EmptyStrategyKey,

    #[error("duplicate strategy: {0:?}")]
    DuplicateStrategy(String),

    #[error("a strategy table needs 2 or 3 strategies, got {0}")]
    StrategyCount(usize),

    #[error("expected {expected} strategy flags, got {got}")]
    FlagCount { expected: usize, got: usize },

    #[error("outreach effort must be within 0..=100 in steps of {step}, got {effort}")]
    EffortOutOfRange { effort: u32, step: u8 },

    #[error("invalid outreach model: {0}")]
    InvalidOutreach(&'static str),
}

//
// ─── PERCENT ──────────────────────────────────────────────────────────────────
//

/// An integer percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: Percent = Percent(100);

    /// # Errors
    ///
    /// Returns `JusticeError::PercentOutOfRange` when `value > 100`.
    pub fn new(value: u32) -> Result<Self, JusticeError> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(JusticeError::PercentOutOfRange(value))
    }

    /// Saturate `value` at 100.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        // value.min(100) always fits in u8.
        Self(u8::try_from(value.min(100)).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

//
// ─── STRATEGY MODEL ───────────────────────────────────────────────────────────
//

/// A recruitment intervention worth a fixed share of representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strategy {
    key: String,
    label: String,
    weight: Percent,
    help: String,
}

impl Strategy {
    /// # Errors
    ///
    /// Returns `JusticeError` if the key is blank or the weight exceeds 100.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        weight: u32,
        help: impl Into<String>,
    ) -> Result<Self, JusticeError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(JusticeError::EmptyStrategyKey);
        }
        let label = label.into();
        let label = if label.trim().is_empty() { key.clone() } else { label };
        Ok(Self {
            key,
            label,
            weight: Percent::new(weight)?,
            help: help.into(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn weight(&self) -> Percent {
        self.weight
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }
}

/// Weight table for the strategy-driven justice demo.
///
/// Weights are data: outcome logic never branches on a strategy key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyTable {
    baseline: Percent,
    default_goal: Percent,
    strategies: Vec<Strategy>,
}

/// Result of a justice evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JusticeOutcome {
    pub current: Percent,
    pub goal: Percent,
    pub pass: bool,
}

impl StrategyTable {
    /// # Errors
    ///
    /// Returns `JusticeError` for an out-of-range baseline or goal, a strategy
    /// count outside `2..=3`, or duplicate keys.
    pub fn new(
        baseline: u32,
        default_goal: u32,
        strategies: Vec<Strategy>,
    ) -> Result<Self, JusticeError> {
        let baseline = Percent::new(baseline)?;
        let default_goal = Percent::new(default_goal)?;
        if !(2..=3).contains(&strategies.len()) {
            return Err(JusticeError::StrategyCount(strategies.len()));
        }
        for (idx, strategy) in strategies.iter().enumerate() {
            if strategies[..idx].iter().any(|prev| prev.key == strategy.key) {
                return Err(JusticeError::DuplicateStrategy(strategy.key.clone()));
            }
        }
        Ok(Self {
            baseline,
            default_goal,
            strategies,
        })
    }

    /// Liaison +10, translation +5, logistics +10 on a 5% baseline; goal 30.
    #[must_use]
    pub fn workshop() -> Self {
        Self {
            baseline: Percent(5),
            default_goal: Percent(30),
            strategies: vec![liaison(), translation(), logistics()],
        }
    }

    /// Liaison +10, translation +5 on a 5% baseline; goal 20.
    #[must_use]
    pub fn briefing() -> Self {
        Self {
            baseline: Percent(5),
            default_goal: Percent(20),
            strategies: vec![liaison(), translation()],
        }
    }

    #[must_use]
    pub fn baseline(&self) -> Percent {
        self.baseline
    }

    #[must_use]
    pub fn default_goal(&self) -> Percent {
        self.default_goal
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Unclamped best case: baseline plus every weight.
    #[must_use]
    pub fn ceiling(&self) -> u32 {
        u32::from(self.baseline.value())
            + self
                .strategies
                .iter()
                .map(|strategy| u32::from(strategy.weight.value()))
                .sum::<u32>()
    }

    /// True when the table can exceed 100% and evaluation has to clamp.
    #[must_use]
    pub fn needs_clamp(&self) -> bool {
        self.ceiling() > 100
    }

    /// # Errors
    ///
    /// Returns `JusticeError::UnknownStrategy` when no strategy has `key`.
    pub fn index_of(&self, key: &str) -> Result<usize, JusticeError> {
        self.strategies
            .iter()
            .position(|strategy| strategy.key == key)
            .ok_or_else(|| JusticeError::UnknownStrategy(key.to_string()))
    }

    /// All-off flags sized to this table.
    #[must_use]
    pub fn empty_flags(&self) -> Vec<bool> {
        vec![false; self.strategies.len()]
    }
}

/// `current = min(100, baseline + Σ weight·flag)`, `pass = current >= goal`.
///
/// # Errors
///
/// Returns `JusticeError::FlagCount` when `flags` does not line up with the table.
pub fn evaluate_justice(
    table: &StrategyTable,
    flags: &[bool],
    goal: Percent,
) -> Result<JusticeOutcome, JusticeError> {
    if flags.len() != table.strategies.len() {
        return Err(JusticeError::FlagCount {
            expected: table.strategies.len(),
            got: flags.len(),
        });
    }

    let raw = u32::from(table.baseline.value())
        + table
            .strategies
            .iter()
            .zip(flags)
            .filter(|(_, enabled)| **enabled)
            .map(|(strategy, _)| u32::from(strategy.weight.value()))
            .sum::<u32>();
    let current = Percent::clamped(raw);

    Ok(JusticeOutcome {
        current,
        goal,
        pass: current >= goal,
    })
}

fn liaison() -> Strategy {
    Strategy {
        key: "liaison".to_string(),
        label: "Community Liaison".to_string(),
        weight: Percent(10),
        help: "Partner with trusted community leaders who co-design recruitment.".to_string(),
    }
}

fn translation() -> Strategy {
    Strategy {
        key: "translation".to_string(),
        label: "Translation Services".to_string(),
        weight: Percent(5),
        help: "Offer consent materials and interpreters in participants' own languages."
            .to_string(),
    }
}

fn logistics() -> Strategy {
    Strategy {
        key: "logistics".to_string(),
        label: "Travel & Logistics Support".to_string(),
        weight: Percent(10),
        help: "Cover transport, childcare and flexible hours so participation is possible."
            .to_string(),
    }
}

//
// ─── OUTREACH MODEL ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutreachStatus {
    /// Dataset dominated by historically well-represented groups.
    Homogeneous,
    /// Dataset reflects the population it claims to describe.
    Representative,
}

/// Slider-driven justice demo: `diversity = base + effort · slope`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutreachModel {
    base: f64,
    slope: f64,
    threshold: f64,
    step: u8,
    default_effort: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutreachOutcome {
    pub effort: u8,
    pub diversity: f64,
    pub status: OutreachStatus,
}

impl OutreachModel {
    /// 10% base, +0.4 per effort point (max 50%), representative from 25%.
    #[must_use]
    pub fn guided() -> Self {
        Self {
            base: 10.0,
            slope: 0.4,
            threshold: 25.0,
            step: 10,
            default_effort: 10,
        }
    }

    /// # Errors
    ///
    /// Returns `JusticeError::InvalidOutreach` when the line leaves `0..=100`,
    /// the step does not divide 100, or the default effort is off-step.
    pub fn new(
        base: f64,
        slope: f64,
        threshold: f64,
        step: u8,
        default_effort: u8,
    ) -> Result<Self, JusticeError> {
        if !(0.0..=100.0).contains(&base) {
            return Err(JusticeError::InvalidOutreach("base must be within 0..=100"));
        }
        if !slope.is_finite() || slope < 0.0 || base + slope * 100.0 > 100.0 {
            return Err(JusticeError::InvalidOutreach(
                "slope must keep diversity within 0..=100",
            ));
        }
        if !(0.0..=100.0).contains(&threshold) {
            return Err(JusticeError::InvalidOutreach("threshold must be within 0..=100"));
        }
        if step == 0 || 100 % step != 0 {
            return Err(JusticeError::InvalidOutreach("step must divide 100"));
        }
        let model = Self {
            base,
            slope,
            threshold,
            step,
            default_effort: 0,
        };
        let default_effort = model
            .check_effort(u32::from(default_effort))
            .map_err(|_| JusticeError::InvalidOutreach("default effort must be on-step"))?;
        Ok(Self {
            default_effort,
            ..model
        })
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn step(&self) -> u8 {
        self.step
    }

    #[must_use]
    pub fn default_effort(&self) -> u8 {
        self.default_effort
    }

    /// # Errors
    ///
    /// Returns `JusticeError::EffortOutOfRange` for values above 100 or off-step.
    pub fn check_effort(&self, effort: u32) -> Result<u8, JusticeError> {
        let err = JusticeError::EffortOutOfRange {
            effort,
            step: self.step,
        };
        let effort_u8 = Percent::new(effort).map_err(|_| err.clone())?.value();
        if effort_u8 % self.step != 0 {
            return Err(err);
        }
        Ok(effort_u8)
    }

    /// Interpolate diversity for an already-checked effort.
    #[must_use]
    pub fn evaluate(&self, effort: u8) -> OutreachOutcome {
        let diversity = (self.base + f64::from(effort) * self.slope).clamp(0.0, 100.0);
        let status = if diversity < self.threshold {
            OutreachStatus::Homogeneous
        } else {
            OutreachStatus::Representative
        };
        OutreachOutcome {
            effort,
            diversity,
            status,
        }
    }
}

/// Which justice demo a variant runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "model")]
pub enum JusticeModel {
    Strategies(StrategyTable),
    Outreach(OutreachModel),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
