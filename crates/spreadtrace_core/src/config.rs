//! Calibration parameters for scoring and tier classification.
//!
//! # Responsibility
//! - Carry the formula constants as configuration instead of hard-wired
//!   values.
//! - Validate parameter overrides before they reach the engine.
//!
//! # Invariants
//! - Scale factors are strictly positive; the formula divides by
//!   `max_duration`.
//! - `medical_supervision` stays strictly above `regular_quarantine`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Normalization and escalation constants for the risk formula.
///
/// A contact's score is
/// `upstream * (duration * min_distance) / (distance * max_duration)`,
/// plus `age_risk_bonus` for people strictly older than `age_threshold`,
/// clamped to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskParameters {
    /// Closest plausible contact distance, meters.
    pub min_distance: f64,
    /// Longest plausible meeting, minutes.
    pub max_duration: f64,
    /// Ages strictly above this receive the additive bonus.
    pub age_threshold: u32,
    /// Added to the computed score for people past the age threshold.
    pub age_risk_bonus: f64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            max_duration: 45.0,
            age_threshold: 55,
            age_risk_bonus: 0.08,
        }
    }
}

impl RiskParameters {
    /// # Errors
    /// Rejects non-positive scale factors and a negative or NaN age bonus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distance <= 0.0 || self.min_distance.is_nan() {
            return Err(ConfigError::NonPositiveFactor {
                field: "min_distance",
                value: self.min_distance,
            });
        }
        if self.max_duration <= 0.0 || self.max_duration.is_nan() {
            return Err(ConfigError::NonPositiveFactor {
                field: "max_duration",
                value: self.max_duration,
            });
        }
        if self.age_risk_bonus < 0.0 || self.age_risk_bonus.is_nan() {
            return Err(ConfigError::NegativeAgeBonus(self.age_risk_bonus));
        }
        Ok(())
    }
}

/// Report tier cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierThresholds {
    /// Scores strictly above this require medical supervision.
    pub medical_supervision: f64,
    /// Scores strictly above this (and not above medical) require
    /// quarantine.
    pub regular_quarantine: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medical_supervision: 0.5,
            regular_quarantine: 0.2,
        }
    }
}

impl TierThresholds {
    /// # Errors
    /// Rejects thresholds that are not strictly ordered
    /// (`medical_supervision > regular_quarantine`); NaN fails the check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.medical_supervision.is_nan()
            || self.regular_quarantine.is_nan()
            || self.medical_supervision <= self.regular_quarantine
        {
            return Err(ConfigError::UnorderedThresholds {
                medical_supervision: self.medical_supervision,
                regular_quarantine: self.regular_quarantine,
            });
        }
        Ok(())
    }
}

/// Full calibration surface, the shape of the `--params` TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    pub risk: RiskParameters,
    pub tiers: TierThresholds,
}

impl TraceConfig {
    /// Validates both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.risk.validate()?;
        self.tiers.validate()
    }
}

/// Invalid calibration input.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveFactor { field: &'static str, value: f64 },
    NegativeAgeBonus(f64),
    UnorderedThresholds {
        medical_supervision: f64,
        regular_quarantine: f64,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveFactor { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::NegativeAgeBonus(value) => {
                write!(f, "age_risk_bonus must not be negative, got {value}")
            }
            Self::UnorderedThresholds {
                medical_supervision,
                regular_quarantine,
            } => write!(
                f,
                "medical_supervision ({medical_supervision}) must be above \
                 regular_quarantine ({regular_quarantine})"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RiskParameters, TierThresholds, TraceConfig};

    #[test]
    fn defaults_validate() {
        TraceConfig::default()
            .validate()
            .expect("default calibration should be valid");
    }

    #[test]
    fn zero_max_duration_is_rejected() {
        let params = RiskParameters {
            max_duration: 0.0,
            ..RiskParameters::default()
        };
        let err = params.validate().expect_err("zero factor must be rejected");
        assert_eq!(
            err,
            ConfigError::NonPositiveFactor {
                field: "max_duration",
                value: 0.0,
            }
        );
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let thresholds = TierThresholds {
            medical_supervision: 0.2,
            regular_quarantine: 0.5,
        };
        let err = thresholds
            .validate()
            .expect_err("inverted thresholds must be rejected");
        assert!(matches!(err, ConfigError::UnorderedThresholds { .. }));
    }

    #[test]
    fn equal_thresholds_are_rejected() {
        let thresholds = TierThresholds {
            medical_supervision: 0.3,
            regular_quarantine: 0.3,
        };
        assert!(thresholds.validate().is_err());
    }
}
