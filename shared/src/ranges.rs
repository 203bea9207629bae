//! Recommended input ranges for the calculator widgets.
//!
//! These are presentation-surface bounds, not calculator invariants: the
//! calculator accepts anything inside its mathematical domain, while the
//! sidebar keeps its widgets inside these ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{GrowthInputs, MAX_SCHEDULE_YEARS};

/// Bounds, default and step for one numeric widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: f64,
    /// `None` leaves the range open at the top (principal)
    #[serde(default)]
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
}

/// Why a configured [`NumberRange`] is unusable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("{field}: bounds and step must be finite numbers")]
    NonFinite { field: &'static str },

    #[error("{field}: min {min} is greater than max {max}")]
    Inverted { field: &'static str, min: f64, max: f64 },

    #[error("{field}: default {default} lies outside the allowed range")]
    DefaultOutOfRange { field: &'static str, default: f64 },

    #[error("{field}: step must be positive (got {step})")]
    NonPositiveStep { field: &'static str, step: f64 },

    #[error("{field}: min {min} is outside the calculator's domain")]
    OutsideDomain { field: &'static str, min: f64 },

    #[error("{field}: max must be set and at most {limit}")]
    AboveLimit { field: &'static str, limit: f64 },
}

impl NumberRange {
    pub const fn bounded(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max: Some(max),
            default,
            step,
        }
    }

    pub const fn open(min: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max: None,
            default,
            step,
        }
    }

    /// Pull a value back inside `[min, max]`. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let upper = self.max.unwrap_or(f64::INFINITY);
        value.max(self.min).min(upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// Upper bound used by widgets that need a finite end
    pub fn max_or(&self, fallback: f64) -> f64 {
        self.max.unwrap_or(fallback)
    }

    fn validate(&self, field: &'static str) -> Result<(), RangeError> {
        let bounds_finite = self.min.is_finite()
            && self.default.is_finite()
            && self.step.is_finite()
            && self.max.map_or(true, f64::is_finite);
        if !bounds_finite {
            return Err(RangeError::NonFinite { field });
        }

        if let Some(max) = self.max {
            if self.min > max {
                return Err(RangeError::Inverted {
                    field,
                    min: self.min,
                    max,
                });
            }
        }
        if !self.contains(self.default) {
            return Err(RangeError::DefaultOutOfRange {
                field,
                default: self.default,
            });
        }
        if self.step <= 0.0 {
            return Err(RangeError::NonPositiveStep {
                field,
                step: self.step,
            });
        }

        Ok(())
    }
}

/// Widget ranges for the three calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRanges {
    pub principal: NumberRange,
    pub annual_rate_percent: NumberRange,
    pub years: NumberRange,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            principal: NumberRange::open(0.0, 1000.0, 100.0),
            annual_rate_percent: NumberRange::bounded(1.0, 20.0, 8.0, 1.0),
            years: NumberRange::bounded(1.0, 50.0, 25.0, 1.0),
        }
    }
}

impl InputRanges {
    /// Check every range is well formed and stays inside the calculator's domain
    pub fn validate(&self) -> Result<(), RangeError> {
        self.principal.validate("principal")?;
        self.annual_rate_percent.validate("annual_rate_percent")?;
        self.years.validate("years")?;

        if self.principal.min < 0.0 {
            return Err(RangeError::OutsideDomain {
                field: "principal",
                min: self.principal.min,
            });
        }
        if self.annual_rate_percent.min < -100.0 {
            return Err(RangeError::OutsideDomain {
                field: "annual_rate_percent",
                min: self.annual_rate_percent.min,
            });
        }
        if self.years.min < 0.0 {
            return Err(RangeError::OutsideDomain {
                field: "years",
                min: self.years.min,
            });
        }
        if self.years.max.map_or(true, |max| max > MAX_SCHEDULE_YEARS) {
            return Err(RangeError::AboveLimit {
                field: "years",
                limit: MAX_SCHEDULE_YEARS,
            });
        }

        Ok(())
    }

    /// Inputs the widgets start with
    pub fn default_inputs(&self) -> GrowthInputs {
        GrowthInputs::new(
            self.principal.default,
            self.annual_rate_percent.default,
            self.years.default,
        )
    }

    /// Clamp every field of `inputs` into its widget range
    pub fn clamp_inputs(&self, inputs: &GrowthInputs) -> GrowthInputs {
        GrowthInputs::new(
            self.principal.clamp(inputs.principal),
            self.annual_rate_percent.clamp(inputs.annual_rate_percent),
            self.years.clamp(inputs.years),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let ranges = InputRanges::default();
        assert!(ranges.validate().is_ok());
        assert_eq!(ranges.default_inputs(), GrowthInputs::new(1000.0, 8.0, 25.0));
        assert_eq!(ranges.principal.max, None);
        assert_eq!(ranges.principal.step, 100.0);
        assert_eq!(ranges.annual_rate_percent.max, Some(20.0));
        assert_eq!(ranges.years.max, Some(50.0));
    }

    #[test]
    fn test_clamp_inputs() {
        let ranges = InputRanges::default();
        let clamped = ranges.clamp_inputs(&GrowthInputs::new(-500.0, 35.0, 0.0));
        assert_eq!(clamped, GrowthInputs::new(0.0, 20.0, 1.0));

        let untouched = GrowthInputs::new(1e9, 12.0, 30.0);
        assert_eq!(ranges.clamp_inputs(&untouched), untouched);
    }

    #[test]
    fn test_clamp_nan_uses_default() {
        let range = NumberRange::bounded(1.0, 20.0, 8.0, 1.0);
        assert_eq!(range.clamp(f64::NAN), 8.0);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut ranges = InputRanges::default();
        ranges.years = NumberRange::bounded(50.0, 1.0, 25.0, 1.0);
        assert_eq!(
            ranges.validate(),
            Err(RangeError::Inverted {
                field: "years",
                min: 50.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_default_outside_range() {
        let mut ranges = InputRanges::default();
        ranges.annual_rate_percent.default = 25.0;
        assert!(matches!(
            ranges.validate(),
            Err(RangeError::DefaultOutOfRange { field: "annual_rate_percent", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        let mut ranges = InputRanges::default();
        ranges.principal.step = 0.0;
        assert!(matches!(
            ranges.validate(),
            Err(RangeError::NonPositiveStep { field: "principal", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_principal_floor() {
        let mut ranges = InputRanges::default();
        ranges.principal = NumberRange::open(-100.0, 0.0, 100.0);
        assert!(matches!(
            ranges.validate(),
            Err(RangeError::OutsideDomain { field: "principal", .. })
        ));
    }

    #[test]
    fn test_validate_caps_years() {
        let mut ranges = InputRanges::default();
        ranges.years = NumberRange::bounded(1.0, 1e9, 25.0, 1.0);
        assert_eq!(
            ranges.validate(),
            Err(RangeError::AboveLimit {
                field: "years",
                limit: MAX_SCHEDULE_YEARS
            })
        );

        ranges.years = NumberRange::open(1.0, 25.0, 1.0);
        assert!(matches!(ranges.validate(), Err(RangeError::AboveLimit { .. })));

        ranges.years = NumberRange::bounded(1.0, MAX_SCHEDULE_YEARS, 25.0, 1.0);
        assert!(ranges.validate().is_ok());
    }
}
