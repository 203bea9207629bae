//! Domain types for the investor manual.
//!
//! The only computation in the app lives here: compound growth of a principal
//! under annual compounding. Everything is pure and free of UI dependencies so
//! the frontend (and tests) can call it directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod format;
mod ranges;

pub use format::format_amount;
pub use ranges::{InputRanges, NumberRange, RangeError};

/// Longest holding period [`GrowthInputs::schedule`] will expand point by point
pub const MAX_SCHEDULE_YEARS: f64 = 1000.0;

/// Inputs for one evaluation of the growth formula.
///
/// This is a plain value object: callers build a fresh one whenever any of the
/// three inputs changes and nothing is carried over between evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Initial amount invested
    pub principal: f64,
    /// Annual return as a percentage (8.0 means 8%)
    pub annual_rate_percent: f64,
    /// Holding period in years
    pub years: f64,
}

/// Result of evaluating [`GrowthInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Principal grown under annual compounding
    pub final_balance: f64,
    /// `final_balance - principal`
    pub profit: f64,
}

/// Balance at a point in the holding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: f64,
    pub balance: f64,
}

/// Which input a [`GrowthError::NonFinite`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthField {
    Principal,
    AnnualRate,
    Years,
}

impl std::fmt::Display for GrowthField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthField::Principal => write!(f, "principal"),
            GrowthField::AnnualRate => write!(f, "annual rate"),
            GrowthField::Years => write!(f, "years"),
        }
    }
}

/// Inputs outside the domain of the growth formula
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error("{field} must be a finite number")]
    NonFinite { field: GrowthField },

    #[error("principal cannot be negative (got {0})")]
    NegativePrincipal(f64),

    #[error("years cannot be negative (got {0})")]
    NegativeYears(f64),

    #[error("annual rate cannot be below -100% (got {0}%)")]
    RateBelowTotalLoss(f64),

    /// The balance is not representable as a finite `f64`, even when
    /// computed in log space.
    #[error("final balance overflowed for {0:?}")]
    Overflow(GrowthInputs),

    #[error("cannot chart {years} years (limit is {limit})")]
    ScheduleTooLong { years: f64, limit: f64 },
}

impl GrowthInputs {
    pub fn new(principal: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }

    /// Check the inputs lie inside the formula's domain.
    ///
    /// Zero years and a zero rate are valid; a rate of exactly -100% is a
    /// total loss and still valid.
    pub fn validate(&self) -> Result<(), GrowthError> {
        let fields = [
            (GrowthField::Principal, self.principal),
            (GrowthField::AnnualRate, self.annual_rate_percent),
            (GrowthField::Years, self.years),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(GrowthError::NonFinite { field: *field });
        }

        if self.principal < 0.0 {
            return Err(GrowthError::NegativePrincipal(self.principal));
        }
        if self.years < 0.0 {
            return Err(GrowthError::NegativeYears(self.years));
        }
        if self.annual_rate_percent < -100.0 {
            return Err(GrowthError::RateBelowTotalLoss(self.annual_rate_percent));
        }

        Ok(())
    }

    /// Per-year growth factor, `1 + rate/100`
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.annual_rate_percent / 100.0
    }

    /// Evaluate the growth formula for these inputs
    pub fn evaluate(&self) -> Result<GrowthResult, GrowthError> {
        CompoundGrowthCalculator::evaluate_inputs(self)
    }

    /// Balance at every whole year from 0 to `years`.
    ///
    /// A fractional holding period gets one extra point at `years` so the last
    /// point always matches [`GrowthInputs::evaluate`]. Periods longer than
    /// [`MAX_SCHEDULE_YEARS`] are rejected rather than expanded.
    pub fn schedule(&self) -> Result<Vec<GrowthPoint>, GrowthError> {
        self.validate()?;
        if self.years > MAX_SCHEDULE_YEARS {
            return Err(GrowthError::ScheduleTooLong {
                years: self.years,
                limit: MAX_SCHEDULE_YEARS,
            });
        }

        let whole_years = self.years.floor() as u64;
        let mut points = Vec::with_capacity(whole_years as usize + 2);
        for year in 0..=whole_years {
            points.push(self.point_at(year as f64)?);
        }
        if self.years.fract() > 0.0 {
            points.push(self.point_at(self.years)?);
        }

        Ok(points)
    }

    fn point_at(&self, year: f64) -> Result<GrowthPoint, GrowthError> {
        let at_year = GrowthInputs { years: year, ..*self };
        let result = CompoundGrowthCalculator::evaluate_inputs(&at_year)?;
        Ok(GrowthPoint {
            year,
            balance: result.final_balance,
        })
    }
}

impl GrowthResult {
    /// Final balance formatted for display, e.g. `6,848.48`
    pub fn formatted_balance(&self) -> String {
        format_amount(self.final_balance)
    }

    /// Profit formatted for display, e.g. `5,848.48`
    pub fn formatted_profit(&self) -> String {
        format_amount(self.profit)
    }
}

/// Future value of a principal under annual compounding.
///
/// Stateless: every call recomputes from its arguments.
pub struct CompoundGrowthCalculator;

impl CompoundGrowthCalculator {
    /// `final_balance = principal * (1 + rate/100)^years`, `profit = final_balance - principal`
    pub fn evaluate(
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> Result<GrowthResult, GrowthError> {
        Self::evaluate_inputs(&GrowthInputs::new(principal, annual_rate_percent, years))
    }

    /// Same as [`CompoundGrowthCalculator::evaluate`] over a value object
    pub fn evaluate_inputs(inputs: &GrowthInputs) -> Result<GrowthResult, GrowthError> {
        inputs.validate()?;

        // 0 * inf would be NaN; nothing invested means nothing grows
        if inputs.principal == 0.0 {
            return Ok(GrowthResult {
                final_balance: 0.0,
                profit: 0.0,
            });
        }

        let factor = inputs.growth_factor();
        let mut final_balance = inputs.principal * factor.powf(inputs.years);
        // factor^years can overflow on its own while the product still fits
        if final_balance.is_infinite() && factor > 0.0 {
            final_balance = (inputs.principal.ln() + inputs.years * factor.ln()).exp();
        }
        if !final_balance.is_finite() {
            return Err(GrowthError::Overflow(*inputs));
        }

        Ok(GrowthResult {
            final_balance,
            profit: final_balance - inputs.principal,
        })
    }
}

/// Free-function form of [`CompoundGrowthCalculator::evaluate`]
pub fn evaluate(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<GrowthResult, GrowthError> {
    CompoundGrowthCalculator::evaluate(principal, annual_rate_percent, years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_default_scenario() {
        let result = evaluate(1000.0, 8.0, 25.0).unwrap();
        assert!(approx_eq(result.final_balance, 6848.475196, 1e-5));
        assert!(approx_eq(result.profit, 5848.475196, 1e-5));
        assert_eq!(result.formatted_balance(), "6,848.48");
        assert_eq!(result.formatted_profit(), "5,848.48");
    }

    #[test]
    fn test_single_year() {
        let result = evaluate(1000.0, 8.0, 1.0).unwrap();
        assert!(approx_eq(result.final_balance, 1080.0, 1e-9));
        assert!(approx_eq(result.profit, 80.0, 1e-9));
        assert_eq!(result.formatted_balance(), "1,080.00");
        assert_eq!(result.formatted_profit(), "80.00");
    }

    #[test]
    fn test_zero_years_is_identity() {
        for rate in [0.0, 1.0, 8.0, 20.0, -50.0] {
            let result = evaluate(2500.0, rate, 0.0).unwrap();
            assert_eq!(result.final_balance, 2500.0);
            assert_eq!(result.profit, 0.0);
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        for years in [0.0, 1.0, 25.0, 50.0, 7.5] {
            let result = evaluate(1234.56, 0.0, years).unwrap();
            assert_eq!(result.final_balance, 1234.56);
            assert_eq!(result.profit, 0.0);
        }
    }

    #[test]
    fn test_zero_principal() {
        let result = evaluate(0.0, 20.0, 50.0).unwrap();
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.profit, 0.0);
    }

    #[test]
    fn test_total_loss_rate() {
        let result = evaluate(1000.0, -100.0, 3.0).unwrap();
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.profit, -1000.0);
    }

    #[test]
    fn test_rejects_negative_principal() {
        assert_eq!(
            evaluate(-1.0, 8.0, 25.0),
            Err(GrowthError::NegativePrincipal(-1.0))
        );
    }

    #[test]
    fn test_rejects_negative_years() {
        assert_eq!(
            evaluate(1000.0, 8.0, -2.0),
            Err(GrowthError::NegativeYears(-2.0))
        );
    }

    #[test]
    fn test_rejects_rate_below_total_loss() {
        assert_eq!(
            evaluate(1000.0, -150.0, 2.0),
            Err(GrowthError::RateBelowTotalLoss(-150.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        assert_eq!(
            evaluate(f64::NAN, 8.0, 25.0),
            Err(GrowthError::NonFinite {
                field: GrowthField::Principal
            })
        );
        assert_eq!(
            evaluate(1000.0, f64::INFINITY, 25.0),
            Err(GrowthError::NonFinite {
                field: GrowthField::AnnualRate
            })
        );
        assert_eq!(
            evaluate(1000.0, 8.0, f64::NEG_INFINITY),
            Err(GrowthError::NonFinite {
                field: GrowthField::Years
            })
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = evaluate(1e308, 20.0, 50.0).unwrap_err();
        assert!(matches!(err, GrowthError::Overflow(inputs) if inputs.principal == 1e308));
        assert!(err.to_string().contains("overflowed"));
    }

    #[test]
    fn test_tiny_principal_survives_large_power() {
        // 1.08^10000 overflows but 1e-300 times it is about 1.7e34
        let result = evaluate(1e-300, 8.0, 10_000.0).unwrap();
        let expected_log10 = -300.0 + 10_000.0 * 1.08_f64.log10();
        assert!(approx_eq(result.final_balance.log10(), expected_log10, 1e-6));
        assert!(result.profit > 0.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GrowthError::NegativePrincipal(-5.0).to_string(),
            "principal cannot be negative (got -5)"
        );
        assert_eq!(
            GrowthError::NonFinite {
                field: GrowthField::AnnualRate
            }
            .to_string(),
            "annual rate must be a finite number"
        );
    }

    #[test]
    fn test_schedule_whole_years() {
        let inputs = GrowthInputs::new(1000.0, 8.0, 25.0);
        let schedule = inputs.schedule().unwrap();

        assert_eq!(schedule.len(), 26);
        assert_eq!(schedule[0], GrowthPoint { year: 0.0, balance: 1000.0 });
        assert!(approx_eq(schedule[1].balance, 1080.0, 1e-9));

        let last = schedule.last().unwrap();
        assert_eq!(last.year, 25.0);
        assert_eq!(last.balance, inputs.evaluate().unwrap().final_balance);
    }

    #[test]
    fn test_schedule_fractional_tail() {
        let inputs = GrowthInputs::new(1000.0, 10.0, 2.5);
        let schedule = inputs.schedule().unwrap();

        let years: Vec<f64> = schedule.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0.0, 1.0, 2.0, 2.5]);
        assert_eq!(
            schedule[3].balance,
            inputs.evaluate().unwrap().final_balance
        );
    }

    #[test]
    fn test_schedule_propagates_errors() {
        let inputs = GrowthInputs::new(-10.0, 8.0, 5.0);
        assert_eq!(inputs.schedule(), Err(GrowthError::NegativePrincipal(-10.0)));
    }

    #[test]
    fn test_schedule_rejects_huge_holding_periods() {
        for years in [1e18, 1e20, MAX_SCHEDULE_YEARS + 1.0] {
            let inputs = GrowthInputs::new(1000.0, 0.0, years);
            assert!(inputs.evaluate().is_ok());
            assert_eq!(
                inputs.schedule(),
                Err(GrowthError::ScheduleTooLong {
                    years,
                    limit: MAX_SCHEDULE_YEARS
                })
            );
        }
    }

    #[test]
    fn test_schedule_at_limit() {
        let schedule = GrowthInputs::new(1000.0, 0.0, MAX_SCHEDULE_YEARS)
            .schedule()
            .unwrap();
        assert_eq!(schedule.len(), MAX_SCHEDULE_YEARS as usize + 1);
    }

    #[test]
    fn test_inputs_serialize_with_snake_case_fields() {
        let json = serde_json::to_value(GrowthInputs::new(1000.0, 8.0, 25.0)).unwrap();
        assert_eq!(json["principal"], 1000.0);
        assert_eq!(json["annual_rate_percent"], 8.0);
        assert_eq!(json["years"], 25.0);
    }
}
