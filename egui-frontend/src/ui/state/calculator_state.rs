//! # Calculator State Module
//!
//! Widget state behind the sidebar calculator.
//!
//! ## Responsibilities:
//! - Holding the three raw widget values (principal, rate, years)
//! - Clamping them into the configured ranges before each evaluation
//! - Restoring the configured defaults
//!
//! Nothing is cached: `result()` runs the full formula on every call.

use log::{debug, warn};
use shared::{GrowthError, GrowthInputs, GrowthPoint, GrowthResult, InputRanges};

/// Sidebar calculator widget values
#[derive(Debug, Clone)]
pub struct CalculatorState {
    /// Starting investment bound to the number input
    pub principal: f64,

    /// Expected annual return (%) bound to the rate slider
    pub annual_rate_percent: f64,

    /// Holding period bound to the years slider
    pub years: f64,

    /// Widget ranges from configuration
    pub ranges: InputRanges,
}

impl CalculatorState {
    /// Create calculator state starting at the configured defaults
    pub fn new(ranges: InputRanges) -> Self {
        let defaults = ranges.default_inputs();
        Self {
            principal: defaults.principal,
            annual_rate_percent: defaults.annual_rate_percent,
            years: defaults.years,
            ranges,
        }
    }

    /// Current widget values as a value object, clamped into range
    pub fn inputs(&self) -> GrowthInputs {
        self.ranges.clamp_inputs(&GrowthInputs::new(
            self.principal,
            self.annual_rate_percent,
            self.years,
        ))
    }

    /// Evaluate the formula for the current inputs
    pub fn result(&self) -> Result<GrowthResult, GrowthError> {
        self.inputs().evaluate()
    }

    /// Year-by-year balances for the growth chart
    pub fn schedule(&self) -> Result<Vec<GrowthPoint>, GrowthError> {
        self.inputs().schedule()
    }

    /// Write clamped values back so the widgets never show out-of-range numbers
    pub fn clamp_in_place(&mut self) {
        let clamped = self.inputs();
        self.principal = clamped.principal;
        self.annual_rate_percent = clamped.annual_rate_percent;
        self.years = clamped.years;
    }

    /// Clamp freshly edited widget values and evaluate them once.
    ///
    /// Called only when a widget reports a change, so a rejected input is
    /// logged once rather than on every frame.
    pub fn apply_widget_changes(&mut self) -> Result<GrowthResult, GrowthError> {
        self.clamp_in_place();
        let inputs = self.inputs();
        let result = inputs.evaluate();
        match &result {
            Ok(result) => debug!("🧮 Recomputed {:?} -> {:?}", inputs, result),
            Err(e) => warn!("Calculator rejected {:?}: {}", inputs, e),
        }
        result
    }

    /// Restore the configured defaults
    pub fn reset(&mut self) {
        let defaults = self.ranges.default_inputs();
        self.principal = defaults.principal;
        self.annual_rate_percent = defaults.annual_rate_percent;
        self.years = defaults.years;
        debug!("🔁 Calculator reset to {:?}", defaults);
    }

    /// Whether the widgets currently show the defaults
    pub fn is_at_defaults(&self) -> bool {
        self.inputs() == self.ranges.default_inputs()
    }
}
