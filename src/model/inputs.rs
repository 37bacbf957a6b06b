// src/model/inputs.rs

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Largest volatility accepted; beyond it the lower bound of the range drops below zero.
pub const MAX_STD_DEV: f64 = 0.5;

/// The caller-supplied scalars behind a forecast.
///
/// `units` and `prices` are parallel sequences, one entry per product.
/// `std_dev` is the historical volatility as a fraction of the mean (0.1 = 10%),
/// `cost_ratio` converts a sales value into cost of sales.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInputs {
    pub units: Vec<f64>,
    pub prices: Vec<f64>,
    pub std_dev: f64,
    pub cost_ratio: f64,
}

impl ForecastInputs {
    pub fn new(units: Vec<f64>, prices: Vec<f64>, std_dev: f64, cost_ratio: f64) -> Self {
        Self {
            units,
            prices,
            std_dev,
            cost_ratio,
        }
    }

    /// Rejects anything the engine cannot sample from.
    pub fn validate(&self) -> Result<()> {
        if self.units.is_empty() {
            return Err(ForecastError::invalid("at least one product is required"));
        }
        if self.units.len() != self.prices.len() {
            return Err(ForecastError::invalid(format!(
                "units has {} entries but prices has {}",
                self.units.len(),
                self.prices.len()
            )));
        }
        check_non_negative("units", &self.units)?;
        check_non_negative("prices", &self.prices)?;

        if !self.std_dev.is_finite() || self.std_dev <= 0.0 || self.std_dev > MAX_STD_DEV {
            return Err(ForecastError::invalid(format!(
                "std_dev must be a fraction in (0, {}], got {}",
                MAX_STD_DEV, self.std_dev
            )));
        }
        if !self.cost_ratio.is_finite() || self.cost_ratio < 0.0 {
            return Err(ForecastError::invalid(format!(
                "cost_ratio must be non-negative, got {}",
                self.cost_ratio
            )));
        }
        Ok(())
    }

    /// Sum over products of units x unit price.
    pub fn baseline_target(&self) -> f64 {
        self.units
            .iter()
            .zip(&self.prices)
            .map(|(units, price)| units * price)
            .sum()
    }

    /// Integer range within two standard deviations of the baseline.
    pub fn sampling_range(&self) -> Result<SamplingRange> {
        SamplingRange::around(self.baseline_target(), self.std_dev)
    }

    /// The deterministic forecast, before any randomization.
    pub fn projection(&self) -> Projection {
        let sales = self.baseline_target();
        Projection {
            sales,
            cost_of_sales: sales * self.cost_ratio,
        }
    }
}

fn check_non_negative(name: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite() || *v < 0.0) {
        Some(idx) => Err(ForecastError::invalid(format!(
            "{}[{}] must be a finite non-negative number, got {}",
            name, idx, values[idx]
        ))),
        None => Ok(()),
    }
}

/// Inclusive integer bounds that synthetic sales values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplingRange {
    pub start: i64,
    pub end: i64,
}

impl SamplingRange {
    /// `[floor(baseline - 2sd*baseline), floor(baseline + 2sd*baseline)]`
    ///
    /// Fails with `InvalidInput` when either bound does not fit in an `i64`.
    pub fn around(baseline: f64, std_dev: f64) -> Result<Self> {
        let spread = 2.0 * std_dev * baseline;
        Ok(Self {
            start: bound_to_i64(baseline - spread)?,
            end: bound_to_i64(baseline + spread)?,
        })
    }

    /// Number of distinct integers in the range.
    pub fn len(&self) -> u64 {
        let width = self.end as i128 - self.start as i128;
        if width < 0 {
            0
        } else {
            u64::try_from(width + 1).unwrap_or(u64::MAX)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn bound_to_i64(value: f64) -> Result<i64> {
    let floored = value.floor();
    // i64::MAX as f64 rounds up to 2^63, so the upper check is exclusive
    if floored.is_finite() && floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
        Ok(floored as i64)
    } else {
        Err(ForecastError::invalid(format!(
            "sampling bound {} is outside the supported integer range",
            value
        )))
    }
}

/// Projected sales and cost of sales straight from units x price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub sales: f64,
    pub cost_of_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ForecastInputs {
        ForecastInputs::new(vec![10.0, 4.0], vec![5.0, 2.5], 0.1, 0.4)
    }

    #[test]
    fn baseline_is_sum_of_products() {
        assert_eq!(inputs().baseline_target(), 60.0);
    }

    #[test]
    fn sampling_range_spans_two_std_devs() {
        let range = SamplingRange::around(50.0, 0.1).unwrap();
        assert_eq!(range, SamplingRange { start: 40, end: 60 });
        assert_eq!(range.len(), 21);
    }

    #[test]
    fn sampling_range_floors_fractional_bounds() {
        let range = SamplingRange::around(33.0, 0.05).unwrap();
        // 33 -/+ 3.3
        assert_eq!(range, SamplingRange { start: 29, end: 36 });
    }

    #[test]
    fn zero_baseline_collapses_to_single_value() {
        let range = SamplingRange::around(0.0, 0.2).unwrap();
        assert_eq!(range.len(), 1);
        assert!(!range.is_empty());
    }

    #[test]
    fn bounds_past_i64_are_rejected() {
        assert!(matches!(
            SamplingRange::around(1e18, 5.0),
            Err(ForecastError::InvalidInput { .. })
        ));
        assert!(SamplingRange::around(1e19, 0.1).is_err());
        assert!(SamplingRange::around(f64::INFINITY, 0.1).is_err());

        let huge = ForecastInputs::new(vec![1e18], vec![10.0], 0.1, 0.4);
        assert!(huge.sampling_range().is_err());
    }

    #[test]
    fn widest_range_length_does_not_overflow() {
        let full = SamplingRange {
            start: i64::MIN,
            end: i64::MAX,
        };
        assert_eq!(full.len(), u64::MAX);

        let reversed = SamplingRange { start: 5, end: 4 };
        assert!(reversed.is_empty());
    }

    #[test]
    fn half_volatility_keeps_range_non_negative() {
        let inputs = ForecastInputs::new(vec![10.0], vec![5.0], MAX_STD_DEV, 0.4);
        assert!(inputs.validate().is_ok());
        assert_eq!(
            inputs.sampling_range().unwrap(),
            SamplingRange { start: 0, end: 100 }
        );
    }

    #[test]
    fn volatility_above_half_is_rejected() {
        let inputs = ForecastInputs::new(vec![10.0], vec![5.0], 0.6, 0.4);
        assert!(matches!(
            inputs.validate(),
            Err(ForecastError::InvalidInput { .. })
        ));
    }

    #[test]
    fn projection_applies_cost_ratio() {
        let projection = inputs().projection();
        assert_eq!(projection.sales, 60.0);
        assert!((projection.cost_of_sales - 24.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let bad = ForecastInputs::new(vec![1.0, 2.0], vec![3.0], 0.1, 0.4);
        assert!(matches!(
            bad.validate(),
            Err(ForecastError::InvalidInput { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_values() {
        let negative = ForecastInputs::new(vec![-1.0], vec![3.0], 0.1, 0.4);
        assert!(negative.validate().is_err());

        let nan_price = ForecastInputs::new(vec![1.0], vec![f64::NAN], 0.1, 0.4);
        assert!(nan_price.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_ratios() {
        assert!(ForecastInputs::new(vec![1.0], vec![1.0], 0.0, 0.4)
            .validate()
            .is_err());
        assert!(ForecastInputs::new(vec![1.0], vec![1.0], 0.1, -0.4)
            .validate()
            .is_err());
        assert!(ForecastInputs::new(vec![], vec![], 0.1, 0.4)
            .validate()
            .is_err());
        assert!(inputs().validate().is_ok());
    }
}
