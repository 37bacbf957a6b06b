// src/simulation/summary.rs

use crate::error::{ForecastError, Result};
use crate::model::results::ResultsTable;
use serde::Serialize;

/// Mean +/- two sample standard deviations of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnBounds {
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ColumnBounds {
    /// Summarizes a non-empty column.
    ///
    /// A singleton column has a standard deviation of 0. A column of identical
    /// values collapses to `lower == upper == value`.
    pub fn from_column(values: &[f64]) -> Result<Self> {
        let first = *values.first().ok_or(ForecastError::EmptyTable)?;

        let (mean, std_dev) = if values.iter().all(|&v| v == first) {
            (first, 0.0)
        } else {
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            (mean, variance.sqrt())
        };

        Ok(Self {
            mean,
            std_dev,
            lower: mean - 2.0 * std_dev,
            upper: mean + 2.0 * std_dev,
        })
    }
}

/// Approximate 95% interval for projected sales and cost of sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalBounds {
    pub sales: ColumnBounds,
    pub cost_of_sales: ColumnBounds,
}

impl IntervalBounds {
    /// `(sales lower, sales upper, COS lower, COS upper)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.sales.lower,
            self.sales.upper,
            self.cost_of_sales.lower,
            self.cost_of_sales.upper,
        )
    }
}

/// Confidence bounds for both columns of a results table.
pub fn confidence_bounds(table: &ResultsTable) -> Result<IntervalBounds> {
    if table.is_empty() {
        return Err(ForecastError::EmptyTable);
    }
    Ok(IntervalBounds {
        sales: ColumnBounds::from_column(&table.sales())?,
        cost_of_sales: ColumnBounds::from_column(&table.cost_of_sales())?,
    })
}
