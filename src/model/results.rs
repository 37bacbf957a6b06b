// src/model/results.rs

use serde::{Deserialize, Serialize};

/// Mean sales and mean cost of sales for one simulation run, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "COS")]
    pub cost_of_sales: f64,
}

/// One row per simulation run, in run order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    rows: Vec<RunResult>,
}

impl ResultsTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: RunResult) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RunResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sales(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.sales).collect()
    }

    pub fn cost_of_sales(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.cost_of_sales).collect()
    }
}

impl From<Vec<RunResult>> for ResultsTable {
    fn from(rows: Vec<RunResult>) -> Self {
        Self { rows }
    }
}

impl FromIterator<RunResult> for ResultsTable {
    fn from_iter<I: IntoIterator<Item = RunResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
