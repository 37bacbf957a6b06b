// src/io/histogram.rs

use crate::model::results::ResultsTable;
use crate::strategy::traits::ResultsObserver;
use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

/// Equal-width bins over a column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `(bin_start, count)` in ascending order.
    pub bins: Vec<(f64, usize)>,
    pub bin_width: f64,
}

impl Histogram {
    /// Bins `values` into `num_bins` buckets; the last bucket is closed on the right
    /// so the maximum is counted. A constant column lands in a single bucket.
    pub fn from_values(values: &[f64], num_bins: usize) -> Self {
        if values.is_empty() || num_bins == 0 {
            return Self {
                bins: Vec::new(),
                bin_width: 0.0,
            };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max == min {
            return Self {
                bins: vec![(min, values.len())],
                bin_width: 0.0,
            };
        }

        let bin_width = (max - min) / num_bins as f64;
        let mut counts = vec![0usize; num_bins];
        for &value in values {
            let idx = (((value - min) / bin_width) as usize).min(num_bins - 1);
            counts[idx] += 1;
        }

        Self {
            bins: counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| (min + i as f64 * bin_width, count))
                .collect(),
            bin_width,
        }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|(_, count)| count).sum()
    }

    /// Text bar chart, one line per bin, bars scaled to `width` characters.
    pub fn render(&self, title: &str, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", title);

        let peak = self.bins.iter().map(|(_, count)| *count).max().unwrap_or(0);
        for &(start, count) in &self.bins {
            let bar = if peak == 0 {
                0
            } else {
                (count * width + peak - 1) / peak
            };
            let _ = writeln!(
                out,
                "{:>14.2} | {:<width$} {}",
                start,
                "#".repeat(bar),
                count,
                width = width
            );
        }
        out
    }
}

/// Prints sales and cost-of-sales histograms once a simulation finishes.
#[derive(Debug, Clone)]
pub struct HistogramObserver {
    pub num_bins: usize,
    pub width: usize,
}

impl HistogramObserver {
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            width: 40,
        }
    }

    pub fn render(&self, table: &ResultsTable) -> String {
        let sales = Histogram::from_values(&table.sales(), self.num_bins);
        let cos = Histogram::from_values(&table.cost_of_sales(), self.num_bins);
        format!(
            "{}\n{}",
            sales.render("Sales Distribution", self.width),
            cos.render("Cost of Sales Distribution", self.width)
        )
    }
}

impl ResultsObserver for HistogramObserver {
    fn observe(&mut self, table: &ResultsTable) {
        let chart = self.render(table);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = handle.write_all(chart.as_bytes()) {
            warn!(error = %e, "could not print histograms");
        }
    }
}
