// src/io/reporting.rs

use crate::error::Result;
use crate::model::inputs::Projection;
use crate::model::results::ResultsTable;
use crate::simulation::summary::IntervalBounds;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the results table to a CSV file with `Sales,COS` headers.
///
/// # Arguments
/// * `file_path` - Where to save the file (e.g., "results/forecast.csv").
/// * `table` - The table returned by the simulation engine.
pub fn write_results_csv(file_path: &Path, table: &ResultsTable) -> Result<()> {
    let mut wtr = csv::Writer::from_path(file_path)?;
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!(rows = table.len(), path = %file_path.display(), "exported results table");
    Ok(())
}

/// Formats a value with two decimals and comma thousands separators.
///
/// `1234567.891` becomes `"1,234,567.89"`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = whole.bytes().all(|b| b == b'0') && cents.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

/// Prints the four confidence bounds, one per line.
pub fn write_bounds_report<W: Write>(out: &mut W, bounds: &IntervalBounds) -> Result<()> {
    writeln!(out, "Lower Limit Sales: {}", format_thousands(bounds.sales.lower))?;
    writeln!(out, "Upper Limit Sales: {}", format_thousands(bounds.sales.upper))?;
    writeln!(
        out,
        "Lower Limit COS: {}",
        format_thousands(bounds.cost_of_sales.lower)
    )?;
    writeln!(
        out,
        "Upper Limit COS: {}",
        format_thousands(bounds.cost_of_sales.upper)
    )?;
    Ok(())
}

/// Prints the deterministic projection.
pub fn write_projection_report<W: Write>(out: &mut W, projection: &Projection) -> Result<()> {
    writeln!(out, "Projected sales: {}", format_thousands(projection.sales))?;
    writeln!(
        out,
        "Projected COS: {}",
        format_thousands(projection.cost_of_sales)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::results::RunResult;
    use crate::simulation::summary::confidence_bounds;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(1_234_567.891), "1,234,567.89");
        assert_eq!(format_thousands(999.5), "999.50");
        assert_eq!(format_thousands(1000.0), "1,000.00");
        assert_eq!(format_thousands(0.0), "0.00");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(format_thousands(-12_345.678), "-12,345.68");
        assert_eq!(format_thousands(-0.001), "0.00");
    }

    #[test]
    fn bounds_report_lists_all_four_limits() {
        let table: ResultsTable = vec![RunResult {
            sales: 1500.0,
            cost_of_sales: 600.0,
        }]
        .into();
        let bounds = confidence_bounds(&table).unwrap();

        let mut out = Vec::new();
        write_bounds_report(&mut out, &bounds).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Lower Limit Sales: 1,500.00\n\
             Upper Limit Sales: 1,500.00\n\
             Lower Limit COS: 600.00\n\
             Upper Limit COS: 600.00\n"
        );
    }

    #[test]
    fn projection_report() {
        let projection = Projection {
            sales: 25_000.0,
            cost_of_sales: 10_000.0,
        };
        let mut out = Vec::new();
        write_projection_report(&mut out, &projection).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Projected sales: 25,000.00\nProjected COS: 10,000.00\n"
        );
    }

    #[test]
    fn csv_export_has_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.csv");
        let table: ResultsTable = vec![
            RunResult {
                sales: 50.25,
                cost_of_sales: 20.1,
            },
            RunResult {
                sales: 49.0,
                cost_of_sales: 19.6,
            },
        ]
        .into();

        write_results_csv(&path, &table).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Sales,COS\n50.25,20.1\n49.0,19.6\n");
    }
}
