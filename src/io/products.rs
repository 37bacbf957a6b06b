// src/io/products.rs

use crate::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One product line of the sales plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductLine {
    #[serde(default)]
    pub product: Option<String>,
    pub units: f64,
    pub price: f64,
}

/// Reads product lines from a CSV file with `product,units,price` headers.
/// The `product` column is optional.
pub fn read_product_lines(file_path: &Path) -> Result<Vec<ProductLine>> {
    let reader = csv::Reader::from_path(file_path)?;
    collect_lines(reader)
}

pub fn read_product_lines_from<R: Read>(source: R) -> Result<Vec<ProductLine>> {
    collect_lines(csv::Reader::from_reader(source))
}

fn collect_lines<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<ProductLine>> {
    let mut lines = Vec::new();
    for record in reader.deserialize() {
        lines.push(record?);
    }
    Ok(lines)
}

/// Splits product lines into the parallel `(units, prices)` sequences.
pub fn split_units_and_prices(lines: &[ProductLine]) -> (Vec<f64>, Vec<f64>) {
    lines.iter().map(|line| (line.units, line.price)).unzip()
}
