//! Numeric CSV input.
//!
//! Input files are headerless. Cells are trimmed; blank cells are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use quant_core::PriceSeries;
use tracing::debug;

use crate::{CliError, Result};

/// Parses every record of `reader` into a row of numbers.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in csv.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(column, cell)| {
                cell.parse::<f64>().map_err(|_| {
                    CliError::invalid_input(format!(
                        "row {}, column {}: '{}' is not a number",
                        line + 1,
                        column + 1,
                        cell
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Flattens all rows into one series in reading order.
///
/// Accepts one value per line as well as comma-separated lines.
pub fn parse_series<R: Read>(reader: R) -> Result<Vec<f64>> {
    Ok(parse_rows(reader)?.into_iter().flatten().collect())
}

/// Reads the file's columns as separate series.
///
/// Short rows leave their trailing columns shorter, so ragged input surfaces
/// as series of different lengths.
pub fn parse_columns<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let rows = parse_rows(reader)?;
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for row in &rows {
        for (column, &value) in columns.iter_mut().zip(row) {
            column.push(value);
        }
    }
    Ok(columns)
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

/// Reads a single series from `path`.
pub fn read_series(path: &Path) -> Result<Vec<f64>> {
    let series = parse_series(open(path)?)?;
    debug!(path = %path.display(), points = series.len(), "loaded series");
    Ok(series)
}

/// Reads a validated price series from `path`.
///
/// Fails with `InvalidParameter` on an empty file or a non-positive price.
pub fn read_prices(path: &Path) -> Result<PriceSeries> {
    Ok(PriceSeries::new(read_series(path)?)?)
}

/// Reads one series per column from `path`.
pub fn read_columns(path: &Path) -> Result<Vec<Vec<f64>>> {
    let columns = parse_columns(open(path)?)?;
    debug!(path = %path.display(), columns = columns.len(), "loaded columns");
    Ok(columns)
}
