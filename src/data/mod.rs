//! Column loader for whitespace-delimited distance files
//!
//! Rows are split on whitespace. Everything from the `#!` comment marker to
//! the end of a line is ignored, so lines starting with the marker never
//! contribute data. Blank lines are skipped.

use crate::{
    defaults::COMMENT_MARKER,
    error::{AppError, Result},
    models::Sample,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load one column of a data file into a [`Sample`]
pub fn load_sample<P: AsRef<Path>>(path: P, column: usize) -> Result<Sample> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Cannot open '{}': {}", path.display(), e)))?;

    let values = read_column(BufReader::new(file), column, &path.display().to_string())?;
    Sample::new(path, column, values)
}

/// Read the requested column from every data row of `reader`
///
/// `source` only names the input in error messages.
pub fn read_column<R: BufRead>(reader: R, column: usize, source: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| {
            AppError::io(format!("Failed reading '{}' at line {}: {}", source, line_number, e))
        })?;

        let data = strip_comment(&line);
        if data.trim().is_empty() {
            continue;
        }

        let field = data.split_whitespace().nth(column).ok_or_else(|| {
            AppError::parse(format!(
                "'{}' line {}: row has {} column(s), column index {} requested",
                source,
                line_number,
                data.split_whitespace().count(),
                column
            ))
        })?;

        values.push(parse_value(field, source, line_number)?);
    }

    Ok(values)
}

/// Drop everything from the comment marker onwards
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(position) => &line[..position],
        None => line,
    }
}

fn parse_value(field: &str, source: &str, line_number: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| {
        AppError::parse(format!(
            "'{}' line {}: '{}' is not a number",
            source, line_number, field
        ))
    })?;

    if !value.is_finite() {
        return Err(AppError::parse(format!(
            "'{}' line {}: non-finite value '{}'",
            source, line_number, field
        )));
    }

    Ok(value)
}
