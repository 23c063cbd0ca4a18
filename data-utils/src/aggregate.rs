//! FILENAME: data-utils/src/aggregate.rs
//! Aggregation over tabular views and keyed value lists.
//!
//! Column/row totals sum across one axis of a `Values2D` view; empty cells
//! contribute zero. Cumulative percentages turn a keyed value list into the
//! running-sum-over-total form used for Pareto-style charts.

use values::{DataError, KeyedValues, Values2D};

/// Sums the values in one column of the view.
///
/// Empty cells contribute 0. The column index is validated before any cell
/// is read, so a failure never leaves the caller with a partial sum.
pub fn calculate_column_total(data: &dyn Values2D, column: usize) -> Result<f64, DataError> {
    let cols = data.column_count();
    if column >= cols {
        return Err(DataError::bad_column(column, cols));
    }

    let mut total = 0.0;
    for row in 0..data.row_count() {
        if let Some(value) = data.value_at(row, column)? {
            total += value;
        }
    }
    Ok(total)
}

/// Sums the values in one row of the view. Symmetric to
/// [`calculate_column_total`].
pub fn calculate_row_total(data: &dyn Values2D, row: usize) -> Result<f64, DataError> {
    let rows = data.row_count();
    if row >= rows {
        return Err(DataError::bad_row(row, rows));
    }

    let mut total = 0.0;
    for column in 0..data.column_count() {
        if let Some(value) = data.value_at(row, column)? {
            total += value;
        }
    }
    Ok(total)
}

/// Maps each entry of the input to its cumulative percentage: the running
/// sum of values through that entry, divided by the total of all values.
///
/// Keys and their order are preserved. Null values count as 0 toward both
/// the running sum and the total. For non-negative inputs the output is
/// non-decreasing, bounded in [0, 1], and ends at exactly 1.0.
///
/// A non-empty input whose total is 0 fails with `InvalidState` rather
/// than producing NaN entries. An empty input yields an empty list.
pub fn get_cumulative_percentages(data: &KeyedValues) -> Result<KeyedValues, DataError> {
    let mut result = KeyedValues::new();
    if data.is_empty() {
        return Ok(result);
    }

    let total: f64 = data.iter().map(|(_, v)| v.unwrap_or(0.0)).sum();
    if total == 0.0 {
        return Err(DataError::InvalidState(
            "cumulative percentages are undefined for a zero total".to_string(),
        ));
    }

    let mut running = 0.0;
    for (key, value) in data.iter() {
        running += value.unwrap_or(0.0);
        result.add_value(key, Some(running / total))?;
    }
    Ok(result)
}
