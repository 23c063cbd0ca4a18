//! FILENAME: data-utils/src/lib.rs
//! Stateless utility functions over the tabular data model.
//!
//! This crate provides the aggregation and conversion helpers as a
//! standalone module, separate from the data model itself. It depends on
//! `values` only for shared types (Values2D, KeyedValues, DataError).
//!
//! Layers:
//! - `aggregate`: column/row totals and cumulative percentages
//! - `convert`: primitive-to-nullable numeric sequence conversion

pub mod aggregate;
pub mod convert;

pub use aggregate::{calculate_column_total, calculate_row_total, get_cumulative_percentages};
pub use convert::{create_number_array, create_number_array_2d};
