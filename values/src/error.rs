//! FILENAME: values/src/error.rs

use thiserror::Error;

/// Errors produced by the tabular data model and the utility functions
/// built on top of it. Every fallible operation returns one of these;
/// no function substitutes a sentinel value for a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// A row, column, or positional index fell outside the valid range.
    /// `axis` names which index was bad ("row", "column", or "index").
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DataError {
    /// Shorthand for a bad row index.
    pub fn bad_row(index: usize, len: usize) -> Self {
        DataError::IndexOutOfRange {
            axis: "row",
            index,
            len,
        }
    }

    /// Shorthand for a bad column index.
    pub fn bad_column(index: usize, len: usize) -> Self {
        DataError::IndexOutOfRange {
            axis: "column",
            index,
            len,
        }
    }

    /// Shorthand for a bad positional index into an ordered list.
    pub fn bad_index(index: usize, len: usize) -> Self {
        DataError::IndexOutOfRange {
            axis: "index",
            index,
            len,
        }
    }
}
