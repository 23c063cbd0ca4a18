//! FILENAME: values/src/lib.rs
//! PURPOSE: Main library entry point for the tabular data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod error;
pub mod keyed;
pub mod values2d;

// Re-export commonly used types at the crate root
pub use error::DataError;
pub use keyed::KeyedValues;
pub use values2d::{ArrayValues2D, Values2D};
