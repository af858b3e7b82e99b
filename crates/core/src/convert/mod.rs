//! Unit conversion engine.
//!
//! Converts a quantity between two units of one category. Linear categories
//! use rate tables, temperature is bridged through Celsius, and every
//! malformed request is classified as invalid input rather than panicking.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod format;
pub mod formula;
pub mod input;
pub mod outcome;
pub mod table;
pub mod unit;

#[cfg(test)]
mod props;

pub use catalog::{CategoryInfo, catalog, categories, describe, units};
pub use engine::{ConversionRequest, convert, convert_exact};
pub use error::{ConversionError, ErrorKind};
pub use format::{RESULT_DECIMAL_PLACES, try_format};
pub use formula::{Formula, FormulaKind};
pub use input::parse_quantity;
pub use outcome::ConversionOutcome;
pub use unit::{BridgeUnit, RateUnit, ScaleFn};
