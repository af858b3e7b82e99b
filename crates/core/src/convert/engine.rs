//! Conversion engine entry points.
//!
//! The engine is a pure function of its inputs: no I/O, no logging and no
//! shared mutable state, so it can be called from any thread.

use convertly_shared::Category;
use rust_decimal::Decimal;

use super::error::ConversionError;
use super::format::try_format;
use super::formula::Formula;
use super::input::parse_quantity;
use super::outcome::ConversionOutcome;

/// A single conversion request as supplied by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Category identifier, e.g. `"weight"`.
    pub category: String,
    /// Source unit identifier.
    pub from_unit: String,
    /// Target unit identifier.
    pub to_unit: String,
    /// Raw numeric text.
    pub raw_input: String,
}

impl ConversionRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        raw_input: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            raw_input: raw_input.into(),
        }
    }

    /// Consumes the request and returns the formatted result.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] when any input is invalid.
    pub fn execute(self) -> Result<String, ConversionError> {
        convert(&self.category, &self.from_unit, &self.to_unit, &self.raw_input)
    }

    /// Consumes the request and returns the boundary outcome.
    #[must_use]
    pub fn outcome(self) -> ConversionOutcome {
        self.execute().into()
    }
}

/// Converts `raw_input` from `from_unit` to `to_unit` within `category`.
///
/// The result is rendered with exactly two fraction digits.
///
/// # Errors
///
/// Returns a [`ConversionError`] when the input is empty or not a number, the
/// category is unknown, either unit is unknown, or the result overflows.
///
/// # Example
///
/// ```
/// use convertly_core::convert::convert;
///
/// assert_eq!(convert("weight", "kg", "lb", "10").unwrap(), "22.05");
/// assert!(convert("weight", "kg", "stone", "10").is_err());
/// ```
pub fn convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    raw_input: &str,
) -> Result<String, ConversionError> {
    convert_exact(category, from_unit, to_unit, raw_input).and_then(try_format)
}

/// Same as [`convert`] but returns the unrounded value.
///
/// Checks run in order: raw input, category, source unit, target unit.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_exact(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    raw_input: &str,
) -> Result<Decimal, ConversionError> {
    let value = parse_quantity(raw_input)?;
    let category: Category = category
        .parse()
        .map_err(|_| ConversionError::UnknownCategory(category.to_string()))?;

    Formula::for_category(category).apply(category, from_unit, to_unit, value)
}
