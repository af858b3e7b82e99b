//! Formula dispatch.
//!
//! Each category maps to exactly one [`Formula`] variant, which carries the
//! unit table of the matching shape. Adding a category means adding an arm to
//! [`Formula::for_category`]; the compiler checks the match is exhaustive.

use convertly_shared::Category;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::ConversionError;
use super::table;
use super::unit::{BridgeUnit, RateUnit, find_bridge, find_rate};

/// Conversion formula of a category together with its units.
#[derive(Debug, Clone, Copy)]
pub enum Formula {
    /// `value * (rate[to] / rate[from])`.
    Ratio(&'static [RateUnit]),
    /// `(value / rate[from]) * rate[to]`, rates relative to a base currency.
    InvertedRatio(&'static [RateUnit]),
    /// `from_celsius[to](to_celsius[from](value))`.
    Bridge(&'static [BridgeUnit]),
}

/// Formula shape without its table, for enumeration and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaKind {
    /// Plain ratio of rates.
    Ratio,
    /// Divide by the source rate, multiply by the target rate.
    InvertedRatio,
    /// Two-step conversion through Celsius.
    Bridge,
}

impl std::fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio => write!(f, "ratio"),
            Self::InvertedRatio => write!(f, "inverted_ratio"),
            Self::Bridge => write!(f, "bridge"),
        }
    }
}

impl Formula {
    /// Returns the formula and unit table for a category.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Weight => Self::Ratio(table::WEIGHT),
            Category::Length => Self::Ratio(table::LENGTH),
            Category::Area => Self::Ratio(table::AREA),
            Category::Currency => Self::InvertedRatio(table::CURRENCY),
            Category::Temperature => Self::Bridge(table::TEMPERATURE),
        }
    }

    /// Returns the formula shape.
    #[must_use]
    pub const fn kind(&self) -> FormulaKind {
        match self {
            Self::Ratio(_) => FormulaKind::Ratio,
            Self::InvertedRatio(_) => FormulaKind::InvertedRatio,
            Self::Bridge(_) => FormulaKind::Bridge,
        }
    }

    /// Returns the unit identifiers in table order.
    #[must_use]
    pub fn unit_ids(&self) -> Vec<&'static str> {
        match *self {
            Self::Ratio(units) | Self::InvertedRatio(units) => {
                units.iter().map(|unit| unit.id).collect()
            }
            Self::Bridge(units) => units.iter().map(|unit| unit.id).collect(),
        }
    }

    /// Returns true if `id` names a unit of this table.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        match *self {
            Self::Ratio(units) | Self::InvertedRatio(units) => find_rate(units, id).is_some(),
            Self::Bridge(units) => find_bridge(units, id).is_some(),
        }
    }

    /// Converts `value` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if either unit is missing from the table (`from`
    /// is checked first) and `Overflow` if the arithmetic leaves the decimal
    /// range.
    pub fn apply(
        &self,
        category: Category,
        from: &str,
        to: &str,
        value: Decimal,
    ) -> Result<Decimal, ConversionError> {
        let unknown = |unit: &str| ConversionError::UnknownUnit {
            category,
            unit: unit.to_string(),
        };

        let converted = match *self {
            Self::Ratio(units) => {
                let from = find_rate(units, from).ok_or_else(|| unknown(from))?;
                let to = find_rate(units, to).ok_or_else(|| unknown(to))?;
                to.rate
                    .checked_div(from.rate)
                    .and_then(|factor| value.checked_mul(factor))
            }
            Self::InvertedRatio(units) => {
                let from = find_rate(units, from).ok_or_else(|| unknown(from))?;
                let to = find_rate(units, to).ok_or_else(|| unknown(to))?;
                value
                    .checked_div(from.rate)
                    .and_then(|base| base.checked_mul(to.rate))
            }
            Self::Bridge(units) => {
                let from = find_bridge(units, from).ok_or_else(|| unknown(from))?;
                let to = find_bridge(units, to).ok_or_else(|| unknown(to))?;
                (from.to_celsius)(value).and_then(to.from_celsius)
            }
        };

        converted.ok_or(ConversionError::Overflow)
    }
}
