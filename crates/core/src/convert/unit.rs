//! Unit definitions.
//!
//! Linear categories describe each unit by a scalar rate. Temperature units
//! are not linearly related, so each one carries a pair of functions that
//! bridge its native scale to and from Celsius.

use rust_decimal::Decimal;

/// Maps a value between a native scale and the shared Celsius scale.
///
/// Returns `None` when the result does not fit a `Decimal`.
pub type ScaleFn = fn(Decimal) -> Option<Decimal>;

/// Unit of a linear category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateUnit {
    /// Unit identifier.
    pub id: &'static str,
    /// Quantity of this unit equivalent to one reference quantity. Always > 0.
    pub rate: Decimal,
}

impl RateUnit {
    /// Creates a rate unit.
    #[must_use]
    pub const fn new(id: &'static str, rate: Decimal) -> Self {
        Self { id, rate }
    }
}

/// Unit converted through the Celsius bridge.
#[derive(Debug, Clone, Copy)]
pub struct BridgeUnit {
    /// Unit identifier.
    pub id: &'static str,
    /// Native scale to Celsius.
    pub to_celsius: ScaleFn,
    /// Celsius to native scale.
    pub from_celsius: ScaleFn,
}

impl BridgeUnit {
    /// Creates a bridge unit from its function pair.
    #[must_use]
    pub const fn new(id: &'static str, to_celsius: ScaleFn, from_celsius: ScaleFn) -> Self {
        Self {
            id,
            to_celsius,
            from_celsius,
        }
    }
}

/// Finds a rate unit by its exact identifier.
#[must_use]
pub fn find_rate<'a>(units: &'a [RateUnit], id: &str) -> Option<&'a RateUnit> {
    units.iter().find(|unit| unit.id == id)
}

/// Finds a bridge unit by its exact identifier.
#[must_use]
pub fn find_bridge<'a>(units: &'a [BridgeUnit], id: &str) -> Option<&'a BridgeUnit> {
    units.iter().find(|unit| unit.id == id)
}
