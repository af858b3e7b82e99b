//! Static rate and formula tables.
//!
//! Tables are process-wide constants shared by every request.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::unit::{BridgeUnit, RateUnit};

/// Mass units per kilogram.
pub const WEIGHT: &[RateUnit] = &[
    RateUnit::new("kg", dec!(1)),
    RateUnit::new("g", dec!(1000)),
    RateUnit::new("lb", dec!(2.20462)),
];

/// Length units per centimeter.
pub const LENGTH: &[RateUnit] = &[
    RateUnit::new("cm", dec!(1)),
    RateUnit::new("m", dec!(0.01)),
    RateUnit::new("km", dec!(0.00001)),
    RateUnit::new("mile", dec!(0.00000621371)),
];

/// Currency units per US dollar.
pub const CURRENCY: &[RateUnit] = &[
    RateUnit::new("usd", dec!(1)),
    RateUnit::new("eur", dec!(0.93)),
    RateUnit::new("rub", dec!(89.95)),
];

/// Area units per square meter.
pub const AREA: &[RateUnit] = &[
    RateUnit::new("squareMeter", dec!(1)),
    RateUnit::new("squareKilometer", dec!(0.000001)),
];

/// Temperature scales bridged through Celsius.
pub const TEMPERATURE: &[BridgeUnit] = &[
    BridgeUnit::new("C", celsius_identity, celsius_identity),
    BridgeUnit::new("F", fahrenheit_to_celsius, celsius_to_fahrenheit),
];

#[allow(clippy::unnecessary_wraps)]
fn celsius_identity(value: Decimal) -> Option<Decimal> {
    Some(value)
}

fn fahrenheit_to_celsius(fahrenheit: Decimal) -> Option<Decimal> {
    fahrenheit
        .checked_sub(dec!(32))?
        .checked_mul(dec!(5))?
        .checked_div(dec!(9))
}

fn celsius_to_fahrenheit(celsius: Decimal) -> Option<Decimal> {
    celsius
        .checked_mul(dec!(9))?
        .checked_div(dec!(5))?
        .checked_add(dec!(32))
}
