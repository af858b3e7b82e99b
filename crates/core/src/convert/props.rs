//! Property-based tests for the conversion engine.
//!
//! - Identity: converting a unit to itself preserves the value
//! - Round-trip: A -> B -> A returns the original value
//! - Temperature round-trip through formatted strings
//! - Malformed input is always rejected, never panics

use convertly_shared::Category;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::units;
use super::engine::{convert, convert_exact};
use super::error::ConversionError;
use super::format::try_format;

/// Strategy to generate amounts with two decimals (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick a linear category (ratio or inverted ratio).
fn linear_category() -> impl Strategy<Value = Category> {
    prop::sample::select(vec![
        Category::Weight,
        Category::Length,
        Category::Currency,
        Category::Area,
    ])
}

/// Strategy to pick a linear category together with two of its units.
fn linear_unit_pair() -> impl Strategy<Value = (Category, &'static str, &'static str)> {
    linear_category().prop_flat_map(|category| {
        let ids = units(category);
        (
            Just(category),
            prop::sample::select(ids.clone()),
            prop::sample::select(ids),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting any unit of a linear category to itself preserves the value.
    #[test]
    fn prop_identity(
        (category, unit, _) in linear_unit_pair(),
        value in amount(),
    ) {
        let result = convert(category.as_str(), unit, unit, &value.to_string()).unwrap();
        prop_assert_eq!(result, try_format(value).unwrap());
    }

    /// Converting A -> B -> A returns the original value within 0.01.
    #[test]
    fn prop_round_trip(
        (category, a, b) in linear_unit_pair(),
        value in amount(),
    ) {
        let there = convert_exact(category.as_str(), a, b, &value.to_string()).unwrap();
        let back = convert_exact(category.as_str(), b, a, &there.to_string()).unwrap();
        prop_assert!(
            (back - value).abs() <= dec!(0.01),
            "{} {} -> {} -> {}: {} became {}", category, value, b, a, there, back
        );
    }

    /// Celsius -> Fahrenheit -> Celsius through formatted strings stays within 0.01.
    #[test]
    fn prop_temperature_round_trip(value in amount()) {
        let fahrenheit = convert("temperature", "C", "F", &value.to_string()).unwrap();
        let celsius = convert("temperature", "F", "C", &fahrenheit).unwrap();
        let celsius: Decimal = celsius.parse().unwrap();
        prop_assert!((celsius - value).abs() <= dec!(0.01));
    }

    /// Results always have exactly two fraction digits.
    #[test]
    fn prop_two_fraction_digits(
        (category, a, b) in linear_unit_pair(),
        value in amount(),
    ) {
        let result = convert(category.as_str(), a, b, &value.to_string()).unwrap();
        let (_, fraction) = result.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    /// Conversion is deterministic.
    #[test]
    fn prop_deterministic(
        (category, a, b) in linear_unit_pair(),
        value in amount(),
    ) {
        let first = convert(category.as_str(), a, b, &value.to_string());
        let second = convert(category.as_str(), a, b, &value.to_string());
        prop_assert_eq!(first, second);
    }

    /// Text with letters other than an exponent marker is never a number.
    #[test]
    fn prop_rejects_garbage(
        (category, a, b) in linear_unit_pair(),
        garbage in "[a-df-zA-DF-Z%$#]{1,8}",
        prefix in prop::option::of(0u32..1000),
    ) {
        let raw = match prefix {
            Some(n) => format!("{n}{garbage}"),
            None => garbage,
        };
        let result = convert(category.as_str(), a, b, &raw);
        prop_assert!(matches!(result, Err(ConversionError::NotANumber(_))));
    }

    /// Arbitrary input never panics; it either converts or is rejected.
    #[test]
    fn prop_never_panics(
        category in "\\PC{0,12}",
        from in "\\PC{0,12}",
        to in "\\PC{0,12}",
        raw in "\\PC{0,24}",
    ) {
        let _ = convert(&category, &from, &to, &raw);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_every_linear_pair_round_trips_fixed_value() {
        for category in [Category::Weight, Category::Length, Category::Currency, Category::Area] {
            for a in units(category) {
                for b in units(category) {
                    let there = convert_exact(category.as_str(), a, b, "123.45").unwrap();
                    let back = convert_exact(category.as_str(), b, a, &there.to_string()).unwrap();
                    assert!((back - dec!(123.45)).abs() <= dec!(0.01), "{category} {a} {b}");
                }
            }
        }
    }
}
