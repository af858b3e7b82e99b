//! Result formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ConversionError;

/// Number of fraction digits in a formatted result.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// Renders a value with exactly two fraction digits.
///
/// Midpoints round away from zero, so `0.125` renders as `"0.13"`. A value
/// that rounds to zero renders as `"0.00"`, never `"-0.00"`.
///
/// # Errors
///
/// Returns `Overflow` when the value is too large to carry two fraction
/// digits in a `Decimal` mantissa.
pub fn try_format(value: Decimal) -> Result<String, ConversionError> {
    let mut rounded =
        value.round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    // rescale keeps a smaller scale when the mantissa has no room left
    rounded.rescale(RESULT_DECIMAL_PLACES);
    if rounded.scale() != RESULT_DECIMAL_PLACES {
        return Err(ConversionError::Overflow);
    }
    Ok(rounded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(98.6), "98.60")]
    #[case(dec!(22.0462), "22.05")]
    #[case(dec!(1), "1.00")]
    #[case(dec!(0), "0.00")]
    #[case(dec!(0.125), "0.13")]
    #[case(dec!(-0.125), "-0.13")]
    #[case(dec!(-0.001), "0.00")]
    #[case(dec!(1234567.891), "1234567.89")]
    #[case(dec!(0.0000062137), "0.00")]
    #[case(dec!(10000000000000000000000000), "10000000000000000000000000.00")]
    fn test_try_format(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(try_format(value).unwrap(), expected);
    }

    #[rstest]
    #[case(Decimal::MAX)]
    #[case(Decimal::MIN)]
    #[case(dec!(1000000000000000000000000000))]
    fn test_try_format_rejects_values_without_room_for_cents(#[case] value: Decimal) {
        assert_eq!(try_format(value), Err(ConversionError::Overflow));
    }
}
