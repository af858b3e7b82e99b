//! Strict numeric input parsing.
//!
//! Accepted grammar, after trimming surrounding ASCII whitespace:
//!
//! ```text
//! [+-]? (digits ["." digits] | "." digits) ([eE] [+-]? digits)?
//! ```
//!
//! Parsing is locale independent. Thousands separators, decimal commas,
//! `NaN`, `Infinity` and trailing characters are rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::ConversionError;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]+))?(?:[eE](?P<exp>[+-]?[0-9]+))?$")
        .expect("number pattern is valid")
});

/// Most significant digits a `Decimal` mantissa can hold.
const MAX_DIGITS: i128 = 29;

/// Most fraction digits a `Decimal` can hold.
const MAX_SCALE: i128 = 28;

/// Parses a raw input string into a decimal quantity.
///
/// # Errors
///
/// Returns `EmptyInput` for blank input, `NotANumber` when the text does not
/// follow the grammar and `Overflow` when the number is outside the decimal
/// range.
pub fn parse_quantity(raw: &str) -> Result<Decimal, ConversionError> {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let not_a_number = || ConversionError::NotANumber(trimmed.to_string());
    let captures = NUMBER.captures(trimmed).ok_or_else(not_a_number)?;

    let int = &captures["int"];
    let frac = captures.name("frac").map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Err(not_a_number());
    }

    let joined = format!("{int}{frac}");
    let digits = joined.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let exp = match captures.name("exp") {
        None => 0,
        Some(exp) => match exp.as_str().parse::<i128>() {
            Ok(exp) => exp,
            Err(_) if exp.as_str().starts_with('-') => return Ok(Decimal::ZERO),
            Err(_) => return Err(ConversionError::Overflow),
        },
    };

    // value = digits * 10^-scale
    let scale = text_len(frac).saturating_sub(exp);
    let text = place_decimal_point(digits, scale)?;
    let mut value = Decimal::from_str(&text).map_err(|_| ConversionError::Overflow)?;
    if &captures["sign"] == "-" {
        value.set_sign_negative(true);
    }

    Ok(value)
}

fn text_len(text: &str) -> i128 {
    i128::try_from(text.len()).unwrap_or(i128::MAX)
}

/// Renders `digits * 10^-scale` in plain notation.
///
/// Values below the smallest representable magnitude render as `"0"`.
fn place_decimal_point(digits: &str, scale: i128) -> Result<String, ConversionError> {
    let len = text_len(digits);

    if scale <= 0 {
        let zeros = scale.unsigned_abs();
        let width = i128::try_from(zeros).map_or(i128::MAX, |zeros| len.saturating_add(zeros));
        if width > MAX_DIGITS {
            return Err(ConversionError::Overflow);
        }
        let zeros = usize::try_from(zeros).map_err(|_| ConversionError::Overflow)?;
        return Ok(format!("{digits}{}", "0".repeat(zeros)));
    }

    if scale - len > MAX_SCALE {
        return Ok("0".to_string());
    }

    let scale = usize::try_from(scale).map_err(|_| ConversionError::Overflow)?;
    if scale >= digits.len() {
        Ok(format!("0.{}{digits}", "0".repeat(scale - digits.len())))
    } else {
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        Ok(format!("{whole}.{fraction}"))
    }
}
