//! Rendering of command results.

use convertly_core::convert::{CategoryInfo, ConversionOutcome};
use convertly_shared::AppResult;

/// Text shown for a rejected conversion.
pub const INVALID_INPUT: &str = "Invalid Input";

/// Renders a conversion outcome.
pub fn outcome(outcome: &ConversionOutcome, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string(outcome)?);
    }
    Ok(outcome
        .value
        .clone()
        .unwrap_or_else(|| INVALID_INPUT.to_string()))
}

/// Renders the sentinel for a rejected request.
pub fn invalid(json: bool) -> AppResult<String> {
    outcome(&ConversionOutcome::invalid(), json)
}

/// Renders the category catalog, one category per line.
pub fn categories(infos: &[CategoryInfo], json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string(infos)?);
    }
    Ok(infos
        .iter()
        .map(|info| format!("{}\t{}\t{}", info.category, info.formula, info.units.join(", ")))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Renders the units of one category, one unit per line.
pub fn units(info: &CategoryInfo, json: bool) -> AppResult<String> {
    if json {
        return Ok(serde_json::to_string(&info.units)?);
    }
    Ok(info.units.join("\n"))
}
