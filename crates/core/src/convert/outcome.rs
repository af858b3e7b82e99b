//! Boundary result handed to presentation hosts.

use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Serialisable conversion result.
///
/// Serialises as `{"ok":true,"value":"22.05"}` or `{"ok":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Whether the conversion succeeded.
    pub ok: bool,
    /// Formatted value, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ConversionOutcome {
    /// Successful outcome carrying a formatted value.
    #[must_use]
    pub const fn success(value: String) -> Self {
        Self {
            ok: true,
            value: Some(value),
        }
    }

    /// Rejected outcome.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            ok: false,
            value: None,
        }
    }
}

impl From<Result<String, ConversionError>> for ConversionOutcome {
    fn from(result: Result<String, ConversionError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(_) => Self::invalid(),
        }
    }
}
