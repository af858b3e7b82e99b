//! Conversion error types.

use convertly_shared::Category;
use thiserror::Error;

/// Reason a conversion request was rejected.
///
/// Every cause is reported to callers as [`ErrorKind::InvalidInput`]; the
/// variants only exist so hosts can log what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The raw input was empty or only whitespace.
    #[error("Input is empty")]
    EmptyInput,

    /// The raw input is not a plain decimal number.
    #[error("Input is not a number: {0}")]
    NotANumber(String),

    /// The category identifier is not known.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The unit does not exist in the category's table.
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit {
        /// Category that was searched.
        category: Category,
        /// Unit identifier as supplied.
        unit: String,
    },

    /// The input or the result does not fit the decimal range.
    #[error("Value is out of range")]
    Overflow,
}

/// Error kind reported across the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be converted.
    InvalidInput,
}

impl ConversionError {
    /// Returns the reported error kind. Always [`ErrorKind::InvalidInput`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::NotANumber(_)
            | Self::UnknownCategory(_)
            | Self::UnknownUnit { .. }
            | Self::Overflow => ErrorKind::InvalidInput,
        }
    }
}

impl From<ConversionError> for convertly_shared::AppError {
    fn from(err: ConversionError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
