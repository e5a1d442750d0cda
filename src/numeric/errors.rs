// ============================================================================
// Numeric Errors
// Error types for canonical decimal construction and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while building or converting canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string does not match `-?\d+(\.\d+)?`
    InvalidFormat,
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Locale tag is not one of the supported locales
    UnsupportedLocale,
    /// Country code is not present in the phone metadata table
    UnsupportedCountry,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidFormat => {
                write!(f, "invalid format: expected a canonical decimal string")
            },
            NumericError::Overflow => write!(f, "overflow: value exceeds target range"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::UnsupportedLocale => write!(f, "unsupported locale"),
            NumericError::UnsupportedCountry => write!(f, "unsupported country code"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
