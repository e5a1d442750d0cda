// ============================================================================
// Validation Rules
// Rule sets and closed error kinds for decimal and phone fields
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Decimal
// ============================================================================

/// Validation failure for a canonical decimal. Exactly one kind is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalError {
    Required,
    Invalid,
    Min,
    Max,
    GreaterThanZero,
}

impl DecimalError {
    /// Stable key for message lookup in the UI layer.
    pub const fn error_key(self) -> &'static str {
        match self {
            DecimalError::Required => "validation.decimal.required",
            DecimalError::Invalid => "validation.decimal.invalid",
            DecimalError::Min => "validation.decimal.min",
            DecimalError::Max => "validation.decimal.max",
            DecimalError::GreaterThanZero => "validation.decimal.greater_than_zero",
        }
    }
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::Required => write!(f, "value is required"),
            DecimalError::Invalid => write!(f, "value is not a valid number"),
            DecimalError::Min => write!(f, "value is below the minimum"),
            DecimalError::Max => write!(f, "value is above the maximum"),
            DecimalError::GreaterThanZero => write!(f, "value must be greater than zero"),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Rules applied to a canonical decimal.
///
/// `min` and `max` are canonical decimal strings and are inclusive bounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalRules {
    pub required: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub greater_than_zero: bool,
}

impl DecimalRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder method: Set the inclusive lower bound
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Builder method: Set the inclusive upper bound
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Builder method: Reject zero and negative values
    pub fn greater_than_zero(mut self) -> Self {
        self.greater_than_zero = true;
        self
    }
}

// ============================================================================
// Phone
// ============================================================================

/// Validation failure for a phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhoneError {
    Required,
    Invalid,
    Incomplete,
}

impl PhoneError {
    /// Stable key for message lookup in the UI layer.
    pub const fn error_key(self) -> &'static str {
        match self {
            PhoneError::Required => "validation.phone.required",
            PhoneError::Invalid => "validation.phone.invalid",
            PhoneError::Incomplete => "validation.phone.incomplete",
        }
    }
}

impl fmt::Display for PhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneError::Required => write!(f, "phone number is required"),
            PhoneError::Invalid => write!(f, "phone number is invalid"),
            PhoneError::Incomplete => write!(f, "phone number is incomplete"),
        }
    }
}

impl std::error::Error for PhoneError {}

/// Rules applied to a phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneRules {
    pub required: bool,

    /// Report short numbers as `Incomplete` instead of `Invalid`
    pub validate_incomplete: bool,
}

impl PhoneRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder method: Distinguish incomplete numbers from invalid ones
    pub fn validate_incomplete(mut self) -> Self {
        self.validate_incomplete = true;
        self
    }
}

/// What happens to an in-progress phone draft when the country changes.
///
/// Values that already have a canonical E.164 form are always re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CountryChangePolicy {
    /// Re-parse the typed digits against the new country
    #[default]
    Reformat,
    /// Clear the draft
    Discard,
}
