// ============================================================================
// Accept Handler Interface
// Defines the contract for receiving committed field values
// ============================================================================

use crate::domain::{DecimalError, PhoneError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validation outcome attached to an accepted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldError {
    Decimal(DecimalError),
    Phone(PhoneError),
}

impl FieldError {
    /// Translation key, e.g. `validation.phone.incomplete`
    pub fn error_key(&self) -> &'static str {
        match self {
            FieldError::Decimal(error) => error.error_key(),
            FieldError::Phone(error) => error.error_key(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Decimal(error) => write!(f, "{}", error),
            FieldError::Phone(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<DecimalError> for FieldError {
    fn from(error: DecimalError) -> Self {
        FieldError::Decimal(error)
    }
}

impl From<PhoneError> for FieldError {
    fn from(error: PhoneError) -> Self {
        FieldError::Phone(error)
    }
}

/// Emitted every time a masked field commits its state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcceptEvent {
    /// Text shown in the field
    pub display_value: String,

    /// Machine value, `None` while the draft has none
    pub canonical_value: Option<String>,

    /// Current validation error, whether or not it is visible yet
    pub error: Option<FieldError>,
}

/// Receives accepted values from masked fields.
/// Implementations can bind form state, log, forward to a store, etc.
pub trait AcceptHandler: Send + Sync {
    fn on_accept(&self, event: &AcceptEvent);
}

/// No-op accept handler for testing
pub struct NoOpAcceptHandler;

impl AcceptHandler for NoOpAcceptHandler {
    fn on_accept(&self, _event: &AcceptEvent) {}
}

/// Logging accept handler
pub struct LoggingAcceptHandler;

impl AcceptHandler for LoggingAcceptHandler {
    fn on_accept(&self, event: &AcceptEvent) {
        tracing::debug!("Masked input accepted: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpAcceptHandler;
        handler.on_accept(&AcceptEvent {
            display_value: "1,5".to_string(),
            canonical_value: Some("1.5".to_string()),
            error: None,
        });
        // Should not panic
    }

    #[test]
    fn test_field_error_keys() {
        assert_eq!(
            FieldError::from(DecimalError::Required).error_key(),
            "validation.decimal.required"
        );
        assert_eq!(
            FieldError::from(PhoneError::Incomplete).error_key(),
            "validation.phone.incomplete"
        );
    }
}
