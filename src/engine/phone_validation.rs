// ============================================================================
// Phone Validation
// Required / incomplete / invalid checks on phone fields
// ============================================================================

use super::phone_metadata::LengthIssue;
use super::phone_number::PhoneNumber;
use crate::domain::{CountryCode, PhoneError, PhoneRules};
use crate::utils::count_digits;

/// Current state of a phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneValidationInput<'a> {
    pub display_value: &'a str,
    pub canonical_value: &'a str,
    pub country: CountryCode,
    pub rules: PhoneRules,
}

/// Validate a phone field.
///
/// Short numbers are `Incomplete` when `rules.validate_incomplete` is set and
/// `Invalid` otherwise. Text typed with a leading `+` is treated as a
/// deliberate international entry and is never reported as `Incomplete`.
pub fn validate_phone_value(input: &PhoneValidationInput<'_>) -> Option<PhoneError> {
    let display = input.display_value.trim();
    let canonical = input.canonical_value.trim();
    let has_digits = count_digits(display) > 0;

    if !has_digits && canonical.is_empty() {
        return input.rules.required.then_some(PhoneError::Required);
    }

    let source = if has_digits { display } else { canonical };
    let international = source.starts_with('+');
    let short_error = if input.rules.validate_incomplete && !international {
        PhoneError::Incomplete
    } else {
        PhoneError::Invalid
    };

    let number = if international {
        PhoneNumber::from_international(source)
    } else {
        PhoneNumber::from_national(source, input.country)
    };

    let Some(number) = number else {
        // Unknown dial code, or only a trunk prefix typed so far
        return Some(if international {
            PhoneError::Invalid
        } else {
            short_error
        });
    };

    match number.length_issue() {
        Some(LengthIssue::NotANumber | LengthIssue::TooShort) => return Some(short_error),
        Some(LengthIssue::TooLong) => return Some(PhoneError::Invalid),
        Some(LengthIssue::InvalidLength) | None => {}
    }

    if !number.is_possible() {
        return Some(short_error);
    }
    if !number.is_valid() {
        return Some(PhoneError::Invalid);
    }
    None
}
