// ============================================================================
// Decimal Validation
// Required / format / sign / bound checks on canonical decimals
// ============================================================================

use crate::domain::{DecimalError, DecimalRules};
use crate::numeric::{compare_canonical_decimals, is_canonical_decimal};
use std::cmp::Ordering;

/// Validate a canonical decimal against `rules`.
///
/// Checks run in order `Required`, `Invalid`, `GreaterThanZero`, `Min`,
/// `Max`; the first failure is returned. Bounds are compared exactly and a
/// bound that is not itself canonical is skipped.
pub fn validate_canonical_decimal(value: &str, rules: &DecimalRules) -> Option<DecimalError> {
    let value = value.trim();

    if value.is_empty() {
        return rules.required.then_some(DecimalError::Required);
    }

    if !is_canonical_decimal(value) {
        return Some(DecimalError::Invalid);
    }

    if rules.greater_than_zero && compare_canonical_decimals(value, "0") != Some(Ordering::Greater)
    {
        return Some(DecimalError::GreaterThanZero);
    }

    if let Some(min) = rules.min.as_deref() {
        if compare_canonical_decimals(value, min) == Some(Ordering::Less) {
            return Some(DecimalError::Min);
        }
    }

    if let Some(max) = rules.max.as_deref() {
        if compare_canonical_decimals(value, max) == Some(Ordering::Greater) {
            return Some(DecimalError::Max);
        }
    }

    None
}
