// ============================================================================
// Numeric Module
// Exact canonical decimals for money and number inputs
// ============================================================================
//
// This module provides:
// - CanonicalDecimal: validated `-?\d+(\.\d+)?` value
// - normalize_to_fixed_fraction / compare_canonical_decimals on plain strings
// - NumericError: Error types for construction and conversion
//
// Design principles:
// - No floating-point operations
// - Comparison through big integers, never through f64
// - Functions on `&str` are total: invalid input yields `None`

mod canonical_decimal;
mod errors;

pub(crate) use canonical_decimal::{strip_leading_zeros, DecimalParts};
pub use canonical_decimal::{
    compare_canonical_decimals, is_canonical_decimal, normalize_to_fixed_fraction,
    CanonicalDecimal,
};
pub use errors::{NumericError, NumericResult};
