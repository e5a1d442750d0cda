// ============================================================================
// Canonical Decimal
// Exact decimal strings: ASCII digits, dot separator, no grouping
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;

/// Borrowed view of a canonical decimal split into sign, integer and fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalParts<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
}

impl<'a> DecimalParts<'a> {
    /// Split a string matching `-?\d+(\.\d+)?`. Returns `None` for anything else.
    pub fn split(value: &'a str) -> Option<Self> {
        let (negative, rest) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        let (integer, fraction) = match rest.split_once('.') {
            Some((integer, fraction)) => {
                if fraction.is_empty() {
                    return None;
                }
                (integer, fraction)
            }
            None => (rest, ""),
        };

        if integer.is_empty()
            || !integer.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        Some(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    /// Signed integer equal to `value × 10^scale`. Fraction digits beyond
    /// `scale` must not exist (callers pad, never truncate, here).
    fn scaled(&self, scale: usize) -> BigInt {
        let mut digits = String::with_capacity(1 + self.integer.len() + scale);
        if self.negative {
            digits.push('-');
        }
        digits.push_str(self.integer);
        digits.push_str(self.fraction);
        for _ in self.fraction.len()..scale {
            digits.push('0');
        }
        // Only ASCII digits with an optional sign reach this point
        digits.parse().unwrap_or_default()
    }
}

/// Strip leading zeros, keeping at least a single `0`.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Check whether `value` matches `-?\d+(\.\d+)?`.
pub fn is_canonical_decimal(value: &str) -> bool {
    DecimalParts::split(value).is_some()
}

/// Truncate (never round) or zero-pad the fraction to exactly
/// `fraction_digits` digits. The sign is dropped when the result is zero.
///
/// Returns `None` when `value` is not canonical.
///
/// # Example
/// ```
/// use canonical_input::numeric::normalize_to_fixed_fraction;
///
/// assert_eq!(normalize_to_fixed_fraction("12.345", 2).as_deref(), Some("12.34"));
/// assert_eq!(normalize_to_fixed_fraction("7", 2).as_deref(), Some("7.00"));
/// assert_eq!(normalize_to_fixed_fraction("-0.001", 2).as_deref(), Some("0.00"));
/// ```
pub fn normalize_to_fixed_fraction(value: &str, fraction_digits: usize) -> Option<String> {
    let parts = DecimalParts::split(value)?;
    let integer = strip_leading_zeros(parts.integer);

    let mut fraction: String = parts.fraction.chars().take(fraction_digits).collect();
    while fraction.len() < fraction_digits {
        fraction.push('0');
    }

    let truncated = DecimalParts {
        negative: parts.negative,
        integer,
        fraction: &fraction,
    };

    let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
    if parts.negative && !truncated.is_zero() {
        out.push('-');
    }
    out.push_str(integer);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    Some(out)
}

/// Exact comparison of two canonical decimals.
///
/// Fractions are padded to the same length and both sides compared as signed
/// big integers, so arbitrarily long values compare without float drift.
/// Returns `None` when either side is not canonical.
pub fn compare_canonical_decimals(left: &str, right: &str) -> Option<Ordering> {
    let left = DecimalParts::split(left)?;
    let right = DecimalParts::split(right)?;
    let scale = left.fraction.len().max(right.fraction.len());
    Some(left.scaled(scale).cmp(&right.scaled(scale)))
}

/// A validated canonical decimal.
///
/// The integer part never has leading zeros (except a single `0`) and zero is
/// never negative. Trailing fraction zeros are preserved as typed, so
/// `"1.50"` and `"1.5"` are different strings with equal values; use
/// [`CanonicalDecimal::cmp_value`] for numeric ordering.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CanonicalDecimal(String);

impl CanonicalDecimal {
    /// Parse and normalize a canonical decimal string.
    ///
    /// # Errors
    /// Returns `InvalidFormat` when `value` does not match `-?\d+(\.\d+)?`.
    pub fn parse(value: &str) -> NumericResult<Self> {
        let parts = DecimalParts::split(value).ok_or(NumericError::InvalidFormat)?;
        Ok(Self::from_digits(parts.negative, parts.integer, parts.fraction))
    }

    /// Assemble from already-validated digit runs.
    pub(crate) fn from_digits(negative: bool, integer: &str, fraction: &str) -> Self {
        let integer = strip_leading_zeros(integer);
        let parts = DecimalParts {
            negative,
            integer,
            fraction,
        };

        let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
        if negative && !parts.is_zero() {
            out.push('-');
        }
        out.push_str(integer);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        Self(out)
    }

    /// Zero (`"0"`)
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    #[inline]
    pub(crate) fn parts(&self) -> DecimalParts<'_> {
        // The constructor guarantees the canonical shape
        DecimalParts::split(&self.0).unwrap_or(DecimalParts {
            negative: false,
            integer: "0",
            fraction: "",
        })
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    pub fn is_zero(&self) -> bool {
        self.parts().is_zero()
    }

    /// Integer digits without sign.
    pub fn integer_digits(&self) -> &str {
        self.parts().integer
    }

    /// Fraction digits (possibly empty).
    pub fn fraction_digits(&self) -> &str {
        self.parts().fraction
    }

    /// Truncate or pad to exactly `fraction_digits` fraction digits.
    pub fn with_fraction_digits(&self, fraction_digits: usize) -> Self {
        match normalize_to_fixed_fraction(&self.0, fraction_digits) {
            Some(normalized) => Self(normalized),
            None => self.clone(),
        }
    }

    /// Numeric ordering (`"1.5"` equals `"1.50"`).
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        compare_canonical_decimals(&self.0, &other.0).unwrap_or(Ordering::Equal)
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `Overflow` if the integer part exceeds 28 digits
    /// - `PrecisionLoss` if the fraction cannot be represented exactly
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(&self.0).map_err(|_| {
            if self.integer_digits().len() > 28 {
                NumericError::Overflow
            } else {
                NumericError::PrecisionLoss
            }
        })
    }

    /// Convert from `rust_decimal::Decimal`, keeping its scale.
    pub fn from_decimal(value: rust_decimal::Decimal) -> NumericResult<Self> {
        Self::parse(&value.to_string())
    }
}

impl Default for CanonicalDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::str::FromStr for CanonicalDecimal {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalDecimal({})", self.0)
    }
}

impl fmt::Display for CanonicalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDecimal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical_decimal("0"));
        assert!(is_canonical_decimal("-12.50"));
        assert!(is_canonical_decimal("007"));

        assert!(!is_canonical_decimal(""));
        assert!(!is_canonical_decimal("-"));
        assert!(!is_canonical_decimal("1."));
        assert!(!is_canonical_decimal(".5"));
        assert!(!is_canonical_decimal("1,5"));
        assert!(!is_canonical_decimal("+1"));
        assert!(!is_canonical_decimal("1.2.3"));
        assert!(!is_canonical_decimal("١٢"));
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(CanonicalDecimal::parse("007.10").unwrap().as_str(), "7.10");
        assert_eq!(CanonicalDecimal::parse("-0").unwrap().as_str(), "0");
        assert_eq!(CanonicalDecimal::parse("-0.00").unwrap().as_str(), "0.00");
        assert_eq!(CanonicalDecimal::parse("-000.5").unwrap().as_str(), "-0.5");
        assert_eq!(
            CanonicalDecimal::parse("abc"),
            Err(NumericError::InvalidFormat)
        );
    }

    #[test]
    fn test_normalize_to_fixed_fraction() {
        assert_eq!(normalize_to_fixed_fraction("12.999", 2).as_deref(), Some("12.99"));
        assert_eq!(normalize_to_fixed_fraction("12", 2).as_deref(), Some("12.00"));
        assert_eq!(normalize_to_fixed_fraction("12.3", 0).as_deref(), Some("12"));
        assert_eq!(normalize_to_fixed_fraction("-0.009", 2).as_deref(), Some("0.00"));
        assert_eq!(normalize_to_fixed_fraction("-1.009", 2).as_deref(), Some("-1.00"));
        assert_eq!(normalize_to_fixed_fraction("0012.5", 1).as_deref(), Some("12.5"));
        assert_eq!(normalize_to_fixed_fraction("1,5", 2), None);
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare_canonical_decimals("1.5", "1.50"), Some(Ordering::Equal));
        assert_eq!(compare_canonical_decimals("-2", "1"), Some(Ordering::Less));
        assert_eq!(compare_canonical_decimals("0.001", "0"), Some(Ordering::Greater));
        assert_eq!(compare_canonical_decimals("-0", "0"), Some(Ordering::Equal));
        assert_eq!(compare_canonical_decimals("x", "0"), None);
    }

    #[test]
    fn test_compare_beyond_float_precision() {
        // Both collapse to the same f64
        let a = "9007199254740993.000000000000000001";
        let b = "9007199254740993.000000000000000002";
        assert_eq!(compare_canonical_decimals(a, b), Some(Ordering::Less));
        assert_eq!(compare_canonical_decimals(b, a), Some(Ordering::Greater));

        let huge = "123456789012345678901234567890123456789";
        assert_eq!(compare_canonical_decimals(huge, huge), Some(Ordering::Equal));
    }

    #[test]
    fn test_accessors() {
        let x = CanonicalDecimal::parse("-1234.5600").unwrap();
        assert!(x.is_negative());
        assert!(!x.is_zero());
        assert_eq!(x.integer_digits(), "1234");
        assert_eq!(x.fraction_digits(), "5600");
        assert_eq!(x.with_fraction_digits(2).as_str(), "-1234.56");
    }

    #[test]
    fn test_cmp_value() {
        let a = CanonicalDecimal::parse("1.5").unwrap();
        let b = CanonicalDecimal::parse("1.50").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.cmp_value(&b), Ordering::Equal);
    }

    #[test]
    fn test_to_decimal() {
        let x = CanonicalDecimal::parse("123.45").unwrap();
        assert_eq!(x.to_decimal().unwrap(), Decimal::new(12345, 2));

        let huge = CanonicalDecimal::parse("123456789012345678901234567890").unwrap();
        assert_eq!(huge.to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_decimal() {
        let x = CanonicalDecimal::from_decimal(Decimal::new(-1050, 2)).unwrap();
        assert_eq!(x.as_str(), "-10.50");
    }
}
