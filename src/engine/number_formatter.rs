// ============================================================================
// Number Formatter
// Locale digit grouping over exact integers and decimals
// ============================================================================

use crate::domain::Locale;
use crate::numeric::{strip_leading_zeros, CanonicalDecimal};
use crate::utils::digits_only;
use num_bigint::BigInt;
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// rust_decimal supports at most 28 fraction digits
const MAX_DECIMAL_SCALE: usize = 28;

/// Fraction-digit and grouping options for a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl FormatOptions {
    /// Exactly `digits` fraction digits
    pub fn fixed(digits: usize) -> Self {
        Self {
            min_fraction_digits: digits,
            max_fraction_digits: digits,
            use_grouping: true,
        }
    }

    /// Builder method: Set fraction digit bounds (`max` is raised to `min`)
    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max.max(min);
        self
    }

    /// Builder method: Disable digit grouping
    pub fn without_grouping(mut self) -> Self {
        self.use_grouping = false;
        self
    }
}

/// Formats numbers for one `(locale, options)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: Locale,
    options: FormatOptions,
}

impl NumberFormatter {
    pub fn new(locale: Locale, options: FormatOptions) -> Self {
        Self { locale, options }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Insert locale grouping separators into a run of digits. Anything but
    /// ASCII digits is dropped first.
    pub fn group_digits(&self, digits: &str) -> String {
        let digits = digits_only(digits);
        let digits = digits.as_str();
        let (primary, secondary) = self.locale.grouping_sizes();
        let len = digits.len();

        if !self.options.use_grouping || len < primary + self.locale.min_grouping_digits() {
            return digits.to_string();
        }

        let separator = self.locale.grouping_separator();
        let head_len = len - primary;
        let mut groups: Vec<&str> = Vec::with_capacity(len / secondary + 2);

        let mut end = head_len;
        while end > secondary {
            groups.push(&digits[end - secondary..end]);
            end -= secondary;
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.push(&digits[head_len..]);

        let mut out = String::with_capacity(len + groups.len() * separator.len_utf8());
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(group);
        }
        out
    }

    /// Format an exact integer. The sign is applied after grouping the
    /// magnitude, so values of any size keep every digit.
    pub fn format_integer(&self, value: &BigInt) -> String {
        let grouped = self.group_digits(&value.magnitude().to_string());
        if value.sign() == num_bigint::Sign::Minus {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Join a sign, an integer digit run and a fraction digit run. The
    /// fraction is used as given.
    pub fn format_parts(&self, negative: bool, integer: &str, fraction: &str) -> String {
        let mut out = String::with_capacity(integer.len() * 2 + fraction.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group_digits(strip_leading_zeros(integer)));
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(fraction);
        }
        out
    }

    /// Format a decimal, rounding half away from zero to
    /// `max_fraction_digits` and keeping at least `min_fraction_digits`.
    pub fn format_decimal(&self, value: Decimal) -> String {
        let max = self.options.max_fraction_digits.min(MAX_DECIMAL_SCALE);
        let min = self.options.min_fraction_digits.min(max);

        let rounded =
            value.round_dp_with_strategy(max as u32, RoundingStrategy::MidpointAwayFromZero);
        let canonical = match CanonicalDecimal::from_decimal(rounded) {
            Ok(canonical) => canonical,
            Err(_) => return String::new(),
        };

        let mut fraction = canonical.fraction_digits().to_string();
        while fraction.len() > min && fraction.ends_with('0') {
            fraction.pop();
        }
        while fraction.len() < min {
            fraction.push('0');
        }

        self.format_parts(
            canonical.is_negative(),
            canonical.integer_digits(),
            &fraction,
        )
    }
}

/// Format a decimal for `locale` with the given fraction bounds.
///
/// # Example
/// ```
/// use canonical_input::domain::Locale;
/// use canonical_input::engine::{format_number, FormatOptions};
/// use rust_decimal::Decimal;
///
/// let value = Decimal::new(123456789, 2);
/// assert_eq!(format_number(value, Locale::PtBr, FormatOptions::fixed(2)), "1.234.567,89");
/// assert_eq!(format_number(value, Locale::EnUs, FormatOptions::fixed(2)), "1,234,567.89");
/// ```
pub fn format_number(value: Decimal, locale: Locale, options: FormatOptions) -> String {
    NumberFormatter::new(locale, options).format_decimal(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(locale: Locale) -> NumberFormatter {
        NumberFormatter::new(locale, FormatOptions::default())
    }

    #[test]
    fn test_group_digits() {
        let en = formatter(Locale::EnUs);
        assert_eq!(en.group_digits("1"), "1");
        assert_eq!(en.group_digits("123"), "123");
        assert_eq!(en.group_digits("1234"), "1,234");
        assert_eq!(en.group_digits("1234567"), "1,234,567");

        let br = formatter(Locale::PtBr);
        assert_eq!(br.group_digits("1234567"), "1.234.567");
    }

    #[test]
    fn test_group_digits_ignores_non_ascii() {
        let en = NumberFormatter::new(Locale::EnUs, FormatOptions::default());
        assert_eq!(en.group_digits("\u{661}\u{662}\u{663}\u{664}"), "");
        assert_eq!(en.group_digits("12\u{663}34"), "1,234");
    }

    #[test]
    fn test_group_digits_indian() {
        let india = formatter(Locale::EnIn);
        assert_eq!(india.group_digits("1234567"), "12,34,567");
        assert_eq!(india.group_digits("123456789"), "12,34,56,789");
        assert_eq!(india.group_digits("1234"), "1,234");
    }

    #[test]
    fn test_min_grouping_digits() {
        let es = formatter(Locale::EsEs);
        assert_eq!(es.group_digits("1234"), "1234");
        assert_eq!(es.group_digits("12345"), "12.345");
    }

    #[test]
    fn test_without_grouping() {
        let f = NumberFormatter::new(Locale::EnUs, FormatOptions::default().without_grouping());
        assert_eq!(f.group_digits("1234567"), "1234567");
    }

    #[test]
    fn test_format_integer_big() {
        let f = formatter(Locale::EnUs);
        let value: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            f.format_integer(&value),
            "-123,456,789,012,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_format_number_examples() {
        let value = Decimal::new(123456789, 2);
        assert_eq!(
            format_number(value, Locale::PtBr, FormatOptions::fixed(2)),
            "1.234.567,89"
        );
        assert_eq!(
            format_number(value, Locale::EnUs, FormatOptions::fixed(2)),
            "1,234,567.89"
        );
    }

    #[test]
    fn test_format_number_rounding_and_padding() {
        let opts = FormatOptions::fixed(2);
        assert_eq!(format_number(Decimal::new(1005, 3), Locale::EnUs, opts), "1.01");
        assert_eq!(format_number(Decimal::new(-1005, 3), Locale::EnUs, opts), "-1.01");
        assert_eq!(format_number(Decimal::new(7, 0), Locale::DeDe, opts), "7,00");
        assert_eq!(format_number(Decimal::new(-1, 3), Locale::EnUs, opts), "0.00");

        let loose = FormatOptions::default();
        assert_eq!(format_number(Decimal::new(150, 2), Locale::EnUs, loose), "1.5");
        assert_eq!(format_number(Decimal::new(12345, 4), Locale::EnUs, loose), "1.235");
    }
}
