// ============================================================================
// Decimal Parser
// Locale-formatted typing to canonical decimals and back
// ============================================================================

use super::number_formatter::{FormatOptions, NumberFormatter};
use crate::domain::{DecimalDraft, Locale};
use crate::numeric::{strip_leading_zeros, CanonicalDecimal, DecimalParts};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fraction digits kept while typing
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 12;

/// Fraction digits are never kept beyond this
pub const MAX_FRACTION_DIGITS_CAP: usize = 20;

/// Options for [`parse_decimal_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DraftOptions {
    /// Extra fraction digits are dropped. Capped at 20; 0 makes the field
    /// integer-only.
    pub max_fraction_digits: usize,

    /// Accept a `-` typed before the first digit
    pub allow_negative: bool,
}

impl Default for DraftOptions {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            allow_negative: false,
        }
    }
}

impl DraftOptions {
    /// Builder method: Set the fraction digit budget
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Accept negative values
    pub fn allow_negative(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    fn effective_max_fraction_digits(&self) -> usize {
        self.max_fraction_digits.min(MAX_FRACTION_DIGITS_CAP)
    }
}

/// Parse what the user has typed so far.
///
/// Lenient: characters other than digits, the first decimal separator and
/// (optionally) a leading `-` are ignored, which covers the grouping
/// separator, spaces, no-break spaces, tabs and line breaks. Never fails.
///
/// # Example
/// ```
/// use canonical_input::domain::Locale;
/// use canonical_input::engine::{parse_decimal_draft, DraftOptions};
///
/// let draft = parse_decimal_draft("1.234,5", Locale::PtBr, &DraftOptions::default());
/// assert_eq!(draft.canonical_value.as_deref(), Some("1234.5"));
/// assert_eq!(draft.display_value, "1.234,5");
/// ```
pub fn parse_decimal_draft(raw: &str, locale: Locale, options: &DraftOptions) -> DecimalDraft {
    let formatter = NumberFormatter::new(locale, FormatOptions::default());
    parse_decimal_draft_with(&formatter, raw, options)
}

/// [`parse_decimal_draft`] with a caller-provided (usually cached) formatter.
pub fn parse_decimal_draft_with(
    formatter: &NumberFormatter,
    raw: &str,
    options: &DraftOptions,
) -> DecimalDraft {
    let decimal_separator = formatter.locale().decimal_separator();
    let max_fraction = options.effective_max_fraction_digits();

    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_separator = false;
    let mut negative = false;

    for c in raw.chars() {
        match c {
            '0'..='9' if seen_separator => {
                if fraction.len() < max_fraction {
                    fraction.push(c);
                }
            }
            '0'..='9' => integer.push(c),
            c if c == decimal_separator => {
                if max_fraction > 0 {
                    seen_separator = true;
                }
            }
            '-' if options.allow_negative && integer.is_empty() && !seen_separator => {
                negative = true;
            }
            _ => {}
        }
    }

    let has_digits = !integer.is_empty() || !fraction.is_empty();
    let canonical_value = has_digits
        .then(|| CanonicalDecimal::from_digits(negative, &integer, &fraction).into_string());

    let mut display_value = String::new();
    if negative {
        display_value.push('-');
    }
    if !integer.is_empty() || seen_separator {
        display_value.push_str(&formatter.group_digits(strip_leading_zeros(&integer)));
    }
    if seen_separator {
        display_value.push(decimal_separator);
        display_value.push_str(&fraction);
    }

    DecimalDraft {
        display_value,
        canonical_value,
        has_digits,
        has_trailing_separator: seen_separator && fraction.is_empty(),
    }
}

/// Optional fraction digit bounds for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionBounds {
    /// Pad with zeros up to this many digits
    pub min: Option<usize>,
    /// Truncate beyond this many digits
    pub max: Option<usize>,
}

impl FractionBounds {
    /// Exactly `digits` fraction digits
    pub fn fixed(digits: usize) -> Self {
        Self {
            min: Some(digits),
            max: Some(digits),
        }
    }

    fn format_options(self) -> FormatOptions {
        let min = self.min.unwrap_or(0);
        let max = self.max.unwrap_or(MAX_FRACTION_DIGITS_CAP).max(min);
        FormatOptions::default().with_fraction_digits(min, max)
    }
}

/// Render a canonical decimal for display in `locale`.
///
/// The fraction is truncated to `bounds.max` and padded to `bounds.min`.
/// Returns an empty string for non-canonical input.
pub fn format_canonical_decimal(value: &str, locale: Locale, bounds: FractionBounds) -> String {
    let formatter = NumberFormatter::new(locale, bounds.format_options());
    render_canonical_decimal(&formatter, value, bounds)
}

/// [`format_canonical_decimal`] with a caller-provided (usually cached)
/// formatter.
pub fn render_canonical_decimal(
    formatter: &NumberFormatter,
    value: &str,
    bounds: FractionBounds,
) -> String {
    let Some(parts) = DecimalParts::split(value.trim()) else {
        return String::new();
    };

    let mut fraction: String = match bounds.max {
        Some(max) => parts.fraction.chars().take(max).collect(),
        None => parts.fraction.to_string(),
    };
    if let Some(min) = bounds.min {
        while fraction.len() < min {
            fraction.push('0');
        }
    }

    // Only digits reach here
    let magnitude: BigInt = parts.integer.parse().unwrap_or_default();
    let zero = magnitude == BigInt::default() && fraction.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(value.len() * 2);
    if parts.negative && !zero {
        out.push('-');
    }
    out.push_str(&formatter.format_integer(&magnitude));
    if !fraction.is_empty() {
        out.push(formatter.locale().decimal_separator());
        out.push_str(&fraction);
    }
    out
}

/// Cache key options matching [`format_canonical_decimal`]'s formatter.
pub(crate) fn display_format_options(bounds: FractionBounds) -> FormatOptions {
    bounds.format_options()
}
