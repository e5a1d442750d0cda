// ============================================================================
// Phone Parser
// Raw input to bounded national digits, masked drafts and E.164 values
// ============================================================================

use super::as_you_type::AsYouTypeFormatter;
use super::phone_metadata::{phone_metadata, LengthIssue};
use super::phone_number::PhoneNumber;
use super::placeholder_mask::PlaceholderMaskFormatter;
use crate::domain::{CountryChangePolicy, CountryCode, PhoneDraft, PhoneNormalization};
use crate::interfaces::ProgressiveFormatter;
use crate::utils::digits_only;

/// Reduce arbitrary typed or pasted text to at most the country's maximum
/// number of national digits.
///
/// A leading dial code is dropped when the digits are longer than the
/// maximum (a pasted international number), then digits are trimmed from the
/// end while the length check reports "too long".
pub fn bound_national_digits(raw: &str, country: CountryCode) -> String {
    let metadata = phone_metadata(country);
    let mut digits = digits_only(raw);

    if digits.starts_with(metadata.dial_code()) && digits.len() > metadata.max_digits() {
        digits.replace_range(..metadata.dial_code().len(), "");
    }

    while !digits.is_empty() && metadata.check_digits(&digits) == Some(LengthIssue::TooLong) {
        digits.pop();
    }

    digits.truncate(metadata.max_digits());
    digits
}

/// Phone parsing with a pluggable progressive formatter.
///
/// The placeholder mask of the country is the authoritative fallback: it is
/// used whenever the progressive formatter leaves the digits unmasked or its
/// output no longer carries exactly the typed digits.
pub struct PhoneParser {
    formatter: Box<dyn ProgressiveFormatter>,
    fallback: PlaceholderMaskFormatter,
}

impl Default for PhoneParser {
    fn default() -> Self {
        Self::new(Box::new(AsYouTypeFormatter::new()))
    }
}

impl PhoneParser {
    pub fn new(formatter: Box<dyn ProgressiveFormatter>) -> Self {
        Self {
            formatter,
            fallback: PlaceholderMaskFormatter,
        }
    }

    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    /// Bound `digits` to the country, mask them and compute the E.164 value,
    /// which is empty unless the number validates.
    pub fn parse_draft(&self, digits: &str, country: CountryCode) -> PhoneDraft {
        let digits = bound_national_digits(digits, country);
        if digits.is_empty() {
            return PhoneDraft::empty();
        }

        let metadata = phone_metadata(country);
        let output = self.formatter.format(metadata, &digits);

        let masked = output.formatted.chars().any(|c| !c.is_ascii_digit());
        let drifted = digits_only(&output.formatted) != digits;

        let display_value = if !masked || drifted {
            tracing::trace!(
                "{} output {:?} unusable for {}, using placeholder mask",
                self.formatter.name(),
                output.formatted,
                country
            );
            self.fallback.format(metadata, &digits).formatted
        } else {
            output.formatted
        };

        let number = if output.national_number.is_empty() {
            PhoneNumber::from_national(&digits, country)
        } else {
            PhoneNumber::from_national_significant(&output.national_number, country)
        };

        let canonical_value = number
            .filter(PhoneNumber::is_valid)
            .map(|n| n.to_e164())
            .unwrap_or_default();

        PhoneDraft {
            display_value,
            canonical_value,
        }
    }

    /// Commit a value on blur or explicit assignment.
    ///
    /// `+`-prefixed values are read as international numbers, shown nationally
    /// when they belong to `country` and internationally otherwise. Anything
    /// else is bounded to `country` and drafted.
    pub fn normalize_value(&self, value: &str, country: CountryCode) -> PhoneNormalization {
        let value = value.trim();
        if value.is_empty() {
            return PhoneNormalization::default();
        }

        if value.starts_with('+') {
            return match PhoneNumber::from_international(value) {
                Some(number) => {
                    let is_valid = number.is_valid();
                    PhoneNormalization {
                        display_value: if number.country() == Some(country) {
                            number.format_national()
                        } else {
                            number.format_international()
                        },
                        canonical_value: if is_valid {
                            number.to_e164()
                        } else {
                            String::new()
                        },
                        is_valid,
                        is_possible: number.is_possible(),
                    }
                }
                None => PhoneNormalization {
                    display_value: value.to_string(),
                    ..PhoneNormalization::default()
                },
            };
        }

        let digits = bound_national_digits(value, country);
        let draft = self.parse_draft(&digits, country);
        let number = PhoneNumber::from_national(&digits, country);

        PhoneNormalization {
            display_value: draft.display_value,
            canonical_value: draft.canonical_value,
            is_valid: number.as_ref().is_some_and(PhoneNumber::is_valid),
            is_possible: number.as_ref().is_some_and(PhoneNumber::is_possible),
        }
    }

    /// Re-derive a field after the country selector changed.
    ///
    /// An existing canonical value is country independent and is re-displayed
    /// for the new country. Otherwise the typed text is re-parsed or dropped
    /// according to `policy`.
    pub fn reprocess_country(
        &self,
        display_value: &str,
        canonical_value: &str,
        country: CountryCode,
        policy: CountryChangePolicy,
    ) -> PhoneDraft {
        if !canonical_value.trim().is_empty() {
            return self.normalize_value(canonical_value, country).into_draft();
        }

        match policy {
            CountryChangePolicy::Discard => PhoneDraft::empty(),
            CountryChangePolicy::Reformat if display_value.trim_start().starts_with('+') => {
                self.normalize_value(display_value, country).into_draft()
            }
            CountryChangePolicy::Reformat => {
                self.parse_draft(display_value, country)
            }
        }
    }
}

/// [`PhoneParser::parse_draft`] with the default as-you-type formatter.
///
/// # Example
/// ```
/// use canonical_input::domain::CountryCode;
/// use canonical_input::engine::parse_phone_draft;
///
/// let draft = parse_phone_draft("11999999999", CountryCode::Br);
/// assert_eq!(draft.canonical_value, "+5511999999999");
/// assert_eq!(draft.display_value, "(11) 99999-9999");
/// ```
pub fn parse_phone_draft(digits: &str, country: CountryCode) -> PhoneDraft {
    PhoneParser::default().parse_draft(digits, country)
}

/// [`PhoneParser::normalize_value`] with the default as-you-type formatter.
pub fn normalize_phone_value(value: &str, country: CountryCode) -> PhoneNormalization {
    PhoneParser::default().normalize_value(value, country)
}

/// [`PhoneParser::reprocess_country`] with the default as-you-type formatter.
pub fn reprocess_phone_country(
    display_value: &str,
    canonical_value: &str,
    country: CountryCode,
    policy: CountryChangePolicy,
) -> PhoneDraft {
    PhoneParser::default().reprocess_country(display_value, canonical_value, country, policy)
}
