// ============================================================================
// Phone Number
// A national significant number bound to its calling code
// ============================================================================

use super::phone_metadata::{phone_metadata, phone_metadata_for_dial_code, LengthIssue, PhoneMetadata};
use crate::domain::CountryCode;
use crate::utils::digits_only;
use phonenumber::country::Id;
use phonenumber::Mode;
use std::fmt;

/// Library region of a selector country
fn library_region(country: CountryCode) -> Option<Id> {
    country.as_str().parse().ok()
}

fn selector_country(region: &Id) -> Option<CountryCode> {
    CountryCode::ALL
        .into_iter()
        .find(|code| library_region(*code).as_ref() == Some(region))
}

/// Parsed phone number: calling code plus national significant number (no
/// trunk prefix, no dial code).
///
/// Numbers of a selector country use its layouts and length rules. Any
/// other region the phone library knows is carried with `country() == None`
/// and formatted by the library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country: Option<CountryCode>,
    dial_code: String,
    national_number: String,
    had_national_prefix: bool,
}

impl PhoneNumber {
    /// Parse nationally typed text for `country`. Non-digits are dropped and
    /// a leading trunk prefix is split off.
    ///
    /// Returns `None` when no national digits remain.
    pub fn from_national(text: &str, country: CountryCode) -> Option<Self> {
        let digits = digits_only(text);
        let metadata = phone_metadata(country);
        let (had_national_prefix, national_number) = metadata.split_national_prefix(&digits);

        if national_number.is_empty() {
            return None;
        }

        Some(Self {
            country: Some(country),
            dial_code: metadata.dial_code().to_string(),
            national_number: national_number.to_string(),
            had_national_prefix,
        })
    }

    /// Build from an already separated national significant number.
    pub fn from_national_significant(national_number: &str, country: CountryCode) -> Option<Self> {
        let national_number = digits_only(national_number);
        if national_number.is_empty() {
            return None;
        }

        Some(Self {
            country: Some(country),
            dial_code: phone_metadata(country).dial_code().to_string(),
            national_number,
            had_national_prefix: false,
        })
    }

    /// Parse `+<dial code><number>` for any calling code the phone library
    /// knows.
    ///
    /// Partial numbers the library refuses still resolve when the dial code
    /// belongs to a selector country. Returns `None` without a leading `+`,
    /// for unknown dial codes, or when nothing follows the dial code.
    pub fn from_international(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.starts_with('+') {
            return None;
        }

        let digits = digits_only(text);
        let (dial_code, country) = match phonenumber::parse(None, format!("+{}", digits)) {
            Ok(parsed) => {
                let dial_code = parsed.country().code().to_string();
                let country = match parsed.country().id() {
                    Some(region) => selector_country(&region),
                    None => phone_metadata_for_dial_code(&dial_code).map(PhoneMetadata::country),
                };
                (dial_code, country)
            }
            Err(_) => {
                let metadata = phone_metadata_for_dial_code(&digits)?;
                (metadata.dial_code().to_string(), Some(metadata.country()))
            }
        };

        let national_number = digits.strip_prefix(dial_code.as_str())?;
        if national_number.is_empty() {
            return None;
        }

        Some(Self {
            country,
            national_number: national_number.to_string(),
            dial_code,
            had_national_prefix: false,
        })
    }

    /// International when `text` starts with `+`, national for
    /// `default_country` otherwise.
    pub fn parse(text: &str, default_country: CountryCode) -> Option<Self> {
        if text.trim_start().starts_with('+') {
            Self::from_international(text)
        } else {
            Self::from_national(text, default_country)
        }
    }

    /// Selector country, `None` for other regions
    pub fn country(&self) -> Option<CountryCode> {
        self.country
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn had_national_prefix(&self) -> bool {
        self.had_national_prefix
    }

    pub fn metadata(&self) -> Option<&'static PhoneMetadata> {
        self.country.map(phone_metadata)
    }

    /// Length check against the selector country's possible lengths. Other
    /// regions were already length-checked by the library parser.
    pub fn length_issue(&self) -> Option<LengthIssue> {
        self.metadata()
            .and_then(|metadata| metadata.check_length(&self.national_number))
    }

    /// Plausible length for the country.
    pub fn is_possible(&self) -> bool {
        self.length_issue().is_none()
    }

    /// Plausible length and a number range the phone library reports as
    /// assigned.
    pub fn is_valid(&self) -> bool {
        self.is_possible()
            && self
                .library_number()
                .is_some_and(|number| phonenumber::is_valid(&number))
    }

    /// `+<dial code><national number>`
    pub fn to_e164(&self) -> String {
        format!("+{}{}", self.dial_code, self.national_number)
    }

    /// National layout of the selector country; other regions are always
    /// shown internationally.
    pub fn format_national(&self) -> String {
        match self.metadata() {
            Some(metadata) => metadata.format_national(&self.national_number),
            None => self.format_international(),
        }
    }

    pub fn format_international(&self) -> String {
        if let Some(metadata) = self.metadata() {
            return metadata.format_international(&self.national_number);
        }

        self.library_number()
            .filter(phonenumber::is_valid)
            .map(|number| number.format().mode(Mode::International).to_string())
            .unwrap_or_else(|| format!("+{} {}", self.dial_code, self.national_number))
    }

    fn library_number(&self) -> Option<phonenumber::PhoneNumber> {
        phonenumber::parse(None, self.to_e164()).ok()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_e164())
    }
}
