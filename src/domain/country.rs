// ============================================================================
// Countries
// ISO 3166-1 codes and the per-country option shown by phone selectors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Countries offered by the phone country selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CountryCode {
    #[default]
    Br,
    Us,
    Co,
    Pt,
    Gb,
    Es,
    Mx,
}

impl CountryCode {
    pub const ALL: [CountryCode; 7] = [
        CountryCode::Br,
        CountryCode::Us,
        CountryCode::Co,
        CountryCode::Pt,
        CountryCode::Gb,
        CountryCode::Es,
        CountryCode::Mx,
    ];

    /// ISO 3166-1 alpha-2 code
    pub const fn as_str(self) -> &'static str {
        match self {
            CountryCode::Br => "BR",
            CountryCode::Us => "US",
            CountryCode::Co => "CO",
            CountryCode::Pt => "PT",
            CountryCode::Gb => "GB",
            CountryCode::Es => "ES",
            CountryCode::Mx => "MX",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CountryCode {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(NumericError::UnsupportedCountry)
    }
}

/// Read-only reference data for one entry of a country selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub country: CountryCode,

    /// Calling code without `+` (e.g. `"55"`)
    pub dial_code: String,

    /// Example national number shown as the input placeholder
    pub placeholder: &'static str,

    /// Maximum national digit count accepted by the input
    pub max_digits: usize,
}

impl CountryOption {
    /// Dial code with leading `+`
    pub fn dial_prefix(&self) -> String {
        format!("+{}", self.dial_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_parse() {
        assert_eq!("br".parse::<CountryCode>(), Ok(CountryCode::Br));
        assert_eq!(" US ".parse::<CountryCode>(), Ok(CountryCode::Us));
        assert_eq!("XX".parse::<CountryCode>(), Err(NumericError::UnsupportedCountry));
    }

    #[test]
    fn test_display() {
        assert_eq!(CountryCode::Gb.to_string(), "GB");
    }
}
