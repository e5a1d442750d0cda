// ============================================================================
// Locale
// Decimal and grouping conventions for supported display locales
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported display locales.
///
/// Each locale fixes the decimal separator typed and displayed by users, the
/// grouping character used for display, and the digit grouping layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Locale {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en-US"))]
    EnUs,
    #[cfg_attr(feature = "serde", serde(rename = "en-GB"))]
    EnGb,
    /// Indian grouping (12,34,567)
    #[cfg_attr(feature = "serde", serde(rename = "en-IN"))]
    EnIn,
    #[cfg_attr(feature = "serde", serde(rename = "pt-BR"))]
    PtBr,
    #[cfg_attr(feature = "serde", serde(rename = "pt-PT"))]
    PtPt,
    #[cfg_attr(feature = "serde", serde(rename = "es-ES"))]
    EsEs,
    #[cfg_attr(feature = "serde", serde(rename = "es-MX"))]
    EsMx,
    #[cfg_attr(feature = "serde", serde(rename = "de-DE"))]
    DeDe,
    #[cfg_attr(feature = "serde", serde(rename = "de-CH"))]
    DeCh,
    #[cfg_attr(feature = "serde", serde(rename = "fr-FR"))]
    FrFr,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 10] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::EnIn,
        Locale::PtBr,
        Locale::PtPt,
        Locale::EsEs,
        Locale::EsMx,
        Locale::DeDe,
        Locale::DeCh,
        Locale::FrFr,
    ];

    /// BCP 47 tag
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::EnIn => "en-IN",
            Locale::PtBr => "pt-BR",
            Locale::PtPt => "pt-PT",
            Locale::EsEs => "es-ES",
            Locale::EsMx => "es-MX",
            Locale::DeDe => "de-DE",
            Locale::DeCh => "de-CH",
            Locale::FrFr => "fr-FR",
        }
    }

    /// Decimal separator, always `.` or `,`.
    pub const fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnIn | Locale::EsMx | Locale::DeCh => '.',
            Locale::PtBr | Locale::PtPt | Locale::EsEs | Locale::DeDe | Locale::FrFr => ',',
        }
    }

    /// Grouping separator ignored while parsing typed input: the complement
    /// of the decimal separator.
    pub const fn input_grouping_separator(self) -> char {
        match self.decimal_separator() {
            '.' => ',',
            _ => '.',
        }
    }

    /// Grouping separator used for display.
    pub const fn grouping_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnIn | Locale::EsMx => ',',
            Locale::PtBr | Locale::EsEs | Locale::DeDe => '.',
            Locale::PtPt => '\u{00A0}',
            Locale::FrFr => '\u{202F}',
            Locale::DeCh => '\u{2019}',
        }
    }

    /// Primary (rightmost) and secondary group sizes.
    pub const fn grouping_sizes(self) -> (usize, usize) {
        match self {
            Locale::EnIn => (3, 2),
            _ => (3, 3),
        }
    }

    /// Integer digits required before grouping kicks in is
    /// `primary + min_grouping_digits`.
    pub const fn min_grouping_digits(self) -> usize {
        match self {
            Locale::EsEs | Locale::PtPt => 2,
            _ => 1,
        }
    }

    /// Resolve a BCP 47 tag, falling back to the language subtag.
    ///
    /// # Errors
    /// Returns `UnsupportedLocale` when neither the full tag nor the language
    /// is known.
    pub fn from_tag(tag: &str) -> Result<Self, NumericError> {
        let normalized = tag.trim().replace('_', "-");

        if let Some(locale) = Self::ALL
            .iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
        {
            return Ok(*locale);
        }

        let language = normalized
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::EnUs),
            "pt" => Ok(Locale::PtBr),
            "es" => Ok(Locale::EsEs),
            "de" => Ok(Locale::DeDe),
            "fr" => Ok(Locale::FrFr),
            _ => Err(NumericError::UnsupportedLocale),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(Locale::PtBr.decimal_separator(), ',');
        assert_eq!(Locale::PtBr.input_grouping_separator(), '.');
        assert_eq!(Locale::EnUs.decimal_separator(), '.');
        assert_eq!(Locale::EnUs.input_grouping_separator(), ',');
        assert_eq!(Locale::FrFr.grouping_separator(), '\u{202F}');
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("pt-BR"), Ok(Locale::PtBr));
        assert_eq!(Locale::from_tag("pt_br"), Ok(Locale::PtBr));
        assert_eq!(Locale::from_tag("en"), Ok(Locale::EnUs));
        assert_eq!(Locale::from_tag("es-AR"), Ok(Locale::EsEs));
        assert_eq!(Locale::from_tag("ja-JP"), Err(NumericError::UnsupportedLocale));
        assert_eq!("de-CH".parse::<Locale>(), Ok(Locale::DeCh));
    }

    #[test]
    fn test_tag_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Ok(locale));
        }
    }
}
