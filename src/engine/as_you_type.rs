// ============================================================================
// As-You-Type Formatter
// Progressive masking driven by per-country layout rules
// ============================================================================

use super::phone_metadata::PhoneMetadata;
use crate::interfaces::{ProgressiveFormatter, ProgressiveOutput};
use crate::utils::fill_template;

/// Picks the first layout compatible with the digits typed so far and fills
/// it up to the last digit. A typed trunk prefix is kept in front.
///
/// Input that fits no layout is returned unmasked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsYouTypeFormatter;

impl AsYouTypeFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressiveFormatter for AsYouTypeFormatter {
    fn format(&self, metadata: &PhoneMetadata, digits: &str) -> ProgressiveOutput {
        let (had_prefix, national_number) = metadata.split_national_prefix(digits);

        if national_number.is_empty() {
            return ProgressiveOutput {
                formatted: digits.to_string(),
                national_number: String::new(),
            };
        }

        let formatted = match metadata.format_for(national_number) {
            Some(format) => {
                let body = fill_template(format.national_template(), national_number);
                if had_prefix {
                    metadata.apply_national_prefix(&body)
                } else {
                    body
                }
            }
            None => digits.to_string(),
        };

        ProgressiveOutput {
            formatted,
            national_number: national_number.to_string(),
        }
    }

    fn name(&self) -> &str {
        "AsYouType"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryCode;
    use crate::engine::phone_metadata;

    fn format(country: CountryCode, digits: &str) -> String {
        AsYouTypeFormatter.format(phone_metadata(country), digits).formatted
    }

    #[test]
    fn test_progressive_brazil() {
        assert_eq!(format(CountryCode::Br, "1"), "(1");
        assert_eq!(format(CountryCode::Br, "11"), "(11");
        assert_eq!(format(CountryCode::Br, "119"), "(11) 9");
        assert_eq!(format(CountryCode::Br, "1199999"), "(11) 99999");
        assert_eq!(format(CountryCode::Br, "11999999999"), "(11) 99999-9999");
        assert_eq!(format(CountryCode::Br, "1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn test_progressive_us() {
        assert_eq!(format(CountryCode::Us, "2125"), "(212) 5");
        assert_eq!(format(CountryCode::Us, "2125550142"), "(212) 555-0142");
    }

    #[test]
    fn test_trunk_prefix_kept() {
        assert_eq!(format(CountryCode::Gb, "07400123456"), "07400 123456");
        assert_eq!(format(CountryCode::Gb, "7400123456"), "7400 123456");
        assert_eq!(format(CountryCode::Us, "12125550142"), "1 (212) 555-0142");
        assert_eq!(format(CountryCode::Us, "1"), "1");
    }

    #[test]
    fn test_unmatched_input_unmasked() {
        // No Brazilian layout starts with a third digit of 7
        assert_eq!(format(CountryCode::Br, "1178"), "1178");

        let output = AsYouTypeFormatter.format(phone_metadata(CountryCode::Br), "1178");
        assert_eq!(output.national_number, "1178");
    }

    #[test]
    fn test_leading_digit_layouts() {
        assert_eq!(format(CountryCode::Mx, "5512345678"), "55 1234 5678");
        assert_eq!(format(CountryCode::Mx, "2221234567"), "222 123 4567");
        assert_eq!(format(CountryCode::Es, "912345678"), "91 234 56 78");
        assert_eq!(format(CountryCode::Es, "612345678"), "612 34 56 78");
    }
}
