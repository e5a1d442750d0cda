// ============================================================================
// Phone Metadata
// Selector countries: library dialing and length data plus input layouts
// ============================================================================

use crate::domain::{CountryCode, CountryOption};
use crate::utils::{fill_template, slot_count, DigitPattern};
use phonenumber::metadata::DATABASE;
use std::sync::LazyLock;

/// Longest digit string ever probed when deriving a country's max length
const MAX_PROBE_DIGITS: usize = 17;

/// Outcome of a length check that did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthIssue {
    /// No national digits at all
    NotANumber,
    TooShort,
    TooLong,
    /// Between the shortest and longest lengths but not a length the
    /// country uses
    InvalidLength,
}

// ============================================================================
// Raw Table
// ============================================================================

struct RawFormat {
    /// Leading-digit patterns; empty matches everything
    leading: &'static [&'static str],
    /// National layout, `x` marks a digit slot
    national: &'static str,
    /// Layout after `+<dial code> `
    international: &'static str,
}

/// Input-side data the phone library does not carry. Dial code and
/// possible lengths come from the library metadata.
struct RawMetadata {
    country: CountryCode,
    /// Trunk prefix dialled before national numbers (never the first digit
    /// of a national significant number in these countries)
    national_prefix: Option<&'static str>,
    /// `{}` is replaced by the formatted national number
    national_prefix_formatting: &'static str,
    /// National format always shows the trunk prefix
    prefix_in_national_format: bool,
    placeholder: &'static str,
    /// `None` derives the value by probing the length check
    max_digits: Option<usize>,
    formats: &'static [RawFormat],
}

// Ordered like `CountryCode::ALL`
const RAW_METADATA: [RawMetadata; 7] = [
    RawMetadata {
        country: CountryCode::Br,
        national_prefix: None,
        national_prefix_formatting: "{}",
        prefix_in_national_format: false,
        placeholder: "(11) 96123-4567",
        max_digits: None,
        formats: &[
            RawFormat {
                leading: &["[1-9][1-9]9"],
                national: "(xx) xxxxx-xxxx",
                international: "xx xxxxx-xxxx",
            },
            RawFormat {
                leading: &["[1-9][1-9][2-5]"],
                national: "(xx) xxxx-xxxx",
                international: "xx xxxx-xxxx",
            },
        ],
    },
    RawMetadata {
        country: CountryCode::Us,
        national_prefix: Some("1"),
        national_prefix_formatting: "1 {}",
        prefix_in_national_format: false,
        placeholder: "(201) 555-0123",
        max_digits: None,
        formats: &[RawFormat {
            leading: &["[2-9]"],
            national: "(xxx) xxx-xxxx",
            international: "xxx-xxx-xxxx",
        }],
    },
    RawMetadata {
        country: CountryCode::Co,
        national_prefix: None,
        national_prefix_formatting: "{}",
        prefix_in_national_format: false,
        placeholder: "300 1234567",
        max_digits: None,
        formats: &[
            RawFormat {
                leading: &["3"],
                national: "xxx xxxxxxx",
                international: "xxx xxxxxxx",
            },
            RawFormat {
                leading: &["60"],
                national: "xxx xxxxxxx",
                international: "xxx xxxxxxx",
            },
        ],
    },
    RawMetadata {
        country: CountryCode::Pt,
        national_prefix: None,
        national_prefix_formatting: "{}",
        prefix_in_national_format: false,
        placeholder: "912 345 678",
        max_digits: Some(9),
        formats: &[RawFormat {
            leading: &["[29]"],
            national: "xxx xxx xxx",
            international: "xxx xxx xxx",
        }],
    },
    RawMetadata {
        country: CountryCode::Gb,
        national_prefix: Some("0"),
        national_prefix_formatting: "0{}",
        prefix_in_national_format: true,
        placeholder: "07400 123456",
        // Trunk prefix plus ten national digits
        max_digits: Some(11),
        formats: &[
            RawFormat {
                leading: &["7"],
                national: "xxxx xxxxxx",
                international: "xxxx xxxxxx",
            },
            RawFormat {
                leading: &["2"],
                national: "xx xxxx xxxx",
                international: "xx xxxx xxxx",
            },
            RawFormat {
                leading: &["1"],
                national: "xxxx xxxxxx",
                international: "xxxx xxxxxx",
            },
        ],
    },
    RawMetadata {
        country: CountryCode::Es,
        national_prefix: None,
        national_prefix_formatting: "{}",
        prefix_in_national_format: false,
        placeholder: "612 34 56 78",
        max_digits: None,
        formats: &[
            RawFormat {
                leading: &["[89]1"],
                national: "xx xxx xx xx",
                international: "xx xxx xx xx",
            },
            RawFormat {
                leading: &["[5-9]"],
                national: "xxx xx xx xx",
                international: "xxx xx xx xx",
            },
        ],
    },
    RawMetadata {
        country: CountryCode::Mx,
        national_prefix: None,
        national_prefix_formatting: "{}",
        prefix_in_national_format: false,
        placeholder: "222 123 4567",
        max_digits: None,
        formats: &[
            RawFormat {
                leading: &["33", "55", "81"],
                national: "xx xxxx xxxx",
                international: "xx xxxx xxxx",
            },
            RawFormat {
                leading: &["[2-9]"],
                national: "xxx xxx xxxx",
                international: "xxx xxx xxxx",
            },
        ],
    },
];

// ============================================================================
// Compiled Metadata
// ============================================================================

/// One national/international layout and the leading digits it applies to.
#[derive(Debug)]
pub struct NumberFormat {
    leading: Vec<DigitPattern>,
    national: &'static str,
    international: &'static str,
    slots: usize,
}

impl NumberFormat {
    /// Every leading pattern is unknown or compatible with `national_number`.
    pub fn is_compatible(&self, national_number: &str) -> bool {
        self.leading.is_empty() || self.leading.iter().any(|p| p.is_compatible(national_number))
    }

    pub fn national_template(&self) -> &'static str {
        self.national
    }

    pub fn international_template(&self) -> &'static str {
        self.international
    }

    pub fn slots(&self) -> usize {
        self.slots
    }
}

/// Dialing, length and layout rules for one selector country.
#[derive(Debug)]
pub struct PhoneMetadata {
    country: CountryCode,
    dial_code: String,
    national_prefix: Option<&'static str>,
    national_prefix_formatting: &'static str,
    prefix_in_national_format: bool,
    /// Fixed-line and mobile national lengths, ascending
    possible_lengths: Vec<usize>,
    placeholder: &'static str,
    max_digits: usize,
    formats: Vec<NumberFormat>,
}

impl PhoneMetadata {
    fn compile(raw: &RawMetadata) -> Self {
        let library = DATABASE
            .by_id(raw.country.as_str())
            .expect("phone library has metadata for every selector country");

        let descriptors = library.descriptors();
        let mut possible_lengths: Vec<usize> = descriptors
            .fixed_line()
            .into_iter()
            .chain(descriptors.mobile())
            .flat_map(|d| d.possible_length().iter().map(|len| usize::from(*len)))
            .collect();
        possible_lengths.sort_unstable();
        possible_lengths.dedup();

        let formats = raw
            .formats
            .iter()
            .map(|format| NumberFormat {
                leading: format
                    .leading
                    .iter()
                    .map(|p| DigitPattern::parse(p).expect("leading digits pattern must parse"))
                    .collect(),
                national: format.national,
                international: format.international,
                slots: slot_count(format.national),
            })
            .collect();

        let mut metadata = Self {
            country: raw.country,
            dial_code: library.country_code().to_string(),
            national_prefix: raw.national_prefix,
            national_prefix_formatting: raw.national_prefix_formatting,
            prefix_in_national_format: raw.prefix_in_national_format,
            possible_lengths,
            placeholder: raw.placeholder,
            max_digits: 0,
            formats,
        };

        metadata.max_digits = match raw.max_digits {
            Some(max) => max,
            None => metadata.derive_max_digits(),
        };
        metadata
    }

    /// Probe the length check with all-nines strings of increasing length
    /// and keep the last length that was not too long.
    fn derive_max_digits(&self) -> usize {
        let mut accepted = 0;
        for len in 1..=MAX_PROBE_DIGITS {
            if self.check_digits(&"9".repeat(len)) == Some(LengthIssue::TooLong) {
                break;
            }
            accepted = len;
        }

        tracing::debug!(
            "Derived max national digits for {}: {}",
            self.country,
            accepted
        );
        accepted
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn national_prefix(&self) -> Option<&'static str> {
        self.national_prefix
    }

    pub fn possible_lengths(&self) -> &[usize] {
        &self.possible_lengths
    }

    pub fn formats(&self) -> &[NumberFormat] {
        &self.formats
    }

    /// Separate a typed trunk prefix from the national significant number.
    pub fn split_national_prefix<'a>(&self, digits: &'a str) -> (bool, &'a str) {
        match self.national_prefix {
            Some(prefix) if digits.starts_with(prefix) => (true, &digits[prefix.len()..]),
            _ => (false, digits),
        }
    }

    /// Length check of a national significant number.
    pub fn check_length(&self, national_number: &str) -> Option<LengthIssue> {
        let len = national_number.len();
        let min = self.possible_lengths.iter().copied().min().unwrap_or(0);
        let max = self.possible_lengths.iter().copied().max().unwrap_or(0);

        if len == 0 {
            Some(LengthIssue::NotANumber)
        } else if len < min {
            Some(LengthIssue::TooShort)
        } else if len > max {
            Some(LengthIssue::TooLong)
        } else if !self.possible_lengths.contains(&len) {
            Some(LengthIssue::InvalidLength)
        } else {
            None
        }
    }

    /// Length check of typed national digits, trunk prefix included.
    pub fn check_digits(&self, digits: &str) -> Option<LengthIssue> {
        let (_, national_number) = self.split_national_prefix(digits);
        self.check_length(national_number)
    }

    pub fn is_possible(&self, national_number: &str) -> bool {
        self.check_length(national_number).is_none()
    }

    /// First layout compatible with `national_number` with room for all of
    /// its digits.
    pub fn format_for(&self, national_number: &str) -> Option<&NumberFormat> {
        self.formats
            .iter()
            .find(|f| f.is_compatible(national_number) && f.slots >= national_number.len())
    }

    /// Wrap a formatted national number with the trunk prefix.
    pub fn apply_national_prefix(&self, formatted: &str) -> String {
        self.national_prefix_formatting.replace("{}", formatted)
    }

    /// National layout, trunk prefix included where the country always
    /// shows it.
    pub fn format_national(&self, national_number: &str) -> String {
        let body = match self.format_for(national_number) {
            Some(format) => fill_template(format.national, national_number),
            None => national_number.to_string(),
        };

        if self.prefix_in_national_format {
            self.apply_national_prefix(&body)
        } else {
            body
        }
    }

    /// `+<dial code> <layout>`
    pub fn format_international(&self, national_number: &str) -> String {
        let body = match self.format_for(national_number) {
            Some(format) => fill_template(format.international, national_number),
            None => national_number.to_string(),
        };
        format!("+{} {}", self.dial_code, body)
    }

    pub fn country_option(&self) -> CountryOption {
        CountryOption {
            country: self.country,
            dial_code: self.dial_code.clone(),
            placeholder: self.placeholder,
            max_digits: self.max_digits,
        }
    }
}

static METADATA: LazyLock<Vec<PhoneMetadata>> =
    LazyLock::new(|| RAW_METADATA.iter().map(PhoneMetadata::compile).collect());

static COUNTRY_OPTIONS: LazyLock<Vec<CountryOption>> =
    LazyLock::new(|| METADATA.iter().map(PhoneMetadata::country_option).collect());

fn index_of(country: CountryCode) -> usize {
    CountryCode::ALL
        .iter()
        .position(|c| *c == country)
        .unwrap_or_default()
}

/// Metadata for `country`.
pub fn phone_metadata(country: CountryCode) -> &'static PhoneMetadata {
    &METADATA[index_of(country)]
}

/// Metadata whose dial code starts `digits` (1 to 3 digits).
pub fn phone_metadata_for_dial_code(digits: &str) -> Option<&'static PhoneMetadata> {
    (1..=3.min(digits.len())).find_map(|len| {
        let prefix = &digits[..len];
        METADATA.iter().find(|m| m.dial_code == prefix)
    })
}

/// Selector entry for `country`: dial code, placeholder and max digits.
pub fn country_option(country: CountryCode) -> &'static CountryOption {
    &COUNTRY_OPTIONS[index_of(country)]
}

/// Every selector entry, in `CountryCode::ALL` order.
pub fn country_options() -> &'static [CountryOption] {
    &COUNTRY_OPTIONS
}
