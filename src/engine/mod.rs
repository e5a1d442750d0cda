// ============================================================================
// Engine Module
// Contains the parsing, formatting and validation logic
// ============================================================================

mod as_you_type;
mod decimal_parser;
mod decimal_validation;
mod formatter_cache;
mod masked_input;
mod number_formatter;
mod phone_metadata;
mod phone_number;
mod phone_parser;
mod phone_validation;
mod placeholder_mask;

pub mod factory;

pub use as_you_type::AsYouTypeFormatter;
pub use decimal_parser::{
    format_canonical_decimal, parse_decimal_draft, parse_decimal_draft_with,
    render_canonical_decimal, DraftOptions, FractionBounds, DEFAULT_MAX_FRACTION_DIGITS,
    MAX_FRACTION_DIGITS_CAP,
};
pub use decimal_validation::validate_canonical_decimal;
pub use factory::{create_from_config, MaskedInputBuilder};
pub use formatter_cache::FormatterCache;
pub use masked_input::MaskedInput;
pub use number_formatter::{format_number, FormatOptions, NumberFormatter};
pub use phone_metadata::{
    country_option, country_options, phone_metadata, phone_metadata_for_dial_code, LengthIssue,
    NumberFormat, PhoneMetadata,
};
pub use phone_number::PhoneNumber;
pub use phone_parser::{
    bound_national_digits, normalize_phone_value, parse_phone_draft, reprocess_phone_country,
    PhoneParser,
};
pub use phone_validation::{validate_phone_value, PhoneValidationInput};
pub use placeholder_mask::{MaskPattern, PlaceholderMaskFormatter};
