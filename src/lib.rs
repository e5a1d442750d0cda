// ============================================================================
// Canonical Input Library
// Locale-aware money, number and phone text canonicalization
// ============================================================================

//! # Canonical Input
//!
//! Turns what users type into money, number and phone fields into stable
//! machine values, and machine values back into locale-formatted text.
//!
//! ## Features
//!
//! - **Lenient decimal drafts**: any locale's typing is reduced to a
//!   canonical `-?\d+(\.\d+)?` string, keystroke by keystroke
//! - **Exact arithmetic**: comparison and grouping through big integers,
//!   never through floating point
//! - **Progressive phone masks** with per-country layouts, trunk prefixes
//!   and a placeholder-derived fallback
//! - **E.164 canonical phone values** only for numbers that validate
//! - **Pluggable strategies**: progressive phone formatters and accept
//!   handlers are traits
//!
//! ## Example
//!
//! ```rust
//! use canonical_input::prelude::*;
//! use std::sync::Arc;
//!
//! // Money field for Brazilian Portuguese
//! let money = create_from_config(
//!     MaskConfig::money(Locale::PtBr),
//!     Arc::new(NoOpAcceptHandler),
//! )
//! .unwrap();
//!
//! money.input("1234,5");
//! money.blur();
//! assert_eq!(money.display_value(), "1.234,50");
//! assert_eq!(money.canonical_value().as_deref(), Some("1234.50"));
//!
//! // Phone field for the US
//! let digits = bound_national_digits("2125550142999999", CountryCode::Us);
//! let draft = parse_phone_draft(&digits, CountryCode::Us);
//! assert_eq!(draft.canonical_value, "+12125550142");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CountryChangePolicy, CountryCode, CountryOption, DecimalDraft, DecimalError, DecimalRules,
        FieldKind, Locale, MaskConfig, PhoneDraft, PhoneError, PhoneNormalization, PhoneRules,
    };
    pub use crate::engine::{
        bound_national_digits, country_option, country_options, create_from_config,
        format_canonical_decimal, format_number, normalize_phone_value, parse_decimal_draft,
        parse_phone_draft, reprocess_phone_country, validate_canonical_decimal,
        validate_phone_value, AsYouTypeFormatter, DraftOptions, FormatOptions, FormatterCache,
        FractionBounds, MaskedInput, MaskedInputBuilder, PhoneNumber, PhoneParser,
        PhoneValidationInput, PlaceholderMaskFormatter,
    };
    pub use crate::interfaces::{
        AcceptEvent, AcceptHandler, FieldError, LoggingAcceptHandler, NoOpAcceptHandler,
        ProgressiveFormatter, ProgressiveOutput,
    };
    pub use crate::numeric::{
        compare_canonical_decimals, is_canonical_decimal, normalize_to_fixed_fraction,
        CanonicalDecimal, NumericError,
    };
}
