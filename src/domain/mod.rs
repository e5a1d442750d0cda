// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod country;
pub mod draft;
pub mod locale;
pub mod rules;

pub use config::{FieldKind, MaskConfig, MONEY_FRACTION_DIGITS};
pub use country::{CountryCode, CountryOption};
pub use draft::{DecimalDraft, PhoneDraft, PhoneNormalization};
pub use locale::Locale;
pub use rules::{
    CountryChangePolicy, DecimalError, DecimalRules, PhoneError, PhoneRules,
};
