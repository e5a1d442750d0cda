// ============================================================================
// Mask Configuration
// Field kind, locale, country and rule settings for a masked input
// ============================================================================

use super::country::CountryCode;
use super::locale::Locale;
use super::rules::{CountryChangePolicy, DecimalRules, PhoneRules};
use crate::engine::{DEFAULT_MAX_FRACTION_DIGITS, MAX_FRACTION_DIGITS_CAP};
use crate::numeric::{compare_canonical_decimals, is_canonical_decimal};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction digits money values are committed with
pub const MONEY_FRACTION_DIGITS: usize = 2;

// ============================================================================
// Field Kind
// ============================================================================

/// What a masked input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    /// Currency amount, committed with exactly two fraction digits
    Money,

    /// Plain decimal (or integer with `max_fraction_digits == 0`)
    Number,

    /// National-format phone number with an E.164 machine value
    Phone,
}

impl FieldKind {
    pub fn is_decimal(self) -> bool {
        matches!(self, FieldKind::Money | FieldKind::Number)
    }
}

// ============================================================================
// Mask Configuration
// ============================================================================

/// Configuration for creating a masked input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaskConfig {
    pub kind: FieldKind,

    /// Display and typing conventions for decimal fields
    pub locale: Locale,

    /// Selected country for phone fields
    pub country: CountryCode,

    pub decimal_rules: DecimalRules,

    pub phone_rules: PhoneRules,

    /// Fraction digits kept while typing (decimal fields)
    pub max_fraction_digits: usize,

    /// Accept a leading `-` (decimal fields)
    pub allow_negative: bool,

    /// What happens to a phone draft when the country changes
    pub country_change_policy: CountryChangePolicy,
}

impl MaskConfig {
    /// Create a new configuration with defaults for everything but the kind
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            locale: Locale::default(),
            country: CountryCode::default(),
            decimal_rules: DecimalRules::default(),
            phone_rules: PhoneRules::default(),
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            allow_negative: false,
            country_change_policy: CountryChangePolicy::default(),
        }
    }

    /// Builder method: Set locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builder method: Set country
    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = country;
        self
    }

    /// Builder method: Set decimal validation rules
    pub fn with_decimal_rules(mut self, rules: DecimalRules) -> Self {
        self.decimal_rules = rules;
        self
    }

    /// Builder method: Set phone validation rules
    pub fn with_phone_rules(mut self, rules: PhoneRules) -> Self {
        self.phone_rules = rules;
        self
    }

    /// Builder method: Set fraction digits kept while typing
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Builder method: Accept negative values
    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Builder method: Set the country change policy
    pub fn with_country_change_policy(mut self, policy: CountryChangePolicy) -> Self {
        self.country_change_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_CAP {
            return Err(format!(
                "Max fraction digits cannot exceed {}",
                MAX_FRACTION_DIGITS_CAP
            ));
        }

        match self.kind {
            FieldKind::Money if self.max_fraction_digits < MONEY_FRACTION_DIGITS => {
                return Err(format!(
                    "Money fields need at least {} fraction digits",
                    MONEY_FRACTION_DIGITS
                ));
            }
            FieldKind::Phone if self.allow_negative => {
                return Err("Phone fields cannot accept negative values".to_string());
            }
            _ => {}
        }

        let rules = &self.decimal_rules;

        if let Some(min) = &rules.min {
            if !is_canonical_decimal(min) {
                return Err(format!("Minimum '{}' is not a canonical decimal", min));
            }
        }

        if let Some(max) = &rules.max {
            if !is_canonical_decimal(max) {
                return Err(format!("Maximum '{}' is not a canonical decimal", max));
            }
            if rules.greater_than_zero
                && compare_canonical_decimals(max, "0") != Some(Ordering::Greater)
            {
                return Err("Maximum must be positive when greater than zero is set".to_string());
            }
        }

        if let (Some(min), Some(max)) = (&rules.min, &rules.max) {
            if compare_canonical_decimals(min, max) == Some(Ordering::Greater) {
                return Err("Minimum cannot be greater than maximum".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MaskConfig {
    /// Money input
    /// - Two fraction digits while typing and on blur
    /// - Non-negative
    pub fn money(locale: Locale) -> Self {
        Self::new(FieldKind::Money)
            .with_locale(locale)
            .with_max_fraction_digits(MONEY_FRACTION_DIGITS)
    }

    /// Decimal input with the default fraction budget
    pub fn number(locale: Locale) -> Self {
        Self::new(FieldKind::Number).with_locale(locale)
    }

    /// Integer-only input
    /// - The decimal separator is ignored
    pub fn integer(locale: Locale) -> Self {
        Self::new(FieldKind::Number)
            .with_locale(locale)
            .with_max_fraction_digits(0)
    }

    /// Phone input for `country`
    /// - Short numbers reported as incomplete
    pub fn phone(country: CountryCode) -> Self {
        Self::new(FieldKind::Phone)
            .with_country(country)
            .with_phone_rules(PhoneRules::new().validate_incomplete())
    }
}

// ============================================================================
// JSON Exchange
// ============================================================================

#[cfg(feature = "serde")]
impl MaskConfig {
    /// Serialize for exchange with a frontend
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
