// ============================================================================
// Masked Input Factory
// Creates masked inputs with proper configuration
// ============================================================================

use crate::domain::config::{FieldKind, MaskConfig};
use crate::domain::{CountryChangePolicy, CountryCode, DecimalRules, Locale, PhoneRules};
use crate::engine::{FormatterCache, MaskedInput, PhoneParser};
use crate::interfaces::{AcceptHandler, ProgressiveFormatter};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a masked input from configuration
///
/// # Arguments
/// * `config` - Mask configuration
/// * `accept_handler` - Receives every accepted value
///
/// # Returns
/// * `Result<MaskedInput, String>` - Configured input or error
///
/// # Example
/// ```
/// use canonical_input::prelude::*;
/// use canonical_input::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = MaskConfig::money(Locale::PtBr);
/// let input = create_from_config(config, Arc::new(NoOpAcceptHandler)).unwrap();
/// input.input("1234,5");
/// assert_eq!(input.display_value(), "1.234,5");
/// ```
pub fn create_from_config(
    config: MaskConfig,
    accept_handler: Arc<dyn AcceptHandler>,
) -> Result<MaskedInput, String> {
    create_with(
        config,
        Arc::new(FormatterCache::new()),
        PhoneParser::default(),
        accept_handler,
    )
}

fn create_with(
    config: MaskConfig,
    formatters: Arc<FormatterCache>,
    phone_parser: PhoneParser,
    accept_handler: Arc<dyn AcceptHandler>,
) -> Result<MaskedInput, String> {
    // Validate configuration first
    config.validate()?;

    tracing::debug!(
        "Creating {:?} input (locale {}, country {}, phone formatter {})",
        config.kind,
        config.locale,
        config.country,
        phone_parser.formatter_name()
    );

    Ok(MaskedInput::new(config, formatters, phone_parser, accept_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating masked inputs with fluent API
///
/// Inputs built from one shared [`FormatterCache`] reuse each other's number
/// formatters.
///
/// # Example
/// ```
/// use canonical_input::prelude::*;
/// use canonical_input::engine::factory::MaskedInputBuilder;
/// use std::sync::Arc;
///
/// let cache = Arc::new(FormatterCache::new());
/// let input = MaskedInputBuilder::new(FieldKind::Number)
///     .locale(Locale::DeDe)
///     .max_fraction_digits(3)
///     .allow_negative()
///     .formatter_cache(Arc::clone(&cache))
///     .build(Arc::new(NoOpAcceptHandler))
///     .unwrap();
///
/// input.input("-1234,5678");
/// assert_eq!(input.canonical_value().as_deref(), Some("-1234.567"));
/// ```
pub struct MaskedInputBuilder {
    config: MaskConfig,
    formatters: Option<Arc<FormatterCache>>,
    progressive_formatter: Option<Box<dyn ProgressiveFormatter>>,
}

impl MaskedInputBuilder {
    /// Create a new builder for the given field kind
    pub fn new(kind: FieldKind) -> Self {
        Self::from_config(MaskConfig::new(kind))
    }

    /// Start from an existing configuration
    pub fn from_config(config: MaskConfig) -> Self {
        Self {
            config,
            formatters: None,
            progressive_formatter: None,
        }
    }

    // ========================================================================
    // Decimal Configuration
    // ========================================================================

    /// Set the display locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Set fraction digits kept while typing
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    /// Accept a leading `-`
    pub fn allow_negative(mut self) -> Self {
        self.config.allow_negative = true;
        self
    }

    /// Set decimal validation rules
    pub fn decimal_rules(mut self, rules: DecimalRules) -> Self {
        self.config.decimal_rules = rules;
        self
    }

    // ========================================================================
    // Phone Configuration
    // ========================================================================

    /// Set the selected country
    pub fn country(mut self, country: CountryCode) -> Self {
        self.config.country = country;
        self
    }

    /// Set phone validation rules
    pub fn phone_rules(mut self, rules: PhoneRules) -> Self {
        self.config.phone_rules = rules;
        self
    }

    /// Set what happens to drafts when the country changes
    pub fn country_change_policy(mut self, policy: CountryChangePolicy) -> Self {
        self.config.country_change_policy = policy;
        self
    }

    /// Replace the default as-you-type formatter
    pub fn progressive_formatter(mut self, formatter: Box<dyn ProgressiveFormatter>) -> Self {
        self.progressive_formatter = Some(formatter);
        self
    }

    // ========================================================================
    // Shared Resources
    // ========================================================================

    /// Share a formatter cache between inputs
    pub fn formatter_cache(mut self, cache: Arc<FormatterCache>) -> Self {
        self.formatters = Some(cache);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply money configuration
    pub fn money(locale: Locale) -> Self {
        Self::from_config(MaskConfig::money(locale))
    }

    /// Apply integer configuration
    pub fn integer(locale: Locale) -> Self {
        Self::from_config(MaskConfig::integer(locale))
    }

    /// Apply phone configuration
    pub fn phone(country: CountryCode) -> Self {
        Self::from_config(MaskConfig::phone(country))
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the masked input
    pub fn build(self, accept_handler: Arc<dyn AcceptHandler>) -> Result<MaskedInput, String> {
        let phone_parser = match self.progressive_formatter {
            Some(formatter) => PhoneParser::new(formatter),
            None => PhoneParser::default(),
        };
        let formatters = self
            .formatters
            .unwrap_or_else(|| Arc::new(FormatterCache::new()));

        create_with(self.config, formatters, phone_parser, accept_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &MaskConfig {
        &self.config
    }
}

impl From<MaskConfig> for MaskedInputBuilder {
    fn from(config: MaskConfig) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PlaceholderMaskFormatter;
    use crate::interfaces::NoOpAcceptHandler;

    #[test]
    fn test_create_money_input() {
        let config = MaskConfig::money(Locale::EnUs);
        let input = create_from_config(config, Arc::new(NoOpAcceptHandler)).unwrap();
        assert_eq!(input.kind(), FieldKind::Money);
        assert_eq!(input.phone_formatter_name(), "AsYouType");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = MaskConfig::number(Locale::EnUs).with_max_fraction_digits(30);
        assert!(create_from_config(config, Arc::new(NoOpAcceptHandler)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let input = MaskedInputBuilder::new(FieldKind::Number)
            .locale(Locale::EnIn)
            .max_fraction_digits(2)
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();

        input.input("1234567.891");
        assert_eq!(input.display_value(), "12,34,567.89");
        assert_eq!(input.canonical_value().as_deref(), Some("1234567.89"));
    }

    #[test]
    fn test_builder_phone_formatter() {
        let input = MaskedInputBuilder::phone(CountryCode::Br)
            .progressive_formatter(Box::new(PlaceholderMaskFormatter))
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();

        assert_eq!(input.phone_formatter_name(), "PlaceholderMask");
        input.input("1133334444");
        assert_eq!(input.display_value(), "(11) 33334-444");
        assert_eq!(input.canonical_value().as_deref(), Some("+551133334444"));
    }

    #[test]
    fn test_builder_shared_cache() {
        let cache = Arc::new(FormatterCache::new());

        let first = MaskedInputBuilder::money(Locale::PtBr)
            .formatter_cache(Arc::clone(&cache))
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();
        let second = MaskedInputBuilder::money(Locale::PtBr)
            .formatter_cache(Arc::clone(&cache))
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();

        first.input("10");
        let cached = cache.len();
        second.input("20");
        assert_eq!(cache.len(), cached);
    }

    #[test]
    fn test_preset_builders() {
        let integer = MaskedInputBuilder::integer(Locale::EnUs);
        assert_eq!(integer.get_config().max_fraction_digits, 0);

        let phone: MaskedInputBuilder = MaskConfig::phone(CountryCode::Mx).into();
        assert_eq!(phone.get_config().country, CountryCode::Mx);
    }
}
