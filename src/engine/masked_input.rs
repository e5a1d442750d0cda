// ============================================================================
// Masked Input
// Binds the decimal and phone parsers to a single text field
// ============================================================================

use super::decimal_parser::{
    display_format_options, parse_decimal_draft_with, render_canonical_decimal, DraftOptions,
    FractionBounds,
};
use super::decimal_validation::validate_canonical_decimal;
use super::formatter_cache::FormatterCache;
use super::number_formatter::FormatOptions;
use super::phone_number::PhoneNumber;
use super::phone_parser::PhoneParser;
use super::phone_validation::{validate_phone_value, PhoneValidationInput};
use crate::domain::{
    CountryCode, FieldKind, Locale, MaskConfig, PhoneDraft, MONEY_FRACTION_DIGITS,
};
use crate::interfaces::{AcceptEvent, AcceptHandler, FieldError};
use crate::numeric::{is_canonical_decimal, normalize_to_fixed_fraction};
use crate::utils::digits_only;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
struct FieldState {
    display_value: String,
    canonical_value: Option<String>,
    touched: bool,
}

#[derive(Debug, Clone, Copy)]
struct FieldSettings {
    locale: Locale,
    country: CountryCode,
}

/// A money, number or phone field.
///
/// Every `input`, `paste`, `blur`, `set_locale` and `set_country` re-derives
/// the display and canonical values and sends an [`AcceptEvent`] to the
/// handler. Errors become visible once the field has been blurred.
pub struct MaskedInput {
    config: MaskConfig,

    /// Locale and country can change after construction
    settings: RwLock<FieldSettings>,

    state: RwLock<FieldState>,

    /// Shared number formatters
    formatters: Arc<FormatterCache>,

    phone_parser: PhoneParser,

    accept_handler: Arc<dyn AcceptHandler>,
}

impl MaskedInput {
    /// Create a masked input. The configuration is used as given; see
    /// [`crate::engine::create_from_config`] for the validating path.
    pub fn new(
        config: MaskConfig,
        formatters: Arc<FormatterCache>,
        phone_parser: PhoneParser,
        accept_handler: Arc<dyn AcceptHandler>,
    ) -> Self {
        Self {
            settings: RwLock::new(FieldSettings {
                locale: config.locale,
                country: config.country,
            }),
            config,
            state: RwLock::new(FieldState::default()),
            formatters,
            phone_parser,
            accept_handler,
        }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn kind(&self) -> FieldKind {
        self.config.kind
    }

    pub fn locale(&self) -> Locale {
        self.settings.read().locale
    }

    pub fn country(&self) -> CountryCode {
        self.settings.read().country
    }

    pub fn display_value(&self) -> String {
        self.state.read().display_value.clone()
    }

    pub fn canonical_value(&self) -> Option<String> {
        self.state.read().canonical_value.clone()
    }

    pub fn is_touched(&self) -> bool {
        self.state.read().touched
    }

    /// Name of the progressive phone formatter in use
    pub fn phone_formatter_name(&self) -> &str {
        self.phone_parser.formatter_name()
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Whether a typed character should reach the field at all.
    ///
    /// Phone fields take digits only. Decimal fields also take both
    /// separators of the locale (the decimal one only when fractions are
    /// allowed) and `-` when negatives are allowed.
    pub fn accepts_key(&self, key: char) -> bool {
        if key.is_ascii_digit() {
            return true;
        }
        if !self.config.kind.is_decimal() {
            return false;
        }

        let locale = self.locale();
        (key == locale.decimal_separator() && self.config.max_fraction_digits > 0)
            || key == locale.input_grouping_separator()
            || (key == '-' && self.config.allow_negative)
    }

    /// The field text changed by typing.
    pub fn input(&self, text: &str) {
        let (display_value, canonical_value) = self.derive(text);
        self.replace(display_value, canonical_value);
        self.emit();
    }

    /// Text was pasted over the whole field. Phone fields commit pasted
    /// international numbers straight away.
    pub fn paste(&self, text: &str) {
        if self.config.kind == FieldKind::Phone && text.trim_start().starts_with('+') {
            let normalized = self.phone_parser.normalize_value(text, self.country());
            self.replace(normalized.display_value, non_empty(normalized.canonical_value));
        } else {
            let (display_value, canonical_value) = self.derive(text);
            self.replace(display_value, canonical_value);
        }
        self.emit();
    }

    /// Commit the current value and mark the field touched.
    ///
    /// Money is normalized to two fraction digits, numbers are re-rendered
    /// and phone numbers are normalized for the selected country.
    pub fn blur(&self) {
        let current = self.state.read().clone();

        let (display_value, canonical_value) = match self.config.kind {
            FieldKind::Money | FieldKind::Number => {
                self.commit_decimal(current.canonical_value.as_deref())
            }
            FieldKind::Phone => {
                let source = if digits_only(&current.display_value).is_empty() {
                    current.canonical_value.unwrap_or_default()
                } else {
                    current.display_value
                };
                let normalized = self.phone_parser.normalize_value(&source, self.country());
                (normalized.display_value, non_empty(normalized.canonical_value))
            }
        };

        {
            let mut state = self.state.write();
            state.display_value = display_value;
            state.canonical_value = canonical_value;
            state.touched = true;
        }
        self.emit();
    }

    /// Switch the display locale. The canonical value is kept and the display
    /// re-rendered. A pending decimal separator at the end of a draft is
    /// carried over as the new locale's separator.
    pub fn set_locale(&self, locale: Locale) {
        let previous = std::mem::replace(&mut self.settings.write().locale, locale);

        if self.config.kind.is_decimal() {
            let current = self.state.read().clone();
            let previous_formatter = self.formatters.get(previous, FormatOptions::default());
            let pending_separator =
                parse_decimal_draft_with(&previous_formatter, &current.display_value, &self.draft_options())
                    .has_trailing_separator;

            let display_value = if pending_separator {
                let retyped = format!(
                    "{}{}",
                    current.canonical_value.as_deref().unwrap_or_default(),
                    locale.decimal_separator()
                );
                let formatter = self.formatters.get(locale, FormatOptions::default());
                parse_decimal_draft_with(&formatter, &retyped, &self.draft_options()).display_value
            } else {
                current
                    .canonical_value
                    .as_deref()
                    .map(|value| self.render(value, self.typing_bounds()))
                    .unwrap_or_default()
            };
            self.state.write().display_value = display_value;
        }
        self.emit();
    }

    /// Switch the selected country of a phone field. Canonical values are
    /// re-displayed for the new country; drafts follow the configured
    /// [`crate::domain::CountryChangePolicy`].
    pub fn set_country(&self, country: CountryCode) {
        self.settings.write().country = country;

        if self.config.kind == FieldKind::Phone {
            let current = self.state.read().clone();
            let draft = self.phone_parser.reprocess_country(
                &current.display_value,
                current.canonical_value.as_deref().unwrap_or_default(),
                country,
                self.config.country_change_policy,
            );
            self.replace(draft.display_value, non_empty(draft.canonical_value));
        }
        self.emit();
    }

    /// Assign a value from outside (form reset, loaded record). Decimal
    /// fields take a canonical decimal, phone fields an E.164 or national
    /// number. No event is emitted and the touched flag is unchanged.
    pub fn set_value(&self, value: &str) {
        let value = value.trim();

        let (display_value, canonical_value) = if value.is_empty() {
            (String::new(), None)
        } else {
            match self.config.kind {
                FieldKind::Money | FieldKind::Number if is_canonical_decimal(value) => {
                    self.commit_decimal(Some(value))
                }
                FieldKind::Money | FieldKind::Number => self.derive(value),
                FieldKind::Phone => {
                    let normalized = self.phone_parser.normalize_value(value, self.country());
                    (normalized.display_value, non_empty(normalized.canonical_value))
                }
            }
        };

        self.replace(display_value, canonical_value);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Current validation error, visible or not
    pub fn error(&self) -> Option<FieldError> {
        let state = self.state.read();

        match self.config.kind {
            FieldKind::Money | FieldKind::Number => validate_canonical_decimal(
                state.canonical_value.as_deref().unwrap_or_default(),
                &self.config.decimal_rules,
            )
            .map(FieldError::Decimal),
            FieldKind::Phone => validate_phone_value(&PhoneValidationInput {
                display_value: &state.display_value,
                canonical_value: state.canonical_value.as_deref().unwrap_or_default(),
                country: self.country(),
                rules: self.config.phone_rules,
            })
            .map(FieldError::Phone),
        }
    }

    /// The error to show: none until the field has been blurred once
    pub fn visible_error(&self) -> Option<FieldError> {
        if self.is_touched() {
            self.error()
        } else {
            None
        }
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn draft_options(&self) -> DraftOptions {
        DraftOptions {
            max_fraction_digits: self.config.max_fraction_digits,
            allow_negative: self.config.allow_negative,
        }
    }

    fn typing_bounds(&self) -> FractionBounds {
        FractionBounds {
            min: None,
            max: Some(self.config.max_fraction_digits),
        }
    }

    fn render(&self, value: &str, bounds: FractionBounds) -> String {
        let formatter = self.formatters.get(self.locale(), display_format_options(bounds));
        render_canonical_decimal(&formatter, value, bounds)
    }

    /// Display and canonical value for typed or pasted text
    fn derive(&self, text: &str) -> (String, Option<String>) {
        match self.config.kind {
            FieldKind::Money | FieldKind::Number => {
                let formatter = self.formatters.get(self.locale(), FormatOptions::default());
                let draft = parse_decimal_draft_with(&formatter, text, &self.draft_options());
                (draft.display_value, draft.canonical_value)
            }
            FieldKind::Phone => {
                let draft = if text.trim_start().starts_with('+') {
                    international_draft(text)
                } else {
                    self.phone_parser.parse_draft(text, self.country())
                };
                (draft.display_value, non_empty(draft.canonical_value))
            }
        }
    }

    fn commit_decimal(&self, canonical_value: Option<&str>) -> (String, Option<String>) {
        let Some(value) = canonical_value else {
            return (String::new(), None);
        };

        match self.config.kind {
            FieldKind::Money => match normalize_to_fixed_fraction(value, MONEY_FRACTION_DIGITS) {
                Some(fixed) => {
                    let display = self.render(&fixed, FractionBounds::fixed(MONEY_FRACTION_DIGITS));
                    (display, Some(fixed))
                }
                None => (String::new(), None),
            },
            _ if is_canonical_decimal(value) => (
                self.render(value, self.typing_bounds()),
                Some(value.to_string()),
            ),
            _ => (String::new(), None),
        }
    }

    fn replace(&self, display_value: String, canonical_value: Option<String>) {
        let mut state = self.state.write();
        state.display_value = display_value;
        state.canonical_value = canonical_value;
    }

    fn emit(&self) {
        let error = self.error();
        let event = {
            let state = self.state.read();
            AcceptEvent {
                display_value: state.display_value.clone(),
                canonical_value: state.canonical_value.clone(),
                error,
            }
        };
        self.accept_handler.on_accept(&event);
    }
}

/// A `+` draft is shown as typed (digits only) and only gets a canonical
/// value once it is a valid number.
fn international_draft(text: &str) -> PhoneDraft {
    let digits = digits_only(text);
    let canonical_value = PhoneNumber::from_international(text)
        .filter(PhoneNumber::is_valid)
        .map(|number| number.to_e164())
        .unwrap_or_default();

    PhoneDraft {
        display_value: format!("+{}", digits),
        canonical_value,
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryChangePolicy, DecimalError, DecimalRules, PhoneError, PhoneRules};
    use crate::interfaces::NoOpAcceptHandler;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<AcceptEvent>>,
    }

    impl AcceptHandler for RecordingHandler {
        fn on_accept(&self, event: &AcceptEvent) {
            self.events.lock().push(event.clone());
        }
    }

    fn masked(config: MaskConfig) -> MaskedInput {
        MaskedInput::new(
            config,
            Arc::new(FormatterCache::new()),
            PhoneParser::default(),
            Arc::new(NoOpAcceptHandler),
        )
    }

    #[test]
    fn test_money_typing_and_blur() {
        let field = masked(MaskConfig::money(Locale::PtBr));

        field.input("1234,5");
        assert_eq!(field.display_value(), "1.234,5");
        assert_eq!(field.canonical_value().as_deref(), Some("1234.5"));

        field.blur();
        assert_eq!(field.display_value(), "1.234,50");
        assert_eq!(field.canonical_value().as_deref(), Some("1234.50"));
        assert!(field.is_touched());
    }

    #[test]
    fn test_money_fraction_budget() {
        let field = masked(MaskConfig::money(Locale::EnUs));
        field.input("12.3456");
        assert_eq!(field.canonical_value().as_deref(), Some("12.34"));
    }

    #[test]
    fn test_number_blur_clears_noise() {
        let field = masked(MaskConfig::number(Locale::EnUs));
        field.input(".");
        assert_eq!(field.canonical_value(), None);
        assert_eq!(field.display_value(), "0.");

        field.blur();
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_accepts_key() {
        let money = masked(MaskConfig::money(Locale::PtBr));
        assert!(money.accepts_key('7'));
        assert!(money.accepts_key(','));
        assert!(money.accepts_key('.'));
        assert!(!money.accepts_key('-'));
        assert!(!money.accepts_key('a'));

        let signed = masked(MaskConfig::number(Locale::EnUs).with_allow_negative(true));
        assert!(signed.accepts_key('-'));

        let integer = masked(MaskConfig::integer(Locale::EnUs));
        assert!(!integer.accepts_key('.'));
        assert!(integer.accepts_key(','));

        let phone = masked(MaskConfig::phone(CountryCode::Br));
        assert!(phone.accepts_key('9'));
        assert!(!phone.accepts_key('-'));
        assert!(!phone.accepts_key('+'));
    }

    #[test]
    fn test_visible_error_after_blur() {
        let field = masked(
            MaskConfig::number(Locale::EnUs).with_decimal_rules(DecimalRules::new().required()),
        );

        assert_eq!(field.error(), Some(FieldError::Decimal(DecimalError::Required)));
        assert_eq!(field.visible_error(), None);

        field.blur();
        assert_eq!(
            field.visible_error(),
            Some(FieldError::Decimal(DecimalError::Required))
        );

        field.input("5");
        assert_eq!(field.visible_error(), None);
    }

    #[test]
    fn test_set_locale_keeps_canonical() {
        let field = masked(MaskConfig::number(Locale::EnUs));
        field.input("1234567.891");

        field.set_locale(Locale::DeDe);
        assert_eq!(field.canonical_value().as_deref(), Some("1234567.891"));
        assert_eq!(field.display_value(), "1.234.567,891");
        assert_eq!(field.locale(), Locale::DeDe);
    }

    #[test]
    fn test_set_locale_keeps_pending_separator() {
        let field = masked(MaskConfig::number(Locale::EnUs));
        field.input("12.");
        assert_eq!(field.display_value(), "12.");

        field.set_locale(Locale::PtBr);
        assert_eq!(field.display_value(), "12,");
        assert_eq!(field.canonical_value().as_deref(), Some("12"));

        field.input("12,5");
        assert_eq!(field.canonical_value().as_deref(), Some("12.5"));

        let integer = masked(MaskConfig::integer(Locale::EnUs));
        integer.input("12.");
        integer.set_locale(Locale::PtBr);
        assert_eq!(integer.display_value(), "12");
    }

    #[test]
    fn test_set_value() {
        let money = masked(MaskConfig::money(Locale::EnUs));
        money.set_value("1500");
        assert_eq!(money.display_value(), "1,500.00");
        assert_eq!(money.canonical_value().as_deref(), Some("1500.00"));
        assert!(!money.is_touched());

        money.set_value("");
        assert_eq!(money.canonical_value(), None);

        let phone = masked(MaskConfig::phone(CountryCode::Br));
        phone.set_value("+5511999999999");
        assert_eq!(phone.display_value(), "(11) 99999-9999");
        assert_eq!(phone.canonical_value().as_deref(), Some("+5511999999999"));
    }

    #[test]
    fn test_phone_typing() {
        let field = masked(MaskConfig::phone(CountryCode::Us));

        field.input("2125");
        assert_eq!(field.display_value(), "(212) 5");
        assert_eq!(field.canonical_value(), None);
        assert_eq!(field.error(), Some(FieldError::Phone(PhoneError::Incomplete)));

        field.input("21255501429999");
        assert_eq!(field.display_value(), "(212) 555-0142");
        assert_eq!(field.canonical_value().as_deref(), Some("+12125550142"));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_phone_international_draft() {
        let field = masked(MaskConfig::phone(CountryCode::Br));

        field.input("+44 74");
        assert_eq!(field.display_value(), "+4474");
        assert_eq!(field.canonical_value(), None);
        assert_eq!(field.error(), Some(FieldError::Phone(PhoneError::Invalid)));

        field.blur();
        assert_eq!(field.display_value(), "+44 74");
    }

    #[test]
    fn test_phone_paste_international() {
        let field = masked(MaskConfig::phone(CountryCode::Us));
        field.paste("+55 11 99999-9999");
        assert_eq!(field.display_value(), "+55 11 99999-9999");
        assert_eq!(field.canonical_value().as_deref(), Some("+5511999999999"));
    }

    #[test]
    fn test_phone_paste_outside_selector() {
        let field = masked(
            MaskConfig::phone(CountryCode::Br)
                .with_phone_rules(PhoneRules::new().required().validate_incomplete()),
        );
        field.paste("+49 1512 3456789");
        assert_eq!(field.canonical_value().as_deref(), Some("+4915123456789"));
        assert!(field.display_value().starts_with("+49 "));
        assert_eq!(field.error(), None);

        field.blur();
        assert_eq!(field.canonical_value().as_deref(), Some("+4915123456789"));
        assert_eq!(field.visible_error(), None);
    }

    #[test]
    fn test_set_country() {
        let field = masked(MaskConfig::phone(CountryCode::Br));
        field.input("11999999999");
        field.set_country(CountryCode::Us);
        assert_eq!(field.canonical_value().as_deref(), Some("+5511999999999"));
        assert_eq!(field.display_value(), "+55 11 99999-9999");

        let discarding = masked(
            MaskConfig::phone(CountryCode::Us)
                .with_country_change_policy(CountryChangePolicy::Discard),
        );
        discarding.input("2125");
        discarding.set_country(CountryCode::Co);
        assert_eq!(discarding.display_value(), "");
        assert_eq!(discarding.country(), CountryCode::Co);
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(RecordingHandler::default());
        let field = MaskedInput::new(
            MaskConfig::money(Locale::EnUs),
            Arc::new(FormatterCache::new()),
            PhoneParser::default(),
            handler.clone(),
        );

        field.input("1");
        field.input("12");
        field.blur();
        field.set_value("3");

        let events = handler.events.lock();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].canonical_value.as_deref(), Some("12"));
        assert_eq!(events[2].display_value, "12.00");
        assert_eq!(events[2].canonical_value.as_deref(), Some("12.00"));
        assert_eq!(events[2].error, None);
    }
}
