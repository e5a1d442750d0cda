// ============================================================================
// Basic Usage Example
// ============================================================================

use canonical_input::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Canonical Input Example ===\n");

    // Money field, typed keystroke by keystroke
    let money = MaskedInputBuilder::money(Locale::PtBr)
        .decimal_rules(DecimalRules::new().required().greater_than_zero())
        .build(Arc::new(LoggingAcceptHandler))
        .expect("valid money configuration");

    println!("Typing into a pt-BR money field...");
    let mut text = String::new();
    for key in "R$ 1.234,5".chars() {
        if money.accepts_key(key) {
            text.push(key);
            money.input(&text);
        }
    }
    money.blur();
    println!(
        "  display: {}  canonical: {:?}  error: {:?}\n",
        money.display_value(),
        money.canonical_value(),
        money.visible_error()
    );

    // Same value shown in other locales
    println!("Switching locales...");
    for locale in [Locale::EnUs, Locale::DeCh, Locale::FrFr, Locale::EnIn] {
        money.set_locale(locale);
        println!("  {:<6} {}", locale.tag(), money.display_value());
    }

    // Already-numeric values
    println!("\n=== format_number ===");
    let value = Decimal::new(123456789, 2);
    for locale in [Locale::PtBr, Locale::EnUs, Locale::EsEs] {
        println!(
            "  {:<6} {}",
            locale.tag(),
            format_number(value, locale, FormatOptions::fixed(2))
        );
    }

    // Phone field
    println!("\n=== Phone ===");
    let phone = MaskedInputBuilder::phone(CountryCode::Br)
        .phone_rules(PhoneRules::new().required().validate_incomplete())
        .build(Arc::new(LoggingAcceptHandler))
        .expect("valid phone configuration");

    let mut digits = String::new();
    for key in "11999999999".chars() {
        digits.push(key);
        phone.input(&digits);
        println!(
            "  {:<12} -> {:<18} {:?}",
            digits,
            phone.display_value(),
            phone.error().map(|e| e.error_key())
        );
    }

    println!("\nSwitching country to US keeps the canonical value:");
    phone.set_country(CountryCode::Us);
    println!(
        "  display: {}  canonical: {:?}",
        phone.display_value(),
        phone.canonical_value()
    );

    println!("\nCountry selector:");
    for option in country_options() {
        println!(
            "  {} {:<5} max {:>2} digits, e.g. {}",
            option.country,
            option.dial_prefix(),
            option.max_digits,
            option.placeholder
        );
    }
}
