// ============================================================================
// Property Tests
// Invariants of the decimal and phone canonicalization functions
// ============================================================================

use canonical_input::prelude::*;
use canonical_input::utils::digits_only;
use proptest::prelude::*;
use quickcheck::quickcheck;
use std::cmp::Ordering;

/// Canonical decimals without negative zero
fn canonical_decimal() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        "0|[1-9][0-9]{0,30}",
        proptest::option::of("[0-9]{1,12}"),
    )
        .prop_map(|(negative, integer, fraction)| {
            let mut value = integer;
            if let Some(fraction) = fraction {
                value.push('.');
                value.push_str(&fraction);
            }
            let zero = value.bytes().all(|b| b == b'0' || b == b'.');
            if negative && !zero {
                value.insert(0, '-');
            }
            value
        })
}

fn locale() -> impl Strategy<Value = Locale> {
    (0..Locale::ALL.len()).prop_map(|i| Locale::ALL[i])
}

fn country() -> impl Strategy<Value = CountryCode> {
    (0..CountryCode::ALL.len()).prop_map(|i| CountryCode::ALL[i])
}

proptest! {
    /// Normalizing twice gives the same string as normalizing once.
    #[test]
    fn fixed_fraction_is_idempotent(value in canonical_decimal(), digits in 0usize..8) {
        let once = normalize_to_fixed_fraction(&value, digits).unwrap();
        let twice = normalize_to_fixed_fraction(&once, digits).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Normalization keeps exactly the requested number of fraction digits.
    #[test]
    fn fixed_fraction_has_requested_digits(value in canonical_decimal(), digits in 0usize..8) {
        let fixed = normalize_to_fixed_fraction(&value, digits).unwrap();
        let fraction = fixed.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
        prop_assert_eq!(fraction, digits);
        prop_assert!(is_canonical_decimal(&fixed));
    }

    /// compare(a, b) is the reverse of compare(b, a), and compare(a, a) is equal.
    #[test]
    fn comparison_is_antisymmetric(a in canonical_decimal(), b in canonical_decimal()) {
        let forward = compare_canonical_decimals(&a, &b).unwrap();
        let backward = compare_canonical_decimals(&b, &a).unwrap();
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(compare_canonical_decimals(&a, &a), Some(Ordering::Equal));
    }

    /// Trailing fraction zeros never change the value.
    #[test]
    fn comparison_ignores_trailing_zeros(value in canonical_decimal(), zeros in 1usize..5) {
        let padded = if value.contains('.') {
            format!("{}{}", value, "0".repeat(zeros))
        } else {
            format!("{}.{}", value, "0".repeat(zeros))
        };
        prop_assert_eq!(compare_canonical_decimals(&value, &padded), Some(Ordering::Equal));
    }

    /// Rendering for display and typing the result back yields the same value.
    #[test]
    fn display_round_trip(value in canonical_decimal(), locale in locale()) {
        let display = format_canonical_decimal(&value, locale, FractionBounds::default());
        let draft = parse_decimal_draft(&display, locale, &DraftOptions::default().allow_negative());
        prop_assert_eq!(draft.canonical_value, Some(value));
    }

    /// Whatever is typed, a draft canonical value is canonical.
    #[test]
    fn draft_canonical_is_canonical(raw in "\\PC{0,40}", locale in locale()) {
        let draft = parse_decimal_draft(&raw, locale, &DraftOptions::default().allow_negative());
        match draft.canonical_value {
            Some(value) => {
                prop_assert!(is_canonical_decimal(&value));
                prop_assert!(draft.has_digits);
            }
            None => prop_assert!(!draft.has_digits),
        }
    }

    /// Bounded digits never exceed the country's maximum.
    #[test]
    fn bounded_phone_digits_fit(raw in "[0-9 ()+.-]{0,30}", country in country()) {
        let digits = bound_national_digits(&raw, country);
        prop_assert!(digits.len() <= country_option(country).max_digits);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }

    /// The phone display always carries exactly the bounded digits.
    #[test]
    fn phone_display_keeps_digits(raw in "[0-9]{0,20}", country in country()) {
        let digits = bound_national_digits(&raw, country);
        let draft = parse_phone_draft(&digits, country);
        prop_assert_eq!(digits_only(&draft.display_value), digits);
        if draft.has_canonical() {
            prop_assert!(draft.canonical_value.starts_with('+'));
        }
    }
}

quickcheck! {
    fn comparison_matches_integers(a: i64, b: i64) -> bool {
        compare_canonical_decimals(&a.to_string(), &b.to_string()) == Some(a.cmp(&b))
    }

    fn integer_normalization_keeps_value(a: i64) -> bool {
        normalize_to_fixed_fraction(&a.to_string(), 0) == Some(a.to_string())
    }
}
