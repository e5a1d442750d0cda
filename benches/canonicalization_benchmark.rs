// ============================================================================
// Canonicalization Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal Drafts - Per-keystroke parsing across locales
// 2. Exact Arithmetic - Big-integer comparison and display formatting
// 3. Phone Drafts - Progressive masking and E.164 derivation
// 4. Masked Input - Full keystroke handling with a shared formatter cache
// ============================================================================

use canonical_input::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Decimal Draft Benchmarks
// ============================================================================

fn benchmark_decimal_drafts(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_draft");
    let options = DraftOptions::default().allow_negative();

    for (locale, raw) in [
        (Locale::EnUs, "-1,234,567.891"),
        (Locale::PtBr, "R$ 1.234.567,89"),
        (Locale::FrFr, "1\u{202F}234\u{202F}567,891"),
        (Locale::EnIn, "12,34,56,789.5"),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", locale), &raw, |b, raw| {
            b.iter(|| black_box(parse_decimal_draft(raw, locale, &options)));
        });
    }

    group.finish();
}

// ============================================================================
// Exact Arithmetic Benchmarks
// ============================================================================

fn benchmark_exact_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_arithmetic");

    // Integer part length drives the big-integer cost
    for digits in [4usize, 16, 64] {
        let left = format!("{}.25", "9".repeat(digits));
        let right = format!("{}.250001", "9".repeat(digits));

        group.bench_with_input(
            BenchmarkId::new("compare", digits),
            &(&left, &right),
            |b, (left, right)| {
                b.iter(|| black_box(compare_canonical_decimals(left, right)));
            },
        );

        group.bench_with_input(BenchmarkId::new("format", digits), &left, |b, value| {
            b.iter(|| {
                black_box(format_canonical_decimal(
                    value,
                    Locale::DeDe,
                    FractionBounds::fixed(2),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("fixed_fraction", digits), &right, |b, value| {
            b.iter(|| black_box(normalize_to_fixed_fraction(value, 2)));
        });
    }

    group.finish();
}

// ============================================================================
// Phone Draft Benchmarks
// ============================================================================

fn benchmark_phone_drafts(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_draft");

    for (country, raw) in [
        (CountryCode::Br, "11999999999"),
        (CountryCode::Us, "+1 (212) 555-0142 ext 99"),
        (CountryCode::Gb, "07400 123456"),
        (CountryCode::Mx, "55 1234 5678"),
    ] {
        group.bench_with_input(BenchmarkId::new("bound_and_parse", country), &raw, |b, raw| {
            b.iter(|| {
                let digits = bound_national_digits(raw, country);
                black_box(parse_phone_draft(&digits, country))
            });
        });

        group.bench_with_input(BenchmarkId::new("validate", country), &raw, |b, raw| {
            let input = PhoneValidationInput {
                display_value: raw,
                canonical_value: "",
                country,
                rules: PhoneRules::new().required().validate_incomplete(),
            };
            b.iter(|| black_box(validate_phone_value(&input)));
        });
    }

    group.finish();
}

// ============================================================================
// Masked Input Benchmarks
// ============================================================================

fn benchmark_masked_input(c: &mut Criterion) {
    let cache = Arc::new(FormatterCache::new());

    c.bench_function("masked_money_keystrokes", |b| {
        let input = MaskedInputBuilder::money(Locale::PtBr)
            .formatter_cache(Arc::clone(&cache))
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();

        b.iter(|| {
            let mut text = String::new();
            for key in "1.234.567,89".chars() {
                text.push(key);
                input.input(&text);
            }
            input.blur();
            black_box(input.canonical_value())
        });
    });

    c.bench_function("masked_phone_keystrokes", |b| {
        let input = MaskedInputBuilder::phone(CountryCode::Br)
            .build(Arc::new(NoOpAcceptHandler))
            .unwrap();

        b.iter(|| {
            let mut text = String::new();
            for key in "11999999999".chars() {
                text.push(key);
                input.input(&text);
            }
            black_box(input.canonical_value())
        });
    });
}

criterion_group!(
    benches,
    benchmark_decimal_drafts,
    benchmark_exact_arithmetic,
    benchmark_phone_drafts,
    benchmark_masked_input,
);
criterion_main!(benches);
