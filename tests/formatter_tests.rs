use locale_number_format::types::{FormatSpec, RoundingMode, SymbolMap};
use locale_number_format::{PluralCategory, format_number};

fn fmt(value: f64, spec: &FormatSpec) -> String {
    format_number(value, spec, None).unwrap()
}

/// `0` pattern without grouping or fraction digits
fn integer_spec() -> FormatSpec {
    FormatSpec::default()
        .with_patterns(("0", "", ""), ("-0", "-", ""))
        .with_fraction_digits(0, 0)
        .with_grouping(None, None)
}

#[test]
fn test_default_decimal_format() {
    let spec = FormatSpec::default();
    assert_eq!(fmt(0.0, &spec), "0");
    assert_eq!(fmt(3.14159, &spec), "3.142");
    assert_eq!(fmt(1234.5, &spec), "1,234.5");
    assert_eq!(fmt(-9876543.21, &spec), "-9,876,543.21");
}

#[test]
fn test_nan_is_returned_verbatim() {
    // Symbols in the NaN symbol must not be localized
    let spec = FormatSpec {
        nan_symbol: "'N.a.N'".to_string(),
        symbols: SymbolMap::default().with_decimal(","),
        ..FormatSpec::default()
    };
    assert_eq!(fmt(f64::NAN, &spec), "'N.a.N'");
}

#[test]
fn test_infinity_uses_sign_section_without_localization() {
    let spec = FormatSpec {
        infinity_symbol: "∞".to_string(),
        symbols: SymbolMap::default().with_minus_sign("\u{2212}"),
        ..FormatSpec::default()
    }
    .with_patterns(("#,##0%", "", "%"), ("-#,##0%", "-", "%"));

    assert_eq!(fmt(f64::INFINITY, &spec), "∞%");
    assert_eq!(fmt(f64::NEG_INFINITY, &spec), "-∞%");
}

#[test]
fn test_negative_zero_selects_positive_section() {
    let spec = integer_spec().with_patterns(("0", "", ""), ("(0)", "(", ")"));
    assert_eq!(fmt(-0.0, &spec), "0");
    assert_eq!(fmt(-1.0, &spec), "(1)");
}

#[test]
fn test_negative_rounding_to_zero_keeps_negative_section() {
    let spec = integer_spec();
    assert_eq!(fmt(-0.2, &spec), "-0");
}

#[test]
fn test_percent_scaling() {
    let spec = integer_spec().with_patterns(("0%", "", "%"), ("-0%", "-", "%"));
    assert_eq!(fmt(0.5, &spec), "50%");
    // Half rounds toward positive infinity
    assert_eq!(fmt(-0.125, &spec), "-12%");
}

#[test]
fn test_per_mille_scaling() {
    let spec = integer_spec().with_patterns(("0‰", "", "‰"), ("-0‰", "-", "‰"));
    assert_eq!(fmt(0.0123, &spec), "12‰");
}

#[test]
fn test_percent_scaling_happens_before_rounding() {
    let spec = FormatSpec::default()
        .with_patterns(("#,##0.#%", "", "%"), ("-#,##0.#%", "-", "%"))
        .with_fraction_digits(0, 1);
    assert_eq!(fmt(0.12345, &spec), "12.3%");
    assert_eq!(fmt(12.5, &spec), "1,250%");
}

#[test]
fn test_grouping_primary_and_secondary() {
    let spec = integer_spec().with_grouping(Some(3), Some(3));
    assert_eq!(fmt(1234567.0, &spec), "1,234,567");

    let indian = integer_spec().with_grouping(Some(3), Some(2));
    assert_eq!(fmt(1234567.0, &indian), "12,34,567");
}

#[test]
fn test_fraction_digit_bounds() {
    let spec = FormatSpec::default().with_fraction_digits(2, 4);
    assert_eq!(fmt(1.0, &spec), "1.00");
    assert_eq!(fmt(1.23456, &spec), "1.2346");
    assert_eq!(fmt(1.005, &spec), "1.005");

    let spec = FormatSpec::default().with_fraction_digits(2, 2);
    assert_eq!(fmt(1.005, &spec), "1.01");
}

#[test]
fn test_minimum_integer_digits() {
    let spec = integer_spec().with_integer_digits(3);
    assert_eq!(fmt(7.0, &spec), "007");
    assert_eq!(fmt(-7.0, &spec), "-007");
}

#[test]
fn test_rounding_modes_and_increment() {
    let spec = FormatSpec::default()
        .with_fraction_digits(2, 2)
        .with_rounding(RoundingMode::Round, Some(0.05));
    assert_eq!(fmt(1.27, &spec), "1.25");
    assert_eq!(fmt(1.28, &spec), "1.30");

    let spec = integer_spec().with_rounding(RoundingMode::Ceil, None);
    assert_eq!(fmt(1.1, &spec), "2");
    let spec = integer_spec().with_rounding(RoundingMode::Floor, None);
    assert_eq!(fmt(1.9, &spec), "1");
    let spec = integer_spec().with_rounding(RoundingMode::Truncate, None);
    assert_eq!(fmt(-1.9, &spec), "-1");
}

#[test]
fn test_significant_digits_take_precedence() {
    let spec = FormatSpec::default()
        .with_fraction_digits(2, 2)
        .with_significant_digits(2, 3);
    assert_eq!(fmt(1234.5, &spec), "1,230");
    assert_eq!(fmt(0.000123456, &spec), "0.000123");
    assert_eq!(fmt(1.0, &spec), "1.0");
}

#[test]
fn test_single_significant_bound_uses_fraction_digits() {
    let spec = FormatSpec {
        maximum_significant_digits: Some(1),
        ..FormatSpec::default().with_fraction_digits(2, 2)
    };
    assert_eq!(fmt(1234.5, &spec), "1,234.50");
}

#[test]
fn test_plural_selector_unused_without_compact_patterns() {
    let spec = FormatSpec::default();
    let never = |_: f64| -> PluralCategory { panic!("selector must not be called") };
    assert_eq!(format_number(1500.0, &spec, Some(&never)).unwrap(), "1,500");
}

#[test]
fn test_padding_is_not_rendered() {
    let spec = FormatSpec {
        padding: Some('*'),
        ..integer_spec()
    };
    assert_eq!(fmt(42.0, &spec), "42");
}

#[test]
fn test_values_near_f64_max_render_digits() {
    let spec = FormatSpec::default();
    assert_eq!(fmt(1.0e306, &spec), format!("1{}", ",000".repeat(102)));
    assert_eq!(fmt(1.7e308, &spec), format!("170{}", ",000".repeat(102)));
    assert_eq!(fmt(-1.7e308, &spec), format!("-170{}", ",000".repeat(102)));

    let spec = FormatSpec::default().with_significant_digits(1, 3);
    let max = fmt(f64::MAX, &spec);
    assert!(max.starts_with("179,769,313,486,231,57"), "{max}");
    assert!(!max.contains("inf"), "{max}");
}
