//! Compact notation integration tests

use decimal_format::{Format, FormatEnv, NumberFormat};

fn en() -> FormatEnv<'static> {
    FormatEnv::for_locale("en").unwrap()
}

fn compact_short(env: &FormatEnv) -> NumberFormat {
    NumberFormat::with_style(Format::CompactShort, env.symbols).unwrap()
}

#[test]
fn test_compact_short() {
    let env = en();
    let fmt = compact_short(&env);
    assert_eq!(fmt.format(1234.0, &env).unwrap(), "1.2K");
    assert_eq!(fmt.format(12345.0, &env).unwrap(), "12K");
    assert_eq!(fmt.format(123456.0, &env).unwrap(), "123K");
    assert_eq!(fmt.format(1234567.0, &env).unwrap(), "1.2M");
    assert_eq!(fmt.format(123456789.0, &env).unwrap(), "123M");
    assert_eq!(fmt.format(1.2e12, &env).unwrap(), "1.2T");
    assert_eq!(fmt.format(-1234.0, &env).unwrap(), "-1.2K");
}

#[test]
fn test_compact_below_range_formats_plainly() {
    let env = en();
    let fmt = compact_short(&env);
    assert_eq!(fmt.format(123.0, &env).unwrap(), "123");
    assert_eq!(fmt.format(0.5, &env).unwrap(), "0.5");
    assert_eq!(fmt.format(0.0, &env).unwrap(), "0");
}

#[test]
fn test_compact_rounding_carries_into_next_magnitude() {
    let env = en();
    let fmt = compact_short(&env);
    // Two significant digits round 999999 all the way to 1M
    assert_eq!(fmt.format(999999.0, &env).unwrap(), "1M");

    let mut fmt = compact_short(&env);
    fmt.set_significant_digits(0);
    fmt.set_minimum_fraction_digits(2).unwrap();
    fmt.set_maximum_fraction_digits(2).unwrap();
    assert_eq!(fmt.format(999995.0, &env).unwrap(), "1.00M");
    assert_eq!(fmt.format(999994.0, &env).unwrap(), "999.99K");
}

#[test]
fn test_compact_long() {
    let env = en();
    let fmt = NumberFormat::with_style(Format::CompactLong, env.symbols).unwrap();
    assert_eq!(fmt.format(1234.0, &env).unwrap(), "1.2 thousand");
    assert_eq!(fmt.format(1234567.0, &env).unwrap(), "1.2 million");
    assert_eq!(fmt.format(1.5e9, &env).unwrap(), "1.5 billion");
}

#[test]
fn test_compact_infinity_takes_largest_affix() {
    let env = en();
    let fmt = compact_short(&env);
    assert_eq!(fmt.format(f64::INFINITY, &env).unwrap(), "\u{221E}T");
    assert_eq!(fmt.format(f64::NEG_INFINITY, &env).unwrap(), "-\u{221E}T");
}

#[test]
fn test_compact_french() {
    let fr = FormatEnv::for_locale("fr").unwrap();
    let fmt = compact_short(&fr);
    assert_eq!(fmt.format(1234.0, &fr).unwrap(), "1,2\u{00A0}k");
    assert_eq!(fmt.format(1234567.0, &fr).unwrap(), "1,2\u{00A0}M");
    assert_eq!(fmt.format(123400000.0, &fr).unwrap(), "123\u{00A0}M");

    let fmt = NumberFormat::with_style(Format::CompactLong, fr.symbols).unwrap();
    // French plural picks "one" below two
    assert_eq!(fmt.format(1500000.0, &fr).unwrap(), "1,5\u{00A0}million");
    assert_eq!(fmt.format(2500000.0, &fr).unwrap(), "2,5\u{00A0}millions");
}

#[test]
fn test_compact_german_keeps_thousands_verbatim() {
    let de = FormatEnv::for_locale("de").unwrap();
    let fmt = compact_short(&de);
    // The bare "0" table entries leave thousands fully written, with
    // no significant-digit rounding
    assert_eq!(fmt.format(1234.0, &de).unwrap(), "1.234");
    assert_eq!(fmt.format(999999.0, &de).unwrap(), "999.999");
    assert_eq!(fmt.format(2500000.0, &de).unwrap(), "2,5\u{00A0}Mio.");
}

#[test]
fn test_compact_without_tables_formats_plainly() {
    let env = en();
    let fmt = compact_short(&env);
    let bare = FormatEnv::new(env.symbols);
    assert_eq!(fmt.format(1234567.0, &bare).unwrap(), "1,234,567");
}

#[test]
fn test_base_formatting_pins_the_unit() {
    let env = en();
    let mut fmt = compact_short(&env);
    assert_eq!(fmt.base_formatting(), None);
    fmt.set_base_formatting(Some(1000.0));
    assert_eq!(fmt.base_formatting(), Some(1000.0));
    assert_eq!(fmt.format(800.0, &env).unwrap(), "0.8K");
    assert_eq!(fmt.format(10.0, &env).unwrap(), "0.01K");
    assert_eq!(fmt.format(1200000.0, &env).unwrap(), "1,200K");

    fmt.set_significant_digits(0);
    fmt.set_minimum_fraction_digits(2).unwrap();
    assert_eq!(fmt.format(1.0, &env).unwrap(), "0.00K");

    fmt.set_base_formatting(None);
    fmt.set_significant_digits(2);
    fmt.set_minimum_fraction_digits(0).unwrap();
    assert_eq!(fmt.format(800.0, &env).unwrap(), "800");
}

#[test]
fn test_base_formatting_french() {
    let fr = FormatEnv::for_locale("fr").unwrap();
    let mut fmt = compact_short(&fr);
    assert_eq!(fmt.format(123400000.0, &fr).unwrap(), "123\u{00A0}M");
    fmt.set_base_formatting(Some(1000.0));
    assert_eq!(
        fmt.format(123400000.0, &fr).unwrap(),
        "123\u{202F}400\u{00A0}k"
    );
}

#[test]
fn test_explicit_pivot_overrides_base_formatting() {
    let env = en();
    let mut fmt = compact_short(&env);
    fmt.set_base_formatting(Some(1000000.0));
    assert_eq!(fmt.format_with_pivot(1234.0, Some(1000.0), &env).unwrap(), "1.2K");
}

#[test]
fn test_trailing_zeros_with_significant_digits() {
    let env = en();
    let mut fmt = compact_short(&env);
    fmt.set_show_trailing_zeros(true);
    assert_eq!(fmt.format(2.0, &env).unwrap(), "2.0");
    assert_eq!(fmt.format(2000.0, &env).unwrap(), "2.0K");
    assert_eq!(fmt.format(20.0, &env).unwrap(), "20");
}

#[test]
fn test_long_style_falls_back_to_short_table() {
    use decimal_format::{CompactSymbols, PluralCategory};
    use std::collections::HashMap;

    let env = en();
    let mut compact = CompactSymbols::default();
    let mut entry = HashMap::new();
    entry.insert(PluralCategory::Other, "0K".to_string());
    compact.short.insert(3, entry);

    let only_short = FormatEnv {
        symbols: env.symbols,
        compact: Some(&compact),
        currencies: None,
        plural: env.plural,
        enforce_ascii_digits: false,
    };

    let fmt = NumberFormat::with_style(Format::CompactLong, env.symbols).unwrap();
    assert_eq!(
        fmt.format(220000000000000.0, &only_short).unwrap(),
        "220,000,000,000K"
    );
}
