//! Parsing integration tests

use decimal_format::{Format, FormatEnv, NumberFormat};

fn en() -> FormatEnv<'static> {
    FormatEnv::for_locale("en").unwrap()
}

fn decimal(env: &FormatEnv) -> NumberFormat {
    NumberFormat::with_style(Format::Decimal, env.symbols).unwrap()
}

#[test]
fn test_basic_parse() {
    let env = en();
    let fmt = decimal(&env);
    assert_eq!(fmt.parse("123.457", &env), 123.457);
    assert_eq!(fmt.parse("1,234.57", &env), 1234.57);
    assert_eq!(fmt.parse("1234.57", &env), 1234.57);
    assert_eq!(fmt.parse("-123", &env), -123.0);
    assert_eq!(fmt.parse("+123", &env), 123.0);
    assert_eq!(fmt.parse(".5", &env), 0.5);
}

#[test]
fn test_parse_failure_is_nan() {
    let env = en();
    let fmt = decimal(&env);
    assert!(fmt.parse("abc", &env).is_nan());
    assert!(fmt.parse("", &env).is_nan());
    assert_eq!(fmt.parse_at("abc", 0, &env).1, 0);
}

#[test]
fn test_parse_stops_at_first_unparseable_character() {
    let env = en();
    let fmt = decimal(&env);
    assert_eq!(fmt.parse_at("123 cars", 0, &env), (123.0, 3));
    assert_eq!(fmt.parse_at("12+12", 0, &env), (12.0, 2));
}

#[test]
fn test_parse_at_offset() {
    let env = en();
    let fmt = decimal(&env);
    assert_eq!(fmt.parse_at("price: 1,234.57 each", 7, &env), (1234.57, 15));
    // An offset past the end fails without advancing
    let (value, pos) = fmt.parse_at("12", 5, &env);
    assert!(value.is_nan());
    assert_eq!(pos, 5);
}

#[test]
fn test_parse_inline_percent_and_permill() {
    let env = en();
    let fmt = decimal(&env);
    assert_eq!(fmt.parse("120%", &env), 1.2);
    assert_eq!(fmt.parse("120\u{2030}", &env), 0.12);
    assert_eq!(fmt.parse_at("120%x", 0, &env), (1.2, 4));
}

#[test]
fn test_parse_percent_pattern_applies_multiplier_once() {
    let env = en();
    let fmt = NumberFormat::with_style(Format::Percent, env.symbols).unwrap();
    // The suffix carries the multiplier here; the inline scale must
    // not double it.
    assert_eq!(fmt.parse("12%", &env), 0.12);
    assert!(fmt.parse("12", &env).is_nan());
}

#[test]
fn test_parse_exponent() {
    let env = en();
    let fmt = NumberFormat::with_style(Format::Scientific, env.symbols).unwrap();
    assert_eq!(fmt.parse("1.234E5", &env), 123400.0);
    assert_eq!(fmt.parse("1.234E-5", &env), 0.00001234);
    assert_eq!(fmt.parse("1.234E+5", &env), 123400.0);

    // Exponents only parse under exponential patterns
    let plain = decimal(&env);
    assert_eq!(plain.parse_at("1.234E5", 0, &env), (1.234, 5));
}

#[test]
fn test_parse_exponent_with_locale_symbol() {
    let au = FormatEnv::for_locale("en_AU").unwrap();
    let fmt = NumberFormat::with_style(Format::Scientific, au.symbols).unwrap();
    assert_eq!(fmt.parse("1.234e5", &au), 123400.0);
}

#[test]
fn test_parse_negative_subpattern_affixes() {
    let env = en();
    let fmt = NumberFormat::from_pattern("0.0;(0.0)", env.symbols).unwrap();
    assert_eq!(fmt.parse("(3.1)", &env), -3.1);
    assert_eq!(fmt.parse("3.1", &env), 3.1);
    // A promised suffix that never arrives fails the parse
    assert!(fmt.parse("(3.1", &env).is_nan());
}

#[test]
fn test_parse_currency_affixes() {
    let env = en();
    let fmt = NumberFormat::with_style(Format::Currency, env.symbols).unwrap();
    assert_eq!(fmt.parse("$1,234.56", &env), 1234.56);
    assert!(fmt.parse("1,234.56", &env).is_nan());
}

#[test]
fn test_parse_infinity() {
    let env = en();
    let fmt = decimal(&env);
    assert_eq!(fmt.parse("\u{221E}", &env), f64::INFINITY);
    assert_eq!(fmt.parse("-\u{221E}", &env), f64::NEG_INFINITY);
}

#[test]
fn test_parse_french_group_separators_leniently() {
    let fr = FormatEnv::for_locale("fr").unwrap();
    let fmt = decimal(&fr);
    // Any space-family separator stands in for the locale's own
    assert_eq!(fmt.parse("123\u{202F}456,99", &fr), 123456.99);
    assert_eq!(fmt.parse("123 456,99", &fr), 123456.99);
    assert_eq!(fmt.parse("123\u{00A0}456,99", &fr), 123456.99);
    assert_eq!(fmt.parse("123456,99", &fr), 123456.99);
}

#[test]
fn test_parse_locale_digits() {
    let ar = FormatEnv::for_locale("ar_EG").unwrap();
    let fmt = decimal(&ar);
    assert_eq!(fmt.parse("\u{661}\u{662}\u{663}", &ar), 123.0);
    // ASCII digits always parse
    assert_eq!(fmt.parse("123", &ar), 123.0);
}

#[test]
fn test_parse_round_trips_formatted_output() {
    let env = en();
    let fmt = decimal(&env);
    for value in [0.0, 0.5, 123.457, -1234.579, 1e15] {
        let text = fmt.format(value, &env).unwrap();
        assert_eq!(fmt.parse(&text, &env), value, "round trip of {}", text);
    }
}
