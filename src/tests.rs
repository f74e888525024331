//! Pattern compiler unit tests

use crate::parser::compile_pattern;
use crate::types::{AffixPart, PatternError};

#[test]
fn test_basic_decimal_pattern() {
    let p = compile_pattern("#,##0.###").unwrap();
    assert_eq!(p.positive.min_integer_digits, 1);
    assert_eq!(p.positive.min_fraction_digits, 0);
    assert_eq!(p.positive.max_fraction_digits, 3);
    assert_eq!(p.positive.grouping_sizes, vec![3]);
    assert_eq!(p.multiplier_pow10, 0);
    assert!(p.positive.exponent.is_none());
    assert!(!p.positive.decimal_separator_always_shown);
}

#[test]
fn test_derived_negative_subpattern() {
    let p = compile_pattern("0.0").unwrap();
    assert_eq!(p.negative.prefix, vec![AffixPart::MinusSign]);
    assert!(p.negative.suffix.is_empty());
    assert_eq!(p.negative.min_fraction_digits, 1);
}

#[test]
fn test_explicit_negative_subpattern_affixes_only() {
    // The negative half contributes affixes; digits come from the
    // positive half.
    let p = compile_pattern("0.00;(0)").unwrap();
    assert_eq!(p.negative.prefix, vec![AffixPart::Literal("(".to_string())]);
    assert_eq!(p.negative.suffix, vec![AffixPart::Literal(")".to_string())]);
    assert_eq!(p.negative.min_fraction_digits, 2);
    assert_eq!(p.negative.max_fraction_digits, 2);
}

#[test]
fn test_percent_and_permill_multipliers() {
    let p = compile_pattern("#,##0%").unwrap();
    assert_eq!(p.multiplier_pow10, 2);
    assert_eq!(p.positive.suffix, vec![AffixPart::Percent]);

    let p = compile_pattern("#,##0\u{2030}").unwrap();
    assert_eq!(p.multiplier_pow10, 3);
    assert_eq!(p.positive.suffix, vec![AffixPart::PerMill]);
}

#[test]
fn test_currency_placeholders() {
    let p = compile_pattern("\u{00A4}#,##0.00").unwrap();
    assert_eq!(p.positive.prefix, vec![AffixPart::CurrencySymbol]);

    let p = compile_pattern("\u{00A4}\u{00A4} #,##0.00").unwrap();
    assert_eq!(
        p.positive.prefix,
        vec![AffixPart::CurrencyCode, AffixPart::Literal(" ".to_string())]
    );
}

#[test]
fn test_quoting() {
    // Quoted runs hide syntax characters; '' is a literal quote.
    let p = compile_pattern("'#'#").unwrap();
    assert_eq!(p.positive.prefix, vec![AffixPart::Literal("#".to_string())]);

    let p = compile_pattern("0 o''clock").unwrap();
    assert_eq!(
        p.positive.suffix,
        vec![AffixPart::Literal(" o'clock".to_string())]
    );

    let p = compile_pattern("0'%'").unwrap();
    assert_eq!(p.positive.suffix, vec![AffixPart::Literal("%".to_string())]);
    assert_eq!(p.multiplier_pow10, 0);

    assert_eq!(compile_pattern("0 'broken"), Err(PatternError::UnterminatedQuote));
}

#[test]
fn test_exponential_pattern() {
    let p = compile_pattern("0.###E0").unwrap();
    let exp = p.positive.exponent.unwrap();
    assert_eq!(exp.min_digits, 1);
    assert!(!exp.signed);

    let p = compile_pattern("00.###E+00").unwrap();
    let exp = p.positive.exponent.unwrap();
    assert_eq!(exp.min_digits, 2);
    assert!(exp.signed);
    assert_eq!(p.positive.min_integer_digits, 2);

    assert_eq!(compile_pattern("0.###E"), Err(PatternError::MissingExponentDigits));
}

#[test]
fn test_grouping_size_extraction() {
    assert_eq!(compile_pattern("#,###").unwrap().positive.grouping_sizes, vec![3]);
    // Indian convention: last listed size repeats outward
    assert_eq!(compile_pattern("#,##,###").unwrap().positive.grouping_sizes, vec![3, 2]);
    assert_eq!(
        compile_pattern("#,####,##,###").unwrap().positive.grouping_sizes,
        vec![3, 2, 4]
    );
    assert_eq!(compile_pattern("#0.###").unwrap().positive.grouping_sizes, Vec::<u8>::new());
}

#[test]
fn test_decimal_separator_always_shown() {
    assert!(compile_pattern("#.").unwrap().positive.decimal_separator_always_shown);
    assert!(!compile_pattern("#.#").unwrap().positive.decimal_separator_always_shown);
}

#[test]
fn test_pattern_errors() {
    assert_eq!(compile_pattern("0.0.0"), Err(PatternError::MultipleDecimalSeparators));
    assert_eq!(compile_pattern("0.0,0"), Err(PatternError::GroupingSeparatorInFraction));
    assert_eq!(compile_pattern("0;0;0"), Err(PatternError::TooManySubPatterns));
    assert_eq!(compile_pattern("0%%"), Err(PatternError::MultipleMultipliers));
}

#[test]
fn test_affix_ordering_around_body() {
    let p = compile_pattern("0 \u{00A4} #").unwrap();
    assert!(p.positive.prefix.is_empty());
    assert_eq!(
        p.positive.suffix,
        vec![
            AffixPart::Literal(" ".to_string()),
            AffixPart::CurrencySymbol,
            AffixPart::Literal(" #".to_string()),
        ]
    );
}
