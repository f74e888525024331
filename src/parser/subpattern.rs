//! Assembly of a token stream into one compiled sub-pattern
//!
//! The token parsers in [`super::tokens`] know nothing about position;
//! this pass walks the stream once and classifies each token into the
//! prefix, the numeric body, an optional exponent, or the suffix, while
//! collecting digit counts and grouping boundaries.

use crate::types::{AffixPart, ExponentSpec, PatternError, SubPattern};

use super::tokens::PatternToken;

/// Where the walk currently is within the sub-pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Prefix,
    Integer,
    Fraction,
    Exponent,
    Suffix,
}

/// Builds a [`SubPattern`] from one `;`-free token slice, returning the
/// power-of-ten multiplier (`0`, `2` for `%`, `3` for `‰`) alongside it.
pub fn assemble(tokens: &[PatternToken]) -> Result<(SubPattern, i32), PatternError> {
    let mut prefix: Vec<AffixPart> = Vec::new();
    let mut suffix: Vec<AffixPart> = Vec::new();

    let mut phase = Phase::Prefix;
    let mut multiplier_pow10 = 0i32;

    let mut int_zeros = 0u32;
    let mut int_total = 0u32;
    let mut frac_zeros = 0u32;
    let mut frac_total = 0u32;
    let mut decimal_seen = false;

    // Integer digit counts at each grouping separator, left to right
    let mut group_marks: Vec<u32> = Vec::new();

    let mut exponent: Option<ExponentSpec> = None;
    let mut exp_digits = 0u32;
    let mut exp_signed = false;

    for token in tokens {
        // An exponent run ends at the first token that is neither a
        // digit placeholder nor its leading sign.
        if phase == Phase::Exponent {
            match token {
                PatternToken::Plus if exp_digits == 0 => {
                    exp_signed = true;
                    continue;
                }
                PatternToken::ZeroDigit => {
                    exp_digits += 1;
                    continue;
                }
                _ => {
                    if exp_digits == 0 {
                        return Err(PatternError::MissingExponentDigits);
                    }
                    exponent = Some(ExponentSpec { min_digits: exp_digits, signed: exp_signed });
                    phase = Phase::Suffix;
                }
            }
        }

        match token {
            PatternToken::Digit | PatternToken::ZeroDigit => {
                let zero = *token == PatternToken::ZeroDigit;
                match phase {
                    Phase::Suffix => {
                        // Stray digits after the body are literal text
                        push_literal(&mut suffix, if zero { '0' } else { '#' });
                    }
                    Phase::Fraction => {
                        frac_total += 1;
                        if zero && frac_total == frac_zeros + 1 {
                            frac_zeros += 1;
                        }
                    }
                    _ => {
                        phase = Phase::Integer;
                        int_total += 1;
                        if zero {
                            int_zeros += 1;
                        }
                    }
                }
            }
            PatternToken::DecimalSeparator => match phase {
                Phase::Suffix => push_literal(&mut suffix, '.'),
                Phase::Fraction => return Err(PatternError::MultipleDecimalSeparators),
                _ => {
                    phase = Phase::Fraction;
                    decimal_seen = true;
                }
            },
            PatternToken::GroupingSeparator => match phase {
                Phase::Suffix => push_literal(&mut suffix, ','),
                Phase::Fraction => return Err(PatternError::GroupingSeparatorInFraction),
                _ => {
                    phase = Phase::Integer;
                    group_marks.push(int_total);
                }
            },
            PatternToken::Exponent => match phase {
                Phase::Suffix => push_literal(&mut suffix, 'E'),
                _ => {
                    phase = Phase::Exponent;
                    exp_digits = 0;
                    exp_signed = false;
                }
            },
            PatternToken::Percent | PatternToken::PerMill => {
                if multiplier_pow10 != 0 {
                    return Err(PatternError::MultipleMultipliers);
                }
                let (part, pow) = if *token == PatternToken::Percent {
                    (AffixPart::Percent, 2)
                } else {
                    (AffixPart::PerMill, 3)
                };
                multiplier_pow10 = pow;
                if phase == Phase::Prefix {
                    prefix.push(part);
                } else {
                    phase = Phase::Suffix;
                    suffix.push(part);
                }
            }
            PatternToken::CurrencySymbol
            | PatternToken::CurrencyCode
            | PatternToken::Plus
            | PatternToken::Minus
            | PatternToken::Literal(_) => {
                let part = match token {
                    PatternToken::CurrencySymbol => AffixPart::CurrencySymbol,
                    PatternToken::CurrencyCode => AffixPart::CurrencyCode,
                    PatternToken::Plus => AffixPart::PlusSign,
                    PatternToken::Minus => AffixPart::MinusSign,
                    PatternToken::Literal(text) => AffixPart::Literal(text.clone()),
                    _ => unreachable!(),
                };
                if phase == Phase::Prefix {
                    push_part(&mut prefix, part);
                } else {
                    phase = Phase::Suffix;
                    push_part(&mut suffix, part);
                }
            }
            PatternToken::SubPatternBoundary => {
                unreachable!("boundaries are split off before assembly")
            }
        }
    }

    if phase == Phase::Exponent {
        if exp_digits == 0 {
            return Err(PatternError::MissingExponentDigits);
        }
        exponent = Some(ExponentSpec { min_digits: exp_digits, signed: exp_signed });
    }

    Ok((
        SubPattern {
            prefix,
            suffix,
            min_integer_digits: int_zeros,
            max_integer_digits: int_total,
            min_fraction_digits: frac_zeros,
            max_fraction_digits: frac_total,
            grouping_sizes: grouping_sizes(&group_marks, int_total),
            exponent,
            decimal_separator_always_shown: decimal_seen && frac_total == 0,
        },
        multiplier_pow10,
    ))
}

/// Converts left-to-right separator positions into group sizes listed
/// outward from the decimal point. `#,##,###` marks separators at digit
/// counts 1 and 3 of 6 total, which reads back as sizes `[3, 2]`.
fn grouping_sizes(marks: &[u32], int_total: u32) -> Vec<u8> {
    let mut sizes = Vec::with_capacity(marks.len());
    let mut outer = int_total;
    for mark in marks.iter().rev() {
        let size = outer.saturating_sub(*mark);
        if size > 0 {
            sizes.push(size.min(u8::MAX as u32) as u8);
        }
        outer = *mark;
    }
    sizes
}

/// Appends one affix part, merging adjacent literals
fn push_part(affix: &mut Vec<AffixPart>, part: AffixPart) {
    if let (AffixPart::Literal(text), Some(AffixPart::Literal(last))) =
        (&part, affix.last_mut())
    {
        last.push_str(text);
        return;
    }
    affix.push(part);
}

fn push_literal(affix: &mut Vec<AffixPart>, c: char) {
    push_part(affix, AffixPart::Literal(c.to_string()));
}
