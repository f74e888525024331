//! Scientific notation rendering
//!
//! The mantissa/exponent split follows the ICU conventions: a pattern
//! like `##0.###E0` whose integer placeholders outnumber its required
//! digits pins the exponent to a multiple of the placeholder count
//! (engineering notation), `.###E0` keeps the mantissa below one, and
//! anything else fixes the integer digit count of the mantissa.

use crate::decimal::Decimal;
use crate::types::{NumberSymbols, SubPattern};

use super::fixed::{self, FixedLayout};
use super::precision::Precision;

/// How the exponent is chosen for a given pattern shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExponentPolicy {
    /// Exponent is the nearest lower multiple of `n`; the mantissa
    /// keeps between 1 and `n` integer digits
    MultipleOf(u32),
    /// Mantissa stays below 1 (`.###E0` patterns)
    FractionalMantissa,
    /// Mantissa keeps exactly `n` integer digits
    IntegerDigits(u32),
}

fn policy(sub: &SubPattern) -> ExponentPolicy {
    if sub.max_integer_digits > sub.min_integer_digits && sub.max_integer_digits > 1 {
        ExponentPolicy::MultipleOf(sub.max_integer_digits)
    } else if sub.min_integer_digits == 0 && sub.max_integer_digits == 0 {
        ExponentPolicy::FractionalMantissa
    } else {
        ExponentPolicy::IntegerDigits(sub.min_integer_digits.max(1))
    }
}

pub(crate) fn render(
    dec: &Decimal,
    sub: &SubPattern,
    precision: &Precision,
    symbols: &NumberSymbols,
    enforce_ascii_digits: bool,
) -> String {
    let policy = policy(sub);

    let (mut mantissa, mut exponent, min_integer) = if dec.is_zero() {
        let min_integer = match policy {
            ExponentPolicy::MultipleOf(_) => 1,
            ExponentPolicy::FractionalMantissa => 0,
            ExponentPolicy::IntegerDigits(n) => n,
        };
        (Decimal::zero(), 0i32, min_integer)
    } else {
        let magnitude = dec.magnitude();
        let (exponent, min_integer) = match policy {
            ExponentPolicy::MultipleOf(n) => {
                (magnitude.div_euclid(n as i32) * n as i32, 1)
            }
            ExponentPolicy::FractionalMantissa => (magnitude + 1, 0),
            ExponentPolicy::IntegerDigits(n) => (magnitude - (n as i32 - 1), n),
        };
        (dec.clone().shifted(-exponent), exponent, min_integer)
    };

    precision.apply(&mut mantissa);

    // Rounding can carry into a new integer digit; shift the excess
    // back into the exponent.
    if !mantissa.is_zero() {
        let count = mantissa.integer_digit_count();
        let excess = match policy {
            ExponentPolicy::MultipleOf(n) if count > n => count as i32 - 1,
            ExponentPolicy::MultipleOf(_) => 0,
            ExponentPolicy::FractionalMantissa if count > 0 => count as i32,
            ExponentPolicy::FractionalMantissa => 0,
            ExponentPolicy::IntegerDigits(n) if count > n => (count - n) as i32,
            ExponentPolicy::IntegerDigits(_) => 0,
        };
        if excess > 0 {
            mantissa.shift(-excess);
            exponent += excess;
        }
    }

    let layout = FixedLayout {
        min_integer_digits: min_integer,
        max_integer_digits: sub.max_integer_digits,
        grouping_sizes: &[],
        decimal_separator_always_shown: sub.decimal_separator_always_shown,
    };
    let mut out = fixed::render_rounded(&mantissa, &layout, precision, symbols, enforce_ascii_digits);

    out.push_str(&symbols.exponent_symbol);
    let spec = sub.exponent.unwrap_or_default();
    if exponent < 0 {
        out.push_str(&symbols.minus_sign);
    } else if spec.signed {
        out.push_str(&symbols.plus_sign);
    }
    // Exponent digits stay ASCII even for locales with their own digit
    // block.
    let digits = exponent.unsigned_abs().to_string();
    for _ in digits.len()..spec.min_digits as usize {
        out.push('0');
    }
    out.push_str(&digits);
    out
}
