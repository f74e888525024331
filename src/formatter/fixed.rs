//! Plain and grouped notation rendering

use crate::decimal::Decimal;
use crate::types::{NumberSymbols, SubPattern};

use super::precision::Precision;

/// Digit layout extracted from a sub-pattern. Exponential rendering
/// reuses this with its own integer-digit bounds and no grouping.
#[derive(Debug, Clone)]
pub(crate) struct FixedLayout<'a> {
    pub min_integer_digits: u32,
    pub max_integer_digits: u32,
    pub grouping_sizes: &'a [u8],
    pub decimal_separator_always_shown: bool,
}

impl<'a> FixedLayout<'a> {
    pub fn from_sub_pattern(sub: &'a SubPattern) -> Self {
        FixedLayout {
            min_integer_digits: sub.min_integer_digits,
            max_integer_digits: sub.max_integer_digits,
            grouping_sizes: &sub.grouping_sizes,
            decimal_separator_always_shown: sub.decimal_separator_always_shown,
        }
    }
}

/// Rounds and renders one unsigned magnitude
pub(crate) fn render(
    dec: &Decimal,
    layout: &FixedLayout,
    precision: &Precision,
    symbols: &NumberSymbols,
    enforce_ascii_digits: bool,
) -> String {
    let mut rounded = dec.clone();
    precision.apply(&mut rounded);
    render_rounded(&rounded, layout, precision, symbols, enforce_ascii_digits)
}

/// Renders an already-rounded magnitude
pub(crate) fn render_rounded(
    dec: &Decimal,
    layout: &FixedLayout,
    precision: &Precision,
    symbols: &NumberSymbols,
    enforce_ascii_digits: bool,
) -> String {
    let integer_count = dec.integer_digit_count();
    let shown_integer = integer_count.max(layout.min_integer_digits);

    let mut integer = String::with_capacity(shown_integer as usize + 4);
    for place in (0..shown_integer as i32).rev() {
        integer.push((b'0' + dec.digit_at(place)) as char);
    }

    let shown_fraction = precision
        .display_min_fraction(integer_count)
        .max(dec.fraction_digit_count());
    let mut fraction = String::with_capacity(shown_fraction as usize);
    for place in 1..=shown_fraction as i32 {
        fraction.push((b'0' + dec.digit_at(-place)) as char);
    }

    // A value of zero under a pattern with no required digits still
    // needs one: into the integer part when the pattern has integer
    // placeholders, else into the fraction ("#.#" -> "0", ".#" -> ".0").
    if integer.is_empty() && fraction.is_empty() {
        if layout.max_integer_digits > 0 || layout.decimal_separator_always_shown {
            integer.push('0');
        } else {
            fraction.push('0');
        }
    }

    let grouped = group_integer(&integer, layout.grouping_sizes, symbols.grouping_separator);

    let mut out = grouped;
    if !fraction.is_empty() || layout.decimal_separator_always_shown {
        out.push(symbols.decimal_separator);
        out.push_str(&fraction);
    }

    map_digits(&out, symbols, enforce_ascii_digits)
}

/// Inserts grouping separators right to left. The sizes are listed
/// outward from the decimal point and the last one repeats.
fn group_integer(integer: &str, sizes: &[u8], separator: char) -> String {
    if sizes.is_empty() || integer.is_empty() {
        return integer.to_string();
    }

    // Digit counts (from the right) at which a separator lands
    let len = integer.len() as u32;
    let mut boundaries = Vec::new();
    let mut position = 0u32;
    for i in 0.. {
        let size = sizes[(i as usize).min(sizes.len() - 1)] as u32;
        if size == 0 {
            break;
        }
        position += size;
        if position >= len {
            break;
        }
        boundaries.push(position);
    }

    let mut out = String::with_capacity(integer.len() + boundaries.len());
    for (i, c) in integer.chars().enumerate() {
        out.push(c);
        let from_right = len - i as u32 - 1;
        if from_right > 0 && boundaries.contains(&from_right) {
            out.push(separator);
        }
    }
    out
}

/// Maps ASCII digits onto the locale digit block, unless ASCII output
/// is being enforced
pub(crate) fn map_digits(text: &str, symbols: &NumberSymbols, enforce_ascii: bool) -> String {
    if enforce_ascii || symbols.zero_digit == '0' {
        return text.to_string();
    }
    let zero = symbols.zero_digit as u32;
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32(zero + (c as u32 - '0' as u32)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
