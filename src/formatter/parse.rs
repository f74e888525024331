//! Text to value recovery
//!
//! Parsing is lenient where display is strict: grouping separators are
//! optional and the space-family separators are interchangeable, but a
//! prefix or suffix the pattern promises must be present. Failure is
//! reported as the NaN sentinel with no position advance, never as an
//! error value.

use crate::types::NumberSymbols;

use super::{render_affix, FormatEnv, NumberFormat};

/// Space-family characters treated as the same grouping separator
const SPACE_FAMILY: [char; 3] = [' ', '\u{00A0}', '\u{202F}'];

pub(crate) fn parse_at(
    fmt: &NumberFormat,
    text: &str,
    start: usize,
    env: &FormatEnv,
) -> (f64, usize) {
    let failure = (f64::NAN, start);
    let Some(rest) = text.get(start..) else {
        return failure;
    };
    let symbols = env.symbols;

    let positive_prefix = render_affix(&fmt.pattern.positive.prefix, fmt, env);
    let negative_prefix = render_affix(&fmt.pattern.negative.prefix, fmt, env);

    // The negative prefix wins when it is present and distinguishable;
    // a pattern without an explicit sign still derives "-" here.
    let (negative, prefix_len) = if !negative_prefix.is_empty() && rest.starts_with(&negative_prefix)
    {
        (true, negative_prefix.len())
    } else if rest.starts_with(&positive_prefix) {
        (false, positive_prefix.len())
    } else {
        return failure;
    };
    let mut pos = start + prefix_len;

    let suffix = if negative {
        render_affix(&fmt.pattern.negative.suffix, fmt, env)
    } else {
        render_affix(&fmt.pattern.positive.suffix, fmt, env)
    };

    if text[pos..].starts_with(&symbols.infinity) {
        pos += symbols.infinity.len();
        if !suffix.is_empty() {
            if !text[pos..].starts_with(&suffix) {
                return failure;
            }
            pos += suffix.len();
        }
        let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return (value, pos);
    }

    let Some(numeral) = scan_numeral(fmt, &text[pos..], symbols) else {
        return failure;
    };
    let mut end = pos + numeral.consumed;

    if !suffix.is_empty() {
        if !text[end..].starts_with(&suffix) {
            return failure;
        }
        end += suffix.len();
    }

    let Ok(mut value) = numeral.normalized.parse::<f64>() else {
        return failure;
    };
    let scale = fmt.pattern.multiplier_pow10 + numeral.scale_pow10;
    if scale != 0 {
        value /= 10f64.powi(scale);
    }
    if negative {
        value = -value;
    }
    (value, end)
}

/// A numeral scanned out of the input, normalized to ASCII `f64` syntax
struct Numeral {
    normalized: String,
    /// Bytes consumed up to the last significant character
    consumed: usize,
    /// Extra power-of-ten scale from an inline percent or per-mille
    scale_pow10: i32,
}

fn scan_numeral(fmt: &NumberFormat, text: &str, symbols: &NumberSymbols) -> Option<Numeral> {
    let exponential = fmt.pattern.positive.exponent.is_some();
    // An inline % only scales when the pattern itself is not already a
    // percent pattern; there the suffix match applies the multiplier.
    let inline_scale_allowed = fmt.pattern.multiplier_pow10 == 0;

    let mut normalized = String::new();
    let mut consumed = 0usize;
    let mut scale_pow10 = 0i32;
    let mut idx = 0usize;
    let mut saw_digit = false;
    let mut saw_decimal = false;
    let mut saw_exponent = false;

    while idx < text.len() {
        let rest = &text[idx..];
        let c = rest.chars().next()?;

        if let Some(digit) = digit_value(c, symbols) {
            normalized.push((b'0' + digit) as char);
            saw_digit = true;
            idx += c.len_utf8();
            consumed = idx;
            continue;
        }

        if exponential && saw_digit && !saw_exponent && rest.starts_with(&symbols.exponent_symbol)
        {
            normalized.push('e');
            saw_exponent = true;
            idx += symbols.exponent_symbol.len();
            if let Some(sign) = match_sign(&text[idx..], symbols) {
                normalized.push(sign.0);
                idx += sign.1;
            }
            continue;
        }

        if !saw_digit && normalized.is_empty() {
            if let Some(sign) = match_sign(rest, symbols) {
                normalized.push(sign.0);
                idx += sign.1;
                consumed = idx;
                continue;
            }
        }

        if c == symbols.decimal_separator && !saw_decimal && !saw_exponent {
            normalized.push('.');
            saw_decimal = true;
            idx += c.len_utf8();
            consumed = idx;
            continue;
        }

        let is_grouping = c == symbols.grouping_separator
            || (SPACE_FAMILY.contains(&c) && SPACE_FAMILY.contains(&symbols.grouping_separator));
        if is_grouping && saw_digit && !saw_decimal && !saw_exponent {
            // Lenient skip, not counted as significant
            idx += c.len_utf8();
            continue;
        }

        if inline_scale_allowed && scale_pow10 == 0 {
            let pow = if rest.starts_with(&symbols.percent) {
                Some((2, symbols.percent.len()))
            } else if rest.starts_with(&symbols.permill) {
                Some((3, symbols.permill.len()))
            } else {
                None
            };
            if let Some((pow, len)) = pow {
                scale_pow10 = pow;
                idx += len;
                if saw_digit {
                    consumed = idx;
                    break;
                }
                continue;
            }
        }

        break;
    }

    if !saw_digit {
        return None;
    }

    // Roll back a dangling exponent marker that gathered no digits
    if let Some(marker) = normalized.find('e') {
        let exponent_digits = normalized[marker + 1..].trim_start_matches(['+', '-']);
        if exponent_digits.is_empty() {
            normalized.truncate(marker);
        }
    }

    Some(Numeral { normalized, consumed, scale_pow10 })
}

/// Matches an explicit sign, ASCII or locale glyph, returning its
/// normalized character and byte length
fn match_sign(text: &str, symbols: &NumberSymbols) -> Option<(char, usize)> {
    if text.starts_with('-') {
        Some(('-', 1))
    } else if text.starts_with('+') {
        Some(('+', 1))
    } else if text.starts_with(&symbols.minus_sign) {
        Some(('-', symbols.minus_sign.len()))
    } else if text.starts_with(&symbols.plus_sign) {
        Some(('+', symbols.plus_sign.len()))
    } else {
        None
    }
}

/// ASCII digits parse in every locale; the locale digit block parses
/// alongside them
fn digit_value(c: char, symbols: &NumberSymbols) -> Option<u8> {
    if c.is_ascii_digit() {
        return Some(c as u8 - b'0');
    }
    let zero = symbols.zero_digit as u32;
    let offset = (c as u32).wrapping_sub(zero);
    if offset < 10 { Some(offset as u8) } else { None }
}
