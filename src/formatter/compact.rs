//! Compact notation selection
//!
//! Chooses the magnitude entry, the divisor and the surrounding affix
//! text for compact formatting. Selection runs against the pivot value
//! (normally the value itself, see `format_with_pivot`), and is
//! re-resolved once if rounding the compacted quotient carries it into
//! the next magnitude: 999999 at two significant digits is 1M, not
//! 1000K.

use std::collections::HashMap;

use crate::decimal::Decimal;
use crate::parser::compile_pattern;
use crate::types::{CompactStyle, CompactTable, PluralCategory};

use super::precision::Precision;
use super::{render_affix, FormatEnv, NumberFormat};

/// The resolved compact unit for one format call
#[derive(Debug, Clone)]
pub(crate) struct Unit {
    pub divisor_pow10: i32,
    pub prefix: String,
    pub suffix: String,
    /// A bare `0` table entry: format the full number unchanged and
    /// skip significant-digit rounding
    pub verbatim: bool,
}

impl Unit {
    pub fn none() -> Self {
        Unit { divisor_pow10: 0, prefix: String::new(), suffix: String::new(), verbatim: false }
    }

    fn verbatim() -> Self {
        Unit { divisor_pow10: 0, prefix: String::new(), suffix: String::new(), verbatim: true }
    }
}

/// One parsed table entry
struct Entry {
    divisor_pow10: i32,
    prefix: String,
    suffix: String,
    verbatim: bool,
}

pub(crate) fn select_unit(
    fmt: &NumberFormat,
    value: f64,
    pivot: Option<f64>,
    env: &FormatEnv,
) -> Unit {
    let table = match fmt.compact_style {
        CompactStyle::None => return Unit::none(),
        CompactStyle::Short => env.compact.map(|c| &c.short),
        // An unpopulated long table falls back to the short one
        CompactStyle::Long => env
            .compact
            .map(|c| if c.long.is_empty() { &c.short } else { &c.long }),
    };
    let Some(table) = table.filter(|t| !t.is_empty()) else {
        return Unit::none();
    };

    let pivot_value = pivot.or(fmt.base_formatting).unwrap_or(value);

    if pivot_value.is_infinite() || value.is_infinite() {
        // Infinity takes the largest magnitude's affixes
        let Some((magnitude, _)) = table.iter().next_back() else {
            return Unit::none();
        };
        return match parse_entry(table, *magnitude, PluralCategory::Other, fmt, env) {
            Some(entry) => Unit {
                divisor_pow10: entry.divisor_pow10,
                prefix: entry.prefix,
                suffix: entry.suffix,
                verbatim: false,
            },
            None => Unit::none(),
        };
    }

    let pivot_dec = Decimal::from_abs(pivot_value);
    if pivot_dec.is_zero() {
        return Unit::none();
    }

    let precision = Precision {
        min_fraction: fmt.min_fraction_digits,
        max_fraction: fmt.max_fraction_digits,
        significant: fmt.significant_digits,
        show_trailing_zeros: fmt.show_trailing_zeros,
    };

    let Some(magnitude) = lookup_magnitude(table, pivot_dec.magnitude()) else {
        return Unit::none(); // Below the table: plain formatting
    };
    let Some(entry) = parse_entry(table, magnitude, PluralCategory::Other, fmt, env) else {
        return Unit::none();
    };
    if entry.verbatim {
        return Unit::verbatim();
    }

    // Rounding the compacted quotient may push it into the next
    // magnitude; re-resolve once against the rounded pivot.
    let mut quotient = pivot_dec.clone().shifted(-entry.divisor_pow10);
    precision.apply(&mut quotient);
    let rounded_magnitude = quotient.magnitude() + entry.divisor_pow10;
    let magnitude = lookup_magnitude(table, rounded_magnitude).unwrap_or(magnitude);
    let Some(entry) = parse_entry(table, magnitude, PluralCategory::Other, fmt, env) else {
        return Unit::none();
    };
    if entry.verbatim {
        return Unit::verbatim();
    }

    // The plural category comes from the rounded quotient of the value
    // actually being formatted.
    let mut value_quotient = Decimal::from_abs(value)
        .shifted(fmt.pattern.multiplier_pow10)
        .shifted(-entry.divisor_pow10);
    precision.apply(&mut value_quotient);
    let category = env.plural.select(value_quotient.to_f64());

    match parse_entry(table, magnitude, category, fmt, env) {
        Some(entry) if !entry.verbatim => Unit {
            divisor_pow10: entry.divisor_pow10,
            prefix: entry.prefix,
            suffix: entry.suffix,
            verbatim: false,
        },
        Some(_) => Unit::verbatim(),
        None => Unit::none(),
    }
}

/// Nearest populated magnitude at or below `magnitude`
fn lookup_magnitude(table: &CompactTable, magnitude: i32) -> Option<i32> {
    table.range(..=magnitude).next_back().map(|(k, _)| *k)
}

fn entry_pattern(
    patterns: &HashMap<PluralCategory, String>,
    category: PluralCategory,
) -> Option<&String> {
    patterns
        .get(&category)
        .or_else(|| patterns.get(&PluralCategory::Other))
        .or_else(|| patterns.values().next())
}

/// Compiles one table entry into its divisor and affix text. The
/// divisor is the entry magnitude scaled down by the extra zeros in
/// the pattern: "00K" at e4 divides by 10^3 so two digits remain.
fn parse_entry(
    table: &CompactTable,
    magnitude: i32,
    category: PluralCategory,
    fmt: &NumberFormat,
    env: &FormatEnv,
) -> Option<Entry> {
    let patterns = table.get(&magnitude)?;
    let pattern = entry_pattern(patterns, category)?;
    let compiled = compile_pattern(pattern).ok()?;
    let sub = &compiled.positive;

    let verbatim = sub.prefix.is_empty() && sub.suffix.is_empty();
    let zeros = sub.min_integer_digits.max(1) as i32;
    Some(Entry {
        divisor_pow10: if verbatim { 0 } else { magnitude - (zeros - 1) },
        prefix: render_affix(&sub.prefix, fmt, env),
        suffix: render_affix(&sub.suffix, fmt, env),
        verbatim,
    })
}
