//! Number formatting and parsing against compiled patterns
//!
//! [`NumberFormat`] owns a compiled pattern plus the mutable precision
//! configuration; everything locale-shaped arrives per call through a
//! [`FormatEnv`], so one formatter can serve any symbol table and
//! symbol tables can be swapped without rebuilding formatters.

use crate::decimal::Decimal;
use crate::locale::LocaleManager;
use crate::parser::compile_pattern;
use crate::types::{
    AffixPart, CompactStyle, CompactSymbols, CompiledPattern, ConfigurationError, CurrencyStyle,
    CurrencyTable, Format, NumberSymbols, PatternError, PluralRule, MAX_FRACTION_DIGITS,
};

mod compact;
mod currency;
mod exponential;
mod fixed;
mod parse;
mod precision;

use fixed::FixedLayout;
use precision::Precision;

/// Per-call formatting context: the symbol table and the optional data
/// collaborators around it.
#[derive(Debug, Clone, Copy)]
pub struct FormatEnv<'a> {
    pub symbols: &'a NumberSymbols,
    pub compact: Option<&'a CompactSymbols>,
    pub currencies: Option<&'a CurrencyTable>,
    pub plural: PluralRule,
    /// Render ASCII digits even when the locale has its own digit block
    pub enforce_ascii_digits: bool,
}

impl<'a> FormatEnv<'a> {
    /// A minimal environment around one symbol table
    pub fn new(symbols: &'a NumberSymbols) -> Self {
        FormatEnv {
            symbols,
            compact: None,
            currencies: None,
            plural: PluralRule::default(),
            enforce_ascii_digits: false,
        }
    }
}

impl FormatEnv<'static> {
    /// Builds an environment from the embedded locale data
    pub fn for_locale(locale: &str) -> Option<Self> {
        let manager = LocaleManager::instance();
        let data = manager.get(locale).ok()?;
        Some(FormatEnv {
            symbols: &data.symbols,
            compact: Some(&data.compact),
            currencies: Some(manager.currencies()),
            plural: data.plural,
            enforce_ascii_digits: false,
        })
    }
}

/// A formatter/parser built from one pattern
#[derive(Debug, Clone)]
pub struct NumberFormat {
    pattern: CompiledPattern,
    compact_style: CompactStyle,
    currency_code: String,
    currency_style: CurrencyStyle,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    significant_digits: u32,
    show_trailing_zeros: bool,
    base_formatting: Option<f64>,
}

impl NumberFormat {
    /// Builds a formatter from an explicit pattern string. The symbol
    /// table only seeds the default currency code; it is not captured.
    pub fn from_pattern(pattern: &str, symbols: &NumberSymbols) -> Result<Self, PatternError> {
        let compiled = compile_pattern(pattern)?;
        Ok(NumberFormat {
            min_fraction_digits: compiled.positive.min_fraction_digits,
            max_fraction_digits: compiled.positive.max_fraction_digits,
            pattern: compiled,
            compact_style: CompactStyle::None,
            currency_code: symbols.currency_code.clone(),
            currency_style: CurrencyStyle::default(),
            significant_digits: 0,
            show_trailing_zeros: false,
            base_formatting: None,
        })
    }

    /// Builds a formatter with an explicit currency. The code must be
    /// three ASCII letters; it is normalized to upper case.
    pub fn with_currency(
        pattern: &str,
        code: &str,
        style: CurrencyStyle,
        symbols: &NumberSymbols,
    ) -> Result<Self, PatternError> {
        let code = currency::normalize_code(code)?;
        let mut fmt = Self::from_pattern(pattern, symbols)?;
        fmt.currency_code = code;
        fmt.currency_style = style;
        Ok(fmt)
    }

    /// Builds a formatter for a named style, resolving the pattern
    /// through the symbol table. Compact styles default to two
    /// significant digits.
    pub fn with_style(style: Format, symbols: &NumberSymbols) -> Result<Self, PatternError> {
        let (pattern, compact) = match style {
            Format::Decimal => (symbols.decimal_pattern.as_str(), CompactStyle::None),
            Format::Scientific => (symbols.scientific_pattern.as_str(), CompactStyle::None),
            Format::Percent => (symbols.percent_pattern.as_str(), CompactStyle::None),
            Format::Currency => (symbols.currency_pattern.as_str(), CompactStyle::None),
            Format::CompactShort => (symbols.decimal_pattern.as_str(), CompactStyle::Short),
            Format::CompactLong => (symbols.decimal_pattern.as_str(), CompactStyle::Long),
        };
        let mut fmt = Self::from_pattern(pattern, symbols)?;
        fmt.compact_style = compact;
        if compact != CompactStyle::None {
            fmt.significant_digits = 2;
            fmt.max_fraction_digits = 2;
        }
        Ok(fmt)
    }

    pub fn minimum_fraction_digits(&self) -> u32 {
        self.min_fraction_digits
    }

    /// Sets the minimum displayed fraction digits. Values above the
    /// supported ceiling are rejected; ordering against the maximum is
    /// checked at format time, so the two setters may run in any order.
    pub fn set_minimum_fraction_digits(&mut self, min: u32) -> Result<(), ConfigurationError> {
        if min > MAX_FRACTION_DIGITS {
            return Err(ConfigurationError::UnsupportedMinimumFractionDigits(min));
        }
        self.min_fraction_digits = min;
        Ok(())
    }

    pub fn maximum_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    pub fn set_maximum_fraction_digits(&mut self, max: u32) -> Result<(), ConfigurationError> {
        if max > MAX_FRACTION_DIGITS {
            return Err(ConfigurationError::UnsupportedMaximumFractionDigits(max));
        }
        self.max_fraction_digits = max;
        Ok(())
    }

    pub fn significant_digits(&self) -> u32 {
        self.significant_digits
    }

    /// Sets the significant digit count; 0 disables significant-digit
    /// mode
    pub fn set_significant_digits(&mut self, digits: u32) {
        self.significant_digits = digits;
    }

    pub fn set_show_trailing_zeros(&mut self, show: bool) {
        self.show_trailing_zeros = show;
    }

    pub fn base_formatting(&self) -> Option<f64> {
        self.base_formatting
    }

    /// Pins compact-unit selection to this value instead of each
    /// formatted value ("12K" and "0.1K" from the same table row)
    pub fn set_base_formatting(&mut self, base: Option<f64>) {
        self.base_formatting = base;
    }

    /// Whether the currency placeholder renders before the digits.
    /// Patterns without a placeholder answer true.
    pub fn is_currency_code_before_value(&self) -> bool {
        let sub = &self.pattern.positive;
        let currency =
            |part: &AffixPart| matches!(part, AffixPart::CurrencySymbol | AffixPart::CurrencyCode);
        let in_prefix = sub.prefix.iter().any(currency);
        let in_suffix = sub.suffix.iter().any(currency);
        !(in_suffix && !in_prefix)
    }

    pub fn format(&self, value: f64, env: &FormatEnv) -> Result<String, ConfigurationError> {
        self.format_with_pivot(value, None, env)
    }

    /// Formats with an explicit compact pivot, overriding any pinned
    /// base formatting value for this call.
    pub fn format_with_pivot(
        &self,
        value: f64,
        pivot: Option<f64>,
        env: &FormatEnv,
    ) -> Result<String, ConfigurationError> {
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(ConfigurationError::FractionDigitsOutOfOrder {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }

        let symbols = env.symbols;
        if value.is_nan() {
            return Ok(symbols.nan.clone());
        }

        // -0.0 formats as positive; a negative value that rounds to
        // zero keeps its sign.
        let negative = value < 0.0;
        let sub = self.pattern.sub_pattern(negative);
        let prefix = render_affix(&sub.prefix, self, env);
        let suffix = render_affix(&sub.suffix, self, env);

        let unit = compact::select_unit(self, value, pivot, env);

        if value.is_infinite() {
            return Ok(format!(
                "{}{}{}{}{}",
                unit.prefix, prefix, symbols.infinity, suffix, unit.suffix
            ));
        }

        let precision = Precision {
            min_fraction: self.min_fraction_digits,
            max_fraction: self.max_fraction_digits,
            significant: if unit.verbatim { 0 } else { self.significant_digits },
            show_trailing_zeros: self.show_trailing_zeros,
        };

        let dec = Decimal::from_abs(value)
            .shifted(self.pattern.multiplier_pow10)
            .shifted(-unit.divisor_pow10);

        let numeral = if sub.exponent.is_some() {
            exponential::render(&dec, sub, &precision, symbols, env.enforce_ascii_digits)
        } else {
            let layout = FixedLayout::from_sub_pattern(sub);
            fixed::render(&dec, &layout, &precision, symbols, env.enforce_ascii_digits)
        };

        Ok(format!(
            "{}{}{}{}{}",
            unit.prefix, prefix, numeral, suffix, unit.suffix
        ))
    }

    /// Parses from the start of `text`. Failure is the NaN sentinel.
    pub fn parse(&self, text: &str, env: &FormatEnv) -> f64 {
        self.parse_at(text, 0, env).0
    }

    /// Parses at a byte offset, returning the value and the position
    /// after the last consumed character. On failure the position does
    /// not advance.
    pub fn parse_at(&self, text: &str, start: usize, env: &FormatEnv) -> (f64, usize) {
        parse::parse_at(self, text, start, env)
    }
}

/// Renders one affix against the live symbol table and currency
/// configuration
fn render_affix(parts: &[AffixPart], fmt: &NumberFormat, env: &FormatEnv) -> String {
    let symbols = env.symbols;
    let mut out = String::new();
    for part in parts {
        match part {
            AffixPart::Literal(text) => out.push_str(text),
            AffixPart::MinusSign => out.push_str(&symbols.minus_sign),
            AffixPart::PlusSign => out.push_str(&symbols.plus_sign),
            AffixPart::Percent => out.push_str(&symbols.percent),
            AffixPart::PerMill => out.push_str(&symbols.permill),
            AffixPart::CurrencySymbol => out.push_str(&currency::resolve(
                &fmt.currency_code,
                fmt.currency_style,
                env.currencies,
            )),
            AffixPart::CurrencyCode => out.push_str(&fmt.currency_code),
        }
    }
    out
}
