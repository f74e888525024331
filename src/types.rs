//! Type definitions for decimal-format patterns
//!
//! This module defines the compiled form of a CLDR/ICU decimal-format
//! pattern, the affix model shared by the formatter and the parser, and
//! the error types raised at compile and configuration time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Absolute ceiling on fraction digit counts. Matches the largest power
/// of ten representable in an `f64`.
pub const MAX_FRACTION_DIGITS: u32 = 308;

/// One piece of a prefix or suffix. Parts that stand for locale symbols
/// or the currency are resolved against the live symbol table at format
/// and parse time, never baked into the compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixPart {
    /// Verbatim text (quoted runs and passthrough characters)
    Literal(String),
    /// `-` in the pattern, rendered with the locale minus sign
    MinusSign,
    /// `+` in the pattern, rendered with the locale plus sign
    PlusSign,
    /// `%`, rendered with the locale percent glyph
    Percent,
    /// `‰`, rendered with the locale per-mille glyph
    PerMill,
    /// `¤`, resolved through the currency style (local/portable/global)
    CurrencySymbol,
    /// `¤¤`, resolved to the ISO currency code
    CurrencyCode,
}

/// Exponent settings of an exponential sub-pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExponentSpec {
    /// Minimum digits in the rendered exponent (zero padded)
    pub min_digits: u32,
    /// Whether a positive exponent carries an explicit plus sign (`E+0`)
    pub signed: bool,
}

/// The positive or negative half of a compiled pattern
#[derive(Debug, Clone, PartialEq)]
pub struct SubPattern {
    pub prefix: Vec<AffixPart>,
    pub suffix: Vec<AffixPart>,
    /// Count of `0` placeholders before the decimal separator
    pub min_integer_digits: u32,
    /// Count of all digit placeholders before the decimal separator.
    /// Only meaningful for exponential sub-patterns, where it selects the
    /// exponent-is-a-multiple-of-n convention.
    pub max_integer_digits: u32,
    /// Count of `0` placeholders after the decimal separator
    pub min_fraction_digits: u32,
    /// Count of all digit placeholders after the decimal separator
    pub max_fraction_digits: u32,
    /// Group sizes listed outward from the decimal point; the last entry
    /// repeats for all farther groups. Empty means no grouping.
    pub grouping_sizes: Vec<u8>,
    /// Present when the sub-pattern uses exponential notation
    pub exponent: Option<ExponentSpec>,
    /// `#.` style patterns keep the separator even with no fraction
    pub decimal_separator_always_shown: bool,
}

/// Immutable result of compiling one pattern string
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    pub positive: SubPattern,
    pub negative: SubPattern,
    /// Power-of-ten scale applied before rounding: 0 plain, 2 percent,
    /// 3 per-mille
    pub multiplier_pow10: i32,
}

impl CompiledPattern {
    /// Selects the sub-pattern for the given sign
    pub fn sub_pattern(&self, negative: bool) -> &SubPattern {
        if negative { &self.negative } else { &self.positive }
    }
}

/// Display style for the `¤` currency placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyStyle {
    /// The locale's native symbol for the code, falling back to the code
    #[default]
    Local,
    /// A symbol unambiguous across locales (often code-qualified, `US$`)
    Portable,
    /// The ISO code followed by the local symbol (`USD $`)
    Global,
}

/// Named formatting styles resolved through a locale symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Decimal,
    Scientific,
    Percent,
    Currency,
    CompactShort,
    CompactLong,
}

/// Abbreviation style for compact notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactStyle {
    #[default]
    None,
    Short,
    Long,
}

/// CLDR plural categories used to key compact pattern tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Parses a CLDR category keyword
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Plural-rule selector, chosen per locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralRule {
    /// `one` for exactly 1, `other` otherwise (English-family)
    #[default]
    OneExact,
    /// `one` for values in [0, 2) (French-family)
    OneUpToTwo,
}

impl PluralRule {
    /// Selects the plural category for an (already compacted) numeral
    pub fn select(self, value: f64) -> PluralCategory {
        let value = value.abs();
        match self {
            PluralRule::OneExact if value == 1.0 => PluralCategory::One,
            PluralRule::OneUpToTwo if value < 2.0 => PluralCategory::One,
            _ => PluralCategory::Other,
        }
    }

    /// Parses the rule name used in the embedded locale data
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "one_exact" => Some(Self::OneExact),
            "one_up_to_two" => Some(Self::OneUpToTwo),
            _ => None,
        }
    }
}

/// Locale symbol table consumed by the formatter and the parser.
/// Callers may build their own or load one from the embedded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub percent: String,
    pub permill: String,
    pub plus_sign: String,
    pub minus_sign: String,
    pub exponent_symbol: String,
    pub infinity: String,
    pub nan: String,
    /// First digit of the locale's decimal digit block; the other nine
    /// follow it in codepoint order
    pub zero_digit: char,
    pub decimal_pattern: String,
    pub scientific_pattern: String,
    pub percent_pattern: String,
    pub currency_pattern: String,
    /// Default ISO 4217 code for currency formatting in this locale
    pub currency_code: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols {
            decimal_separator: '.',
            grouping_separator: ',',
            percent: "%".to_string(),
            permill: "\u{2030}".to_string(),
            plus_sign: "+".to_string(),
            minus_sign: "-".to_string(),
            exponent_symbol: "E".to_string(),
            infinity: "\u{221E}".to_string(),
            nan: "NaN".to_string(),
            zero_digit: '0',
            decimal_pattern: "#,##0.###".to_string(),
            scientific_pattern: "#E0".to_string(),
            percent_pattern: "#,##0%".to_string(),
            currency_pattern: "\u{00A4}#,##0.00".to_string(),
            currency_code: "USD".to_string(),
        }
    }
}

/// Compact affix patterns keyed by decimal magnitude, then by plural
/// category. The magnitude keys are sparse; lookups fall back to the
/// nearest lower populated magnitude.
pub type CompactTable = BTreeMap<i32, HashMap<PluralCategory, String>>;

/// Short and long compact tables for one locale
#[derive(Debug, Clone, Default)]
pub struct CompactSymbols {
    pub short: CompactTable,
    pub long: CompactTable,
}

/// Display forms for one ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDisplay {
    /// Symbol used inside the currency's home locales (`$`)
    pub local: String,
    /// Symbol unambiguous across locales (`US$`)
    pub portable: String,
}

/// ISO code to display-form table
pub type CurrencyTable = HashMap<String, CurrencyDisplay>;

/// Error raised while compiling a pattern string or constructing a
/// formatter. Fatal: a malformed pattern never produces a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// More than two `;`-separated sub-patterns
    TooManySubPatterns,
    /// A second decimal separator inside the numeric body
    MultipleDecimalSeparators,
    /// A grouping separator after the decimal separator
    GroupingSeparatorInFraction,
    /// A quoted literal run with no closing quote
    UnterminatedQuote,
    /// More than one percent or per-mille sign
    MultipleMultipliers,
    /// An exponent marker with no digit placeholders after it
    MissingExponentDigits,
    /// A currency code that is not three ASCII letters
    InvalidCurrencyCode(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::TooManySubPatterns => {
                write!(f, "Pattern has more than two sub-patterns")
            }
            PatternError::MultipleDecimalSeparators => {
                write!(f, "Multiple decimal separators in pattern")
            }
            PatternError::GroupingSeparatorInFraction => {
                write!(f, "Grouping separator in fraction part of pattern")
            }
            PatternError::UnterminatedQuote => write!(f, "Unterminated quote in pattern"),
            PatternError::MultipleMultipliers => {
                write!(f, "Too many percent or per-mille signs in pattern")
            }
            PatternError::MissingExponentDigits => {
                write!(f, "Exponent marker without digit placeholders")
            }
            PatternError::InvalidCurrencyCode(code) => {
                write!(f, "Invalid currency code: {code}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Error raised by configuration setters or at format time when the
/// active configuration is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `min > max` fraction digits when a format call needs them
    FractionDigitsOutOfOrder { min: u32, max: u32 },
    /// A fraction digit bound above [`MAX_FRACTION_DIGITS`]
    UnsupportedMaximumFractionDigits(u32),
    /// Same ceiling applied to the minimum bound
    UnsupportedMinimumFractionDigits(u32),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::FractionDigitsOutOfOrder { min, max } => {
                write!(f, "Minimum fraction digits {min} exceeds maximum {max}")
            }
            ConfigurationError::UnsupportedMaximumFractionDigits(n) => {
                write!(f, "Unsupported maximum fraction digits: {n}")
            }
            ConfigurationError::UnsupportedMinimumFractionDigits(n) => {
                write!(f, "Unsupported minimum fraction digits: {n}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
