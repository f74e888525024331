//! Locale-aware decimal number formatting and parsing
//!
//! This crate compiles CLDR/ICU decimal-format pattern strings
//! (`#,##0.###`, `0.###E0`, `¤#,##0.00;(¤#,##0.00)`) and formats or
//! parses `f64` values against them. Locale symbols, compact affix
//! tables and currency display forms are plain data passed in through
//! a [`FormatEnv`]; a set of embedded tables is available through
//! [`locale::LocaleManager`] and [`FormatEnv::for_locale`].
//!
//! ```
//! use decimal_format::{FormatEnv, NumberFormat};
//!
//! let env = FormatEnv::for_locale("en").unwrap();
//! let fmt = NumberFormat::from_pattern("#,##0.00", env.symbols).unwrap();
//! assert_eq!(fmt.format(1234.5, &env).unwrap(), "1,234.50");
//! assert_eq!(fmt.parse("1,234.50", &env), 1234.5);
//! ```

mod decimal;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod types;

pub use formatter::{FormatEnv, NumberFormat};
pub use parser::compile_pattern;
pub use types::{
    AffixPart, CompactStyle, CompactSymbols, CompactTable, CompiledPattern, ConfigurationError,
    CurrencyDisplay, CurrencyStyle, CurrencyTable, ExponentSpec, Format, NumberSymbols,
    PatternError, PluralCategory, PluralRule, SubPattern, MAX_FRACTION_DIGITS,
};

#[cfg(test)]
mod tests;
