//! Embedded locale data for number formatting
//!
//! Symbol tables, compact affix tables and the currency table are
//! shipped as TOML, compiled in with `include_str!`, and exposed
//! through a process-wide manager. The engine itself never touches
//! this module; callers pull references out of it and hand them to the
//! formatter explicitly.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::{
    CompactSymbols, CompactTable, CurrencyDisplay, CurrencyTable, NumberSymbols, PluralCategory,
    PluralRule,
};

/// Error type for locale data operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "Locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Everything the embedded data knows about one locale
#[derive(Debug, Clone, Default)]
pub struct LocaleData {
    pub symbols: NumberSymbols,
    pub compact: CompactSymbols,
    pub plural: PluralRule,
}

/// Provides access to the embedded per-locale data and the shared
/// currency table
pub struct LocaleManager {
    locales: HashMap<String, LocaleData>,
    currencies: CurrencyTable,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self { locales: HashMap::new(), currencies: HashMap::new() };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with empty maps
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML files
    fn load_embedded_data(&mut self) -> Result<()> {
        let symbols_toml = include_str!("locale/symbols.toml");
        self.parse_symbols(symbols_toml)?;

        let compact_toml = include_str!("locale/compact.toml");
        self.parse_compact(compact_toml)?;

        let currencies_toml = include_str!("locale/currencies.toml");
        self.parse_currencies(currencies_toml)?;

        Ok(())
    }

    /// Get the global locale manager instance
    pub fn instance() -> &'static LocaleManager {
        LOCALE_MANAGER.get_or_init(LocaleManager::new)
    }

    /// Look up a locale by identifier (e.g. "en", "fr", "ar_EG")
    pub fn get(&self, locale: &str) -> Result<&LocaleData> {
        self.locales
            .get(locale)
            .ok_or_else(|| LocaleError::NotFound(locale.to_string()))
    }

    /// The shared ISO code to display-form currency table
    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    /// Parse the symbol tables: a `[base]` section merged under each
    /// per-locale override section
    fn parse_symbols(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base = LocaleData::default();
        if let Some(value) = table.get("base") {
            apply_symbol_overrides(&mut base, value)?;
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let mut data = base.clone();
            apply_symbol_overrides(&mut data, value)?;
            self.locales.insert(locale_id.to_string(), data);
        }

        Ok(())
    }

    /// Parse the compact tables: `[locale.style.eN]` sections mapping
    /// plural categories to affix patterns
    fn parse_compact(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (locale_id, value) in table {
            let Some(data) = self.locales.get_mut(locale_id) else {
                continue; // Compact data without a symbol table is unusable
            };
            let styles = value.as_table().ok_or_else(|| {
                LocaleError::ParseError(format!("{} compact data is not a table", locale_id))
            })?;

            if let Some(short) = styles.get("short") {
                data.compact.short = parse_compact_style(short)?;
            }
            if let Some(long) = styles.get("long") {
                data.compact.long = parse_compact_style(long)?;
            }
        }

        Ok(())
    }

    /// Parse the currency table: one `[CODE]` section per ISO code
    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (code, value) in table {
            let entry = value.as_table().ok_or_else(|| {
                LocaleError::ParseError(format!("{} is not a table", code))
            })?;

            let local = entry
                .get("local")
                .and_then(|v| v.as_str())
                .unwrap_or(code)
                .to_string();
            let portable = entry
                .get("portable")
                .and_then(|v| v.as_str())
                .unwrap_or(&local)
                .to_string();

            self.currencies
                .insert(code.to_string(), CurrencyDisplay { local, portable });
        }

        Ok(())
    }
}

/// Apply one TOML section's symbol overrides to a [`LocaleData`]
fn apply_symbol_overrides(data: &mut LocaleData, value: &toml::Value) -> Result<()> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Locale section is not a table".to_string()))?;

    let symbols = &mut data.symbols;

    if let Some(s) = table.get("decimal_separator").and_then(|v| v.as_str()) {
        if let Some(c) = s.chars().next() {
            symbols.decimal_separator = c;
        }
    }
    if let Some(s) = table.get("grouping_separator").and_then(|v| v.as_str()) {
        if let Some(c) = s.chars().next() {
            symbols.grouping_separator = c;
        }
    }
    if let Some(s) = table.get("zero_digit").and_then(|v| v.as_str()) {
        if let Some(c) = s.chars().next() {
            symbols.zero_digit = c;
        }
    }
    if let Some(s) = table.get("percent").and_then(|v| v.as_str()) {
        symbols.percent = s.to_string();
    }
    if let Some(s) = table.get("permill").and_then(|v| v.as_str()) {
        symbols.permill = s.to_string();
    }
    if let Some(s) = table.get("plus_sign").and_then(|v| v.as_str()) {
        symbols.plus_sign = s.to_string();
    }
    if let Some(s) = table.get("minus_sign").and_then(|v| v.as_str()) {
        symbols.minus_sign = s.to_string();
    }
    if let Some(s) = table.get("exponent_symbol").and_then(|v| v.as_str()) {
        symbols.exponent_symbol = s.to_string();
    }
    if let Some(s) = table.get("infinity").and_then(|v| v.as_str()) {
        symbols.infinity = s.to_string();
    }
    if let Some(s) = table.get("nan").and_then(|v| v.as_str()) {
        symbols.nan = s.to_string();
    }
    if let Some(s) = table.get("decimal_pattern").and_then(|v| v.as_str()) {
        symbols.decimal_pattern = s.to_string();
    }
    if let Some(s) = table.get("scientific_pattern").and_then(|v| v.as_str()) {
        symbols.scientific_pattern = s.to_string();
    }
    if let Some(s) = table.get("percent_pattern").and_then(|v| v.as_str()) {
        symbols.percent_pattern = s.to_string();
    }
    if let Some(s) = table.get("currency_pattern").and_then(|v| v.as_str()) {
        symbols.currency_pattern = s.to_string();
    }
    if let Some(s) = table.get("currency_code").and_then(|v| v.as_str()) {
        symbols.currency_code = s.to_string();
    }
    if let Some(s) = table.get("plural").and_then(|v| v.as_str()) {
        data.plural = PluralRule::from_name(s)
            .ok_or_else(|| LocaleError::ParseError(format!("Unknown plural rule: {}", s)))?;
    }

    Ok(())
}

/// Parse one style's `[eN]` magnitude sections into a [`CompactTable`]
fn parse_compact_style(value: &toml::Value) -> Result<CompactTable> {
    let table = value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError("Compact style is not a table".to_string()))?;

    let mut result = CompactTable::new();
    for (key, entry) in table {
        let Some(exp) = key.strip_prefix('e').and_then(|n| n.parse::<i32>().ok()) else {
            return Err(LocaleError::ParseError(format!(
                "Compact magnitude key is not eN: {}",
                key
            )));
        };

        let categories = entry.as_table().ok_or_else(|| {
            LocaleError::ParseError(format!("Compact entry {} is not a table", key))
        })?;

        let mut patterns = HashMap::new();
        for (keyword, pattern) in categories {
            let Some(category) = PluralCategory::from_keyword(keyword) else {
                return Err(LocaleError::ParseError(format!(
                    "Unknown plural category: {}",
                    keyword
                )));
            };
            let Some(pattern) = pattern.as_str() else {
                return Err(LocaleError::ParseError(format!(
                    "Compact pattern for {}.{} is not a string",
                    key, keyword
                )));
            };
            patterns.insert(category, pattern.to_string());
        }
        result.insert(exp, patterns);
    }

    Ok(result)
}
