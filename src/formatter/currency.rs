//! Currency display-form resolution

use crate::types::{CurrencyStyle, CurrencyTable, PatternError};

/// Validates a currency code: exactly three ASCII letters, normalized
/// to upper case. Anything else is rejected at construction time.
pub(crate) fn normalize_code(code: &str) -> Result<String, PatternError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(PatternError::InvalidCurrencyCode(code.to_string()))
    }
}

/// Resolves the `¤` placeholder for a (code, style) pair. Codes absent
/// from the table display as the code itself in every style.
pub(crate) fn resolve(code: &str, style: CurrencyStyle, table: Option<&CurrencyTable>) -> String {
    let entry = table.and_then(|t| t.get(code));
    match style {
        CurrencyStyle::Local => entry.map_or_else(|| code.to_string(), |e| e.local.clone()),
        CurrencyStyle::Portable => {
            entry.map_or_else(|| code.to_string(), |e| e.portable.clone())
        }
        CurrencyStyle::Global => match entry {
            // Qualify with the code unless the local symbol already is
            // the code.
            Some(e) if e.local != code => format!("{} {}", code, e.local),
            _ => code.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurrencyDisplay;
    use std::collections::HashMap;

    fn table() -> CurrencyTable {
        let mut t = HashMap::new();
        t.insert(
            "USD".to_string(),
            CurrencyDisplay { local: "$".to_string(), portable: "US$".to_string() },
        );
        t.insert(
            "CHF".to_string(),
            CurrencyDisplay { local: "CHF".to_string(), portable: "CHF".to_string() },
        );
        t
    }

    #[test]
    fn test_styles() {
        let t = table();
        assert_eq!(resolve("USD", CurrencyStyle::Local, Some(&t)), "$");
        assert_eq!(resolve("USD", CurrencyStyle::Portable, Some(&t)), "US$");
        assert_eq!(resolve("USD", CurrencyStyle::Global, Some(&t)), "USD $");
    }

    #[test]
    fn test_symbol_equal_to_code_is_not_doubled() {
        let t = table();
        assert_eq!(resolve("CHF", CurrencyStyle::Global, Some(&t)), "CHF");
    }

    #[test]
    fn test_unknown_code_displays_as_itself() {
        let t = table();
        assert_eq!(resolve("XXY", CurrencyStyle::Local, Some(&t)), "XXY");
        assert_eq!(resolve("XXY", CurrencyStyle::Global, Some(&t)), "XXY");
        assert_eq!(resolve("XXY", CurrencyStyle::Local, None), "XXY");
    }

    #[test]
    fn test_code_normalization() {
        assert_eq!(normalize_code("usd").as_deref(), Ok("USD"));
        assert!(normalize_code("US").is_err());
        assert!(normalize_code("US1").is_err());
        assert!(normalize_code("USDD").is_err());
    }
}
