//! Token-level parsers for decimal-format pattern strings

use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{literal, none_of, one_of};
use winnow::{ModalResult, Parser};

/// One atom of a pattern string. `;` is kept as a token so the pattern
/// compiler can split sub-patterns after quoting has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// `#`, an optional digit placeholder
    Digit,
    /// `0`, a required digit placeholder
    ZeroDigit,
    /// `.`
    DecimalSeparator,
    /// `,`
    GroupingSeparator,
    /// `;`
    SubPatternBoundary,
    /// `%`
    Percent,
    /// `‰`
    PerMill,
    /// `¤¤`, long (ISO code) currency placeholder
    CurrencyCode,
    /// `¤`, short currency placeholder
    CurrencySymbol,
    /// `E`
    Exponent,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// Quoted runs and passthrough characters
    Literal(String),
}

/// Characters that are pattern syntax outside quoted runs
const SYNTAX_CHARS: [char; 12] = [
    '#', '0', '.', ',', ';', '%', '\u{2030}', '\u{00A4}', 'E', '+', '-', '\'',
];

/// `''` outside a quoted run is a single literal quote
pub fn parse_escaped_quote(input: &mut &str) -> ModalResult<PatternToken> {
    literal("''")
        .value(PatternToken::Literal("'".to_string()))
        .parse_next(input)
}

/// A quoted literal run; `''` inside the run is one quote character
pub fn parse_quoted_literal(input: &mut &str) -> ModalResult<PatternToken> {
    let content = repeat(0.., alt((literal("''").value('\''), none_of('\''))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content, '\'')
        .map(PatternToken::Literal)
        .parse_next(input)
}

pub fn parse_currency(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        literal("\u{00A4}\u{00A4}").value(PatternToken::CurrencyCode),
        literal("\u{00A4}").value(PatternToken::CurrencySymbol),
    ))
    .parse_next(input)
}

pub fn parse_simple(input: &mut &str) -> ModalResult<PatternToken> {
    one_of(['#', '0', '.', ',', ';', '%', '\u{2030}', 'E', '+', '-'])
        .map(|c: char| match c {
            '#' => PatternToken::Digit,
            '0' => PatternToken::ZeroDigit,
            '.' => PatternToken::DecimalSeparator,
            ',' => PatternToken::GroupingSeparator,
            ';' => PatternToken::SubPatternBoundary,
            '%' => PatternToken::Percent,
            '\u{2030}' => PatternToken::PerMill,
            'E' => PatternToken::Exponent,
            '+' => PatternToken::Plus,
            '-' => PatternToken::Minus,
            _ => unreachable!(),
        })
        .parse_next(input)
}

/// Any other character passes through as literal text
pub fn parse_literal_char(input: &mut &str) -> ModalResult<PatternToken> {
    none_of(SYNTAX_CHARS)
        .map(|c: char| PatternToken::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a single pattern token
pub fn parse_single_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_escaped_quote,
        parse_quoted_literal,
        parse_currency,
        parse_simple,
        parse_literal_char,
    ))
    .parse_next(input)
}
