//! Pattern compiler: CLDR/ICU decimal-format pattern strings into
//! [`CompiledPattern`] values.

use winnow::combinator::repeat;
use winnow::Parser;

use crate::types::{AffixPart, CompiledPattern, PatternError, SubPattern};

pub mod subpattern;
pub mod tokens;

use tokens::{parse_single_token, PatternToken};

/// Compiles a pattern string. The positive sub-pattern supplies every
/// numeric property; an explicit negative sub-pattern contributes only
/// its affixes, and a missing one is derived by prepending a minus sign
/// to the positive prefix.
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, PatternError> {
    let mut input = pattern;
    let tokens: Vec<PatternToken> = repeat(0.., parse_single_token)
        .parse_next(&mut input)
        .unwrap_or_default();
    if !input.is_empty() {
        // Every character short of a lone quote is consumed by some
        // token parser, so leftovers mean an unclosed literal run.
        return Err(PatternError::UnterminatedQuote);
    }

    let mut halves = tokens.split(|t| *t == PatternToken::SubPatternBoundary);
    let positive_tokens = halves.next().unwrap_or_default();
    let negative_tokens = halves.next();
    if halves.next().is_some() {
        return Err(PatternError::TooManySubPatterns);
    }

    let (positive, multiplier_pow10) = subpattern::assemble(positive_tokens)?;

    let negative = match negative_tokens {
        Some(tokens) => {
            let (explicit, _) = subpattern::assemble(tokens)?;
            SubPattern {
                prefix: explicit.prefix,
                suffix: explicit.suffix,
                ..positive.clone()
            }
        }
        None => {
            let mut prefix = vec![AffixPart::MinusSign];
            prefix.extend(positive.prefix.iter().cloned());
            SubPattern { prefix, suffix: positive.suffix.clone(), ..positive.clone() }
        }
    };

    Ok(CompiledPattern { positive, negative, multiplier_pow10 })
}
