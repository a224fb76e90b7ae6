//! Word tokenizer implementation.
//!
//! This module provides the pipeline's main tokenizer. It splits text using
//! Unicode word boundary rules (UAX #29) and applies standard English
//! contraction handling, so `"don't"` produces `"do"` and `"not"` the way a
//! conventional word tokenizer would.
//!
//! # Examples
//!
//! ```
//! use sapu::analysis::tokenizer::Tokenizer;
//! use sapu::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("don't panic!").unwrap().collect();
//!
//! // Punctuation-only segments are dropped, the clitic is expanded
//! assert_eq!(tokens[0].text, "do");
//! assert_eq!(tokens[1].text, "not");
//! assert_eq!(tokens[2].text, "panic");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Trailing clitics split off as their own token, with the expanded form
/// emitted as the token text. `'s` and `'d` stay unexpanded because their
/// full form is ambiguous.
const CLITICS: &[(&str, &str)] = &[
    ("n't", "not"),
    ("'re", "are"),
    ("'ve", "have"),
    ("'ll", "will"),
    ("'m", "am"),
    ("'s", "'s"),
    ("'d", "'d"),
];

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Word segments are identified per UAX #29, which keeps contractions like
/// `don't` together; a second pass splits trailing clitics into separate
/// tokens. Segments without any alphanumeric character (whitespace,
/// punctuation runs) are dropped.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

/// Find a trailing clitic in `word`, returning the byte index where it
/// starts and the text to emit for it. ASCII-only: the apostrophe forms the
/// table covers cannot straddle multibyte characters.
fn split_clitic(word: &str) -> Option<(usize, &'static str)> {
    if !word.is_ascii() {
        return None;
    }
    let lower = word.to_ascii_lowercase();
    for (suffix, expanded) in CLITICS {
        if lower.ends_with(suffix) && lower.len() > suffix.len() {
            let split_at = word.len() - suffix.len();
            if word[..split_at].chars().any(|c| c.is_alphabetic()) {
                return Some((split_at, expanded));
            }
        }
    }
    None
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for (start, word) in text.split_word_bound_indices() {
            // Only keep actual words (not whitespace or punctuation)
            if !word.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            let end = start + word.len();

            if let Some((split_at, expanded)) = split_clitic(word) {
                tokens.push(Token::with_offsets(
                    &word[..split_at],
                    position,
                    start,
                    start + split_at,
                ));
                position += 1;
                tokens.push(Token::with_offsets(
                    expanded,
                    position,
                    start + split_at,
                    end,
                ));
                position += 1;
            } else {
                tokens.push(Token::with_offsets(word, position, start, end));
                position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("halo, dunia!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "halo");
        assert_eq!(tokens[1].text, "dunia");
    }

    #[test]
    fn test_offsets() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ab  cd").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 2);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 6);
    }

    #[test]
    fn test_contraction_splitting() {
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("don't i'm we've").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["do", "not", "i", "am", "we", "have"]);
    }

    #[test]
    fn test_bare_clitic_not_split() {
        // No alphabetic base before the clitic, so nothing to split
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("n't").unwrap().collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "n't");
    }

    #[test]
    fn test_digits_kept_as_tokens() {
        // The tokenizer keeps digit-bearing segments; AlphaFilter drops them later
        let tokenizer = WordTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("moga2 aja").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "moga2");
        assert_eq!(tokens[1].text, "aja");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().name(), "word");
    }
}
