//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace only.
///
/// The fallback tokenizer for callers driving the analysis components
/// directly instead of going through [`crate::pipeline::Pipeline`], which
/// always tokenizes with [`super::word::WordTokenizer`]. Performs no
/// boundary analysis and keeps punctuation attached to words.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for (position, word) in text.split_whitespace().enumerate() {
            // split_whitespace yields words in order, so searching from the
            // cursor finds the right occurrence even for repeated words
            let start = cursor + text[cursor..].find(word).unwrap_or(0);
            let end = start + word.len();
            tokens.push(Token::with_offsets(word, position, start, end));
            cursor = end;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("halo  dunia\ttes").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "halo");
        assert_eq!(tokens[1].text, "dunia");
        assert_eq!(tokens[2].text, "tes");
    }

    #[test]
    fn test_repeated_words_get_distinct_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ya ya").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[1].start_offset, 3);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
