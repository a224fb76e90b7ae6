//! Stopword removal filter implementation.
//!
//! Removes tokens found in a stopword set, preserving the relative order of
//! the survivors. The per-language sets themselves are curated in
//! [`crate::resource::stopwords`]; this filter just applies whichever set it
//! is given.
//!
//! In the pipeline this stage runs strictly after normalization, so that
//! standardized forms (slang rewritten to `tidak` and the like) are eligible
//! for removal. That ordering is a deliberate design decision, not an
//! accident of implementation.
//!
//! # Examples
//!
//! ```
//! use sapu::analysis::token::Token;
//! use sapu::analysis::token_filter::TokenFilter;
//! use sapu::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["yang", "dan"]);
//! let tokens = vec![
//!     Token::new("film", 0),
//!     Token::new("yang", 1),
//!     Token::new("bagus", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "film");
//! assert_eq!(result[1].text, "bagus");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that removes stopwords from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter over a shared stopword set.
    pub fn new(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a stop filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(|s| s.into()).collect();
        Self::new(Arc::new(stop_words))
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !stop_words.contains(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["yang", "dan", "di"]);
        let tokens = vec![
            Token::new("film", 0),
            Token::new("yang", 1),
            Token::new("tayang", 2),
            Token::new("di", 3),
            Token::new("bioskop", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "film");
        assert_eq!(result[1].text, "tayang");
        assert_eq!(result[2].text, "bioskop");
    }

    #[test]
    fn test_order_preserved() {
        let filter = StopFilter::from_words(vec!["b"]);
        let tokens = vec![
            Token::new("c", 0),
            Token::new("b", 1),
            Token::new("a", 2),
            Token::new("b", 3),
            Token::new("d", 4),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "d"]);
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let filter = StopFilter::from_words(Vec::<String>::new());
        assert!(filter.is_empty());

        let tokens = vec![Token::new("apa", 0), Token::new("saja", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::from_words(vec!["a"]).name(), "stop");
    }
}
