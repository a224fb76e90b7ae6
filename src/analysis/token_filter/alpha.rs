//! Alphabetic cleaning filter implementation.
//!
//! This module provides the symbol-cleaning step of the pipeline: each token
//! has its punctuation characters stripped, and only tokens whose stripped
//! form is non-empty and entirely alphabetic survive. Tokens containing
//! digits (`moga2`, `b3li`) are dropped rather than repaired.
//!
//! # Examples
//!
//! ```
//! use sapu::analysis::token::Token;
//! use sapu::analysis::token_filter::TokenFilter;
//! use sapu::analysis::token_filter::alpha::AlphaFilter;
//!
//! let filter = AlphaFilter::new();
//! let tokens = vec![
//!     Token::new("halo!!", 0),
//!     Token::new("moga2", 1),
//!     Token::new("bisa", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "halo");
//! assert_eq!(result[1].text, "bisa");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that strips punctuation and keeps only alphabetic tokens.
///
/// Applying it to already-clean lowercase alphabetic tokens is a no-op,
/// which makes the cleaning stage idempotent.
#[derive(Clone, Debug, Default)]
pub struct AlphaFilter;

impl AlphaFilter {
    /// Create a new alphabetic cleaning filter.
    pub fn new() -> Self {
        AlphaFilter
    }
}

impl TokenFilter for AlphaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                let stripped: String = token
                    .text
                    .chars()
                    .filter(|c| !c.is_ascii_punctuation())
                    .collect();
                if !stripped.is_empty() && stripped.chars().all(|c| c.is_alphabetic()) {
                    Some(token.with_text(stripped))
                } else {
                    None
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alpha"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn run(filter: &AlphaFilter, words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_strips_punctuation() {
        let filter = AlphaFilter::new();
        assert_eq!(run(&filter, &["bisa!!", "ya..."]), vec!["bisa", "ya"]);
    }

    #[test]
    fn test_drops_digit_tokens() {
        let filter = AlphaFilter::new();
        assert_eq!(run(&filter, &["moga2", "100", "aja"]), vec!["aja"]);
    }

    #[test]
    fn test_drops_empty_after_strip() {
        let filter = AlphaFilter::new();
        assert_eq!(run(&filter, &["!!!", "--", "ok"]), vec!["ok"]);
    }

    #[test]
    fn test_idempotent_on_clean_tokens() {
        let filter = AlphaFilter::new();
        let once = run(&filter, &["sudah", "bersih"]);
        let again = run(&filter, &["sudah", "bersih"]);
        assert_eq!(once, again);
        assert_eq!(once, vec!["sudah", "bersih"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphaFilter::new().name(), "alpha");
    }
}
