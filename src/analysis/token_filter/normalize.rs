//! Slang normalization filter implementation.
//!
//! Rewrites informal tokens to their standard form via a
//! [`SlangDictionary`](crate::resource::slang::SlangDictionary). The mapping
//! is strictly 1:1 — every input token produces exactly one output token,
//! unmapped tokens pass through unchanged — so the stage preserves both
//! order and length. With an empty dictionary the filter is a no-op.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;
use crate::resource::slang::SlangDictionary;

/// A filter that replaces slang tokens with their standard forms.
#[derive(Clone, Debug)]
pub struct NormalizeFilter {
    dictionary: Arc<SlangDictionary>,
}

impl NormalizeFilter {
    /// Create a new normalization filter backed by the given dictionary.
    pub fn new(dictionary: Arc<SlangDictionary>) -> Self {
        NormalizeFilter { dictionary }
    }

    /// Number of slang entries available to this filter.
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Check if the backing dictionary is empty (filter is a no-op).
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

impl TokenFilter for NormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let dictionary = Arc::clone(&self.dictionary);
        let normalized: Vec<Token> = tokens
            .map(|token| match dictionary.lookup(&token.text) {
                Some(standard) => token.with_text(standard),
                None => token,
            })
            .collect();

        Ok(Box::new(normalized.into_iter()))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}
