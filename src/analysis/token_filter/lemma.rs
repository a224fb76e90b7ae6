//! English lemmatization filter and lemmatizer implementation.
//!
//! A WordNet-morphy-style noun lemmatizer: an irregular-form table is
//! consulted first, then ordered detachment rules peel plural endings.
//! Unknown words pass through unchanged, so the stage never fails on
//! arbitrary alphabetic input. Unlike Indonesian stemming this stage is
//! applied token-by-token and preserves sequence length and order.
//!
//! # Examples
//!
//! ```
//! use sapu::analysis::token_filter::lemma::EnglishLemmatizer;
//!
//! let lemmatizer = EnglishLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("works"), "work");
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("well"), "well");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Irregular plural forms that detachment rules cannot reach.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("leaves", "leaf"),
];

/// Dictionary-based English lemmatizer (noun rules).
///
/// Stateless and cheap to share; the resource layer hands out one instance
/// per process behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer
    }

    /// Reduce a word to its dictionary base form.
    ///
    /// Words that match no rule are returned unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        for (form, lemma) in IRREGULAR_FORMS {
            if word == *form {
                return (*lemma).to_string();
            }
        }

        // Morphy-style detachment rules, longest endings first
        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        for ending in ["xes", "zes", "ches", "shes"] {
            if let Some(stem) = word.strip_suffix(ending) {
                let kept = &ending[..ending.len() - 2];
                return format!("{stem}{kept}");
            }
        }
        // -ss, -us, -is endings are not plurals (glass, virus, basis)
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word;
        }
        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix('s') {
                return stem.to_string();
            }
        }

        word
    }
}

/// Filter that lemmatizes each token independently.
#[derive(Clone, Debug)]
pub struct LemmaFilter {
    lemmatizer: Arc<EnglishLemmatizer>,
}

impl LemmaFilter {
    /// Create a new lemma filter around a shared lemmatizer instance.
    pub fn new(lemmatizer: Arc<EnglishLemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl TokenFilter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);
        let lemmatized: Vec<Token> = tokens
            .map(|token| {
                let lemma = lemmatizer.lemmatize(&token.text);
                token.with_text(lemma)
            })
            .collect();

        Ok(Box::new(lemmatized.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = EnglishLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("works"), "work");
        assert_eq!(lemmatizer.lemmatize("cats"), "cat");
        assert_eq!(lemmatizer.lemmatize("glasses"), "glass");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("bushes"), "bush");
        assert_eq!(lemmatizer.lemmatize("cookies"), "cooky");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = EnglishLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("feet"), "foot");
        assert_eq!(lemmatizer.lemmatize("mice"), "mouse");
    }

    #[test]
    fn test_non_plural_endings_untouched() {
        let lemmatizer = EnglishLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("glass"), "glass");
        assert_eq!(lemmatizer.lemmatize("virus"), "virus");
        assert_eq!(lemmatizer.lemmatize("basis"), "basis");
        assert_eq!(lemmatizer.lemmatize("was"), "was");
    }

    #[test]
    fn test_identity_fallback() {
        let lemmatizer = EnglishLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("well"), "well");
        assert_eq!(lemmatizer.lemmatize("think"), "think");
        assert_eq!(lemmatizer.lemmatize("zzyzx"), "zzyzx");
    }

    #[test]
    fn test_lemma_filter_preserves_length_and_order() {
        let filter = LemmaFilter::new(Arc::new(EnglishLemmatizer::new()));
        let tokens = vec![
            Token::new("thoughts", 0),
            Token::new("and", 1),
            Token::new("prayers", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "thought");
        assert_eq!(result[1].text, "and");
        assert_eq!(result[2].text, "prayer");
        assert_eq!(result[2].position, 2);
    }

    #[test]
    fn test_filter_name() {
        let filter = LemmaFilter::new(Arc::new(EnglishLemmatizer::new()));
        assert_eq!(filter.name(), "lemma");
    }
}
