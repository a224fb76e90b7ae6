//! Indonesian stemming filter and stemmer implementation.
//!
//! This module implements a dictionary-free confix-stripping stemmer for
//! Bahasa Indonesia in the Nazief–Adriani tradition: inflectional particles
//! and possessive pronouns come off first, then derivational prefixes
//! (with their morphophonemic recodings, e.g. `meny-` restoring an elided
//! `s`), then derivational suffixes. Every strip is guarded by a two-vowel
//! minimum on the remaining stem so short roots survive untouched.
//!
//! The stemming stage operates on the whole reconstructed string rather
//! than token-by-token: [`StemFilter`] joins the filtered tokens, stems the
//! joined text, and re-splits on whitespace.
//!
//! # Examples
//!
//! ```
//! use sapu::analysis::token_filter::stem::IndonesianStemmer;
//!
//! let stemmer = IndonesianStemmer::new();
//!
//! assert_eq!(stemmer.stem_word("makanan"), "makan");
//! assert_eq!(stemmer.stem_word("bermain"), "main");
//! assert_eq!(stemmer.stem_word("menyapu"), "sapu");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Inflectional particles, stripped first.
const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];

/// Possessive pronoun suffixes, stripped after particles.
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];

/// Whole-word exceptions where rule-based stripping would miss the root.
const SPECIAL_FORMS: &[(&str, &str)] = &[
    ("belajar", "ajar"),
    ("pelajar", "ajar"),
    ("bekerja", "kerja"),
    ("pekerja", "kerja"),
];

/// Maximum number of derivational prefixes on one word.
const MAX_PREFIXES: usize = 3;

fn vowel_count(word: &str) -> usize {
    word.chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

fn starts_with_vowel(word: &str) -> bool {
    matches!(
        word.chars().next(),
        Some('a') | Some('e') | Some('i') | Some('o') | Some('u')
    )
}

/// A stem candidate is acceptable only if it keeps at least two vowels,
/// the minimum for an Indonesian root word.
fn can_strip(stem: &str) -> bool {
    vowel_count(stem) >= 2
}

/// Confix-stripping stemmer for Bahasa Indonesia.
///
/// Stateless and cheap to share; the resource layer hands out one instance
/// per process behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct IndonesianStemmer;

impl IndonesianStemmer {
    /// Create a new Indonesian stemmer.
    pub fn new() -> Self {
        IndonesianStemmer
    }

    /// Stem a whole string of whitespace-separated words.
    ///
    /// This is the entry point the pipeline uses: the filtered token
    /// sequence is joined, stemmed as one string, and re-split by the
    /// caller. Empty input yields an empty string.
    pub fn stem_text(&self, text: &str) -> String {
        let stemmed: Vec<String> = text.split_whitespace().map(|w| self.stem_word(w)).collect();
        stemmed.join(" ")
    }

    /// Stem a single word to its root form.
    ///
    /// Unknown or unaffixed words pass through unchanged (identity
    /// fallback); the method never fails on alphabetic input.
    pub fn stem_word(&self, word: &str) -> String {
        let word = word.to_lowercase();

        for (form, root) in SPECIAL_FORMS {
            if word == *form {
                return (*root).to_string();
            }
        }

        let word = strip_suffix_group(&word, PARTICLES);
        let word = strip_suffix_group(&word, POSSESSIVES);

        let mut word = word;
        for _ in 0..MAX_PREFIXES {
            match strip_derivational_prefix(&word) {
                Some(stripped) => word = stripped,
                None => break,
            }
        }

        strip_derivational_suffix(&word)
    }
}

/// Strip the first matching suffix of a group, if the remainder is viable.
fn strip_suffix_group(word: &str, suffixes: &[&str]) -> String {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if can_strip(stem) {
                return stem.to_string();
            }
        }
    }
    word.to_string()
}

/// Remove one derivational prefix, applying morphophonemic recoding where
/// the nasal prefix elided the root's initial consonant (meny+apu = sapu).
///
/// Rules are ordered longest-first so `meny-` wins over `men-` and `me-`.
fn strip_derivational_prefix(word: &str) -> Option<String> {
    // (prefix, recoded initial applied when the remainder starts with a vowel)
    const NASAL_RULES: &[(&str, Option<char>)] = &[
        ("meny", Some('s')),
        ("menge", None),
        ("meng", None),
        ("mem", Some('p')),
        ("men", Some('t')),
        ("me", None),
        ("peny", Some('s')),
        ("penge", None),
        ("peng", None),
        ("pem", Some('p')),
        ("pen", Some('t')),
        ("per", None),
        ("pe", None),
        ("ber", None),
        ("be", None),
        ("ter", None),
        ("di", None),
        ("ke", None),
        ("se", None),
    ];

    for (prefix, recode) in NASAL_RULES {
        if let Some(rest) = word.strip_prefix(prefix) {
            let candidate = match recode {
                Some(initial) if starts_with_vowel(rest) => format!("{initial}{rest}"),
                _ => rest.to_string(),
            };
            if can_strip(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Remove a derivational suffix (-kan, -an, -i).
///
/// `-i` comes off only after a consonant, so roots ending in a vowel
/// cluster (nilai, tapai) are left alone.
fn strip_derivational_suffix(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("kan") {
        if can_strip(stem) {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("an") {
        if can_strip(stem) {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('i') {
        let ends_in_consonant = stem
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if can_strip(stem) && ends_in_consonant {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Filter that applies whole-string Indonesian stemming to the stream.
///
/// The stream is collected, joined with single spaces, stemmed as one
/// string, and re-split; positions are reassigned and offsets reset since
/// re-splitting breaks the mapping to the original text. An empty stream
/// short-circuits without invoking the stemmer.
#[derive(Clone, Debug)]
pub struct StemFilter {
    stemmer: Arc<IndonesianStemmer>,
}

impl StemFilter {
    /// Create a new stem filter around a shared stemmer instance.
    pub fn new(stemmer: Arc<IndonesianStemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl TokenFilter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let texts: Vec<String> = tokens.map(|t| t.text).collect();
        if texts.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let stemmed = self.stemmer.stem_text(&texts.join(" "));
        let tokens: Vec<Token> = stemmed
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_suffix_stripping() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("makanan"), "makan");
        assert_eq!(stemmer.stem_word("bukunya"), "buku");
        assert_eq!(stemmer.stem_word("jadinya"), "jadi");
        assert_eq!(stemmer.stem_word("bisalah"), "bisa");
    }

    #[test]
    fn test_prefix_stripping() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("bermain"), "main");
        assert_eq!(stemmer.stem_word("terjadi"), "jadi");
        assert_eq!(stemmer.stem_word("melihat"), "lihat");
        assert_eq!(stemmer.stem_word("membaca"), "baca");
        assert_eq!(stemmer.stem_word("menggambar"), "gambar");
    }

    #[test]
    fn test_nasal_recoding() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("menyapu"), "sapu");
        assert_eq!(stemmer.stem_word("menulis"), "tulis");
        assert_eq!(stemmer.stem_word("memilih"), "pilih");
    }

    #[test]
    fn test_confix_stripping() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("kejadian"), "jadi");
        assert_eq!(stemmer.stem_word("dijadikan"), "jadi");
        assert_eq!(stemmer.stem_word("memperbaiki"), "baik");
    }

    #[test]
    fn test_special_forms() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("belajar"), "ajar");
        assert_eq!(stemmer.stem_word("bekerja"), "kerja");
    }

    #[test]
    fn test_short_roots_untouched() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_word("tau"), "tau");
        assert_eq!(stemmer.stem_word("makan"), "makan");
        assert_eq!(stemmer.stem_word("nilai"), "nilai");
    }

    #[test]
    fn test_stem_text() {
        let stemmer = IndonesianStemmer::new();

        assert_eq!(stemmer.stem_text("makanan bukunya"), "makan buku");
        assert_eq!(stemmer.stem_text(""), "");
    }

    #[test]
    fn test_stem_filter_resplits() {
        let filter = StemFilter::new(Arc::new(IndonesianStemmer::new()));
        let tokens = vec![Token::new("bermain", 0), Token::new("makanan", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "main");
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].text, "makan");
        assert_eq!(result[1].position, 1);
    }

    #[test]
    fn test_stem_filter_empty_input() {
        let filter = StemFilter::new(Arc::new(IndonesianStemmer::new()));
        let result: Vec<Token> = filter
            .filter(Box::new(std::iter::empty()))
            .unwrap()
            .collect();

        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_name() {
        let filter = StemFilter::new(Arc::new(IndonesianStemmer::new()));
        assert_eq!(filter.name(), "stem");
    }
}
