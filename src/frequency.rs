//! Word frequency counting and corpus statistics.
//!
//! Two counting modes exist: [`raw_word_frequency`] matches words in raw
//! text with a `\b\w+\b` pattern after lowercasing, for before-cleaning
//! views; [`token_word_frequency`] counts already-processed token
//! sequences. Both rank words by descending count, breaking ties by first
//! occurrence in the input so equal-count words keep a stable, predictable
//! order.

use std::sync::LazyLock;

use ahash::AHashMap;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SapuError};

/// Word pattern used for raw-text counting.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// One row of a frequency table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The counted word.
    pub word: String,
    /// How many times it occurred.
    pub count: usize,
}

/// Count and rank words from an iterator, ties broken by first occurrence.
fn rank_words<I>(words: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    let mut order: Vec<String> = Vec::new();

    for word in words {
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut table: Vec<WordCount> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            WordCount { word, count }
        })
        .collect();
    // Stable sort keeps first-occurrence order within equal counts
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Frequency table over raw, uncleaned texts.
///
/// Each text is lowercased and scanned with a `\b\w+\b` pattern, so digits
/// and underscore-joined runs count as words here even though the cleaning
/// stage would drop them.
///
/// # Examples
///
/// ```
/// use sapu::frequency::raw_word_frequency;
///
/// let table = raw_word_frequency(&["Bagus bagus!", "bagus juga"]);
/// assert_eq!(table[0].word, "bagus");
/// assert_eq!(table[0].count, 3);
/// ```
pub fn raw_word_frequency<S: AsRef<str>>(texts: &[S]) -> Vec<WordCount> {
    let words = texts.iter().flat_map(|text| {
        let lowered = text.as_ref().to_lowercase();
        WORD_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect::<Vec<_>>()
    });
    rank_words(words)
}

/// Frequency table over processed token sequences.
pub fn token_word_frequency<S: AsRef<str>, T: AsRef<[S]>>(token_lists: &[T]) -> Vec<WordCount> {
    let words = token_lists
        .iter()
        .flat_map(|list| list.as_ref().iter().map(|w| w.as_ref().to_string()));
    rank_words(words)
}

/// The top `n` rows of a frequency table.
pub fn top_n(table: &[WordCount], n: usize) -> &[WordCount] {
    &table[..table.len().min(n)]
}

fn checked_average<S: AsRef<str>>(texts: &[S]) -> Result<f64> {
    if texts.is_empty() {
        return Err(SapuError::computation(
            "cannot average word counts over an empty series",
        ));
    }
    let total: usize = texts
        .iter()
        .map(|t| t.as_ref().split_whitespace().count())
        .sum();
    Ok(total as f64 / texts.len() as f64)
}

fn average_or_zero<S: AsRef<str>>(texts: &[S]) -> f64 {
    checked_average(texts).unwrap_or_else(|e| {
        warn!("word count average unavailable, using 0: {e}");
        0.0
    })
}

/// Average whitespace-separated word count per document, before and after
/// preprocessing.
///
/// The two series need not be the same length. A degenerate series (empty)
/// is caught at this boundary: the failure is logged and that side of the
/// pair comes back as `0.0`. Documents with missing text should be passed
/// as empty strings so they count as zero words.
pub fn basic_stats<S: AsRef<str>, T: AsRef<str>>(before: &[S], after: &[T]) -> (f64, f64) {
    (average_or_zero(before), average_or_zero(after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_frequency_lowercases_and_counts() {
        let table = raw_word_frequency(&["Mantap MANTAP mantap", "keren mantap"]);

        assert_eq!(table[0].word, "mantap");
        assert_eq!(table[0].count, 4);
        assert_eq!(table[1].word, "keren");
        assert_eq!(table[1].count, 1);
    }

    #[test]
    fn test_raw_frequency_matches_digits() {
        let table = raw_word_frequency(&["moga2 sukses 100 persen"]);
        let words: Vec<&str> = table.iter().map(|wc| wc.word.as_str()).collect();

        assert!(words.contains(&"moga2"));
        assert!(words.contains(&"100"));
    }

    #[test]
    fn test_tie_break_by_first_occurrence() {
        let table = raw_word_frequency(&["beta alpha beta alpha gamma"]);

        assert_eq!(table[0].word, "beta");
        assert_eq!(table[1].word, "alpha");
        assert_eq!(table[2].word, "gamma");
    }

    #[test]
    fn test_token_frequency() {
        let lists = vec![vec!["bagus", "film"], vec!["bagus"]];
        let table = token_word_frequency(&lists);

        assert_eq!(table[0], WordCount { word: "bagus".to_string(), count: 2 });
        assert_eq!(table[1], WordCount { word: "film".to_string(), count: 1 });
    }

    #[test]
    fn test_total_count_equals_word_occurrences() {
        let texts = ["satu dua tiga", "dua tiga", "tiga"];
        let table = raw_word_frequency(&texts);

        let total: usize = table.iter().map(|wc| wc.count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_top_n_clamps() {
        let table = raw_word_frequency(&["a b c"]);

        assert_eq!(top_n(&table, 2).len(), 2);
        assert_eq!(top_n(&table, 10).len(), 3);
        assert!(top_n(&table, 0).is_empty());
    }

    #[test]
    fn test_basic_stats() {
        let before = ["dua kata", "tiga kata lagi"];
        let after = ["kata", "kata"];
        let (avg_before, avg_after) = basic_stats(&before, &after);

        assert!((avg_before - 2.5).abs() < f64::EPSILON);
        assert!((avg_after - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_basic_stats_empty_string_counts_as_zero() {
        let (avg, _) = basic_stats(&["dua kata", ""], &[] as &[&str]);

        assert!((avg - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_basic_stats_empty_series() {
        let empty: &[&str] = &[];
        assert_eq!(basic_stats(empty, empty), (0.0, 0.0));
    }

    #[test]
    fn test_empty_series_average_is_a_computation_error() {
        let empty: &[&str] = &[];
        let err = checked_average(empty).unwrap_err();

        assert!(matches!(err, SapuError::Computation(_)));
    }
}
