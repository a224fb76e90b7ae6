//! Pipeline configuration types.
//!
//! Two values configure a pipeline run: the [`Language`] of the documents and
//! a [`StageConfig`] saying which optional stages run. Case folding and
//! tokenization are structurally mandatory and therefore have no flags.

use serde::{Deserialize, Serialize};

/// Document language, selected by the caller (never inferred).
///
/// The language decides which stopword set applies and whether the reduction
/// stage stems (Indonesian) or lemmatizes (English).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Bahasa Indonesia (`id`)
    Indonesian,
    /// English (`en`)
    English,
}

impl Language {
    /// Parse an ISO 639-1 language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "id" => Some(Language::Indonesian),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// The ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
        }
    }
}

/// Per-stage enable flags for the optional pipeline stages.
///
/// Case folding and tokenization always run and are exposed only as the
/// [`StageConfig::CASE_FOLDING`] and [`StageConfig::TOKENIZATION`] constants.
/// Stemming and lemmatization are mutually exclusive by construction: the
/// single `reduction` flag enables whichever of the two the pipeline's
/// language selects.
///
/// # Examples
///
/// ```
/// use sapu::config::StageConfig;
///
/// let config = StageConfig::default();
/// assert!(config.stopword_removal);
/// assert!(!config.normalization);
/// assert!(config.reduction);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Rewrite slang tokens to their standard forms via the slang dictionary.
    pub normalization: bool,
    /// Remove tokens found in the language's combined stopword set.
    pub stopword_removal: bool,
    /// Reduce tokens to root/lemma form (stemming for Indonesian,
    /// lemmatization for English).
    pub reduction: bool,
}

impl StageConfig {
    /// Case folding always runs.
    pub const CASE_FOLDING: bool = true;
    /// Tokenization and symbol cleaning always run.
    pub const TOKENIZATION: bool = true;

    /// Enable every optional stage.
    pub fn all() -> Self {
        StageConfig {
            normalization: true,
            stopword_removal: true,
            reduction: true,
        }
    }

    /// Disable every optional stage, leaving only cleaning.
    pub fn cleaning_only() -> Self {
        StageConfig {
            normalization: false,
            stopword_removal: false,
            reduction: false,
        }
    }
}

impl Default for StageConfig {
    /// Stopword removal and reduction on, normalization off.
    fn default() -> Self {
        StageConfig {
            normalization: false,
            stopword_removal: true,
            reduction: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("id"), Some(Language::Indonesian));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Indonesian.code(), "id");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_mandatory_stages() {
        assert!(StageConfig::CASE_FOLDING);
        assert!(StageConfig::TOKENIZATION);
    }

    #[test]
    fn test_stage_config_presets() {
        let all = StageConfig::all();
        assert!(all.normalization && all.stopword_removal && all.reduction);

        let none = StageConfig::cleaning_only();
        assert!(!none.normalization && !none.stopword_removal && !none.reduction);
    }
}
