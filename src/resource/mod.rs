//! Shared resource handles for the pipeline.
//!
//! [`Resources`] is an explicit handle object threaded through pipeline
//! construction instead of a set of global singletons. The stemmer,
//! lemmatizer, and slang dictionary are built lazily and memoized for the
//! lifetime of the handle; stopword sets are process-wide statics shared by
//! reference. All resources are read-only after first construction, so the
//! handle can be used from multiple threads without locking beyond what
//! `OnceLock` provides.

pub mod slang;
pub mod stopwords;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use log::warn;

use crate::analysis::token_filter::lemma::EnglishLemmatizer;
use crate::analysis::token_filter::stem::IndonesianStemmer;
use crate::config::Language;
use crate::resource::slang::SlangDictionary;

/// Lazily-constructed, memoized pipeline resources.
///
/// Construction cost is paid at most once per handle regardless of how many
/// pipelines are built from it. A missing or malformed slang dictionary
/// degrades to an empty mapping with a warning; no pipeline stage fails
/// because an optional resource is absent.
///
/// # Examples
///
/// ```
/// use sapu::config::Language;
/// use sapu::resource::Resources;
///
/// let resources = Resources::new();
/// let stopwords = resources.stopwords(Language::Indonesian);
/// assert!(stopwords.contains("yang"));
///
/// // No slang path configured: empty dictionary, normalization no-ops
/// assert!(resources.slang_dictionary().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Resources {
    slang_path: Option<PathBuf>,
    stemmer: OnceLock<Arc<IndonesianStemmer>>,
    lemmatizer: OnceLock<Arc<EnglishLemmatizer>>,
    slang: OnceLock<Arc<SlangDictionary>>,
}

impl Resources {
    /// Create a resource handle with no slang dictionary configured.
    pub fn new() -> Self {
        Resources::default()
    }

    /// Create a resource handle that loads its slang dictionary from the
    /// given CSV file on first use.
    pub fn with_slang_path<P: Into<PathBuf>>(path: P) -> Self {
        Resources {
            slang_path: Some(path.into()),
            ..Resources::default()
        }
    }

    /// The memoized Indonesian stemmer instance.
    pub fn stemmer(&self) -> Arc<IndonesianStemmer> {
        Arc::clone(
            self.stemmer
                .get_or_init(|| Arc::new(IndonesianStemmer::new())),
        )
    }

    /// The memoized English lemmatizer instance.
    pub fn lemmatizer(&self) -> Arc<EnglishLemmatizer> {
        Arc::clone(
            self.lemmatizer
                .get_or_init(|| Arc::new(EnglishLemmatizer::new())),
        )
    }

    /// The combined stopword set for a language.
    pub fn stopwords(&self, language: Language) -> Arc<HashSet<String>> {
        stopwords::stopword_set(language)
    }

    /// The memoized slang dictionary.
    ///
    /// Load failures are downgraded to a warning and an empty dictionary;
    /// the warning is emitted once, on first access.
    pub fn slang_dictionary(&self) -> Arc<SlangDictionary> {
        Arc::clone(self.slang.get_or_init(|| {
            let dictionary = match &self.slang_path {
                None => SlangDictionary::empty(),
                Some(path) => match SlangDictionary::load(path) {
                    Ok(dictionary) => dictionary,
                    Err(e) => {
                        warn!("slang dictionary unavailable, normalization will be a no-op: {e}");
                        SlangDictionary::empty()
                    }
                },
            };
            Arc::new(dictionary)
        }))
    }
}
