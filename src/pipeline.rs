//! The text preprocessing pipeline.
//!
//! A [`Pipeline`] wires the analysis components into a fixed stage order:
//!
//! 1. case folding (always)
//! 2. word tokenization and symbol cleaning (always)
//! 3. slang normalization (optional)
//! 4. stopword removal (optional)
//! 5. reduction to root form (optional; stemming for Indonesian,
//!    lemmatization for English)
//!
//! Normalization runs before stopword removal so that standardized forms are
//! eligible for filtering. Each run captures the intermediate token
//! sequences as [`PipelineArtifacts`], which downstream consumers (frequency
//! counting, CSV export) read instead of re-running stages.
//!
//! # Examples
//!
//! ```
//! use sapu::config::{Language, StageConfig};
//! use sapu::pipeline::Pipeline;
//! use sapu::resource::Resources;
//!
//! let resources = Resources::new();
//! let pipeline = Pipeline::new(&resources, Language::Indonesian, StageConfig::all());
//!
//! let artifacts = pipeline.run(Some("Filmnya bagus banget!!"));
//! assert_eq!(artifacts.clean_text, "filmnya bagus banget");
//! assert!(artifacts.final_tokens.contains(&"bagus".to_string()));
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream, token_texts};
use crate::analysis::token_filter::{
    AlphaFilter, LemmaFilter, NormalizeFilter, StemFilter, StopFilter, TokenFilter,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::config::{Language, StageConfig};
use crate::error::Result;
use crate::resource::Resources;

/// The language-selected reduction stage.
///
/// Exactly one of the two reducers can be present in a pipeline, decided by
/// the pipeline's language at construction time.
#[derive(Clone, Debug)]
enum Reducer {
    /// Whole-string confix-stripping stemmer (Indonesian).
    Stem(StemFilter),
    /// Per-token dictionary lemmatizer (English).
    Lemma(LemmaFilter),
}

impl Reducer {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        match self {
            Reducer::Stem(f) => f.filter(tokens),
            Reducer::Lemma(f) => f.filter(tokens),
        }
    }
}

/// Every intermediate and final representation from one pipeline run.
///
/// The token sequences mirror the stage boundaries: `initial_tokens` is the
/// cleaned tokenization, `filtered_tokens` is after normalization and
/// stopword removal, `final_tokens` is after reduction. When a stage is
/// disabled, the corresponding sequence equals its predecessor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineArtifacts {
    /// The cleaned text: the cleaned tokens rejoined with single spaces.
    pub clean_text: String,
    /// Tokens after tokenization and symbol cleaning.
    pub initial_tokens: Vec<String>,
    /// Tokens after normalization and stopword removal.
    pub filtered_tokens: Vec<String>,
    /// Tokens after reduction to root/lemma form.
    pub final_tokens: Vec<String>,
    /// The final tokens joined with single spaces.
    pub final_text: String,
}

impl PipelineArtifacts {
    /// Artifacts for missing or unprocessable input: all fields empty.
    pub fn empty() -> Self {
        PipelineArtifacts::default()
    }

    /// Number of tokens surviving the full pipeline.
    pub fn final_token_count(&self) -> usize {
        self.final_tokens.len()
    }
}

/// A configured preprocessing pipeline for one language.
///
/// Construction pulls from [`Resources`] only what the enabled stages need:
/// a pipeline without normalization never touches the slang dictionary, and
/// an English pipeline never builds the Indonesian stemmer.
#[derive(Clone, Debug)]
pub struct Pipeline {
    tokenizer: WordTokenizer,
    alpha: AlphaFilter,
    normalize: Option<NormalizeFilter>,
    stop: Option<StopFilter>,
    reducer: Option<Reducer>,
    language: Language,
    config: StageConfig,
}

impl Pipeline {
    /// Build a pipeline for the given language and stage configuration.
    pub fn new(resources: &Resources, language: Language, config: StageConfig) -> Self {
        let normalize = config
            .normalization
            .then(|| NormalizeFilter::new(resources.slang_dictionary()));
        let stop = config
            .stopword_removal
            .then(|| StopFilter::new(resources.stopwords(language)));
        let reducer = config.reduction.then(|| match language {
            Language::Indonesian => Reducer::Stem(StemFilter::new(resources.stemmer())),
            Language::English => Reducer::Lemma(LemmaFilter::new(resources.lemmatizer())),
        });

        Pipeline {
            tokenizer: WordTokenizer::new(),
            alpha: AlphaFilter::new(),
            normalize,
            stop,
            reducer,
            language,
            config,
        }
    }

    /// The language this pipeline was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The stage configuration this pipeline was built with.
    pub fn config(&self) -> StageConfig {
        self.config
    }

    /// Run the pipeline on one document's text.
    ///
    /// Missing input (`None`) yields [`PipelineArtifacts::empty`]. An
    /// internal stage error is logged and likewise yields empty artifacts,
    /// so batch processing never aborts on a single bad document.
    pub fn run(&self, text: Option<&str>) -> PipelineArtifacts {
        let Some(text) = text else {
            return PipelineArtifacts::empty();
        };

        match self.process(text) {
            Ok(artifacts) => artifacts,
            Err(e) => {
                warn!("pipeline failed on a document, emitting empty artifacts: {e}");
                PipelineArtifacts::empty()
            }
        }
    }

    fn process(&self, text: &str) -> Result<PipelineArtifacts> {
        let folded = text.to_lowercase();

        let tokenized = self.tokenizer.tokenize(&folded)?;
        let initial: Vec<Token> = self.alpha.filter(tokenized)?.collect();

        // The cleaning checkpoint is the cleaned tokens rejoined, not the
        // folded raw text: punctuation and digit-bearing tokens are gone.
        let initial_texts = token_texts(&initial);
        let clean_text = initial_texts.join(" ");

        let mut filtered = initial.clone();
        if let Some(normalize) = &self.normalize {
            filtered = normalize.filter(filtered.into_token_stream())?.collect();
        }
        if let Some(stop) = &self.stop {
            filtered = stop.filter(filtered.into_token_stream())?.collect();
        }

        let final_tokens: Vec<Token> = match &self.reducer {
            Some(reducer) => reducer
                .filter(filtered.clone().into_token_stream())?
                .collect(),
            None => filtered.clone(),
        };

        let final_texts = token_texts(&final_tokens);
        let final_text = final_texts.join(" ");

        Ok(PipelineArtifacts {
            clean_text,
            initial_tokens: initial_texts,
            filtered_tokens: token_texts(&filtered),
            final_tokens: final_texts,
            final_text,
        })
    }
}
