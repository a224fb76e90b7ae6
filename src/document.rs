//! Document types and batch processing.
//!
//! A [`Document`] is one comment or text row to preprocess; its text is
//! optional because real exports routinely contain empty cells. Batches are
//! processed in parallel with rayon, preserving input order in the output.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::{Pipeline, PipelineArtifacts};

/// One input document: an identifier and its (possibly missing) text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier, carried through to the results.
    pub id: String,
    /// The raw text. `None` marks a missing cell and produces empty
    /// artifacts rather than an error.
    pub text: Option<String>,
}

impl Document {
    /// Create a document with text.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        Document {
            id: id.into(),
            text: Some(text.into()),
        }
    }

    /// Create a document whose text is missing.
    pub fn without_text<I: Into<String>>(id: I) -> Self {
        Document {
            id: id.into(),
            text: None,
        }
    }
}

/// One processed document: the input joined with its pipeline artifacts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// The input document's identifier.
    pub id: String,
    /// The original raw text, if present.
    pub text: Option<String>,
    /// All intermediate and final pipeline outputs.
    pub artifacts: PipelineArtifacts,
    /// Number of tokens surviving the full pipeline.
    pub final_token_count: usize,
}

/// Run the pipeline over a batch of documents in parallel.
///
/// Output order matches input order regardless of scheduling. Documents
/// with missing text appear in the output with empty artifacts and a
/// token count of zero.
///
/// # Examples
///
/// ```
/// use sapu::config::{Language, StageConfig};
/// use sapu::document::{Document, process_collection};
/// use sapu::pipeline::Pipeline;
/// use sapu::resource::Resources;
///
/// let resources = Resources::new();
/// let pipeline = Pipeline::new(&resources, Language::Indonesian, StageConfig::all());
///
/// let documents = vec![
///     Document::new("1", "Bagus banget filmnya"),
///     Document::without_text("2"),
/// ];
/// let results = process_collection(&pipeline, &documents);
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].id, "1");
/// assert_eq!(results[1].final_token_count, 0);
/// ```
pub fn process_collection(pipeline: &Pipeline, documents: &[Document]) -> Vec<ProcessedDocument> {
    documents
        .par_iter()
        .map(|document| {
            let artifacts = pipeline.run(document.text.as_deref());
            let final_token_count = artifacts.final_token_count();
            ProcessedDocument {
                id: document.id.clone(),
                text: document.text.clone(),
                artifacts,
                final_token_count,
            }
        })
        .collect()
}

/// The raw texts of a batch, skipping documents with missing text.
pub fn raw_texts(documents: &[Document]) -> Vec<&str> {
    documents
        .iter()
        .filter_map(|d| d.text.as_deref())
        .collect()
}

/// The final token sequences of processed documents, skipping those whose
/// input text was missing.
pub fn final_token_lists(results: &[ProcessedDocument]) -> Vec<&[String]> {
    results
        .iter()
        .filter(|r| r.text.is_some())
        .map(|r| r.artifacts.final_tokens.as_slice())
        .collect()
}
