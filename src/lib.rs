//! # Sapu
//!
//! A configurable preprocessing pipeline for Indonesian and English
//! social-media comments.
//!
//! ## Features
//!
//! - Fixed-order pipeline: case folding, tokenization and symbol cleaning,
//!   slang normalization, stopword removal, stemming/lemmatization
//! - Per-stage enable flags; intermediate outputs captured at every stage
//! - Confix-stripping Indonesian stemmer and dictionary English lemmatizer
//! - Curated stopword lists with negation preservation for Indonesian
//! - CSV slang dictionary loading with graceful degradation
//! - Word frequency tables and corpus statistics
//! - CSV export of full, summary, and frequency result views
//! - Parallel batch processing
//!
//! ## Quick start
//!
//! ```
//! use sapu::config::{Language, StageConfig};
//! use sapu::document::{Document, process_collection};
//! use sapu::pipeline::Pipeline;
//! use sapu::resource::Resources;
//!
//! let resources = Resources::new();
//! let pipeline = Pipeline::new(&resources, Language::Indonesian, StageConfig::all());
//!
//! let documents = vec![Document::new("1", "Makanannya enak banget!")];
//! let results = process_collection(&pipeline, &documents);
//!
//! assert_eq!(results[0].artifacts.final_text, "makan enak");
//! ```

pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod frequency;
pub mod pipeline;
pub mod resource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
