//! Text analysis module for Sapu.
//!
//! This module provides the building blocks of the preprocessing pipeline:
//! tokens, tokenizers, and token filters. The [`crate::pipeline`] module
//! assembles these into the fixed-order cleaning pipeline.

pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
