//! Text analysis module for Garble.
//!
//! This module provides the tokenization side of the pipeline: the token
//! model and the tokenizers that split raw text into surface tokens with
//! their original spelling preserved.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
