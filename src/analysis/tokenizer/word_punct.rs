//! Word-and-punctuation tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps both
//! word segments and punctuation runs as tokens, dropping only whitespace.
//! This mirrors how linguistic annotation pipelines tokenize: punctuation
//! becomes its own token rather than disappearing.
//!
//! # Examples
//!
//! ```
//! use garble::analysis::tokenizer::Tokenizer;
//! use garble::analysis::tokenizer::word_punct::WordPunctTokenizer;
//!
//! let tokenizer = WordPunctTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits words and punctuation runs as separate tokens.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) for word
/// boundaries, so international text segments correctly. Whitespace-only
/// segments are discarded; everything else is emitted with its surface
/// spelling untouched.
#[derive(Clone, Debug, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
    /// Create a new word-and-punctuation tokenizer.
    pub fn new() -> Self {
        WordPunctTokenizer
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for (start_offset, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            let end_offset = start_offset + segment.len();
            tokens.push(Token::with_offsets(
                segment,
                position,
                start_offset,
                end_offset,
            ));
            position += 1;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_punct"
    }
}
