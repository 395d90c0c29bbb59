//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into surface tokens. For the disguise
//! pipeline the important property is that spelling is preserved exactly:
//! the mixer substitutes the literal token text back into the original
//! string, so a tokenizer must never normalize what it emits.
//!
//! # Available Tokenizers
//!
//! - [`word_punct::WordPunctTokenizer`] - Words and punctuation runs as
//!   separate tokens, whitespace dropped (the default)
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use garble::analysis::token::{Token, TokenStream};
/// use garble::analysis::tokenizer::Tokenizer;
/// use garble::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod word_punct;
