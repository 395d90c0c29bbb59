//! Lemma resolution: the collaborator boundary of the pipeline.
//!
//! The cipher core never does linguistics itself. It consumes two
//! operations from a [`LemmaResolver`]: split a text into ordered surface
//! tokens, and map each distinct surface token to its lemma (dictionary
//! base form). Anything implementing the trait can sit behind the mixer —
//! the in-process [`dictionary::DictionaryLemmatizer`], a table of
//! precomputed annotations ([`static_map::StaticResolver`]), or a caller's
//! own annotation service.
//!
//! Two failure kinds must stay distinct at this boundary:
//!
//! - the resolver itself failing (service down, backend error) surfaces as
//!   `Err(GarbleError::LemmaService)`;
//! - a single token the resolver cannot lemmatize is simply omitted from
//!   the returned map. That is degraded-but-successful: the mixer leaves
//!   such tokens unmodified and continues.

use std::collections::HashMap;

use crate::error::Result;

pub mod cache;
pub mod dictionary;
pub mod static_map;

// Re-export commonly used types
pub use cache::LemmaCache;
pub use dictionary::DictionaryLemmatizer;
pub use static_map::StaticResolver;

/// Trait for lemma resolution services.
///
/// Implementations may cache internally; caching affects latency only,
/// never correctness — a cache miss just triggers recomputation.
/// `Send + Sync` is required so one resolver can serve concurrent `mix`
/// invocations; the concurrency discipline of any internal cache is the
/// implementation's own responsibility.
pub trait LemmaResolver: Send + Sync {
    /// Split text into its ordered sequence of surface tokens, spelling
    /// preserved, punctuation and words as separate tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Map each distinct surface token of `text` to its lemma.
    ///
    /// Tokens the resolver cannot resolve are omitted from the map.
    fn lemmatize(&self, text: &str) -> Result<HashMap<String, String>>;

    /// Get the name of this resolver (for debugging and configuration).
    fn name(&self) -> &'static str;
}
