//! Table-backed lemma resolver.
//!
//! A [`StaticResolver`] serves lemmas from a fixed table of precomputed
//! annotations. Tokens absent from the table are omitted from the
//! `lemmatize` result — exactly the degraded-but-successful outcome the
//! mixer handles by leaving those tokens untouched. This makes it both the
//! injection point for callers with their own annotation output and the
//! natural fixture for exercising the unresolved-token policy.

use std::collections::{HashMap, HashSet};

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word_punct::WordPunctTokenizer;
use crate::error::Result;
use crate::lemma::LemmaResolver;

/// A resolver backed by a fixed surface-word→lemma table.
///
/// # Examples
///
/// ```
/// use garble::lemma::LemmaResolver;
/// use garble::lemma::static_map::StaticResolver;
///
/// let resolver = StaticResolver::from_entries([("running", "run"), ("runs", "run")]);
/// let lemmas = resolver.lemmatize("running runs jumps").unwrap();
///
/// assert_eq!(lemmas.get("running").map(String::as_str), Some("run"));
/// assert!(!lemmas.contains_key("jumps")); // unknown tokens are omitted
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticResolver {
    table: HashMap<String, String>,
    tokenizer: WordPunctTokenizer,
}

impl StaticResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from word→lemma entries.
    pub fn from_entries<I, W, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, L)>,
        W: Into<String>,
        L: Into<String>,
    {
        StaticResolver {
            table: entries
                .into_iter()
                .map(|(w, l)| (w.into(), l.into()))
                .collect(),
            tokenizer: WordPunctTokenizer::new(),
        }
    }

    /// Add one entry, builder style.
    pub fn with_entry<W, L>(mut self, word: W, lemma: L) -> Self
    where
        W: Into<String>,
        L: Into<String>,
    {
        self.table.insert(word.into(), lemma.into());
        self
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl LemmaResolver for StaticResolver {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenizer.tokenize(text)?.map(|t| t.text).collect())
    }

    fn lemmatize(&self, text: &str) -> Result<HashMap<String, String>> {
        let distinct: HashSet<String> = self.tokenize(text)?.into_iter().collect();

        Ok(distinct
            .into_iter()
            .filter_map(|token| {
                let lemma = self.table.get(&token).cloned()?;
                Some((token, lemma))
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens_resolve() {
        let resolver = StaticResolver::from_entries([("cats", "cat")]);
        let lemmas = resolver.lemmatize("cats").unwrap();

        assert_eq!(lemmas.get("cats").map(String::as_str), Some("cat"));
    }

    #[test]
    fn test_unknown_tokens_omitted() {
        let resolver = StaticResolver::from_entries([("cats", "cat")]);
        let lemmas = resolver.lemmatize("cats dogs").unwrap();

        assert_eq!(lemmas.len(), 1);
        assert!(!lemmas.contains_key("dogs"));
    }

    #[test]
    fn test_builder_entry() {
        let resolver = StaticResolver::new().with_entry("ran", "run");
        assert_eq!(resolver.len(), 1);

        let lemmas = resolver.lemmatize("ran").unwrap();
        assert_eq!(lemmas.get("ran").map(String::as_str), Some("run"));
    }

    #[test]
    fn test_tokenize_matches_default_tokenizer() {
        let resolver = StaticResolver::new();
        let tokens = resolver.tokenize("a, b").unwrap();
        assert_eq!(tokens, vec!["a", ",", "b"]);
    }
}
