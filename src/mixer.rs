//! The text rewriter: orchestrates the whole disguise pipeline.
//!
//! For each distinct surface token of a text, [`VowelMixer`] resolves the
//! token's lemma, derives a 64-bit seed from the lemma's digest, generates
//! the seeded vowel permutation, applies it to the token, and splices the
//! result back into the text as a global literal substring replacement.
//!
//! # Replacement semantics
//!
//! Replacement deliberately works on the *progressively rewritten* string,
//! by exact spelling, in a fixed order (distinct tokens sorted
//! lexicographically). Two consequences are accepted and documented rather
//! than corrected:
//!
//! - when one distinct token is a substring of another, an earlier
//!   replacement can corrupt the longer token before its own turn;
//! - matching is case-sensitive, so `"The"` and `"the"` are independent
//!   tokens with independently derived (lemma-keyed, usually identical)
//!   permutations applied to their own spellings.
//!
//! Tokens the resolver cannot lemmatize are skipped and survive unmodified;
//! only a failure of the resolver itself aborts the call.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cipher::alphabet::VowelAlphabet;
use crate::cipher::digest::LemmaDigest;
use crate::cipher::permutation::PermutationMap;
use crate::cipher::seed::derive_seed;
use crate::cipher::substitute::apply_map;
use crate::error::Result;
use crate::lemma::LemmaResolver;
use crate::lemma::dictionary::DictionaryLemmatizer;

/// One row of the pipeline's work, exposed for inspection tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSubstitution {
    /// The surface token as it appears in the text.
    pub token: String,
    /// The lemma the permutation was keyed on, if one resolved.
    pub lemma: Option<String>,
    /// The derived 64-bit seed (absent when the lemma did not resolve).
    pub seed: Option<u64>,
    /// The permutation as (from, to) pairs in canonical alphabet order.
    pub permutation: Option<Vec<(char, char)>>,
    /// The token after substitution; equals `token` when skipped.
    pub replacement: String,
}

/// The lemma-keyed vowel-disguise transform.
///
/// Stateless from the caller's perspective: every [`mix`](VowelMixer::mix)
/// call recomputes from scratch, so calls are independent and the same
/// input always produces the same output within a process. The only shared
/// mutable state is whatever cache the resolver keeps internally, making
/// concurrent `mix` calls safe whenever the resolver is.
///
/// # Examples
///
/// ```
/// use garble::mixer::VowelMixer;
///
/// let mixer = VowelMixer::new();
/// assert_eq!(mixer.mix("").unwrap(), "");
///
/// let mixed = mixer.mix("vowels move around").unwrap();
/// assert_eq!(mixed.len(), "vowels move around".len());
/// ```
pub struct VowelMixer {
    resolver: Arc<dyn LemmaResolver>,
    digest: LemmaDigest,
    alphabet: VowelAlphabet,
}

impl VowelMixer {
    /// Create a mixer with the default stack: dictionary lemmatizer, SHA-1
    /// digest, and the five lowercase ASCII vowels.
    pub fn new() -> Self {
        Self::with_resolver(Arc::new(DictionaryLemmatizer::new()))
    }

    /// Create a mixer with a custom lemma resolver.
    pub fn with_resolver(resolver: Arc<dyn LemmaResolver>) -> Self {
        VowelMixer {
            resolver,
            digest: LemmaDigest::sha1(),
            alphabet: VowelAlphabet::default(),
        }
    }

    /// Replace the alphabet, builder style.
    pub fn with_alphabet(mut self, alphabet: VowelAlphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Replace the digest, builder style.
    pub fn with_digest(mut self, digest: LemmaDigest) -> Self {
        self.digest = digest;
        self
    }

    /// The resolver behind this mixer.
    pub fn resolver(&self) -> &Arc<dyn LemmaResolver> {
        &self.resolver
    }

    /// The alphabet this mixer permutes.
    pub fn alphabet(&self) -> &VowelAlphabet {
        &self.alphabet
    }

    /// Derive the permutation a lemma keys, independent of any text.
    pub fn permutation_for_lemma(&self, lemma: &str) -> PermutationMap {
        let digest = self.digest.digest(lemma.as_bytes());
        let seed = derive_seed(&digest);
        PermutationMap::generate(seed, &self.alphabet)
    }

    /// Rewrite `text`, disguising every distinct token whose lemma resolves.
    pub fn mix(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let distinct: BTreeSet<String> = self.resolver.tokenize(text)?.into_iter().collect();
        let lemmas = self.resolver.lemmatize(text)?;

        let mut rewritten = text.to_string();

        for token in &distinct {
            let Some(lemma) = lemmas.get(token) else {
                warn!("no lemma for token {token:?}, leaving it unmodified");
                continue;
            };

            let digest = self.digest.digest(lemma.as_bytes());
            let seed = derive_seed(&digest);
            let map = PermutationMap::generate(seed, &self.alphabet);
            let replacement = apply_map(token, &map);

            debug!("token {token:?} lemma {lemma:?} seed {seed:#018x} -> {replacement:?}");

            if replacement != *token {
                rewritten = rewritten.replace(token.as_str(), &replacement);
            }
        }

        Ok(rewritten)
    }

    /// Trace the per-token pipeline values for `text` without rewriting it.
    ///
    /// Rows come back in the same fixed order `mix` processes tokens.
    pub fn trace(&self, text: &str) -> Result<Vec<TokenSubstitution>> {
        let distinct: BTreeSet<String> = self.resolver.tokenize(text)?.into_iter().collect();
        let lemmas = self.resolver.lemmatize(text)?;

        Ok(distinct
            .into_iter()
            .map(|token| match lemmas.get(&token) {
                Some(lemma) => {
                    let digest = self.digest.digest(lemma.as_bytes());
                    let seed = derive_seed(&digest);
                    let map = PermutationMap::generate(seed, &self.alphabet);
                    let replacement = apply_map(&token, &map);
                    TokenSubstitution {
                        token,
                        lemma: Some(lemma.clone()),
                        seed: Some(seed),
                        permutation: Some(map.pairs().to_vec()),
                        replacement,
                    }
                }
                None => TokenSubstitution {
                    replacement: token.clone(),
                    token,
                    lemma: None,
                    seed: None,
                    permutation: None,
                },
            })
            .collect())
    }
}

impl Default for VowelMixer {
    fn default() -> Self {
        Self::new()
    }
}
