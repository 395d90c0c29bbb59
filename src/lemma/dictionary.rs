//! Dictionary-backed in-process lemmatizer.
//!
//! A lightweight English lemmatizer: an irregular-form table for the common
//! strong verbs and irregular plurals, plus heuristic suffix stripping for
//! regular inflection (-s, -es, -ies, -ing, -ed). Words it does not
//! recognize fall back to themselves, so every token resolves — the
//! unresolved-token path only exists for resolvers that genuinely omit
//! entries, such as [`crate::lemma::static_map::StaticResolver`].
//!
//! Like any heuristic stemmer this gets exotic vocabulary wrong. That is
//! acceptable here: the mixer only needs lemmas to be *stable*, so that all
//! inflections of one word key the same permutation.
//!
//! # Examples
//!
//! ```
//! use garble::lemma::LemmaResolver;
//! use garble::lemma::dictionary::DictionaryLemmatizer;
//!
//! let lemmatizer = DictionaryLemmatizer::new();
//! let lemmas = lemmatizer.lemmatize("running mice ran").unwrap();
//!
//! assert_eq!(lemmas.get("running").map(String::as_str), Some("run"));
//! assert_eq!(lemmas.get("mice").map(String::as_str), Some("mouse"));
//! assert_eq!(lemmas.get("ran").map(String::as_str), Some("run"));
//! ```

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word_punct::WordPunctTokenizer;
use crate::error::Result;
use crate::lemma::LemmaResolver;
use crate::lemma::cache::LemmaCache;

/// Irregular surface form → lemma pairs, checked before suffix rules.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // be / have / do
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    // common strong verbs
    ("ran", "run"),
    ("went", "go"),
    ("gone", "go"),
    ("goes", "go"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("found", "find"),
    ("got", "get"),
    ("gotten", "get"),
    ("told", "tell"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("left", "leave"),
    ("brought", "bring"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("held", "hold"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("put", "put"),
    ("read", "read"),
    ("sat", "sit"),
    ("lost", "lose"),
    ("won", "win"),
    // irregular plurals
    ("mice", "mouse"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("people", "person"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    // comparatives that change stems
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// The in-process default [`LemmaResolver`].
///
/// Memoizes per surface word through a bounded [`LemmaCache`], so repeated
/// text processes quickly; eviction only ever costs recomputation.
pub struct DictionaryLemmatizer {
    tokenizer: WordPunctTokenizer,
    irregular: HashMap<&'static str, &'static str>,
    cache: LemmaCache,
}

impl DictionaryLemmatizer {
    /// Create a lemmatizer with the default cache capacity.
    pub fn new() -> Self {
        Self::with_cache(LemmaCache::default())
    }

    /// Create a lemmatizer with an explicit cache.
    ///
    /// Pass `LemmaCache::new(0)` to disable memoization.
    pub fn with_cache(cache: LemmaCache) -> Self {
        DictionaryLemmatizer {
            tokenizer: WordPunctTokenizer::new(),
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
            cache,
        }
    }

    /// The memo cache, exposed for inspection.
    pub fn cache(&self) -> &LemmaCache {
        &self.cache
    }

    /// Resolve a single surface word to its lemma.
    pub fn lemma_of(&self, word: &str) -> String {
        if let Some(hit) = self.cache.get(word) {
            return hit;
        }

        let lemma = self.compute_lemma(word);
        debug!("lemmatized {word:?} -> {lemma:?}");
        self.cache.insert(word, lemma.clone());
        lemma
    }

    fn compute_lemma(&self, word: &str) -> String {
        // Punctuation, numbers, mixed symbols: the token is its own lemma.
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.to_string();
        }

        let lower = word.to_ascii_lowercase();

        if let Some(&lemma) = self.irregular.get(lower.as_str()) {
            return lemma.to_string();
        }

        Self::strip_suffix(&lower)
    }

    /// Heuristic suffix stripping for regular English inflection.
    fn strip_suffix(word: &str) -> String {
        let n = word.len();

        // Plural / third-person -s forms.
        if let Some(stem) = word.strip_suffix("ies")
            && n > 4
        {
            return format!("{stem}y");
        }
        if word.ends_with("sses") {
            return word[..n - 2].to_string();
        }
        if (word.ends_with("shes")
            || word.ends_with("ches")
            || word.ends_with("xes")
            || word.ends_with("zes"))
            && n > 4
        {
            return word[..n - 2].to_string();
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        if let Some(stem) = word.strip_suffix('s')
            && n > 3
        {
            return stem.to_string();
        }

        // Progressive -ing.
        if let Some(stem) = word.strip_suffix("ing")
            && n > 5
            && Self::has_vowel(stem)
        {
            return Self::fix_stem(stem);
        }

        // Past tense -ed.
        if let Some(stem) = word.strip_suffix("ed")
            && n > 4
            && Self::has_vowel(stem)
        {
            return Self::fix_stem(stem);
        }

        word.to_string()
    }

    /// Repair a stem left by -ing/-ed removal: undouble a doubled final
    /// consonant ("running" → "run"), or restore a dropped final "e" after
    /// a consonant-vowel-consonant ending ("making" → "make").
    fn fix_stem(stem: &str) -> String {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();

        if n >= 2 && chars[n - 1] == chars[n - 2] && !Self::is_vowel(chars[n - 1]) {
            match chars[n - 1] {
                'l' | 's' | 'z' => {}
                _ => return chars[..n - 1].iter().collect(),
            }
        }

        if n >= 3
            && !Self::is_vowel(chars[n - 1])
            && chars[n - 1] != 'w'
            && chars[n - 1] != 'x'
            && chars[n - 1] != 'y'
            && Self::is_vowel(chars[n - 2])
            && !Self::is_vowel(chars[n - 3])
        {
            return format!("{stem}e");
        }

        stem.to_string()
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    fn has_vowel(word: &str) -> bool {
        word.chars().any(Self::is_vowel)
    }
}

impl Default for DictionaryLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaResolver for DictionaryLemmatizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenizer.tokenize(text)?.map(|t| t.text).collect())
    }

    fn lemmatize(&self, text: &str) -> Result<HashMap<String, String>> {
        let distinct: HashSet<String> = self.tokenize(text)?.into_iter().collect();

        Ok(distinct
            .into_iter()
            .map(|token| {
                let lemma = self.lemma_of(&token);
                (token, lemma)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
