//! Bounded memo cache for word→lemma lookups.
//!
//! Lemmatizing a word is the expensive step of the pipeline, so resolvers
//! memoize per surface word. The cache is bounded: once `capacity` entries
//! are held, the oldest insertion is evicted first. Eviction is invisible
//! to correctness — an evicted word is simply recomputed on next sight.
//!
//! Interior mutability via `parking_lot::RwLock` lets a resolver memoize
//! behind `&self`, which keeps the whole pipeline usable from concurrent
//! invocations without external locking.

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;

/// Default number of cached word→lemma entries.
pub const DEFAULT_CAPACITY: usize = 10_000;

struct CacheInner {
    map: HashMap<String, String>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
}

/// A bounded, thread-safe word→lemma memo cache.
///
/// # Examples
///
/// ```
/// use garble::lemma::cache::LemmaCache;
///
/// let cache = LemmaCache::new(2);
/// cache.insert("running", "run");
/// cache.insert("mice", "mouse");
/// assert_eq!(cache.get("running").as_deref(), Some("run"));
///
/// // Third insert evicts the oldest entry.
/// cache.insert("geese", "goose");
/// assert_eq!(cache.get("running"), None);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LemmaCache {
    inner: RwLock<CacheInner>,
    capacity: usize,
}

impl LemmaCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero disables memoization entirely.
    pub fn new(capacity: usize) -> Self {
        LemmaCache {
            inner: RwLock::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity,
        }
    }

    /// Look up the memoized lemma for a surface word.
    pub fn get(&self, word: &str) -> Option<String> {
        self.inner.read().map.get(word).cloned()
    }

    /// Memoize a word→lemma pair, evicting the oldest entry when full.
    pub fn insert<W, L>(&self, word: W, lemma: L)
    where
        W: Into<String>,
        L: Into<String>,
    {
        if self.capacity == 0 {
            return;
        }

        let word = word.into();
        let mut inner = self.inner.write();

        if inner.map.contains_key(&word) {
            inner.map.insert(word, lemma.into());
            return;
        }

        while inner.map.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            } else {
                break;
            }
        }

        inner.order.push_back(word.clone());
        inner.map.insert(word, lemma.into());
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.read().map.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().map.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LemmaCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
