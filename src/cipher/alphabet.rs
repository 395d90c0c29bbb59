//! The vowel alphabet: the ordered symbol set the cipher permutes.
//!
//! Only symbols in the alphabet are ever substituted; everything else —
//! consonants, digits, punctuation, and notably *uppercase* vowels — passes
//! through a token unchanged. The default alphabet is the five lowercase
//! ASCII vowels. The type exists as an extension seam: callers who want
//! case-insensitive or locale-specific behavior supply their own symbol
//! list rather than patching the cipher.

use crate::error::{GarbleError, Result};

/// The canonical default vowel set, in canonical order.
pub const DEFAULT_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// An ordered set of symbols to permute.
///
/// Order matters: the permutation generator zips this canonical order
/// against a shuffled copy, so two alphabets with the same symbols in
/// different orders produce different permutations for the same seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VowelAlphabet {
    symbols: Vec<char>,
}

impl VowelAlphabet {
    /// Create an alphabet from an explicit symbol list.
    ///
    /// Returns an error if the list is empty or contains duplicates — a
    /// duplicate symbol would make a bijection over the set impossible.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.is_empty() {
            return Err(GarbleError::invalid_argument(
                "alphabet must contain at least one symbol",
            ));
        }

        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(GarbleError::invalid_argument(format!(
                    "duplicate symbol in alphabet: {c:?}"
                )));
            }
        }

        Ok(VowelAlphabet { symbols })
    }

    /// The symbols of this alphabet, in canonical order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether a character belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the alphabet is empty (never true for a constructed value).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for VowelAlphabet {
    fn default() -> Self {
        VowelAlphabet {
            symbols: DEFAULT_VOWELS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = VowelAlphabet::default();
        assert_eq!(alphabet.symbols(), &['a', 'e', 'i', 'o', 'u']);
        assert_eq!(alphabet.len(), 5);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let alphabet = VowelAlphabet::default();
        assert!(alphabet.contains('a'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('x'));
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = VowelAlphabet::new("aeiouy".chars()).unwrap();
        assert_eq!(alphabet.len(), 6);
        assert!(alphabet.contains('y'));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        assert!(VowelAlphabet::new("aea".chars()).is_err());
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(VowelAlphabet::new(std::iter::empty()).is_err());
    }
}
