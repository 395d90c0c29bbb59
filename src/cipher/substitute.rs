//! Applying a permutation to a token, character by character.

use crate::cipher::permutation::PermutationMap;

/// Rewrite each in-alphabet character of `token` through `map`.
///
/// Characters outside the map's domain — consonants, digits, punctuation,
/// uppercase vowels — are kept unchanged. The result has the same character
/// count as the input, since every substitution value is a single symbol
/// from the same alphabet.
///
/// # Examples
///
/// ```
/// use garble::cipher::alphabet::VowelAlphabet;
/// use garble::cipher::permutation::PermutationMap;
/// use garble::cipher::substitute::apply_map;
///
/// let alphabet = VowelAlphabet::default();
/// let map = PermutationMap::generate(42, &alphabet);
///
/// let out = apply_map("banana", &map);
/// assert_eq!(out.chars().count(), 6);
/// // Consonants survive in place.
/// assert_eq!(out.chars().next(), Some('b'));
/// ```
pub fn apply_map(token: &str, map: &PermutationMap) -> String {
    token
        .chars()
        .map(|c| map.get(c).unwrap_or(c))
        .collect()
}
