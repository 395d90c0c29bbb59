//! Seeded generation of vowel permutations.
//!
//! A [`PermutationMap`] is a total bijection over a [`VowelAlphabet`]: every
//! symbol appears exactly once as a key and exactly once as a value. It is
//! built by seeding a deterministic generator with the lemma-derived 64-bit
//! seed, Fisher–Yates-shuffling a copy of the alphabet, and zipping the
//! canonical order against the shuffled order positionally.
//!
//! Determinism holds per (seed, alphabet) within this crate: the generator
//! is `StdRng` seeded via `seed_from_u64`, and the shuffle is the `rand`
//! crate's unbiased slice shuffle. Bit-for-bit parity with other
//! implementations' generators is not a goal.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::cipher::alphabet::VowelAlphabet;

/// A bijective symbol→symbol substitution table over one alphabet.
///
/// # Examples
///
/// ```
/// use garble::cipher::alphabet::VowelAlphabet;
/// use garble::cipher::permutation::PermutationMap;
///
/// let alphabet = VowelAlphabet::default();
/// let map = PermutationMap::generate(42, &alphabet);
///
/// // Same seed, same permutation.
/// assert_eq!(map, PermutationMap::generate(42, &alphabet));
/// // Total bijection over the alphabet.
/// assert!(map.is_bijection_over(&alphabet));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationMap {
    /// (from, to) pairs in the alphabet's canonical order.
    pairs: Vec<(char, char)>,
}

impl PermutationMap {
    /// Generate the permutation for a 64-bit seed over the given alphabet.
    ///
    /// Always succeeds; every seed value is valid.
    pub fn generate(seed: u64, alphabet: &VowelAlphabet) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut shuffled: Vec<char> = alphabet.symbols().to_vec();
        shuffled.shuffle(&mut rng);

        let pairs = alphabet
            .symbols()
            .iter()
            .copied()
            .zip(shuffled)
            .collect();

        PermutationMap { pairs }
    }

    /// Look up the substitution for a symbol.
    ///
    /// Returns `None` for characters outside the alphabet.
    pub fn get(&self, c: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }

    /// The (from, to) pairs in canonical alphabet order.
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// Verify that this map is a total bijection over the given alphabet.
    pub fn is_bijection_over(&self, alphabet: &VowelAlphabet) -> bool {
        if self.pairs.len() != alphabet.len() {
            return false;
        }

        let keys: Vec<char> = self.pairs.iter().map(|(from, _)| *from).collect();
        let values: Vec<char> = self.pairs.iter().map(|(_, to)| *to).collect();

        alphabet.symbols().iter().all(|c| keys.contains(c))
            && alphabet.symbols().iter().all(|c| values.contains(c))
            && values
                .iter()
                .enumerate()
                .all(|(i, v)| !values[..i].contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let alphabet = VowelAlphabet::default();
        for seed in [0u64, 1, 42, u64::MAX] {
            let a = PermutationMap::generate(seed, &alphabet);
            let b = PermutationMap::generate(seed, &alphabet);
            assert_eq!(a, b, "seed {seed} must reproduce its permutation");
        }
    }

    #[test]
    fn test_bijection_invariant_across_seeds() {
        let alphabet = VowelAlphabet::default();
        for seed in 0..500u64 {
            let map = PermutationMap::generate(seed, &alphabet);
            assert!(
                map.is_bijection_over(&alphabet),
                "seed {seed} produced a non-bijective map"
            );
        }
    }

    #[test]
    fn test_values_stay_in_alphabet() {
        let alphabet = VowelAlphabet::default();
        let map = PermutationMap::generate(7, &alphabet);

        for &(from, to) in map.pairs() {
            assert!(alphabet.contains(from));
            assert!(alphabet.contains(to));
        }
    }

    #[test]
    fn test_lookup_outside_alphabet() {
        let alphabet = VowelAlphabet::default();
        let map = PermutationMap::generate(7, &alphabet);

        assert_eq!(map.get('x'), None);
        assert_eq!(map.get('A'), None);
        assert!(map.get('a').is_some());
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        // 5! = 120 permutations; a handful of distinct seeds should hit at
        // least two distinct permutations.
        let alphabet = VowelAlphabet::default();
        let maps: Vec<_> = (0..10u64)
            .map(|s| PermutationMap::generate(s, &alphabet))
            .collect();
        assert!(maps.iter().any(|m| *m != maps[0]));
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = VowelAlphabet::new("aeiouy".chars()).unwrap();
        let map = PermutationMap::generate(3, &alphabet);
        assert!(map.is_bijection_over(&alphabet));
        assert_eq!(map.pairs().len(), 6);
    }
}
