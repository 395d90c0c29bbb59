//! The deterministic substitution-cipher core.
//!
//! Everything in this module is a pure function of its inputs: a lemma's
//! bytes flow through a fixed digest, an XOR-folding seed derivation, a
//! seeded shuffle of the vowel alphabet, and finally a per-character
//! substitution. Equal lemmas always produce equal permutations within a
//! process run; distinct lemmas may collide, which is accepted.

pub mod alphabet;
pub mod digest;
pub mod permutation;
pub mod seed;
pub mod substitute;

// Re-export commonly used types
pub use alphabet::VowelAlphabet;
pub use digest::LemmaDigest;
pub use permutation::PermutationMap;
pub use seed::derive_seed;
pub use substitute::apply_map;
