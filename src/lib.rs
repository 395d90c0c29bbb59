//! # Garble
//!
//! A deterministic, lemma-keyed vowel-disguise text transform.
//!
//! Every distinct word token in a text has its lowercase vowels remapped by a
//! vowel→vowel bijection derived from the word's lemma (dictionary base
//! form), so all inflections of one lemma receive the same substitution
//! within an invocation while different lemmas get different, reproducible
//! permutations.
//!
//! ## Pipeline
//!
//! ```text
//! lemma bytes → SHA-1 digest → XOR-folded 64-bit seed
//!             → seeded shuffle of the vowel alphabet → PermutationMap
//!             → per-character substitution → whole-text rewrite
//! ```
//!
//! Tokenization and lemmatization are a collaborator boundary: the
//! [`lemma::LemmaResolver`] trait. A dictionary-backed in-process resolver is
//! provided, but callers can inject their own annotation service.
//!
//! ## Example
//!
//! ```
//! use garble::mixer::VowelMixer;
//!
//! let mixer = VowelMixer::new();
//! let mixed = mixer.mix("running and runs").unwrap();
//! // "running" and "runs" share the lemma "run", so their vowels move
//! // consistently; repeated calls produce identical output.
//! assert_eq!(mixed, mixer.mix("running and runs").unwrap());
//! ```

pub mod analysis;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod lemma;
pub mod mixer;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
