//! Cryptographic digest of a lemma's bytes.
//!
//! Wraps a named, fixed hash algorithm behind a small struct so the
//! algorithm choice is a construction-time decision. An unknown algorithm
//! name fails immediately with [`GarbleError::UnsupportedAlgorithm`] —
//! without the digest the whole pipeline cannot run, so this is surfaced at
//! initialization rather than per call.
//!
//! The digest itself is a pure function bytes→bytes. Lemma text should be
//! passed as its UTF-8 encoding; multi-byte characters are hashed in full,
//! never truncated.

use sha1::{Digest, Sha1};

use crate::error::{GarbleError, Result};

/// Digest output length in bytes for SHA-1.
pub const SHA1_OUTPUT_LEN: usize = 20;

/// The digest algorithms Garble knows how to construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Algorithm {
    Sha1,
}

/// A named digest function applied to lemma bytes.
///
/// # Examples
///
/// ```
/// use garble::cipher::digest::LemmaDigest;
///
/// let digest = LemmaDigest::sha1();
/// let bytes = digest.digest(b"run");
/// assert_eq!(bytes.len(), 20);
/// // Pure: same input, same output.
/// assert_eq!(bytes, digest.digest(b"run"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LemmaDigest {
    algorithm: Algorithm,
}

impl LemmaDigest {
    /// Create a digest for the given algorithm name.
    ///
    /// Accepts `"sha-1"` / `"sha1"` (case-insensitive). Any other name is a
    /// fatal configuration error.
    pub fn new(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha-1" | "sha1" => Ok(LemmaDigest {
                algorithm: Algorithm::Sha1,
            }),
            _ => Err(GarbleError::unsupported_algorithm(name)),
        }
    }

    /// Create the default SHA-1 digest.
    pub fn sha1() -> Self {
        LemmaDigest {
            algorithm: Algorithm::Sha1,
        }
    }

    /// Compute the digest of the given bytes.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            Algorithm::Sha1 => Sha1::digest(data).to_vec(),
        }
    }

    /// The output length of this digest, in bytes.
    pub fn output_len(&self) -> usize {
        match self.algorithm {
            Algorithm::Sha1 => SHA1_OUTPUT_LEN,
        }
    }

    /// The canonical name of this digest algorithm.
    pub fn name(&self) -> &'static str {
        match self.algorithm {
            Algorithm::Sha1 => "sha-1",
        }
    }
}

impl Default for LemmaDigest {
    fn default() -> Self {
        Self::sha1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_output_length() {
        let digest = LemmaDigest::sha1();
        assert_eq!(digest.digest(b"run").len(), SHA1_OUTPUT_LEN);
        assert_eq!(digest.digest(b"").len(), SHA1_OUTPUT_LEN);
        assert_eq!(digest.output_len(), SHA1_OUTPUT_LEN);
    }

    #[test]
    fn test_sha1_known_vector() {
        // SHA-1("abc") from FIPS 180-1.
        let digest = LemmaDigest::sha1();
        let expected: [u8; 20] = [
            0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50,
            0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
        ];
        assert_eq!(digest.digest(b"abc"), expected);
    }

    #[test]
    fn test_deterministic() {
        let digest = LemmaDigest::sha1();
        assert_eq!(digest.digest(b"lemma"), digest.digest(b"lemma"));
        assert_ne!(digest.digest(b"lemma"), digest.digest(b"lemmb"));
    }

    #[test]
    fn test_multibyte_input() {
        // Multi-byte UTF-8 input is hashed over all its bytes.
        let digest = LemmaDigest::sha1();
        let full = digest.digest("naïve".as_bytes());
        let truncated = digest.digest(b"nave");
        assert_ne!(full, truncated);
    }

    #[test]
    fn test_algorithm_names() {
        assert!(LemmaDigest::new("sha-1").is_ok());
        assert!(LemmaDigest::new("SHA1").is_ok());

        let err = LemmaDigest::new("md5").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported digest algorithm: md5");
    }
}
