//! Seed derivation: folding a digest into a 64-bit integer.
//!
//! The digest is partitioned into consecutive 8-byte blocks; each block is
//! packed most-significant-byte-first into a `u64` and all blocks are XORed
//! together. A trailing partial block (1–7 bytes) is packed from only the
//! bytes present, with no zero padding — it contributes exactly the value
//! of its own bytes read MSB-first into a fresh accumulator.
//!
//! This is a length-extension-insensitive folding function, not a hash in
//! its own right: two different digests can fold to the same seed, which is
//! accepted.

/// Fold digest bytes into a single 64-bit seed.
///
/// # Examples
///
/// ```
/// use garble::cipher::seed::derive_seed;
///
/// assert_eq!(derive_seed(&[0x01, 0, 0, 0, 0, 0, 0, 0]), 0x0100000000000000);
/// assert_eq!(derive_seed(&[]), 0);
/// ```
pub fn derive_seed(digest: &[u8]) -> u64 {
    let mut seed = 0u64;

    for block in digest.chunks(8) {
        let mut acc = 0u64;
        for &byte in block {
            acc = (acc << 8) | u64::from(byte);
        }
        seed ^= acc;
    }

    seed
}
