//! XTEA single-block encryption and decryption
//!
//! 64-bit block, 128-bit key, Feistel network with a configurable number
//! of cycles. Each call is a pure function of its inputs; the sum schedule
//! is recomputed per call and nothing is shared between calls.

use thiserror::Error;

/// Sum schedule increment per cycle (derived from the golden ratio)
pub const DELTA: u32 = 0x9E3779B9;

/// Canonical XTEA cycle count. 64 also shows up in the wild.
pub const RECOMMENDED_ROUNDS: u32 = 32;

/// Errors reportable by a single-block transform
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// A 0-round transform would be the identity, which a caller asking for
    /// encryption never wants. Rounds are never clamped to a default.
    #[error("round count must be at least 1")]
    InvalidRounds,
}

/// Encrypt a 64-bit block `[v0, v1]` with a 128-bit key (4 × u32).
///
/// `rounds` is the number of Feistel cycles (two half-round updates each).
/// Any `rounds >= 1` is accepted; the loop counter is a full u32, so counts
/// above 255 work (8-bit counters in old C renditions silently cap there).
/// All arithmetic is mod 2^32 with zero-fill right shifts.
pub fn encrypt_block(block: [u32; 2], key: &[u32; 4], rounds: u32) -> Result<[u32; 2], CipherError> {
    if rounds == 0 {
        return Err(CipherError::InvalidRounds);
    }

    let [mut v0, mut v1] = block;
    let mut sum: u32 = 0;

    for _ in 0..rounds {
        v0 = v0.wrapping_add(
            (((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1))
                ^ (sum.wrapping_add(key[(sum & 3) as usize])),
        );
        sum = sum.wrapping_add(DELTA);
        v1 = v1.wrapping_add(
            (((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0))
                ^ (sum.wrapping_add(key[((sum >> 11) & 3) as usize])),
        );
    }

    Ok([v0, v1])
}

/// Decrypt a 64-bit block `[v0, v1]` with a 128-bit key (4 × u32).
///
/// Exact inverse of [`encrypt_block`] for the same key and round count.
/// The starting sum is `DELTA * rounds` (mod 2^32) — computed from `rounds`,
/// never hardcoded, so 0xC6EF3720 (32 cycles) and 0x8DDE6E40 (64 cycles)
/// fall out as consequences rather than living as magic numbers.
pub fn decrypt_block(block: [u32; 2], key: &[u32; 4], rounds: u32) -> Result<[u32; 2], CipherError> {
    if rounds == 0 {
        return Err(CipherError::InvalidRounds);
    }

    let [mut v0, mut v1] = block;
    let mut sum: u32 = DELTA.wrapping_mul(rounds);

    for _ in 0..rounds {
        v1 = v1.wrapping_sub(
            (((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0))
                ^ (sum.wrapping_add(key[((sum >> 11) & 3) as usize])),
        );
        sum = sum.wrapping_sub(DELTA);
        v0 = v0.wrapping_sub(
            (((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1))
                ^ (sum.wrapping_add(key[(sum & 3) as usize])),
        );
    }

    Ok([v0, v1])
}
