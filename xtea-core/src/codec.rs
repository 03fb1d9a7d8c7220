//! Canonical byte encoding for blocks and keys
//!
//! One convention, used everywhere: little-endian bytes within each 32-bit
//! word, `v0` before `v1`, key words `k[0]..k[3]` as consecutive 4-byte
//! groups. Fixed-size arrays keep malformed lengths unrepresentable, so the
//! only reportable error remains an invalid round count.

use crate::cipher::{self, CipherError};

/// Decode an 8-byte block into `[v0, v1]`
pub fn words_from_bytes(bytes: &[u8; 8]) -> [u32; 2] {
    [
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    ]
}

/// Encode `[v0, v1]` into 8 bytes
pub fn bytes_from_words(words: [u32; 2]) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&words[0].to_le_bytes());
    out[4..].copy_from_slice(&words[1].to_le_bytes());
    out
}

/// Decode a 16-byte key into `k[0]..k[3]`
pub fn key_from_bytes(bytes: &[u8; 16]) -> [u32; 4] {
    [
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
    ]
}

/// Encrypt exactly one 8-byte block with a 16-byte key
pub fn encrypt(block: &[u8; 8], key: &[u8; 16], rounds: u32) -> Result<[u8; 8], CipherError> {
    let words = cipher::encrypt_block(words_from_bytes(block), &key_from_bytes(key), rounds)?;
    Ok(bytes_from_words(words))
}

/// Decrypt exactly one 8-byte block with a 16-byte key
pub fn decrypt(block: &[u8; 8], key: &[u8; 16], rounds: u32) -> Result<[u8; 8], CipherError> {
    let words = cipher::decrypt_block(words_from_bytes(block), &key_from_bytes(key), rounds)?;
    Ok(bytes_from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_order() {
        let bytes = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let words = words_from_bytes(&bytes);
        assert_eq!(words, [0x03020100, 0x07060504]);
        assert_eq!(bytes_from_words(words), bytes);
    }

    #[test]
    fn test_key_layout() {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(
            key_from_bytes(&bytes),
            [0x03020100, 0x07060504, 0x0B0A0908, 0x0F0E0D0C]
        );
    }

    #[test]
    fn test_byte_level_known_answer() {
        let block = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut key = [0u8; 16];
        for (i, b) in key.iter_mut().enumerate() {
            *b = i as u8;
        }

        let ct = encrypt(&block, &key, 32).unwrap();
        assert_eq!(
            ct,
            [0x25, 0x60, 0x04, 0xE1, 0xF5, 0x5B, 0xC0, 0xC7],
            "ciphertext should be 256004e1f55bc0c7"
        );
        assert_eq!(decrypt(&ct, &key, 32).unwrap(), block);
    }

    #[test]
    fn test_byte_and_word_apis_agree() {
        let block = *b"datadata";
        let key = *b"0123456789abcdef";

        let via_bytes = encrypt(&block, &key, 32).unwrap();
        let via_words =
            cipher::encrypt_block(words_from_bytes(&block), &key_from_bytes(&key), 32).unwrap();
        assert_eq!(words_from_bytes(&via_bytes), via_words);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let block = [0u8; 8];
        let key = [0u8; 16];
        assert_eq!(encrypt(&block, &key, 0), Err(CipherError::InvalidRounds));
        assert_eq!(decrypt(&block, &key, 0), Err(CipherError::InvalidRounds));
    }
}
