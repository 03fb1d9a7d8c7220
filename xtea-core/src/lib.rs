//! core functionality for the XTEA block cipher:
//! 64-bit block, 128-bit key, configurable Feistel cycle count
//!
//! # Modules
//!
//! - `cipher`: single-block encrypt/decrypt primitive
//! - `codec`: canonical byte encoding for blocks and keys

pub mod cipher;
pub mod codec;

// Re-export commonly used items
pub use cipher::{CipherError, DELTA, RECOMMENDED_ROUNDS, decrypt_block, encrypt_block};
pub use codec::{bytes_from_words, decrypt, encrypt, key_from_bytes, words_from_bytes};
