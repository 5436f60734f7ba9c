//! Hashing utilities.

use sha2::{Digest, Sha256};

use crate::buf::Buf32;

/// Computes the SHA-256 hash of raw bytes.
pub fn raw(buf: &[u8]) -> Buf32 {
    let mut hasher = Sha256::new();
    hasher.update(buf);
    let arr: [u8; 32] = hasher.finalize().into();
    Buf32::from(arr)
}
