// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The textbench authors

//! String hashing helper utilities.

/// Digest algorithms offered by the hash functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha512,
}

/// Compute the digest of a string's UTF-8 bytes and return its lowercase hex form.
///
/// # Examples
///
/// ```rust,ignore
/// use textbench::utils::hash::{HashAlgorithm, hash_str};
/// let digest = hash_str(HashAlgorithm::Sha256, "notes");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_str(algorithm: HashAlgorithm, input: &str) -> String {
    let bytes = input.as_bytes();
    match algorithm {
        HashAlgorithm::Sha1 => {
            use sha1::{Digest, Sha1};
            hex::encode(Sha1::digest(bytes))
        }
        HashAlgorithm::Sha256 => {
            use sha2::{Digest, Sha256};
            hex::encode(Sha256::digest(bytes))
        }
        HashAlgorithm::Sha512 => {
            use sha2::{Digest, Sha512};
            hex::encode(Sha512::digest(bytes))
        }
    }
}
