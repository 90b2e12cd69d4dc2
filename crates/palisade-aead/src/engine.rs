// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use aes_gcm::{AeadInPlace, Aes256Gcm, KeyInit, Nonce, Tag};
use palisade_codec::{self as codec, NONCE_SIZE, TAG_SIZE};
use palisade_rand::{EntropySource, SystemEntropySource};
use zeroize::{Zeroize, Zeroizing};

use crate::KEY_SIZE;
use crate::error::AeadError;

/// Messages carry no associated data; the tag binds the ciphertext alone.
/// Adding AAD would require a length-prefixed field in the wire layout.
const AAD: &[u8] = &[];

/// AES-256-GCM engine over an injectable entropy capability.
///
/// Stateless and side-effect-free aside from entropy consumption; a single
/// engine can serve concurrent seal/open calls when `E: Sync`. Production
/// code uses [`Aead::system`]; tests inject a deterministic or failing
/// source.
pub struct Aead<E: EntropySource> {
    entropy: E,
}

impl Aead<SystemEntropySource> {
    /// Creates an engine backed by the OS secure random generator.
    pub fn system() -> Self {
        Self::new(SystemEntropySource {})
    }
}

impl<E: EntropySource> Aead<E> {
    /// Creates an engine over the given entropy source.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Generates a fresh 32-byte key.
    ///
    /// The key is wrapped in [`Zeroizing`] so it is wiped when the caller
    /// drops it.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::Entropy`] if the secure random generator cannot
    /// be read.
    pub fn generate_key(&self) -> Result<Zeroizing<[u8; KEY_SIZE]>, AeadError> {
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        self.entropy.fill_bytes(key.as_mut_slice())?;

        Ok(key)
    }

    /// Seals `plaintext` under `key` into a `nonce || ciphertext || tag`
    /// envelope of exactly `28 + plaintext.len()` bytes.
    ///
    /// A fresh random nonce is generated per call and embedded in the
    /// envelope; it is never cached or reused.
    ///
    /// # Errors
    ///
    /// - [`AeadError::InvalidKeyLength`] if `key` is not 32 bytes.
    /// - [`AeadError::Entropy`] if nonce generation fails.
    /// - [`AeadError::PlaintextTooLarge`] beyond the GCM single-message limit.
    pub fn seal(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, AeadError> {
        let cipher = cipher_for(key)?;

        let mut nonce = [0u8; NONCE_SIZE];
        self.entropy.fill_bytes(&mut nonce)?;

        let mut ciphertext = plaintext.to_vec();
        let tag = cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce), AAD, &mut ciphertext)
            .map_err(|_| AeadError::PlaintextTooLarge)?;

        let mut tag_bytes = [0u8; TAG_SIZE];
        tag_bytes.copy_from_slice(tag.as_slice());

        Ok(codec::join(&nonce, &ciphertext, &tag_bytes))
    }

    /// Opens an envelope, verifying its tag before any plaintext escapes.
    ///
    /// Decryption happens in an engine-owned buffer; on tag mismatch that
    /// buffer is wiped and dropped, so not even a partial plaintext reaches
    /// the caller. Tag comparison is constant-time (delegated to `aes-gcm`).
    ///
    /// # Errors
    ///
    /// - [`AeadError::InvalidKeyLength`] if `key` is not 32 bytes.
    /// - [`AeadError::Envelope`] if the envelope is shorter than 28 bytes;
    ///   rejected before the GCM primitive is touched.
    /// - [`AeadError::AuthenticationFailed`] on tag mismatch.
    pub fn open(&self, key: &[u8], envelope: &[u8]) -> Result<Vec<u8>, AeadError> {
        check_key(key)?;
        let parts = codec::split(envelope)?;
        let cipher = cipher_for(key)?;

        let mut plaintext = parts.ciphertext.to_vec();
        let verified = cipher.decrypt_in_place_detached(
            Nonce::from_slice(parts.nonce),
            AAD,
            &mut plaintext,
            Tag::from_slice(parts.tag),
        );

        if verified.is_err() {
            // The buffer holds unverified keystream output; wipe it.
            plaintext.zeroize();
            return Err(AeadError::AuthenticationFailed);
        }

        Ok(plaintext)
    }
}

fn check_key(key: &[u8]) -> Result<(), AeadError> {
    if key.len() != KEY_SIZE {
        return Err(AeadError::InvalidKeyLength { actual: key.len() });
    }

    Ok(())
}

fn cipher_for(key: &[u8]) -> Result<Aes256Gcm, AeadError> {
    check_key(key)?;

    Aes256Gcm::new_from_slice(key).map_err(|_| AeadError::InvalidKeyLength { actual: key.len() })
}
