// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::EnvelopeError;
use crate::{ENVELOPE_OVERHEAD, NONCE_SIZE, TAG_SIZE, envelope_len};

/// Borrowed view of the three fixed-order envelope fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeRef<'a> {
    /// The 12-byte nonce the message was sealed under.
    pub nonce: &'a [u8; NONCE_SIZE],
    /// The ciphertext; same length as the original plaintext, possibly empty.
    pub ciphertext: &'a [u8],
    /// The 16-byte authentication tag.
    pub tag: &'a [u8; TAG_SIZE],
}

/// Splits an envelope into `(nonce, ciphertext, tag)` views.
///
/// # Errors
///
/// Returns [`EnvelopeError::TooShort`] if the envelope is shorter than
/// [`ENVELOPE_OVERHEAD`] bytes. The check happens before anything else; a
/// malformed envelope never reaches the AEAD engine.
pub fn split(envelope: &[u8]) -> Result<EnvelopeRef<'_>, EnvelopeError> {
    if envelope.len() < ENVELOPE_OVERHEAD {
        return Err(EnvelopeError::TooShort {
            actual: envelope.len(),
        });
    }

    let (nonce, rest) = envelope
        .split_first_chunk::<NONCE_SIZE>()
        .ok_or(EnvelopeError::TooShort {
            actual: envelope.len(),
        })?;
    let (ciphertext, tag) = rest
        .split_last_chunk::<TAG_SIZE>()
        .ok_or(EnvelopeError::TooShort {
            actual: envelope.len(),
        })?;

    Ok(EnvelopeRef {
        nonce,
        ciphertext,
        tag,
    })
}

/// Joins nonce, ciphertext, and tag into a fresh envelope.
///
/// Allocates exactly `28 + ciphertext.len()` bytes.
pub fn join(nonce: &[u8; NONCE_SIZE], ciphertext: &[u8], tag: &[u8; TAG_SIZE]) -> Vec<u8> {
    let mut envelope = Vec::with_capacity(envelope_len(ciphertext.len()));

    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(ciphertext);
    envelope.extend_from_slice(tag);

    envelope
}
