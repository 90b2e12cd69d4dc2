// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use palisade_codec::EnvelopeError;
use palisade_rand::EntropyError;
use thiserror::Error;

/// Errors from seal, open, and key generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// The key is not exactly [`KEY_SIZE`](crate::KEY_SIZE) bytes.
    ///
    /// Caller programming error; never retried.
    #[error("invalid key length: expected 32 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        actual: usize,
    },

    /// The envelope is structurally malformed; rejected before any
    /// cryptographic work began.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    /// Tag verification failed. No plaintext was released, not even
    /// partially.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Secure randomness could not be obtained.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// The plaintext exceeds the AES-GCM single-message limit (about
    /// 64 GiB). Streaming is out of scope; sealing is single-shot.
    #[error("plaintext too large for a single GCM message")]
    PlaintextTooLarge,
}
