// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_codec
//!
//! The flat wire layout for sealed messages:
//!
//! ```text
//! [nonce:12][ciphertext:N][tag:16]
//! ```
//!
//! Fixed field order, no padding, no length prefixes; total length is
//! `28 + N`. This layout is the only persisted or exchanged artifact and must
//! stay byte-exact for interoperability with other implementations of the
//! same contract.
//!
//! Pure data shaping. The codec enforces field widths and rejects malformed
//! lengths before the AEAD engine ever sees a byte; it performs no
//! cryptography itself.
//!
//! ## Example
//!
//! ```rust
//! use palisade_codec::{ENVELOPE_OVERHEAD, join, split};
//!
//! let nonce = [1u8; 12];
//! let tag = [2u8; 16];
//! let envelope = join(&nonce, b"ciphertext", &tag);
//! assert_eq!(envelope.len(), ENVELOPE_OVERHEAD + 10);
//!
//! let parts = split(&envelope).expect("Failed to split(..)");
//! assert_eq!(parts.nonce, &nonce);
//! assert_eq!(parts.ciphertext, b"ciphertext");
//! assert_eq!(parts.tag, &tag);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod envelope;
mod error;

pub use envelope::{EnvelopeRef, join, split};
pub use error::EnvelopeError;

/// GCM nonce size in bytes (96 bits, NIST recommended).
pub const NONCE_SIZE: usize = 12;
/// GCM authentication tag size in bytes (128 bits).
pub const TAG_SIZE: usize = 16;
/// Fixed envelope overhead: nonce plus tag. Also the minimum valid
/// envelope length, reached by sealing an empty plaintext.
pub const ENVELOPE_OVERHEAD: usize = NONCE_SIZE + TAG_SIZE;

/// Returns the envelope length for a plaintext of `plaintext_len` bytes.
///
/// GCM ciphertext has the same length as its plaintext, so this is always
/// `28 + plaintext_len`.
pub const fn envelope_len(plaintext_len: usize) -> usize {
    ENVELOPE_OVERHEAD + plaintext_len
}
