// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_aead
//!
//! AES-256-GCM authenticated encryption for flat byte buffers.
//!
//! The engine seals a plaintext into the envelope layout defined by
//! [`palisade_codec`] (`nonce || ciphertext || tag`) and opens envelopes back
//! into plaintext, verifying the authentication tag before releasing a single
//! byte. The GCM primitive itself comes from the vetted `aes-gcm` crate; this
//! crate owns key/length validation, nonce freshness, and the
//! no-partial-plaintext discipline around it.
//!
//! ## Security invariants
//!
//! - A fresh random 12-byte nonce is generated per seal; nonces are never
//!   cached or reused.
//! - Tag verification (constant-time, via `aes-gcm`) completes before any
//!   plaintext is exposed; on mismatch the decrypted buffer is wiped and
//!   dropped, never returned alongside an error.
//! - Keys are exactly 32 bytes and are never logged or echoed; generated
//!   keys are wrapped in [`zeroize::Zeroizing`] so they are wiped on drop.
//!
//! ## Example
//!
//! ```rust
//! use palisade_aead::Aead;
//!
//! fn example() -> Result<(), palisade_aead::AeadError> {
//!     let engine = Aead::system();
//!     let key = engine.generate_key()?;
//!
//!     let envelope = engine.seal(key.as_slice(), b"hello")?;
//!     assert_eq!(envelope.len(), 28 + 5);
//!
//!     let plaintext = engine.open(key.as_slice(), &envelope)?;
//!     assert_eq!(plaintext, b"hello");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Concurrency
//!
//! The engine is stateless between calls; seal/open/generate-key are
//! independently safe to invoke from multiple threads when the entropy
//! source is `Sync`. Nothing blocks except transiently on the OS entropy
//! source or the allocator.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod engine;
mod error;

pub use engine::Aead;
pub use error::AeadError;

/// AES-256 key size in bytes (256 bits).
pub const KEY_SIZE: usize = 32;
