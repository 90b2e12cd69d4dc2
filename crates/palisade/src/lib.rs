// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>AES-256-GCM authenticated encryption behind a stable C call boundary.</em></p>
//!
//! ---
//!
//! Palisade seals and opens flat byte buffers using the wire layout
//! `nonce(12) || ciphertext || tag(16)`, and exposes exactly four operations
//! over the boundary: generate key, encrypt, decrypt, free. The cryptographic
//! core lives in [`aead`], the wire layout in [`codec`], and the entropy
//! capability in [`rand`]; the C export surface is the separate
//! `palisade-ffi` crate.
//!
//! # Guarantees
//!
//! - 🔑 **Fresh nonces** — a new random 96-bit nonce per seal, never reused or cached
//! - 🛡️ **Verify before release** — tag verification completes before any plaintext byte escapes
//! - 🧹 **No partial failures** — a failed open wipes its scratch buffer and returns nothing
//! - 📦 **`no_std` compatible** — the Rust-level stack needs only `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use palisade::aead::Aead;
//!
//! fn main() -> Result<(), palisade::aead::AeadError> {
//!     let engine = Aead::system();
//!     let key = engine.generate_key()?;
//!
//!     let envelope = engine.seal(key.as_slice(), b"attack at dawn")?;
//!     let plaintext = engine.open(key.as_slice(), &envelope)?;
//!
//!     assert_eq!(plaintext, b"attack at dawn");
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Enable the `test-utils` feature to inject entropy failures or
//! deterministic (never production) randomness:
//!
//! ```rust,ignore
//! use palisade::aead::Aead;
//! use palisade::rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
//!
//! let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
//! assert!(Aead::new(entropy).generate_key().is_err());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use palisade_aead as aead;
pub use palisade_codec as codec;
pub use palisade_rand as rand;
