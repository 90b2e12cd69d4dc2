// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_rand
//!
//! Cryptographically secure randomness for the Palisade stack.
//!
//! Randomness is modeled as an injectable capability: the AEAD engine takes
//! any [`EntropySource`] rather than reaching for a hidden global, so tests
//! can substitute a deterministic or failing source while production code
//! uses the OS CSPRNG.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Failure transparency
//!
//! There is no fallback path. If the platform's secure generator cannot be
//! read, every call fails with [`EntropyError::EntropyUnavailable`]; a weak
//! generator is never substituted silently.
//!
//! ## Example
//!
//! ```rust
//! use palisade_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut key = [0u8; 32];
//! entropy.fill_bytes(&mut key).expect("Failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
