// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # palisade_ffi
//!
//! The C call boundary for the Palisade AES-256-GCM engine.
//!
//! Four operations cross the boundary, each taking and returning flat
//! buffers with explicit lengths:
//!
//! | Operation               | Output                          |
//! |-------------------------|---------------------------------|
//! | [`palisade_generate_key`] | 32-byte key buffer              |
//! | [`palisade_encrypt`]      | `nonce(12) ‖ ciphertext ‖ tag(16)` envelope |
//! | [`palisade_decrypt`]      | recovered plaintext             |
//! | [`palisade_free`]         | —                               |
//!
//! ## Ownership
//!
//! Every buffer returned by `palisade_generate_key`, `palisade_encrypt`, or
//! `palisade_decrypt` is owned by the caller from the moment the call
//! returns, and must be released exactly once with [`palisade_free`].
//! Releasing a pointer this library did not produce, or releasing the same
//! pointer twice, is undefined behavior the contract cannot prevent;
//! releasing null is a no-op.
//!
//! Rust-side callers can wrap returned pointers in [`OwnedBuf`] to get
//! scope-bound release instead of calling `palisade_free` by hand.
//!
//! ## Error signaling
//!
//! Nothing is ever thrown across the boundary. Failures return a null
//! pointer with `*out_len = 0`, and the specific error kind is written to
//! the optional `out_status` out-parameter as a [`Status`] code. A non-null
//! return always means [`Status::Ok`].
//!
//! The matching C declarations live in `include/palisade.h`.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod api;
mod boundary;
mod status;

pub use api::{palisade_decrypt, palisade_encrypt, palisade_free, palisade_generate_key};
pub use boundary::OwnedBuf;
pub use status::Status;
