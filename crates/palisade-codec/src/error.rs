// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from envelope splitting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The envelope cannot hold a 12-byte nonce and a 16-byte tag.
    ///
    /// Rejected before any cryptographic work begins.
    #[error("envelope too short: {actual} bytes, need at least 28")]
    TooShort {
        /// Length of the rejected envelope.
        actual: usize,
    },
}
