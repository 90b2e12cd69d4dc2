// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use palisade_aead::AeadError;

/// Result discriminant written to the `out_status` out-parameter.
///
/// The boundary is typeless, so the error kind travels out-of-band as this
/// code while the data return carries the null-pointer sentinel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The call succeeded; the returned pointer is non-null.
    Ok = 0,
    /// Secure randomness could not be obtained. The caller may retry.
    EntropyUnavailable = 1,
    /// The key was not exactly 32 bytes.
    InvalidKeyLength = 2,
    /// The envelope was shorter than 28 bytes or otherwise malformed.
    InvalidEnvelope = 3,
    /// Tag verification failed; no plaintext was produced.
    AuthenticationFailed = 4,
    /// The result buffer could not be allocated.
    AllocationFailed = 5,
    /// A required pointer argument was null, or the input was otherwise
    /// unusable.
    InvalidArgument = 6,
}

impl From<&AeadError> for Status {
    fn from(err: &AeadError) -> Self {
        match err {
            AeadError::InvalidKeyLength { .. } => Self::InvalidKeyLength,
            AeadError::Envelope(_) => Self::InvalidEnvelope,
            AeadError::AuthenticationFailed => Self::AuthenticationFailed,
            AeadError::Entropy(_) => Self::EntropyUnavailable,
            AeadError::PlaintextTooLarge => Self::InvalidArgument,
        }
    }
}
