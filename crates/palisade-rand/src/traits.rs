// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for key and nonce
/// generation. Takes `&self` so a single source can be shared across
/// threads; thread safety of the underlying generator is delegated to the
/// platform.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyUnavailable`] if the system entropy
    /// source is unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
