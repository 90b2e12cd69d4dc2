// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-level CSPRNG backed by `getrandom`.
///
/// Stateless; every call goes straight to the platform source. Blocking is
/// transient (only while the OS gathers entropy) and there is no internal
/// timeout or fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyUnavailable)
    }
}
