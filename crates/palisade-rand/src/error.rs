// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from entropy sources.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The platform's secure random generator could not be read.
    ///
    /// Fatal to the current call; never retried internally. Callers may
    /// retry the whole operation.
    #[error("secure entropy source unavailable")]
    EntropyUnavailable,
}
