// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffers whose ownership crosses the call boundary.
//!
//! Allocation uses `malloc` so callers on the C side can hold the buffers
//! with their usual tooling; release goes through [`release`] (exported as
//! `palisade_free`). Every buffer has exactly one owner at any time:
//! ownership transfers to the caller when an allocating call returns and
//! transfers back at the release call.

use core::ptr::NonNull;
use core::slice;

/// Allocates a caller-owned result buffer holding a copy of `bytes`.
///
/// Zero-length results still get a one-byte allocation so that a null
/// return always means failure, never an empty result. Returns `None`
/// under memory exhaustion; callers surface that as
/// [`Status::AllocationFailed`](crate::Status::AllocationFailed).
pub(crate) fn alloc_result(bytes: &[u8]) -> Option<NonNull<u8>> {
    let size = bytes.len().max(1);

    // SAFETY: `size` is nonzero; malloc has no other preconditions.
    let ptr = NonNull::new(unsafe { libc::malloc(size) }.cast::<u8>())?;

    // SAFETY: `ptr` points to at least `bytes.len()` writable bytes, and a
    // fresh allocation cannot overlap `bytes`.
    unsafe { core::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.as_ptr(), bytes.len()) };

    Some(ptr)
}

/// Releases a buffer previously produced by [`alloc_result`].
///
/// No-op on null. Releasing the same pointer twice, or a pointer this
/// module did not produce, is undefined behavior; the contract places that
/// on the caller.
pub(crate) fn release(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: per the contract above, `ptr` came from `alloc_result` and
    // has not been released yet.
    unsafe { libc::free(ptr.cast::<libc::c_void>()) };
}

/// RAII guard over a buffer returned across the boundary.
///
/// Gives Rust-side owners scope-bound release while the manual
/// [`palisade_free`](crate::palisade_free) entry point remains for callers
/// on the untyped side.
#[derive(Debug)]
pub struct OwnedBuf {
    ptr: NonNull<u8>,
    len: usize,
}

impl OwnedBuf {
    /// Takes ownership of a pointer returned by one of the `palisade_*`
    /// calls. Returns `None` on null.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this library together with length
    /// `len`, and its ownership must not already have been taken or
    /// released.
    pub unsafe fn from_raw(ptr: *mut u8, len: usize) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, len })
    }

    /// Borrows the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` bytes for as long as `self`
        // owns the allocation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for OwnedBuf {
    fn drop(&mut self) {
        release(self.ptr.as_ptr());
    }
}
