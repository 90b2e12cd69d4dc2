// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The four exported operations.
//!
//! Each entry point checks its pointer arguments, runs the engine, and
//! hands the result to the boundary allocator. All failures surface
//! synchronously: null return, `*out_len = 0`, and the error kind in
//! `*out_status` when that pointer is non-null.

use core::ptr;
use core::slice;

use palisade_aead::Aead;
use zeroize::Zeroize;

use crate::boundary;
use crate::status::Status;

fn report(out_status: *mut Status, status: Status) {
    if out_status.is_null() {
        return;
    }
    // SAFETY: a non-null `out_status` must point to writable Status
    // storage, per the call contract.
    unsafe { *out_status = status };
}

/// Copies `bytes` into a caller-owned buffer and writes the out-parameters.
/// Callers have already verified `out_len` is non-null.
fn emit(bytes: &[u8], out_len: *mut usize, out_status: *mut Status) -> *mut u8 {
    match boundary::alloc_result(bytes) {
        Some(buf) => {
            // SAFETY: `out_len` was checked non-null by the entry point.
            unsafe { *out_len = bytes.len() };
            report(out_status, Status::Ok);
            buf.as_ptr()
        }
        None => {
            report(out_status, Status::AllocationFailed);
            ptr::null_mut()
        }
    }
}

/// Generates a fresh 32-byte AES-256 key.
///
/// On success returns a caller-owned buffer (release with
/// [`palisade_free`]) and writes 32 to `*out_len`. On failure returns null
/// with `*out_len = 0`.
///
/// `out_status` may be null if the caller does not need the error kind.
#[unsafe(no_mangle)]
pub extern "C" fn palisade_generate_key(out_len: *mut usize, out_status: *mut Status) -> *mut u8 {
    if out_len.is_null() {
        report(out_status, Status::InvalidArgument);
        return ptr::null_mut();
    }
    // SAFETY: just checked non-null; the contract requires writable storage.
    unsafe { *out_len = 0 };

    match Aead::system().generate_key() {
        Ok(key) => emit(key.as_slice(), out_len, out_status),
        Err(err) => {
            report(out_status, Status::from(&err));
            ptr::null_mut()
        }
    }
}

/// Encrypts `plaintext` under `key` into a caller-owned
/// `nonce(12) || ciphertext || tag(16)` envelope of `28 + plaintext_len`
/// bytes.
///
/// `key` must point to `key_len` readable bytes and `plaintext` to
/// `plaintext_len` readable bytes; both remain owned by the caller and are
/// only read. Release the returned buffer with [`palisade_free`].
#[unsafe(no_mangle)]
pub extern "C" fn palisade_encrypt(
    key: *const u8,
    key_len: usize,
    plaintext: *const u8,
    plaintext_len: usize,
    out_len: *mut usize,
    out_status: *mut Status,
) -> *mut u8 {
    if key.is_null() || plaintext.is_null() || out_len.is_null() {
        report(out_status, Status::InvalidArgument);
        return ptr::null_mut();
    }
    // SAFETY: checked non-null; the contract requires writable storage.
    unsafe { *out_len = 0 };

    // SAFETY: the contract requires `key` and `plaintext` to be readable
    // for their stated lengths for the duration of the call.
    let (key, plaintext) = unsafe {
        (
            slice::from_raw_parts(key, key_len),
            slice::from_raw_parts(plaintext, plaintext_len),
        )
    };

    match Aead::system().seal(key, plaintext) {
        Ok(envelope) => emit(&envelope, out_len, out_status),
        Err(err) => {
            report(out_status, Status::from(&err));
            ptr::null_mut()
        }
    }
}

/// Decrypts a `nonce(12) || ciphertext || tag(16)` envelope under `key`.
///
/// The tag is verified before any plaintext is produced; on
/// [`Status::AuthenticationFailed`] or [`Status::InvalidEnvelope`] no
/// partial result is ever returned. A recovered empty plaintext still
/// yields a non-null (one-byte) buffer with `*out_len = 0`, so null always
/// means failure. Release the returned buffer with [`palisade_free`].
#[unsafe(no_mangle)]
pub extern "C" fn palisade_decrypt(
    key: *const u8,
    key_len: usize,
    envelope: *const u8,
    envelope_len: usize,
    out_len: *mut usize,
    out_status: *mut Status,
) -> *mut u8 {
    if key.is_null() || envelope.is_null() || out_len.is_null() {
        report(out_status, Status::InvalidArgument);
        return ptr::null_mut();
    }
    // SAFETY: checked non-null; the contract requires writable storage.
    unsafe { *out_len = 0 };

    // SAFETY: the contract requires `key` and `envelope` to be readable
    // for their stated lengths for the duration of the call.
    let (key, envelope) = unsafe {
        (
            slice::from_raw_parts(key, key_len),
            slice::from_raw_parts(envelope, envelope_len),
        )
    };

    match Aead::system().open(key, envelope) {
        Ok(mut plaintext) => {
            let result = emit(&plaintext, out_len, out_status);
            // The engine-side copy is no longer needed; wipe it.
            plaintext.zeroize();
            result
        }
        Err(err) => {
            report(out_status, Status::from(&err));
            ptr::null_mut()
        }
    }
}

/// Releases a buffer returned by `palisade_generate_key`,
/// `palisade_encrypt`, or `palisade_decrypt`.
///
/// No-op on null. Exactly one release is valid per returned buffer;
/// releasing twice, or releasing a pointer this library did not produce,
/// is undefined behavior.
#[unsafe(no_mangle)]
pub extern "C" fn palisade_free(ptr: *mut u8) {
    boundary::release(ptr);
}
