// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr;

use palisade_codec::{ENVELOPE_OVERHEAD, envelope_len};

use crate::api::{palisade_decrypt, palisade_encrypt, palisade_free, palisade_generate_key};
use crate::boundary::OwnedBuf;
use crate::status::Status;

fn generate_key() -> OwnedBuf {
    let mut len = 0usize;
    let mut status = Status::InvalidArgument;

    let ptr = palisade_generate_key(&mut len, &mut status);

    assert_eq!(status, Status::Ok);
    unsafe { OwnedBuf::from_raw(ptr, len) }.expect("Failed to generate key")
}

fn encrypt(key: &[u8], plaintext: &[u8], expected: Status) -> Option<OwnedBuf> {
    let mut len = 0usize;
    let mut status = Status::InvalidArgument;

    let ptr = palisade_encrypt(
        key.as_ptr(),
        key.len(),
        plaintext.as_ptr(),
        plaintext.len(),
        &mut len,
        &mut status,
    );

    assert_eq!(status, expected);
    unsafe { OwnedBuf::from_raw(ptr, len) }
}

fn decrypt(key: &[u8], envelope: &[u8], expected: Status) -> Option<OwnedBuf> {
    let mut len = 0usize;
    let mut status = Status::InvalidArgument;

    let ptr = palisade_decrypt(
        key.as_ptr(),
        key.len(),
        envelope.as_ptr(),
        envelope.len(),
        &mut len,
        &mut status,
    );

    assert_eq!(status, expected);
    unsafe { OwnedBuf::from_raw(ptr, len) }
}

#[test]
fn test_generate_key_returns_32_bytes() {
    let key = generate_key();

    assert_eq!(key.len(), 32);
}

#[test]
fn test_generate_key_produces_distinct_keys() {
    let first = generate_key();
    let second = generate_key();

    assert_ne!(first.as_slice(), second.as_slice());
}

#[test]
fn test_generate_key_null_out_len_is_invalid_argument() {
    let mut status = Status::Ok;

    let ptr = palisade_generate_key(ptr::null_mut(), &mut status);

    assert!(ptr.is_null());
    assert_eq!(status, Status::InvalidArgument);
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let key = generate_key();

    let envelope =
        encrypt(key.as_slice(), b"hello", Status::Ok).expect("Failed to encrypt");
    assert_eq!(envelope.len(), envelope_len(5));

    let plaintext =
        decrypt(key.as_slice(), envelope.as_slice(), Status::Ok).expect("Failed to decrypt");
    assert_eq!(plaintext.as_slice(), b"hello");
}

#[test]
fn test_encrypt_empty_plaintext_yields_28_byte_envelope() {
    let key = [0u8; 32];

    let envelope = encrypt(&key, b"", Status::Ok).expect("Failed to encrypt");
    assert_eq!(envelope.len(), ENVELOPE_OVERHEAD);

    let plaintext =
        decrypt(&key, envelope.as_slice(), Status::Ok).expect("Failed to decrypt");

    // Empty result is still a valid, owned, non-null buffer.
    assert!(plaintext.is_empty());
}

#[test]
fn test_encrypt_rejects_bad_key_length() {
    let key = [0u8; 16];

    let result = encrypt(&key, b"payload", Status::InvalidKeyLength);

    assert!(result.is_none());
}

#[test]
fn test_decrypt_rejects_short_envelope() {
    let key = [0u8; 32];
    let envelope = [0u8; ENVELOPE_OVERHEAD - 1];

    let result = decrypt(&key, &envelope, Status::InvalidEnvelope);

    assert!(result.is_none());
}

#[test]
fn test_decrypt_rejects_tampered_tag() {
    let key = [0u8; 32];

    let envelope = encrypt(&key, b"hello", Status::Ok).expect("Failed to encrypt");
    let mut tampered = envelope.as_slice().to_vec();
    let last = tampered.len() - 1;
    tampered[last] = tampered[last].wrapping_add(1);

    let result = decrypt(&key, &tampered, Status::AuthenticationFailed);

    assert!(result.is_none());
}

#[test]
fn test_encrypt_null_key_is_invalid_argument() {
    let mut len = 0usize;
    let mut status = Status::Ok;

    let ptr = palisade_encrypt(
        ptr::null(),
        32,
        b"payload".as_ptr(),
        7,
        &mut len,
        &mut status,
    );

    assert!(ptr.is_null());
    assert_eq!(len, 0);
    assert_eq!(status, Status::InvalidArgument);
}

#[test]
fn test_decrypt_null_envelope_is_invalid_argument() {
    let key = [0u8; 32];
    let mut len = 0usize;
    let mut status = Status::Ok;

    let ptr = palisade_decrypt(key.as_ptr(), 32, ptr::null(), 33, &mut len, &mut status);

    assert!(ptr.is_null());
    assert_eq!(len, 0);
    assert_eq!(status, Status::InvalidArgument);
}

#[test]
fn test_null_out_status_is_tolerated() {
    let key = [0u8; 32];
    let mut len = 0usize;

    let ptr = palisade_encrypt(
        key.as_ptr(),
        32,
        b"hello".as_ptr(),
        5,
        &mut len,
        ptr::null_mut(),
    );

    assert!(!ptr.is_null());
    assert_eq!(len, envelope_len(5));
    palisade_free(ptr);
}

#[test]
fn test_free_null_is_noop() {
    palisade_free(ptr::null_mut());
}

#[test]
fn test_failure_writes_zero_out_len() {
    let key = [0u8; 31];
    let mut len = 0xdead_beefusize;
    let mut status = Status::Ok;

    let ptr = palisade_encrypt(
        key.as_ptr(),
        31,
        b"payload".as_ptr(),
        7,
        &mut len,
        &mut status,
    );

    assert!(ptr.is_null());
    assert_eq!(len, 0);
    assert_eq!(status, Status::InvalidKeyLength);
}
