// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::envelope::{join, split};
use crate::error::EnvelopeError;
use crate::{ENVELOPE_OVERHEAD, NONCE_SIZE, TAG_SIZE, envelope_len};

#[test]
fn test_split_rejects_empty_envelope() {
    assert_eq!(split(&[]), Err(EnvelopeError::TooShort { actual: 0 }));
}

#[test]
fn test_split_rejects_one_byte_below_minimum() {
    let envelope = [0u8; ENVELOPE_OVERHEAD - 1];

    assert_eq!(
        split(&envelope),
        Err(EnvelopeError::TooShort {
            actual: ENVELOPE_OVERHEAD - 1
        })
    );
}

#[test]
fn test_split_accepts_minimum_length_envelope() {
    // 28 bytes: a sealed empty plaintext.
    let envelope = [0u8; ENVELOPE_OVERHEAD];

    let parts = split(&envelope).expect("Failed to split(..)");

    assert_eq!(parts.nonce, &[0u8; NONCE_SIZE]);
    assert!(parts.ciphertext.is_empty());
    assert_eq!(parts.tag, &[0u8; TAG_SIZE]);
}

#[test]
fn test_split_preserves_field_order_and_widths() {
    let mut envelope = Vec::new();
    envelope.extend_from_slice(&[0x11; NONCE_SIZE]);
    envelope.extend_from_slice(&[0x22; 5]);
    envelope.extend_from_slice(&[0x33; TAG_SIZE]);

    let parts = split(&envelope).expect("Failed to split(..)");

    assert_eq!(parts.nonce, &[0x11; NONCE_SIZE]);
    assert_eq!(parts.ciphertext, &[0x22; 5]);
    assert_eq!(parts.tag, &[0x33; TAG_SIZE]);
}

#[test]
fn test_join_split_roundtrip() {
    let nonce = [0xa5; NONCE_SIZE];
    let ciphertext = b"not actually encrypted";
    let tag = [0x5a; TAG_SIZE];

    let envelope = join(&nonce, ciphertext, &tag);
    let parts = split(&envelope).expect("Failed to split(..)");

    assert_eq!(parts.nonce, &nonce);
    assert_eq!(parts.ciphertext, ciphertext.as_slice());
    assert_eq!(parts.tag, &tag);
}

#[test]
fn test_join_length_is_overhead_plus_ciphertext() {
    let nonce = [0u8; NONCE_SIZE];
    let tag = [0u8; TAG_SIZE];

    for len in [0usize, 1, 5, 255, 4096] {
        let ciphertext = vec![0u8; len];
        let envelope = join(&nonce, &ciphertext, &tag);

        assert_eq!(envelope.len(), envelope_len(len));
        assert_eq!(envelope.len(), ENVELOPE_OVERHEAD + len);
    }
}

#[test]
fn test_join_empty_ciphertext_is_minimum_length() {
    let envelope = join(&[0u8; NONCE_SIZE], b"", &[0u8; TAG_SIZE]);

    assert_eq!(envelope.len(), ENVELOPE_OVERHEAD);
}
