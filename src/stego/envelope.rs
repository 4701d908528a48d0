// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Encrypted envelope construction and parsing.
//!
//! The envelope is the self-contained container that carries an encrypted
//! message through the LSB codec:
//!
//! ```text
//! [16 bytes] PBKDF2 salt
//! [16 bytes] AES-GCM nonce
//! [16 bytes] AES-GCM authentication tag
//! [N bytes ] ciphertext (same length as the plaintext)
//! ```
//!
//! The binary layout is base64-encoded (standard alphabet, padded) before
//! embedding. That keeps the embedded payload pure ASCII, which matters for
//! two reasons: the default extraction policy accepts ASCII unmodified, and
//! ASCII bytes can never contain the 15-one run of the end marker (see
//! [`bits`](crate::stego::bits)). Only the password is external; salt and
//! nonce travel with the ciphertext.
//!
//! Total decoded size = 48 + plaintext_len bytes. An empty plaintext
//! produces exactly the 48-byte header.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::stego::crypto::{self, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::stego::error::StegoError;

/// Fixed header size: salt(16) + nonce(16) + tag(16) = 48 bytes.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// Encrypt a message and pack it into a base64 envelope.
///
/// A fresh random salt and nonce are drawn for every call, so sealing the
/// same message twice produces different envelopes.
pub fn seal(plaintext: &str, password: &str) -> String {
    let (mut ciphertext, nonce, salt) = crypto::encrypt(plaintext.as_bytes(), password);

    // The cipher appends the tag to the ciphertext; the envelope layout
    // wants it between the nonce and the ciphertext body.
    let tag = ciphertext.split_off(ciphertext.len() - TAG_LEN);

    let mut envelope = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    envelope.extend_from_slice(&salt);
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&tag);
    envelope.extend_from_slice(&ciphertext);

    STANDARD.encode(envelope)
}

/// Unpack a base64 envelope and decrypt the message.
///
/// # Errors
/// - [`StegoError::MalformedEnvelope`] if `encoded` is not valid base64 or
///   the decoded bytes are shorter than the 48-byte header.
/// - [`StegoError::AuthenticationFailure`] if tag verification fails (wrong
///   password or corrupted data; the two are not distinguished).
/// - [`StegoError::EncodingError`] if the decrypted bytes are not UTF-8.
pub fn open(encoded: &str, password: &str) -> Result<String, StegoError> {
    let envelope = STANDARD
        .decode(encoded)
        .map_err(|_| StegoError::MalformedEnvelope)?;

    if envelope.len() < HEADER_LEN {
        return Err(StegoError::MalformedEnvelope);
    }

    let salt = &envelope[..SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&envelope[SALT_LEN..SALT_LEN + NONCE_LEN]);
    let tag = &envelope[SALT_LEN + NONCE_LEN..HEADER_LEN];
    let body = &envelope[HEADER_LEN..];

    // Reassemble ciphertext || tag for the postfix-tag cipher API.
    let mut ciphertext = Vec::with_capacity(body.len() + TAG_LEN);
    ciphertext.extend_from_slice(body);
    ciphertext.extend_from_slice(tag);

    let plaintext = crypto::decrypt(&ciphertext, password, salt, &nonce)?;
    String::from_utf8(plaintext).map_err(|_| StegoError::EncodingError)
}
