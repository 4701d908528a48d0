// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Cryptographic primitives for payload encryption.
//!
//! Key derivation is PBKDF2-HMAC-SHA256 with a fixed iteration count; the
//! cipher is AES-256-GCM with a 16-byte nonce. Both parameters are part of
//! the wire format: the decoder re-derives the key from the password plus
//! the salt recovered from the envelope, so any change here breaks every
//! previously produced image.
//!
//! The nonce is 16 bytes rather than GCM's usual 12 so it fills the fixed
//! 16-byte nonce field of the envelope layout (see
//! [`envelope`](crate::stego::envelope)).

use aes_gcm::{AesGcm, KeyInit, Nonce};
use aes_gcm::aead::Aead;
use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aes::Aes256;
use sha2::Sha256;
use zeroize::Zeroizing;
use crate::stego::error::StegoError;

/// AES-GCM nonce length in bytes. Matches the envelope's nonce field.
pub const NONCE_LEN: usize = 16;
/// PBKDF2 salt length in bytes.
pub const SALT_LEN: usize = 16;
/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Derived AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;
/// PBKDF2 iteration count. Fixed by the wire format.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// AES-256-GCM instantiated with the 16-byte nonce the envelope carries.
type EnvelopeCipher = AesGcm<Aes256, U16>;

/// Derive the AES-256 encryption key from password + salt.
///
/// Deterministic for a given (password, salt) pair so the decoder can
/// re-derive the same key from the salt embedded in the envelope.
pub fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut *key);
    key
}

/// Encrypt plaintext with AES-256-GCM under a freshly derived key.
///
/// Returns (ciphertext_with_tag, nonce, salt). The ciphertext includes the
/// 16-byte authentication tag appended by AES-GCM.
pub fn encrypt(plaintext: &[u8], password: &str) -> (Vec<u8>, [u8; NONCE_LEN], [u8; SALT_LEN]) {
    use rand::RngCore;
    let mut rng = rand::thread_rng();

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt);
    let cipher = EnvelopeCipher::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::<U16>::from_slice(&nonce_bytes);

    let ciphertext = cipher.encrypt(nonce, plaintext).expect("AES-GCM encrypt should not fail");

    (ciphertext, nonce_bytes, salt)
}

/// Decrypt ciphertext with AES-256-GCM.
///
/// Returns the plaintext or [`StegoError::AuthenticationFailure`] if the
/// password is wrong or the data is corrupted. The two cases are not
/// distinguishable from the tag check and are deliberately reported as one.
pub fn decrypt(
    ciphertext: &[u8],
    password: &str,
    salt: &[u8],
    nonce_bytes: &[u8; NONCE_LEN],
) -> Result<Vec<u8>, StegoError> {
    let key = derive_key(password, salt);
    let cipher = EnvelopeCipher::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::<U16>::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| StegoError::AuthenticationFailure)
}
