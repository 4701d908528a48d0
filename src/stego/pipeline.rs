// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Encode/decode pipeline: encoded image bytes in, encoded image bytes out.
//!
//! Ties the layers together in a fixed order:
//!
//! 1. Decode the carrier into an RGB [`PixelBuffer`]
//! 2. Prepare the payload: raw UTF-8 bytes, or a sealed envelope when a
//!    password is given
//! 3. Embed the payload bits plus end marker into the sample LSBs
//! 4. Re-encode as PNG (always PNG; a lossy format would shred the LSBs)
//!
//! Decoding runs the same stages in reverse. An empty password selects the
//! unencrypted mode on both sides: the message bytes enter the codec as-is,
//! with no key derivation, no envelope, and no authentication. That mode
//! offers no secrecy beyond obscurity and exists for interoperability and
//! quick experiments.

use crate::carrier::PixelBuffer;
use crate::stego::capacity::{self, CapacityInfo};
use crate::stego::codec::{self, BytePolicy};
use crate::stego::envelope;
use crate::stego::error::StegoError;

/// Hide a message in a carrier image.
///
/// With a non-empty `password`, the message is sealed into an encrypted
/// envelope (PBKDF2 + AES-256-GCM, base64 text) before embedding; the
/// envelope adds 48 bytes plus base64 expansion to the capacity cost. With
/// an empty password the raw UTF-8 bytes of the message are embedded
/// directly.
///
/// # Arguments
/// - `image_bytes`: Encoded carrier image (any supported raster format).
/// - `message`: Plaintext to hide.
/// - `password`: Encryption password; empty string disables encryption.
///
/// # Returns
/// The stego image as PNG bytes.
///
/// # Errors
/// - [`StegoError::InvalidCarrier`] if the carrier cannot be decoded.
/// - [`StegoError::CapacityExceeded`] if the payload does not fit.
pub fn lsb_encode(
    image_bytes: &[u8],
    message: &str,
    password: &str,
) -> Result<Vec<u8>, StegoError> {
    let buffer = PixelBuffer::from_bytes(image_bytes)?;

    let payload = if password.is_empty() {
        message.as_bytes().to_vec()
    } else {
        envelope::seal(message, password).into_bytes()
    };

    let stego = codec::embed(buffer, &payload)?;
    Ok(stego.to_png_bytes()?)
}

/// Recover a message hidden by [`lsb_encode`], using the default
/// [`BytePolicy::StrictAscii`] extraction policy.
///
/// The password must match the one used at encode time: non-empty for an
/// encrypted payload, empty for a raw one. A wrong non-empty password
/// surfaces as [`StegoError::AuthenticationFailure`] with no further
/// detail.
///
/// Raw (passwordless) payloads that contain non-ASCII UTF-8 are truncated
/// by the default policy; use [`lsb_decode_with_policy`] with
/// [`BytePolicy::RawBytes`] to recover them intact.
///
/// # Errors
/// - [`StegoError::InvalidCarrier`] if the stego image cannot be decoded.
/// - [`StegoError::NoHiddenData`] if no end marker is present.
/// - [`StegoError::InvalidLength`] / [`StegoError::InvalidByteValue`] if
///   the recovered bit stream is damaged.
/// - [`StegoError::MalformedEnvelope`] / [`StegoError::AuthenticationFailure`]
///   for encrypted payloads that fail envelope parsing or decryption.
/// - [`StegoError::EncodingError`] if the recovered text is not UTF-8.
pub fn lsb_decode(stego_bytes: &[u8], password: &str) -> Result<String, StegoError> {
    lsb_decode_with_policy(stego_bytes, password, BytePolicy::default())
}

/// Recover a message with an explicit extraction policy.
///
/// Same behavior as [`lsb_decode`] except that extracted bytes are
/// validated under `policy`. The policy applies to the extracted payload
/// before any envelope handling; an encrypted envelope is ASCII and passes
/// either policy unchanged.
pub fn lsb_decode_with_policy(
    stego_bytes: &[u8],
    password: &str,
    policy: BytePolicy,
) -> Result<String, StegoError> {
    let buffer = PixelBuffer::from_bytes(stego_bytes)?;
    let payload = codec::extract(&buffer, policy)?;

    if password.is_empty() {
        String::from_utf8(payload).map_err(|_| StegoError::EncodingError)
    } else {
        let encoded = String::from_utf8(payload).map_err(|_| StegoError::MalformedEnvelope)?;
        envelope::open(&encoded, password)
    }
}

/// Maximum payload size in bytes for a decoded carrier.
///
/// Counts envelope overhead as payload: with a password, the hideable
/// message is shorter than this figure by the 48-byte header plus base64
/// expansion.
pub fn lsb_capacity(buffer: &PixelBuffer) -> usize {
    capacity::payload_capacity(buffer)
}

/// Capacity report for a carrier image, without modifying it.
///
/// # Errors
/// [`StegoError::InvalidCarrier`] if the bytes cannot be decoded.
pub fn lsb_capacity_info(image_bytes: &[u8]) -> Result<CapacityInfo, StegoError> {
    let buffer = PixelBuffer::from_bytes(image_bytes)?;
    Ok(capacity::capacity_info(&buffer))
}
