// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! LSB embed and extract against a [`PixelBuffer`].
//!
//! Embedding overwrites the least-significant bit of consecutive samples
//! with the payload bits followed by the end marker, in the buffer's
//! flattening order. The capacity check runs before the first write, so a
//! rejected payload never produces a half-written buffer.
//!
//! Extraction scans every sample's LSB, locates the first end marker, and
//! regroups the preceding bits into bytes. What happens to those bytes is
//! governed by [`BytePolicy`].

use crate::carrier::PixelBuffer;
use crate::stego::bits::{self, MARKER_BITS, MARKER_LEN};
use crate::stego::error::StegoError;

/// How extracted bytes are validated before being returned.
///
/// A carrier that never held data still yields pseudo-random bytes when its
/// LSB noise happens to contain the marker pattern, and a stale or foreign
/// payload may contain bytes the caller cannot use. The policy decides how
/// suspicious bytes are handled:
///
/// - [`StrictAscii`](Self::StrictAscii) truncates the payload at the first
///   byte above 0x7F and fails with
///   [`StegoError::InvalidByteValue`] when the very first byte is already
///   out of range. The encrypted envelope is base64 and therefore always
///   passes this policy unharmed.
/// - [`RawBytes`](Self::RawBytes) returns every byte unchanged. Required
///   for binary payloads or non-ASCII plaintext embedded without a
///   password; offers no protection against garbage reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytePolicy {
    /// Truncate at the first non-ASCII byte; error if that byte is first.
    StrictAscii,
    /// Return all bytes verbatim.
    RawBytes,
}

impl Default for BytePolicy {
    fn default() -> Self {
        Self::StrictAscii
    }
}

/// Embed a payload into the buffer's sample LSBs.
///
/// Consumes the buffer and returns it with `payload_len * 8 + 16` leading
/// samples rewritten: each carries one bit of the payload (MSB first per
/// byte) followed by the end marker. Samples past the marker keep their
/// original values, and no sample changes by more than its LSB.
///
/// # Errors
/// [`StegoError::CapacityExceeded`] if the bit sequence does not fit. The
/// check happens before any write.
pub fn embed(mut buffer: PixelBuffer, payload: &[u8]) -> Result<PixelBuffer, StegoError> {
    let needed_bits = payload.len() * 8 + MARKER_LEN;
    let available_bits = buffer.sample_count();
    if needed_bits > available_bits {
        return Err(StegoError::CapacityExceeded {
            needed_bits,
            available_bits,
        });
    }

    let mut stream = bits::bytes_to_bits(payload);
    stream.extend_from_slice(&MARKER_BITS);

    for (sample, &bit) in buffer.samples_mut().iter_mut().zip(stream.iter()) {
        *sample = (*sample & 0xFE) | bit;
    }

    Ok(buffer)
}

/// Extract the payload hidden in the buffer's sample LSBs.
///
/// Scans all samples, finds the first occurrence of the end marker at any
/// bit offset, and regroups the bits before it into bytes.
///
/// # Errors
/// - [`StegoError::NoHiddenData`] if no marker occurs anywhere.
/// - [`StegoError::InvalidLength`] if the bits before the marker do not
///   form whole bytes.
/// - [`StegoError::InvalidByteValue`] under [`BytePolicy::StrictAscii`]
///   when the first byte is outside the ASCII range.
pub fn extract(buffer: &PixelBuffer, policy: BytePolicy) -> Result<Vec<u8>, StegoError> {
    let lsbs: Vec<u8> = buffer.samples().iter().map(|&s| s & 1).collect();

    let marker_at = bits::find_marker(&lsbs).ok_or(StegoError::NoHiddenData)?;
    if marker_at % 8 != 0 {
        return Err(StegoError::InvalidLength(marker_at));
    }

    let payload = bits::bits_to_bytes(&lsbs[..marker_at]);
    apply_policy(payload, policy)
}

/// Validate regrouped bytes according to the extraction policy.
fn apply_policy(mut bytes: Vec<u8>, policy: BytePolicy) -> Result<Vec<u8>, StegoError> {
    match policy {
        BytePolicy::RawBytes => Ok(bytes),
        BytePolicy::StrictAscii => match bytes.iter().position(|b| !b.is_ascii()) {
            None => Ok(bytes),
            Some(0) => Err(StegoError::InvalidByteValue(bytes[0])),
            Some(idx) => {
                bytes.truncate(idx);
                Ok(bytes)
            }
        },
    }
}
