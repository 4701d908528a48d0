// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Bit sequence helpers and the end-of-data marker.
//!
//! Payloads travel through the codec as flat vectors of 0/1 bytes, MSB first
//! within each source byte. The embedded stream is payload bits followed by
//! [`MARKER_BITS`], a fixed 16-bit terminator. Embed and extract must agree
//! on this constant exactly; it is defined once here and never spelled out
//! as a literal anywhere else.
//!
//! The marker contains a run of fifteen 1-bits. Any ASCII payload has a
//! 0-bit at least every eighth position (the high bit of each byte), so the
//! marker cannot occur inside an ASCII payload at any alignment. Payloads
//! with high bytes do not carry that guarantee; see
//! [`BytePolicy`](crate::stego::codec::BytePolicy).

/// End-of-data marker: fifteen 1-bits followed by a 0-bit.
pub const MARKER_BITS: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// Marker length in bits.
pub const MARKER_LEN: usize = MARKER_BITS.len();

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
///
/// The caller is responsible for `bits.len()` being a multiple of 8; a
/// partial trailing chunk is zero-padded.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Find the first occurrence of [`MARKER_BITS`] in a bit stream, at any bit
/// offset. Returns the offset of the marker's first bit.
pub fn find_marker(bits: &[u8]) -> Option<usize> {
    if bits.len() < MARKER_LEN {
        return None;
    }
    bits.windows(MARKER_LEN).position(|w| w == MARKER_BITS)
}
