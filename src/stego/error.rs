// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier decoding through
//! embedding, extraction, and envelope decryption. Every failure is terminal
//! for the call that produced it: no partial output is ever returned, and
//! embedding never mutates a buffer before its capacity check has passed.

use core::fmt;

use crate::carrier::error::CarrierError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier image could not be decoded or the output PNG written.
    InvalidCarrier(CarrierError),
    /// The payload plus end marker needs more bits than the carrier has
    /// samples. Reported before any sample is modified.
    CapacityExceeded {
        /// Bits required: `payload_len * 8 + 16`.
        needed_bits: usize,
        /// Bits available: one per sample.
        available_bits: usize,
    },
    /// No end marker found in the carrier's LSB stream.
    NoHiddenData,
    /// Bits recovered before the end marker do not form whole bytes.
    /// Carries the recovered bit count.
    InvalidLength(usize),
    /// The first recovered byte is outside the accepted plaintext range
    /// under [`BytePolicy::StrictAscii`](crate::stego::codec::BytePolicy).
    InvalidByteValue(u8),
    /// The extracted envelope is not valid base64 or is shorter than the
    /// salt + nonce + tag header.
    MalformedEnvelope,
    /// AES-GCM tag verification failed (wrong password or corrupted data).
    AuthenticationFailure,
    /// Recovered plaintext is not valid UTF-8.
    EncodingError,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCarrier(e) => write!(f, "invalid carrier: {e}"),
            Self::CapacityExceeded { needed_bits, available_bits } => {
                write!(f, "payload too large: need {needed_bits} bits, carrier has {available_bits}")
            }
            Self::NoHiddenData => write!(f, "no hidden data found in this image"),
            Self::InvalidLength(bits) => {
                write!(f, "hidden data length invalid: {bits} bits is not a whole number of bytes")
            }
            Self::InvalidByteValue(b) => {
                write!(f, "hidden data starts with invalid byte 0x{b:02X}")
            }
            Self::MalformedEnvelope => write!(f, "encrypted envelope is malformed (truncated or not base64)"),
            Self::AuthenticationFailure => write!(f, "decryption failed (wrong password or corrupted data)"),
            Self::EncodingError => write!(f, "recovered text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCarrier(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CarrierError> for StegoError {
    fn from(e: CarrierError) -> Self {
        Self::InvalidCarrier(e)
    }
}
