// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Error types for carrier image decoding and encoding.

use std::fmt;

/// Errors that can occur while decoding a carrier image or writing the
/// stego PNG.
#[derive(Debug)]
pub enum CarrierError {
    /// Input bytes could not be decoded as any supported raster format.
    Decode(image::ImageError),
    /// PNG encoding of the output buffer failed.
    Encode(image::ImageError),
    /// A raw sample buffer does not match `width * height * 3`.
    SampleCountMismatch {
        /// Expected sample count for the given dimensions.
        expected: usize,
        /// Actual length of the provided buffer.
        actual: usize,
    },
}

impl fmt::Display for CarrierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "could not decode carrier image: {e}"),
            Self::Encode(e) => write!(f, "could not encode stego PNG: {e}"),
            Self::SampleCountMismatch { expected, actual } => {
                write!(f, "sample buffer length mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for CarrierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) | Self::Encode(e) => Some(e),
            Self::SampleCountMismatch { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarrierError>;
