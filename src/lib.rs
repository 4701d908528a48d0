// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! # pixveil-core
//!
//! Pure-Rust LSB steganography engine for hiding text messages in raster
//! images. Payload bits replace the least-significant bit of consecutive
//! RGB samples, terminated by a fixed 16-bit end marker; an optional
//! password protects the message with PBKDF2-derived AES-256-GCM before it
//! touches the pixels.
//!
//! The engine is a library with no I/O of its own: bytes in, bytes out.
//! Carriers may arrive in any supported raster format (PNG, JPEG, GIF, BMP,
//! TIFF, WebP) and are normalized to 8-bit RGB; stego output is always PNG,
//! because any lossy re-encode would destroy the embedded bits.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixveil_core::{lsb_encode, lsb_decode};
//!
//! let cover = std::fs::read("photo.png").unwrap();
//! let stego = lsb_encode(&cover, "secret message", "password").unwrap();
//! let decoded = lsb_decode(&stego, "password").unwrap();
//! assert_eq!(decoded, "secret message");
//! ```
//!
//! The byte-level layers ([`embed`], [`extract`], [`PixelBuffer`]) are
//! public for callers that manage their own pixel buffers or binary
//! payloads.

pub mod carrier;
pub mod stego;

pub use carrier::error::{CarrierError, Result as CarrierResult};
pub use carrier::{PixelBuffer, CHANNELS};
pub use stego::{lsb_encode, lsb_decode, lsb_decode_with_policy, lsb_capacity, lsb_capacity_info};
pub use stego::{embed, extract, BytePolicy, CapacityInfo, StegoError};
