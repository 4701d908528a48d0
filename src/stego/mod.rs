// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Steganographic encoding and decoding.
//!
//! The embedding scheme is plain LSB substitution: one payload bit per RGB
//! sample, terminated by a fixed 16-bit end marker. Layered on top is an
//! optional encrypted envelope (PBKDF2-HMAC-SHA256 key derivation,
//! AES-256-GCM, base64 text encoding) selected by passing a non-empty
//! password.
//!
//! Layer map, bottom to top:
//!
//! - [`bits`]: bit vectors, the end marker constant, marker search
//! - [`crypto`]: key derivation and the AEAD primitives
//! - [`envelope`]: the `salt | nonce | tag | ciphertext` base64 container
//! - [`capacity`]: exact capacity model and report
//! - [`codec`]: embed/extract against a pixel buffer, extraction policies
//! - `pipeline`: `lsb_encode` / `lsb_decode` orchestration (re-exported)
//!
//! Everything is pure and synchronous; the only shared resource is the
//! thread-local CSPRNG used for salt and nonce generation.

pub mod error;
pub mod bits;
pub mod crypto;
pub mod envelope;
pub mod capacity;
pub mod codec;
mod pipeline;

pub use error::StegoError;
pub use capacity::CapacityInfo;
pub use codec::{embed, extract, BytePolicy};
pub use pipeline::{lsb_encode, lsb_decode, lsb_decode_with_policy, lsb_capacity, lsb_capacity_info};
