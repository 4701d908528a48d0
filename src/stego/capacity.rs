// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Embedding capacity model.
//!
//! LSB capacity is exact, not an estimate: one bit per sample, minus the
//! 16-bit end marker, divided into whole bytes. The same formula backs the
//! precheck in [`codec::embed`](crate::stego::codec::embed), so a payload
//! reported as fitting here always embeds.

use crate::carrier::PixelBuffer;
use crate::stego::bits::MARKER_LEN;

/// Capacity report for a carrier image.
///
/// All fields are derived from the buffer; computing the report never
/// modifies anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    /// Carrier width in pixels.
    pub width: u32,
    /// Carrier height in pixels.
    pub height: u32,
    /// Total LSB slots: `width * height * 3`.
    pub sample_count: usize,
    /// Maximum payload size in bytes, marker overhead already subtracted.
    pub max_payload_bytes: usize,
}

/// Maximum payload size in bytes for a carrier: `(samples - 16) / 8`.
///
/// Saturates to 0 when the buffer cannot even hold the end marker.
pub fn payload_capacity(buffer: &PixelBuffer) -> usize {
    buffer.sample_count().saturating_sub(MARKER_LEN) / 8
}

/// Build the full capacity report for a carrier.
pub fn capacity_info(buffer: &PixelBuffer) -> CapacityInfo {
    CapacityInfo {
        width: buffer.width(),
        height: buffer.height(),
        sample_count: buffer.sample_count(),
        max_payload_bytes: payload_capacity(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: u32, height: u32) -> PixelBuffer {
        let samples = vec![0u8; width as usize * height as usize * 3];
        PixelBuffer::from_raw(width, height, samples).unwrap()
    }

    #[test]
    fn ten_by_ten_holds_35_bytes() {
        // 300 samples - 16 marker bits = 284 bits -> 35 whole bytes.
        assert_eq!(payload_capacity(&buffer(10, 10)), 35);
    }

    #[test]
    fn tiny_buffers_hold_nothing() {
        // 1x1 = 3 samples and 2x2 = 12 samples cannot hold the marker.
        assert_eq!(payload_capacity(&buffer(1, 1)), 0);
        assert_eq!(payload_capacity(&buffer(2, 2)), 0);
    }

    #[test]
    fn marker_only_fit_is_zero_bytes() {
        // 3x2 = 18 samples: marker fits, but only 2 payload bits remain.
        assert_eq!(payload_capacity(&buffer(3, 2)), 0);
    }

    #[test]
    fn capacity_scales_with_area() {
        // 100x100 = 30_000 samples -> (30_000 - 16) / 8 = 3748 bytes.
        assert_eq!(payload_capacity(&buffer(100, 100)), 3748);
    }

    #[test]
    fn report_fields_consistent() {
        let buf = buffer(20, 15);
        let info = capacity_info(&buf);
        assert_eq!(info.width, 20);
        assert_eq!(info.height, 15);
        assert_eq!(info.sample_count, 900);
        assert_eq!(info.max_payload_bytes, payload_capacity(&buf));
    }
}
