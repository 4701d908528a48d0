// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Pixel-domain carrier codec.
//!
//! Decodes any supported raster format (PNG, JPEG, GIF, BMP, TIFF, WebP) into
//! a flat 8-bit RGB sample buffer and re-encodes the buffer as PNG. The
//! embedding layer operates entirely on this buffer; it never touches the
//! compressed representation.
//!
//! Two contracts matter to the embedding layer:
//!
//! - Samples are stored row-major, channel-minor: `R(0,0) G(0,0) B(0,0)
//!   R(0,1) ...`. Capacity, embed, and extract all index samples in this
//!   order.
//! - Output is always PNG. Any lossy re-encode of the stego image would
//!   perturb the low-order bits and destroy the hidden payload.

pub mod error;

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use error::{CarrierError, Result};

/// Samples per pixel. Alpha and palette inputs are flattened to plain RGB
/// during decode, so every pixel contributes exactly three samples.
pub const CHANNELS: usize = 3;

/// An owned RGB sample grid decoded from a carrier image.
///
/// Created from encoded bytes with [`PixelBuffer::from_bytes`] or from raw
/// samples with [`PixelBuffer::from_raw`]. After the embedding layer mutates
/// the samples, [`PixelBuffer::to_png_bytes`] writes the lossless output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// `height * width * 3` bytes, row-major, channel-minor.
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Decode a carrier image from encoded bytes, forcing the result to RGB8.
    ///
    /// RGBA, grayscale, palette, and 16-bit inputs are all converted; the
    /// alpha channel is dropped. Format is sniffed from the bytes, not from
    /// a file extension.
    ///
    /// # Errors
    /// [`CarrierError::Decode`] if the bytes are not a supported image.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let rgb = image::load_from_memory(data)
            .map_err(CarrierError::Decode)?
            .to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(Self {
            width,
            height,
            samples: rgb.into_raw(),
        })
    }

    /// Build a buffer from raw RGB samples.
    ///
    /// # Errors
    /// [`CarrierError::SampleCountMismatch`] if `samples.len()` is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(CarrierError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Encode the buffer as a PNG byte stream.
    ///
    /// PNG is the only output format: it is lossless, so every sample LSB
    /// survives a decode of the returned bytes unchanged.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        let encoder = PngEncoder::new(&mut out);
        encoder
            .write_image(&self.samples, self.width, self.height, ExtendedColorType::Rgb8)
            .map_err(CarrierError::Encode)?;
        Ok(out.into_inner())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of samples (`width * height * 3`).
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Flat sample slice in embedding order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Mutable flat sample slice in embedding order.
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_buffer(width: u32, height: u32) -> PixelBuffer {
        let samples: Vec<u8> = (0..width as usize * height as usize * CHANNELS)
            .map(|i| (i % 256) as u8)
            .collect();
        PixelBuffer::from_raw(width, height, samples).unwrap()
    }

    #[test]
    fn from_raw_validates_length() {
        assert!(PixelBuffer::from_raw(4, 4, vec![0u8; 48]).is_ok());
        let result = PixelBuffer::from_raw(4, 4, vec![0u8; 47]);
        assert!(matches!(
            result,
            Err(CarrierError::SampleCountMismatch { expected: 48, actual: 47 })
        ));
    }

    #[test]
    fn sample_count_is_three_per_pixel() {
        let buf = gradient_buffer(10, 10);
        assert_eq!(buf.sample_count(), 300);
        assert_eq!(buf.dimensions(), (10, 10));
    }

    #[test]
    fn png_roundtrip_is_lossless() {
        let buf = gradient_buffer(13, 7);
        let png = buf.to_png_bytes().unwrap();
        let back = PixelBuffer::from_bytes(&png).unwrap();
        assert_eq!(back.dimensions(), (13, 7));
        assert_eq!(back.samples(), buf.samples());
    }

    #[test]
    fn png_signature_present() {
        let buf = gradient_buffer(3, 3);
        let png = buf.to_png_bytes().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn rgba_input_forced_to_rgb() {
        // Encode an RGBA image, decode through PixelBuffer, expect 3 channels.
        let rgba: Vec<u8> = (0..4 * 4 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let mut out = Cursor::new(Vec::new());
        PngEncoder::new(&mut out)
            .write_image(&rgba, 4, 4, ExtendedColorType::Rgba8)
            .unwrap();

        let buf = PixelBuffer::from_bytes(&out.into_inner()).unwrap();
        assert_eq!(buf.dimensions(), (4, 4));
        assert_eq!(buf.sample_count(), 4 * 4 * 3);
        // RGB samples survive the alpha drop untouched.
        assert_eq!(buf.samples()[0], rgba[0]);
        assert_eq!(buf.samples()[1], rgba[1]);
        assert_eq!(buf.samples()[2], rgba[2]);
        assert_eq!(buf.samples()[3], rgba[4]);
    }

    #[test]
    fn gray_input_forced_to_rgb() {
        // A grayscale pixel expands to three identical samples.
        let gray = vec![10u8, 200];
        let mut out = Cursor::new(Vec::new());
        PngEncoder::new(&mut out)
            .write_image(&gray, 2, 1, ExtendedColorType::L8)
            .unwrap();

        let buf = PixelBuffer::from_bytes(&out.into_inner()).unwrap();
        assert_eq!(buf.sample_count(), 2 * 1 * 3);
        assert_eq!(buf.samples(), &[10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn garbage_bytes_rejected() {
        let result = PixelBuffer::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(CarrierError::Decode(_))));
    }

    #[test]
    fn mutating_samples_changes_png_output() {
        let buf = gradient_buffer(5, 5);
        let mut modified = buf.clone();
        modified.samples_mut()[0] ^= 1;
        let back = PixelBuffer::from_bytes(&modified.to_png_bytes().unwrap()).unwrap();
        assert_eq!(back.samples()[0], buf.samples()[0] ^ 1);
    }
}
