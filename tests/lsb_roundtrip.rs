// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Round-trip integration tests for the encode/decode pipeline.
//!
//! Covers are generated in memory: seeded ChaCha20 noise for realistic LSB
//! planes, and all-even samples when a provably marker-free carrier is
//! needed.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use pixveil_core::{
    lsb_decode, lsb_decode_with_policy, lsb_encode, BytePolicy, PixelBuffer, StegoError,
};

/// Seeded noise cover encoded as PNG. Every sample is random, so the image
/// behaves like a photo as far as the LSB plane is concerned.
fn noise_cover(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let samples: Vec<u8> = (0..width as usize * height as usize * 3)
        .map(|_| rng.gen())
        .collect();
    PixelBuffer::from_raw(width, height, samples)
        .unwrap()
        .to_png_bytes()
        .unwrap()
}

/// Cover whose samples are all even: the LSB plane is zero everywhere, so
/// no end marker can possibly be present.
fn clean_cover(width: u32, height: u32) -> Vec<u8> {
    let samples: Vec<u8> = (0..width as usize * height as usize * 3)
        .map(|i| ((i * 2) % 256) as u8)
        .collect();
    PixelBuffer::from_raw(width, height, samples)
        .unwrap()
        .to_png_bytes()
        .unwrap()
}

#[test]
fn roundtrip_with_password() {
    let cover = noise_cover(64, 64, 1);
    let message = "Hello, steganography!";
    let password = "test-password-123";

    let stego = lsb_encode(&cover, message, password).unwrap();
    let decoded = lsb_decode(&stego, password).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn roundtrip_without_password() {
    let cover = noise_cover(64, 64, 2);
    let stego = lsb_encode(&cover, "plain hidden note", "").unwrap();
    let decoded = lsb_decode(&stego, "").unwrap();
    assert_eq!(decoded, "plain hidden note");
}

#[test]
fn wrong_password_fails() {
    let cover = noise_cover(64, 64, 3);
    let stego = lsb_encode(&cover, "secret msg", "correct-pass").unwrap();

    let result = lsb_decode(&stego, "wrong-pass");
    assert!(
        matches!(result, Err(StegoError::AuthenticationFailure)),
        "decoding with wrong password should fail authentication, got {result:?}"
    );
}

#[test]
fn roundtrip_empty_message() {
    let cover = noise_cover(64, 64, 4);
    let stego = lsb_encode(&cover, "", "pass").unwrap();
    assert_eq!(lsb_decode(&stego, "pass").unwrap(), "");
}

#[test]
fn roundtrip_empty_message_without_password() {
    let cover = noise_cover(64, 64, 5);
    let stego = lsb_encode(&cover, "", "").unwrap();
    assert_eq!(lsb_decode(&stego, "").unwrap(), "");
}

#[test]
fn roundtrip_unicode_with_password() {
    // The envelope is base64, so the pixels only ever carry ASCII no matter
    // what the plaintext contains.
    let cover = noise_cover(64, 64, 6);
    let message = "Héllo wörld! 日本語テスト 🔐";
    let stego = lsb_encode(&cover, message, "unicode-key").unwrap();
    assert_eq!(lsb_decode(&stego, "unicode-key").unwrap(), message);
}

#[test]
fn unicode_without_password_needs_raw_policy() {
    let cover = noise_cover(64, 64, 7);
    let message = "héllo wörld 🌍";
    let stego = lsb_encode(&cover, message, "").unwrap();

    // Default policy truncates at the first non-ASCII byte ('é').
    assert_eq!(lsb_decode(&stego, "").unwrap(), "h");

    // RawBytes recovers the full UTF-8 payload.
    let full = lsb_decode_with_policy(&stego, "", BytePolicy::RawBytes).unwrap();
    assert_eq!(full, message);
}

#[test]
fn roundtrip_various_lengths() {
    let cover = noise_cover(64, 64, 8);
    let password = "multi-test";

    for len in [1usize, 10, 100, 500] {
        let message: String = (0..len).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        let stego = lsb_encode(&cover, &message, password).unwrap();
        let decoded = lsb_decode(&stego, password).unwrap();
        assert_eq!(decoded, message, "failed for message length {len}");
    }
}

#[test]
fn stego_is_valid_png_with_same_dimensions() {
    let cover = noise_cover(48, 32, 9);
    let stego = lsb_encode(&cover, "dims check", "pass").unwrap();

    assert_eq!(&stego[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    let buf = PixelBuffer::from_bytes(&stego).unwrap();
    assert_eq!(buf.dimensions(), (48, 32));
}

#[test]
fn clean_image_reports_no_hidden_data() {
    let cover = clean_cover(32, 32);
    let result = lsb_decode(&cover, "");
    assert!(matches!(result, Err(StegoError::NoHiddenData)));
}

#[test]
fn decode_without_password_yields_envelope_text() {
    // Decoding an encrypted image without the password is not detectable as
    // an error: the extraction returns the envelope itself, which is valid
    // base64 wrapping at least the 48-byte header.
    let cover = noise_cover(64, 64, 10);
    let stego = lsb_encode(&cover, "covert", "pw").unwrap();

    let text = lsb_decode(&stego, "").unwrap();
    let raw = STANDARD.decode(&text).unwrap();
    assert!(raw.len() >= 48);
}

#[test]
fn plaintext_image_with_password_is_malformed_envelope() {
    let cover = noise_cover(64, 64, 11);
    let stego = lsb_encode(&cover, "just a plain note", "").unwrap();

    let result = lsb_decode(&stego, "some-password");
    assert!(matches!(result, Err(StegoError::MalformedEnvelope)));
}

#[test]
fn garbage_carrier_is_rejected() {
    let result = lsb_encode(b"definitely not an image", "msg", "pw");
    assert!(matches!(result, Err(StegoError::InvalidCarrier(_))));

    let result = lsb_decode(b"also not an image", "pw");
    assert!(matches!(result, Err(StegoError::InvalidCarrier(_))));
}

#[test]
fn jpeg_cover_produces_png_stego() {
    // Carriers can arrive in lossy formats; embedding happens after decode,
    // so the roundtrip is exact and the output is PNG.
    use image::ImageEncoder;
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let rgb: Vec<u8> = (0..64 * 64 * 3).map(|_| rng.gen()).collect();
    let mut jpeg = std::io::Cursor::new(Vec::new());
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 85)
        .write_image(&rgb, 64, 64, image::ExtendedColorType::Rgb8)
        .unwrap();

    let stego = lsb_encode(&jpeg.into_inner(), "survived transcoding", "pw").unwrap();
    assert_eq!(&stego[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    assert_eq!(lsb_decode(&stego, "pw").unwrap(), "survived transcoding");
}

#[test]
fn stego_survives_png_reencode() {
    // Decode the stego PNG into a buffer and write it back out: the payload
    // must survive because PNG is lossless.
    let cover = noise_cover(64, 64, 13);
    let stego = lsb_encode(&cover, "twice encoded", "pw").unwrap();

    let rewritten = PixelBuffer::from_bytes(&stego)
        .unwrap()
        .to_png_bytes()
        .unwrap();
    assert_eq!(lsb_decode(&rewritten, "pw").unwrap(), "twice encoded");
}
