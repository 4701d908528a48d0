// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Example: hide a message in an image and reveal it again.
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 3 && args[1] == "--capacity" {
        let cover = fs::read(&args[2]).expect("Could not read cover image");
        match pixveil_core::lsb_capacity_info(&cover) {
            Ok(info) => {
                println!("Image: {}x{} px, {} samples", info.width, info.height, info.sample_count);
                println!("Max payload: {} bytes", info.max_payload_bytes);
            }
            Err(e) => eprintln!("Capacity check failed: {e}"),
        }
    } else if args.len() >= 4 && args[1] == "--reveal" {
        let stego = fs::read(&args[2]).expect("Could not read stego image");
        match pixveil_core::lsb_decode(&stego, &args[3]) {
            Ok(message) => println!("Hidden message: {message}"),
            Err(e) => eprintln!("Reveal failed: {e}"),
        }
    } else if args.len() >= 4 {
        let cover = fs::read(&args[1]).expect("Could not read cover image");
        let message = &args[2];
        let password = &args[3];

        let stego = pixveil_core::lsb_encode(&cover, message, password)
            .expect("Encode failed");

        let out_path = match args[1].rsplit_once('.') {
            Some((stem, _ext)) => format!("{stem}_stego.png"),
            None => format!("{}_stego.png", args[1]),
        };
        fs::write(&out_path, &stego).expect("Could not write output");
        println!("Stego image written to: {out_path}");
        println!("Cover: {} bytes, Stego PNG: {} bytes", cover.len(), stego.len());
    } else {
        eprintln!("Usage: hide_reveal <cover image> <message> <password>");
        eprintln!("       hide_reveal --reveal <stego.png> <password>");
        eprintln!("       hide_reveal --capacity <cover image>");
        eprintln!("(use an empty password \"\" to skip encryption)");
        std::process::exit(1);
    }
}
