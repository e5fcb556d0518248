//! Tests that exercise the compositor across modules.
//!
//! Geometry at preview and export size, and full renders checked pixel by
//! pixel.


use std::io::Cursor;

use image::{Rgba, RgbaImage};

/// Encode a solid-color image as PNG bytes.
fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}
