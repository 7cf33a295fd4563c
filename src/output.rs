//! PNG output.
//!
//! Pure Rust PNG encoding using the `png` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Encode a framebuffer as 8-bit RGBA PNG into any writer.
///
/// # Errors
///
/// Returns an error if PNG encoding or the underlying write fails.
pub fn write_png<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(fb.pixels())?;
    Ok(())
}

/// Write a framebuffer to a PNG file.
///
/// # Errors
///
/// Returns an error if file creation or PNG encoding fails.
pub fn save_png<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_png(fb, BufWriter::new(file))
}

/// Encode a framebuffer to PNG bytes.
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn png_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(fb, &mut buffer)?;
    Ok(buffer)
}
