//! RGBA framebuffer render target.
//!
//! The framebuffer stores pixels in top-left-origin rows. [`FramebufferSink`]
//! bridges it to the centered screen space the rasterizers work in.

use crate::color::Rgba;
use crate::config::Viewport;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::sink::PixelSink;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, cleared to
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Create a framebuffer covering a viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport is invalid.
    pub fn for_viewport(viewport: Viewport) -> Result<Self> {
        viewport.validate()?;
        Self::new(viewport.width, viewport.height)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw, tightly packed pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|c| *c == rgba).count()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

/// Sink writing screen-space pixels into a [`Framebuffer`].
///
/// Pixels outside the viewport are dropped without error.
#[derive(Debug)]
pub struct FramebufferSink<'a> {
    fb: &'a mut Framebuffer,
    viewport: Viewport,
    color: Rgba,
    dropped: usize,
}

impl<'a> FramebufferSink<'a> {
    /// Wrap a framebuffer whose dimensions match `viewport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport is invalid or its size differs from
    /// the framebuffer's.
    pub fn new(fb: &'a mut Framebuffer, viewport: Viewport) -> Result<Self> {
        viewport.validate()?;
        if fb.width() != viewport.width || fb.height() != viewport.height {
            return Err(Error::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            fb,
            viewport,
            color: Rgba::DRAW,
            dropped: 0,
        })
    }

    /// Number of pixels that fell outside the viewport.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }
}

impl PixelSink for FramebufferSink<'_> {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn plot(&mut self, point: Point) {
        match self.viewport.to_device(point) {
            Some((x, y)) => self.fb.set_pixel(x, y, self.color),
            None => self.dropped += 1,
        }
    }
}
