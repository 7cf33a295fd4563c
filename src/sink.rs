//! Pixel sinks.
//!
//! Rasterizers never talk to a graphics binding directly: they emit
//! screen-space points into a [`PixelSink`]. A sink owns the notion of a
//! current color, set once before a batch of emissions.

use crate::color::Rgba;
use crate::config::Viewport;
use crate::geometry::{Pixel, Point};

/// Destination for rasterized pixels.
///
/// Emission is write-only and append-style; sinks are never read back by
/// the rasterizers.
pub trait PixelSink {
    /// Set the color applied to subsequent pixels.
    fn set_color(&mut self, _color: Rgba) {}

    /// Emit one screen-space pixel.
    fn plot(&mut self, point: Point);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_color(&mut self, color: Rgba) {
        (**self).set_color(color);
    }

    fn plot(&mut self, point: Point) {
        (**self).plot(point);
    }
}

/// In-memory sink recording every emitted pixel in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRecorder {
    color: Rgba,
    pixels: Vec<Pixel>,
}

impl Default for PixelRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelRecorder {
    /// Create an empty recorder using [`Rgba::DRAW`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: Rgba::DRAW,
            pixels: Vec::new(),
        }
    }

    /// Recorded pixels in emission order.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Recorded positions in emission order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.pixels.iter().map(|p| p.point).collect()
    }

    /// Number of recorded pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Current color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Drop recorded pixels, keeping the current color.
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    /// Consume the recorder, returning its pixels.
    #[must_use]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

impl PixelSink for PixelRecorder {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn plot(&mut self, point: Point) {
        self.pixels.push(Pixel::new(point, self.color));
    }
}

/// A point normalized to device coordinates, ready for upload as a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcVertex {
    /// Normalized x.
    pub x: f32,
    /// Normalized y.
    pub y: f32,
    /// Flat color.
    pub color: Rgba,
}

/// Sink that normalizes pixels into a point-list vertex buffer.
///
/// Points outside `[-1, 1)` are kept; they simply fall outside the visible
/// area once drawn.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    viewport: Viewport,
    color: Rgba,
    vertices: Vec<NdcVertex>,
}

impl PointBuffer {
    /// Create an empty buffer for the given viewport.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            color: Rgba::DRAW,
            vertices: Vec::new(),
        }
    }

    /// Normalized vertices in emission order.
    #[must_use]
    pub fn vertices(&self) -> &[NdcVertex] {
        &self.vertices
    }

    /// Number of buffered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if nothing has been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Interleaved `[x, y]` positions, as a GPU point list expects.
    #[must_use]
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }
}

impl PixelSink for PointBuffer {
    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn plot(&mut self, point: Point) {
        let [x, y] = self.viewport.to_ndc(point);
        self.vertices.push(NdcVertex {
            x,
            y,
            color: self.color,
        });
    }
}
