//! # shape-raster
//!
//! Classical incremental rasterization of vector shapes into integer pixels.
//!
//! Shapes are flat `[x0, y0, x1, y1, ...]` vertex lists in a screen space
//! centered on the viewport. Outlines are drawn segment by segment with one
//! of three line algorithms; closed convex shapes can additionally be
//! filled scanline by scanline. Pixels go to any [`PixelSink`], so the core
//! has no graphics binding of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_raster::prelude::*;
//!
//! let coords = [0, 200, 100, 0, -150, -150];
//! let triangle = VertexList::new(&coords)?;
//! let mut sink = PixelRecorder::new();
//!
//! draw_curve(triangle, ShapeKind::ClosedLoop, &LineAlgorithm::Bresenham, &mut sink);
//! fill_polygon(triangle, Viewport::default(), Rgba::FILL, &mut sink);
//! assert!(!sink.is_empty());
//! # Ok::<(), shape_raster::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*, 2nd ed., §3.2 and §3.6.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Flat draw colors.
pub mod color;

/// Viewport dimensions and YAML configuration.
pub mod config;

/// Screen-space points, pixels and vertex lists.
pub mod geometry;

/// Pixel sink abstraction and in-memory sinks.
pub mod sink;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, polyline and scanline-fill rasterizers.
pub mod render;

/// Framebuffer render target.
pub mod framebuffer;

/// PNG encoding.
pub mod output;

/// Vertex-list producers and demo shapes.
pub mod shapes;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for shape-raster operations.
pub mod error;

pub use error::{Error, Result};
pub use sink::PixelSink;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use shape_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{RasterConfig, Viewport};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, FramebufferSink};
    pub use crate::geometry::{Pixel, Point, ShapeKind, VertexList};
    pub use crate::render::{
        draw_curve, draw_polyline, fill_polygon, validate_curve, CurveStats, FillStats,
        LineAlgorithm, LineRasterizer,
    };
    pub use crate::shapes::{ShapePreset, ShapeStats};
    pub use crate::sink::{PixelRecorder, PixelSink, PointBuffer};
}
