//! Error types for shape-raster operations.

use std::io;
use thiserror::Error;

use crate::geometry::Point;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rasterizing shapes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a viewport or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Flattened vertex list does not hold whole `(x, y)` pairs.
    #[error("Vertex list has odd length {len}; coordinates must come in (x, y) pairs")]
    OddVertexCount {
        /// Number of integers supplied.
        len: usize,
    },

    /// Vertex list holds fewer than the two points a segment needs.
    #[error("Vertex list has {points} point(s); at least 2 are required")]
    TooFewPoints {
        /// Number of points supplied.
        points: usize,
    },

    /// Segment lies outside the regime an algorithm supports.
    #[error("{algorithm} cannot rasterize segment {start} -> {end}")]
    UnsupportedSegment {
        /// Algorithm name.
        algorithm: &'static str,
        /// Segment start.
        start: Point,
        /// Segment end.
        end: Point,
    },

    /// Unrecognized line algorithm name.
    #[error("Unknown line algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Unrecognized shape preset name.
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// Configuration file could not be read.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration could not be parsed.
    #[error("Configuration parse error at line {line}: {message}")]
    ConfigParse {
        /// 1-based line of the failure (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
