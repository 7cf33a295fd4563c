//! Polyline composition.

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::{ShapeKind, VertexList};
use crate::sink::PixelSink;

use super::line::{LineAlgorithm, LineRasterizer};

/// Counts from one [`draw_curve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurveStats {
    /// Segments handed to the rasterizer.
    pub segments: usize,
    /// Pixels emitted across all segments.
    pub pixels: usize,
}

/// Draw a polyline through `vertices`, one rasterizer call per segment.
///
/// Consecutive points are joined in order; a [`ShapeKind::ClosedLoop`]
/// adds the `last -> first` segment, so an `n`-point list yields `n - 1`
/// or `n` segments. Shared vertices are emitted by both adjoining segments.
///
/// # Example
///
/// ```
/// use shape_raster::prelude::*;
///
/// let coords = [-100, -100, -100, 100, 100, 100, 100, -100];
/// let square = VertexList::new(&coords).unwrap();
/// let mut rec = PixelRecorder::new();
///
/// let stats = draw_curve(square, ShapeKind::ClosedLoop, &LineAlgorithm::Dda, &mut rec);
/// assert_eq!(stats.segments, 4);
/// assert_eq!(stats.pixels, rec.len());
/// ```
pub fn draw_curve<R, S>(
    vertices: VertexList<'_>,
    kind: ShapeKind,
    rasterizer: &R,
    sink: &mut S,
) -> CurveStats
where
    R: LineRasterizer + ?Sized,
    S: PixelSink + ?Sized,
{
    let mut stats = CurveStats::default();

    for (start, end) in vertices.segments(kind) {
        let pixels = rasterizer.rasterize(start, end, sink);
        trace!(%start, %end, pixels, "segment");
        stats.segments += 1;
        stats.pixels += pixels;
    }

    debug!(
        points = vertices.len(),
        ?kind,
        segments = stats.segments,
        pixels = stats.pixels,
        "curve drawn"
    );
    stats
}

/// Draw a polyline with a built-in algorithm, flagging unsupported segments.
///
/// Segments outside the algorithm's regime (see
/// [`LineAlgorithm::supports`]) are still rasterized as-is; each one is
/// logged at `warn` level.
pub fn draw_polyline<S: PixelSink + ?Sized>(
    vertices: VertexList<'_>,
    kind: ShapeKind,
    algorithm: LineAlgorithm,
    sink: &mut S,
) -> CurveStats {
    for (start, end) in vertices.segments(kind) {
        if !algorithm.supports(start, end) {
            warn!(%algorithm, %start, %end, "segment outside supported regime; output will be incomplete");
        }
    }
    draw_curve(vertices, kind, &algorithm, sink)
}

/// Check that `algorithm` fully covers every segment of the polyline.
///
/// # Errors
///
/// Returns the first [`Error::UnsupportedSegment`](crate::Error::UnsupportedSegment).
pub fn validate_curve(vertices: VertexList<'_>, kind: ShapeKind, algorithm: LineAlgorithm) -> Result<()> {
    vertices
        .segments(kind)
        .try_for_each(|(start, end)| algorithm.validate(start, end))
}
