//! Horizontal scanline polygon fill.
//!
//! Each scanline in the viewport is intersected with every polygon edge and
//! filled from the leftmost to the rightmost crossing. That span is exact
//! for convex polygons only; a concave polygon whose scanline crosses more
//! than two edges is filled across its whole extent, gaps included.

use std::collections::BTreeSet;

use tracing::debug;

use crate::color::Rgba;
use crate::config::Viewport;
use crate::geometry::{Point, VertexList};
use crate::sink::PixelSink;

/// Counts from one [`fill_polygon`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillStats {
    /// Scanlines that produced at least one crossing.
    pub scanlines: usize,
    /// Fill pixels emitted.
    pub pixels: usize,
}

/// Where the edge `p1 -> p2` crosses scanline `y`, if it does.
///
/// Horizontal edges never cross. Otherwise `y` must lie in the half-open
/// range `(min(y1, y2), max(y1, y2)]`, so a vertex shared by two edges is
/// counted by at most one of them. The crossing is interpolated in integer
/// arithmetic, truncating toward zero.
#[must_use]
pub fn edge_crossing(p1: Point, p2: Point, y: i32) -> Option<i32> {
    if p1.y == p2.y {
        return None;
    }
    if y <= p1.y.min(p2.y) || y > p1.y.max(p2.y) {
        return None;
    }

    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
    let x = x1 + (i64::from(y) - y1) * (x2 - x1) / (y2 - y1);
    // The crossing lies between x1 and x2, so it fits back in i32.
    Some(x as i32)
}

/// All distinct edge crossings of scanline `y`, in increasing order.
#[must_use]
pub fn scanline_intersections(vertices: VertexList<'_>, y: i32) -> BTreeSet<i32> {
    vertices
        .edges()
        .filter_map(|(p1, p2)| edge_crossing(p1, p2, y))
        .collect()
}

/// Fill the interior of a convex polygon.
///
/// Sweeps every scanline `y` in `[-half_height, half_height)` of the
/// viewport and emits `x` from the smallest crossing up to, but not
/// including, the largest. Scanlines with fewer than two distinct crossings
/// emit nothing. The sink color is set to `color` once, before any pixel.
pub fn fill_polygon<S: PixelSink + ?Sized>(
    vertices: VertexList<'_>,
    viewport: Viewport,
    color: Rgba,
    sink: &mut S,
) -> FillStats {
    let mut stats = FillStats::default();
    sink.set_color(color);

    let half = viewport.half_height();
    for y in -half..half {
        let crossings = scanline_intersections(vertices, y);
        let (Some(&left), Some(&right)) = (crossings.first(), crossings.last()) else {
            continue;
        };

        stats.scanlines += 1;
        for x in left..right {
            sink.plot(Point::new(x, y));
        }
        stats.pixels += (i64::from(right) - i64::from(left)) as usize;
    }

    debug!(
        points = vertices.len(),
        scanlines = stats.scanlines,
        pixels = stats.pixels,
        "polygon filled"
    );
    stats
}
