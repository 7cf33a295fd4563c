//! Incremental line rasterization.
//!
//! Every algorithm emits pixels in traversal order from `start` to `end`
//! and returns how many it emitted.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::sink::PixelSink;

/// Anything that can turn a segment into pixels.
///
/// This is the seam [`draw_curve`](super::draw_curve) drives; callers
/// normally pass a [`LineAlgorithm`].
pub trait LineRasterizer {
    /// Emit the pixels approximating `start -> end`, returning the count.
    fn rasterize<S: PixelSink + ?Sized>(&self, start: Point, end: Point, sink: &mut S) -> usize;
}

/// Selects one of the incremental line algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Digital differential analyzer (floating-point increments).
    Dda,
    /// Bresenham's integer decision-variable algorithm.
    Bresenham,
    /// Midpoint decision algorithm; rightward, shallow rising lines only.
    Midpoint,
}

impl LineAlgorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [Self::Dda, Self::Bresenham, Self::Midpoint];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
            Self::Midpoint => "midpoint",
        }
    }

    /// Whether this algorithm fully covers `start -> end`.
    ///
    /// DDA and Bresenham handle every direction. Midpoint only advances
    /// along increasing `x` and steps `y` upward at most once per column,
    /// so it needs `x1 <= x2` and `0 <= y2 - y1 <= x2 - x1`.
    #[must_use]
    pub fn supports(self, start: Point, end: Point) -> bool {
        match self {
            Self::Dda | Self::Bresenham => true,
            Self::Midpoint => {
                let dx = i64::from(end.x) - i64::from(start.x);
                let dy = i64::from(end.y) - i64::from(start.y);
                dx >= 0 && dy >= 0 && dy <= dx
            }
        }
    }

    /// Like [`supports`](Self::supports), but as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSegment`] when the segment is outside
    /// this algorithm's regime.
    pub fn validate(self, start: Point, end: Point) -> Result<()> {
        if self.supports(start, end) {
            Ok(())
        } else {
            Err(Error::UnsupportedSegment {
                algorithm: self.name(),
                start,
                end,
            })
        }
    }
}

impl LineRasterizer for LineAlgorithm {
    fn rasterize<S: PixelSink + ?Sized>(&self, start: Point, end: Point, sink: &mut S) -> usize {
        match self {
            Self::Dda => dda(start, end, sink),
            Self::Bresenham => bresenham(start, end, sink),
            Self::Midpoint => midpoint(start, end, sink),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            "midpoint" | "mid-point" => Ok(Self::Midpoint),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Rasterize a segment with the DDA algorithm.
///
/// Steps once per unit along the axis of greater extent and advances the
/// other axis by a fractional increment, rounding each accumulated position
/// to the nearest pixel (halves away from zero). Both endpoints are
/// emitted; a zero-length segment emits its single point.
pub fn dda<S: PixelSink + ?Sized>(start: Point, end: Point, sink: &mut S) -> usize {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        sink.plot(start);
        return 1;
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);

    for _ in 0..=steps {
        sink.plot(Point::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    (steps + 1) as usize
}

/// Rasterize a segment with Bresenham's algorithm.
///
/// Integer-only. When the line is steep the axes swap roles so the loop
/// always walks the longer one, emitting exactly one pixel per step.
pub fn bresenham<S: PixelSink + ?Sized>(start: Point, end: Point, sink: &mut S) -> usize {
    if start == end {
        // With dx == dy == 0 the decision loop below would never terminate.
        sink.plot(start);
        return 1;
    }

    let mut dx = (i64::from(end.x) - i64::from(start.x)).abs();
    let mut dy = (i64::from(end.y) - i64::from(start.y)).abs();
    let sx: i32 = if end.x > start.x { 1 } else { -1 };
    let sy: i32 = if end.y > start.y { 1 } else { -1 };

    let steep = dy > dx;
    if steep {
        std::mem::swap(&mut dx, &mut dy);
    }

    let mut x = start.x;
    let mut y = start.y;
    let mut p = 2 * dy - dx;

    for step in 0..=dx {
        sink.plot(Point::new(x, y));
        // Stepping past the final pixel can leave the i32 range.
        if step == dx {
            break;
        }
        while p >= 0 {
            if steep {
                x += sx;
            } else {
                y += sy;
            }
            p -= 2 * dx;
        }
        if steep {
            y += sy;
        } else {
            x += sx;
        }
        p += 2 * dy;
    }

    (dx + 1) as usize
}

/// Rasterize a segment with the midpoint algorithm.
///
/// Only rightward lines with slope in `[0, 1]` are covered. Anything else
/// is not corrected: leftward or vertical segments emit just the start
/// point, descending segments come out horizontal and steep ones stop
/// short vertically. Check [`LineAlgorithm::supports`] first when that
/// matters.
pub fn midpoint<S: PixelSink + ?Sized>(start: Point, end: Point, sink: &mut S) -> usize {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(start.y) - i64::from(end.y);
    let d_straight = 2 * dy;
    let d_diagonal = 2 * (dy + dx);
    let mut d = 2 * dy + dx;

    let mut x = start.x;
    let mut y = start.y;

    sink.plot(Point::new(x, y));
    let mut emitted = 1;

    while x < end.x {
        if d <= 0 {
            x += 1;
            y += 1;
            d += d_diagonal;
        } else {
            x += 1;
            d += d_straight;
        }
        sink.plot(Point::new(x, y));
        emitted += 1;
    }

    emitted
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sink::PixelRecorder;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = i32> {
        -400i32..400
    }

    fn run(algorithm: LineAlgorithm, start: Point, end: Point) -> Vec<Point> {
        let mut rec = PixelRecorder::new();
        algorithm.rasterize(start, end, &mut rec);
        rec.points()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// DDA and Bresenham start and end on the exact endpoints.
        #[test]
        fn prop_endpoints_included(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (start, end) = (Point::new(x0, y0), Point::new(x1, y1));
            for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
                let pts = run(algorithm, start, end);
                prop_assert_eq!(pts.first(), Some(&start));
                prop_assert_eq!(pts.last(), Some(&end));
            }
        }

        /// Consecutive pixels are 8-connected neighbours and never repeat.
        #[test]
        fn prop_no_gaps_no_duplicates(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (start, end) = (Point::new(x0, y0), Point::new(x1, y1));
            for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
                let pts = run(algorithm, start, end);
                for w in pts.windows(2) {
                    prop_assert!(w[0] != w[1], "{} repeated {}", algorithm, w[0]);
                    prop_assert!((w[1].x - w[0].x).abs() <= 1 && (w[1].y - w[0].y).abs() <= 1,
                        "{} jumped from {} to {}", algorithm, w[0], w[1]);
                }
            }
        }

        /// One pixel per unit of the longer axis, plus the start.
        #[test]
        fn prop_pixel_count(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (start, end) = (Point::new(x0, y0), Point::new(x1, y1));
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(run(LineAlgorithm::Dda, start, end).len(), expected);
            prop_assert_eq!(run(LineAlgorithm::Bresenham, start, end).len(), expected);
        }

        /// Bresenham and Midpoint agree wherever Midpoint is supported.
        #[test]
        fn prop_bresenham_matches_midpoint(x0 in coord(), y0 in coord(), dx in 0i32..300, t in 0.0f64..=1.0) {
            let dy = (f64::from(dx) * t) as i32;
            let (start, end) = (Point::new(x0, y0), Point::new(x0 + dx, y0 + dy));
            prop_assume!(LineAlgorithm::Midpoint.supports(start, end));
            prop_assert_eq!(
                run(LineAlgorithm::Bresenham, start, end),
                run(LineAlgorithm::Midpoint, start, end)
            );
        }

        /// Identical inputs give identical output.
        #[test]
        fn prop_deterministic(x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord()) {
            let (start, end) = (Point::new(x0, y0), Point::new(x1, y1));
            for algorithm in LineAlgorithm::ALL {
                prop_assert_eq!(run(algorithm, start, end), run(algorithm, start, end));
            }
        }
    }
}
