//! Screen-space geometry.
//!
//! All coordinates are signed integers in a space centered on the viewport:
//! the origin is the middle of the screen and `y` grows upward.

use std::fmt;
use std::iter::FusedIterator;

use crate::color::Rgba;
use crate::error::{Error, Result};

/// An integer screen-space point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point together with the flat color it was emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Screen-space position.
    pub point: Point,
    /// Flat color.
    pub color: Rgba,
}

impl Pixel {
    /// Create a pixel.
    #[must_use]
    pub const fn new(point: Point, color: Rgba) -> Self {
        Self { point, color }
    }
}

/// Whether a polyline connects its last vertex back to its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// Consecutive vertices only.
    #[default]
    OpenStrip,
    /// Consecutive vertices plus the implicit `last -> first` edge.
    ClosedLoop,
}

impl ShapeKind {
    /// Number of segments a polyline of `points` vertices produces.
    #[must_use]
    pub const fn segment_count(self, points: usize) -> usize {
        match self {
            Self::OpenStrip => points.saturating_sub(1),
            Self::ClosedLoop => points,
        }
    }
}

/// A borrowed, flattened `[x0, y0, x1, y1, ...]` vertex sequence.
///
/// Construction guarantees whole coordinate pairs and at least two points,
/// so segment iteration never reads out of bounds. The closing edge of a
/// loop is implicit and must not be repeated in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexList<'a> {
    coords: &'a [i32],
}

impl<'a> VertexList<'a> {
    /// Wrap a flattened coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OddVertexCount`] if the slice length is odd and
    /// [`Error::TooFewPoints`] if it holds fewer than two points.
    pub fn new(coords: &'a [i32]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(Error::OddVertexCount { len: coords.len() });
        }
        if coords.len() < 4 {
            return Err(Error::TooFewPoints {
                points: coords.len() / 2,
            });
        }
        Ok(Self { coords })
    }

    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Always false; a list holds at least two points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The flattened coordinates.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [i32] {
        self.coords
    }

    /// The point at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        let x = *self.coords.get(index * 2)?;
        let y = *self.coords.get(index * 2 + 1)?;
        Some(Point::new(x, y))
    }

    /// Iterate over points in traversal order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + 'a {
        self.coords.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
    }

    /// Iterate over the segments of this polyline.
    ///
    /// Open strips yield `n - 1` segments; closed loops add `(last, first)`.
    #[must_use]
    pub fn segments(&self, kind: ShapeKind) -> Segments<'a> {
        Segments {
            list: *self,
            index: 0,
            count: kind.segment_count(self.len()),
        }
    }

    /// Iterate over polygon edges, including the wrap-around edge.
    #[must_use]
    pub fn edges(&self) -> Segments<'a> {
        self.segments(ShapeKind::ClosedLoop)
    }
}

impl<'a> TryFrom<&'a [i32]> for VertexList<'a> {
    type Error = Error;

    fn try_from(coords: &'a [i32]) -> Result<Self> {
        Self::new(coords)
    }
}

/// Iterator over `(start, end)` segments of a [`VertexList`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    list: VertexList<'a>,
    index: usize,
    count: usize,
}

impl Iterator for Segments<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let n = self.list.len();
        let start = self.list.get(self.index)?;
        let end = self.list.get((self.index + 1) % n)?;
        self.index += 1;
        Some((start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}
impl FusedIterator for Segments<'_> {}
