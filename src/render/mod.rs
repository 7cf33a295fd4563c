//! Rasterization of lines, polylines and convex polygons.
//!
//! # Algorithms
//!
//! - **DDA**: floating-point increments along the axis of greater extent
//! - **Bresenham's Line**: integer decision variable, all octants
//! - **Midpoint Line**: integer midpoint test, rightward shallow lines only
//! - **Scanline Fill**: per-row edge crossings, filled between the extremes
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."

mod curve;
mod fill;
mod line;

pub use curve::{draw_curve, draw_polyline, validate_curve, CurveStats};
pub use fill::{edge_crossing, fill_polygon, scanline_intersections, FillStats};
pub use line::{bresenham, dda, midpoint, LineAlgorithm, LineRasterizer};
