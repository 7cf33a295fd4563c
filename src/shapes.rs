//! Vertex-list producers and the stock demo shapes.
//!
//! The builders only compute coordinates; drawing goes through
//! [`ShapePreset::draw`] or the [`render`](crate::render) functions directly.

use std::fmt;
use std::str::FromStr;

use crate::config::RasterConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, ShapeKind, VertexList};
use crate::render::{draw_polyline, fill_polygon, CurveStats, FillStats, LineAlgorithm};
use crate::sink::PixelSink;

/// Degrees to radians with the single-precision `3.1416` approximation of
/// pi the demo shapes are calibrated against.
fn radians(deg: i32) -> f64 {
    f64::from(deg as f32 * 3.1416_f32) / 180.0
}

/// Sample `y = amplitude * sin(x°)` for `x` in `[-half_span, half_span]`.
///
/// Samples are `step` degrees apart and truncated toward zero.
#[must_use]
pub fn sine_wave(amplitude: f64, half_span: i32, step: usize) -> Vec<i32> {
    (-half_span..=half_span)
        .step_by(step.max(1))
        .flat_map(|x| {
            let y = amplitude * radians(x).sin();
            [x, y as i32]
        })
        .collect()
}

/// Axis-aligned square of side `2 * half`, clockwise from bottom-left.
#[must_use]
#[rustfmt::skip]
pub fn square(center: Point, half: i32) -> Vec<i32> {
    let (cx, cy) = (center.x, center.y);
    vec![
        cx - half, cy - half,
        cx - half, cy + half,
        cx + half, cy + half,
        cx + half, cy - half,
    ]
}

/// Regular polygon approximating a circle, one vertex every `step` degrees.
///
/// Offsets from the center are truncated toward zero.
#[must_use]
pub fn circle(center: Point, radius: i32, step: usize) -> Vec<i32> {
    (0..360)
        .step_by(step.max(1))
        .flat_map(|deg| {
            let theta = radians(deg);
            let r = f64::from(radius);
            [(r * theta.cos()) as i32 + center.x, (r * theta.sin()) as i32 + center.y]
        })
        .collect()
}

/// Flatten three corners into a vertex list.
#[must_use]
pub fn triangle(a: Point, b: Point, c: Point) -> Vec<i32> {
    vec![a.x, a.y, b.x, b.y, c.x, c.y]
}

/// The stock demo shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapePreset {
    /// One period-ish sine wave, open.
    Sine,
    /// 200x200 square outline.
    Rectangle,
    /// Radius-180 circle outline.
    Circle,
    /// Outlined triangle with a scanline-filled interior.
    FilledTriangle,
}

/// Counts from drawing a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStats {
    /// Outline pass.
    pub outline: CurveStats,
    /// Fill pass, for filled presets.
    pub fill: Option<FillStats>,
}

impl ShapePreset {
    /// All presets, in declaration order.
    pub const ALL: [Self; 4] = [Self::Sine, Self::Rectangle, Self::Circle, Self::FilledTriangle];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::FilledTriangle => "triangle",
        }
    }

    /// The preset's vertex list.
    #[must_use]
    pub fn vertices(self) -> Vec<i32> {
        match self {
            Self::Sine => sine_wave(100.0, 200, 5),
            Self::Rectangle => square(Point::ORIGIN, 100),
            Self::Circle => circle(Point::ORIGIN, 180, 5),
            Self::FilledTriangle => {
                triangle(Point::new(0, 200), Point::new(100, 0), Point::new(-150, -150))
            }
        }
    }

    /// Whether the outline closes back on itself.
    #[must_use]
    pub const fn kind(self) -> ShapeKind {
        match self {
            Self::Sine => ShapeKind::OpenStrip,
            Self::Rectangle | Self::Circle | Self::FilledTriangle => ShapeKind::ClosedLoop,
        }
    }

    /// Line algorithm used when the caller does not pick one.
    #[must_use]
    pub const fn default_algorithm(self) -> LineAlgorithm {
        match self {
            Self::Sine | Self::FilledTriangle => LineAlgorithm::Bresenham,
            Self::Rectangle | Self::Circle => LineAlgorithm::Dda,
        }
    }

    /// Whether the interior is scan-filled after the outline.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::FilledTriangle)
    }

    /// Draw the outline in `config.draw_color`, then the fill if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset's vertices do not form a valid list.
    pub fn draw<S: PixelSink + ?Sized>(
        self,
        config: &RasterConfig,
        algorithm: Option<LineAlgorithm>,
        sink: &mut S,
    ) -> Result<ShapeStats> {
        let coords = self.vertices();
        let vertices = VertexList::new(&coords)?;
        let algorithm = algorithm.unwrap_or_else(|| self.default_algorithm());

        sink.set_color(config.draw_color);
        let outline = draw_polyline(vertices, self.kind(), algorithm, sink);

        let fill = self
            .is_filled()
            .then(|| fill_polygon(vertices, config.viewport, config.fill_color, sink));

        Ok(ShapeStats { outline, fill })
    }
}

impl fmt::Display for ShapePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Self::Sine),
            "rectangle" | "rect" | "square" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "triangle" | "filled-triangle" => Ok(Self::FilledTriangle),
            other => Err(Error::UnknownShape(other.to_string())),
        }
    }
}
