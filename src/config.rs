//! Viewport and rendering configuration.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: u32 = 1280;
/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: u32 = 720;

/// Size of the centered screen-space domain.
///
/// Points with `x` in `[-width/2, width/2)` and `y` in `[-height/2, height/2)`
/// are visible; the same dimensions are the divisors for NDC normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or odd (the centered
    /// domain needs equal halves) or too large for signed coordinates.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Check the dimension invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when they do not hold.
    pub fn validate(&self) -> Result<()> {
        let ok = |d: u32| d > 0 && d % 2 == 0 && i32::try_from(d).is_ok();
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Half the width, the magnitude of the leftmost visible column.
    #[must_use]
    pub const fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Half the height; scanlines run over `[-half_height, half_height)`.
    #[must_use]
    pub const fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Whether a screen-space point falls inside the visible domain.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        let hw = self.half_width();
        let hh = self.half_height();
        p.x >= -hw && p.x < hw && p.y >= -hh && p.y < hh
    }

    /// Normalize a screen-space point to device coordinates.
    ///
    /// Uses `2 * c / dimension` per axis; visible points land in `[-1, 1)`.
    #[must_use]
    pub fn to_ndc(&self, p: Point) -> [f32; 2] {
        [
            2.0 * p.x as f32 / self.width as f32,
            2.0 * p.y as f32 / self.height as f32,
        ]
    }

    /// Map a screen-space point to a top-left-origin `(column, row)`.
    ///
    /// Returns `None` for points outside the visible domain.
    #[must_use]
    pub fn to_device(&self, p: Point) -> Option<(u32, u32)> {
        if !self.contains(p) {
            return None;
        }
        let column = p.x + self.half_width();
        let row = self.half_height() - 1 - p.y;
        Some((column as u32, row as u32))
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Viewport dimensions.
    #[serde(default)]
    pub viewport: Viewport,

    /// Outline color.
    #[serde(default = "default_draw_color")]
    pub draw_color: Rgba,

    /// Scanline fill color.
    #[serde(default = "default_fill_color")]
    pub fill_color: Rgba,

    /// Clear color for framebuffer targets.
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_draw_color() -> Rgba {
    Rgba::DRAW
}
fn default_fill_color() -> Rgba {
    Rgba::FILL
}
fn default_background() -> Rgba {
    Rgba::BLACK
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            draw_color: default_draw_color(),
            fill_color: default_fill_color(),
            background: default_background(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::InvalidDimensions`] if the viewport is unusable.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.viewport.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
