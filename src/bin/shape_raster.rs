//! shape-raster - render a demo shape to PNG.
//!
//! Clears a framebuffer, draws the shape outline with the chosen line
//! algorithm, scan-fills it when the shape is filled, and writes the frame.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, Level};

use shape_raster::output::save_png;
use shape_raster::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "shape-raster", version, about = "Rasterize a demo shape into a PNG")]
struct Cli {
    /// Shape to draw: sine, rectangle, circle or triangle.
    #[arg(short, long, default_value = "triangle", value_parser = parse_shape)]
    shape: ShapePreset,

    /// Line algorithm: dda, bresenham or midpoint (defaults per shape).
    #[arg(short, long, value_parser = parse_algorithm)]
    algorithm: Option<LineAlgorithm>,

    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the viewport width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the viewport height.
    #[arg(long)]
    height: Option<u32>,

    /// Refuse segments the algorithm cannot fully rasterize.
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output PNG path.
    #[arg(short, long, default_value = "shape.png")]
    output: PathBuf,
}

fn parse_shape(s: &str) -> std::result::Result<ShapePreset, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_algorithm(s: &str) -> std::result::Result<LineAlgorithm, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &cli.config {
        Some(path) => RasterConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RasterConfig::default(),
    };
    if let Some(width) = cli.width {
        config.viewport.width = width;
    }
    if let Some(height) = cli.height {
        config.viewport.height = height;
    }
    config.viewport.validate().context("invalid viewport")?;

    let algorithm = cli.algorithm.unwrap_or_else(|| cli.shape.default_algorithm());
    if cli.strict {
        let coords = cli.shape.vertices();
        let vertices = VertexList::new(&coords)?;
        if let Err(err) = validate_curve(vertices, cli.shape.kind(), algorithm) {
            bail!("{} cannot be drawn strictly: {err}", cli.shape);
        }
    }

    let mut fb = Framebuffer::for_viewport(config.viewport)?;
    fb.clear(config.background);

    let stats = {
        let mut sink = FramebufferSink::new(&mut fb, config.viewport)?;
        let stats = cli.shape.draw(&config, Some(algorithm), &mut sink)?;
        if sink.dropped() > 0 {
            info!(dropped = sink.dropped(), "pixels fell outside the viewport");
        }
        stats
    };

    save_png(&fb, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    let covered = fb.count_color(config.fill_color);
    info!(
        shape = %cli.shape,
        %algorithm,
        segments = stats.outline.segments,
        outline_pixels = stats.outline.pixels,
        fill_pixels = stats.fill.map_or(0, |f| f.pixels),
        covered,
        output = %cli.output.display(),
        "frame written"
    );
    Ok(())
}
