//! Rasterization Claims - falsifiable end-to-end checks.
//!
//! Each test states one claim about the public API and tries to refute it.
//!
//! Run: cargo test --test rasterization_claims_test

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::io::Write;

use approx::assert_relative_eq;
use proptest::prelude::*;
use shape_raster::output::{png_bytes, save_png};
use shape_raster::prelude::*;
use shape_raster::render::{dda, edge_crossing, scanline_intersections};

const TRIANGLE: [i32; 6] = [0, 200, 100, 0, -150, -150];

fn record<F: FnOnce(&mut PixelRecorder)>(f: F) -> PixelRecorder {
    let mut rec = PixelRecorder::new();
    f(&mut rec);
    rec
}

// ============================================================================
// LINE RASTERIZER
// ============================================================================

/// Claim 1: horizontal and vertical segments cover exactly the axis points.
#[test]
fn claim_01_axis_aligned_segments_are_exact() {
    let expected_h: Vec<_> = (-50..=50).map(|x| Point::new(x, 12)).collect();
    let expected_v: Vec<_> = (-30..=30).map(|y| Point::new(-7, y)).collect();

    for algorithm in LineAlgorithm::ALL {
        let rec = record(|s| {
            algorithm.rasterize(Point::new(-50, 12), Point::new(50, 12), s);
        });
        assert_eq!(rec.points(), expected_h, "{algorithm} horizontal");
    }
    for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
        let rec = record(|s| {
            algorithm.rasterize(Point::new(-7, -30), Point::new(-7, 30), s);
        });
        assert_eq!(rec.points(), expected_v, "{algorithm} vertical");
    }
}

/// Claim 2: a zero-length DDA segment emits exactly one pixel.
#[test]
fn claim_02_zero_length_dda_single_pixel() {
    let p = Point::new(640, -360);
    let rec = record(|s| {
        assert_eq!(dda(p, p, s), 1);
    });
    assert_eq!(rec.points(), vec![p]);
}

/// Claim 3: 45 degree lines are the literal integer diagonal.
#[test]
fn claim_03_diagonal_is_literal() {
    let expected: Vec<_> = (0..=64).map(|i| Point::new(-32 + i, -32 + i)).collect();
    for algorithm in [LineAlgorithm::Bresenham, LineAlgorithm::Midpoint] {
        let rec = record(|s| {
            algorithm.rasterize(Point::new(-32, -32), Point::new(32, 32), s);
        });
        assert_eq!(rec.points(), expected, "{algorithm}");
    }
}

// ============================================================================
// CURVE COMPOSER
// ============================================================================

/// Claim 4: closed loops draw n segments, open strips n - 1.
#[test]
fn claim_04_segment_counts() {
    for preset in ShapePreset::ALL {
        let coords = preset.vertices();
        let list = VertexList::new(&coords).unwrap();
        let n = list.len();

        let closed = draw_curve(list, ShapeKind::ClosedLoop, &LineAlgorithm::Dda, &mut PixelRecorder::new());
        let open = draw_curve(list, ShapeKind::OpenStrip, &LineAlgorithm::Dda, &mut PixelRecorder::new());

        assert_eq!(closed.segments, n, "{preset}");
        assert_eq!(open.segments, n - 1, "{preset}");
    }
}

/// Claim 5: malformed vertex lists are rejected before any drawing.
#[test]
fn claim_05_malformed_lists_rejected() {
    assert!(matches!(VertexList::new(&[1, 2, 3]), Err(Error::OddVertexCount { len: 3 })));
    assert!(matches!(VertexList::new(&[1, 2]), Err(Error::TooFewPoints { points: 1 })));
    assert!(VertexList::try_from(&[1, 2, 3, 4][..]).is_ok());
}

/// Claim 6: one bad shape does not stop the next from drawing.
#[test]
fn claim_06_failures_are_local() {
    let shapes: [&[i32]; 3] = [&[0, 0, 10, 10], &[5], &TRIANGLE];
    let mut rec = PixelRecorder::new();
    let mut drawn = 0;
    for coords in shapes {
        if let Ok(list) = VertexList::new(coords) {
            draw_curve(list, ShapeKind::ClosedLoop, &LineAlgorithm::Bresenham, &mut rec);
            drawn += 1;
        }
    }
    assert_eq!(drawn, 2);
    assert!(rec.points().contains(&Point::new(-150, -150)));
}

/// Claim 7: repeated calls are bit-identical.
#[test]
fn claim_07_deterministic() {
    let list = VertexList::new(&TRIANGLE).unwrap();
    let draw = || {
        record(|s| {
            draw_curve(list, ShapeKind::ClosedLoop, &LineAlgorithm::Dda, s);
            fill_polygon(list, Viewport::default(), Rgba::FILL, s);
        })
        .into_pixels()
    };
    assert_eq!(draw(), draw());
}

// ============================================================================
// POLYGON SCAN FILLER
// ============================================================================

/// Claim 8: the reference triangle fills row 0 between its two crossings.
#[test]
fn claim_08_triangle_row_zero() {
    let list = VertexList::new(&TRIANGLE).unwrap();
    let xs = scanline_intersections(list, 0);
    assert_eq!(xs, BTreeSet::from([-86, 100]));

    let rec = record(|s| {
        fill_polygon(list, Viewport::default(), Rgba::FILL, s);
    });
    let row: BTreeSet<_> = rec.points().into_iter().filter(|p| p.y == 0).map(|p| p.x).collect();
    assert_eq!(row.first(), Some(&-86));
    assert_eq!(row.last(), Some(&99));
    assert_eq!(row.len(), 186);
}

/// Claim 9: an edge counts at its upper end and not at its lower end.
#[test]
fn claim_09_half_open_edge() {
    let (a, b) = (Point::new(-40, -25), Point::new(60, 75));
    assert!(edge_crossing(a, b, 75).is_some());
    assert!(edge_crossing(a, b, -25).is_none());
    assert!(edge_crossing(b, a, 75).is_some());
    assert!(edge_crossing(b, a, -25).is_none());
}

/// Claim 10: a smaller viewport limits the rows that get swept.
#[test]
fn claim_10_viewport_bounds_the_sweep() {
    let list = VertexList::new(&TRIANGLE).unwrap();
    let small = Viewport::new(400, 100).unwrap();
    let rec = record(|s| {
        fill_polygon(list, small, Rgba::FILL, s);
    });
    assert!(rec.points().iter().all(|p| (-50..50).contains(&p.y)));
}

// ============================================================================
// SINKS AND OUTPUT
// ============================================================================

/// Claim 11: NDC normalization follows 2 * c / dimension.
#[test]
fn claim_11_ndc_normalization() {
    let viewport = Viewport::default();
    let mut buf = PointBuffer::new(viewport);
    LineAlgorithm::Bresenham.rasterize(Point::new(-640, 0), Point::new(-638, 0), &mut buf);

    let v = buf.vertices();
    assert_eq!(v.len(), 3);
    assert_relative_eq!(v[0].x, -1.0);
    assert_relative_eq!(v[2].x, 2.0 * -638.0 / 1280.0);
    assert_relative_eq!(v[1].y, 0.0);
}

/// Claim 12: a filled frame renders into a framebuffer and encodes as PNG.
#[test]
fn claim_12_frame_to_png() {
    let config = RasterConfig::default();
    let mut fb = Framebuffer::for_viewport(config.viewport).unwrap();
    fb.clear(config.background);

    let stats = {
        let mut sink = FramebufferSink::new(&mut fb, config.viewport).unwrap();
        ShapePreset::FilledTriangle.draw(&config, None, &mut sink).unwrap()
    };

    let fill = stats.fill.unwrap();
    assert!(fill.pixels > 0);
    // Fill spans are disjoint, on-screen and painted after the outline.
    assert_eq!(fb.count_color(config.fill_color), fill.pixels);
    // Screen (0, 0) is column 640, row 359; it is interior, so filled.
    assert_eq!(fb.get_pixel(640, 359), Some(config.fill_color));
    // The apex vertex is outline-only.
    assert_eq!(fb.get_pixel(640, 359 - 200), Some(config.draw_color));

    let bytes = png_bytes(&fb).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triangle.png");
    save_png(&fb, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

/// Claim 13: configuration files drive viewport and colors.
#[test]
fn claim_13_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "viewport: {{ width: 320, height: 240 }}").unwrap();
    writeln!(file, "fill_color: {{ r: 200, g: 10, b: 10 }}").unwrap();

    let config = RasterConfig::load(file.path()).unwrap();
    assert_eq!(config.viewport, Viewport::new(320, 240).unwrap());
    assert_eq!(config.fill_color, Rgba::rgb(200, 10, 10));
    assert_eq!(config.draw_color, Rgba::DRAW);

    assert!(matches!(
        RasterConfig::load(dir_missing()),
        Err(Error::ConfigNotFound(_))
    ));
}

fn dir_missing() -> std::path::PathBuf {
    tempfile::tempdir().unwrap().path().join("absent.yaml")
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every fill pixel on row y lies in [min crossing, max crossing).
    #[test]
    fn prop_fill_within_crossings(
        coords in prop::collection::vec(-300i32..300, 6..16)
    ) {
        let coords = &coords[..coords.len() / 2 * 2];
        let list = VertexList::new(coords).unwrap();
        let mut rec = PixelRecorder::new();
        let stats = fill_polygon(list, Viewport::default(), Rgba::FILL, &mut rec);
        prop_assert_eq!(stats.pixels, rec.len());

        for p in rec.points() {
            let xs = scanline_intersections(list, p.y);
            let (lo, hi) = (*xs.first().unwrap(), *xs.last().unwrap());
            prop_assert!(p.x >= lo && p.x < hi, "{} outside [{}, {})", p, lo, hi);
        }
    }

    /// Closed-loop outlines pass through every vertex.
    #[test]
    fn prop_outline_visits_vertices(
        coords in prop::collection::vec(-300i32..300, 4..20)
    ) {
        let coords = &coords[..coords.len() / 2 * 2];
        let list = VertexList::new(coords).unwrap();
        for algorithm in [LineAlgorithm::Dda, LineAlgorithm::Bresenham] {
            let mut rec = PixelRecorder::new();
            draw_curve(list, ShapeKind::ClosedLoop, &algorithm, &mut rec);
            let seen: BTreeSet<_> = rec.points().into_iter().collect();
            for v in list.points() {
                prop_assert!(seen.contains(&v), "{} missed vertex {}", algorithm, v);
            }
        }
    }
}
