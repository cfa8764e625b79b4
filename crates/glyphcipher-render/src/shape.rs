//! Radial shape surface.
//!
//! Points are laid out around a circle, one per cipher value, with each point
//! pushed outward in proportion to its value. A closed cardinal spline joins
//! them into a single smooth outline, written out as a static SVG document.

use std::f64::consts::TAU;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use glyphcipher_core::{value_color, CipherSequence, ShapeParams};

/// Tension of the outline spline; 0 gives the loosest curve.
pub const DEFAULT_TENSION: f64 = 0.0;

/// One vertex of the radial shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub x: f64,
    pub y: f64,
    pub value: i64,
}

/// Lays out one point per value around the canvas center.
pub fn radial_points(sequence: &CipherSequence, params: &ShapeParams) -> Vec<ShapePoint> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let cx = params.width as f64 / 2.0;
    let cy = params.height as f64 / 2.0;
    let angle_step = TAU / sequence.len() as f64;

    sequence
        .iter()
        .map(|(index, value)| {
            let angle = index as f64 * angle_step;
            let scale = params.radius * (1.0 + value as f64 / params.value_scale);
            ShapePoint {
                x: cx + scale * angle.cos(),
                y: cy + scale * angle.sin(),
                value,
            }
        })
        .collect()
}

/// SVG path data for a closed cardinal spline through `points`.
///
/// One point yields a degenerate `M x,y Z`, two points a closed line, and no
/// points an empty string.
pub fn cardinal_closed_path(points: &[ShapePoint], tension: f64) -> String {
    let mut d = String::new();
    match points.len() {
        0 => {}
        1 => {
            let _ = write!(d, "M{},{}Z", fmt(points[0].x), fmt(points[0].y));
        }
        2 => {
            let _ = write!(
                d,
                "M{},{}L{},{}Z",
                fmt(points[0].x),
                fmt(points[0].y),
                fmt(points[1].x),
                fmt(points[1].y)
            );
        }
        n => {
            let k = (1.0 - tension) / 6.0;
            let _ = write!(d, "M{},{}", fmt(points[0].x), fmt(points[0].y));
            for i in 0..n {
                let p0 = points[(i + n - 1) % n];
                let p1 = points[i];
                let p2 = points[(i + 1) % n];
                let p3 = points[(i + 2) % n];
                let c1x = p1.x + k * (p2.x - p0.x);
                let c1y = p1.y + k * (p2.y - p0.y);
                let c2x = p2.x - k * (p3.x - p1.x);
                let c2y = p2.y - k * (p3.y - p1.y);
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt(c1x),
                    fmt(c1y),
                    fmt(c2x),
                    fmt(c2y),
                    fmt(p2.x),
                    fmt(p2.y)
                );
            }
            d.push('Z');
        }
    }
    d
}

/// Renders the shape as a standalone SVG document.
pub fn shape_svg(sequence: &CipherSequence, params: &ShapeParams) -> String {
    let points = radial_points(sequence, params);
    let path = cardinal_closed_path(&points, DEFAULT_TENSION);
    let (min, max) = sequence.bounds().unwrap_or((0, 0));

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = params.width,
        h = params.height
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        params.width, params.height, params.background
    );
    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(
        svg,
        r#"    <linearGradient id="shapeGradient" x1="0%" y1="0%" x2="100%" y2="100%">"#
    );
    let _ = writeln!(
        svg,
        r#"      <stop offset="0%" stop-color="{}"/>"#,
        params.gradient_from
    );
    let _ = writeln!(
        svg,
        r#"      <stop offset="100%" stop-color="{}"/>"#,
        params.gradient_to
    );
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(svg, "  </defs>");

    if !path.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="url(#shapeGradient)" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
            path,
            params.stroke,
            fmt(params.stroke_width),
            fmt(params.opacity)
        );
    }

    for point in &points {
        let color = value_color(point.value as f64, min as f64, max as f64);
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt(point.x),
            fmt(point.y),
            fmt(params.particle_radius),
            color.to_css()
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn fmt(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seq(values: Vec<i64>) -> CipherSequence {
        CipherSequence::new(values)
    }

    #[test]
    fn test_radial_layout() {
        let params = ShapeParams::default();
        let points = radial_points(&seq(vec![0, 100]), &params);
        assert_eq!(points.len(), 2);
        // angle 0, unscaled radius
        assert!((points[0].x - 450.0).abs() < 1e-9);
        assert!((points[0].y - 200.0).abs() < 1e-9);
        // angle pi, radius doubled by value 100
        assert!((points[1].x - 0.0).abs() < 1e-9);
        assert!((points[1].y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence_has_no_points() {
        assert!(radial_points(&seq(vec![]), &ShapeParams::default()).is_empty());
        assert_eq!(cardinal_closed_path(&[], 0.0), "");
    }

    #[test]
    fn test_degenerate_paths() {
        let p = |x, y| ShapePoint { x, y, value: 0 };
        assert_eq!(cardinal_closed_path(&[p(1.0, 2.0)], 0.0), "M1,2Z");
        assert_eq!(
            cardinal_closed_path(&[p(1.0, 2.0), p(3.5, 4.0)], 0.0),
            "M1,2L3.5,4Z"
        );
    }

    #[test]
    fn test_closed_spline_passes_through_points() {
        let params = ShapeParams::default();
        let points = radial_points(&seq(vec![1, 2, 3, 4]), &params);
        let path = cardinal_closed_path(&points, DEFAULT_TENSION);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('C').count(), 4);
        for point in &points {
            assert!(path.contains(&format!("{},{}", fmt(point.x), fmt(point.y))));
        }
    }

    #[test]
    fn test_full_tension_is_polygon() {
        let p = |x, y| ShapePoint { x, y, value: 0 };
        let path = cardinal_closed_path(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)], 1.0);
        assert_eq!(path, "M0,0C0,0,10,0,10,0C10,0,10,10,10,10C10,10,0,0,0,0Z");
    }

    #[test]
    fn test_svg_document() {
        let svg = shape_svg(&seq(vec![1, 5, 3]), &ShapeParams::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("rgb(0, 255, 255)"));
        assert!(svg.contains("rgb(255, 0, 0)"));
        assert!(svg.contains(r##"stroke="#1f3a93""##));
        assert!(svg.contains(r##"stop-color="#3498db""##));
    }

    #[test]
    fn test_svg_for_empty_sequence() {
        let svg = shape_svg(&seq(vec![]), &ShapeParams::default());
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_fmt() {
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(1.25), "1.25");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(2.0004), "2");
    }
}
