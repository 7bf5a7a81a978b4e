//! Figure output - SVG polylines and JSON point lists.
//!
//! The curve lives in the unit square [-1, 1]². SVG output maps that square
//! onto a `size`×`size` canvas with a margin, flipping y so positive values
//! point up. No axes or ticks are drawn.

use serde::Serialize;

use crate::geometry::{Figure, Point};

/// Fraction of the canvas left empty on each side.
const MARGIN_FRACTION: f64 = 0.05;

/// Stroke styling for a rendered figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub color: String,
    pub width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: "blue".to_string(), width: 2.0 }
    }
}

/// Map a unit-square point onto the canvas.
fn to_canvas(p: Point, size: f64) -> (f64, f64) {
    let margin = size * MARGIN_FRACTION;
    let half = (size - 2.0 * margin) / 2.0;
    let cx = size / 2.0;
    (cx + p.x * half, cx - p.y * half)
}

/// Escape text for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a figure as a standalone SVG document with one polyline.
pub fn figure_to_svg(figure: &Figure, style: &Style, size: f64) -> String {
    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.0}" height="{:.0}"
     viewBox="0 0 {:.2} {:.2}">
  <title>Lissajous figure ({} points)</title>
  <rect width="100%" height="100%" fill="white"/>
"##,
        size, size, size, size, figure.len()
    );

    // Build points string: "x1,y1 x2,y2 x3,y3 ..."
    let points: String = figure
        .iter()
        .map(|&p| {
            let (x, y) = to_canvas(p, size);
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    svg.push_str(&format!(
        r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>
"#,
        points, escape_attr(&style.color), style.width
    ));

    svg.push_str("</svg>\n");
    svg
}

#[derive(Serialize)]
struct JsonFigure<'a> {
    count: usize,
    points: &'a [Point],
}

/// Serialize a figure as `{"count": N, "points": [{"x":..,"y":..}, ...]}`.
pub fn figure_to_json(figure: &Figure) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonFigure {
        count: figure.len(),
        points: figure.points(),
    })
}
