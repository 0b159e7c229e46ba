use anyhow::{Context, Result};
use geo::{BoundingRect, LineString};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Stroke appearance and padding for SVG output
#[derive(Debug, Clone)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
    /// Padding around the path bounds, in turtle units
    pub margin: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 1.0,
            margin: 10.0,
        }
    }
}

/// Render a turtle path as a standalone SVG document
///
/// Turtle space has +y pointing north, SVG has +y pointing down, so y is
/// negated on output. The view box hugs the path plus `style.margin`.
pub fn render_svg(path: &LineString<f64>, style: &SvgStyle) -> String {
    let (min_x, min_y, width, height) = match path.bounding_rect() {
        Some(rect) => (
            rect.min().x - style.margin,
            flip_y(rect.max().y) - style.margin,
            rect.width() + 2.0 * style.margin,
            rect.height() + 2.0 * style.margin,
        ),
        None => (0.0, 0.0, 0.0, 0.0),
    };

    let mut points = String::new();
    for (i, c) in path.coords().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        // writing to a String cannot fail
        let _ = write!(points, "{:.3},{:.3}", c.x, flip_y(c.y));
    }

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        doc,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.3} {:.3} {:.3} {:.3}\">",
        min_x, min_y, width, height
    );
    let _ = writeln!(
        doc,
        "  <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" points=\"{}\"/>",
        style.stroke, style.stroke_width, points
    );
    doc.push_str("</svg>\n");
    doc
}

// subtracting from zero keeps the origin from printing as -0.000
fn flip_y(y: f64) -> f64 {
    0.0 - y
}

/// Write a turtle path to an SVG file
pub fn write_svg(output: &Path, path: &LineString<f64>, style: &SvgStyle) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create SVG file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(render_svg(path, style).as_bytes())?;
    writer.flush()?;

    Ok(())
}
