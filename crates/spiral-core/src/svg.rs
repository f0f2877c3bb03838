//! SVG output for display lists.
//!
//! Each command becomes one `<rect>` carrying its transform as
//! `matrix(a b c d tx ty)`, which uses the same coefficient order as
//! [`AffineMatrix`]. Strokes are marked `non-scaling-stroke` so line widths stay in
//! viewport units however much a square has been shrunk.

use std::fmt;

use crate::color::Color;
use crate::display_list::{Command, DisplayList};
use crate::matrix::AffineMatrix;
use crate::scene::Rect;

/// Borrowing wrapper that formats a [`DisplayList`] as an SVG document.
pub struct SvgDocument<'a> {
    list: &'a DisplayList,
}

impl<'a> SvgDocument<'a> {
    pub fn new(list: &'a DisplayList) -> Self {
        Self { list }
    }
}

/// Render a display list to an SVG string.
pub fn to_svg_string(list: &DisplayList) -> String {
    SvgDocument::new(list).to_string()
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let viewport = self.list.viewport;
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.3}\" height=\"{:.3}\" viewBox=\"0 0 {:.3} {:.3}\">",
            viewport.width, viewport.height, viewport.width, viewport.height
        )?;
        for command in &self.list.commands {
            match command {
                Command::FillRect {
                    rect,
                    color,
                    transform,
                } => {
                    write!(f, "  ")?;
                    write_rect(f, rect, 0.0)?;
                    write!(f, " transform=\"{}\"", svg_matrix(transform))?;
                    write!(f, " fill=\"{}\"", color.to_hex())?;
                    write_opacity(f, "fill-opacity", color)?;
                    writeln!(f, "/>")?;
                }
                Command::StrokeRoundedRect {
                    rrect,
                    stroke,
                    color,
                    transform,
                } => {
                    write!(f, "  ")?;
                    write_rect(f, &rrect.rect, rrect.radius)?;
                    write!(f, " transform=\"{}\"", svg_matrix(transform))?;
                    write!(
                        f,
                        " fill=\"none\" stroke=\"{}\" stroke-width=\"{:.3}\"",
                        color.to_hex(),
                        stroke.width
                    )?;
                    write_opacity(f, "stroke-opacity", color)?;
                    writeln!(f, " vector-effect=\"non-scaling-stroke\"/>")?;
                }
            }
        }
        writeln!(f, "</svg>")
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, rect: &Rect, radius: f64) -> fmt::Result {
    write!(
        f,
        "<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\"",
        rect.x, rect.y, rect.w, rect.h
    )?;
    if radius > 0.0 {
        write!(f, " rx=\"{:.3}\" ry=\"{:.3}\"", radius, radius)?;
    }
    Ok(())
}

fn write_opacity(f: &mut fmt::Formatter<'_>, attribute: &str, color: &Color) -> fmt::Result {
    if color.opacity() < 1.0 {
        write!(f, " {}=\"{:.3}\"", attribute, color.opacity())?;
    }
    Ok(())
}

/// `matrix(a b c d tx ty)` attribute value.
pub fn svg_matrix(m: &AffineMatrix) -> String {
    format!(
        "matrix({} {} {} {} {} {})",
        m.a, m.b, m.c, m.d, m.tx, m.ty
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::Viewport;
    use crate::painter::Painter;
    use crate::scene::{RoundedRect, Stroke};

    fn sample_list() -> DisplayList {
        let mut painter = Painter::begin_frame(Viewport {
            width: 100.0,
            height: 50.0,
        });
        painter.fill_rect(
            Rect {
                x: 0.0,
                y: 0.0,
                w: 100.0,
                h: 50.0,
            },
            Color::from_srgba_u8([0x0b, 0x12, 0x20, 0xff]),
        );
        painter.stroke_rounded_rect(
            RoundedRect {
                rect: Rect::square(10.0),
                radius: 2.0,
            },
            Stroke { width: 1.5 },
            Color::orange(),
            AffineMatrix::new(0.5, 0.5, -0.5, 0.5, 5.0, 0.0),
        );
        painter.finish()
    }

    #[test]
    fn test_svg_matrix() {
        assert_eq!(svg_matrix(&AffineMatrix::identity()), "matrix(1 0 0 1 0 0)");
        assert_eq!(
            svg_matrix(&AffineMatrix::new(0.5, 0.5, -0.5, 0.5, 50.0, 0.0)),
            "matrix(0.5 0.5 -0.5 0.5 50 0)"
        );
    }

    #[test]
    fn test_document_structure() {
        let svg = to_svg_string(&sample_list());
        let lines: Vec<_> = svg.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("<svg "));
        assert!(lines[1].contains("viewBox=\"0 0 100.000 50.000\""));
        assert_eq!(
            lines[2],
            "  <rect x=\"0.000\" y=\"0.000\" width=\"100.000\" height=\"50.000\" transform=\"matrix(1 0 0 1 0 0)\" fill=\"#0b1220\"/>"
        );
        assert_eq!(
            lines[3],
            "  <rect x=\"0.000\" y=\"0.000\" width=\"10.000\" height=\"10.000\" rx=\"2.000\" ry=\"2.000\" transform=\"matrix(0.5 0.5 -0.5 0.5 5 0)\" fill=\"none\" stroke=\"#ff9500\" stroke-width=\"1.500\" vector-effect=\"non-scaling-stroke\"/>"
        );
        assert_eq!(lines[4], "</svg>");
    }

    #[test]
    fn test_translucent_colors_get_opacity() {
        let mut painter = Painter::begin_frame(Viewport::default());
        painter.fill_rect(Rect::square(1.0), Color::from_srgba_u8([255, 255, 255, 0]));
        let svg = to_svg_string(&painter.finish());
        assert!(svg.contains("fill-opacity=\"0.000\""));
    }
}
