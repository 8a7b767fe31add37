//! SVG building and rasterization using resvg/usvg.
//!
//! Icons are described as a small SVG document built from a
//! [`CameraGlyph`] and then rasterized into an [`RgbaImage`].

use std::fmt::Write as _;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::{Color, Palette};
use crate::error::{Error, Result};
use crate::glyph::{Bounds, CameraGlyph};

// ============================================================================
// SVG Markup
// ============================================================================

/// Builds the SVG document for a glyph.
///
/// Outlines are drawn inside their bounding boxes, so a stroke of width `w`
/// on a box covering pixels `x0..=x1` paints exactly `x0..x0 + w` and
/// `x1 + 1 - w..=x1`. Shapes that collapse to nothing at tiny sizes are
/// omitted.
pub fn glyph_svg(glyph: &CameraGlyph, palette: &Palette, antialias: bool) -> String {
    let size = glyph.size;
    let rendering = if antialias {
        "geometricPrecision"
    } else {
        "crispEdges"
    };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" shape-rendering="{rendering}">"#
    );

    push_ellipse(&mut svg, &glyph.badge, ShapeStyle::Fill(palette.background));

    let stroke = ShapeStyle::Stroke(palette.foreground, glyph.stroke_width as f64);
    push_rect(&mut svg, &glyph.body, stroke);
    push_ellipse(&mut svg, &glyph.lens, stroke);

    svg.push_str("</svg>");
    svg
}

#[derive(Debug, Clone, Copy)]
enum ShapeStyle {
    Fill(Color),
    Stroke(Color, f64),
}

impl ShapeStyle {
    /// Half the stroke width, i.e. how far the shape's path is pulled
    /// inside its bounds.
    fn inset(&self) -> f64 {
        match self {
            ShapeStyle::Fill(_) => 0.0,
            ShapeStyle::Stroke(_, width) => width / 2.0,
        }
    }

    fn attributes(&self) -> String {
        match self {
            ShapeStyle::Fill(color) => format!(r#"fill="{}""#, color.to_hex()),
            ShapeStyle::Stroke(color, width) => format!(
                r#"fill="none" stroke="{}" stroke-width="{}""#,
                color.to_hex(),
                width
            ),
        }
    }
}

fn push_rect(svg: &mut String, bounds: &Bounds, style: ShapeStyle) {
    let inset = style.inset();
    let width = bounds.span_x() - 2.0 * inset;
    let height = bounds.span_y() - 2.0 * inset;
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let _ = write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
        bounds.x0 + inset,
        bounds.y0 + inset,
        width,
        height,
        style.attributes()
    );
}

fn push_ellipse(svg: &mut String, bounds: &Bounds, style: ShapeStyle) {
    let inset = style.inset();
    let rx = bounds.span_x() / 2.0 - inset;
    let ry = bounds.span_y() / 2.0 - inset;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let (cx, cy) = bounds.center();
    let _ = write!(
        svg,
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {}/>"#,
        cx,
        cy,
        rx,
        ry,
        style.attributes()
    );
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders an SVG string to an RGBA image at the specified size.
///
/// The SVG is scaled to fit within `size x size` pixels while preserving
/// aspect ratio (the larger dimension will be `size`).
pub fn render_svg(svg_data: &str, size: u32) -> Result<RgbaImage> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts).map_err(|err| {
        tracing::debug!("svg parse failed at {size}px: {err}");
        Error::Rasterize { size }
    })?;

    let svg_size = tree.size();
    let scale = (size as f32) / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).ceil() as u32;
    let height = (svg_size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(Error::Rasterize { size })?;
    let transform = Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Rasterizes a glyph onto a transparent `size x size` canvas.
pub fn render_glyph(glyph: &CameraGlyph, palette: &Palette, antialias: bool) -> Result<RgbaImage> {
    let svg = glyph_svg(glyph, palette, antialias);
    render_svg(&svg, glyph.size)
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        // tiny_skia uses premultiplied alpha, we need to unpremultiply
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BADGE: [u8; 4] = [102, 126, 234, 255];

    fn mdpi() -> RgbaImage {
        render_glyph(&CameraGlyph::for_size(48), &Palette::default(), false).unwrap()
    }

    #[test]
    fn markup_contains_all_shapes() {
        let svg = glyph_svg(&CameraGlyph::for_size(48), &Palette::default(), false);
        assert!(svg.contains(r#"shape-rendering="crispEdges""#));
        assert!(svg.contains(r##"<ellipse cx="24" cy="24" rx="24" ry="24" fill="#667eea"/>"##));
        assert!(svg.contains(
            r##"<rect x="11" y="15" width="27" height="19" fill="none" stroke="#ffffff" stroke-width="2"/>"##
        ));
        assert_eq!(svg.matches("<ellipse").count(), 2);
    }

    #[test]
    fn antialias_switches_rendering_hint() {
        let svg = glyph_svg(&CameraGlyph::for_size(48), &Palette::default(), true);
        assert!(svg.contains(r#"shape-rendering="geometricPrecision""#));
    }

    #[test]
    fn canvas_is_square_with_transparent_corners() {
        let img = mdpi();
        assert_eq!(img.dimensions(), (48, 48));
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn badge_and_outlines_use_palette() {
        let img = mdpi();

        // Inside the badge, left of the camera body.
        assert_eq!(img.get_pixel(3, 24).0, BADGE);
        // Inside the lens ring.
        assert_eq!(img.get_pixel(24, 24).0, BADGE);
        // Left edge of the body outline.
        assert_eq!(img.get_pixel(10, 24).0, WHITE);
        assert_eq!(img.get_pixel(11, 24).0, WHITE);
        // Just inside the body outline, outside the lens.
        assert_eq!(img.get_pixel(13, 24).0, BADGE);
        // Top edge of the body outline.
        assert_eq!(img.get_pixel(24, 14).0, WHITE);
        // Lens ring on the horizontal axis.
        assert_eq!(img.get_pixel(17, 24).0, WHITE);
    }

    #[test]
    fn tiny_sizes_render() {
        for size in 1..8 {
            let img = render_glyph(&CameraGlyph::for_size(size), &Palette::default(), false).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn invalid_markup_is_a_rasterize_error() {
        let err = render_svg("<not-svg", 16).unwrap_err();
        assert!(matches!(err, Error::Rasterize { size: 16 }));
    }

    #[test]
    fn unpremultiply_restores_color() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(51, 0, 0, 51), (255, 0, 0, 51));
        assert_eq!(unpremultiply(10, 20, 30, 255), (10, 20, 30, 255));
    }
}
