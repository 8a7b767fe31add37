//! Geometry of the camera glyph.
//!
//! All shapes are expressed as inclusive pixel bounding boxes: a box from
//! `(0, 0)` to `(47, 47)` covers 48 pixels in each direction. The fractions
//! and floor truncation below are what give the icon its look; changing them
//! changes the output pixels.

/// Relative width of the camera body.
const BODY_WIDTH: f64 = 0.6;

/// Relative height of the camera body.
const BODY_HEIGHT: f64 = 0.45;

/// Relative radius of the lens.
const LENS_RADIUS: f64 = 0.15;

/// Minimum outline width in pixels.
const MIN_STROKE: u32 = 2;

// ============================================================================
// Bounds
// ============================================================================

/// An inclusive bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Distance between the left and right edge coordinates.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Distance between the top and bottom edge coordinates.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Width of the pixel area covered by the box (`width + 1`).
    pub fn span_x(&self) -> f64 {
        self.width() + 1.0
    }

    /// Height of the pixel area covered by the box (`height + 1`).
    pub fn span_y(&self) -> f64 {
        self.height() + 1.0
    }

    /// Center of the covered pixel area.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x0 + self.span_x() / 2.0,
            self.y0 + self.span_y() / 2.0,
        )
    }
}

// ============================================================================
// CameraGlyph
// ============================================================================

/// Resolved shapes for a launcher icon of a given size.
///
/// # Example
///
/// ```
/// use mipmap_icons::CameraGlyph;
///
/// let glyph = CameraGlyph::for_size(48);
/// assert_eq!(glyph.stroke_width, 2);
/// assert_eq!(glyph.body.width(), 28.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraGlyph {
    /// Canvas edge length.
    pub size: u32,
    /// Circular badge inscribed in the canvas.
    pub badge: Bounds,
    /// Camera body outline.
    pub body: Bounds,
    /// Lens outline.
    pub lens: Bounds,
    /// Lens radius before pixel snapping.
    pub lens_radius: f64,
    /// Outline width shared by the body and lens.
    pub stroke_width: u32,
}

impl CameraGlyph {
    /// Computes the glyph layout for a `size x size` canvas.
    pub fn for_size(size: u32) -> Self {
        let extent = size as f64;
        let center = (size / 2) as f64;

        let badge_edge = size.saturating_sub(1) as f64;
        let badge = Bounds::new(0.0, 0.0, badge_edge, badge_edge);

        let half_w = (extent * BODY_WIDTH / 2.0).floor();
        let half_h = (extent * BODY_HEIGHT / 2.0).floor();
        let body = Bounds::new(
            center - half_w,
            center - half_h,
            center + half_w,
            center + half_h,
        );

        let lens_radius = extent * LENS_RADIUS;
        let lens = Bounds::new(
            center - lens_radius,
            center - lens_radius,
            center + lens_radius,
            center + lens_radius,
        );

        Self {
            size,
            badge,
            body,
            lens,
            lens_radius,
            stroke_width: stroke_width(size),
        }
    }

    /// The integer center coordinate shared by the body and lens.
    pub fn center(&self) -> u32 {
        self.size / 2
    }
}

/// Outline width for a canvas of the given size: `max(2, size / 30)`.
pub fn stroke_width(size: u32) -> u32 {
    (size / 30).max(MIN_STROKE)
}
