//! Scale and translation math for the zoom transition.
//!
//! All quantities are CSS pixels. The scale factor is a single dimensionless
//! multiplier applied to both axes, so the aspect ratio is preserved by
//! construction; the translation moves the thumbnail's centre onto the
//! viewport centre, expressed in the thumbnail's own pre-scale coordinate
//! space so translate-then-scale recentres the image regardless of final
//! size.

use std::fmt;

/// Width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// On-screen bounding box of an element, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A translate-then-scale transform, recomputed on every zoom-in and never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl Transform {
    /// Serialize to a CSS transform string. Translation comes first so the
    /// offset is applied in the element's pre-scale coordinate space.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.dx, self.dy, self.scale
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Compute the uniform scale factor for zooming a thumbnail up toward its
/// full-resolution size within `viewport`, keeping `offset` pixels of
/// margin on each axis.
///
/// The result never exceeds the thumbnail-to-full ratio: an image that
/// already fits the reduced viewport on both axes is shown at native
/// resolution, not upscaled past it. Otherwise the binding axis is chosen
/// by comparing the image aspect ratio against the reduced viewport's.
pub fn compute_scale(full: Size, thumb: Size, viewport: Size, offset: f64) -> f64 {
    let viewport_width = viewport.width - offset;
    let viewport_height = viewport.height - offset;

    let max_scale = full.width / thumb.width;

    if full.width < viewport_width && full.height < viewport_height {
        return max_scale;
    }

    if thumb.aspect_ratio() < viewport_width / viewport_height {
        // Narrower than the viewport: height is the binding constraint.
        (viewport_height / full.height) * max_scale
    } else {
        (viewport_width / full.width) * max_scale
    }
}

/// Translation that moves the thumbnail's centre onto the viewport centre.
pub fn compute_translation(thumb: Rect, viewport: Size) -> (f64, f64) {
    let (cx, cy) = thumb.center();
    (viewport.width / 2.0 - cx, viewport.height / 2.0 - cy)
}

/// Full zoom-in transform for a thumbnail at `thumb` within `viewport`.
pub fn compute_transform(full: Size, thumb: Rect, viewport: Size, offset: f64) -> Transform {
    let (dx, dy) = compute_translation(thumb, viewport);
    Transform {
        dx,
        dy,
        scale: compute_scale(full, thumb.size(), viewport, offset),
    }
}
