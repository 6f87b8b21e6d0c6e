//! The rendering capabilities injected into the controller.

use crate::element::ElementId;
use crate::geometry::{Rect, Size, Transform};

/// CSS class toggled on a zoomable container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssClass {
    Active,
    Zooming,
    Zoomed,
}

impl CssClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "is-active",
            Self::Zooming => "is-zooming",
            Self::Zoomed => "is-zoomed",
        }
    }
}

/// Page-level class applied while the overlay is up; hosts use it to
/// disable background scrolling and interaction.
pub const PAGE_OVERLAY_CLASS: &str = "zoom-overlay-active";

/// Capabilities the controller needs from the host's rendering layer.
///
/// A DOM host maps these onto element class lists, inline styles,
/// `getBoundingClientRect`, `requestAnimationFrame`, and one-shot
/// `transitionend`/`keydown` listeners. The transform and the explicit
/// dimensions target the thumbnail image; classes target its container.
/// The test suite and the CLI implement the trait with an in-memory
/// recorder.
pub trait RenderSurface {
    /// Current on-screen bounding box of the element's thumbnail image.
    fn thumbnail_rect(&self, id: ElementId) -> Rect;

    fn add_class(&mut self, id: ElementId, class: CssClass);
    fn remove_class(&mut self, id: ElementId, class: CssClass);

    /// Toggle [`PAGE_OVERLAY_CLASS`] on the page.
    fn set_page_overlay(&mut self, active: bool);

    /// Force a synchronous layout read on the element.
    fn force_layout(&mut self, id: ElementId);

    /// Set explicit width/height attributes on the image.
    fn set_explicit_size(&mut self, id: ElementId, size: Size);

    fn apply_transform(&mut self, id: ElementId, transform: &Transform);
    fn clear_transform(&mut self, id: ElementId);

    /// Remove `srcset`/`sizes` so the explicit high-resolution URL wins
    /// over responsive-image resolution.
    fn strip_responsive_hints(&mut self, id: ElementId);

    /// Point the image at the high-resolution asset.
    fn set_image_source(&mut self, id: ElementId, url: &str);

    /// Schedule one animation frame; the host calls the controller's
    /// `handle_frame` when it arrives.
    fn request_frame(&mut self);

    /// Arm a one-shot transition-end watch on the element; the host calls
    /// `handle_transition_end` when it fires.
    fn watch_transition_end(&mut self, id: ElementId);

    /// Arm or release the global one-shot Escape watch; while armed the
    /// host routes Escape presses to `handle_escape`.
    fn watch_escape(&mut self, armed: bool);
}
