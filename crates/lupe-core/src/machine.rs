//! The zoom interaction state machine, independent of any rendering surface.
//!
//! [`step`] is a pure function from a phase and an input to the next phase
//! plus the ordered commands the controller must execute against its
//! surface and event bus. Combinations the transition table does not accept
//! return `None` and must be ignored by the caller.

/// Lifecycle phase of a zoomable element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomPhase {
    #[default]
    Idle,
    /// Click accepted; transform computed, waiting for the next animation
    /// frame.
    Active,
    /// Transform applied, transition toward the overlay running.
    Zooming,
    /// Overlay settled; high-resolution image substituted.
    Zoomed,
    /// Transform cleared, transition back to the thumbnail running.
    ZoomingOut,
}

/// External stimulus fed into the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomInput {
    /// Click on the element's container.
    Toggle,
    /// Global Escape key press.
    Escape,
    /// The animation frame requested by an earlier command has arrived.
    FrameReady,
    /// The CSS transition on the element finished, or was forced to
    /// completion by the timeout.
    TransitionEnd,
}

/// A side effect the controller must perform, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PublishZoomInStart,
    /// Add `is-active` to the container.
    MarkActive,
    /// Force a synchronous layout read between the class write and the
    /// transform write; without an intervening read the host coalesces both
    /// styles and the transition never fires.
    ForceLayout,
    /// Read geometry and the viewport cache, compute the transform.
    ComputeTransform,
    RequestFrame,
    /// Arm the one-shot transition-end watch.
    WatchTransitionEnd,
    /// Arm the global one-shot Escape watch.
    WatchEscape,
    /// Add the page-level overlay class.
    SetPageOverlay,
    /// Add `is-zooming` to the container.
    MarkZooming,
    /// Set explicit width/height on the image so host max-width rules
    /// cannot fight the transform.
    SetExplicitSize,
    ApplyTransform,
    PublishZoomInEnd,
    /// Swap `is-zooming` for `is-zoomed` on the container.
    MarkZoomed,
    /// Strip responsive hints, then point the image at the high-resolution
    /// URL.
    LoadHighRes,
    PublishImageLoaded,
    PublishZoomOutStart,
    UnwatchEscape,
    /// Remove the page-level overlay class.
    ClearPageOverlay,
    /// Remove `is-zoomed` from the container.
    UnmarkZoomed,
    ClearTransform,
    /// Remove `is-active` from the container.
    UnmarkActive,
    PublishZoomOutEnd,
}

/// One step of the transition table.
pub fn step(phase: ZoomPhase, input: ZoomInput) -> Option<(ZoomPhase, Vec<Command>)> {
    use Command::*;

    match (phase, input) {
        (ZoomPhase::Idle, ZoomInput::Toggle) => Some((
            ZoomPhase::Active,
            vec![
                PublishZoomInStart,
                MarkActive,
                ForceLayout,
                ComputeTransform,
                RequestFrame,
                WatchTransitionEnd,
                WatchEscape,
            ],
        )),
        (ZoomPhase::Active, ZoomInput::FrameReady) => Some((
            ZoomPhase::Zooming,
            vec![SetPageOverlay, MarkZooming, SetExplicitSize, ApplyTransform],
        )),
        (ZoomPhase::Zooming, ZoomInput::TransitionEnd) => Some((
            ZoomPhase::Zoomed,
            vec![PublishZoomInEnd, MarkZoomed, LoadHighRes, PublishImageLoaded],
        )),
        (ZoomPhase::Zoomed, ZoomInput::Toggle | ZoomInput::Escape) => Some((
            ZoomPhase::ZoomingOut,
            vec![
                PublishZoomOutStart,
                UnwatchEscape,
                RequestFrame,
                WatchTransitionEnd,
            ],
        )),
        (ZoomPhase::ZoomingOut, ZoomInput::FrameReady) => Some((
            ZoomPhase::ZoomingOut,
            vec![ClearPageOverlay, UnmarkZoomed, ClearTransform],
        )),
        (ZoomPhase::ZoomingOut, ZoomInput::TransitionEnd) => {
            Some((ZoomPhase::Idle, vec![UnmarkActive, PublishZoomOutEnd]))
        }
        _ => None,
    }
}
