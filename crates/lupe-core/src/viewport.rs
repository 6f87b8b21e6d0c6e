//! Viewport state shared by scale computation: dimensions plus the last
//! scroll position, refreshed on debounced resize and frame-coalesced
//! scroll events.

use tracing::debug;

use crate::consts::RESIZE_DEBOUNCE_MS;
use crate::geometry::Size;

/// Snapshot of the viewport dimensions and scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub last_scroll_y: f64,
}

impl ViewportState {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Caches the viewport state between events.
///
/// Resize events are debounced over caller-supplied millisecond timestamps:
/// a pending update only lands via [`poll`](Self::poll) once
/// [`RESIZE_DEBOUNCE_MS`] elapse with no further resize event, so only the
/// last event of a burst takes effect. Scroll events are coalesced to at
/// most one update per animation frame; `ticking` is a reentrancy guard
/// against scheduling twice within one frame, not a concurrency primitive.
#[derive(Debug)]
pub struct ViewportCache {
    state: ViewportState,
    pending_resize: Option<ViewportState>,
    resize_deadline_ms: u64,
    pending_scroll: Option<f64>,
    ticking: bool,
}

impl ViewportCache {
    pub fn new(size: Size, scroll_y: f64) -> Self {
        Self {
            state: ViewportState {
                width: size.width,
                height: size.height,
                last_scroll_y: scroll_y,
            },
            pending_resize: None,
            resize_deadline_ms: 0,
            pending_scroll: None,
            ticking: false,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn size(&self) -> Size {
        self.state.size()
    }

    /// Record a resize event. Takes effect through [`poll`](Self::poll)
    /// once the quiet window passes.
    pub fn handle_resize(&mut self, size: Size, scroll_y: f64, now_ms: u64) {
        self.pending_resize = Some(ViewportState {
            width: size.width,
            height: size.height,
            last_scroll_y: scroll_y,
        });
        self.resize_deadline_ms = now_ms + RESIZE_DEBOUNCE_MS;
    }

    /// Record a scroll event. Returns `true` when the caller must schedule
    /// an animation frame; later scrolls within the same frame only update
    /// the pending value.
    pub fn handle_scroll(&mut self, scroll_y: f64) -> bool {
        self.pending_scroll = Some(scroll_y);
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Apply the coalesced scroll update. Call once per animation frame.
    pub fn on_frame(&mut self) {
        if let Some(scroll_y) = self.pending_scroll.take() {
            self.state.last_scroll_y = scroll_y;
        }
        self.ticking = false;
    }

    /// Apply a settled resize, if any. Returns `true` if the state changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.resize_deadline_ms {
            return false;
        }
        match self.pending_resize.take() {
            Some(next) => {
                debug!(
                    width = next.width,
                    height = next.height,
                    "viewport resize settled"
                );
                self.state = next;
                true
            }
            None => false,
        }
    }
}
