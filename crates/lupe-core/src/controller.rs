//! The zoom controller: adapts the pure state machine to a rendering
//! surface and the lifecycle event bus.
//!
//! The controller owns the viewport cache, the element registry, and the
//! per-instance options, and is driven entirely by host callbacks
//! (`handle_click`, `handle_escape`, `handle_frame`,
//! `handle_transition_end`, `handle_resize`, `handle_scroll`, `poll`). It
//! performs no I/O of its own; every mutation goes through the injected
//! [`RenderSurface`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::consts::{DEFAULT_TRANSITION_TIMEOUT_MS, DEFAULT_VIEWPORT_OFFSET};
use crate::element::{ElementId, Zoomable};
use crate::error::{LupeError, Result};
use crate::events::{EventBus, Subscription, ZoomEvent, ZoomEventKind};
use crate::geometry::{compute_transform, Size, Transform};
use crate::machine::{step, Command, ZoomInput, ZoomPhase};
use crate::surface::{CssClass, RenderSurface};
use crate::viewport::{ViewportCache, ViewportState};

fn default_offset() -> f64 {
    DEFAULT_VIEWPORT_OFFSET
}

fn default_transition_timeout() -> u64 {
    DEFAULT_TRANSITION_TIMEOUT_MS
}

/// Per-controller configuration. Owned by each instance and threaded
/// through scale computation as a parameter; there is no shared mutable
/// default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomOptions {
    /// Margin reserved on each viewport axis, in CSS pixels.
    #[serde(default = "default_offset")]
    pub offset: f64,
    /// Upper bound on waiting for a transition-end signal before the
    /// controller forces the transition to complete.
    #[serde(default = "default_transition_timeout")]
    pub transition_timeout_ms: u64,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_VIEWPORT_OFFSET,
            transition_timeout_ms: DEFAULT_TRANSITION_TIMEOUT_MS,
        }
    }
}

struct Slot {
    zoomable: Zoomable,
    phase: ZoomPhase,
}

#[derive(Clone, Copy, Debug)]
struct TransitionWatch {
    id: ElementId,
    deadline_ms: u64,
}

/// The zoom interaction controller.
///
/// At most one element is ever in a non-idle phase; clicks on other
/// elements are ignored while one is active.
pub struct ZoomController<S: RenderSurface> {
    surface: S,
    options: ZoomOptions,
    viewport: ViewportCache,
    bus: EventBus,
    slots: Vec<Slot>,
    /// The single element currently allowed in a non-idle phase.
    active: Option<ElementId>,
    /// Element whose deferred mutation runs on the next frame.
    pending_frame: Option<ElementId>,
    /// Transform computed at click time, applied at frame time.
    pending_transform: Option<Transform>,
    watching: Option<TransitionWatch>,
    escape_armed: bool,
}

impl<S: RenderSurface> ZoomController<S> {
    /// Build a controller over `elements`. An empty collection is fine;
    /// the controller is inert until elements are registered.
    pub fn new(
        surface: S,
        viewport: ViewportCache,
        elements: Vec<Zoomable>,
        options: ZoomOptions,
    ) -> Self {
        let slots = elements
            .into_iter()
            .map(|zoomable| Slot {
                zoomable,
                phase: ZoomPhase::Idle,
            })
            .collect();
        Self {
            surface,
            options,
            viewport,
            bus: EventBus::new(),
            slots,
            active: None,
            pending_frame: None,
            pending_transform: None,
            watching: None,
            escape_armed: false,
        }
    }

    /// Register an additional zoomable container.
    pub fn register(&mut self, zoomable: Zoomable) -> Result<()> {
        if self.slot(zoomable.id).is_ok() {
            return Err(LupeError::DuplicateElement(zoomable.id));
        }
        self.slots.push(Slot {
            zoomable,
            phase: ZoomPhase::Idle,
        });
        Ok(())
    }

    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self, id: ElementId) -> Result<ZoomPhase> {
        Ok(self.slot(id)?.phase)
    }

    /// The currently zoomed element, if any. This is the fallback target
    /// for Escape-triggered exits, which carry no element of their own.
    pub fn zoomed_element(&self) -> Option<ElementId> {
        self.slots
            .iter()
            .find(|slot| slot.phase == ZoomPhase::Zoomed)
            .map(|slot| slot.zoomable.id)
    }

    /// Subscribe to a lifecycle event.
    pub fn on(
        &mut self,
        kind: ZoomEventKind,
        handler: impl FnMut(&ZoomEvent) + 'static,
    ) -> Subscription {
        self.bus.on(kind, handler)
    }

    /// Cancel a subscription made with [`on`](Self::on).
    pub fn off(&mut self, subscription: Subscription) -> bool {
        self.bus.off(subscription)
    }

    /// Click on a registered container. The host must have prevented the
    /// default link navigation before routing the click here.
    pub fn handle_click(&mut self, id: ElementId, now_ms: u64) -> Result<()> {
        let phase = self.phase(id)?;
        if let Some(active) = self.active {
            if active != id {
                debug!(?id, ?active, "click ignored while another element is active");
                return Ok(());
            }
        }
        if phase == ZoomPhase::Idle {
            let rect = self.surface.thumbnail_rect(id);
            if rect.width <= 0.0 || rect.height <= 0.0 {
                return Err(LupeError::DegenerateThumbnail {
                    id,
                    width: rect.width,
                    height: rect.height,
                });
            }
        }
        self.advance(id, ZoomInput::Toggle, now_ms)?;
        Ok(())
    }

    /// Global Escape key press. A no-op unless some element is zoomed.
    pub fn handle_escape(&mut self, now_ms: u64) -> Result<()> {
        let Some(id) = self.zoomed_element() else {
            return Ok(());
        };
        self.advance(id, ZoomInput::Escape, now_ms)?;
        Ok(())
    }

    /// An animation frame arrived. Applies the coalesced scroll update and
    /// any deferred zoom mutation. This is the only place mutations
    /// scheduled by clicks actually reach the surface.
    pub fn handle_frame(&mut self, now_ms: u64) -> Result<()> {
        self.viewport.on_frame();
        if let Some(id) = self.pending_frame.take() {
            self.advance(id, ZoomInput::FrameReady, now_ms)?;
        }
        Ok(())
    }

    /// A transition-end signal fired on `id`. Signals with no armed watch,
    /// or arriving before the transform is transitioning, are dropped.
    pub fn handle_transition_end(&mut self, id: ElementId, now_ms: u64) -> Result<()> {
        match self.watching {
            Some(watch) if watch.id == id => {}
            _ => {
                debug!(?id, "spurious transition-end ignored");
                return Ok(());
            }
        }
        if self.advance(id, ZoomInput::TransitionEnd, now_ms)? {
            self.watching = None;
        }
        Ok(())
    }

    /// Record a viewport resize; lands once the debounce window settles.
    pub fn handle_resize(&mut self, size: Size, scroll_y: f64, now_ms: u64) {
        self.viewport.handle_resize(size, scroll_y, now_ms);
    }

    /// Record a scroll position change, coalesced to one update per frame.
    pub fn handle_scroll(&mut self, scroll_y: f64) {
        if self.viewport.handle_scroll(scroll_y) {
            self.surface.request_frame();
        }
    }

    /// Drive time-based behavior: settle a debounced resize and force a
    /// stalled transition past its deadline. Hosts call this periodically,
    /// typically from their frame loop.
    pub fn poll(&mut self, now_ms: u64) -> Result<()> {
        self.viewport.poll(now_ms);
        if let Some(watch) = self.watching {
            if now_ms >= watch.deadline_ms {
                warn!(id = ?watch.id, "transition-end never fired; forcing completion");
                self.watching = None;
                // The frame may have stalled too; run the deferred mutation
                // before completing the transition.
                if self.pending_frame == Some(watch.id) {
                    self.pending_frame = None;
                    self.advance(watch.id, ZoomInput::FrameReady, now_ms)?;
                }
                self.advance(watch.id, ZoomInput::TransitionEnd, now_ms)?;
            }
        }
        Ok(())
    }

    /// Feed one input through the machine and execute the resulting
    /// commands. Returns whether the input was accepted.
    fn advance(&mut self, id: ElementId, input: ZoomInput, now_ms: u64) -> Result<bool> {
        let phase = self.phase(id)?;
        let Some((next, commands)) = step(phase, input) else {
            debug!(?id, ?phase, ?input, "input ignored");
            return Ok(false);
        };
        for command in commands {
            self.execute(id, command, now_ms)?;
        }
        self.slot_mut(id)?.phase = next;
        self.active = if next == ZoomPhase::Idle { None } else { Some(id) };
        Ok(true)
    }

    fn execute(&mut self, id: ElementId, command: Command, now_ms: u64) -> Result<()> {
        match command {
            Command::PublishZoomInStart => self.bus.publish(&ZoomEvent::ZoomInStart(id)),
            Command::PublishZoomInEnd => self.bus.publish(&ZoomEvent::ZoomInEnd(id)),
            Command::PublishZoomOutStart => self.bus.publish(&ZoomEvent::ZoomOutStart(id)),
            Command::PublishZoomOutEnd => self.bus.publish(&ZoomEvent::ZoomOutEnd(id)),
            Command::PublishImageLoaded => {
                let url = self.slot(id)?.zoomable.hires_url.clone();
                self.bus.publish(&ZoomEvent::ImageLoaded { element: id, url });
            }
            Command::MarkActive => self.surface.add_class(id, CssClass::Active),
            Command::UnmarkActive => self.surface.remove_class(id, CssClass::Active),
            Command::MarkZooming => self.surface.add_class(id, CssClass::Zooming),
            Command::MarkZoomed => {
                self.surface.remove_class(id, CssClass::Zooming);
                self.surface.add_class(id, CssClass::Zoomed);
            }
            Command::UnmarkZoomed => self.surface.remove_class(id, CssClass::Zoomed),
            Command::SetPageOverlay => self.surface.set_page_overlay(true),
            Command::ClearPageOverlay => self.surface.set_page_overlay(false),
            Command::ForceLayout => self.surface.force_layout(id),
            Command::ComputeTransform => {
                let thumb = self.surface.thumbnail_rect(id);
                let full = self.slot(id)?.zoomable.full_size;
                let transform =
                    compute_transform(full, thumb, self.viewport.size(), self.options.offset);
                debug!(
                    ?id,
                    dx = transform.dx,
                    dy = transform.dy,
                    scale = transform.scale,
                    "computed zoom transform"
                );
                self.pending_transform = Some(transform);
            }
            Command::SetExplicitSize => {
                let size = self.slot(id)?.zoomable.full_size;
                self.surface.set_explicit_size(id, size);
            }
            Command::ApplyTransform => {
                if let Some(transform) = self.pending_transform.take() {
                    self.surface.apply_transform(id, &transform);
                } else {
                    warn!(?id, "no pending transform to apply");
                }
            }
            Command::ClearTransform => self.surface.clear_transform(id),
            Command::LoadHighRes => {
                self.surface.strip_responsive_hints(id);
                let url = self.slot(id)?.zoomable.hires_url.clone();
                self.surface.set_image_source(id, &url);
            }
            Command::RequestFrame => {
                self.pending_frame = Some(id);
                self.surface.request_frame();
            }
            Command::WatchTransitionEnd => {
                self.surface.watch_transition_end(id);
                self.watching = Some(TransitionWatch {
                    id,
                    deadline_ms: now_ms + self.options.transition_timeout_ms,
                });
            }
            Command::WatchEscape => {
                self.surface.watch_escape(true);
                self.escape_armed = true;
            }
            Command::UnwatchEscape => {
                if self.escape_armed {
                    self.surface.watch_escape(false);
                    self.escape_armed = false;
                }
            }
        }
        Ok(())
    }

    fn slot(&self, id: ElementId) -> Result<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.zoomable.id == id)
            .ok_or(LupeError::UnknownElement(id))
    }

    fn slot_mut(&mut self, id: ElementId) -> Result<&mut Slot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.zoomable.id == id)
            .ok_or(LupeError::UnknownElement(id))
    }
}
