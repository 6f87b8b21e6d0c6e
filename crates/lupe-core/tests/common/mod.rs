#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lupe_core::controller::{ZoomController, ZoomOptions};
use lupe_core::element::{ElementId, Zoomable};
use lupe_core::events::ZoomEventKind;
use lupe_core::geometry::{Rect, Size, Transform};
use lupe_core::surface::{CssClass, RenderSurface};
use lupe_core::viewport::ViewportCache;

/// One recorded surface operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    AddClass(ElementId, CssClass),
    RemoveClass(ElementId, CssClass),
    PageOverlay(bool),
    ForceLayout(ElementId),
    ExplicitSize(ElementId, Size),
    ApplyTransform(ElementId, Transform),
    ClearTransform(ElementId),
    StripHints(ElementId),
    SetSource(ElementId, String),
    RequestFrame,
    WatchTransitionEnd(ElementId),
    WatchEscape(bool),
}

pub type OpLog = Rc<RefCell<Vec<Op>>>;

/// In-memory surface recording every operation in call order.
pub struct MockSurface {
    rects: HashMap<ElementId, Rect>,
    ops: OpLog,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_rect(id: ElementId, rect: Rect) -> Self {
        let mut surface = Self::new();
        surface.set_rect(id, rect);
        surface
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    /// Shared handle to the op log; stays valid after the surface moves
    /// into a controller.
    pub fn ops(&self) -> OpLog {
        Rc::clone(&self.ops)
    }

    fn record(&self, op: Op) {
        self.ops.borrow_mut().push(op);
    }
}

impl RenderSurface for MockSurface {
    fn thumbnail_rect(&self, id: ElementId) -> Rect {
        self.rects.get(&id).copied().unwrap_or_default()
    }

    fn add_class(&mut self, id: ElementId, class: CssClass) {
        self.record(Op::AddClass(id, class));
    }

    fn remove_class(&mut self, id: ElementId, class: CssClass) {
        self.record(Op::RemoveClass(id, class));
    }

    fn set_page_overlay(&mut self, active: bool) {
        self.record(Op::PageOverlay(active));
    }

    fn force_layout(&mut self, id: ElementId) {
        self.record(Op::ForceLayout(id));
    }

    fn set_explicit_size(&mut self, id: ElementId, size: Size) {
        self.record(Op::ExplicitSize(id, size));
    }

    fn apply_transform(&mut self, id: ElementId, transform: &Transform) {
        self.record(Op::ApplyTransform(id, *transform));
    }

    fn clear_transform(&mut self, id: ElementId) {
        self.record(Op::ClearTransform(id));
    }

    fn strip_responsive_hints(&mut self, id: ElementId) {
        self.record(Op::StripHints(id));
    }

    fn set_image_source(&mut self, id: ElementId, url: &str) {
        self.record(Op::SetSource(id, url.to_string()));
    }

    fn request_frame(&mut self) {
        self.record(Op::RequestFrame);
    }

    fn watch_transition_end(&mut self, id: ElementId) {
        self.record(Op::WatchTransitionEnd(id));
    }

    fn watch_escape(&mut self, armed: bool) {
        self.record(Op::WatchEscape(armed));
    }
}

pub const HIRES_URL: &str = "photo-full.jpg";

/// Standard scenario: 200x150 thumbnail at (100, 100), 2000x1500 full
/// image, 1200x800 viewport, default options (offset 60).
pub fn standard_controller() -> (ZoomController<MockSurface>, OpLog, ElementId) {
    let id = ElementId(0);
    let surface = MockSurface::with_rect(id, Rect::new(100.0, 100.0, 200.0, 150.0));
    let ops = surface.ops();
    let element = Zoomable::new(id, Size::new(2000.0, 1500.0), HIRES_URL).unwrap();
    let viewport = ViewportCache::new(Size::new(1200.0, 800.0), 0.0);
    let controller = ZoomController::new(surface, viewport, vec![element], ZoomOptions::default());
    (controller, ops, id)
}

/// Subscribe to all five lifecycle kinds, recording kind names in publish
/// order.
pub fn record_events(
    controller: &mut ZoomController<MockSurface>,
) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in ZoomEventKind::ALL {
        let log = Rc::clone(&log);
        controller.on(kind, move |event| {
            log.borrow_mut().push(event.kind().to_string());
        });
    }
    log
}

/// Drive a complete zoom-in: click, next frame, transition end.
pub fn zoom_in(controller: &mut ZoomController<MockSurface>, id: ElementId, t: u64) {
    controller.handle_click(id, t).unwrap();
    controller.handle_frame(t + 16).unwrap();
    controller.handle_transition_end(id, t + 316).unwrap();
}

/// Drive a complete zoom-out: click, next frame, transition end.
pub fn zoom_out(controller: &mut ZoomController<MockSurface>, id: ElementId, t: u64) {
    controller.handle_click(id, t).unwrap();
    controller.handle_frame(t + 16).unwrap();
    controller.handle_transition_end(id, t + 316).unwrap();
}
