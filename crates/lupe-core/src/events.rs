//! Typed lifecycle events and the synchronous subscriber bus.

use crate::element::ElementId;

/// Lifecycle event kind, used for subscription filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomEventKind {
    ZoomInStart,
    ZoomInEnd,
    ZoomOutStart,
    ZoomOutEnd,
    ImageLoaded,
}

impl ZoomEventKind {
    /// Every kind, in lifecycle order.
    pub const ALL: [ZoomEventKind; 5] = [
        ZoomEventKind::ZoomInStart,
        ZoomEventKind::ZoomInEnd,
        ZoomEventKind::ImageLoaded,
        ZoomEventKind::ZoomOutStart,
        ZoomEventKind::ZoomOutEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZoomInStart => "zoomInStart",
            Self::ZoomInEnd => "zoomInEnd",
            Self::ZoomOutStart => "zoomOutStart",
            Self::ZoomOutEnd => "zoomOutEnd",
            Self::ImageLoaded => "imageLoaded",
        }
    }
}

impl std::fmt::Display for ZoomEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lifecycle event with its payload.
///
/// Every event carries the zoomable container's id; `ImageLoaded` also
/// carries the substituted URL (its payload is conceptually the image
/// element rather than the container).
#[derive(Clone, Debug, PartialEq)]
pub enum ZoomEvent {
    ZoomInStart(ElementId),
    ZoomInEnd(ElementId),
    ZoomOutStart(ElementId),
    ZoomOutEnd(ElementId),
    ImageLoaded { element: ElementId, url: String },
}

impl ZoomEvent {
    pub fn kind(&self) -> ZoomEventKind {
        match self {
            Self::ZoomInStart(_) => ZoomEventKind::ZoomInStart,
            Self::ZoomInEnd(_) => ZoomEventKind::ZoomInEnd,
            Self::ZoomOutStart(_) => ZoomEventKind::ZoomOutStart,
            Self::ZoomOutEnd(_) => ZoomEventKind::ZoomOutEnd,
            Self::ImageLoaded { .. } => ZoomEventKind::ImageLoaded,
        }
    }

    pub fn element(&self) -> ElementId {
        match self {
            Self::ZoomInStart(id)
            | Self::ZoomInEnd(id)
            | Self::ZoomOutStart(id)
            | Self::ZoomOutEnd(id)
            | Self::ImageLoaded { element: id, .. } => *id,
        }
    }
}

/// Handle returned by [`EventBus::on`]; pass to [`EventBus::off`] to cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(usize);

struct Subscriber {
    id: usize,
    kind: ZoomEventKind,
    handler: Box<dyn FnMut(&ZoomEvent)>,
}

/// In-process synchronous event bus.
///
/// Handlers run at the exact publish points of the zoom lifecycle, in
/// subscription order. There is no error isolation: a panicking handler
/// propagates to the caller.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    next_id: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        kind: ZoomEventKind,
        handler: impl FnMut(&ZoomEvent) + 'static,
    ) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            kind,
            handler: Box::new(handler),
        });
        Subscription(id)
    }

    /// Cancel a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != subscription.0);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: &ZoomEvent) {
        let kind = event.kind();
        for subscriber in &mut self.subscribers {
            if subscriber.kind == kind {
                (subscriber.handler)(event);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
