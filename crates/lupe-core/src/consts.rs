/// Margin in CSS pixels reserved on each viewport axis so the zoomed image
/// never touches the viewport edges.
pub const DEFAULT_VIEWPORT_OFFSET: f64 = 60.0;

/// Quiet window for resize debouncing: a pending viewport update only lands
/// once this many milliseconds pass with no further resize event.
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Upper bound on waiting for a transition-end signal before the controller
/// forces the transition to complete. A zero-duration or removed CSS
/// transition never fires the event at all.
pub const DEFAULT_TRANSITION_TIMEOUT_MS: u64 = 500;
