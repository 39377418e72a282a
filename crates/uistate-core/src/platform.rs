// File: crates/uistate-core/src/platform.rs
// Summary: Capability traits abstracting the host platform's notification services.

use std::rc::Rc;

use thiserror::Error;

/// Opaque handle to one rendered element, assigned by the host framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Handle to one live subscription on a platform notification service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Content-box size reported by a resize notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Component lifecycle events delivered by the host framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// A keyboard transition for one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub pressed: bool,
}

/// Notification callback. Single-threaded: the platform invokes listeners on
/// the one event-processing thread, FIFO per source, never reentrantly for the
/// same subscription.
pub type Listener<T> = Rc<dyn Fn(&T)>;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ObserveError {
    /// The element is not attached to the render tree, so the platform cannot
    /// observe it.
    #[error("element is not attached to the render tree")]
    Detached,
}

/// Per-element content-box resize notifications.
pub trait ResizeNotifier {
    fn observe(
        &self,
        element: ElementId,
        listener: Listener<Size>,
    ) -> Result<SubscriptionId, ObserveError>;
    /// Idempotent: releasing an unknown or already-released handle is a no-op.
    fn release(&self, sub: SubscriptionId);
}

/// Per-element viewport-intersection notifications (true = visible).
pub trait IntersectionNotifier {
    fn observe(
        &self,
        element: ElementId,
        listener: Listener<bool>,
    ) -> Result<SubscriptionId, ObserveError>;
    /// Idempotent: releasing an unknown or already-released handle is a no-op.
    fn release(&self, sub: SubscriptionId);
}

/// A single element-independent platform event stream (lifecycle, keyboard,
/// URL hash). Infinite, not restartable.
pub trait EventSource<T> {
    fn subscribe(&self, listener: Listener<T>) -> SubscriptionId;
    /// Idempotent: releasing an unknown or already-released handle is a no-op.
    fn release(&self, sub: SubscriptionId);
}

/// Write-through channel to the browser history for caller-initiated hash
/// updates.
pub trait HistoryWriter {
    fn push_hash(&self, hash: &str);
}
