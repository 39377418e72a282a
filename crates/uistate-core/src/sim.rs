// File: crates/uistate-core/src/sim.rs
// Summary: Simulated platform implementing every capability trait, with spy counters and an async delivery queue.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use crate::platform::{
    ElementId, EventSource, HistoryWriter, IntersectionNotifier, KeyEvent, Lifecycle, Listener,
    ObserveError, ResizeNotifier, Size, SubscriptionId,
};

type Thunk = Box<dyn Fn()>;

/// In-process stand-in for the browser's notification services.
///
/// Delivery is asynchronous like the real platform: `schedule_*` captures the
/// listeners subscribed at that moment and queues the notification, and
/// [`pump`](SimPlatform::pump) delivers the queue FIFO. The `emit_*` helpers
/// schedule and pump in one step. Scheduling before a release and pumping
/// after it reproduces the teardown race the utilities must tolerate.
#[derive(Default)]
pub struct SimPlatform {
    next_sub: Cell<u64>,
    resize: RefCell<HashMap<SubscriptionId, (ElementId, Listener<Size>)>>,
    intersection: RefCell<HashMap<SubscriptionId, (ElementId, Listener<bool>)>>,
    lifecycle: RefCell<HashMap<SubscriptionId, Listener<Lifecycle>>>,
    keys: RefCell<HashMap<SubscriptionId, Listener<KeyEvent>>>,
    hash: RefCell<HashMap<SubscriptionId, Listener<String>>>,
    queue: RefCell<VecDeque<Thunk>>,
    detached: RefCell<HashSet<ElementId>>,
    history: RefCell<Vec<String>>,
    resize_observes: Cell<u64>,
    event_subscribes: Cell<u64>,
    releases: Cell<u64>,
}

impl SimPlatform {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn next_id(&self) -> SubscriptionId {
        let id = self.next_sub.get();
        self.next_sub.set(id + 1);
        SubscriptionId(id)
    }

    /// Make `observe` fail with [`ObserveError::Detached`] for this element.
    pub fn mark_detached(&self, element: ElementId) {
        self.detached.borrow_mut().insert(element);
    }

    /// Number of `ResizeNotifier::observe` calls made so far.
    pub fn resize_observes(&self) -> u64 {
        self.resize_observes.get()
    }

    /// Number of `EventSource::subscribe` calls made so far, across all
    /// streams.
    pub fn event_subscribes(&self) -> u64 {
        self.event_subscribes.get()
    }

    /// Number of effective releases (double-releasing the same handle counts
    /// once).
    pub fn releases(&self) -> u64 {
        self.releases.get()
    }

    /// Live subscriptions across all services; zero once every consumer has
    /// torn down.
    pub fn active_subscriptions(&self) -> usize {
        self.resize.borrow().len()
            + self.intersection.borrow().len()
            + self.lifecycle.borrow().len()
            + self.keys.borrow().len()
            + self.hash.borrow().len()
    }

    /// Hashes pushed through the [`HistoryWriter`] capability, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Deliver every queued notification, FIFO.
    pub fn pump(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(thunk) => thunk(),
                None => break,
            }
        }
    }

    /// Queue a resize notification for the listeners currently observing
    /// `element`.
    pub fn schedule_resize(&self, element: ElementId, width: f64, height: f64) {
        let listeners: Vec<Listener<Size>> = self
            .resize
            .borrow()
            .values()
            .filter(|(el, _)| *el == element)
            .map(|(_, l)| Rc::clone(l))
            .collect();
        let size = Size { width, height };
        self.queue.borrow_mut().push_back(Box::new(move || {
            for l in &listeners {
                l(&size);
            }
        }));
    }

    pub fn emit_resize(&self, element: ElementId, width: f64, height: f64) {
        self.schedule_resize(element, width, height);
        self.pump();
    }

    /// Queue an intersection notification for the listeners currently
    /// observing `element`.
    pub fn schedule_intersection(&self, element: ElementId, visible: bool) {
        let listeners: Vec<Listener<bool>> = self
            .intersection
            .borrow()
            .values()
            .filter(|(el, _)| *el == element)
            .map(|(_, l)| Rc::clone(l))
            .collect();
        self.queue.borrow_mut().push_back(Box::new(move || {
            for l in &listeners {
                l(&visible);
            }
        }));
    }

    pub fn emit_intersection(&self, element: ElementId, visible: bool) {
        self.schedule_intersection(element, visible);
        self.pump();
    }

    pub fn schedule_lifecycle(&self, event: Lifecycle) {
        let listeners: Vec<Listener<Lifecycle>> =
            self.lifecycle.borrow().values().map(Rc::clone).collect();
        self.queue.borrow_mut().push_back(Box::new(move || {
            for l in &listeners {
                l(&event);
            }
        }));
    }

    pub fn emit_lifecycle(&self, event: Lifecycle) {
        self.schedule_lifecycle(event);
        self.pump();
    }

    pub fn schedule_key(&self, key: &str, pressed: bool) {
        let listeners: Vec<Listener<KeyEvent>> =
            self.keys.borrow().values().map(Rc::clone).collect();
        let event = KeyEvent { key: key.to_string(), pressed };
        self.queue.borrow_mut().push_back(Box::new(move || {
            for l in &listeners {
                l(&event);
            }
        }));
    }

    pub fn emit_key(&self, key: &str, pressed: bool) {
        self.schedule_key(key, pressed);
        self.pump();
    }

    pub fn schedule_hash(&self, hash: &str) {
        let listeners: Vec<Listener<String>> =
            self.hash.borrow().values().map(Rc::clone).collect();
        let hash = hash.to_string();
        self.queue.borrow_mut().push_back(Box::new(move || {
            for l in &listeners {
                l(&hash);
            }
        }));
    }

    pub fn emit_hash(&self, hash: &str) {
        self.schedule_hash(hash);
        self.pump();
    }

    fn release_any(&self, sub: SubscriptionId) {
        let removed = self.resize.borrow_mut().remove(&sub).is_some()
            || self.intersection.borrow_mut().remove(&sub).is_some()
            || self.lifecycle.borrow_mut().remove(&sub).is_some()
            || self.keys.borrow_mut().remove(&sub).is_some()
            || self.hash.borrow_mut().remove(&sub).is_some();
        if removed {
            self.releases.set(self.releases.get() + 1);
        }
    }
}

impl ResizeNotifier for SimPlatform {
    fn observe(
        &self,
        element: ElementId,
        listener: Listener<Size>,
    ) -> Result<SubscriptionId, ObserveError> {
        self.resize_observes.set(self.resize_observes.get() + 1);
        if self.detached.borrow().contains(&element) {
            return Err(ObserveError::Detached);
        }
        let sub = self.next_id();
        self.resize.borrow_mut().insert(sub, (element, listener));
        Ok(sub)
    }

    fn release(&self, sub: SubscriptionId) {
        self.release_any(sub);
    }
}

impl IntersectionNotifier for SimPlatform {
    fn observe(
        &self,
        element: ElementId,
        listener: Listener<bool>,
    ) -> Result<SubscriptionId, ObserveError> {
        if self.detached.borrow().contains(&element) {
            return Err(ObserveError::Detached);
        }
        let sub = self.next_id();
        self.intersection.borrow_mut().insert(sub, (element, listener));
        Ok(sub)
    }

    fn release(&self, sub: SubscriptionId) {
        self.release_any(sub);
    }
}

impl EventSource<Lifecycle> for SimPlatform {
    fn subscribe(&self, listener: Listener<Lifecycle>) -> SubscriptionId {
        self.event_subscribes.set(self.event_subscribes.get() + 1);
        let sub = self.next_id();
        self.lifecycle.borrow_mut().insert(sub, listener);
        sub
    }

    fn release(&self, sub: SubscriptionId) {
        self.release_any(sub);
    }
}

impl EventSource<KeyEvent> for SimPlatform {
    fn subscribe(&self, listener: Listener<KeyEvent>) -> SubscriptionId {
        self.event_subscribes.set(self.event_subscribes.get() + 1);
        let sub = self.next_id();
        self.keys.borrow_mut().insert(sub, listener);
        sub
    }

    fn release(&self, sub: SubscriptionId) {
        self.release_any(sub);
    }
}

impl EventSource<String> for SimPlatform {
    fn subscribe(&self, listener: Listener<String>) -> SubscriptionId {
        self.event_subscribes.set(self.event_subscribes.get() + 1);
        let sub = self.next_id();
        self.hash.borrow_mut().insert(sub, listener);
        sub
    }

    fn release(&self, sub: SubscriptionId) {
        self.release_any(sub);
    }
}

impl HistoryWriter for SimPlatform {
    fn push_hash(&self, hash: &str) {
        self.history.borrow_mut().push(hash.to_string());
    }
}
