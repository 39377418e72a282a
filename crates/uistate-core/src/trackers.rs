// File: crates/uistate-core/src/trackers.rs
// Summary: Thin observer-lifecycle adapters: mount, key-press, URL-hash, and intersection state.

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{
    ElementId, EventSource, HistoryWriter, IntersectionNotifier, KeyEvent, Lifecycle, Listener,
    SubscriptionId,
};
use crate::reactive::Reactive;

/// Latest value plus the released flag shared with the subscription listener.
struct TrackerState<T> {
    value: Reactive<T>,
    released: Cell<bool>,
}

impl<T: Clone + PartialEq> TrackerState<T> {
    fn new(initial: T) -> Rc<Self> {
        Rc::new(Self { value: Reactive::new(initial), released: Cell::new(false) })
    }
}

/// Follows component lifecycle events; `is_mounted` reflects the latest one.
pub struct MountTracker<S: EventSource<Lifecycle>> {
    source: Rc<S>,
    subscription: Cell<Option<SubscriptionId>>,
    state: Rc<TrackerState<bool>>,
}

impl<S: EventSource<Lifecycle>> MountTracker<S> {
    pub fn new(source: Rc<S>) -> Self {
        let state = TrackerState::new(false);
        let listener: Listener<Lifecycle> = {
            let state = Rc::clone(&state);
            Rc::new(move |evt| {
                if state.released.get() {
                    return;
                }
                state.value.set_if_changed(matches!(evt, Lifecycle::Mounted));
            })
        };
        let sub = source.subscribe(listener);
        Self { source, subscription: Cell::new(Some(sub)), state }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.value.get()
    }

    pub fn version(&self) -> u64 {
        self.state.value.version()
    }

    /// Idempotent teardown; late events are dropped afterwards.
    pub fn release(&self) {
        self.state.released.set(true);
        if let Some(sub) = self.subscription.take() {
            self.source.release(sub);
        }
    }
}

impl<S: EventSource<Lifecycle>> Drop for MountTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Tracks the pressed state of one named key from the global key stream.
pub struct KeyTracker<S: EventSource<KeyEvent>> {
    source: Rc<S>,
    subscription: Cell<Option<SubscriptionId>>,
    state: Rc<TrackerState<bool>>,
}

impl<S: EventSource<KeyEvent>> KeyTracker<S> {
    pub fn new(source: Rc<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = TrackerState::new(false);
        let listener: Listener<KeyEvent> = {
            let state = Rc::clone(&state);
            Rc::new(move |evt| {
                if state.released.get() || evt.key != key {
                    return;
                }
                state.value.set_if_changed(evt.pressed);
            })
        };
        let sub = source.subscribe(listener);
        Self { source, subscription: Cell::new(Some(sub)), state }
    }

    pub fn is_pressed(&self) -> bool {
        self.state.value.get()
    }

    pub fn version(&self) -> u64 {
        self.state.value.version()
    }

    /// Idempotent teardown; late events are dropped afterwards.
    pub fn release(&self) {
        self.state.released.set(true);
        if let Some(sub) = self.subscription.take() {
            self.source.release(sub);
        }
    }
}

impl<S: EventSource<KeyEvent>> Drop for KeyTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Mirrors the URL hash. External hash changes update the local value;
/// caller-initiated updates via [`set`](HashTracker::set) additionally write
/// through to the browser history.
pub struct HashTracker<S: EventSource<String>, H: HistoryWriter> {
    source: Rc<S>,
    history: Rc<H>,
    subscription: Cell<Option<SubscriptionId>>,
    state: Rc<TrackerState<String>>,
}

impl<S: EventSource<String>, H: HistoryWriter> HashTracker<S, H> {
    pub fn new(source: Rc<S>, history: Rc<H>) -> Self {
        let state = TrackerState::new(String::new());
        let listener: Listener<String> = {
            let state = Rc::clone(&state);
            Rc::new(move |hash: &String| {
                if state.released.get() {
                    return;
                }
                state.value.set_if_changed(hash.clone());
            })
        };
        let sub = source.subscribe(listener);
        Self { source, history, subscription: Cell::new(Some(sub)), state }
    }

    pub fn get(&self) -> String {
        self.state.value.get()
    }

    /// Update the hash locally and push it to the browser history.
    pub fn set(&self, hash: &str) {
        self.history.push_hash(hash);
        self.state.value.set_if_changed(hash.to_string());
    }

    pub fn version(&self) -> u64 {
        self.state.value.version()
    }

    /// Idempotent teardown; late events are dropped afterwards.
    pub fn release(&self) {
        self.state.released.set(true);
        if let Some(sub) = self.subscription.take() {
            self.source.release(sub);
        }
    }
}

impl<S: EventSource<String>, H: HistoryWriter> Drop for HashTracker<S, H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Tracks whether one bound element intersects the viewport. Element-bound
/// like [`SizeObserver`](crate::SizeObserver): bind once via
/// [`attach`](IntersectionTracker::attach), and a failed observe degrades to a
/// permanently-false value.
pub struct IntersectionTracker<N: IntersectionNotifier> {
    notifier: Rc<N>,
    element: Cell<Option<ElementId>>,
    subscription: Cell<Option<SubscriptionId>>,
    state: Rc<TrackerState<bool>>,
}

impl<N: IntersectionNotifier> IntersectionTracker<N> {
    pub fn new(notifier: Rc<N>) -> Self {
        Self {
            notifier,
            element: Cell::new(None),
            subscription: Cell::new(None),
            state: TrackerState::new(false),
        }
    }

    /// Bind the rendered element and begin observing. First call wins.
    pub fn attach(&self, element: ElementId) {
        if self.element.get().is_some() {
            log::debug!("intersection tracker already bound; ignoring attach of {element:?}");
            return;
        }
        self.element.set(Some(element));
        let listener: Listener<bool> = {
            let state = Rc::clone(&self.state);
            Rc::new(move |visible| {
                if state.released.get() {
                    return;
                }
                state.value.set_if_changed(*visible);
            })
        };
        match self.notifier.observe(element, listener) {
            Ok(sub) => self.subscription.set(Some(sub)),
            Err(err) => log::warn!("cannot observe {element:?}: {err}"),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.value.get()
    }

    pub fn version(&self) -> u64 {
        self.state.value.version()
    }

    /// Idempotent teardown; late events are dropped afterwards.
    pub fn release(&self) {
        self.state.released.set(true);
        if let Some(sub) = self.subscription.take() {
            self.notifier.release(sub);
        }
    }
}

impl<N: IntersectionNotifier> Drop for IntersectionTracker<N> {
    fn drop(&mut self) {
        self.release();
    }
}
