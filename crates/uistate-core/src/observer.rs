// File: crates/uistate-core/src/observer.rs
// Summary: SizeObserver tracks a bound element's rendered size and derives the bounded content box.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dimensions::{Dimensions, Settings};
use crate::platform::{ElementId, Listener, ResizeNotifier, Size, SubscriptionId};
use crate::reactive::Reactive;

/// Observed size and the released flag shared with the notification listener.
/// The flag makes a late delivery after teardown a no-op instead of a stale
/// state mutation.
struct Observed {
    width: Reactive<f64>,
    height: Reactive<f64>,
    released: Cell<bool>,
}

/// Tracks the rendered size of one bound element and merges it with the
/// caller's layout settings into a [`Dimensions`] value.
///
/// Two states: **Unmeasured** (initial; observed size 0x0, no subscription)
/// and **Observing** (subscription live, observed size updated per
/// notification). The transition happens at most once, in [`attach`], and only
/// when the settings did not supply both dimensions explicitly — explicit
/// dimensions make measurement unnecessary and no subscription is ever
/// created.
///
/// [`attach`]: SizeObserver::attach
pub struct SizeObserver<N: ResizeNotifier> {
    notifier: Rc<N>,
    settings: RefCell<Settings>,
    element: Cell<Option<ElementId>>,
    subscription: Cell<Option<SubscriptionId>>,
    observed: Rc<Observed>,
}

impl<N: ResizeNotifier> SizeObserver<N> {
    pub fn new(settings: Settings, notifier: Rc<N>) -> Self {
        Self {
            notifier,
            settings: RefCell::new(settings),
            element: Cell::new(None),
            subscription: Cell::new(None),
            observed: Rc::new(Observed {
                width: Reactive::new(0.0),
                height: Reactive::new(0.0),
                released: Cell::new(false),
            }),
        }
    }

    /// Bind the rendered element. The first call wins; the binding contract is
    /// 1:1 and later calls are ignored.
    ///
    /// This is the single decision point for observation: if the settings at
    /// this moment lack width or height, a resize subscription is created.
    /// Later [`set_settings`] calls do not revisit the decision. A failed
    /// `observe` is swallowed and the instance stays Unmeasured; the caller
    /// sees it only as zero dimensions.
    ///
    /// [`set_settings`]: SizeObserver::set_settings
    pub fn attach(&self, element: ElementId) {
        if self.element.get().is_some() {
            log::debug!("size observer already bound; ignoring attach of {element:?}");
            return;
        }
        self.element.set(Some(element));
        if self.settings.borrow().has_explicit_size() {
            log::debug!("explicit dimensions supplied; skipping observation of {element:?}");
            return;
        }
        let observed = Rc::clone(&self.observed);
        let listener: Listener<Size> = Rc::new(move |size| {
            if observed.released.get() {
                return;
            }
            // Independent per-axis checks: a one-axis change bumps one version.
            observed.width.set_if_changed(size.width);
            observed.height.set_if_changed(size.height);
        });
        match self.notifier.observe(element, listener) {
            Ok(sub) => {
                log::debug!("observing {element:?} via {sub:?}");
                self.subscription.set(Some(sub));
            }
            Err(err) => log::warn!("cannot observe {element:?}: {err}"),
        }
    }

    /// The bound element, if [`attach`](SizeObserver::attach) has run.
    pub fn element(&self) -> Option<ElementId> {
        self.element.get()
    }

    /// Replace the caller settings used by [`dimensions`](SizeObserver::dimensions).
    /// Does not re-evaluate the observation decision: supplying explicit
    /// dimensions after observation began leaves the subscription active.
    pub fn set_settings(&self, settings: Settings) {
        *self.settings.borrow_mut() = settings;
    }

    /// Resolve the current dimensions. Recomputed from the live inputs on
    /// every call; caller-supplied width/height always win over observed
    /// measurements.
    pub fn dimensions(&self) -> Dimensions {
        let mut merged = *self.settings.borrow();
        if merged.width.is_none() {
            merged.width = Some(self.observed.width.get());
        }
        if merged.height.is_none() {
            merged.height = Some(self.observed.height.get());
        }
        merged.resolve()
    }

    /// Accepted width updates (notifications that actually changed the width).
    pub fn width_version(&self) -> u64 {
        self.observed.width.version()
    }

    /// Accepted height updates.
    pub fn height_version(&self) -> u64 {
        self.observed.height.version()
    }

    /// Combined change counter: the host re-renders when this moves.
    pub fn render_version(&self) -> u64 {
        self.observed.width.version() + self.observed.height.version()
    }

    /// Tear down the observer. Idempotent, and safe whether or not a
    /// subscription was ever created; any notification delivered afterwards is
    /// dropped by the listener.
    pub fn release(&self) {
        self.observed.released.set(true);
        if let Some(sub) = self.subscription.take() {
            self.notifier.release(sub);
        }
    }
}

impl<N: ResizeNotifier> Drop for SizeObserver<N> {
    fn drop(&mut self) {
        self.release();
    }
}
