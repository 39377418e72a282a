// File: crates/uistate-core/src/reactive.rs
// Summary: Change-counted value cell; the host polls the version to schedule re-renders.

use std::cell::{Cell, RefCell};

/// Latest observed value plus a counter of accepted changes. Stands in for a
/// framework signal: the host re-renders whenever the version moves, and reads
/// always see the current value.
#[derive(Debug)]
pub struct Reactive<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

impl<T: Clone + PartialEq> Reactive<T> {
    pub fn new(value: T) -> Self {
        Self { value: RefCell::new(value), version: Cell::new(0) }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `next` only if it differs from the current value. Returns whether
    /// a change was recorded (and the version bumped).
    pub fn set_if_changed(&self, next: T) -> bool {
        if *self.value.borrow() == next {
            return false;
        }
        *self.value.borrow_mut() = next;
        self.version.set(self.version.get() + 1);
        true
    }

    /// Number of accepted changes since creation.
    pub fn version(&self) -> u64 {
        self.version.get()
    }
}
