// File: crates/uistate-core/src/lib.rs
// Summary: Core library entry point; exports the UI-state utilities and platform traits.

pub mod dimensions;
pub mod observer;
pub mod platform;
pub mod reactive;
pub mod sim;
pub mod trackers;

pub use dimensions::{Dimensions, Settings};
pub use observer::SizeObserver;
pub use platform::{
    ElementId, EventSource, HistoryWriter, IntersectionNotifier, KeyEvent, Lifecycle, Listener,
    ObserveError, ResizeNotifier, Size, SubscriptionId,
};
pub use reactive::Reactive;
pub use sim::SimPlatform;
pub use trackers::{HashTracker, IntersectionTracker, KeyTracker, MountTracker};
