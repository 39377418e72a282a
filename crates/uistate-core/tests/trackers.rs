// File: crates/uistate-core/tests/trackers.rs
// Purpose: Validate the observer lifecycle contract for the sibling trackers.

use uistate_core::platform::Lifecycle;
use uistate_core::{ElementId, HashTracker, IntersectionTracker, KeyTracker, MountTracker, SimPlatform};

#[test]
fn mount_tracker_follows_lifecycle() {
    let sim = SimPlatform::new();
    let tracker = MountTracker::new(sim.clone());
    assert!(!tracker.is_mounted());

    sim.emit_lifecycle(Lifecycle::Mounted);
    assert!(tracker.is_mounted());
    assert_eq!(tracker.version(), 1);

    // Repeated Mounted events change nothing.
    sim.emit_lifecycle(Lifecycle::Mounted);
    assert_eq!(tracker.version(), 1);

    sim.emit_lifecycle(Lifecycle::Unmounted);
    assert!(!tracker.is_mounted());

    drop(tracker);
    assert_eq!(sim.active_subscriptions(), 0);
}

#[test]
fn key_tracker_filters_by_key() {
    let sim = SimPlatform::new();
    let tracker = KeyTracker::new(sim.clone(), "Escape");

    sim.emit_key("Enter", true);
    assert!(!tracker.is_pressed());

    sim.emit_key("Escape", true);
    assert!(tracker.is_pressed());

    sim.emit_key("Escape", false);
    assert!(!tracker.is_pressed());
    assert_eq!(tracker.version(), 2);
}

#[test]
fn hash_tracker_writes_through_and_follows_events() {
    let sim = SimPlatform::new();
    let tracker = HashTracker::new(sim.clone(), sim.clone());
    assert_eq!(tracker.get(), "");

    // Caller-initiated update: local state plus history write-through.
    tracker.set("#settings");
    assert_eq!(tracker.get(), "#settings");
    assert_eq!(sim.history(), vec!["#settings".to_string()]);

    // External hash change: local state only.
    sim.emit_hash("#about");
    assert_eq!(tracker.get(), "#about");
    assert_eq!(sim.history(), vec!["#settings".to_string()]);
}

#[test]
fn intersection_tracker_reports_visibility() {
    let sim = SimPlatform::new();
    let el = ElementId(7);
    let tracker = IntersectionTracker::new(sim.clone());
    tracker.attach(el);
    assert!(!tracker.is_visible());

    sim.emit_intersection(el, true);
    assert!(tracker.is_visible());

    sim.emit_intersection(el, false);
    assert!(!tracker.is_visible());
}

#[test]
fn late_event_after_release_is_dropped() {
    let sim = SimPlatform::new();
    let tracker = MountTracker::new(sim.clone());

    sim.schedule_lifecycle(Lifecycle::Mounted);
    tracker.release();
    sim.pump();
    assert!(!tracker.is_mounted());

    tracker.release();
    assert_eq!(sim.releases(), 1);
}

#[test]
fn trackers_release_on_drop() {
    let sim = SimPlatform::new();
    {
        let _mount = MountTracker::new(sim.clone());
        let _key = KeyTracker::new(sim.clone(), " ");
        let _hash = HashTracker::new(sim.clone(), sim.clone());
        let intersection = IntersectionTracker::new(sim.clone());
        intersection.attach(ElementId(3));
        assert_eq!(sim.active_subscriptions(), 4);
        // Mount, key, and hash go through the event-source capability;
        // intersection uses its own observe path.
        assert_eq!(sim.event_subscribes(), 3);
    }
    assert_eq!(sim.active_subscriptions(), 0);
    assert_eq!(sim.releases(), 4);
}
