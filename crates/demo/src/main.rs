// File: crates/demo/src/main.rs
// Summary: Demo drives the size observer and sibling trackers against the simulated platform.

use anyhow::{Context, Result};
use uistate_core::platform::Lifecycle;
use uistate_core::{
    Dimensions, ElementId, HashTracker, KeyTracker, MountTracker, Settings, SimPlatform,
    SizeObserver,
};

fn main() -> Result<()> {
    env_logger::init();

    // Optional final size as WIDTHxHEIGHT, e.g. `uistate-demo 1280x720`.
    let final_size = match std::env::args().nth(1) {
        Some(arg) => parse_size(&arg).with_context(|| format!("bad size argument '{arg}'"))?,
        None => (1024.0, 640.0),
    };

    let sim = SimPlatform::new();
    let el = ElementId(1);

    // Margins only: the observer subscribes and fills width/height from
    // measurements.
    let observer = SizeObserver::new(
        Settings::default().with_margins(40.0, 30.0, 40.0, 75.0),
        sim.clone(),
    );
    observer.attach(el);
    println!("attached; initial {}", format_dims(&observer.dimensions()));

    let mut last_version = observer.render_version();
    for (w, h) in [(640.0, 480.0), (800.0, 600.0), (800.0, 600.0), final_size] {
        sim.emit_resize(el, w, h);
        let version = observer.render_version();
        if version == last_version {
            println!("resize {w}x{h}: no change, render skipped");
            continue;
        }
        last_version = version;
        println!("resize {w}x{h}: {}", format_dims(&observer.dimensions()));
    }

    // Sibling trackers share the same subscribe/notify/release shape.
    let mount = MountTracker::new(sim.clone());
    sim.emit_lifecycle(Lifecycle::Mounted);
    println!("mounted: {}", mount.is_mounted());

    let escape = KeyTracker::new(sim.clone(), "Escape");
    sim.emit_key("Escape", true);
    println!("escape pressed: {}", escape.is_pressed());

    let hash = HashTracker::new(sim.clone(), sim.clone());
    hash.set("#chart");
    sim.emit_hash("#settings");
    println!("hash: {} (history: {:?})", hash.get(), sim.history());

    drop(observer);
    drop(mount);
    drop(escape);
    drop(hash);
    println!("subscriptions after teardown: {}", sim.active_subscriptions());
    Ok(())
}

fn parse_size(arg: &str) -> Result<(f64, f64)> {
    let (w, h) = arg
        .split_once(['x', 'X'])
        .context("expected WIDTHxHEIGHT")?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

fn format_dims(dims: &Dimensions) -> String {
    format!(
        "{}x{} -> bounded {}x{}",
        dims.width, dims.height, dims.bounded_width, dims.bounded_height
    )
}
