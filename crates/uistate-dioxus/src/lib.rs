// File: crates/uistate-dioxus/src/lib.rs
// Summary: Dioxus scaffolding for a self-measuring container component (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Measurement currently reads the mounted node's client rect once; wiring a live
//   resize stream to the webview is the next iteration.

#[cfg(feature = "desktop")]
pub mod ui {
    use dioxus::prelude::*;
    use uistate_core::{Dimensions, Settings};

    #[derive(Props, Clone, PartialEq)]
    pub struct MeasuredProps {
        /// Layout settings; absent width/height are filled from measurement.
        #[props(default)]
        pub settings: Settings,
        /// Called with the resolved dimensions on every render.
        #[props(default)]
        pub on_dimensions: Option<EventHandler<Dimensions>>,
        pub children: Element,
    }

    /// Container that measures its own rendered size once mounted and merges it
    /// with the caller's settings into a bounded content box. Explicit
    /// width/height in the settings skip measurement entirely; the decision is
    /// made once, when the component first mounts.
    #[component]
    pub fn Measured(props: MeasuredProps) -> Element {
        let mut observed_w = use_signal(|| 0.0f64);
        let mut observed_h = use_signal(|| 0.0f64);
        let needs_measurement = use_hook(|| !props.settings.has_explicit_size());

        let mut merged = props.settings;
        if merged.width.is_none() {
            merged.width = Some(*observed_w.read());
        }
        if merged.height.is_none() {
            merged.height = Some(*observed_h.read());
        }
        let dims = merged.resolve();
        if let Some(cb) = &props.on_dimensions {
            cb.call(dims);
        }

        rsx! {
            div {
                style: "width:100%; height:100%;",
                onmounted: move |evt| {
                    if !needs_measurement {
                        return;
                    }
                    spawn(async move {
                        if let Ok(rect) = evt.data().get_client_rect().await {
                            // Per-axis checks avoid redundant re-renders.
                            if *observed_w.peek() != rect.size.width {
                                observed_w.set(rect.size.width);
                            }
                            if *observed_h.peek() != rect.size.height {
                                observed_h.set(rect.size.height);
                            }
                        }
                    });
                },
                {props.children}
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let mut latest = use_signal(Dimensions::default);
            rsx! {
                super::ui::Measured {
                    settings: Settings::default(),
                    on_dimensions: move |dims| latest.set(dims),
                    p { "bounded: {latest.read().bounded_width} x {latest.read().bounded_height}" }
                }
            }
        }

        dioxus_desktop::launch::launch(App, Vec::new(), Vec::new());
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("uistate-dioxus built without `desktop` feature; enable features to run UI demo")
}
