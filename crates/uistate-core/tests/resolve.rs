// File: crates/uistate-core/tests/resolve.rs
// Purpose: Validate the pure dimension merge: defaulting, clamping, and edge inputs.

use uistate_core::dimensions::{MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};
use uistate_core::Settings;

#[test]
fn defaults_apply_field_by_field() {
    let dims = Settings::default().resolve();
    assert_eq!(dims.margin_top, MARGIN_TOP);
    assert_eq!(dims.margin_right, MARGIN_RIGHT);
    assert_eq!(dims.margin_bottom, MARGIN_BOTTOM);
    assert_eq!(dims.margin_left, MARGIN_LEFT);
    assert_eq!(dims.width, 0.0);
    assert_eq!(dims.height, 0.0);

    // Overriding one field leaves the others at their defaults.
    let dims = Settings { margin_left: Some(10.0), ..Settings::default() }.resolve();
    assert_eq!(dims.margin_left, 10.0);
    assert_eq!(dims.margin_right, MARGIN_RIGHT);
}

#[test]
fn margins_only_yield_zero_content_box() {
    let dims = Settings::default().with_margins(1.0, 2.0, 3.0, 4.0).resolve();
    assert_eq!(dims.bounded_width, 0.0);
    assert_eq!(dims.bounded_height, 0.0);
}

#[test]
fn bounded_formulas_are_exact() {
    let dims = Settings::default()
        .with_width(1000.0)
        .with_height(500.0)
        .with_margins(40.0, 30.0, 40.0, 75.0)
        .resolve();
    assert_eq!(dims.bounded_width, 895.0);
    assert_eq!(dims.bounded_height, 420.0);
}

#[test]
fn content_box_clamps_at_zero() {
    // Margins exceed the full dimension on both axes.
    let dims = Settings::default().with_width(50.0).with_height(20.0).resolve();
    assert_eq!(dims.bounded_width, 0.0);
    assert_eq!(dims.bounded_height, 0.0);
}

#[test]
fn resolve_is_pure() {
    let settings = Settings::default().with_width(321.5).with_margins(0.5, 0.25, 0.5, 0.25);
    assert_eq!(settings.resolve(), settings.resolve());
}

#[test]
fn nan_margin_collapses_to_zero() {
    // f64::max drops the NaN operand, so a NaN in the arithmetic clamps to 0
    // instead of poisoning the output.
    let dims = Settings::default()
        .with_width(800.0)
        .with_height(600.0)
        .with_margins(0.0, f64::NAN, 0.0, 0.0)
        .resolve();
    assert_eq!(dims.bounded_width, 0.0);
    // The NaN margin sits on the width axis; the height axis is untouched.
    assert_eq!(dims.bounded_height, 600.0);
}

#[test]
fn infinite_inputs_propagate_then_clamp() {
    let dims = Settings::default().with_width(f64::INFINITY).resolve();
    assert_eq!(dims.bounded_width, f64::INFINITY);

    let dims = Settings::default().with_height(f64::NEG_INFINITY).resolve();
    assert_eq!(dims.bounded_height, 0.0);
}
