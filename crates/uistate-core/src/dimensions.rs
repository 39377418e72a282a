// File: crates/uistate-core/src/dimensions.rs
// Summary: Layout settings and the pure dimension merge producing the bounded content box.

/// Default top margin, in pixels.
pub const MARGIN_TOP: f64 = 40.0;
/// Default right margin, in pixels.
pub const MARGIN_RIGHT: f64 = 30.0;
/// Default bottom margin, in pixels.
pub const MARGIN_BOTTOM: f64 = 40.0;
/// Default left margin, in pixels (wide to leave room for axis labels).
pub const MARGIN_LEFT: f64 = 75.0;

/// Caller-supplied layout settings. Every field is optional; absent fields fall
/// back to the defaults above (width/height fall back to 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settings {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
}

impl Settings {
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = Some(top);
        self.margin_right = Some(right);
        self.margin_bottom = Some(bottom);
        self.margin_left = Some(left);
        self
    }

    /// Whether both dimensions were supplied explicitly, making measurement
    /// unnecessary.
    pub fn has_explicit_size(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Merge with defaults field by field and recompute the bounded content box.
    ///
    /// Pure and total: no validation, no errors. Non-finite inputs flow through
    /// the arithmetic and are clamped at the end; `f64::max` returns the other
    /// operand when one side is NaN, so a NaN margin or dimension collapses the
    /// bounded value to 0 rather than poisoning the output.
    pub fn resolve(&self) -> Dimensions {
        let width = self.width.unwrap_or(0.0);
        let height = self.height.unwrap_or(0.0);
        let margin_top = self.margin_top.unwrap_or(MARGIN_TOP);
        let margin_right = self.margin_right.unwrap_or(MARGIN_RIGHT);
        let margin_bottom = self.margin_bottom.unwrap_or(MARGIN_BOTTOM);
        let margin_left = self.margin_left.unwrap_or(MARGIN_LEFT);
        Dimensions {
            width,
            height,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            bounded_width: (width - margin_left - margin_right).max(0.0),
            bounded_height: (height - margin_top - margin_bottom).max(0.0),
        }
    }
}

/// Fully resolved layout: outer size, margins, and the derived content box.
/// The bounded fields are always recomputed by [`Settings::resolve`] and are
/// never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Settings::default().resolve()
    }
}
