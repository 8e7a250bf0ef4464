//! Responsive layout decisions.
//!
//! Measuring the viewport is the UI layer's job; this module only turns a
//! width into the handful of numbers the header and body need.

/// Widths strictly below this are laid out compactly.
pub const COMPACT_BREAKPOINT: f32 = 600.0;

/// One spacing unit, in logical points.
pub const SPACING_UNIT: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDecision {
    pub compact: bool,
    pub show_button_label: bool,
    pub title_margin_left: f32,
    pub content_padding_x: f32,
    pub content_padding_top: f32,
}

pub fn decide(viewport_width: f32) -> LayoutDecision {
    // NaN compares false, which lands on the full layout.
    let compact = viewport_width < COMPACT_BREAKPOINT;
    LayoutDecision {
        compact,
        show_button_label: !compact,
        title_margin_left: if compact { 0.0 } else { 2.0 * SPACING_UNIT },
        content_padding_x: 2.0 * SPACING_UNIT,
        content_padding_top: 2.0 * SPACING_UNIT,
    }
}
