//! Row layout model
//!
//! Derives row-level attributes from the shapes a row contains: horizontal
//! justification from the members' positioning, equal flex division from the
//! member count, and a per-shape enter-animation stagger.

use page_builder_shared::ShapeDescriptor;

/// Stagger stride between rows, in shape slots. Assumes no row holds more
/// than 10 shapes; the editor caps rows at 6.
pub const ROW_STRIDE: usize = 10;

/// Horizontal justification of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
}

impl Justify {
    /// CSS `justify-content` value
    pub fn as_css(&self) -> &'static str {
        match self {
            Justify::FlexStart => "flex-start",
            Justify::Center => "center",
            Justify::FlexEnd => "flex-end",
            Justify::SpaceBetween => "space-between",
        }
    }

    /// Utility class emitted on the row container
    pub fn class_name(&self) -> &'static str {
        match self {
            Justify::FlexStart => "justify-start",
            Justify::Center => "justify-center",
            Justify::FlexEnd => "justify-end",
            Justify::SpaceBetween => "justify-between",
        }
    }
}

/// Row justification rule: center if every shape is centered, flex-start if
/// all left, flex-end if all right, otherwise distributed.
pub fn row_justify(shapes: &[ShapeDescriptor]) -> Justify {
    let all = |value: &str| {
        shapes
            .iter()
            .all(|s| s.positioning.as_deref() == Some(value))
    };
    if all("center") {
        Justify::Center
    } else if all("left") {
        Justify::FlexStart
    } else if all("right") {
        Justify::FlexEnd
    } else {
        Justify::SpaceBetween
    }
}

/// Width of each flex item in a row: equal division, not content-based
pub fn shape_width_percent(row_len: usize) -> f32 {
    100.0 / row_len.max(1) as f32
}

/// Enter-animation delay for the shape at `(row_index, shape_index)`
pub fn stagger_delay(row_index: usize, shape_index: usize, stagger_seconds: f32) -> f32 {
    (row_index * ROW_STRIDE + shape_index) as f32 * stagger_seconds
}
