//! Configuration system for the page builder
//!
//! Validates shape descriptors against the closed vocabulary, maps the
//! declarative values to presentation class strings, and provides the
//! default-config factories used at project creation and by editor inserts.

pub mod defaults;
pub mod style_map;
pub mod validation;

pub use defaults::{default_page, default_row, default_shape};
pub use style_map::{
    animation_class, animation_delay_style, positioning_classes, size_classes, style_classes,
};
pub use validation::{validate, validate_shape, validate_value, ValidationError, ValidationReport};
