//! HTML renderer for page configs
//!
//! Turns a validated (or best-effort) page config into markup: the layout
//! model computes row justification, equal flex division, and animation
//! stagger; the dispatch selects one of the five shape variants and wraps it
//! with the mapped positioning/size/style/animation classes.
//!
//! Rendering never fails hard. Descriptors with an unknown component type
//! are skipped in production and replaced by a visible placeholder in debug
//! mode.

pub mod dispatch;
pub mod layout;
pub mod page;
pub mod shapes;

pub use dispatch::{render_shape, RenderOptions};
pub use layout::{row_justify, shape_width_percent, stagger_delay, Justify, ROW_STRIDE};
pub use page::render_page;
