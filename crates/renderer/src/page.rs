//! Whole-page rendering
//!
//! Rows render as flex containers with the derived justification and equal
//! flex division; the legacy flat format renders each descriptor as an
//! independent full-width block in document order.

use page_builder_shared::{PageConfig, RowConfig, ShapeDescriptor};

use crate::dispatch::{render_shape, RenderOptions};
use crate::layout::{row_justify, shape_width_percent, stagger_delay};

/// Render a page config to markup. Never fails; invalid descriptors are
/// skipped (or placeholdered in debug mode).
pub fn render_page(config: &PageConfig, opts: &RenderOptions) -> String {
    match config {
        PageConfig::Rows { rows } => render_rows(rows, opts),
        PageConfig::Flat { shapes } => render_flat(shapes, opts),
    }
}

fn render_rows(rows: &[RowConfig], opts: &RenderOptions) -> String {
    let mut out = format!(
        "<div class=\"landing-page-rows-container {}\">",
        opts.container_class
    );
    for (row_index, row) in rows.iter().enumerate() {
        let justify = row_justify(&row.shapes);
        let width = shape_width_percent(row.shapes.len());
        out.push_str(&format!(
            "<div class=\"landing-page-row w-full flex {} items-center gap-4 my-4\" data-row-id=\"{}\">",
            justify.class_name(),
            row.id
        ));
        for (shape_index, shape) in row.shapes.iter().enumerate() {
            let delay = if opts.enable_animations {
                stagger_delay(row_index, shape_index, opts.animation_stagger)
            } else {
                0.0
            };
            let Some(markup) = render_shape(shape, shape_index, delay, opts) else {
                continue;
            };
            out.push_str(&format!(
                "<div class=\"flex-1 min-w-0 flex {}\" style=\"max-width: {width}%\">{markup}</div>",
                item_justify_class(shape)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn render_flat(shapes: &[ShapeDescriptor], opts: &RenderOptions) -> String {
    let mut out = format!(
        "<div class=\"landing-page-rows-container {}\">",
        opts.container_class
    );
    for (index, shape) in shapes.iter().enumerate() {
        let delay = if opts.enable_animations {
            stagger_delay(0, index, opts.animation_stagger)
        } else {
            0.0
        };
        let Some(markup) = render_shape(shape, index, delay, opts) else {
            continue;
        };
        out.push_str(&format!("<div class=\"w-full\">{markup}</div>"));
    }
    out.push_str("</div>");
    out
}

/// Per-item justification: left maps to start, right to end, anything else
/// centers
fn item_justify_class(shape: &ShapeDescriptor) -> &'static str {
    match shape.positioning.as_deref() {
        Some("left") => "justify-start",
        Some("right") => "justify-end",
        _ => "justify-center",
    }
}
