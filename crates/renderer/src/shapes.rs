//! The five presentational shape variants
//!
//! Variants are structural markup only; the mapped positioning/size/style/
//! animation classes are applied once by the dispatch wrapper. The raw
//! `content` string is injected verbatim (trusted input).

use page_builder_shared::{ComponentType, ShapeDescriptor};

/// Inner markup for a shape variant
pub fn shape_markup(ty: ComponentType, shape: &ShapeDescriptor) -> String {
    match ty {
        ComponentType::Circle => simple_variant("circle", shape),
        ComponentType::Rectangle => simple_variant("rectangle", shape),
        ComponentType::Square => simple_variant("square", shape),
        ComponentType::Triangle => variant_with_core("triangle", "triangle-shape", shape),
        ComponentType::DownArrow => variant_with_core("downArrow", "arrow-shape", shape),
    }
}

fn content_block(class: &str, shape: &ShapeDescriptor) -> String {
    if shape.content.is_empty() {
        String::new()
    } else {
        format!("<div class=\"{class}\">{}</div>", shape.content)
    }
}

fn data_animation(shape: &ShapeDescriptor) -> String {
    match shape.animation.as_deref() {
        Some(animation) if !animation.is_empty() => {
            format!(" data-animation=\"{animation}\"")
        }
        _ => String::new(),
    }
}

/// Circle / rectangle / square: one container, content inside
fn simple_variant(name: &str, shape: &ShapeDescriptor) -> String {
    let content_class = format!("{name}-content");
    format!(
        "<div class=\"{name}\"{}>{}</div>",
        data_animation(shape),
        content_block(&content_class, shape)
    )
}

/// Triangle / down-arrow: a dedicated core element draws the shape, content
/// sits next to it
fn variant_with_core(name: &str, core_class: &str, shape: &ShapeDescriptor) -> String {
    let content_class = if name == "downArrow" {
        "arrow-content".to_string()
    } else {
        format!("{name}-content")
    };
    format!(
        "<div class=\"{name}\"{}><div class=\"{core_class}\"></div>{}</div>",
        data_animation(shape),
        content_block(&content_class, shape)
    )
}
