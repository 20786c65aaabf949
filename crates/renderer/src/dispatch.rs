//! Renderer dispatch
//!
//! Looks a descriptor's component type up in the variant set and wraps the
//! variant markup with the mapped positioning/size/style/animation classes.
//! Unknown component types render nothing in production and a visible
//! placeholder in debug mode; dispatch never errors.

use log::debug;

use page_builder_config::style_map;
use page_builder_shared::{ComponentType, ShapeDescriptor};

use crate::shapes::shape_markup;

/// Rendering knobs, passed explicitly by the caller
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render placeholders and a per-shape debug readout
    pub debug: bool,
    pub enable_animations: bool,
    /// Seconds between consecutive shapes' enter animations
    pub animation_stagger: f32,
    /// Extra class on the page container
    pub container_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            debug: false,
            enable_animations: true,
            animation_stagger: 0.1,
            container_class: String::new(),
        }
    }
}

/// Render one descriptor to markup.
///
/// `stagger_delay` is the layout-computed enter delay for this shape's slot;
/// an explicit authored `delay` on the descriptor wins over it. Returns
/// `None` for an unknown component type outside debug mode.
pub fn render_shape(
    shape: &ShapeDescriptor,
    index: usize,
    stagger_delay: f32,
    opts: &RenderOptions,
) -> Option<String> {
    let raw_type = shape.component_type.as_deref().unwrap_or("");
    let Some(ty) = ComponentType::parse(raw_type) else {
        if opts.debug {
            return Some(format!(
                "<div class=\"error-component\">Unknown component type: {raw_type}</div>"
            ));
        }
        debug!("skipping shape {index}: unknown component type {raw_type:?}");
        return None;
    };

    let positioning = shape.positioning.as_deref().unwrap_or("");
    let style_name = shape.style_name.as_deref().unwrap_or("");
    let positioning_classes = style_map::positioning_classes(positioning);
    let size_class = style_map::size_classes(shape.size.unwrap_or(0), ty.as_str());
    let style_classes = style_map::style_classes(style_name);

    let (animation_class, delay_style) = if opts.enable_animations {
        let effective_delay = if shape.delay > 0.0 {
            shape.delay
        } else {
            stagger_delay
        };
        (
            style_map::animation_class(shape.animation.as_deref()),
            style_map::animation_delay_style(effective_delay),
        )
    } else {
        ("", None)
    };

    let style_attr = delay_style
        .map(|s| format!(" style=\"{s}\""))
        .unwrap_or_default();

    let mut markup = format!(
        "<div class=\"shape-wrapper {positioning_classes}\" \
         data-component-type=\"{raw_type}\" data-index=\"{index}\" \
         data-style-name=\"{style_name}\">\
         <div class=\"{size_class} {style_classes} {animation_class}\"{style_attr}>{}</div>",
        shape_markup(ty, shape)
    );

    if opts.debug {
        markup.push_str(&debug_overlay(shape, raw_type, style_name, positioning));
    }
    markup.push_str("</div>");
    Some(markup)
}

fn debug_overlay(
    shape: &ShapeDescriptor,
    raw_type: &str,
    style_name: &str,
    positioning: &str,
) -> String {
    format!(
        "<div class=\"debug-overlay\"><div class=\"debug-info\">\
         <span>Type: {raw_type}</span>\
         <span>Style: {style_name}</span>\
         <span>Size: {}%</span>\
         <span>Position: {positioning}</span>\
         </div></div>",
        shape.size.unwrap_or(0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> ShapeDescriptor {
        ShapeDescriptor {
            id: Some("s1".to_string()),
            component_type: Some("circle".to_string()),
            content: "<span>c</span>".to_string(),
            style_name: Some("glowRed".to_string()),
            size: Some(50),
            positioning: Some("center".to_string()),
            animation: Some("fadeIn".to_string()),
            delay: 0.0,
        }
    }

    #[test]
    fn test_known_type_renders_mapped_classes() {
        let markup = render_shape(&circle(), 0, 0.0, &RenderOptions::default()).unwrap();
        assert!(markup.contains("data-component-type=\"circle\""));
        assert!(markup.contains("circle-size-50"));
        assert!(markup.contains("bg-red-500 shadow-red-500/50 text-white"));
        assert!(markup.contains("animate-fadeIn"));
        // delay 0 and stagger 0: no inline delay style
        assert!(!markup.contains("animation-delay"));
    }

    #[test]
    fn test_unknown_type_skipped_in_production() {
        let shape = ShapeDescriptor {
            component_type: Some("hexagon".to_string()),
            ..circle()
        };
        assert_eq!(render_shape(&shape, 0, 0.0, &RenderOptions::default()), None);
    }

    #[test]
    fn test_unknown_type_placeholder_in_debug() {
        let shape = ShapeDescriptor {
            component_type: Some("hexagon".to_string()),
            ..circle()
        };
        let opts = RenderOptions {
            debug: true,
            ..RenderOptions::default()
        };
        let markup = render_shape(&shape, 0, 0.0, &opts).unwrap();
        assert!(markup.contains("Unknown component type: hexagon"));
    }

    #[test]
    fn test_authored_delay_wins_over_stagger() {
        let shape = ShapeDescriptor {
            delay: 0.6,
            ..circle()
        };
        let markup = render_shape(&shape, 2, 0.2, &RenderOptions::default()).unwrap();
        assert!(markup.contains("animation-delay: 0.6s"));
    }

    #[test]
    fn test_stagger_applies_when_no_authored_delay() {
        let markup = render_shape(&circle(), 2, 0.2, &RenderOptions::default()).unwrap();
        assert!(markup.contains("animation-delay: 0.2s"));
    }

    #[test]
    fn test_animations_disabled() {
        let opts = RenderOptions {
            enable_animations: false,
            ..RenderOptions::default()
        };
        let markup = render_shape(&circle(), 0, 0.5, &opts).unwrap();
        assert!(!markup.contains("animate-fadeIn"));
        assert!(!markup.contains("animation-delay"));
    }

    #[test]
    fn test_debug_overlay_readout() {
        let opts = RenderOptions {
            debug: true,
            ..RenderOptions::default()
        };
        let markup = render_shape(&circle(), 0, 0.0, &opts).unwrap();
        assert!(markup.contains("<span>Type: circle</span>"));
        assert!(markup.contains("<span>Size: 50%</span>"));
    }
}
