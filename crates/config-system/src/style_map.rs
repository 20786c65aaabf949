//! Lookup tables from vocabulary values to presentation class strings
//!
//! Pure functions; unknown input falls back instead of erroring. The size
//! tables implement a two-level fallback that must be preserved exactly:
//! an unknown size clamps to the 100 entry of whichever table was selected,
//! and an unknown shape type selects the `default` table before the size
//! fallback applies.

/// Class string for a style preset, empty for unknown input
pub fn style_classes(style_name: &str) -> &'static str {
    match style_name {
        "glowRed" => "bg-red-500 shadow-red-500/50 text-white",
        "glowWhite" => "shadow-white/50 text-black",
        "purple" => "shadow-purple-600/50 text-white",
        "gradientBlue" => "bg-gradient-to-br from-blue-400 to-blue-600 text-white",
        "gradientPurple" => "bg-gradient-to-br from-purple-400 to-purple-600 text-white",
        "glass" => "backdrop-blur-md bg-white/10 text-white",
        "neon" => "shadow-cyan-400/50 text-cyan-400",
        _ => "",
    }
}

/// Flex classes for a positioning value, centered for unknown input
pub fn positioning_classes(positioning: &str) -> &'static str {
    match positioning {
        "left" => "flex justify-start items-center",
        "right" => "flex justify-end items-center",
        "center" => "flex justify-center items-center",
        _ => "flex justify-center items-center",
    }
}

/// Per-shape size table: (size, class string), ordered small to full
type SizeTable = [(u32, &'static str); 5];

const CIRCLE_SIZES: SizeTable = [
    // custom classes defined in shapes.module.css
    (25, "circle-size-25"),
    (33, "circle-size-33"),
    (50, "circle-size-50"),
    (75, "circle-size-75"),
    (100, "circle-size-100"),
];

const SQUARE_SIZES: SizeTable = [
    (25, "w-20 h-20 md:w-28 md:h-28 lg:w-32 lg:h-32"),
    (33, "w-28 h-28 md:w-36 md:h-36 lg:w-40 lg:h-40"),
    (50, "w-40 h-40 md:w-52 md:h-52 lg:w-56 lg:h-56"),
    (75, "w-56 h-56 md:w-64 md:h-64 lg:w-72 lg:h-72"),
    (100, "w-72 h-72 md:w-80 md:h-80 lg:w-96 lg:h-96"),
];

const RECTANGLE_SIZES: SizeTable = [
    (25, "w-64 h-20 md:w-80 md:h-24 lg:w-96 lg:h-28"),
    (33, "w-80 h-24 md:w-96 md:h-28 lg:w-[28rem] lg:h-32"),
    (50, "w-[28rem] h-28 md:w-[32rem] md:h-32 lg:w-[36rem] lg:h-36"),
    (75, "w-[36rem] h-32 md:w-[40rem] md:h-36 lg:w-[44rem] lg:h-40"),
    (100, "w-[44rem] h-40 md:w-[52rem] md:h-48 lg:w-[60rem] lg:h-56"),
];

const TRIANGLE_SIZES: SizeTable = SQUARE_SIZES;

const DEFAULT_SIZES: SizeTable = SQUARE_SIZES;

fn size_table(component_type: &str) -> &'static SizeTable {
    match component_type {
        "circle" => &CIRCLE_SIZES,
        "square" => &SQUARE_SIZES,
        "rectangle" => &RECTANGLE_SIZES,
        "triangle" => &TRIANGLE_SIZES,
        _ => &DEFAULT_SIZES,
    }
}

/// Size classes for a shape. Unknown shape types use the default table;
/// unknown sizes clamp to the selected table's 100 entry.
pub fn size_classes(size: u32, component_type: &str) -> &'static str {
    let table = size_table(component_type);
    table
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, classes)| *classes)
        .unwrap_or(table[4].1)
}

/// Animation class for an optional animation name, empty when absent or
/// unrecognized
pub fn animation_class(animation: Option<&str>) -> &'static str {
    match animation {
        Some("fadeIn") => "animate-fadeIn",
        Some("slideUp") => "animate-slideUp",
        Some("slideDown") => "animate-slideDown",
        Some("slideLeft") => "animate-slideLeft",
        Some("slideRight") => "animate-slideRight",
        Some("pulse") => "animate-pulse",
        Some("bounce") => "animate-bounce",
        _ => "",
    }
}

/// Inline animation-delay declaration, `None` for a zero/negative delay
pub fn animation_delay_style(delay: f32) -> Option<String> {
    if delay > 0.0 {
        Some(format!("animation-delay: {delay}s"))
    } else {
        None
    }
}
