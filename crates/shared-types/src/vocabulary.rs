//! Closed vocabulary of valid component values
//!
//! Single source of truth for the value sets consumed by validation and the
//! style mappers. Adding a new valid value means updating this module and
//! nowhere else.
//!
//! Shape descriptors carry these values as raw wire strings/numbers so that
//! an unknown value never aborts deserialization of a whole page config; the
//! enums here are the vocabulary the validator and renderer check against.

use serde::{Deserialize, Serialize};

/// Shape variants the renderer can dispatch to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Circle,
    Rectangle,
    Square,
    Triangle,
    DownArrow,
}

impl ComponentType {
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Circle,
        ComponentType::Rectangle,
        ComponentType::Square,
        ComponentType::Triangle,
        ComponentType::DownArrow,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "circle" => Some(ComponentType::Circle),
            "rectangle" => Some(ComponentType::Rectangle),
            "square" => Some(ComponentType::Square),
            "triangle" => Some(ComponentType::Triangle),
            "downArrow" => Some(ComponentType::DownArrow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Circle => "circle",
            ComponentType::Rectangle => "rectangle",
            ComponentType::Square => "square",
            ComponentType::Triangle => "triangle",
            ComponentType::DownArrow => "downArrow",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named visual presets (background, shadow, text color bundles)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StyleName {
    GlowRed,
    GlowWhite,
    Purple,
    GradientBlue,
    GradientPurple,
    Glass,
    Neon,
}

impl StyleName {
    pub const ALL: [StyleName; 7] = [
        StyleName::GlowRed,
        StyleName::GlowWhite,
        StyleName::Purple,
        StyleName::GradientBlue,
        StyleName::GradientPurple,
        StyleName::Glass,
        StyleName::Neon,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "glowRed" => Some(StyleName::GlowRed),
            "glowWhite" => Some(StyleName::GlowWhite),
            "purple" => Some(StyleName::Purple),
            "gradientBlue" => Some(StyleName::GradientBlue),
            "gradientPurple" => Some(StyleName::GradientPurple),
            "glass" => Some(StyleName::Glass),
            "neon" => Some(StyleName::Neon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleName::GlowRed => "glowRed",
            StyleName::GlowWhite => "glowWhite",
            StyleName::Purple => "purple",
            StyleName::GradientBlue => "gradientBlue",
            StyleName::GradientPurple => "gradientPurple",
            StyleName::Glass => "glass",
            StyleName::Neon => "neon",
        }
    }
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal positioning of a shape inside its flex item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Positioning {
    Left,
    Center,
    Right,
}

impl Positioning {
    pub const ALL: [Positioning; 3] = [Positioning::Left, Positioning::Center, Positioning::Right];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Positioning::Left),
            "center" => Some(Positioning::Center),
            "right" => Some(Positioning::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::Left => "left",
            Positioning::Center => "center",
            Positioning::Right => "right",
        }
    }
}

impl std::fmt::Display for Positioning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enter animations a shape may opt into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    FadeIn,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Pulse,
    Bounce,
}

impl AnimationType {
    pub const ALL: [AnimationType; 7] = [
        AnimationType::FadeIn,
        AnimationType::SlideUp,
        AnimationType::SlideDown,
        AnimationType::SlideLeft,
        AnimationType::SlideRight,
        AnimationType::Pulse,
        AnimationType::Bounce,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fadeIn" => Some(AnimationType::FadeIn),
            "slideUp" => Some(AnimationType::SlideUp),
            "slideDown" => Some(AnimationType::SlideDown),
            "slideLeft" => Some(AnimationType::SlideLeft),
            "slideRight" => Some(AnimationType::SlideRight),
            "pulse" => Some(AnimationType::Pulse),
            "bounce" => Some(AnimationType::Bounce),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationType::FadeIn => "fadeIn",
            AnimationType::SlideUp => "slideUp",
            AnimationType::SlideDown => "slideDown",
            AnimationType::SlideLeft => "slideLeft",
            AnimationType::SlideRight => "slideRight",
            AnimationType::Pulse => "pulse",
            AnimationType::Bounce => "bounce",
        }
    }
}

impl std::fmt::Display for AnimationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valid relative sizes. These are scale percentages, not pixels.
pub const SIZES: [u32; 5] = [25, 33, 50, 75, 100];

/// Whether a raw wire size is a member of the size vocabulary
pub fn is_valid_size(size: u32) -> bool {
    SIZES.contains(&size)
}
