//! Project entity
//!
//! A project belongs to exactly one profile (case-insensitive username key).
//! Its `config` field holds the landing-section layout; the server stores it
//! in the legacy flat wire form and the client re-derives rows on load.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PageConfig;
use crate::errors::Result;

/// A showcased project on a profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Assigned by the server at creation; create payloads may omit it
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image / embed URLs shown in the project slide
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub category: String,
    /// Landing-section layout, kept as raw JSON in whichever format the
    /// client sent; normalized via [`Project::page_config`].
    #[serde(default)]
    pub config: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Project {
    /// Parse the stored layout. Missing configs come back as an empty flat
    /// config rather than an error.
    pub fn page_config(&self) -> Result<PageConfig> {
        if self.config.is_null() {
            return Ok(PageConfig::Flat { shapes: Vec::new() });
        }
        PageConfig::from_value(&self.config)
    }

    /// Replace the layout with its flattened at-rest form.
    pub fn store_config(&mut self, config: &PageConfig) {
        self.config = config.to_storage_value();
    }
}

/// URL slug for a project name: lowercase, non-alphanumeric runs collapsed
/// to `-`, trimmed of leading/trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && !slug.is_empty() {
            slug.push('-');
            last_was_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
