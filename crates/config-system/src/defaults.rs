//! Default-config factories
//!
//! Used when a project is created (one row, one rectangle) and by the
//! editor's add-shape / add-row operations.

use uuid::Uuid;

use page_builder_shared::{PageConfig, RowConfig, ShapeDescriptor};

const DEFAULT_CONTENT: &str =
    "<div class='text-black text-3xl font-bold text-center'>Your Content Here</div>";

/// A fresh placeholder shape: full-width rectangle, glowWhite, centered,
/// fading in with no delay
pub fn default_shape() -> ShapeDescriptor {
    ShapeDescriptor {
        id: Some(Uuid::new_v4().to_string()),
        component_type: Some("rectangle".to_string()),
        content: DEFAULT_CONTENT.to_string(),
        style_name: Some("glowWhite".to_string()),
        size: Some(100),
        positioning: Some("center".to_string()),
        animation: Some("fadeIn".to_string()),
        delay: 0.0,
    }
}

/// A fresh row holding one default shape
pub fn default_row() -> RowConfig {
    RowConfig {
        id: Uuid::new_v4().to_string(),
        shapes: vec![default_shape()],
    }
}

/// The layout a newly created project starts with
pub fn default_page() -> PageConfig {
    PageConfig::Rows {
        rows: vec![default_row()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_default_shape_is_valid() {
        let shape = default_shape();
        let report = validate(std::slice::from_ref(&shape));
        assert!(report.is_valid, "{:?}", report.errors);
        assert!(shape.id.is_some());
    }

    #[test]
    fn test_default_page_shape() {
        let page = default_page();
        let rows = page.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].shapes.len(), 1);
        assert_eq!(
            rows[0].shapes[0].component_type.as_deref(),
            Some("rectangle")
        );
    }

    #[test]
    fn test_fresh_ids_every_call() {
        assert_ne!(default_shape().id, default_shape().id);
        assert_ne!(default_row().id, default_row().id);
    }
}
