//! Shape / row / page configuration model
//!
//! A page config is either a sequence of rows (each holding 1..=6 shapes) or
//! the legacy flat sequence of shapes the backend stores at rest. New
//! payloads carry an explicit `format` discriminant; bare legacy arrays are
//! still accepted through structural detection.
//!
//! Fields on [`ShapeDescriptor`] are raw wire values on purpose: a descriptor
//! with an unknown `componentType` must still deserialize so the validator
//! can report it and the renderer can skip it, instead of the whole page
//! failing to parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{PortfolioError, Result};

/// One visual block of a landing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeDescriptor {
    /// Opaque stable identifier, unique within its row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub component_type: Option<String>,
    /// Raw markup rendered verbatim inside the shape. Trusted input; no
    /// sanitization is performed.
    pub content: String,
    pub style_name: Option<String>,
    pub size: Option<u32>,
    pub positioning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    /// Seconds before the enter animation begins
    pub delay: f32,
}

/// An ordered group of shapes rendered side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowConfig {
    pub id: String,
    /// 1..=6 shapes, enforced by the editor. Older payloads used the key
    /// `components`.
    #[serde(alias = "components")]
    pub shapes: Vec<ShapeDescriptor>,
}

/// Full layout of a project's landing section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum PageConfig {
    /// Row-grouped layout used by the editor and the rows renderer
    Rows { rows: Vec<RowConfig> },
    /// Legacy flat layout: every shape is an independent full-width block
    Flat { shapes: Vec<ShapeDescriptor> },
}

impl PageConfig {
    /// Parse a page config from its JSON form.
    ///
    /// Objects with a `format` discriminant are the versioned schema. Bare
    /// arrays are legacy payloads: an array whose first element carries a
    /// `shapes` (or `components`) sub-array is row-grouped, anything else is
    /// the flat format.
    pub fn from_value(value: &Value) -> Result<PageConfig> {
        if let Some(obj) = value.as_object() {
            if obj.contains_key("format") {
                return serde_json::from_value(value.clone()).map_err(|e| {
                    PortfolioError::InvalidConfig {
                        message: format!("Malformed page config: {e}"),
                        field: Some("format".to_string()),
                    }
                });
            }
            return Err(PortfolioError::InvalidConfig {
                message: "Page config object is missing the format discriminant".to_string(),
                field: Some("format".to_string()),
            });
        }

        let Some(items) = value.as_array() else {
            return Err(PortfolioError::InvalidConfig {
                message: "Page config must be an array or a tagged object".to_string(),
                field: None,
            });
        };

        let looks_row_grouped = items.first().is_some_and(|first| {
            first.get("shapes").is_some_and(Value::is_array)
                || first.get("components").is_some_and(Value::is_array)
        });

        if looks_row_grouped {
            let rows: Vec<RowConfig> = serde_json::from_value(value.clone()).map_err(|e| {
                PortfolioError::InvalidConfig {
                    message: format!("Malformed row config: {e}"),
                    field: Some("shapes".to_string()),
                }
            })?;
            Ok(PageConfig::Rows { rows })
        } else {
            let shapes: Vec<ShapeDescriptor> =
                serde_json::from_value(value.clone()).map_err(|e| PortfolioError::InvalidConfig {
                    message: format!("Malformed shape list: {e}"),
                    field: None,
                })?;
            Ok(PageConfig::Flat { shapes })
        }
    }

    /// Flatten to the ordered shape sequence, discarding row grouping.
    /// Lossy by design; this is the persisted wire form.
    pub fn flatten(&self) -> Vec<ShapeDescriptor> {
        match self {
            PageConfig::Rows { rows } => {
                rows.iter().flat_map(|row| row.shapes.iter().cloned()).collect()
            }
            PageConfig::Flat { shapes } => shapes.clone(),
        }
    }

    /// The legacy at-rest form: a bare flat JSON array of shapes.
    pub fn to_storage_value(&self) -> Value {
        // flatten never produces unserializable data
        serde_json::to_value(self.flatten()).unwrap_or_else(|_| Value::Array(Vec::new()))
    }

    /// Re-derive editing rows. Row configs pass through; a flat config
    /// becomes one synthetic row holding the whole flat list.
    pub fn into_rows(self) -> Vec<RowConfig> {
        match self {
            PageConfig::Rows { rows } => rows,
            PageConfig::Flat { shapes } => vec![RowConfig {
                id: format!("row-{}", uuid::Uuid::new_v4()),
                shapes,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PageConfig::Rows { rows } => rows.is_empty(),
            PageConfig::Flat { shapes } => shapes.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shape(id: &str) -> ShapeDescriptor {
        ShapeDescriptor {
            id: Some(id.to_string()),
            component_type: Some("rectangle".to_string()),
            content: String::new(),
            style_name: Some("glowWhite".to_string()),
            size: Some(50),
            positioning: Some("center".to_string()),
            animation: None,
            delay: 0.0,
        }
    }

    #[test]
    fn test_discriminant_takes_priority() {
        let value = json!({
            "format": "rows",
            "rows": [{"id": "r1", "shapes": [{"componentType": "circle"}]}]
        });
        let config = PageConfig::from_value(&value).unwrap();
        match config {
            PageConfig::Rows { rows } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].shapes[0].component_type.as_deref(), Some("circle"));
            }
            PageConfig::Flat { .. } => panic!("expected rows format"),
        }
    }

    #[test]
    fn test_legacy_rows_detected_structurally() {
        let value = json!([
            {"id": "r1", "shapes": [{"componentType": "circle"}, {"componentType": "square"}]},
            {"id": "r2", "components": [{"componentType": "triangle"}]}
        ]);
        let config = PageConfig::from_value(&value).unwrap();
        let rows = config.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].shapes.len(), 2);
        // `components` is accepted as an alias for `shapes`
        assert_eq!(rows[1].shapes.len(), 1);
    }

    #[test]
    fn test_legacy_flat_detected_structurally() {
        let value = json!([
            {"componentType": "circle", "styleName": "neon", "size": 50, "positioning": "left"}
        ]);
        let config = PageConfig::from_value(&value).unwrap();
        assert!(matches!(config, PageConfig::Flat { .. }));
    }

    #[test]
    fn test_empty_array_is_empty_flat() {
        let config = PageConfig::from_value(&json!([])).unwrap();
        assert!(matches!(config, PageConfig::Flat { ref shapes } if shapes.is_empty()));
    }

    #[test]
    fn test_non_array_rejected() {
        assert!(PageConfig::from_value(&json!("not a config")).is_err());
        assert!(PageConfig::from_value(&json!({"rows": []})).is_err());
    }

    #[test]
    fn test_flatten_is_lossy() {
        // Rows [[A, B], [C]] flatten to [A, B, C]; reloading the flat form
        // yields a single synthetic row, not the original grouping.
        let config = PageConfig::Rows {
            rows: vec![
                RowConfig {
                    id: "r1".to_string(),
                    shapes: vec![shape("a"), shape("b")],
                },
                RowConfig {
                    id: "r2".to_string(),
                    shapes: vec![shape("c")],
                },
            ],
        };

        let flat = config.flatten();
        let ids: Vec<_> = flat.iter().map(|s| s.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let stored = config.to_storage_value();
        let reloaded = PageConfig::from_value(&stored).unwrap();
        let rows = reloaded.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].shapes.len(), 3);
    }

    #[test]
    fn test_descriptor_defaults() {
        let shape: ShapeDescriptor = serde_json::from_value(json!({})).unwrap();
        assert_eq!(shape.component_type, None);
        assert_eq!(shape.size, None);
        assert_eq!(shape.delay, 0.0);
        assert_eq!(shape.content, "");
    }

    #[test]
    fn test_unknown_component_type_still_deserializes() {
        let shape: ShapeDescriptor =
            serde_json::from_value(json!({"componentType": "hexagon", "size": 80})).unwrap();
        assert_eq!(shape.component_type.as_deref(), Some("hexagon"));
        assert_eq!(shape.size, Some(80));
    }
}
