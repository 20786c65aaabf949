//! Descriptor validation against the vocabulary
//!
//! Validation collects every failure instead of stopping at the first one:
//! each invalid field of each descriptor produces its own error, attached to
//! the descriptor's index. The only short-circuit is the top-level shape of
//! the payload; a non-array config yields exactly one error and no per-item
//! checks run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use page_builder_shared::vocabulary::{self, ComponentType, Positioning, StyleName};
use page_builder_shared::ShapeDescriptor;

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Result of validating a config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate an ordered sequence of shape descriptors.
///
/// Pure: the report depends only on the input. `content`, `animation` and
/// `delay` are deliberately unchecked.
pub fn validate(shapes: &[ShapeDescriptor]) -> ValidationReport {
    let mut errors = Vec::new();
    for (index, shape) in shapes.iter().enumerate() {
        errors.extend(validate_shape(shape, Some(index)));
    }
    ValidationReport::from_errors(errors)
}

/// Validate a raw JSON payload before it is trusted as a flat config.
///
/// A non-array payload produces one top-level error and stops. Array items
/// that are not objects produce one error for that index; object items go
/// through the full field checks.
pub fn validate_value(value: &Value) -> ValidationReport {
    let Some(items) = value.as_array() else {
        return ValidationReport::from_errors(vec![ValidationError {
            field: "config".to_string(),
            message: "Config must be an array".to_string(),
            index: None,
        }]);
    };

    let mut errors = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<ShapeDescriptor>(item.clone()) {
            Ok(shape) => errors.extend(validate_shape(&shape, Some(index))),
            Err(e) => errors.push(ValidationError {
                field: "config".to_string(),
                message: format!("Item is not a component config: {e}"),
                index: Some(index),
            }),
        }
    }
    ValidationReport::from_errors(errors)
}

/// Validate one descriptor. Every failed check appends its own error; a
/// descriptor missing several fields reports all of them.
pub fn validate_shape(shape: &ShapeDescriptor, index: Option<usize>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match shape.component_type.as_deref() {
        None | Some("") => errors.push(ValidationError {
            field: "componentType".to_string(),
            message: "componentType is required".to_string(),
            index,
        }),
        Some(value) => {
            if ComponentType::parse(value).is_none() {
                errors.push(ValidationError {
                    field: "componentType".to_string(),
                    message: format!("Invalid component type: {value}"),
                    index,
                });
            }
        }
    }

    match shape.style_name.as_deref() {
        None | Some("") => errors.push(ValidationError {
            field: "styleName".to_string(),
            message: "styleName is required".to_string(),
            index,
        }),
        Some(value) => {
            if StyleName::parse(value).is_none() {
                errors.push(ValidationError {
                    field: "styleName".to_string(),
                    message: format!("Invalid style name: {value}"),
                    index,
                });
            }
        }
    }

    // Strict presence: an absent size and an explicit 0 both fail "required"
    match shape.size {
        None | Some(0) => errors.push(ValidationError {
            field: "size".to_string(),
            message: "size is required".to_string(),
            index,
        }),
        Some(size) => {
            if !vocabulary::is_valid_size(size) {
                errors.push(ValidationError {
                    field: "size".to_string(),
                    message: format!("Invalid size: {size}"),
                    index,
                });
            }
        }
    }

    match shape.positioning.as_deref() {
        None | Some("") => errors.push(ValidationError {
            field: "positioning".to_string(),
            message: "positioning is required".to_string(),
            index,
        }),
        Some(value) => {
            if Positioning::parse(value).is_none() {
                errors.push(ValidationError {
                    field: "positioning".to_string(),
                    message: format!("Invalid positioning: {value}"),
                    index,
                });
            }
        }
    }

    errors
}
