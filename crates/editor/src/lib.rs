//! Dashboard editor state machine over row configs
//!
//! Holds the in-memory rows of one project's layout plus the selection
//! pointers, and applies guarded transitions. Guards that the original UI
//! silently ignored (adding past the row cap, removing the last shape or
//! row) report [`EditOutcome::Rejected`] so callers can tell an applied
//! operation from a refused one; the counts still obey the original no-op
//! laws.
//!
//! Field edits are NOT validated here. Validation stays a pure, explicit
//! step over the flattened result (`page_builder_config::validate`) that the
//! caller runs when it wants to.

use log::debug;
use serde::{Deserialize, Serialize};

use page_builder_config::defaults::{default_row, default_shape};
use page_builder_shared::{PageConfig, RowConfig, ShapeDescriptor};

/// Hard cap on shapes per row. Keeps the renderer's stagger stride safe.
pub const MAX_SHAPES_PER_ROW: usize = 6;

/// Outcome of an editor transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected(RejectReason),
}

/// Why a transition was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The row already holds [`MAX_SHAPES_PER_ROW`] shapes
    RowAtCapacity,
    /// Removing the shape would leave its row empty
    LastShapeInRow,
    /// The page must keep at least one row
    LastRow,
    NoSuchRow,
    NoSuchShape,
}

/// Partial shape update, shallow-merged onto the target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeEdit {
    pub component_type: Option<String>,
    pub content: Option<String>,
    pub style_name: Option<String>,
    pub size: Option<u32>,
    pub positioning: Option<String>,
    pub animation: Option<String>,
    pub delay: Option<f32>,
}

/// Selection pointers into the rows being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub active_row: usize,
    pub editing_shape: Option<usize>,
}

/// Live editing state for one project's layout
#[derive(Debug, Clone)]
pub struct EditorState {
    rows: Vec<RowConfig>,
    selection: Selection,
}

impl EditorState {
    /// Start editing a page config. Flat configs regroup as one synthetic
    /// row; an empty config starts from the default row so the row
    /// invariants hold from the first transition.
    pub fn load(config: PageConfig) -> Self {
        let mut rows = config.into_rows();
        rows.retain(|row| !row.shapes.is_empty());
        if rows.is_empty() {
            rows.push(default_row());
        }
        EditorState {
            rows,
            selection: Selection::default(),
        }
    }

    pub fn rows(&self) -> &[RowConfig] {
        &self.rows
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Append a default shape to a row and select it for editing
    pub fn add_shape(&mut self, row_idx: usize) -> EditOutcome {
        let Some(row) = self.rows.get_mut(row_idx) else {
            return EditOutcome::Rejected(RejectReason::NoSuchRow);
        };
        if row.shapes.len() >= MAX_SHAPES_PER_ROW {
            debug!("add_shape refused: row {row_idx} at capacity");
            return EditOutcome::Rejected(RejectReason::RowAtCapacity);
        }
        row.shapes.push(default_shape());
        self.selection = Selection {
            active_row: row_idx,
            editing_shape: Some(row.shapes.len() - 1),
        };
        EditOutcome::Applied
    }

    /// Remove a shape from a row; a row never drops to zero shapes
    pub fn remove_shape(&mut self, row_idx: usize, shape_idx: usize) -> EditOutcome {
        let Some(row) = self.rows.get_mut(row_idx) else {
            return EditOutcome::Rejected(RejectReason::NoSuchRow);
        };
        if shape_idx >= row.shapes.len() {
            return EditOutcome::Rejected(RejectReason::NoSuchShape);
        }
        if row.shapes.len() <= 1 {
            debug!("remove_shape refused: row {row_idx} holds its last shape");
            return EditOutcome::Rejected(RejectReason::LastShapeInRow);
        }
        row.shapes.remove(shape_idx);
        self.selection.editing_shape = None;
        EditOutcome::Applied
    }

    /// Insert a new default row immediately below `row_idx` and select its
    /// shape
    pub fn add_row_below(&mut self, row_idx: usize) -> EditOutcome {
        if row_idx >= self.rows.len() {
            return EditOutcome::Rejected(RejectReason::NoSuchRow);
        }
        self.rows.insert(row_idx + 1, default_row());
        self.selection = Selection {
            active_row: row_idx + 1,
            editing_shape: Some(0),
        };
        EditOutcome::Applied
    }

    /// Remove a row; the page keeps at least one
    pub fn remove_row(&mut self, row_idx: usize) -> EditOutcome {
        if row_idx >= self.rows.len() {
            return EditOutcome::Rejected(RejectReason::NoSuchRow);
        }
        if self.rows.len() <= 1 {
            debug!("remove_row refused: last remaining row");
            return EditOutcome::Rejected(RejectReason::LastRow);
        }
        self.rows.remove(row_idx);
        self.selection = Selection {
            active_row: 0,
            editing_shape: None,
        };
        EditOutcome::Applied
    }

    /// Shallow-merge a partial edit onto one shape. No validation happens
    /// here.
    pub fn edit_shape(&mut self, row_idx: usize, shape_idx: usize, edit: ShapeEdit) -> EditOutcome {
        let Some(row) = self.rows.get_mut(row_idx) else {
            return EditOutcome::Rejected(RejectReason::NoSuchRow);
        };
        let Some(shape) = row.shapes.get_mut(shape_idx) else {
            return EditOutcome::Rejected(RejectReason::NoSuchShape);
        };

        if let Some(component_type) = edit.component_type {
            shape.component_type = Some(component_type);
        }
        if let Some(content) = edit.content {
            shape.content = content;
        }
        if let Some(style_name) = edit.style_name {
            shape.style_name = Some(style_name);
        }
        if let Some(size) = edit.size {
            shape.size = Some(size);
        }
        if let Some(positioning) = edit.positioning {
            shape.positioning = Some(positioning);
        }
        if let Some(animation) = edit.animation {
            shape.animation = Some(animation);
        }
        if let Some(delay) = edit.delay {
            shape.delay = delay;
        }
        EditOutcome::Applied
    }

    /// Flatten to the ordered shape sequence submitted on Save. Row
    /// grouping is discarded; the round trip through storage is lossy.
    pub fn flatten(&self) -> Vec<ShapeDescriptor> {
        self.rows
            .iter()
            .flat_map(|row| row.shapes.iter().cloned())
            .collect()
    }

    /// The rows as a page config, for previewing unsaved state
    pub fn page_config(&self) -> PageConfig {
        PageConfig::Rows {
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_row_state() -> EditorState {
        let config = PageConfig::from_value(&json!([
            {"id": "r1", "shapes": [
                {"id": "a", "componentType": "circle", "styleName": "neon",
                 "size": 50, "positioning": "center"},
                {"id": "b", "componentType": "square", "styleName": "glass",
                 "size": 25, "positioning": "left"}
            ]},
            {"id": "r2", "shapes": [
                {"id": "c", "componentType": "rectangle", "styleName": "purple",
                 "size": 100, "positioning": "center"}
            ]}
        ]))
        .unwrap();
        EditorState::load(config)
    }

    #[test]
    fn test_add_shape_selects_new_shape() {
        let mut state = two_row_state();
        assert_eq!(state.add_shape(0), EditOutcome::Applied);
        assert_eq!(state.rows()[0].shapes.len(), 3);
        assert_eq!(
            state.selection(),
            Selection {
                active_row: 0,
                editing_shape: Some(2)
            }
        );
    }

    #[test]
    fn test_add_shape_rejected_at_capacity() {
        let mut state = two_row_state();
        for _ in 0..4 {
            assert_eq!(state.add_shape(0), EditOutcome::Applied);
        }
        assert_eq!(state.rows()[0].shapes.len(), MAX_SHAPES_PER_ROW);

        assert_eq!(
            state.add_shape(0),
            EditOutcome::Rejected(RejectReason::RowAtCapacity)
        );
        assert_eq!(state.rows()[0].shapes.len(), MAX_SHAPES_PER_ROW);
    }

    #[test]
    fn test_remove_shape_keeps_rows_nonempty() {
        let mut state = two_row_state();
        assert_eq!(state.remove_shape(0, 0), EditOutcome::Applied);
        assert_eq!(state.rows()[0].shapes.len(), 1);

        assert_eq!(
            state.remove_shape(0, 0),
            EditOutcome::Rejected(RejectReason::LastShapeInRow)
        );
        assert_eq!(state.rows()[0].shapes.len(), 1);

        assert_eq!(
            state.remove_shape(1, 0),
            EditOutcome::Rejected(RejectReason::LastShapeInRow)
        );
        assert_eq!(state.rows()[1].shapes.len(), 1);
    }

    #[test]
    fn test_remove_shape_clears_editing_selection() {
        let mut state = two_row_state();
        state.add_shape(0);
        assert!(state.selection().editing_shape.is_some());
        state.remove_shape(0, 1);
        assert_eq!(state.selection().editing_shape, None);
    }

    #[test]
    fn test_add_row_below_inserts_and_selects() {
        let mut state = two_row_state();
        assert_eq!(state.add_row_below(0), EditOutcome::Applied);
        assert_eq!(state.rows().len(), 3);
        // The inserted row sits between the originals
        assert_eq!(state.rows()[2].shapes[0].id.as_deref(), Some("c"));
        assert_eq!(
            state.selection(),
            Selection {
                active_row: 1,
                editing_shape: Some(0)
            }
        );
    }

    #[test]
    fn test_remove_row_keeps_last_row() {
        let mut state = two_row_state();
        assert_eq!(state.remove_row(1), EditOutcome::Applied);
        assert_eq!(state.rows().len(), 1);
        assert_eq!(
            state.remove_row(0),
            EditOutcome::Rejected(RejectReason::LastRow)
        );
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_remove_row_resets_selection() {
        let mut state = two_row_state();
        state.add_shape(1);
        state.remove_row(1);
        assert_eq!(
            state.selection(),
            Selection {
                active_row: 0,
                editing_shape: None
            }
        );
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        let mut state = two_row_state();
        assert_eq!(
            state.add_shape(9),
            EditOutcome::Rejected(RejectReason::NoSuchRow)
        );
        assert_eq!(
            state.remove_shape(0, 9),
            EditOutcome::Rejected(RejectReason::NoSuchShape)
        );
        assert_eq!(
            state.add_row_below(9),
            EditOutcome::Rejected(RejectReason::NoSuchRow)
        );
    }

    #[test]
    fn test_edit_shape_shallow_merges() {
        let mut state = two_row_state();
        let outcome = state.edit_shape(
            0,
            1,
            ShapeEdit {
                content: Some("<p>updated</p>".to_string()),
                size: Some(75),
                ..ShapeEdit::default()
            },
        );
        assert_eq!(outcome, EditOutcome::Applied);

        let shape = &state.rows()[0].shapes[1];
        assert_eq!(shape.content, "<p>updated</p>");
        assert_eq!(shape.size, Some(75));
        // Untouched fields survive the merge
        assert_eq!(shape.component_type.as_deref(), Some("square"));
        assert_eq!(shape.positioning.as_deref(), Some("left"));
    }

    #[test]
    fn test_edit_shape_accepts_invalid_values_unvalidated() {
        let mut state = two_row_state();
        state.edit_shape(
            0,
            0,
            ShapeEdit {
                size: Some(80),
                ..ShapeEdit::default()
            },
        );
        assert_eq!(state.rows()[0].shapes[0].size, Some(80));

        // Validation is an explicit, separate step over the flattened result
        let report = page_builder_config::validate(&state.flatten());
        assert!(!report.is_valid);
        assert_eq!(report.errors[0].field, "size");
    }

    #[test]
    fn test_flatten_discards_grouping() {
        let state = two_row_state();
        let ids: Vec<_> = state
            .flatten()
            .iter()
            .map(|s| s.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_flat_config_regroups_as_single_row() {
        let config = PageConfig::from_value(&json!([
            {"id": "a", "componentType": "circle", "styleName": "neon",
             "size": 50, "positioning": "center"},
            {"id": "b", "componentType": "square", "styleName": "glass",
             "size": 25, "positioning": "left"}
        ]))
        .unwrap();
        let state = EditorState::load(config);
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].shapes.len(), 2);
    }

    #[test]
    fn test_load_empty_config_starts_with_default_row() {
        let state = EditorState::load(PageConfig::Flat { shapes: vec![] });
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.rows()[0].shapes.len(), 1);
        assert_eq!(
            state.rows()[0].shapes[0].component_type.as_deref(),
            Some("rectangle")
        );
    }
}
