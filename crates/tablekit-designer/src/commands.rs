//! Reversible editing commands.
//!
//! Each command captures enough state on application to undo itself
//! exactly, including across clamping (dimension commands restore the
//! captured geometry rather than applying an inverse delta). The
//! session keeps applied commands on its undo/redo stacks.

use crate::model::{Dimension, FurnitureSlot, Point, Side, TableGeometry, TableShape};
use crate::session::PlanState;
use crate::slots::SlotToggle;

/// An edit applied to the session's plan state.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    ChangeShape {
        new_shape: TableShape,
        old_geometry: Option<TableGeometry>,
    },
    AdjustDimension {
        field: Dimension,
        delta: f64,
        old_geometry: Option<TableGeometry>,
    },
    Rotate {
        delta: i32,
    },
    ToggleSlot {
        side: Side,
        point: Point,
        outcome: Option<SlotToggle>,
    },
    RemoveSlot {
        index: usize,
        removed: Option<FurnitureSlot>,
    },
    SetLabel {
        new_label: Option<String>,
        old_label: Option<Option<String>>,
    },
}

impl EditorCommand {
    /// Applies the command to `state`, capturing whatever is needed to
    /// undo it. Used both for the initial edit and for redo.
    pub fn apply(&mut self, state: &mut PlanState) {
        match self {
            EditorCommand::ChangeShape {
                new_shape,
                old_geometry,
            } => {
                *old_geometry = Some(state.geometry);
                state.geometry = state.geometry.change_shape(*new_shape);
            }
            EditorCommand::AdjustDimension {
                field,
                delta,
                old_geometry,
            } => {
                *old_geometry = Some(state.geometry);
                state.geometry = state.geometry.adjust_dimension(*field, *delta);
            }
            EditorCommand::Rotate { delta } => {
                state.geometry = state.geometry.rotate(*delta);
            }
            EditorCommand::ToggleSlot {
                side,
                point,
                outcome,
            } => {
                *outcome = Some(state.slots.toggle_slot_at(*side, *point, &state.geometry));
            }
            EditorCommand::RemoveSlot { index, removed } => {
                *removed = state.slots.remove_slot(*index);
            }
            EditorCommand::SetLabel {
                new_label,
                old_label,
            } => {
                *old_label = Some(state.label.take());
                state.label = new_label.clone();
            }
        }
    }

    /// Reverts the command. Rotation undoes by the inverse delta (exact
    /// under mod-360 wrapping); everything else restores captured state.
    pub fn undo(&mut self, state: &mut PlanState) {
        match self {
            EditorCommand::ChangeShape { old_geometry, .. }
            | EditorCommand::AdjustDimension { old_geometry, .. } => {
                if let Some(old) = old_geometry.take() {
                    state.geometry = old;
                }
            }
            EditorCommand::Rotate { delta } => {
                state.geometry = state.geometry.rotate(-*delta);
            }
            EditorCommand::ToggleSlot { outcome, .. } => match outcome.take() {
                Some(SlotToggle::Added(index)) => {
                    state.slots.remove_slot(index);
                }
                Some(SlotToggle::Removed { index, slot }) => {
                    state.slots.insert_slot(index, slot);
                }
                None => {}
            },
            EditorCommand::RemoveSlot { index, removed } => {
                if let Some(slot) = removed.take() {
                    state.slots.insert_slot(*index, slot);
                }
            }
            EditorCommand::SetLabel { old_label, .. } => {
                if let Some(old) = old_label.take() {
                    state.label = old;
                }
            }
        }
    }

    /// Command name for history display.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::ChangeShape { .. } => "Change Shape",
            EditorCommand::AdjustDimension { .. } => "Adjust Dimension",
            EditorCommand::Rotate { .. } => "Rotate Table",
            EditorCommand::ToggleSlot { .. } => "Toggle Seat",
            EditorCommand::RemoveSlot { .. } => "Remove Seat",
            EditorCommand::SetLabel { .. } => "Edit Label",
        }
    }
}
