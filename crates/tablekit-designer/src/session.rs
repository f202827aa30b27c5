//! Editing session for one table.
//!
//! An [`EditorSession`] owns the geometry and slot plan from the moment
//! an editing interaction opens until the caller takes the final
//! snapshot. It seeds itself from a partial plan merged over defaults,
//! routes every edit through reversible commands with bounded undo/redo
//! stacks, and hands back an immutable [`TablePlan`] on save. Nothing
//! here persists anything; persistence is the caller's concern.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tablekit_core::constants::UNDO_LIMIT;

use crate::commands::EditorCommand;
use crate::model::{
    Dimension, FurnitureSlot, GeometrySeed, Point, Side, SlotSeed, TableGeometry, TableShape,
};
use crate::scene::{build_scene, Scene, SceneOptions};
use crate::slots::{SlotPlan, SlotToggle};
use crate::viewport::{Viewport, ViewportState};

/// The mutable plan state commands operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanState {
    pub geometry: TableGeometry,
    pub slots: SlotPlan,
    pub label: Option<String>,
}

/// Partial input used to open a session. Every field is optional;
/// defaults fill the gaps and numeric fields clamp at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSeed {
    #[serde(default)]
    pub geometry: GeometrySeed,
    #[serde(default)]
    pub slots: Vec<SlotSeed>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub viewport: Option<ViewportState>,
}

/// Immutable snapshot handed to the caller on save. The session never
/// re-reads or revalidates it after the hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePlan {
    pub geometry: TableGeometry,
    pub slots: Vec<FurnitureSlot>,
    pub label: Option<String>,
    /// Derived seat count, always equal to `slots.len()`.
    pub capacity: usize,
}

/// One open editing interaction, from seed to save or discard.
#[derive(Debug, Clone)]
pub struct EditorSession {
    state: PlanState,
    pub viewport: Viewport,
    pub show_grid: bool,
    pub is_modified: bool,
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
}

impl EditorSession {
    /// Opens a session with state reset to defaults merged with `seed`.
    pub fn open(seed: &PlanSeed) -> Self {
        let geometry = TableGeometry::with_defaults(&seed.geometry);
        let slots = SlotPlan::from_seeds(seed.slots.iter().cloned());
        let mut viewport = Viewport::default();
        if let Some(state) = seed.viewport {
            viewport.apply_state(state);
        }

        info!(
            shape = ?geometry.shape,
            capacity = slots.capacity(),
            "opened table editing session"
        );

        Self {
            state: PlanState {
                geometry,
                slots,
                label: seed.label.clone(),
            },
            viewport,
            show_grid: true,
            is_modified: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &TableGeometry {
        &self.state.geometry
    }

    pub fn slots(&self) -> &[FurnitureSlot] {
        self.state.slots.slots()
    }

    pub fn label(&self) -> Option<&str> {
        self.state.label.as_deref()
    }

    /// Seat capacity, derived from the slot count.
    pub fn capacity(&self) -> usize {
        self.state.slots.capacity()
    }

    /// Switches the table shape.
    pub fn change_shape(&mut self, new_shape: TableShape) {
        self.push_command(EditorCommand::ChangeShape {
            new_shape,
            old_geometry: None,
        });
    }

    /// Applies a clamped delta to a geometry dimension.
    pub fn adjust_dimension(&mut self, field: Dimension, delta: f64) {
        self.push_command(EditorCommand::AdjustDimension {
            field,
            delta,
            old_geometry: None,
        });
    }

    /// Rotates the table by `delta` degrees (wraps in both directions).
    pub fn rotate_table(&mut self, delta: i32) {
        self.push_command(EditorCommand::Rotate { delta });
    }

    /// Sets or clears the table label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.push_command(EditorCommand::SetLabel {
            new_label: label,
            old_label: None,
        });
    }

    /// Toggles a seat on `side` near `point` (table-local, unscaled
    /// coordinates) and reports what happened.
    pub fn toggle_slot_at(&mut self, side: Side, point: Point) -> SlotToggle {
        let outcome = self
            .state
            .slots
            .toggle_slot_at(side, point, &self.state.geometry);
        self.record(EditorCommand::ToggleSlot {
            side,
            point,
            outcome: Some(outcome.clone()),
        });
        outcome
    }

    /// Removes the seat at `global_index`; out-of-range indices are a
    /// no-op and leave the history untouched.
    pub fn remove_slot(&mut self, global_index: usize) -> bool {
        match self.state.slots.remove_slot(global_index) {
            Some(slot) => {
                self.record(EditorCommand::RemoveSlot {
                    index: global_index,
                    removed: Some(slot),
                });
                true
            }
            None => {
                debug!(global_index, "ignored out-of-range seat removal");
                false
            }
        }
    }

    /// Applies a command and records it.
    fn push_command(&mut self, mut cmd: EditorCommand) {
        cmd.apply(&mut self.state);
        self.record(cmd);
    }

    /// Records an already-applied command on the undo stack.
    fn record(&mut self, cmd: EditorCommand) {
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.undo_stack.len() > UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
        self.is_modified = true;
    }

    /// Undoes the most recent edit.
    pub fn undo(&mut self) {
        if let Some(mut cmd) = self.undo_stack.pop() {
            cmd.undo(&mut self.state);
            self.redo_stack.push(cmd);
            self.is_modified = true;
        }
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) {
        if let Some(mut cmd) = self.redo_stack.pop() {
            cmd.apply(&mut self.state);
            self.undo_stack.push(cmd);
            self.is_modified = true;
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    /// Builds the preview drawing list for the current state.
    pub fn scene(&self) -> Scene {
        let options = SceneOptions {
            show_grid: self.show_grid,
            label: self.state.label.clone(),
            ..Default::default()
        };
        build_scene(&self.state.geometry, &self.state.slots, &self.viewport, &options)
    }

    /// Produces the immutable snapshot handed back on save.
    pub fn snapshot(&self) -> TablePlan {
        debug!(capacity = self.capacity(), "captured plan snapshot");
        TablePlan {
            geometry: self.state.geometry,
            slots: self.state.slots.slots().to_vec(),
            label: self.state.label.clone(),
            capacity: self.capacity(),
        }
    }

    /// Ends the session, yielding the final snapshot.
    pub fn finish(self) -> TablePlan {
        info!(capacity = self.state.slots.capacity(), "closed table editing session");
        TablePlan {
            capacity: self.state.slots.capacity(),
            slots: self.state.slots.slots().to_vec(),
            label: self.state.label,
            geometry: self.state.geometry,
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::open(&PlanSeed::default())
    }
}
