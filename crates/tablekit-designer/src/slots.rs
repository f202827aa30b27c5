//! Slot allocation for a table's furniture.
//!
//! [`SlotPlan`] owns the ordered slot list and realizes the
//! click-to-toggle interaction contract: toggling near an occupied zone
//! clears it, toggling an empty zone fills it. Per-side indices are
//! kept dense (0..k-1 in list order) across every mutation, and the
//! table capacity is always derived from the slot count.

use smallvec::SmallVec;

use tablekit_core::constants::TOGGLE_TOLERANCE;

use crate::model::{FurnitureSlot, Point, Side, SlotSeed, TableGeometry};
use crate::placement;

/// Outcome of a toggle: either a new slot was appended or an existing
/// one within tolerance was removed.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotToggle {
    /// A slot was appended at this global index.
    Added(usize),
    /// The slot previously at this global index was removed.
    Removed {
        index: usize,
        slot: FurnitureSlot,
    },
}

/// The ordered furniture slot list for one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPlan {
    slots: SmallVec<[FurnitureSlot; 8]>,
}

impl SlotPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan from seed slots, assigning dense per-side indices
    /// in list order regardless of what the seeds claim.
    pub fn from_seeds(seeds: impl IntoIterator<Item = SlotSeed>) -> Self {
        let mut plan = Self::new();
        for seed in seeds {
            let fallback = plan.count_on_side(seed.side);
            plan.slots.push(seed.into_slot(fallback));
        }
        plan.renumber();
        plan
    }

    pub fn slots(&self) -> &[FurnitureSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Seat capacity, always derived from the slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn count_on_side(&self, side: Side) -> usize {
        self.slots.iter().filter(|s| s.side == side).count()
    }

    /// Toggles a slot on `side` near `point` (table-local coordinates,
    /// unscaled). If an existing same-side slot's solved position lies
    /// within the tolerance on both axes, it is removed; otherwise a new
    /// slot is appended after the existing same-side slots.
    pub fn toggle_slot_at(
        &mut self,
        side: Side,
        point: Point,
        geometry: &TableGeometry,
    ) -> SlotToggle {
        for index in 0..self.slots.len() {
            if self.slots[index].side != side {
                continue;
            }
            let solved = placement::solve(&self.slots, index, geometry, 1.0);
            if (solved.x - point.x).abs() <= TOGGLE_TOLERANCE
                && (solved.y - point.y).abs() <= TOGGLE_TOLERANCE
            {
                let slot = self.slots.remove(index);
                self.renumber();
                return SlotToggle::Removed { index, slot };
            }
        }

        let slot = FurnitureSlot::new(side, self.count_on_side(side));
        self.slots.push(slot);
        SlotToggle::Added(self.slots.len() - 1)
    }

    /// Removes the slot at `global_index`. Out-of-bounds indices are a
    /// no-op. Remaining per-side indices are renumbered densely.
    pub fn remove_slot(&mut self, global_index: usize) -> Option<FurnitureSlot> {
        if global_index >= self.slots.len() {
            return None;
        }
        let slot = self.slots.remove(global_index);
        self.renumber();
        Some(slot)
    }

    /// Reinserts a slot at `global_index` (used to undo a removal).
    /// Indices past the end append.
    pub fn insert_slot(&mut self, global_index: usize, slot: FurnitureSlot) {
        let at = global_index.min(self.slots.len());
        self.slots.insert(at, slot);
        self.renumber();
    }

    /// Appends a slot, assigning the next per-side index.
    pub fn push_slot(&mut self, mut slot: FurnitureSlot) -> usize {
        slot.index_on_side = self.count_on_side(slot.side);
        self.slots.push(slot);
        self.slots.len() - 1
    }

    /// Recomputes every slot's per-side index from list order so each
    /// side carries the dense sequence 0..k-1.
    fn renumber(&mut self) {
        for index in 0..self.slots.len() {
            let side = self.slots[index].side;
            let rank = self.slots[..index].iter().filter(|s| s.side == side).count();
            self.slots[index].index_on_side = rank;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableShape;

    #[test]
    fn removal_renumbers_densely() {
        let mut plan = SlotPlan::new();
        plan.push_slot(FurnitureSlot::new(Side::Top, 0));
        plan.push_slot(FurnitureSlot::new(Side::Top, 0));
        plan.push_slot(FurnitureSlot::new(Side::Top, 0));
        assert_eq!(plan.capacity(), 3);

        plan.remove_slot(0);
        let indices: Vec<usize> = plan.slots().iter().map(|s| s.index_on_side).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(plan.capacity(), 2);
    }

    #[test]
    fn out_of_bounds_removal_is_a_noop() {
        let mut plan = SlotPlan::new();
        plan.push_slot(FurnitureSlot::new(Side::Left, 0));
        assert!(plan.remove_slot(5).is_none());
        assert_eq!(plan.capacity(), 1);
    }

    #[test]
    fn renumbering_is_per_side() {
        let mut plan = SlotPlan::new();
        plan.push_slot(FurnitureSlot::new(Side::Top, 0));
        plan.push_slot(FurnitureSlot::new(Side::Bottom, 0));
        plan.push_slot(FurnitureSlot::new(Side::Top, 0));
        plan.push_slot(FurnitureSlot::new(Side::Bottom, 0));

        plan.remove_slot(0);
        let pairs: Vec<(Side, usize)> = plan
            .slots()
            .iter()
            .map(|s| (s.side, s.index_on_side))
            .collect();
        assert_eq!(
            pairs,
            vec![(Side::Bottom, 0), (Side::Top, 0), (Side::Bottom, 1)]
        );
    }

    #[test]
    fn toggle_add_then_toggle_same_point_removes() {
        let geometry = TableGeometry::default();
        let mut plan = SlotPlan::new();
        let point = Point::new(0.0, -48.0);

        let first = plan.toggle_slot_at(Side::Top, point, &geometry);
        assert_eq!(first, SlotToggle::Added(0));
        assert_eq!(plan.capacity(), 1);

        let second = plan.toggle_slot_at(Side::Top, point, &geometry);
        assert!(matches!(second, SlotToggle::Removed { index: 0, .. }));
        assert!(plan.is_empty());
    }

    #[test]
    fn seeds_are_renumbered_in_list_order() {
        let plan = SlotPlan::from_seeds(vec![
            SlotSeed {
                side: Side::Top,
                index_on_side: Some(7),
                ..Default::default()
            },
            SlotSeed {
                side: Side::Top,
                ..Default::default()
            },
        ]);
        let indices: Vec<usize> = plan.slots().iter().map(|s| s.index_on_side).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn ring_toggle_uses_solved_positions() {
        let geometry = TableGeometry {
            shape: TableShape::Circle,
            radius: Some(30.0),
            ..TableGeometry::default()
        };
        let mut plan = SlotPlan::new();

        // First ring slot solves to 12 o'clock at radius + offset.
        plan.toggle_slot_at(Side::Ring, Point::new(200.0, 200.0), &geometry);
        let seat = placement::solve(plan.slots(), 0, &geometry, 1.0);

        let result = plan.toggle_slot_at(Side::Ring, Point::new(seat.x, seat.y), &geometry);
        assert!(matches!(result, SlotToggle::Removed { .. }));
    }
}
