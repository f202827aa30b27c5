use serde::{Deserialize, Serialize};

use tablekit_core::constants::DEFAULT_SEAT_OFFSET;

/// Where a furniture slot attaches to the table: one of the four
/// straight edges, or the continuous ring around a circular table.
///
/// `Ring` is only meaningful when the table shape is a circle; edge
/// sides on a circle are accepted but geometrically undefined (the
/// solver falls through to edge math using the width/height extents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
    Ring,
}

/// Visual footprint variant of a furniture sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureStyle {
    #[default]
    Straight,
    Curved,
    LShaped,
    LShapedMirrored,
    Round,
}

/// What kind of furniture occupies a slot. A drawing concern only: the
/// kind picks the sprite's nominal footprint, it never affects placement
/// math or collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    #[default]
    Chair,
    Sofa,
    Armchair,
}

/// A single furniture placement request attached to a table side.
///
/// Slots sharing a side are ordered by `index_on_side`, which the slot
/// plan keeps dense (0..k-1) across removals. At most one slot occupies
/// a given `(side, index_on_side)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureSlot {
    pub side: Side,
    pub index_on_side: usize,
    /// Explicit placement angle in degrees for ring slots. When unset,
    /// ring slots are distributed evenly.
    #[serde(default)]
    pub angle_override: Option<f64>,
    /// Outward distance from the table boundary.
    #[serde(default = "default_seat_offset")]
    pub offset_from_edge: f64,
    #[serde(default)]
    pub style: FurnitureStyle,
    #[serde(default)]
    pub kind: FurnitureKind,
}

fn default_seat_offset() -> f64 {
    DEFAULT_SEAT_OFFSET
}

impl FurnitureSlot {
    /// A default chair slot on `side` at the given per-side index.
    pub fn new(side: Side, index_on_side: usize) -> Self {
        Self {
            side,
            index_on_side,
            angle_override: None,
            offset_from_edge: DEFAULT_SEAT_OFFSET,
            style: FurnitureStyle::default(),
            kind: FurnitureKind::default(),
        }
    }

    /// A ring slot pinned to an explicit angle in degrees.
    pub fn at_angle(index_on_side: usize, angle_deg: f64) -> Self {
        Self {
            angle_override: Some(angle_deg),
            ..Self::new(Side::Ring, index_on_side)
        }
    }
}

/// Partial slot used in plan seeds; missing fields take the same
/// defaults as [`FurnitureSlot::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSeed {
    pub side: Side,
    #[serde(default)]
    pub index_on_side: Option<usize>,
    #[serde(default)]
    pub angle_override: Option<f64>,
    #[serde(default)]
    pub offset_from_edge: Option<f64>,
    #[serde(default)]
    pub style: Option<FurnitureStyle>,
    #[serde(default)]
    pub kind: Option<FurnitureKind>,
}

impl SlotSeed {
    /// Completes the seed into a slot, using `fallback_index` when the
    /// seed does not pin a per-side index.
    pub fn into_slot(self, fallback_index: usize) -> FurnitureSlot {
        FurnitureSlot {
            side: self.side,
            index_on_side: self.index_on_side.unwrap_or(fallback_index),
            angle_override: self.angle_override,
            offset_from_edge: self.offset_from_edge.unwrap_or(DEFAULT_SEAT_OFFSET),
            style: self.style.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
        }
    }
}
