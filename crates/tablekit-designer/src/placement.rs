//! Furniture placement solver.
//!
//! Pure functions mapping a furniture slot + table geometry + render
//! scale to a position and rotation in the table's local frame (origin
//! at the table center, +x right, +y down). Output coordinates are
//! already scaled.
//!
//! Two algorithms, selected by table shape and slot side:
//!
//! - **Ring placement** for ring slots on circular tables: slots sit on
//!   a circle of radius `effective_radius + offset_from_edge`, either at
//!   an explicit angle or evenly distributed starting at 12 o'clock.
//! - **Edge placement** for slots on straight sides: slots are evenly
//!   distributed along the edge with a gap at each corner, pushed
//!   outward by `offset_from_edge`, facing the table.

use std::f64::consts::PI;

use crate::model::{FurnitureSlot, Side, TableGeometry, TableShape};

/// Solved transform for one furniture sprite, in the table's local
/// frame with the origin at the table center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatTransform {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

/// Angle in radians for the ring slot at `index` among `total_ring`
/// evenly distributed ring slots. Slot 0 sits at 12 o'clock.
pub fn ring_angle(index: usize, total_ring: usize) -> f64 {
    index as f64 * 2.0 * PI / total_ring as f64 - PI / 2.0
}

/// Position parameter along an edge for the seat with 1-based
/// `side_rank` among `total_on_side` same-side seats. The distribution
/// leaves a gap at each corner: one seat lands at the midpoint, three
/// seats at 1/4, 1/2, 3/4.
pub fn edge_parameter(side_rank: usize, total_on_side: usize) -> f64 {
    side_rank as f64 / (total_on_side + 1) as f64
}

/// Solves position and rotation for the slot at `index` in `slots`.
///
/// The caller invokes this once per existing slot, so same-side counts
/// are always at least one and no division by zero can occur. A circle
/// table carrying edge-side slots is a caller error: the math falls
/// through to edge placement using the width/height extents without
/// crashing, but the result is geometrically meaningless.
///
/// Evenly distributed ring seats render upright (rotation 0); only
/// explicit-angle seats carry their angle into the sprite rotation.
/// This mirrors the interaction design as shipped and is pending
/// product confirmation, so it is preserved rather than "fixed".
pub fn solve(
    slots: &[FurnitureSlot],
    index: usize,
    geometry: &TableGeometry,
    scale: f64,
) -> SeatTransform {
    let slot = &slots[index];
    if geometry.shape == TableShape::Circle && slot.side == Side::Ring {
        solve_ring(slots, index, geometry, scale)
    } else {
        solve_edge(slots, index, geometry, scale)
    }
}

fn solve_ring(
    slots: &[FurnitureSlot],
    index: usize,
    geometry: &TableGeometry,
    scale: f64,
) -> SeatTransform {
    let slot = &slots[index];
    let radius = geometry.effective_radius() * scale + slot.offset_from_edge * scale;

    let theta = match slot.angle_override {
        Some(angle_deg) => angle_deg.to_radians(),
        None => {
            let total_ring = slots.iter().filter(|s| s.side == Side::Ring).count();
            ring_angle(index, total_ring)
        }
    };

    SeatTransform {
        x: radius * theta.cos(),
        y: radius * theta.sin(),
        rotation_degrees: slot.angle_override.unwrap_or(0.0),
    }
}

fn solve_edge(
    slots: &[FurnitureSlot],
    index: usize,
    geometry: &TableGeometry,
    scale: f64,
) -> SeatTransform {
    let slot = &slots[index];
    let total_on_side = slots.iter().filter(|s| s.side == slot.side).count();
    let side_rank = 1 + slots[..index].iter().filter(|s| s.side == slot.side).count();
    let t = edge_parameter(side_rank, total_on_side);

    let half_w = geometry.width * scale / 2.0;
    let half_h = geometry.height * scale / 2.0;
    let offset = slot.offset_from_edge * scale;

    let (x, y, rotation_degrees) = match slot.side {
        Side::Top => ((t - 0.5) * geometry.width * scale, -(half_h + offset), 0.0),
        Side::Right => (half_w + offset, (t - 0.5) * geometry.height * scale, 90.0),
        Side::Bottom => ((t - 0.5) * geometry.width * scale, half_h + offset, 180.0),
        Side::Left => (-(half_w + offset), (t - 0.5) * geometry.height * scale, 270.0),
        // Ring slot on a non-circular table: undefined by contract,
        // resolved as a top-edge seat so the solver stays total.
        Side::Ring => ((t - 0.5) * geometry.width * scale, -(half_h + offset), 0.0),
    };

    SeatTransform {
        x,
        y,
        rotation_degrees,
    }
}
