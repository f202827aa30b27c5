//! Data model for the layout engine.
//!
//! A table is described by a [`TableGeometry`] (shape, extents, rotation)
//! and a list of [`FurnitureSlot`]s attached to its sides. Both are plain
//! value types; all mutation goes through the functional update
//! operations on [`TableGeometry`] and the slot plan.

use serde::{Deserialize, Serialize};

mod geometry;
mod slot;

pub use geometry::{Dimension, GeometrySeed, TableGeometry, TableShape};
pub use slot::{FurnitureKind, FurnitureSlot, FurnitureStyle, Side, SlotSeed};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates `p` around `center` by `angle_deg` degrees.
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos_a - dy * sin_a,
        y: center.y + dx * sin_a + dy * cos_a,
    }
}
