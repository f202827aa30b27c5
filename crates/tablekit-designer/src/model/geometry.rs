use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use tablekit_core::constants::{
    MAX_CORNER_COUNT, MAX_DIMENSION, MIN_CORNER_COUNT, MIN_DIMENSION,
};

use super::{rotate_point, Point};

/// Shapes a table can take. The set is closed; unknown shapes are
/// rejected by the type system rather than at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Circle,
    Square,
    Rectangle,
    Oval,
}

/// Numeric fields of a [`TableGeometry`] that accept delta mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Width,
    Height,
    Radius,
    CornerCount,
}

/// A table's geometry in its local coordinate frame (origin at center,
/// +y pointing down toward the bottom edge).
///
/// Extents are clamped to `[MIN_DIMENSION, MAX_DIMENSION]` and the
/// corner count to `[MIN_CORNER_COUNT, MAX_CORNER_COUNT]` on
/// construction and on every delta mutation, so every instance reachable
/// through this API is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableGeometry {
    pub shape: TableShape,
    pub width: f64,
    pub height: f64,
    /// Circle only. When unset, `min(width, height) / 2` is used.
    pub radius: Option<f64>,
    /// Degrees in `[0, 360)`; wraps on increment and decrement.
    pub rotation: i32,
    /// Meaningful for polygon-rendered table variants.
    pub corner_count: u32,
}

/// Partial geometry used to seed an editing session. Missing fields take
/// the documented defaults; numeric fields are clamped at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySeed {
    #[serde(default)]
    pub shape: Option<TableShape>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub rotation: Option<i32>,
    #[serde(default)]
    pub corner_count: Option<u32>,
}

fn clamp_extent(value: f64) -> f64 {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

fn wrap_degrees(value: i32) -> i32 {
    ((value % 360) + 360) % 360
}

impl Default for TableGeometry {
    /// A 60x60 square table, unrotated.
    fn default() -> Self {
        Self {
            shape: TableShape::Square,
            width: 60.0,
            height: 60.0,
            radius: None,
            rotation: 0,
            corner_count: 4,
        }
    }
}

impl TableGeometry {
    /// Builds a complete geometry from a partial seed, filling gaps with
    /// defaults and clamping every numeric field.
    pub fn with_defaults(seed: &GeometrySeed) -> Self {
        let base = Self::default();
        Self {
            shape: seed.shape.unwrap_or(base.shape),
            width: clamp_extent(seed.width.unwrap_or(base.width)),
            height: clamp_extent(seed.height.unwrap_or(base.height)),
            radius: seed.radius.map(clamp_extent),
            rotation: wrap_degrees(seed.rotation.unwrap_or(base.rotation)),
            corner_count: seed
                .corner_count
                .unwrap_or(base.corner_count)
                .clamp(MIN_CORNER_COUNT, MAX_CORNER_COUNT),
        }
    }

    /// Switches the table shape. Switching to a circle with no radius
    /// set derives one from the current extents.
    pub fn change_shape(self, new_shape: TableShape) -> Self {
        let radius = if new_shape == TableShape::Circle && self.radius.is_none() {
            Some(self.width.min(self.height) / 2.0)
        } else {
            self.radius
        };
        Self {
            shape: new_shape,
            radius,
            ..self
        }
    }

    /// Applies `delta` to the given field, clamping the result to the
    /// field's valid range. A zero delta on an already-valid geometry is
    /// an identity.
    pub fn adjust_dimension(self, field: Dimension, delta: f64) -> Self {
        match field {
            Dimension::Width => Self {
                width: clamp_extent(self.width + delta),
                ..self
            },
            Dimension::Height => Self {
                height: clamp_extent(self.height + delta),
                ..self
            },
            Dimension::Radius => Self {
                radius: Some(clamp_extent(self.effective_radius() + delta)),
                ..self
            },
            Dimension::CornerCount => {
                let next = self.corner_count as i64 + delta.round() as i64;
                Self {
                    corner_count: next
                        .clamp(MIN_CORNER_COUNT as i64, MAX_CORNER_COUNT as i64)
                        as u32,
                    ..self
                }
            }
        }
    }

    /// Rotates by `delta` degrees, wrapping into `[0, 360)` in both
    /// directions.
    pub fn rotate(self, delta: i32) -> Self {
        Self {
            rotation: wrap_degrees(self.rotation + delta),
            ..self
        }
    }

    /// The radius used for ring placement: the explicit radius when set,
    /// otherwise half the smaller extent.
    pub fn effective_radius(&self) -> f64 {
        self.radius.unwrap_or_else(|| self.width.min(self.height) / 2.0)
    }

    /// Half-extents of the table footprint, scaled. For circles both
    /// halves equal the effective radius.
    pub fn half_extents(&self, scale: f64) -> (f64, f64) {
        match self.shape {
            TableShape::Circle => {
                let r = self.effective_radius() * scale;
                (r, r)
            }
            _ => (self.width * scale / 2.0, self.height * scale / 2.0),
        }
    }

    /// Builds the table silhouette as a path centered at the origin,
    /// scaled and rotated by the table rotation.
    pub fn silhouette_path(&self, scale: f64) -> Path {
        let mut builder = Path::builder();
        match self.shape {
            TableShape::Circle => {
                builder.add_circle(
                    point(0.0, 0.0),
                    (self.effective_radius() * scale) as f32,
                    lyon::path::Winding::Positive,
                );
            }
            TableShape::Oval => {
                builder.add_ellipse(
                    point(0.0, 0.0),
                    lyon::math::vector(
                        (self.width * scale / 2.0) as f32,
                        (self.height * scale / 2.0) as f32,
                    ),
                    lyon::math::Angle::degrees(self.rotation as f32),
                    lyon::path::Winding::Positive,
                );
            }
            TableShape::Square | TableShape::Rectangle => {
                let half_w = self.width * scale / 2.0;
                let half_h = self.height * scale / 2.0;
                let origin = Point::new(0.0, 0.0);
                let corners = [
                    Point::new(-half_w, -half_h),
                    Point::new(half_w, -half_h),
                    Point::new(half_w, half_h),
                    Point::new(-half_w, half_h),
                ];
                for (i, corner) in corners.iter().enumerate() {
                    let rotated = rotate_point(*corner, origin, self.rotation as f64);
                    let p = point(rotated.x as f32, rotated.y as f32);
                    if i == 0 {
                        builder.begin(p);
                    } else {
                        builder.line_to(p);
                    }
                }
                builder.close();
            }
        }
        builder.build()
    }
}
