//! Shared constants for the layout engine.
//!
//! Dimension bounds are enforced by clamping on every mutation, so the
//! engine's geometry operations stay total. Values are in abstract plan
//! units (the renderer applies the viewport scale).

/// Smallest allowed table extent (width, height, or radius).
pub const MIN_DIMENSION: f64 = 10.0;

/// Largest allowed table extent (width, height, or radius).
pub const MAX_DIMENSION: f64 = 500.0;

/// Smallest corner count for polygon-rendered table variants.
pub const MIN_CORNER_COUNT: u32 = 3;

/// Largest corner count for polygon-rendered table variants.
pub const MAX_CORNER_COUNT: u32 = 12;

/// Default outward distance between a table edge and its furniture.
pub const DEFAULT_SEAT_OFFSET: f64 = 18.0;

/// Hit tolerance (per axis) when toggling a slot near an existing one.
pub const TOGGLE_TOLERANCE: f64 = 5.0;

/// Grid cell size used by the preview scene, in plan units.
pub const GRID_CELL: f64 = 20.0;

/// Minimum viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum viewport zoom factor.
pub const MAX_ZOOM: f64 = 50.0;

/// Fraction of the viewport reserved as padding when fitting to bounds.
pub const VIEW_PADDING: f64 = 0.05;

/// Maximum number of entries kept on the session undo stack.
pub const UNDO_LIMIT: usize = 50;
