//! # TableKit Designer
//!
//! Table and furniture layout engine for TableKit. Given a table
//! description (shape, dimensions, rotation) and a set of furniture
//! placement requests ("seat N on side S"), it computes the 2-D
//! transform for each furniture item in the table's local frame and
//! renders a scaled preview.
//!
//! ## Core Components
//!
//! - **Model**: table geometry (circle, square, rectangle, oval) and
//!   furniture slots with functional update operations
//! - **Placement**: pure solver mapping slots to positions and
//!   rotations (ring placement around circles, edge placement along
//!   straight sides)
//! - **Slots**: click-to-toggle slot allocation with dense per-side
//!   renumbering and derived capacity
//! - **Scene**: declarative drawing list (grid, silhouette, sprites,
//!   labels) independent of any drawing technology
//! - **Renderer**: rasterizes scenes to image buffers via tiny-skia
//! - **Session**: editing lifecycle with seeding, undo/redo, and
//!   immutable snapshots
//! - **Serialization**: versioned JSON plan files
//!
//! ## Architecture
//!
//! ```text
//! EditorSession (seed -> edits -> snapshot)
//!   ├── TableGeometry + SlotPlan (state)
//!   ├── EditorCommand (undo/redo)
//!   └── Viewport (zoom/pan)
//!
//! Placement (pure, per slot)
//!   └── Scene (drawing list)
//!         └── Renderer (raster preview)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tablekit_designer::{EditorSession, PlanSeed, Side, Point};
//!
//! let mut session = EditorSession::open(&PlanSeed::default());
//! session.toggle_slot_at(Side::Top, Point::new(0.0, -48.0));
//! let plan = session.snapshot();
//! assert_eq!(plan.capacity, 1);
//! ```

pub mod commands;
pub mod font_manager;
pub mod model;
pub mod placement;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod session;
pub mod slots;
pub mod viewport;

pub use commands::EditorCommand;
pub use model::{
    Dimension, FurnitureKind, FurnitureSlot, FurnitureStyle, GeometrySeed, Point, Side, SlotSeed,
    TableGeometry, TableShape,
};
pub use placement::{edge_parameter, ring_angle, solve, SeatTransform};
pub use renderer::render_scene;
pub use scene::{build_scene, Color, DrawPrimitive, Paint, Scene, SceneOptions, TextAnchor};
pub use serialization::{load_plan, save_plan, PlanFile, PlanMetadata};
pub use session::{EditorSession, PlanSeed, PlanState, TablePlan};
pub use slots::{SlotPlan, SlotToggle};
pub use viewport::{Viewport, ViewportState};
