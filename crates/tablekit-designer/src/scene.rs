//! Preview scene builder.
//!
//! Produces a declarative drawing list from a table geometry, its slot
//! plan, and a viewport: grid lines and intersection markers, the table
//! silhouette with a drop shadow and inset highlight, the center dot,
//! an optional label, one furniture sprite per slot, and the capacity
//! readout. The output is pure data; rasterization lives in
//! [`crate::renderer`] and any other drawing technology can consume the
//! same list.
//!
//! All primitive coordinates are in pixel space with the viewport
//! already applied; consumers draw them as-is.

use lyon::math::point;
use lyon::path::Path;

use tablekit_core::constants::GRID_CELL;

use crate::model::{FurnitureKind, FurnitureStyle, TableGeometry};
use crate::placement;
use crate::slots::SlotPlan;
use crate::viewport::Viewport;

/// RGBA color, technology-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Fill and stroke for a primitive. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }

    pub fn fill_and_stroke(fill: Color, stroke: Color, width: f64) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
            stroke_width: width,
        }
    }
}

/// Text anchor relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// A single drawable element, in pixel coordinates.
#[derive(Debug, Clone)]
pub enum DrawPrimitive {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        paint: Paint,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        paint: Paint,
    },
    /// Arbitrary outline (table silhouettes, furniture sprites).
    Path { path: Path, paint: Paint },
    Text {
        position: (f64, f64),
        content: String,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
}

/// The full drawing list for one preview frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub primitives: Vec<DrawPrimitive>,
}

/// Options controlling scene composition.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    pub show_grid: bool,
    /// Grid cell size in plan units.
    pub grid_cell: f64,
    /// Optional label drawn below the table.
    pub label: Option<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_cell: GRID_CELL,
            label: None,
        }
    }
}

fn background_color() -> Color {
    Color::rgb(250, 248, 244)
}
fn grid_minor_color() -> Color {
    Color::rgba(160, 160, 160, 70)
}
fn grid_major_color() -> Color {
    Color::rgba(120, 120, 120, 140)
}
fn grid_marker_color() -> Color {
    Color::rgba(120, 120, 120, 110)
}
fn table_fill_color() -> Color {
    Color::rgb(222, 184, 135)
}
fn table_border_color() -> Color {
    Color::rgb(139, 94, 60)
}
fn table_shadow_color() -> Color {
    Color::rgba(40, 30, 20, 60)
}
fn table_highlight_color() -> Color {
    Color::rgba(255, 255, 255, 90)
}
fn center_dot_color() -> Color {
    Color::rgb(255, 140, 0)
}
fn furniture_fill_color() -> Color {
    Color::rgb(105, 105, 105)
}
fn furniture_border_color() -> Color {
    Color::rgb(60, 60, 60)
}
fn label_color() -> Color {
    Color::rgb(70, 60, 50)
}
fn capacity_color() -> Color {
    Color::rgb(255, 255, 255)
}

/// Background color consumers should clear the surface to before
/// drawing the primitive list.
pub fn scene_background() -> Color {
    background_color()
}

/// Nominal sprite footprint (width, height) in plan units per kind.
fn footprint(kind: FurnitureKind) -> (f64, f64) {
    match kind {
        FurnitureKind::Chair => (14.0, 14.0),
        FurnitureKind::Armchair => (18.0, 16.0),
        FurnitureKind::Sofa => (30.0, 16.0),
    }
}

/// Builds the drawing list for one frame. Pure: neither the geometry
/// nor the slot plan is mutated.
pub fn build_scene(
    geometry: &TableGeometry,
    plan: &SlotPlan,
    viewport: &Viewport,
    options: &SceneOptions,
) -> Scene {
    let mut scene = Scene::default();

    if options.show_grid {
        push_grid(&mut scene, viewport, options.grid_cell);
    }
    push_table(&mut scene, geometry, viewport);
    push_furniture(&mut scene, geometry, plan, viewport);
    push_labels(&mut scene, geometry, plan, viewport, options);

    scene
}

/// Grid lines on plan-unit multiples of `cell`, plus intersection
/// markers. A line counts as a major "center" line when it passes
/// within half a (scaled) cell of the canvas midpoint.
fn push_grid(scene: &mut Scene, viewport: &Viewport, cell: f64) {
    let width = viewport.canvas_width();
    let height = viewport.canvas_height();
    let (mid_x, mid_y) = viewport.canvas_midpoint();
    let step = cell * viewport.zoom();
    if step <= 1.0 {
        return;
    }

    let min_world = viewport.pixel_to_world(0.0, 0.0);
    let max_world = viewport.pixel_to_world(width, height);

    let first_col = (min_world.x / cell).floor() as i64;
    let last_col = (max_world.x / cell).ceil() as i64;
    let first_row = (min_world.y / cell).floor() as i64;
    let last_row = (max_world.y / cell).ceil() as i64;

    let mut col_pixels = Vec::new();
    for col in first_col..=last_col {
        let (px, _) = viewport.world_to_pixel(col as f64 * cell, 0.0);
        if px < 0.0 || px > width {
            continue;
        }
        let major = (px - mid_x).abs() <= step / 2.0;
        let color = if major {
            grid_major_color()
        } else {
            grid_minor_color()
        };
        scene.primitives.push(DrawPrimitive::Line {
            from: (px, 0.0),
            to: (px, height),
            paint: Paint::stroke(color, if major { 1.5 } else { 1.0 }),
        });
        col_pixels.push(px);
    }

    let mut row_pixels = Vec::new();
    for row in first_row..=last_row {
        let (_, py) = viewport.world_to_pixel(0.0, row as f64 * cell);
        if py < 0.0 || py > height {
            continue;
        }
        let major = (py - mid_y).abs() <= step / 2.0;
        let color = if major {
            grid_major_color()
        } else {
            grid_minor_color()
        };
        scene.primitives.push(DrawPrimitive::Line {
            from: (0.0, py),
            to: (width, py),
            paint: Paint::stroke(color, if major { 1.5 } else { 1.0 }),
        });
        row_pixels.push(py);
    }

    for &px in &col_pixels {
        for &py in &row_pixels {
            scene.primitives.push(DrawPrimitive::Circle {
                center: (px, py),
                radius: 1.2,
                paint: Paint::fill(grid_marker_color()),
            });
        }
    }
}

/// Table silhouette: drop shadow behind, filled and stroked body, an
/// inset highlight for depth, and the orange center dot.
fn push_table(scene: &mut Scene, geometry: &TableGeometry, viewport: &Viewport) {
    let zoom = viewport.zoom();
    let (cx, cy) = viewport.world_to_pixel(0.0, 0.0);
    let silhouette = geometry.silhouette_path(zoom);

    let to_canvas =
        lyon::math::Transform::translation(cx as f32, cy as f32);
    let body = silhouette.clone().transformed(&to_canvas);

    let shadow_transform =
        lyon::math::Transform::translation(cx as f32 + 2.0, cy as f32 + 3.0);
    scene.primitives.push(DrawPrimitive::Path {
        path: silhouette.clone().transformed(&shadow_transform),
        paint: Paint::fill(table_shadow_color()),
    });

    scene.primitives.push(DrawPrimitive::Path {
        path: body,
        paint: Paint::fill_and_stroke(table_fill_color(), table_border_color(), 2.0),
    });

    // Inset highlight: same outline shrunk toward the center.
    let highlight_transform = lyon::math::Transform::scale(0.9, 0.9)
        .then_translate(lyon::math::vector(cx as f32, cy as f32));
    scene.primitives.push(DrawPrimitive::Path {
        path: silhouette.transformed(&highlight_transform),
        paint: Paint::stroke(table_highlight_color(), 1.5),
    });

    scene.primitives.push(DrawPrimitive::Circle {
        center: (cx, cy),
        radius: 3.0,
        paint: Paint::fill(center_dot_color()),
    });
}

/// One sprite per slot, placed by the solver at the viewport zoom.
fn push_furniture(
    scene: &mut Scene,
    geometry: &TableGeometry,
    plan: &SlotPlan,
    viewport: &Viewport,
) {
    let zoom = viewport.zoom();
    let (cx, cy) = viewport.world_to_pixel(0.0, 0.0);
    let slots = plan.slots();
    for index in 0..slots.len() {
        // Solver output is already scaled, so it offsets pixel space
        // directly from the table center.
        let seat = placement::solve(slots, index, geometry, zoom);
        let (px, py) = (cx + seat.x, cy + seat.y);
        let slot = &slots[index];
        let path = sprite_path(slot.kind, slot.style, zoom, px, py, seat.rotation_degrees);
        scene.primitives.push(DrawPrimitive::Path {
            path,
            paint: Paint::fill_and_stroke(furniture_fill_color(), furniture_border_color(), 1.0),
        });
    }
}

/// Sprite outline in pixel space: built in sprite-local coordinates,
/// rotated, then translated onto the seat position.
fn sprite_path(
    kind: FurnitureKind,
    style: FurnitureStyle,
    zoom: f64,
    px: f64,
    py: f64,
    rotation_degrees: f64,
) -> Path {
    let (w, h) = footprint(kind);
    let half_w = (w * zoom / 2.0) as f32;
    let half_h = (h * zoom / 2.0) as f32;

    let mut builder = Path::builder();
    match style {
        FurnitureStyle::Round => {
            builder.add_circle(
                point(0.0, 0.0),
                half_w.min(half_h),
                lyon::path::Winding::Positive,
            );
        }
        FurnitureStyle::Curved => {
            builder.add_rounded_rectangle(
                &lyon::math::Box2D::new(
                    point(-half_w, -half_h),
                    point(half_w, half_h),
                ),
                &lyon::path::builder::BorderRadii::new(half_h / 1.5),
                lyon::path::Winding::Positive,
            );
        }
        FurnitureStyle::Straight => {
            builder.add_rectangle(
                &lyon::math::Box2D::new(
                    point(-half_w, -half_h),
                    point(half_w, half_h),
                ),
                lyon::path::Winding::Positive,
            );
        }
        FurnitureStyle::LShaped | FurnitureStyle::LShapedMirrored => {
            // L profile with the short arm toward +x; mirrored flips it.
            let sign = if style == FurnitureStyle::LShaped {
                1.0f32
            } else {
                -1.0f32
            };
            let pts = [
                (-half_w, -half_h),
                (half_w, -half_h),
                (half_w, half_h),
                (0.0, half_h),
                (0.0, 0.0),
                (-half_w, 0.0),
            ];
            for (i, (x, y)) in pts.iter().enumerate() {
                let p = point(x * sign, *y);
                if i == 0 {
                    builder.begin(p);
                } else {
                    builder.line_to(p);
                }
            }
            builder.close();
        }
    }
    let path = builder.build();

    let transform = lyon::math::Transform::rotation(lyon::math::Angle::degrees(
        rotation_degrees as f32,
    ))
    .then_translate(lyon::math::vector(px as f32, py as f32));
    path.transformed(&transform)
}

/// Capacity readout at the table center and the optional label below
/// the silhouette.
fn push_labels(
    scene: &mut Scene,
    geometry: &TableGeometry,
    plan: &SlotPlan,
    viewport: &Viewport,
    options: &SceneOptions,
) {
    let zoom = viewport.zoom();
    let (cx, cy) = viewport.world_to_pixel(0.0, 0.0);

    scene.primitives.push(DrawPrimitive::Text {
        position: (cx, cy),
        content: plan.capacity().to_string(),
        size: 16.0 * zoom.clamp(0.5, 2.0),
        color: capacity_color(),
        anchor: TextAnchor::Middle,
    });

    if let Some(label) = &options.label {
        let (_, half_h) = geometry.half_extents(zoom);
        scene.primitives.push(DrawPrimitive::Text {
            position: (cx, cy + half_h + 22.0),
            content: label.clone(),
            size: 13.0,
            color: label_color(),
            anchor: TextAnchor::Middle,
        });
    }
}
