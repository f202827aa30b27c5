//! Viewport and coordinate transformation for the preview canvas.
//!
//! Handles conversion between pixel coordinates (screen space, origin at
//! top-left) and plan coordinates (table space, origin at the table
//! center, +y toward the bottom edge). The world origin maps to the
//! canvas midpoint shifted by the pan offset; both axes point the same
//! way, so no flip is involved.

use std::fmt;

use serde::{Deserialize, Serialize};

use tablekit_core::constants::{MAX_ZOOM, MIN_ZOOM, VIEW_PADDING};

use crate::model::Point;

/// Serializable zoom/pan snapshot, carried by plan seeds and plan
/// files. Canvas dimensions are surface-owned and not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

/// Viewport transformation state (zoom, pan, canvas size).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport with the table center on the canvas midpoint.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically on surface resize).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Canvas midpoint in pixel coordinates.
    pub fn canvas_midpoint(&self) -> (f64, f64) {
        (self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Converts plan coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = canvas_width / 2 + pan_x + world_x * zoom
    /// pixel_y = canvas_height / 2 + pan_y + world_y * zoom
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (
            self.canvas_width / 2.0 + self.pan_x + world_x * self.zoom,
            self.canvas_height / 2.0 + self.pan_y + world_y * self.zoom,
        )
    }

    /// Converts pixel coordinates to plan coordinates.
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.canvas_width / 2.0 - self.pan_x) / self.zoom,
            (pixel_y - self.canvas_height / 2.0 - self.pan_y) / self.zoom,
        )
    }

    /// Fits the given plan-space bounding box into the canvas with the
    /// standard padding, centering the content.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - VIEW_PADDING * 2.0;
        let zoom_x = self.canvas_width * padding_factor / width;
        let zoom_y = self.canvas_height * padding_factor / height;
        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        // Shift the bounds center onto the canvas midpoint.
        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;
        self.pan_x = -center_x * self.zoom;
        self.pan_y = -center_y * self.zoom;
    }

    /// Centers the viewport on a plan coordinate.
    pub fn center_on(&mut self, world_x: f64, world_y: f64) {
        self.pan_x = -world_x * self.zoom;
        self.pan_y = -world_y * self.zoom;
    }

    /// Captures the zoom/pan state for serialization.
    pub fn state(&self) -> ViewportState {
        ViewportState {
            zoom: self.zoom,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
        }
    }

    /// Restores a captured zoom/pan state, clamping the zoom.
    pub fn apply_state(&mut self, state: ViewportState) {
        self.set_zoom(state.zoom);
        self.set_pan(state.pan_x, state.pan_y);
    }

    /// Resets to the default state (1:1 zoom, centered).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(480.0, 480.0)
    }
}
