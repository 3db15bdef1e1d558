//! Viewport model - pan offset and zoom of the infinite canvas.
//!
//! `screen = world * zoom + (x, y)`. Zoom is clamped to
//! [`MIN_ZOOM`]..=[`MAX_ZOOM`] on every mutation; the offset is unconstrained.

use crate::constants::{
    DEFAULT_ZOOM, FIT_MAX_ZOOM, FOCUS_MIN_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_SENSITIVITY,
};
use crate::geometry::screen_to_world;
use crate::types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

#[inline]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Affine world → screen transform
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Build a viewport, clamping the zoom
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self {
            x,
            y,
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.x = offset.x;
        self.y = offset.y;
    }

    /// Re-establish the invariants after external mutation (e.g. a loaded
    /// snapshot). Non-finite offsets fall back to the origin.
    pub fn sanitized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            x: finite(self.x),
            y: finite(self.y),
            zoom: if self.zoom.is_finite() {
                clamp_zoom(self.zoom)
            } else {
                DEFAULT_ZOOM
            },
        }
    }

    /// Translate by a screen-space delta
    pub fn pan_by(&mut self, delta: Point) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Set the zoom, keeping the world point under `anchor` (screen space)
    /// fixed on screen.
    pub fn zoom_about(&mut self, anchor: Point, new_zoom: f64) {
        let world = screen_to_world(anchor, self);
        let zoom = clamp_zoom(new_zoom);
        self.x = anchor.x - world.x * zoom;
        self.y = anchor.y - world.y * zoom;
        self.zoom = zoom;
    }

    /// Wheel input. With the zoom modifier the wheel zooms toward the cursor,
    /// otherwise it pans both axes.
    pub fn apply_wheel(&mut self, cursor: Point, delta: Point, zoom_modifier: bool) {
        if zoom_modifier {
            let target = self.zoom + (-delta.y * WHEEL_ZOOM_SENSITIVITY);
            self.zoom_about(cursor, target);
        } else {
            self.x -= delta.x;
            self.y -= delta.y;
        }
    }

    /// Toolbar zoom: step the zoom without moving the offset
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = clamp_zoom(self.zoom + delta);
    }

    /// Frame `content` inside a surface of `surface` size with `padding`
    /// screen pixels on every side. Never zooms in past 100%. An empty board
    /// gets the default viewport.
    pub fn fit_to_content(content: Option<Rect>, surface: Size, padding: f64) -> Self {
        let Some(content) = content else {
            return Self::default();
        };

        let zoom_x = surface.width / (content.width() + 2.0 * padding);
        let zoom_y = surface.height / (content.height() + 2.0 * padding);
        let mut zoom = zoom_x.min(zoom_y);
        if !zoom.is_finite() {
            zoom = FIT_MAX_ZOOM;
        }
        let zoom = zoom.clamp(MIN_ZOOM, FIT_MAX_ZOOM);

        Self::centered_on(content.center(), surface, zoom)
    }

    /// Center `target` at the given zoom, never lowering the current zoom
    /// below [`FOCUS_MIN_ZOOM`].
    pub fn focus_on(&self, target: Rect, surface: Size) -> Self {
        let zoom = self.zoom.max(FOCUS_MIN_ZOOM);
        Self::centered_on(target.center(), surface, zoom)
    }

    fn centered_on(center: Point, surface: Size, zoom: f64) -> Self {
        let zoom = clamp_zoom(zoom);
        Self {
            x: surface.width / 2.0 - center.x * zoom,
            y: surface.height / 2.0 - center.y * zoom,
            zoom,
        }
    }
}
