//! Viewport, tool and overlay state, plus fit/focus helpers.

use super::{Board, BoardChange};
use crate::types::{NoteId, Point, Rect, Size, ToolType};
use crate::viewport::Viewport;

impl Board {
    /// Replace the viewport. Zoom is clamped and non-finite offsets are reset.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let viewport = viewport.sanitized();
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.emit(BoardChange::Viewport);
    }

    /// Translate the view by a screen-space delta
    pub fn pan(&mut self, delta: Point) {
        let mut viewport = self.viewport;
        viewport.pan_by(delta);
        self.set_viewport(viewport);
    }

    /// Toolbar zoom step; offset unchanged
    pub fn zoom_by(&mut self, delta: f64) {
        let mut viewport = self.viewport;
        viewport.zoom_by(delta);
        self.set_viewport(viewport);
    }

    /// Union of every note rectangle and every stroke's point bounds
    pub fn content_bounds(&self) -> Option<Rect> {
        let notes = self.notes.iter().map(|n| n.rect());
        let strokes = self.strokes.iter().filter_map(|s| s.bounds());
        notes.chain(strokes).reduce(|acc, r| acc.union(&r))
    }

    /// Fit all content inside the surface. An empty board gets the default view.
    pub fn center_view(&mut self, surface: Size, padding: f64) {
        let fitted = Viewport::fit_to_content(self.content_bounds(), surface, padding);
        tracing::debug!(zoom = fitted.zoom, "center view");
        self.set_viewport(fitted);
    }

    /// Center a note, raise the zoom to the focus floor, select only that
    /// note and close the dashboard.
    pub fn focus_on_note(&mut self, id: &NoteId, surface: Size) -> bool {
        let Some(rect) = self.note(id).map(|n| n.rect()) else {
            return false;
        };
        let focused = self.viewport.focus_on(rect, surface);
        self.set_viewport(focused);
        self.select_note(Some(id), false);
        self.set_dashboard_open(false);
        true
    }

    /// Switch tools. The selection never survives a tool change.
    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool = tool;
        self.selection.clear();
        self.emit(BoardChange::Tool);
        self.emit(BoardChange::Selection);
    }

    pub fn set_pen_color(&mut self, color: impl Into<String>) {
        self.pen_color = color.into();
        self.emit(BoardChange::Tool);
    }

    pub fn set_pen_size(&mut self, size: f64) {
        if size.is_finite() && size > 0.0 {
            self.pen_size = size;
            self.emit(BoardChange::Tool);
        }
    }

    pub fn set_dashboard_open(&mut self, open: bool) {
        if self.dashboard_open != open {
            self.dashboard_open = open;
            self.emit(BoardChange::Overlay);
        }
    }
}
