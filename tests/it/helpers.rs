//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating boards with notes and strokes
//! - Pointer shorthands (`down`, `move_to`, `up`, `drag`) that drive an `Arbiter`
//! - Float assertions for transform math

#![allow(dead_code)]

use ideaboard::board::Board;
use ideaboard::input::{Arbiter, PointerEvent};
use ideaboard::types::{JobId, Note, NoteId, Point, Stroke, ToolType};
use ideaboard::viewport::Viewport;

pub const EPS: f64 = 1e-9;

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test boards
// ============================================================================

/// Builder for creating test boards.
///
/// # Example
/// ```ignore
/// let (board, ids) = TestBoardBuilder::new()
///     .with_note((0.0, 0.0))
///     .with_note((300.0, 0.0))
///     .with_zoom(1.5)
///     .build_with_ids();
/// ```
pub struct TestBoardBuilder {
    notes: Vec<Note>,
    strokes: Vec<Stroke>,
    viewport: Viewport,
    tool: ToolType,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            strokes: Vec::new(),
            viewport: Viewport::default(),
            tool: ToolType::Select,
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.viewport.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.viewport.x = x;
        self.viewport.y = y;
        self
    }

    /// Default-sized (200x180) note with its top-left corner at `pos`
    pub fn with_note(self, pos: (f64, f64)) -> Self {
        self.with_sized_note(pos, (200.0, 180.0))
    }

    pub fn with_sized_note(mut self, pos: (f64, f64), size: (f64, f64)) -> Self {
        let mut note = Note::new(Point::new(pos.0, pos.1), JobId::from("job1"));
        note.width = size.0;
        note.height = size.1;
        self.notes.push(note);
        self
    }

    pub fn with_stroke(mut self, points: &[(f64, f64)], size: f64) -> Self {
        let points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        self.strokes.push(Stroke::new(points, "#000000", size));
        self
    }

    pub fn with_tool(mut self, tool: ToolType) -> Self {
        self.tool = tool;
        self
    }

    /// Notes are stacked in insertion order; nothing is selected.
    pub fn build(self) -> Board {
        self.build_with_ids().0
    }

    pub fn build_with_ids(self) -> (Board, Vec<NoteId>) {
        let mut board = Board::new();
        let ids = self
            .notes
            .into_iter()
            .map(|note| board.add_note(note))
            .collect();
        for stroke in self.strokes {
            board.add_stroke(stroke);
        }
        board.clear_selection();
        board.set_tool(self.tool);
        board.set_viewport(self.viewport);
        (board, ids)
    }
}

// ============================================================================
// Pointer shorthands
// ============================================================================

pub fn down(arbiter: &mut Arbiter, board: &mut Board, id: u64, x: f64, y: f64) {
    arbiter.pointer_down(board, &PointerEvent::new(id, x, y));
}

pub fn move_to(arbiter: &mut Arbiter, board: &mut Board, id: u64, x: f64, y: f64) {
    arbiter.pointer_move(board, &PointerEvent::new(id, x, y));
}

pub fn up(arbiter: &mut Arbiter, board: &mut Board, id: u64, x: f64, y: f64) {
    arbiter.pointer_up(board, &PointerEvent::new(id, x, y));
}

/// Press at `from`, move through `steps` evenly spaced points, release at `to`
pub fn drag(
    arbiter: &mut Arbiter,
    board: &mut Board,
    id: u64,
    from: (f64, f64),
    to: (f64, f64),
    steps: usize,
) {
    down(arbiter, board, id, from.0, from.1);
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        move_to(
            arbiter,
            board,
            id,
            from.0 + (to.0 - from.0) * t,
            from.1 + (to.1 - from.1) * t,
        );
    }
    up(arbiter, board, id, to.0, to.1);
}

// ============================================================================
// Assertions
// ============================================================================

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[track_caller]
pub fn assert_point_close(actual: Point, expected: (f64, f64)) {
    assert!(
        (actual.x - expected.0).abs() < 1e-6 && (actual.y - expected.1).abs() < 1e-6,
        "expected {expected:?}, got ({}, {})",
        actual.x,
        actual.y
    );
}
