//! Pointer, wheel and keyboard input for the canvas.
//!
//! This module implements the gesture/drag arbiter: it consumes the raw
//! pointer stream and decides which single interaction mode is active.
//!
//! ## Architecture
//!
//! The arbiter uses an explicit state machine ([`InteractionMode`]) instead of
//! scattered flags, so impossible combinations (e.g. a note drag running
//! alongside a pinch) cannot be represented. Handlers are split by event
//! phase, each an `impl Arbiter` block operating on a borrowed `Board`:
//!
//! - `pointers` - active pointer tracker
//! - `state` - mode enum and gesture anchors
//! - `pointer_down` - mode arbitration and note/eraser routing
//! - `pointer_move` - per-mode incremental updates
//! - `pointer_up` - commits and fallback to idle
//! - `wheel` - zoom-to-cursor and two-axis wheel pan
//! - `keyboard` - shortcuts and the space-bar pan override
//!
//! Handlers never block; every update is constant time per active pointer
//! apart from hit testing, which is O(log n).

mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod pointers;
mod state;
mod wheel;

pub use keyboard::Key;
pub use pointers::PointerTracker;
pub use state::{GestureAnchor, InteractionMode, ModeKind};

use crate::hit_testing::HitTester;
use crate::types::{CursorStyle, Note, NoteId, Point, PointerId, ToolType};

/// Which button started a pointer. Touch and pen contacts report `Primary`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Command on macOS
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Cmd; gates shortcuts and wheel zoom
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A pointer transition in surface-relative screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            position: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: Point,
    pub modifiers: Modifiers,
}

/// The gesture/drag arbiter. Holds only transient interaction state; all
/// durable state lives in the `Board` passed to each handler.
#[derive(Debug, Default)]
pub struct Arbiter {
    pointers: PointerTracker,
    mode: InteractionMode,
    space_held: bool,
    hit_tester: HitTester,
    /// Exclusive pointer capture held while any mode is active
    captured: bool,
}

impl Arbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn pointers(&self) -> &PointerTracker {
        &self.pointers
    }

    pub fn is_space_held(&self) -> bool {
        self.space_held
    }

    pub fn is_capturing(&self) -> bool {
        self.captured
    }

    /// Where a note should be drawn this frame: the live drag position while
    /// it is being dragged, its stored position otherwise.
    pub fn note_render_position(&self, note: &Note) -> Point {
        self.mode
            .drag_override(&note.id)
            .unwrap_or_else(|| note.position())
    }

    pub fn dragged_note(&self) -> Option<&NoteId> {
        match &self.mode {
            InteractionMode::DraggingNote { note_id, .. } => Some(note_id),
            _ => None,
        }
    }

    /// The uncommitted stroke being drawn: points, color, size
    pub fn stroke_in_progress(&self) -> Option<(&[Point], &str, f64)> {
        match &self.mode {
            InteractionMode::Drawing {
                points,
                color,
                size,
                ..
            } => Some((points.as_slice(), color.as_str(), *size)),
            _ => None,
        }
    }

    /// Cursor for the canvas given the board's tool and the space override
    pub fn cursor(&self, tool: ToolType) -> CursorStyle {
        if self.space_held {
            return CursorStyle::Grab;
        }
        tool.cursor()
    }

    /// Force the machine back to idle, discarding any transient state.
    /// Pointers stay tracked; they simply no longer drive a mode. Used when
    /// the board is replaced wholesale underneath an interaction.
    pub fn reset(&mut self) {
        if !self.mode.is_idle() {
            tracing::debug!(mode = ?self.mode.kind(), "arbiter reset");
        }
        self.mode = InteractionMode::Idle;
        self.hit_tester.invalidate();
        self.settle();
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        let (from, to) = (self.mode.kind(), mode.kind());
        if from != to {
            tracing::debug!(?from, ?to, "interaction mode");
        }
        self.captured = !mode.is_idle() || self.captured;
        self.mode = mode;
    }

    /// Drop the current mode without committing anything
    fn cancel_mode(&mut self) {
        let mode = std::mem::take(&mut self.mode);
        match mode.kind() {
            ModeKind::Draw => tracing::debug!("discarding in-progress stroke"),
            ModeKind::DragNote => tracing::debug!("cancelling note drag"),
            _ => {}
        }
    }

    /// Release capture once nothing is down
    fn settle(&mut self) {
        if self.pointers.count() == 0 {
            if !self.mode.is_idle() {
                self.set_mode(InteractionMode::Idle);
            }
            self.captured = false;
        }
    }
}
