//! Core types for the idea board.
//!
//! This module defines the fundamental data structures shared by the store,
//! the gesture engine and the persistence layer: points and rectangles, the
//! note/stroke/job records, and the enum-keyed lookup tables used by renderers.

use crate::constants::{DEFAULT_NOTE_SIZE, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A 2D point. World-space unless a field or parameter says otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle stored as min/max corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + size.width, origin.y + size.height),
        }
    }

    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn inflate(&self, amount: f64) -> Rect {
        Rect {
            min: self.min.offset(-amount, -amount),
            max: self.max.offset(amount, amount),
        }
    }
}

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh random id
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Unique, immutable note identifier
    NoteId
);
string_id!(
    /// Stroke identifier
    StrokeId
);
string_id!(
    /// Job (company/category tag) identifier
    JobId
);

/// Opaque pointer identifier supplied by the platform. Reused only after the
/// matching pointer-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

// ============================================================================
// Enums
// ============================================================================

/// Note palette. Serialized as the pastel hex value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteColor {
    #[default]
    #[serde(rename = "#fef3c7")]
    Yellow,
    #[serde(rename = "#dbeafe")]
    Blue,
    #[serde(rename = "#dcfce7")]
    Green,
    #[serde(rename = "#fee2e2")]
    Red,
    #[serde(rename = "#f3e8ff")]
    Purple,
    #[serde(rename = "#f3f4f6")]
    Gray,
}

impl NoteColor {
    /// Map a job's strong color tag (e.g. `bg-blue-600`) to the pastel note
    /// color used for new notes in that job. Unknown tags fall back to yellow.
    pub fn from_job_color(tag: &str) -> Self {
        let has = |needles: &[&str]| needles.iter().any(|n| tag.contains(n));
        if has(&["blue", "sky", "cyan"]) {
            NoteColor::Blue
        } else if has(&["green", "teal", "emerald"]) {
            NoteColor::Green
        } else if has(&["red", "rose", "pink"]) {
            NoteColor::Red
        } else if has(&["purple", "violet", "indigo"]) {
            NoteColor::Purple
        } else if has(&["gray", "slate"]) {
            NoteColor::Gray
        } else {
            NoteColor::Yellow
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    /// Checkbox toggle: done goes back to todo, anything else becomes done
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Done => TaskStatus::Todo,
            TaskStatus::Todo | TaskStatus::Doing => TaskStatus::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Canvas tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Select,
    Hand,
    Pen,
    Eraser,
}

/// Cursor a renderer should show over the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Grab,
    Crosshair,
    Cell,
}

impl ToolType {
    pub fn cursor(self) -> CursorStyle {
        match self {
            ToolType::Select => CursorStyle::Default,
            ToolType::Hand => CursorStyle::Grab,
            ToolType::Pen => CursorStyle::Crosshair,
            ToolType::Eraser => CursorStyle::Cell,
        }
    }
}

// ============================================================================
// Board Records
// ============================================================================

/// A company/category tag applied to notes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    /// Strong color tag, e.g. `bg-blue-600`
    pub color: String,
}

impl Job {
    pub fn new(id: impl Into<JobId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Jobs a fresh board starts with
pub static DEFAULT_JOBS: Lazy<Vec<Job>> = Lazy::new(|| {
    vec![
        Job::new("job1", "Company 1", "bg-blue-600"),
        Job::new("job2", "Company 2", "bg-purple-600"),
        Job::new("job3", "Company 3", "bg-orange-600"),
    ]
});

pub fn default_jobs() -> Vec<Job> {
    DEFAULT_JOBS.clone()
}

fn default_note_width() -> f64 {
    DEFAULT_NOTE_SIZE.0
}

fn default_note_height() -> f64 {
    DEFAULT_NOTE_SIZE.1
}

/// A sticky note on the canvas. Position is the world-space top-left corner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default = "NoteId::generate")]
    pub id: NoteId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_note_width")]
    pub width: f64,
    #[serde(default = "default_note_height")]
    pub height: f64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default)]
    pub is_task: bool,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Job reference; dangling ids resolve to the board's default job
    #[serde(default = "fallback_job_id")]
    pub job: JobId,
    #[serde(default)]
    pub z_index: i64,
}

fn fallback_job_id() -> JobId {
    JobId::from(crate::constants::FALLBACK_JOB_ID)
}

impl Note {
    /// A plain note with default size and fields
    pub fn new(position: Point, job: JobId) -> Self {
        Self {
            id: NoteId::generate(),
            x: position.x,
            y: position.y,
            width: DEFAULT_NOTE_SIZE.0,
            height: DEFAULT_NOTE_SIZE.1,
            content: String::new(),
            color: NoteColor::default(),
            is_task: false,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            job,
            z_index: 0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    pub fn is_done_task(&self) -> bool {
        self.is_task && self.status == TaskStatus::Done
    }

    /// Apply the size floor
    pub fn clamp_size(&mut self) {
        self.width = self.width.max(MIN_NOTE_WIDTH);
        self.height = self.height.max(MIN_NOTE_HEIGHT);
    }
}

/// Field-level note update; `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteUpdate {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub content: Option<String>,
    pub color: Option<NoteColor>,
    pub is_task: Option<bool>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub job: Option<JobId>,
}

impl NoteUpdate {
    pub fn position(p: Point) -> Self {
        Self {
            position: Some(p),
            ..Default::default()
        }
    }

    pub fn size(s: Size) -> Self {
        Self {
            size: Some(s),
            ..Default::default()
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_task(mut self, is_task: bool) -> Self {
        self.is_task = Some(is_task);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_job(mut self, job: JobId) -> Self {
        self.job = Some(job);
        self
    }

    /// Apply to a note, keeping the size floor
    pub fn apply(self, note: &mut Note) {
        if let Some(p) = self.position {
            note.x = p.x;
            note.y = p.y;
        }
        if let Some(s) = self.size {
            note.width = s.width;
            note.height = s.height;
            note.clamp_size();
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
        if let Some(is_task) = self.is_task {
            note.is_task = is_task;
        }
        if let Some(status) = self.status {
            note.status = status;
        }
        if let Some(priority) = self.priority {
            note.priority = priority;
        }
        if let Some(job) = self.job {
            note.job = job;
        }
    }
}

/// A freehand ink stroke. Points are world-space; immutable once committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(default = "StrokeId::generate")]
    pub id: StrokeId,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default = "default_stroke_color")]
    pub color: String,
    #[serde(default = "default_stroke_size")]
    pub size: f64,
}

fn default_stroke_color() -> String {
    crate::constants::DEFAULT_PEN_COLOR.to_string()
}

fn default_stroke_size() -> f64 {
    crate::constants::DEFAULT_PEN_SIZE
}

impl Stroke {
    pub fn new(points: Vec<Point>, color: impl Into<String>, size: f64) -> Self {
        Self {
            id: StrokeId::generate(),
            points,
            color: color.into(),
            size,
        }
    }

    /// Bounding box of the raw points; `None` for an empty stroke
    pub fn bounds(&self) -> Option<Rect> {
        crate::geometry::bounds_of_points(&self.points)
    }
}
