//! Application-wide constants.
//!
//! Centralizes magic numbers so the gesture math, the store and the
//! persistence layer agree on the same limits.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom change per wheel delta unit when the zoom modifier is held
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Zoom step for the toolbar zoom buttons
pub const ZOOM_STEP: f64 = 0.1;

/// Fit-to-content never zooms in past this level
pub const FIT_MAX_ZOOM: f64 = 1.0;

/// Padding around content when fitting the view, in screen pixels
pub const FIT_PADDING: f64 = 100.0;

/// Focusing a note raises the zoom to at least this level
pub const FOCUS_MIN_ZOOM: f64 = 0.8;

/// Pinch distances below this are treated as degenerate
pub const MIN_PINCH_DISTANCE: f64 = 1e-6;

// ============================================================================
// Note Defaults
// ============================================================================

/// Minimum note width in world units
pub const MIN_NOTE_WIDTH: f64 = 150.0;

/// Minimum note height in world units
pub const MIN_NOTE_HEIGHT: f64 = 100.0;

/// Size of a freshly created note
pub const DEFAULT_NOTE_SIZE: (f64, f64) = (200.0, 180.0);

/// Offset applied to duplicated and pasted notes
pub const PASTE_OFFSET: f64 = 20.0;

/// Side of the square resize handle at a note's bottom-right corner, in screen pixels
pub const RESIZE_HANDLE_SIZE: f64 = 16.0;

// ============================================================================
// Ink
// ============================================================================

/// Default pen color
pub const DEFAULT_PEN_COLOR: &str = "#000000";

/// Default pen width in pixels at zoom 1
pub const DEFAULT_PEN_SIZE: f64 = 3.0;

/// Extra slack around a stroke for eraser hits, in screen pixels
pub const ERASER_TOLERANCE: f64 = 4.0;

// ============================================================================
// Jobs
// ============================================================================

/// Job id used when a board has no jobs at all
pub const FALLBACK_JOB_ID: &str = "default";

// ============================================================================
// Sync & Suggestions
// ============================================================================

/// Changes are coalesced for this long before being pushed to the backend
pub const SYNC_DEBOUNCE_MS: u64 = 800;

/// Marker placed between a note's text and an appended suggestion
pub const SUGGESTION_SEPARATOR: &str = "\n\n--- AI Brainstorm ---\n";

/// Default surface size used when fitting or focusing without a live window
pub const DEFAULT_SURFACE_SIZE: (f64, f64) = (1280.0, 800.0);

/// File name of the local board snapshot
pub const SNAPSHOT_FILE_NAME: &str = "board.json";

/// Prefix for exported board documents
pub const EXPORT_FILE_PREFIX: &str = "idea-board";
