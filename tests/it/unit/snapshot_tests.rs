//! Unit tests for snapshot loading, lenient defaults and wholesale replace.

use crate::helpers::TestBoardBuilder;
use ideaboard::board::{Board, BoardChange, BoardSnapshot, ChangeOrigin};
use ideaboard::constants::{MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};
use ideaboard::types::{Priority, TaskStatus};
use ideaboard::viewport::Viewport;
use serde_json::json;

#[test]
fn test_missing_fields_default_individually() {
    let snapshot = BoardSnapshot::from_value(&json!({
        "notes": [{ "id": "a", "x": 10, "y": 20, "content": "hello" }],
    }));
    assert_eq!(snapshot.notes.len(), 1);
    let note = &snapshot.notes[0];
    assert_eq!(note.content, "hello");
    assert_eq!((note.width, note.height), (200.0, 180.0));
    assert_eq!(note.status, TaskStatus::Todo);
    assert_eq!(note.priority, Priority::Medium);
    assert!(snapshot.strokes.is_empty());
    assert_eq!(snapshot.viewport, Viewport::default());
    assert_eq!(snapshot.jobs.len(), 3);
}

#[test]
fn test_malformed_entries_are_skipped() {
    let snapshot = BoardSnapshot::from_value(&json!({
        "notes": [{ "id": "ok" }, { "x": "not a number" }, 7],
        "strokes": "nope",
        "viewport": { "x": 5, "y": 5, "zoom": 99 },
        "jobs": [],
    }));
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].id.as_str(), "ok");
    assert!(snapshot.strokes.is_empty());
    assert_eq!(snapshot.viewport.zoom, 5.0);
    assert_eq!(snapshot.jobs.len(), 3);
}

#[test]
fn test_field_names_match_document_format() {
    let (board, _) = TestBoardBuilder::new().with_note((1.0, 2.0)).build_with_ids();
    let value = serde_json::to_value(board.snapshot()).unwrap();
    let note = &value["notes"][0];
    assert!(note.get("isTask").is_some());
    assert!(note.get("zIndex").is_some());
    assert_eq!(note["color"], "#fef3c7");
    assert_eq!(note["status"], "todo");
    assert_eq!(value["viewport"]["zoom"], 1.0);
}

#[test]
fn test_load_board_replaces_wholesale_and_clamps() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_note((300.0, 0.0))
        .build_with_ids();
    board.select_note(Some(&ids[0]), false);

    let incoming = BoardSnapshot::from_value(&json!({
        "notes": [{ "id": "tiny", "width": 10, "height": 10 }],
        "strokes": [],
    }));
    let (_, rx) = board.subscribe();
    board.load_board(incoming, ChangeOrigin::Remote);

    assert_eq!(board.notes().len(), 1);
    let note = &board.notes()[0];
    assert_eq!((note.width, note.height), (MIN_NOTE_WIDTH, MIN_NOTE_HEIGHT));
    assert!(board.selection().is_empty());

    let event = rx.try_iter().find(|e| e.change == BoardChange::Loaded).unwrap();
    assert_eq!(event.origin, ChangeOrigin::Remote);
    assert!(!event.needs_sync());
}

#[test]
fn test_clear_keeps_jobs() {
    let mut board = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_stroke(&[(0.0, 0.0), (1.0, 1.0)], 3.0)
        .with_offset(200.0, 100.0)
        .build();
    board.add_job("Side project", "bg-green-600");
    board.clear_board();

    assert!(board.notes().is_empty());
    assert!(board.strokes().is_empty());
    assert_eq!(board.jobs().len(), 4);
    assert_eq!(board.viewport(), Viewport::default());
}

#[test]
fn test_empty_snapshot_round_trips_through_board() {
    let mut board = Board::new();
    board.load_board(BoardSnapshot::default(), ChangeOrigin::Local);
    assert!(board.snapshot().is_empty());
    assert_eq!(board.snapshot(), BoardSnapshot::default());
}
