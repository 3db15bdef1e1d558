//! Note drag and resize through the arbiter.

use crate::helpers::{TestBoardBuilder, assert_point_close, down, drag, move_to, up};
use ideaboard::board::BoardChange;
use ideaboard::constants::{MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};
use ideaboard::input::{Arbiter, ModeKind, Modifiers, PointerEvent};
use ideaboard::types::ToolType;

#[test]
fn test_drag_uses_override_and_commits_once() {
    let (mut board, ids) = TestBoardBuilder::new().with_note((0.0, 0.0)).build_with_ids();
    let mut arbiter = Arbiter::new();
    let (_, rx) = board.subscribe();

    down(&mut arbiter, &mut board, 1, 50.0, 50.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::DragNote);
    let _ = rx.try_iter().count();

    for step in 1..=10 {
        move_to(&mut arbiter, &mut board, 1, 50.0 + step as f64 * 10.0, 50.0);
    }
    let note = board.note(&ids[0]).unwrap();
    assert_point_close(note.position(), (0.0, 0.0));
    assert_point_close(arbiter.note_render_position(note), (100.0, 0.0));
    assert_eq!(arbiter.dragged_note(), Some(&ids[0]));
    assert_eq!(rx.try_iter().count(), 0, "moves must not touch the store");

    up(&mut arbiter, &mut board, 1, 150.0, 50.0);
    let note_writes = rx
        .try_iter()
        .filter(|e| e.change == BoardChange::Notes)
        .count();
    assert_eq!(note_writes, 1);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (100.0, 0.0));
    assert!(arbiter.dragged_note().is_none());
}

#[test]
fn test_drag_delta_scales_with_zoom() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_zoom(2.0)
        .build_with_ids();
    let mut arbiter = Arbiter::new();
    drag(&mut arbiter, &mut board, 1, (40.0, 40.0), (140.0, 90.0), 4);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (50.0, 25.0));
}

#[test]
fn test_resize_writes_every_step_and_respects_floor() {
    let (mut board, ids) = TestBoardBuilder::new().with_note((0.0, 0.0)).build_with_ids();
    let mut arbiter = Arbiter::new();
    let (_, rx) = board.subscribe();

    // bottom-right corner
    down(&mut arbiter, &mut board, 1, 195.0, 175.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::ResizeNote);
    let _ = rx.try_iter().count();

    move_to(&mut arbiter, &mut board, 1, 245.0, 195.0);
    assert_eq!(board.note(&ids[0]).unwrap().size().width, 250.0);
    move_to(&mut arbiter, &mut board, 1, 295.0, 215.0);
    let writes = rx
        .try_iter()
        .filter(|e| e.change == BoardChange::Notes)
        .count();
    assert_eq!(writes, 2);

    move_to(&mut arbiter, &mut board, 1, -500.0, -500.0);
    let note = board.note(&ids[0]).unwrap();
    assert_eq!((note.width, note.height), (MIN_NOTE_WIDTH, MIN_NOTE_HEIGHT));

    up(&mut arbiter, &mut board, 1, -500.0, -500.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::Idle);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
}

#[test]
fn test_second_pointer_during_resize_is_ignored() {
    let (mut board, ids) = TestBoardBuilder::new().with_note((0.0, 0.0)).build_with_ids();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 195.0, 175.0);
    down(&mut arbiter, &mut board, 2, 600.0, 600.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::ResizeNote);

    move_to(&mut arbiter, &mut board, 2, 900.0, 900.0);
    move_to(&mut arbiter, &mut board, 1, 215.0, 175.0);
    assert_eq!(board.note(&ids[0]).unwrap().width, 220.0);
    assert_eq!(board.viewport().zoom, 1.0);
}

#[test]
fn test_second_pointer_cancels_drag_without_commit() {
    let (mut board, ids) = TestBoardBuilder::new().with_note((0.0, 0.0)).build_with_ids();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 50.0, 50.0);
    move_to(&mut arbiter, &mut board, 1, 150.0, 50.0);

    down(&mut arbiter, &mut board, 2, 300.0, 50.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::Gesture);
    let note = board.note(&ids[0]).unwrap();
    assert_point_close(arbiter.note_render_position(note), (0.0, 0.0));

    up(&mut arbiter, &mut board, 2, 300.0, 50.0);
    up(&mut arbiter, &mut board, 1, 150.0, 50.0);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
}

#[test]
fn test_ink_tools_never_grab_notes() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_tool(ToolType::Pen)
        .build_with_ids();
    let mut arbiter = Arbiter::new();
    drag(&mut arbiter, &mut board, 1, (50.0, 50.0), (120.0, 50.0), 2);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
    assert_eq!(board.strokes().len(), 1);

    board.set_tool(ToolType::Eraser);
    drag(&mut arbiter, &mut board, 1, (60.0, 60.0), (90.0, 60.0), 2);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
    assert_eq!(board.notes().len(), 1);
}

#[test]
fn test_shift_click_toggles_multi_selection() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_note((400.0, 0.0))
        .build_with_ids();
    let mut arbiter = Arbiter::new();
    let shift_press = |id, x, y| PointerEvent::new(id, x, y).with_modifiers(Modifiers::shift());

    down(&mut arbiter, &mut board, 1, 50.0, 50.0);
    up(&mut arbiter, &mut board, 1, 50.0, 50.0);
    arbiter.pointer_down(&mut board, &shift_press(1, 450.0, 50.0));
    up(&mut arbiter, &mut board, 1, 450.0, 50.0);
    assert_eq!(board.selection().len(), 2);

    arbiter.pointer_down(&mut board, &shift_press(1, 50.0, 50.0));
    up(&mut arbiter, &mut board, 1, 50.0, 50.0);
    assert_eq!(board.selection(), &[ids[1].clone()]);
}

#[test]
fn test_plain_click_on_selected_note_replaces_selection() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note((0.0, 0.0))
        .with_note((400.0, 0.0))
        .build_with_ids();
    board.select_note(Some(&ids[0]), false);
    board.select_note(Some(&ids[1]), true);
    let mut arbiter = Arbiter::new();

    down(&mut arbiter, &mut board, 1, 450.0, 50.0);
    up(&mut arbiter, &mut board, 1, 450.0, 50.0);
    assert_eq!(board.selection(), &[ids[1].clone()]);

    // dragging works on the replaced selection
    board.select_note(Some(&ids[0]), true);
    drag(&mut arbiter, &mut board, 1, (50.0, 50.0), (70.0, 50.0), 1);
    assert_eq!(board.selection(), &[ids[0].clone()]);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (20.0, 0.0));
}
