//! Mode arbitration and two-finger gesture tests.

use crate::helpers::{TestBoardBuilder, assert_close, assert_point_close, down, drag, move_to, up};
use ideaboard::constants::{MAX_ZOOM, MIN_ZOOM};
use ideaboard::geometry::{screen_to_world, world_to_screen};
use ideaboard::input::{
    Arbiter, Key, Modifiers, ModeKind, PointerButton, PointerEvent, WheelEvent,
};
use ideaboard::types::{Point, ToolType};

#[test]
fn test_pinch_keeps_midpoint_world_point_under_fingers() {
    let mut board = TestBoardBuilder::new().with_offset(30.0, -20.0).build();
    let mut arbiter = Arbiter::new();

    down(&mut arbiter, &mut board, 1, 100.0, 100.0);
    down(&mut arbiter, &mut board, 2, 200.0, 100.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::Gesture);
    let anchored = screen_to_world(Point::new(150.0, 100.0), &board.viewport());

    move_to(&mut arbiter, &mut board, 1, 80.0, 140.0);
    move_to(&mut arbiter, &mut board, 2, 280.0, 140.0);

    let v = board.viewport();
    assert_close(v.zoom, 2.0);
    assert_point_close(world_to_screen(anchored, &v), (180.0, 140.0));
}

#[test]
fn test_two_finger_pan_without_spread_keeps_zoom() {
    let mut board = TestBoardBuilder::new().with_zoom(1.7).build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 0.0, 0.0);
    down(&mut arbiter, &mut board, 2, 100.0, 0.0);
    move_to(&mut arbiter, &mut board, 1, 40.0, 25.0);
    move_to(&mut arbiter, &mut board, 2, 140.0, 25.0);

    let v = board.viewport();
    assert_eq!(v.zoom, 1.7);
    assert_point_close(v.offset(), (40.0, 25.0));
}

#[test]
fn test_pinch_zoom_is_clamped() {
    let mut board = TestBoardBuilder::new().build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 100.0, 100.0);
    down(&mut arbiter, &mut board, 2, 110.0, 100.0);

    move_to(&mut arbiter, &mut board, 2, 1100.0, 100.0);
    assert_eq!(board.viewport().zoom, MAX_ZOOM);

    move_to(&mut arbiter, &mut board, 2, 100.5, 100.0);
    assert_eq!(board.viewport().zoom, MIN_ZOOM);
}

#[test]
fn test_coincident_fingers_do_not_divide_by_zero() {
    let mut board = TestBoardBuilder::new().with_zoom(1.5).build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 50.0, 50.0);
    down(&mut arbiter, &mut board, 2, 50.0, 50.0);
    move_to(&mut arbiter, &mut board, 2, 150.0, 50.0);

    let v = board.viewport();
    assert_eq!(v.zoom, 1.5);
    assert!(v.x.is_finite() && v.y.is_finite());
    // midpoint moved by (50, 0)
    assert_point_close(v.offset(), (50.0, 0.0));
}

#[test]
fn test_lifting_one_finger_ends_gesture_without_panning() {
    let mut board = TestBoardBuilder::new().build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 100.0, 100.0);
    down(&mut arbiter, &mut board, 2, 200.0, 100.0);
    up(&mut arbiter, &mut board, 2, 200.0, 100.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::Idle);

    let before = board.viewport();
    move_to(&mut arbiter, &mut board, 1, 400.0, 400.0);
    assert_eq!(board.viewport(), before);
    assert!(arbiter.is_capturing());

    up(&mut arbiter, &mut board, 1, 400.0, 400.0);
    assert!(!arbiter.is_capturing());
    assert_eq!(arbiter.pointers().count(), 0);
}

#[test]
fn test_third_pointer_is_ignored() {
    let mut board = TestBoardBuilder::new().build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 100.0, 100.0);
    down(&mut arbiter, &mut board, 2, 200.0, 100.0);
    down(&mut arbiter, &mut board, 3, 500.0, 500.0);
    move_to(&mut arbiter, &mut board, 3, 900.0, 900.0);

    assert_eq!(arbiter.mode().kind(), ModeKind::Gesture);
    assert_eq!(board.viewport().zoom, 1.0);
    assert_point_close(board.viewport().offset(), (0.0, 0.0));
}

#[test]
fn test_second_finger_discards_stroke() {
    let mut board = TestBoardBuilder::new().with_tool(ToolType::Pen).build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 10.0, 10.0);
    move_to(&mut arbiter, &mut board, 1, 20.0, 20.0);
    assert!(arbiter.stroke_in_progress().is_some());

    down(&mut arbiter, &mut board, 2, 100.0, 100.0);
    assert_eq!(arbiter.mode().kind(), ModeKind::Gesture);
    assert!(arbiter.stroke_in_progress().is_none());

    up(&mut arbiter, &mut board, 2, 100.0, 100.0);
    up(&mut arbiter, &mut board, 1, 20.0, 20.0);
    assert!(board.strokes().is_empty());
}

#[test]
fn test_pan_priority_over_tools() {
    // middle button pans even with the pen
    let mut board = TestBoardBuilder::new().with_tool(ToolType::Pen).build();
    let mut arbiter = Arbiter::new();
    let press = PointerEvent::new(1, 10.0, 10.0).with_button(PointerButton::Middle);
    arbiter.pointer_down(&mut board, &press);
    assert_eq!(arbiter.mode().kind(), ModeKind::Pan);
    move_to(&mut arbiter, &mut board, 1, 60.0, 30.0);
    up(&mut arbiter, &mut board, 1, 60.0, 30.0);
    assert_point_close(board.viewport().offset(), (50.0, 20.0));
    assert!(board.strokes().is_empty());

    // space held over a note pans instead of dragging
    let (mut board, ids) = TestBoardBuilder::new().with_note((0.0, 0.0)).build_with_ids();
    arbiter.key_down(&mut board, Key::Space, Modifiers::NONE, false);
    drag(&mut arbiter, &mut board, 1, (50.0, 50.0), (80.0, 50.0), 3);
    arbiter.key_up(Key::Space);
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
    assert_point_close(board.viewport().offset(), (30.0, 0.0));

    // hand tool
    board.set_tool(ToolType::Hand);
    drag(&mut arbiter, &mut board, 1, (50.0, 50.0), (50.0, 90.0), 2);
    assert_point_close(board.viewport().offset(), (30.0, 40.0));
    assert_point_close(board.note(&ids[0]).unwrap().position(), (0.0, 0.0));
}

#[test]
fn test_pan_is_absolute_from_start() {
    let mut board = TestBoardBuilder::new()
        .with_tool(ToolType::Hand)
        .with_offset(10.0, 10.0)
        .with_zoom(3.0)
        .build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 0.0, 0.0);
    for _ in 0..5 {
        move_to(&mut arbiter, &mut board, 1, 25.0, 5.0);
    }
    assert_point_close(board.viewport().offset(), (35.0, 15.0));
    assert_eq!(board.viewport().zoom, 3.0);
}

#[test]
fn test_wheel_zoom_and_pan() {
    let mut board = TestBoardBuilder::new().build();
    let mut arbiter = Arbiter::new();
    let cursor = Point::new(300.0, 200.0);
    let world = screen_to_world(cursor, &board.viewport());

    arbiter.wheel(
        &mut board,
        &WheelEvent {
            position: cursor,
            delta: Point::new(0.0, -500.0),
            modifiers: Modifiers::ctrl(),
        },
    );
    assert_close(board.viewport().zoom, 1.5);
    assert_point_close(world_to_screen(world, &board.viewport()), (300.0, 200.0));

    arbiter.wheel(
        &mut board,
        &WheelEvent {
            position: cursor,
            delta: Point::new(10.0, 20.0),
            modifiers: Modifiers::NONE,
        },
    );
    assert_close(board.viewport().zoom, 1.5);
    let v = board.viewport();
    let expected = (-150.0 - 10.0, -100.0 - 20.0);
    assert_point_close(v.offset(), expected);
}

#[test]
fn test_pointer_leave_ends_like_release() {
    let mut board = TestBoardBuilder::new().with_tool(ToolType::Pen).build();
    let mut arbiter = Arbiter::new();
    down(&mut arbiter, &mut board, 1, 0.0, 0.0);
    move_to(&mut arbiter, &mut board, 1, 10.0, 0.0);
    arbiter.pointer_leave(&mut board, &PointerEvent::new(1, 10.0, 0.0));

    assert_eq!(board.strokes().len(), 1);
    assert_eq!(arbiter.mode().kind(), ModeKind::Idle);
    assert!(!arbiter.is_capturing());

    // unknown pointers are ignored
    arbiter.pointer_cancel(&mut board, &PointerEvent::new(9, 0.0, 0.0));
    assert_eq!(board.strokes().len(), 1);
}
