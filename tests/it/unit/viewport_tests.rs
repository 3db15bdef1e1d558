//! Unit tests for the viewport model.

use crate::helpers::{assert_close, assert_point_close};
use ideaboard::constants::{MAX_ZOOM, MIN_ZOOM};
use ideaboard::geometry::{screen_to_world, world_to_screen};
use ideaboard::types::{Point, Rect, Size};
use ideaboard::viewport::Viewport;

#[test]
fn test_zoom_about_keeps_anchor_fixed() {
    let anchors = [Point::new(0.0, 0.0), Point::new(320.0, 240.0), Point::new(-50.0, 900.0)];
    for anchor in anchors {
        for target in [0.1, 0.5, 1.0, 2.5, 5.0] {
            let mut v = Viewport::new(40.0, -15.0, 1.3);
            let world = screen_to_world(anchor, &v);
            v.zoom_about(anchor, target);
            assert_point_close(world_to_screen(world, &v), (anchor.x, anchor.y));
        }
    }
}

#[test]
fn test_zoom_about_clamps() {
    let mut v = Viewport::default();
    v.zoom_about(Point::new(10.0, 10.0), 100.0);
    assert_eq!(v.zoom, MAX_ZOOM);
    v.zoom_about(Point::new(10.0, 10.0), -3.0);
    assert_eq!(v.zoom, MIN_ZOOM);
}

#[test]
fn test_wheel_without_modifier_pans() {
    let mut v = Viewport::new(100.0, 100.0, 2.0);
    v.apply_wheel(Point::new(5.0, 5.0), Point::new(30.0, -10.0), false);
    assert_eq!(v, Viewport::new(70.0, 110.0, 2.0));
}

#[test]
fn test_wheel_with_modifier_zooms_to_cursor() {
    let mut v = Viewport::default();
    let cursor = Point::new(200.0, 150.0);
    let world = screen_to_world(cursor, &v);
    v.apply_wheel(cursor, Point::new(0.0, -100.0), true);
    assert_close(v.zoom, 1.1);
    assert_point_close(world_to_screen(world, &v), (200.0, 150.0));
}

#[test]
fn test_fit_to_content() {
    let content = Rect::from_origin_size(Point::new(0.0, 0.0), Size::new(1000.0, 400.0));
    let v = Viewport::fit_to_content(Some(content), Size::new(1200.0, 800.0), 100.0);
    assert_close(v.zoom, 1.0);
    assert_point_close(Point::new(v.x, v.y), (100.0, 200.0));

    let wide = Rect::from_origin_size(Point::new(0.0, 0.0), Size::new(2200.0, 100.0));
    let v = Viewport::fit_to_content(Some(wide), Size::new(1200.0, 800.0), 100.0);
    assert_close(v.zoom, 0.5);
    assert_point_close(Point::new(v.x, v.y), (50.0, 375.0));
}

#[test]
fn test_fit_empty_board_is_default() {
    let v = Viewport::fit_to_content(None, Size::new(1200.0, 800.0), 100.0);
    assert_eq!(v, Viewport::default());
}

#[test]
fn test_fit_zero_size_box_is_finite() {
    let dot = Rect::from_point(Point::new(10.0, 10.0));
    let v = Viewport::fit_to_content(Some(dot), Size::new(800.0, 600.0), 0.0);
    assert!(v.zoom.is_finite() && v.x.is_finite() && v.y.is_finite());
    assert_close(v.zoom, 1.0);
}

#[test]
fn test_focus_raises_zoom_floor() {
    let v = Viewport::new(0.0, 0.0, 0.3);
    let note = Rect::from_origin_size(Point::new(1000.0, 1000.0), Size::new(200.0, 180.0));
    let focused = v.focus_on(note, Size::new(1280.0, 800.0));
    assert_close(focused.zoom, 0.8);
    assert_point_close(
        world_to_screen(note.center(), &focused),
        (640.0, 400.0),
    );

    let zoomed_in = Viewport::new(0.0, 0.0, 3.0).focus_on(note, Size::new(1280.0, 800.0));
    assert_close(zoomed_in.zoom, 3.0);
}

#[test]
fn test_sanitized_recovers_from_garbage() {
    let v = Viewport {
        x: f64::NAN,
        y: f64::INFINITY,
        zoom: f64::NAN,
    }
    .sanitized();
    assert_eq!(v, Viewport::default());
}
