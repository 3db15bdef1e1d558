//! Unit tests for coordinate conversion and stroke geometry.

use crate::helpers::{assert_close, assert_point_close};
use ideaboard::geometry::{
    StrokePath, delta_screen_to_world, distance_to_polyline, screen_to_world, world_to_screen,
};
use ideaboard::types::Point;
use ideaboard::viewport::Viewport;

#[test]
fn test_screen_world_inverse_across_viewports() {
    let viewports = [
        Viewport::new(0.0, 0.0, 1.0),
        Viewport::new(-340.5, 122.0, 0.1),
        Viewport::new(1e4, -7.25, 5.0),
        Viewport::new(13.0, 13.0, 0.37),
    ];
    let points = [
        Point::new(0.0, 0.0),
        Point::new(640.0, 400.0),
        Point::new(-1e5, 3.5),
    ];
    for viewport in &viewports {
        for &p in &points {
            let back = world_to_screen(screen_to_world(p, viewport), viewport);
            assert!(
                (back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6,
                "{viewport:?} moved {p:?} to {back:?}"
            );
        }
    }
}

#[test]
fn test_delta_scales_with_zoom() {
    let delta = delta_screen_to_world(Point::new(50.0, -20.0), 2.0);
    assert_point_close(delta, (25.0, -10.0));
}

#[test]
fn test_polyline_distance() {
    let line = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
    assert_close(distance_to_polyline(Point::new(5.0, 3.0), &line), 3.0);
    assert_close(distance_to_polyline(Point::new(13.0, 5.0), &line), 3.0);
    assert_close(distance_to_polyline(Point::new(-4.0, 3.0), &line), 5.0);
    assert!(distance_to_polyline(Point::ZERO, &[]).is_infinite());
}

#[test]
fn test_stroke_path_svg() {
    let path = StrokePath::from_points(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]);
    insta::assert_snapshot!(path.to_svg(), @"M 0 0 Q 0 0 5 0 Q 10 0 10 5 L 10 10");
    assert!(!path.is_degenerate());
    assert!(StrokePath::from_points(&[Point::new(1.0, 1.0)]).is_degenerate());
}
