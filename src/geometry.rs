//! Coordinate conversion and stroke geometry.
//!
//! Centralizes the screen ↔ world formulas so the gesture engine, the hit
//! tester and the store never re-derive them inline. Everything here is a pure
//! function of its arguments.

use crate::types::{Point, Rect};
use crate::viewport::Viewport;
use std::fmt::Write as _;

/// Convert a screen position (surface-relative pixels) to world space
#[inline]
pub fn screen_to_world(p: Point, viewport: &Viewport) -> Point {
    Point::new(
        (p.x - viewport.x) / viewport.zoom,
        (p.y - viewport.y) / viewport.zoom,
    )
}

/// Convert a world position to screen space
#[inline]
pub fn world_to_screen(p: Point, viewport: &Viewport) -> Point {
    Point::new(p.x * viewport.zoom + viewport.x, p.y * viewport.zoom + viewport.y)
}

/// Convert a screen-space delta to world space (for drag operations)
#[inline]
pub fn delta_screen_to_world(delta: Point, zoom: f64) -> Point {
    Point::new(delta.x / zoom, delta.y / zoom)
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Bounding box of a point sequence; `None` when empty
pub fn bounds_of_points(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_point(*first), |acc, p| acc.union(&Rect::from_point(*p))),
    )
}

/// Shortest distance from `p` to the segment `a`–`b`
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}

/// Shortest distance from `p` to a polyline. A single point is treated as a
/// zero-length segment; an empty polyline is infinitely far away.
pub fn distance_to_polyline(p: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => distance(p, *only),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

// ============================================================================
// Stroke Paths
// ============================================================================

/// One drawing command of a smoothed stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    QuadTo { ctrl: Point, to: Point },
    LineTo(Point),
}

/// Smoothed curve through a stroke's raw points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokePath {
    pub segments: Vec<PathSegment>,
}

impl StrokePath {
    /// Build the path: quadratic segments whose control point is the previous
    /// raw point and whose end is the midpoint to the next raw point, closed
    /// by a straight line to the final raw point.
    pub fn from_points(points: &[Point]) -> Self {
        let Some((first, _)) = points.split_first() else {
            return Self::default();
        };

        let mut segments = Vec::with_capacity(points.len() + 1);
        segments.push(PathSegment::MoveTo(*first));
        for pair in points.windows(2) {
            segments.push(PathSegment::QuadTo {
                ctrl: pair[0],
                to: midpoint(pair[0], pair[1]),
            });
        }
        if let Some(last) = points.last() {
            segments.push(PathSegment::LineTo(*last));
        }
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the path covers no distance (empty or a single repeated point)
    pub fn is_degenerate(&self) -> bool {
        let mut origin = None;
        for segment in &self.segments {
            let p = match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p,
                PathSegment::QuadTo { to, .. } => *to,
            };
            match origin {
                None => origin = Some(p),
                Some(o) if o != p => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// SVG path data (`d` attribute)
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for segment in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing to a String cannot fail
            let _ = match segment {
                PathSegment::MoveTo(p) => write!(d, "M {} {}", p.x, p.y),
                PathSegment::QuadTo { ctrl, to } => {
                    write!(d, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathSegment::LineTo(p) => write!(d, "L {} {}", p.x, p.y),
            };
        }
        d
    }
}
