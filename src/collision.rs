//! Stateless containment and intersection tests.
//!
//! Every function takes raw coordinates so hot paths never build temporary
//! shapes. Rectangles are given as top-left corner plus size and cover the
//! half-open area `[x, x + w) x [y, y + h)`; circles are given as centre plus
//! radius and include their boundary.
//!
//! Intersection routines return `None` when there is nothing to report.
//! That includes parallel and collinear lines, which are not told apart.
//! When a `result` point is supplied it is overwritten with the hit and left
//! untouched on a miss, so callers can reuse one scratch point per frame.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::consts::{EDGE_EPSILON, PARALLEL_EPSILON};
use crate::point::Point;

// =============================================================
// Containment
// =============================================================

/// `(px, py)` lies in `[rx, rx + w) x [ry, ry + h)`.
#[must_use]
pub fn point_in_rect(px: f64, py: f64, rx: f64, ry: f64, w: f64, h: f64) -> bool {
    px >= rx && px < rx + w && py >= ry && py < ry + h
}

/// `(px, py)` lies within `r` of `(cx, cy)`, boundary included.
#[must_use]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, r: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}

/// Axis-aligned rectangle overlap.
///
/// Each side is a half-open span `[x, x + w)`. A zero-extent span stands for
/// the single coordinate `x`, which overlaps a span only when that span
/// contains it. A zero-size rectangle therefore overlaps exactly when
/// [`point_in_rect`] would contain its corner, and a target with a zero-extent
/// side is hit by nothing, just as it contains no point. Touching edges do
/// not overlap.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rect_in_rect(x1: f64, y1: f64, w1: f64, h1: f64, x2: f64, y2: f64, w2: f64, h2: f64) -> bool {
    spans_overlap(x1, w1, x2, w2) && spans_overlap(y1, h1, y2, h2)
}

/// Centres are no further apart than the sum of the radii.
#[must_use]
pub fn circle_in_circle(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    let reach = r1 + r2;
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy <= reach * reach
}

/// The rectangle point nearest the circle centre lies inside the circle.
#[must_use]
pub fn rect_in_circle(rx: f64, ry: f64, w: f64, h: f64, cx: f64, cy: f64, r: f64) -> bool {
    // max/min rather than f64::clamp: a negative size must not panic.
    let nearest_x = cx.max(rx).min(rx + w);
    let nearest_y = cy.max(ry).min(ry + h);
    point_in_circle(nearest_x, nearest_y, cx, cy, r)
}

fn spans_overlap(a: f64, a_len: f64, b: f64, b_len: f64) -> bool {
    if a_len == 0.0 {
        return span_contains(b, b_len, a);
    }
    if b_len == 0.0 {
        return span_contains(a, a_len, b);
    }
    a.max(b) < (a + a_len).min(b + b_len)
}

/// `value` lies in `[start, start + len)`.
fn span_contains(start: f64, len: f64, value: f64) -> bool {
    value >= start && value < start + len
}

// =============================================================
// Lines and segments
// =============================================================

/// Intersection of the infinite lines through `p0 p1` and `p2 p3`.
///
/// Returns `None` for parallel lines, collinear lines, and degenerate
/// (zero-length) inputs.
pub fn line_intersection(p0: &Point, p1: &Point, p2: &Point, p3: &Point, result: Option<&mut Point>) -> Option<Point> {
    let (t, _) = intersection_params(p0, p1, p2, p3)?;
    Some(store(point_along(p0, p1, t), result))
}

/// Intersection of the finite segments `p0 p1` and `p2 p3`.
///
/// Both segment parameters must fall in `[0, 1]`.
pub fn segment_intersection(
    p0: &Point,
    p1: &Point,
    p2: &Point,
    p3: &Point,
    result: Option<&mut Point>,
) -> Option<Point> {
    let t = segment_param(p0, p1, p2, p3, 0.0)?;
    Some(store(point_along(p0, p1, t), result))
}

/// First point where the directed segment `p0 -> p1` crosses an edge of the
/// rectangle at `rect_pos` with size `w x h`.
///
/// "First" is the smallest segment parameter. Edges are tested top, right,
/// bottom, left; on a tie (a corner hit) the earlier edge wins. Edge
/// parameters get [`EDGE_EPSILON`] of slack so a crossing exactly through a
/// corner is never lost to rounding.
pub fn segment_rectangle_intersection(
    p0: &Point,
    p1: &Point,
    rect_pos: &Point,
    w: f64,
    h: f64,
    result: Option<&mut Point>,
) -> Option<Point> {
    let t = segment_rectangle_param(p0, p1, rect_pos, w, h)?;
    Some(store(point_along(p0, p1, t), result))
}

/// Smallest segment parameter at which `p0 -> p1` meets one of the rectangle's edges.
#[must_use]
pub fn segment_rectangle_param(p0: &Point, p1: &Point, rect_pos: &Point, w: f64, h: f64) -> Option<f64> {
    let top_left = *rect_pos;
    let top_right = Point::new(rect_pos.x + w, rect_pos.y);
    let bottom_right = Point::new(rect_pos.x + w, rect_pos.y + h);
    let bottom_left = Point::new(rect_pos.x, rect_pos.y + h);
    let edges = [
        (top_left, top_right),
        (top_right, bottom_right),
        (bottom_right, bottom_left),
        (bottom_left, top_left),
    ];

    let mut best: Option<f64> = None;
    for (a, b) in &edges {
        if let Some(t) = segment_param(p0, p1, a, b, EDGE_EPSILON) {
            if best.is_none_or(|current| t < current) {
                best = Some(t);
            }
        }
    }
    best
}

/// Parameter along `p0 p1` of its crossing with segment `p2 p3`, when `t`
/// lies in `[0, 1]` and `u` lies in `[-slack, 1 + slack]`.
fn segment_param(p0: &Point, p1: &Point, p2: &Point, p3: &Point, slack: f64) -> Option<f64> {
    let (t, u) = intersection_params(p0, p1, p2, p3)?;
    ((0.0..=1.0).contains(&t) && (-slack..=1.0 + slack).contains(&u)).then_some(t)
}

/// Solve `p0 + t (p1 - p0) = p2 + u (p3 - p2)` for `(t, u)`.
///
/// `det` is `|d1| |d2| sin(angle)`, so the parallel test scales with the
/// inputs. Zero-length directions give `0 <= 0` and are rejected too.
fn intersection_params(p0: &Point, p1: &Point, p2: &Point, p3: &Point) -> Option<(f64, f64)> {
    let d1x = p1.x - p0.x;
    let d1y = p1.y - p0.y;
    let d2x = p3.x - p2.x;
    let d2y = p3.y - p2.y;

    let det = d1x * d2y - d1y * d2x;
    if det.abs() <= PARALLEL_EPSILON * d1x.hypot(d1y) * d2x.hypot(d2y) {
        return None;
    }

    let ox = p2.x - p0.x;
    let oy = p2.y - p0.y;
    let t = (ox * d2y - oy * d2x) / det;
    let u = (ox * d1y - oy * d1x) / det;
    Some((t, u))
}

fn point_along(p0: &Point, p1: &Point, t: f64) -> Point {
    Point::new(p0.x + (p1.x - p0.x) * t, p0.y + (p1.y - p0.y) * t)
}

fn store(hit: Point, result: Option<&mut Point>) -> Point {
    if let Some(out) = result {
        out.set_to(&hit);
    }
    hit
}
