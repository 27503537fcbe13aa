//! Scene-level hit-testing over many colliders.
//!
//! Callers pass colliders as `(key, &Collider)` pairs in draw order, so later
//! items sit on top of earlier ones. Keys are whatever the scene uses to name
//! its objects.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use tracing::trace;

use crate::collider::Collider;
use crate::point::Point;

/// The nearest collider crossed by a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit<K> {
    pub key: K,
    pub point: Point,
    /// Distance from the segment start to `point`.
    pub distance: f64,
}

/// Topmost collider containing `point`.
#[must_use]
pub fn hit_test<'a, K: Copy>(point: &Point, items: impl IntoIterator<Item = (K, &'a Collider)>) -> Option<K> {
    let hit = items
        .into_iter()
        .filter(|(_, collider)| collider.contains(point))
        .last()
        .map(|(key, _)| key);
    trace!(x = point.x, y = point.y, found = hit.is_some(), "hit test");
    hit
}

/// Every collider overlapping `probe`, in iteration order.
#[must_use]
pub fn overlapping<'a, K: Copy>(probe: &Collider, items: impl IntoIterator<Item = (K, &'a Collider)>) -> Vec<K> {
    items
        .into_iter()
        .filter(|(_, collider)| probe.collides_with(collider))
        .map(|(key, _)| key)
        .collect()
}

/// Collider whose boundary the directed segment `p0 -> p1` reaches first.
///
/// Ties keep the earliest item in iteration order.
#[must_use]
pub fn first_segment_hit<'a, K: Copy>(
    p0: &Point,
    p1: &Point,
    items: impl IntoIterator<Item = (K, &'a Collider)>,
) -> Option<SegmentHit<K>> {
    let mut best: Option<SegmentHit<K>> = None;
    for (key, collider) in items {
        let Some(point) = collider.intersect_with_segment(p0, p1, None) else {
            continue;
        };
        let distance = p0.distance(&point);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(SegmentHit { key, point, distance });
        }
    }
    trace!(found = best.is_some(), "first segment hit");
    best
}
