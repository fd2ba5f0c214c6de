//! Path post-processing.
//!
//! A* returns one waypoint per grid cell. For drawing and for turn-by-turn
//! display only the corners matter:
//! - Collinear waypoint reduction
//! - Path length measurement (Manhattan and Euclidean)

use crate::core::WorldPoint;

/// Collapse runs of waypoints that continue in the same direction.
///
/// The first and last points are always kept verbatim. Repeated points are
/// dropped, then every interior point whose incoming and outgoing segments
/// point exactly the same way. Any bend, however slight, is kept, so
/// geometry and Manhattan length are unchanged.
pub fn optimize_path(path: &[WorldPoint]) -> Vec<WorldPoint> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let first = path[0];
    let last = path[path.len() - 1];

    let mut distinct: Vec<WorldPoint> = Vec::with_capacity(path.len());
    for &p in path {
        if distinct.last() != Some(&p) {
            distinct.push(p);
        }
    }
    if distinct.len() == 1 {
        return vec![first, last];
    }

    let mut result = Vec::with_capacity(distinct.len());
    result.push(first);
    for w in distinct.windows(3) {
        if !continues_straight(w[0], w[1], w[2]) {
            result.push(w[1]);
        }
    }
    result.push(last);
    result
}

/// `curr` lies on a straight run from `prev` to `next`.
fn continues_straight(prev: WorldPoint, curr: WorldPoint, next: WorldPoint) -> bool {
    let incoming = curr - prev;
    let outgoing = next - curr;

    let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
    let dot = incoming.x * outgoing.x + incoming.y * outgoing.y;
    cross == 0.0 && dot > 0.0
}

/// Total Manhattan length of consecutive waypoint pairs (meters)
pub fn manhattan_length(path: &[WorldPoint]) -> f32 {
    path.windows(2)
        .map(|w| w[0].manhattan_distance(&w[1]))
        .sum()
}

/// Total Euclidean length of consecutive waypoint pairs (meters)
pub fn path_length(path: &[WorldPoint]) -> f32 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
