//! Vertex candidate collection with radius-based deduplication.

use crate::detector::params::VERTEX_RADIUS_SQ;
use crate::types::Point;

/// Unordered set of vertex centers, deduplicated at insertion time.
///
/// The first accepted candidate becomes the representative of its cluster;
/// later candidates within the clustering radius are rejected rather than
/// merged into a centroid. One linear pass, no re-clustering.
#[derive(Default)]
pub struct VertexRegistry {
    verts: Vec<Point>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `point` unless an existing vertex lies within squared
    /// distance `VERTEX_RADIUS_SQ`. Returns whether the point was accepted.
    pub fn try_add(&mut self, point: Point) -> bool {
        if self
            .verts
            .iter()
            .any(|v| v.distance_sq(&point) <= VERTEX_RADIUS_SQ)
        {
            return false;
        }
        self.verts.push(point);
        true
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.verts
    }

    pub fn into_points(self) -> Vec<Point> {
        self.verts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::params::VERTEX_RADIUS;

    #[test]
    fn candidates_within_radius_collapse() {
        let mut reg = VertexRegistry::new();
        assert!(reg.try_add(Point::new(100, 100)));
        // exactly on the radius boundary: squared distance == R^2, rejected
        assert!(!reg.try_add(Point::new(100 + VERTEX_RADIUS, 100)));
        assert!(!reg.try_add(Point::new(110, 110)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn candidates_past_radius_both_register() {
        let mut reg = VertexRegistry::new();
        assert!(reg.try_add(Point::new(100, 100)));
        assert!(reg.try_add(Point::new(100 + VERTEX_RADIUS + 1, 100)));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn rejection_does_not_mutate() {
        let mut reg = VertexRegistry::new();
        reg.try_add(Point::new(0, 0));
        reg.try_add(Point::new(10, 0));
        assert_eq!(reg.points(), &[Point::new(0, 0)]);
    }
}
