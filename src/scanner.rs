//! Seed scan driving the line tracer across the whole image.

use crate::field::PixelField;
use crate::mask::VisitedMask;
use crate::registry::VertexRegistry;
use crate::tracer::LineTracer;
use crate::types::{Edge, Point};

/// Vertices and edges discovered by one full scan.
pub struct ScanOutcome {
    pub vertices: Vec<Point>,
    pub edges: Vec<Edge>,
    /// Number of seed pixels that started a trace.
    pub seeds: usize,
}

/// Column-major pass over every pixel, seeding a trace at each black pixel
/// whose neighborhood has not been explored yet.
///
/// The scanner owns the visited mask, the vertex registry and the edge list
/// for the duration of the run; every pixel is considered exactly once as a
/// potential seed. Scan order only affects discovery order, not the final
/// counts.
pub struct GraphScanner<'a, 'b> {
    field: &'b PixelField<'a>,
    mask: VisitedMask,
    registry: VertexRegistry,
    edges: Vec<Edge>,
}

impl<'a, 'b> GraphScanner<'a, 'b> {
    pub fn new(field: &'b PixelField<'a>) -> Self {
        Self {
            field,
            mask: VisitedMask::new(field.width(), field.height()),
            registry: VertexRegistry::new(),
            edges: Vec::new(),
        }
    }

    pub fn run(mut self) -> ScanOutcome {
        let mut seeds = 0usize;
        for x in 0..self.field.width() as i32 {
            for y in 0..self.field.height() as i32 {
                if self.field.is_black(x, y) && !self.mask.is_area_visited(x, y) {
                    seeds += 1;
                    let mut tracer = LineTracer {
                        field: self.field,
                        mask: &mut self.mask,
                        registry: &mut self.registry,
                        edges: &mut self.edges,
                    };
                    tracer.follow(Point::new(x, y));
                }
            }
        }
        ScanOutcome {
            vertices: self.registry.into_points(),
            edges: self.edges,
            seeds,
        }
    }
}
