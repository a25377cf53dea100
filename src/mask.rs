//! Visited-pixel bookkeeping for the scan.

use crate::detector::params::SEED_CLEARANCE_RADIUS;
use crate::types::Direction;

/// Boolean grid recording which pixels a trace has already consumed.
///
/// Marks are permanent for the lifetime of a scan; there is no un-marking.
pub struct VisitedMask {
    w: usize,
    h: usize,
    cells: Vec<bool>,
}

impl VisitedMask {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            cells: vec![false; w * h],
        }
    }

    /// Marks (x, y) visited. Idempotent; the caller only marks pixels it has
    /// stepped onto, which are in bounds by construction.
    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) {
        debug_assert!(x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h);
        self.cells[y as usize * self.w + x as usize] = true;
    }

    #[inline]
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.w
            && (y as usize) < self.h
            && self.cells[y as usize * self.w + x as usize]
    }

    /// Whether any pixel on the four cardinal rays from (x, y), offsets
    /// `0..SEED_CLEARANCE_RADIUS`, is already visited.
    ///
    /// This is a heuristic substitute for connected-component membership: it
    /// keeps the scanner from re-seeding next to a traced stroke, at the cost
    /// of occasionally skipping a separate region that lies within the
    /// clearance radius of one. Accepted approximation, not a defect.
    pub fn is_area_visited(&self, x: i32, y: i32) -> bool {
        for dir in Direction::ALL {
            let (dx, dy) = dir.step();
            for j in 0..SEED_CLEARANCE_RADIUS {
                if self.is_visited(x + j * dx, y + j * dy) {
                    return true;
                }
            }
        }
        false
    }
}
