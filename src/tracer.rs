//! Finite-state line tracer.
//!
//! Given a black seed pixel, the tracer walks the connected stroke and emits
//! the vertices and edges it discovers. The walk alternates two cardinal
//! directions instead of requiring a thinned one-pixel skeleton:
//!
//! - An inner run steps along the current direction while the next pixel is
//!   black and unvisited, marking pixels and accumulating the displacement
//!   into the current lap pattern.
//! - The very first stop adopts the current direction as "previous" and
//!   rotates to the next cardinal; this initial 90°-biased probe finds the
//!   stroke's local orientation.
//! - Whenever a run stops while heading in the era's begin direction, the
//!   lap closes. The first lap of an era is recorded as the reference
//!   pattern; a later lap whose pattern differs signals arrival at a vertex
//!   blob. The current position is registered as a vertex, the paired
//!   endpoint is found by walking backward along the reference pattern
//!   ([`go_back`]), and an edge connects the two.
//! - When the stroke is blocked, a corner probe ([`try_direction`]) checks
//!   for a genuine continuation around the blob: three black runs, turning
//!   to the previous direction and back. On confirmation the era rotates
//!   (begin direction advances) and the walk resumes; otherwise the trace
//!   ends.
//!
//! The walk deliberately tolerates stroke widths above one pixel (two-way
//! alternation) and vertex blobs wider than a stroke (corner probing). It
//! can revisit ink consumed earlier in the scan; a stall counter abandons a
//! trace once no direction has made progress for a full probing cycle, which
//! bounds tracing work by the black-pixel count.
//!
//! [`go_back`]: LineTracer::go_back
//! [`try_direction`]: LineTracer::try_direction

use crate::detector::params::STALL_LIMIT;
use crate::field::PixelField;
use crate::mask::VisitedMask;
use crate::registry::VertexRegistry;
use crate::types::{Direction, Edge, Point};

/// One line-following walk over the pixel field.
///
/// Borrows the scan-wide mutable state for the duration of a single trace;
/// the scanner constructs a fresh tracer per seed.
pub(crate) struct LineTracer<'a, 'b> {
    pub field: &'b PixelField<'a>,
    pub mask: &'b mut VisitedMask,
    pub registry: &'b mut VertexRegistry,
    pub edges: &'b mut Vec<Edge>,
}

impl<'a, 'b> LineTracer<'a, 'b> {
    /// Follows the stroke reachable from `seed` until it dead-ends, fully
    /// closes, or stalls on revisited ink.
    pub(crate) fn follow(&mut self, seed: Point) {
        let mut pos = seed;
        let mut begin = Direction::East;
        let mut current = begin;
        let mut previous: Option<Direction> = None;
        let mut repeats: u32 = 0;
        let mut lap = Point::new(0, 0);
        let mut reference = Point::new(0, 0);
        let mut stall: u32 = 0;

        loop {
            let (dx, dy) = current.step();
            let mut moved = false;
            while self.field.is_black(pos.x + dx, pos.y + dy)
                && !self.mask.is_visited(pos.x + dx, pos.y + dy)
            {
                pos.x += dx;
                pos.y += dy;
                self.mask.mark(pos.x, pos.y);
                lap.x += dx;
                lap.y += dy;
                moved = true;
            }
            if moved {
                stall = 0;
            } else {
                stall += 1;
                if stall > STALL_LIMIT {
                    break;
                }
            }

            let Some(prev) = previous else {
                previous = Some(current);
                current = current.next();
                continue;
            };

            if current == begin {
                if repeats == 0 {
                    reference = lap;
                } else if lap != reference {
                    // arrived at a blob by a different geometric pattern
                    // than the reference lap
                    if self.registry.try_add(pos) {
                        let other = self.go_back(pos, reference);
                        self.registry.try_add(other);
                        self.edges.push(Edge::new(pos, other));
                    }
                }
                repeats += 1;
                lap = Point::new(0, 0);
            }

            // alternate the two probing directions
            previous = Some(current);
            current = prev;

            let (dx, dy) = current.step();
            if !self.field.is_black(pos.x + dx, pos.y + dy) {
                if self.try_direction(pos, current.next()) {
                    begin = begin.next();
                    previous = None;
                    current = begin;
                    repeats = 0;
                } else {
                    break;
                }
            }
        }
    }

    /// Length of the consecutive black run starting at `from` and stepping
    /// in `dir`; zero when `from` itself is non-black. Pure measurement:
    /// ignores the visited mask and mutates nothing.
    fn go_while_black(&self, from: Point, dir: Direction) -> u32 {
        let (dx, dy) = dir.step();
        let mut steps: i32 = 0;
        while self.field.is_black(from.x + steps * dx, from.y + steps * dy) {
            steps += 1;
        }
        steps as u32
    }

    /// Confirms a stroke continues around a corner of a vertex blob.
    ///
    /// Probes three legs from the stuck position: along `dir`, along
    /// `dir.prev()`, then along `dir` again. Each leg starts at the neighbor
    /// of the current probe position, requires a non-empty black run, and
    /// lands on the last black pixel of that run.
    fn try_direction(&self, start: Point, dir: Direction) -> bool {
        let mut pos = start;
        for leg in [dir, dir.prev(), dir] {
            let (dx, dy) = leg.step();
            let entry = Point::new(pos.x + dx, pos.y + dy);
            let run = self.go_while_black(entry, leg);
            if run == 0 {
                return false;
            }
            let last = run as i32 - 1;
            pos = Point::new(entry.x + last * dx, entry.y + last * dy);
        }
        true
    }

    /// Walks backward from `from` by whole `pattern` vectors while the
    /// target stays black; returns the last black position plus one pattern
    /// step — the far boundary of the straight run. A zero pattern has no
    /// direction to walk and returns `from` unchanged.
    fn go_back(&self, from: Point, pattern: Point) -> Point {
        if pattern.x == 0 && pattern.y == 0 {
            return from;
        }
        let mut pos = from;
        while self.field.is_black(pos.x - pattern.x, pos.y - pattern.y) {
            pos.x -= pattern.x;
            pos.y -= pattern.y;
        }
        Point::new(pos.x + pattern.x, pos.y + pattern.y)
    }
}
