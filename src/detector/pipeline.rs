//! Detector pipeline driving the graph extraction end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use diagram_detector::image::ImageRgb8;
//! use diagram_detector::GraphDetector;
//!
//! # fn example(img: ImageRgb8) {
//! let detector = GraphDetector::new();
//! let result = detector.process(img);
//! println!("vertices={} intersections={}", result.vertex_count, result.intersection_count);
//! # }
//! ```
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::field::PixelField;
use crate::image::ImageRgb8;
use crate::intersect::count_crossings;
use crate::scanner::GraphScanner;
use crate::types::GraphResult;
use log::debug;
use std::time::Instant;

/// Graph detector: pixel classification, line tracing, vertex clustering and
/// crossing counting over a single borrowed image view.
///
/// The expected input style is a precondition: bold orthogonal-stepping
/// strokes and filled circular vertex blobs roughly as large as
/// [`super::params::VERTEX_RADIUS`]. Thinner ink is not rejected, but the
/// corner-turning heuristic makes no promises about it.
#[derive(Default)]
pub struct GraphDetector;

impl GraphDetector {
    pub fn new() -> Self {
        Self
    }

    /// Run the detector on an RGB image, returning a compact result.
    pub fn process(&self, img: ImageRgb8) -> GraphResult {
        self.process_with_diagnostics(img).graph
    }

    /// Run the detector and return both the result and a detailed report.
    pub fn process_with_diagnostics(&self, img: ImageRgb8) -> DetectionReport {
        let (width, height) = (img.w, img.h);
        debug!("GraphDetector::process start w={} h={}", width, height);
        let total_start = Instant::now();

        let field = PixelField::new(img);

        let scan_start = Instant::now();
        let outcome = GraphScanner::new(&field).run();
        let scan_ms = scan_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "scan done seeds={} vertices={} edges={} elapsed_ms={:.3}",
            outcome.seeds,
            outcome.vertices.len(),
            outcome.edges.len(),
            scan_ms
        );

        let cross_start = Instant::now();
        let intersection_count = count_crossings(&outcome.edges);
        let cross_ms = cross_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "crossing count done intersections={} elapsed_ms={:.3}",
            intersection_count, cross_ms
        );

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let mut timing = TimingBreakdown {
            total_ms,
            stages: Vec::new(),
        };
        timing.push("scan", scan_ms);
        timing.push("intersections", cross_ms);

        DetectionReport {
            graph: GraphResult {
                vertex_count: outcome.vertices.len(),
                edge_count: outcome.edges.len(),
                intersection_count,
                latency_ms: total_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor { width, height },
                seeds: outcome.seeds,
                vertices: outcome.vertices,
                edges: outcome.edges,
                timing,
            },
        }
    }
}
