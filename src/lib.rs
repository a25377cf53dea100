#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod field;
pub mod image;
pub mod intersect;
pub mod types;

// "Expert" modules – still public, but considered unstable internals.
pub mod mask;
pub mod registry;
pub mod scanner;

mod tracer;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::GraphDetector;
pub use crate::types::{Edge, GraphResult, Point};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Generally useful geometry helpers.
pub use crate::intersect::{count_crossings, segments_cross};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use diagram_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![255u8; w * h * 3];
/// let img = ImageRgb8 { w, h, stride: w * 3, data: &rgb };
///
/// let detector = GraphDetector::new();
/// let result = detector.process(img);
/// println!(
///     "vertices={} intersections={} latency_ms={:.3}",
///     result.vertex_count, result.intersection_count, result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::{GraphDetector, GraphResult};
}
