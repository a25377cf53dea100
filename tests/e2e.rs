mod common;

use common::synthetic_image::DiagramCanvas;
use diagram_detector::GraphDetector;

#[test]
fn blank_image_has_no_graph() {
    let canvas = DiagramCanvas::blank(200, 200);
    let result = GraphDetector::new().process(canvas.as_view());
    assert_eq!(result.vertex_count, 0);
    assert_eq!(result.edge_count, 0);
    assert_eq!(result.intersection_count, 0);
}

#[test]
fn single_stroke_between_two_blobs() {
    let mut canvas = DiagramCanvas::blank(700, 700);
    canvas.disc(240, 360, 64);
    canvas.disc(360, 240, 64);
    canvas.stroke(240, 360, 360, 240, 4);

    let report = GraphDetector::new().process_with_diagnostics(canvas.as_view());
    let result = &report.graph;
    assert_eq!(result.vertex_count, 2, "vertices: {:?}", report.trace.vertices);
    assert_eq!(result.edge_count, 1, "edges: {:?}", report.trace.edges);
    assert_eq!(result.intersection_count, 0);
}

#[test]
fn crossing_strokes_are_counted() {
    let mut canvas = DiagramCanvas::blank(900, 900);
    for (cx, cy) in [(130, 130), (770, 130), (130, 770), (770, 770)] {
        canvas.disc(cx, cy, 64);
    }
    canvas.stroke(130, 130, 770, 770, 4);
    canvas.stroke(770, 130, 130, 770, 4);

    let result = GraphDetector::new().process(canvas.as_view());
    assert!(result.vertex_count > 0);
    assert!(result.edge_count > 0);
    assert!(
        result.intersection_count >= 1,
        "expected at least one crossing, got {}",
        result.intersection_count
    );
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut canvas = DiagramCanvas::blank(900, 900);
    for (cx, cy) in [(130, 130), (770, 130), (130, 770), (770, 770)] {
        canvas.disc(cx, cy, 64);
    }
    canvas.stroke(130, 130, 770, 770, 4);
    canvas.stroke(770, 130, 130, 770, 4);

    let first = GraphDetector::new().process(canvas.as_view());
    let second = GraphDetector::new().process(canvas.as_view());
    assert_eq!(first.vertex_count, second.vertex_count);
    assert_eq!(first.edge_count, second.edge_count);
    assert_eq!(first.intersection_count, second.intersection_count);
}
