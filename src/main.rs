use diagram_detector::image::ImageRgb8;
use diagram_detector::GraphDetector;

fn main() {
    // Demo stub: creates a blank RGB buffer and runs the detector
    let w = 640usize;
    let h = 480usize;
    let stride = w * 3; // tightly packed
    let rgb = vec![255u8; h * stride];
    let img = ImageRgb8 {
        w,
        h,
        stride,
        data: &rgb,
    };

    let detector = GraphDetector::new();
    let res = detector.process(img);
    println!(
        "vertices={} intersections={} latency_ms={:.3}",
        res.vertex_count, res.intersection_count, res.latency_ms
    );
}
