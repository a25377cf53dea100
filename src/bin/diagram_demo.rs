use diagram_detector::config::diagram;
use diagram_detector::diagnostics::DetectionReport;
use diagram_detector::image::io::{load_rgb_image, write_json_file};
use diagram_detector::GraphDetector;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "diagram_demo".to_string());
    let config = diagram::parse_cli(&program)?;

    let rgb = load_rgb_image(&config.input_path)?;
    let image = rgb.as_view();

    let detector = GraphDetector::new();
    let report = detector.process_with_diagnostics(image);

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &DetectionReport) {
    let res = &report.graph;
    println!("Vertices count = {}", res.vertex_count);
    println!("Intersections count = {}", res.intersection_count);

    let trace = &report.trace;
    eprintln!(
        "input={}x{} seeds={} edges={} latency_ms={:.3}",
        trace.input.width, trace.input.height, trace.seeds, res.edge_count, res.latency_ms
    );
    for stage in &trace.timing.stages {
        eprintln!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }
}
