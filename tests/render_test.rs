// tests/render_test.rs
//
// Text rendering goes through the system font lookup, so these need a
// sans-serif font installed.

use std::path::PathBuf;

use tempfile::TempDir;

use pid_plotter::data_input::log_data::{PidColumns, Sample};
use pid_plotter::plot_framework::RenderOptions;
use pid_plotter::plot_functions::plot_pid_trace::plot_pid_trace;

fn heater_run() -> PidColumns {
    let samples: Vec<Sample> = (0..120)
        .map(|k| {
            let t = k * 60;
            let measurement = 20.0 + 40.0 * (1.0 - (-(k as f64) / 30.0).exp());
            let p = 1.5 * (60.0 - measurement);
            let i = 0.05 * k as f64;
            let d = if k == 0 { 0.0 } else { -0.8 };
            Sample::new(t, 60.0, measurement, (p + i + d).clamp(0.0, 100.0), p, i, d)
        })
        .collect();
    PidColumns::from_samples(&samples)
}

fn render_to(dir: &TempDir, name: &str, columns: &PidColumns) -> PathBuf {
    let options = RenderOptions::for_input(&dir.path().join("heater.csv"))
        .with_output(dir.path().join(name))
        .with_size(1280, 720);
    plot_pid_trace(columns, &options).expect("render chart")
}

#[test]
fn test_png_chart_is_written() {
    let dir = TempDir::new().unwrap();
    let written = render_to(&dir, "heater.png", &heater_run());
    let metadata = std::fs::metadata(&written).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_svg_chart_has_both_legends() {
    let dir = TempDir::new().unwrap();
    let written = render_to(&dir, "heater.svg", &heater_run());
    let svg = std::fs::read_to_string(written).unwrap();
    for label in ["Setpoint", "Measurement", "Error", "Output", "Time (ms)"] {
        assert!(svg.contains(label), "missing '{label}'");
    }
}

#[test]
fn test_empty_dataset_renders() {
    let dir = TempDir::new().unwrap();
    let written = render_to(&dir, "empty.png", &PidColumns::default());
    assert!(written.exists());
}
