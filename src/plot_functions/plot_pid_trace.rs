// src/plot_functions/plot_pid_trace.rs

use log::info;
use ndarray::Array1;
use plotters::style::RGBColor;
use std::path::PathBuf;

use crate::axis_names::{AxisSide, TIME_AXIS_LABEL};
use crate::constants::{
    COLOR_D_TERM, COLOR_ERROR, COLOR_I_TERM, COLOR_MEASUREMENT, COLOR_OUTPUT, COLOR_P_TERM,
    COLOR_SETPOINT, LINE_WIDTH_PLOT,
};
use crate::data_input::log_data::PidColumns;
use crate::error::Result;
use crate::plot_framework::{
    calculate_range, draw_dual_axis_plot, finite_bounds, DualAxisPlotConfig, PlotSeries,
    RenderOptions,
};

/// Builds the dual-axis chart description for the columns without drawing it.
///
/// Setpoint, measurement and error go on the left axis; output and the P, I, D
/// terms share the right axis. Empty columns still give a drawable config with
/// fallback ranges.
pub fn pid_trace_config(columns: &PidColumns, title: &str) -> DualAxisPlotConfig {
    let time = columns.time_as_f64();

    let left_series = [
        (&columns.setpoint, "Setpoint", COLOR_SETPOINT),
        (&columns.measurement, "Measurement", COLOR_MEASUREMENT),
        (&columns.error, "Error", COLOR_ERROR),
    ];
    let right_series = [
        (&columns.output, "Output", COLOR_OUTPUT),
        (&columns.p, "P", COLOR_P_TERM),
        (&columns.i, "I", COLOR_I_TERM),
        (&columns.d, "D", COLOR_D_TERM),
    ];

    let x_range = match finite_bounds([column_slice(&time)]) {
        Some((min, max)) if max > min => min..max,
        Some((min, max)) => {
            let (lo, hi) = calculate_range(min, max);
            lo..hi
        }
        None => 0.0..1.0,
    };
    let left_range = axis_range(left_series.iter().map(|(column, _, _)| *column));
    let right_range = axis_range(right_series.iter().map(|(column, _, _)| *column));

    let mut series = Vec::new();
    for (column, label, color) in left_series {
        series.push(line_series(&time, column, label, color, AxisSide::Left));
    }
    for (column, label, color) in right_series {
        series.push(line_series(&time, column, label, color, AxisSide::Right));
    }

    DualAxisPlotConfig {
        title: title.to_string(),
        x_range,
        left_range,
        right_range,
        series,
        x_label: TIME_AXIS_LABEL.to_string(),
        left_label: AxisSide::Left.label().to_string(),
        right_label: AxisSide::Right.label().to_string(),
    }
}

/// Generates the PID trace chart and returns the path it was written to.
pub fn plot_pid_trace(columns: &PidColumns, options: &RenderOptions) -> Result<PathBuf> {
    info!("--- Generating PID Trace Plot ---");
    if columns.is_empty() {
        info!("  No samples to plot; drawing an empty chart.");
    }

    let config = pid_trace_config(columns, &options.title);
    draw_dual_axis_plot(&config, options)?;

    info!("  PID trace plot saved as '{}'.", options.output_path.display());
    Ok(options.output_path.clone())
}

fn column_slice(column: &Array1<f64>) -> &[f64] {
    column.as_slice().unwrap_or(&[])
}

fn axis_range<'a, I>(columns: I) -> std::ops::Range<f64>
where
    I: Iterator<Item = &'a Array1<f64>>,
{
    let (min, max) = finite_bounds(columns.map(column_slice)).unwrap_or((0.0, 0.0));
    let (lo, hi) = calculate_range(min, max);
    lo..hi
}

fn line_series(
    time: &Array1<f64>,
    values: &Array1<f64>,
    label: &str,
    color: RGBColor,
    axis: AxisSide,
) -> PlotSeries {
    PlotSeries {
        data: time.iter().copied().zip(values.iter().copied()).collect(),
        label: label.to_string(),
        color,
        stroke_width: LINE_WIDTH_PLOT,
        axis,
    }
}
