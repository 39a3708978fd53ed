// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;
pub const PLOT_WIDTH_MIN: u32 = 320;
pub const PLOT_HEIGHT_MIN: u32 = 240;
// Caps the bitmap buffer at 16384 x 16384 x 3 bytes.
pub const PLOT_SIZE_MAX: u32 = 16384;

// Input record layout: time,setpoint,measurement,output,p,i,d
pub const FIELD_DELIMITER: u8 = b',';
pub const RECORD_FIELD_COUNT: usize = 7;
pub const FIELD_TIME: usize = 0;
pub const FIELD_SETPOINT: usize = 1;
pub const FIELD_MEASUREMENT: usize = 2;
pub const FIELD_OUTPUT: usize = 3;
pub const FIELD_P: usize = 4;
pub const FIELD_I: usize = 5;
pub const FIELD_D: usize = 6;
pub const FIELD_NAMES: [&str; RECORD_FIELD_COUNT] =
    ["time", "setpoint", "measurement", "output", "p", "i", "d"];

// Suffix of the default image name, appended to the input file stem.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_PID_trace.png";

// --- Plot Color Assignments ---
// Left axis
pub const COLOR_SETPOINT: RGBColor = RGBColor(0, 128, 0);
pub const COLOR_MEASUREMENT: RGBColor = RGBColor(0, 0, 255);
pub const COLOR_ERROR: RGBColor = RGBColor(255, 0, 0);
// Right axis
pub const COLOR_OUTPUT: RGBColor = RGBColor(191, 191, 0);
pub const COLOR_P_TERM: RGBColor = RGBColor(0, 191, 191);
pub const COLOR_I_TERM: RGBColor = RGBColor(191, 0, 191);
pub const COLOR_D_TERM: RGBColor = RGBColor(0, 0, 0);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;

// Chart layout, in pixels.
pub const CHART_MARGIN_PX: u32 = 10;
pub const X_LABEL_AREA_PX: u32 = 50;
pub const Y_LABEL_AREA_PX: u32 = 80;
pub const X_LABEL_COUNT: usize = 20;
pub const Y_LABEL_COUNT: usize = 10;

// Legend box geometry, in pixels.
pub const LEGEND_MARGIN_PX: i32 = 10;
pub const LEGEND_PADDING_PX: i32 = 8;
pub const LEGEND_LINE_LENGTH_PX: i32 = 20;
pub const LEGEND_ROW_HEIGHT_PX: i32 = 20;
// Approximate glyph advance relative to font size.
pub const CHAR_WIDTH_RATIO: f32 = 0.6;

// Range padding used by calculate_range.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const RANGE_PADDING_MIN: f64 = 0.5;
