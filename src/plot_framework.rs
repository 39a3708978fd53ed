// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::axis_names::{AxisSide, AXIS_SIDES};
use crate::constants::{
    CHART_MARGIN_PX, CHAR_WIDTH_RATIO, DEFAULT_OUTPUT_SUFFIX, FONT_SIZE_LEGEND,
    LEGEND_LINE_LENGTH_PX, LEGEND_MARGIN_PX, LEGEND_PADDING_PX, LEGEND_ROW_HEIGHT_PX,
    LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FRACTION, RANGE_PADDING_MIN,
    X_LABEL_AREA_PX, X_LABEL_COUNT, Y_LABEL_AREA_PX, Y_LABEL_COUNT,
};
use crate::error::{PlotterError, Result};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_MIN
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Min and max over the finite values of all columns, if there are any.
pub fn finite_bounds<'a, I>(columns: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    columns
        .into_iter()
        .flat_map(|column| column.iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Splits a line at non-finite points so gaps are left instead of bogus segments.
pub fn finite_segments(data: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Formats an axis tick value, using "k" and "M" notation for large values
/// and one or two decimals for small fractional ones.
pub fn format_axis_value(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.fract() != 0.0 && y.abs() < 1.0 {
        format!("{:.2}", y)
    } else if y.fract() != 0.0 && y.abs() < 10.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// Rough rendered width of `char_count` glyphs, without touching the font backend.
fn estimate_text_width(char_count: usize, font_size: i32) -> i32 {
    let char_width = (font_size as f32 * CHAR_WIDTH_RATIO) as i32;
    (char_count as i32).saturating_mul(char_width)
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub axis: AxisSide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    LowerLeft,
}

impl LegendPosition {
    /// Left-axis legend sits upper-left, right-axis legend lower-left.
    pub fn for_axis(axis: AxisSide) -> Self {
        match axis {
            AxisSide::Left => LegendPosition::UpperLeft,
            AxisSide::Right => LegendPosition::LowerLeft,
        }
    }
}

/// A chart with two vertical axes over one shared horizontal axis.
#[derive(Clone, Debug)]
pub struct DualAxisPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub left_range: Range<f64>,
    pub right_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub left_label: String,
    pub right_label: String,
}

impl DualAxisPlotConfig {
    pub fn series_on(&self, axis: AxisSide) -> impl Iterator<Item = &PlotSeries> {
        self.series.iter().filter(move |s| s.axis == axis)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// `.svg` selects the vector backend; every other extension goes to the bitmap backend.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Where and how large the chart is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl RenderOptions {
    /// Defaults derived from the input file: the stem is the chart title and
    /// the image lands in the working directory as `<stem>_PID_trace.png`.
    pub fn for_input(input_file_path: &Path) -> Self {
        let root_name = input_file_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        Self {
            output_path: PathBuf::from(format!("{root_name}{DEFAULT_OUTPUT_SUFFIX}")),
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            title: root_name,
        }
    }

    pub fn with_output(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.output_path)
    }
}

/// Writes the dual-axis chart to `options.output_path` with the backend the
/// extension asks for.
pub fn draw_dual_axis_plot(config: &DualAxisPlotConfig, options: &RenderOptions) -> Result<()> {
    let size = (options.width, options.height);
    let result = match options.format() {
        OutputFormat::Png => {
            let root_area = BitMapBackend::new(&options.output_path, size).into_drawing_area();
            render_onto(&root_area, config)
        }
        OutputFormat::Svg => {
            let root_area = SVGBackend::new(&options.output_path, size).into_drawing_area();
            render_onto(&root_area, config)
        }
    };
    result.map_err(|e| PlotterError::Render(e.to_string()))
}

fn render_onto<DB>(
    root_area: &DrawingArea<DB, Shift>,
    config: &DualAxisPlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root_area.fill(&WHITE)?;
    draw_dual_axis_chart(root_area, config)?;
    root_area.present()?;
    Ok(())
}

/// Draws the chart, both sets of series and one legend per axis onto `root_area`.
pub fn draw_dual_axis_chart<DB>(
    root_area: &DrawingArea<DB, Shift>,
    config: &DualAxisPlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(root_area)
        .caption(&config.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .right_y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(config.x_range.clone(), config.left_range.clone())?
        .set_secondary_coord(config.x_range.clone(), config.right_range.clone());

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.left_label.as_str())
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .y_label_formatter(&|y: &f64| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(config.right_label.as_str())
        .y_labels(Y_LABEL_COUNT)
        .y_label_formatter(&|y: &f64| format_axis_value(*y))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for s in &config.series {
        for segment in finite_segments(&s.data) {
            let style = s.color.stroke_width(s.stroke_width);
            match s.axis {
                AxisSide::Left => {
                    chart.draw_series(LineSeries::new(segment, style))?;
                }
                AxisSide::Right => {
                    chart.draw_secondary_series(LineSeries::new(segment, style))?;
                }
            }
        }
    }

    // plotters keeps a single legend per chart, so each axis gets its own box
    // drawn in pixel space over the plotting area.
    let plot_pixels = chart.plotting_area().get_pixel_range();
    for axis in AXIS_SIDES {
        let entries: Vec<&PlotSeries> = config.series_on(axis).collect();
        draw_legend(
            root_area,
            &plot_pixels,
            LegendPosition::for_axis(axis),
            &entries,
        )?;
    }
    Ok(())
}

/// Pixel rectangle `(left, top, right, bottom)` of a legend with `rows`
/// entries whose longest label has `longest_label` characters.
pub fn legend_box(
    plot_pixels: &(Range<i32>, Range<i32>),
    position: LegendPosition,
    rows: usize,
    longest_label: usize,
) -> (i32, i32, i32, i32) {
    let (x_pixels, y_pixels) = plot_pixels;
    let width = LEGEND_PADDING_PX * 3
        + LEGEND_LINE_LENGTH_PX
        + estimate_text_width(longest_label, FONT_SIZE_LEGEND);
    let height = LEGEND_PADDING_PX * 2 + LEGEND_ROW_HEIGHT_PX * rows as i32;
    let left = x_pixels.start + LEGEND_MARGIN_PX;
    let top = match position {
        LegendPosition::UpperLeft => y_pixels.start + LEGEND_MARGIN_PX,
        LegendPosition::LowerLeft => y_pixels.end - LEGEND_MARGIN_PX - height,
    };
    (left, top, left + width, top + height)
}

fn draw_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    plot_pixels: &(Range<i32>, Range<i32>),
    position: LegendPosition,
    entries: &[&PlotSeries],
) -> std::result::Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if entries.is_empty() {
        return Ok(());
    }
    let longest_label = entries
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);
    let (left, top, right, bottom) = legend_box(plot_pixels, position, entries.len(), longest_label);

    area.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        WHITE.mix(0.8).filled(),
    ))?;
    area.draw(&Rectangle::new([(left, top), (right, bottom)], BLACK.stroke_width(1)))?;

    let text_style = FONT_TUPLE_LEGEND
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (row, s) in entries.iter().enumerate() {
        let y = top + LEGEND_PADDING_PX + row as i32 * LEGEND_ROW_HEIGHT_PX + LEGEND_ROW_HEIGHT_PX / 2;
        let line_start = left + LEGEND_PADDING_PX;
        let line_end = line_start + LEGEND_LINE_LENGTH_PX;
        area.draw(&PathElement::new(
            vec![(line_start, y), (line_end, y)],
            s.color.stroke_width(LINE_WIDTH_LEGEND),
        ))?;
        area.draw(&Text::new(
            s.label.clone(),
            (line_end + LEGEND_PADDING_PX, y),
            text_style.clone(),
        ))?;
    }
    Ok(())
}
