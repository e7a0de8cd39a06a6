// Multi-panel time-series dashboard image

use crate::charts::render_err;
use crate::charts::style;
use crate::core::constants::{charts, output};
use crate::core::error::{PerfVizError, Result};
use crate::data::series::SampleSeries;

use chrono::NaiveDateTime;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the four-panel performance dashboard into `output_dir`, creating
/// the directory if needed and overwriting any previous image.
///
/// Panels: rps over time, latency (average + p99), memory, and a dual-axis
/// overlay of CPU percent and connection count.
pub fn render_dashboard(series: &SampleSeries, output_dir: &Path) -> Result<PathBuf> {
    if series.is_empty() {
        return Err(PerfVizError::EmptySeries);
    }
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output::DASHBOARD_FILE);

    {
        let root = BitMapBackend::new(&path, charts::DASHBOARD_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let panels = root.split_evenly((2, 2));
        draw_rps_panel(&panels[0], series)?;
        draw_latency_panel(&panels[1], series)?;
        draw_memory_panel(&panels[2], series)?;
        draw_cpu_connections_panel(&panels[3], series)?;

        root.present().map_err(render_err)?;
    }
    debug!("Dashboard written to {}", path.display());
    Ok(path)
}

/// Standalone entry point defaulting to `./charts`, the per-function
/// default inherited from the original tool (the main flow passes
/// `./performance_charts` instead).
pub fn render_dashboard_standalone(series: &SampleSeries) -> Result<PathBuf> {
    render_dashboard(series, Path::new(output::STANDALONE_CHART_DIR))
}

fn time_bounds(series: &SampleSeries) -> (NaiveDateTime, NaiveDateTime) {
    (
        series.first_timestamp().unwrap_or_default(),
        series.last_timestamp().unwrap_or_default(),
    )
}

fn value_axis(values: &[f64]) -> std::ops::Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    style::padded_range(min, max, 0.05)
}

fn format_time(t: &NaiveDateTime) -> String {
    t.format("%H:%M:%S").to_string()
}

fn draw_rps_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    let (first, last) = time_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption("Requests Per Second (RPS)", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(
            RangedDateTime::from(style::time_range(first, last)),
            value_axis(&series.rps_values()),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&format_time)
        .y_desc("RPS")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.rps)),
            style::RPS_BLUE.stroke_width(2),
        ))
        .map_err(render_err)?;

    Ok(())
}

fn draw_latency_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    let (first, last) = time_bounds(series);
    // A shared axis must cover both the average and p99 lines
    let mut all_values = series.avg_latency_values();
    all_values.extend(series.p99_latency_values());

    let mut chart = ChartBuilder::on(area)
        .caption("Response Latency", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(
            RangedDateTime::from(style::time_range(first, last)),
            value_axis(&all_values),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&format_time)
        .y_desc("Latency (ms)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.avg_latency_ms)),
            style::LATENCY_PLUM.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Average")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style::LATENCY_PLUM.stroke_width(2))
        });

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.p99_latency_ms)),
            style::P99_ORANGE.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("P99")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style::P99_ORANGE.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_memory_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    let (first, last) = time_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption("Memory Usage", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(
            RangedDateTime::from(style::time_range(first, last)),
            value_axis(&series.memory_values()),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&format_time)
        .y_desc("Memory (MB)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.memory_mb)),
            style::MEMORY_RUST.stroke_width(2),
        ))
        .map_err(render_err)?;

    Ok(())
}

fn draw_cpu_connections_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    let (first, last) = time_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption("CPU & Connections", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .right_y_label_area_size(55)
        .build_cartesian_2d(
            RangedDateTime::from(style::time_range(first, last)),
            value_axis(&series.cpu_values()),
        )
        .map_err(render_err)?
        .set_secondary_coord(
            RangedDateTime::from(style::time_range(first, last)),
            value_axis(&series.connection_values()),
        );

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&format_time)
        .y_desc("CPU %")
        .draw()
        .map_err(render_err)?;

    chart
        .configure_secondary_axes()
        .y_desc("Connections")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            series.samples().iter().map(|s| (s.timestamp, s.cpu_percent)),
            style::CPU_STEEL.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("CPU %")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style::CPU_STEEL.stroke_width(2))
        });

    chart
        .draw_secondary_series(LineSeries::new(
            series
                .samples()
                .iter()
                .map(|s| (s.timestamp, f64::from(s.connections))),
            style::CONNECTIONS_RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Connections")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style::CONNECTIONS_RED.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}
