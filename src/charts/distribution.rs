// Distribution and correlation analysis image

use crate::analysis::stats;
use crate::charts::render_err;
use crate::charts::style;
use crate::core::constants::{charts, output};
use crate::core::error::{PerfVizError, Result};
use crate::data::series::SampleSeries;

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::path::{Path, PathBuf};

/// Render the distribution/correlation analysis into `output_dir`.
///
/// Panels: rps histogram with median, average-latency histogram with
/// median, a box plot comparing rps/latency/memory, and a correlation
/// heatmap across the five numeric metrics.
pub fn render_distribution(series: &SampleSeries, output_dir: &Path) -> Result<PathBuf> {
    if series.is_empty() {
        return Err(PerfVizError::EmptySeries);
    }
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output::ANALYSIS_FILE);

    {
        let root = BitMapBackend::new(&path, charts::ANALYSIS_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let panels = root.split_evenly((2, 2));
        draw_histogram_panel(
            &panels[0],
            "RPS Distribution",
            "RPS",
            &series.rps_values(),
            style::RPS_BLUE,
        )?;
        draw_histogram_panel(
            &panels[1],
            "Average Latency Distribution",
            "Latency (ms)",
            &series.avg_latency_values(),
            style::LATENCY_PLUM,
        )?;
        draw_boxplot_panel(&panels[2], series)?;
        draw_heatmap_panel(&panels[3], series)?;

        root.present().map_err(render_err)?;
    }
    debug!("Distribution analysis written to {}", path.display());
    Ok(path)
}

/// Standalone entry point defaulting to `./charts` (see
/// `render_dashboard_standalone` for why this differs from the main flow).
pub fn render_distribution_standalone(series: &SampleSeries) -> Result<PathBuf> {
    render_distribution(series, Path::new(output::STANDALONE_CHART_DIR))
}

/// One histogram bucket over [lo, hi)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: u32,
}

/// Equal-width binning over [min, max]. A constant column collapses into a
/// single unit-width bin so the axis stays drawable.
pub(crate) fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<Bin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return vec![Bin {
            lo: min - 0.5,
            hi: min + 0.5,
            count: values.len() as u32,
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0u32; bin_count];
    for &value in values {
        // The max value lands in the last bin, matching closed-right binning
        let index = (((value - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    values: &[f64],
    color: RGBColor,
) -> Result<()> {
    let bins = histogram_bins(values, charts::HISTOGRAM_BINS);
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(1);
    let x_min = bins.first().map(|b| b.lo).unwrap_or(0.0);
    let x_max = bins.last().map(|b| b.hi).unwrap_or(1.0);
    let median = stats::median(values);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_min..x_max, 0u32..(max_count + 1))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            bins.iter()
                .map(|b| Rectangle::new([(b.lo, 0), (b.hi, b.count)], color.mix(0.7).filled())),
        )
        .map_err(render_err)?;
    chart
        .draw_series(
            bins.iter()
                .map(|b| Rectangle::new([(b.lo, 0), (b.hi, b.count)], BLACK.stroke_width(1))),
        )
        .map_err(render_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            vec![(median, 0), (median, max_count + 1)],
            8,
            5,
            style::MEDIAN_RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(format!("Median: {median:.1}"))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], style::MEDIAN_RED.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_boxplot_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    const LABELS: [&str; 3] = ["RPS", "Latency(ms)", "Memory(MB)"];
    let datasets: [(&str, RGBColor, Vec<f64>); 3] = [
        ("RPS", style::RPS_BLUE, series.rps_values()),
        ("Latency(ms)", style::LATENCY_PLUM, series.avg_latency_values()),
        ("Memory(MB)", style::MEMORY_RUST, series.memory_values()),
    ];

    let all: Vec<f64> = datasets.iter().flat_map(|(_, _, v)| v.iter().copied()).collect();
    let min = all.iter().copied().fold(f64::INFINITY, f64::min);
    let max = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Extra headroom: quartile whiskers can reach past the raw data range
    let y_range = style::padded_range(min, max, 0.25);

    let mut chart = ChartBuilder::on(area)
        .caption("Performance Metrics Box Plot", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(LABELS[..].into_segmented(), y_range.start as f32..y_range.end as f32)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Values")
        .draw()
        .map_err(render_err)?;

    for (label, color, values) in &datasets {
        let quartiles = Quartiles::new(values);
        chart
            .draw_series(std::iter::once(
                Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
                    .width(50)
                    .style(*color),
            ))
            .map_err(render_err)?;
    }

    Ok(())
}

fn draw_heatmap_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &SampleSeries,
) -> Result<()> {
    // Short names keep axis labels readable in a quarter panel
    const SHORT_LABELS: [&str; 5] = ["rps", "latency", "memory", "cpu", "conns"];
    let matrix = stats::correlation_matrix(series);
    let n = SHORT_LABELS.len() as i32;

    // Cells are two units wide so their centers fall on integer ticks,
    // which carry the metric names
    let cell_label = |v: &i32| {
        if v % 2 == 1 {
            SHORT_LABELS[(v / 2) as usize].to_string()
        } else {
            String::new()
        }
    };

    let mut chart = ChartBuilder::on(area)
        .caption("Metrics Correlation", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(0..(2 * n), (2 * n)..0)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels((2 * n + 1) as usize)
        .y_labels((2 * n + 1) as usize)
        .x_label_formatter(&cell_label)
        .y_label_formatter(&cell_label)
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series((0..n).flat_map(|y| (0..n).map(move |x| (x, y))).map(|(x, y)| {
            let r = matrix[y as usize][x as usize];
            Rectangle::new(
                [(2 * x, 2 * y), (2 * x + 2, 2 * y + 2)],
                style::correlation_color(r).filled(),
            )
        }))
        .map_err(render_err)?;

    let value_style = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series((0..n).flat_map(|y| (0..n).map(move |x| (x, y))).map(|(x, y)| {
            let r = matrix[y as usize][x as usize];
            let label = if r.is_nan() {
                "n/a".to_string()
            } else {
                format!("{r:.2}")
            };
            Text::new(label, (2 * x + 1, 2 * y + 1), value_style.clone())
        }))
        .map_err(render_err)?;

    Ok(())
}
