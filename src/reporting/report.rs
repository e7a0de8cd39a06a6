// HTML summary report embedding the charts and computed statistics

use crate::analysis::stats::SummaryStatistics;
use crate::core::constants::output;
use crate::core::error::Result;
use crate::data::series::SampleSeries;

use chrono::Local;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// HTML report generator for a completed analysis run
pub struct HtmlReport;

impl HtmlReport {
    /// Compose the report and write it to `output_dir`, overwriting any
    /// previous report. Pure templating over the statistics plus a few
    /// extrema lookups on the series; no external calls.
    pub fn write(
        series: &SampleSeries,
        stats: &SummaryStatistics,
        source_name: &str,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(output::REPORT_FILE);

        let content = Self::render(series, stats, source_name);
        fs::write(&path, content)?;
        debug!("HTML report written to {}", path.display());
        Ok(path)
    }

    /// Standalone default matching the chart renderers' `./charts` quirk.
    pub fn write_standalone(
        series: &SampleSeries,
        stats: &SummaryStatistics,
        source_name: &str,
    ) -> Result<PathBuf> {
        Self::write(series, stats, source_name, Path::new(output::STANDALONE_CHART_DIR))
    }

    fn render(series: &SampleSeries, stats: &SummaryStatistics, source_name: &str) -> String {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S");
        let body = Self::render_body(series, stats, source_name, &generated_at.to_string());

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Performance Test Report</title>
    <style>{css}</style>
</head>
<body>
    {body}
</body>
</html>"#,
            css = Self::css(),
            body = body,
        )
    }

    fn render_body(
        series: &SampleSeries,
        stats: &SummaryStatistics,
        source_name: &str,
        generated_at: &str,
    ) -> String {
        let peak = series.peak_rps_sample();
        let peak_rps = peak.map(|s| s.rps).unwrap_or(f64::NAN);
        let peak_rps_at = peak
            .map(|s| s.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            r#"<div class="container">
        <h1>&#128640; Performance Test Report</h1>

        <div class="metric">
            <strong>&#128197; Test Date:</strong> {generated_at}<br>
            <strong>&#128193; Data Source:</strong> {source}<br>
            <strong>&#9201;&#65039; Test Duration:</strong> {duration:.1} minutes<br>
            <strong>&#128290; Data Points:</strong> {count}
        </div>

        <h2>&#128202; Key Performance Metrics</h2>
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-value">{rps_mean:.0}</div>
                <div class="stat-label">Average RPS</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{latency_mean:.1}ms</div>
                <div class="stat-label">Average Latency</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{memory_mean:.0}MB</div>
                <div class="stat-label">Average Memory</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{cpu_mean:.1}%</div>
                <div class="stat-label">Average CPU</div>
            </div>
        </div>

        <h2>&#128200; Performance Dashboard</h2>
        <img src="{dashboard_img}" alt="Performance Dashboard">

        <h2>&#128202; Statistical Analysis</h2>
        <img src="{analysis_img}" alt="Performance Analysis">

        <h2>&#128161; Performance Insights</h2>
        <div class="metric">
            <strong>&#127919; Peak Performance:</strong> {peak_rps:.0} RPS at {peak_rps_at}<br>
            <strong>&#9889; Fastest Response:</strong> {latency_min:.1}ms<br>
            <strong>&#127956;&#65039; Memory Peak:</strong> {memory_max:.0}MB<br>
            <strong>&#128260; Max Connections:</strong> {connections_max:.0}
        </div>

        <div class="footer">
            Generated by perfviz Performance Monitor | {generated_at}
        </div>
    </div>"#,
            generated_at = generated_at,
            source = escape_html(source_name),
            duration = stats.duration_minutes,
            count = stats.sample_count,
            rps_mean = stats.rps.mean,
            latency_mean = stats.avg_latency.mean,
            memory_mean = stats.memory.mean,
            cpu_mean = stats.cpu.mean,
            dashboard_img = output::DASHBOARD_FILE,
            analysis_img = output::ANALYSIS_FILE,
            peak_rps = peak_rps,
            peak_rps_at = peak_rps_at,
            latency_min = stats.avg_latency.min,
            memory_max = stats.memory.max,
            connections_max = stats.connections.max,
        )
    }

    fn css() -> &'static str {
        r#"
        body { font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #2E86AB; border-bottom: 3px solid #2E86AB; padding-bottom: 10px; }
        h2 { color: #A23B72; margin-top: 30px; }
        .metric { background: #f8f9fa; padding: 15px; margin: 10px 0; border-radius: 5px; border-left: 4px solid #2E86AB; }
        .stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; margin: 20px 0; }
        .stat-card { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 8px; text-align: center; }
        .stat-value { font-size: 2em; font-weight: bold; }
        .stat-label { font-size: 0.9em; opacity: 0.9; }
        img { max-width: 100%; height: auto; margin: 20px 0; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); }
        .footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; text-align: center; }
        "#
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
