// Summary statistics computed once per run from a loaded sample series

use crate::core::constants::sampling;
use crate::core::error::{PerfVizError, Result};
use crate::data::series::SampleSeries;

use serde::Serialize;

/// Mean/min/max for one numeric metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricSummary {
    /// Summarize a non-empty slice of values.
    fn of(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Keep the mean inside [min, max] even when summation rounding
        // drifts by an ulp (e.g. three samples of 0.1).
        let mean = (values.iter().sum::<f64>() / values.len() as f64).clamp(min, max);
        Self { mean, min, max }
    }
}

/// Derived, read-only aggregate over a `SampleSeries`.
///
/// Recomputed fresh on each invocation; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    pub sample_count: usize,
    pub rps: MetricSummary,
    /// Sample standard deviation of rps (ddof = 1); NaN for a single sample
    pub rps_std: f64,
    pub rps_median: f64,
    pub avg_latency: MetricSummary,
    pub avg_latency_median: f64,
    pub p99_latency: MetricSummary,
    pub memory: MetricSummary,
    pub cpu: MetricSummary,
    pub connections: MetricSummary,
    pub success_rate_mean: f64,
    /// sample_count x 5s / 60, from the fixed sampling-interval assumption
    pub duration_minutes: f64,
    /// sum(rps) x 5s, an extrapolation rather than an exact count
    pub total_requests: f64,
    /// 100 - coefficient of variation of rps, in percent. Deliberately
    /// unclamped: highly variable series can score negative.
    pub stability_score: f64,
}

impl SummaryStatistics {
    /// Compute summary statistics for a series.
    ///
    /// An empty series is an explicit error so NaN-filled output never
    /// silently propagates into charts or the report.
    pub fn compute(series: &SampleSeries) -> Result<Self> {
        if series.is_empty() {
            return Err(PerfVizError::EmptySeries);
        }

        let rps_values = series.rps_values();
        let avg_latency_values = series.avg_latency_values();

        let rps = MetricSummary::of(&rps_values);
        let rps_std = sample_std_dev(&rps_values);
        let sample_count = series.len();

        let total_requests = rps_values.iter().sum::<f64>() * sampling::INTERVAL_SECONDS;
        let duration_minutes = sample_count as f64 * sampling::INTERVAL_SECONDS / 60.0;
        let stability_score = 100.0 - rps_std / rps.mean * 100.0;

        Ok(Self {
            sample_count,
            rps,
            rps_std,
            rps_median: median(&rps_values),
            avg_latency: MetricSummary::of(&avg_latency_values),
            avg_latency_median: median(&avg_latency_values),
            p99_latency: MetricSummary::of(&series.p99_latency_values()),
            memory: MetricSummary::of(&series.memory_values()),
            cpu: MetricSummary::of(&series.cpu_values()),
            connections: MetricSummary::of(&series.connection_values()),
            success_rate_mean: MetricSummary::of(&series.success_rate_values()).mean,
            duration_minutes,
            total_requests,
            stability_score,
        })
    }
}

/// Sample standard deviation (ddof = 1). NaN for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Median of a non-empty slice. NaN when empty.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Metric names covered by the correlation matrix, in matrix order
pub const CORRELATION_METRICS: [&str; 5] =
    ["rps", "avg_latency_ms", "memory_mb", "cpu_percent", "connections"];

/// Pearson correlation matrix across the five numeric metrics.
///
/// Cells involving a zero-variance column come out NaN, mirroring how a
/// dataframe `.corr()` behaves; the heatmap renders those neutral.
pub fn correlation_matrix(series: &SampleSeries) -> [[f64; 5]; 5] {
    let columns = [
        series.rps_values(),
        series.avg_latency_values(),
        series.memory_values(),
        series.cpu_values(),
        series.connection_values(),
    ];

    let mut matrix = [[f64::NAN; 5]; 5];
    for (i, a) in columns.iter().enumerate() {
        for (j, b) in columns.iter().enumerate() {
            matrix[i][j] = pearson(a, b);
        }
    }
    matrix
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    if a.is_empty() || a.len() != b.len() {
        return f64::NAN;
    }
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    covariance / (var_a.sqrt() * var_b.sqrt())
}
