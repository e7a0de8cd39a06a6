// CSV loading and timestamp parsing

use crate::core::constants::input;
use crate::core::error::{PerfVizError, Result};
use crate::data::series::{Sample, SampleSeries};

use chrono::{DateTime, NaiveDateTime};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Raw CSV row before timestamp parsing. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawSample {
    timestamp: String,
    rps: f64,
    avg_latency_ms: f64,
    p99_latency_ms: f64,
    memory_mb: f64,
    cpu_percent: f64,
    connections: u32,
    success_rate: f64,
}

/// Load a metrics CSV into a `SampleSeries`.
///
/// The header is validated up front so a missing required column fails here,
/// never as a column-not-found fault later in rendering. Rows keep their
/// input order; no re-sorting is performed.
pub fn load_metrics(path: &Path) -> Result<SampleSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = input::REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PerfVizError::MissingColumns(missing));
    }

    let mut samples = Vec::new();
    for (index, record) in reader.deserialize::<RawSample>().enumerate() {
        // Row numbers are 1-based and include the header line
        let row = index + 2;
        let raw = record.map_err(|e| PerfVizError::MalformedRow {
            row,
            cause: e.to_string(),
        })?;

        let timestamp = parse_timestamp(&raw.timestamp)?;
        samples.push(Sample {
            timestamp,
            rps: raw.rps,
            avg_latency_ms: raw.avg_latency_ms,
            p99_latency_ms: raw.p99_latency_ms,
            memory_mb: raw.memory_mb,
            cpu_percent: raw.cpu_percent,
            connections: raw.connections,
            success_rate: raw.success_rate,
        });
    }

    debug!("Loaded {} sample(s) from {}", samples.len(), path.display());
    Ok(SampleSeries::new(samples))
}

/// Parse a timestamp in any of the formats the monitoring producer emits:
/// `YYYY-MM-DD HH:MM:SS[.fff]`, the ISO-8601 `T` variant, or RFC 3339
/// (the offset is dropped).
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    Err(PerfVizError::InvalidTimestamp(value.to_string()))
}
