// In-memory representation of loaded performance samples

use chrono::NaiveDateTime;

/// One timestamped row of monitoring metrics. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub rps: f64,
    pub avg_latency_ms: f64,
    pub p99_latency_ms: f64,
    pub memory_mb: f64,
    pub cpu_percent: f64,
    pub connections: u32,
    pub success_rate: f64,
}

/// Ordered sequence of samples, in the order they were read from input.
///
/// No re-sorting is performed; the producer writes rows in timestamp order.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.samples.first().map(|s| s.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.samples.last().map(|s| s.timestamp)
    }

    pub fn rps_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.rps).collect()
    }

    pub fn avg_latency_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.avg_latency_ms).collect()
    }

    pub fn p99_latency_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.p99_latency_ms).collect()
    }

    pub fn memory_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.memory_mb).collect()
    }

    pub fn cpu_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.cpu_percent).collect()
    }

    pub fn connection_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| f64::from(s.connections)).collect()
    }

    pub fn success_rate_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.success_rate).collect()
    }

    /// The sample with the highest rps. Ties resolve to the earliest
    /// occurrence, matching how the report picks "peak performance".
    pub fn peak_rps_sample(&self) -> Option<&Sample> {
        let mut best: Option<&Sample> = None;
        for sample in &self.samples {
            match best {
                Some(current) if sample.rps <= current.rps => {}
                _ => best = Some(sample),
            }
        }
        best
    }
}
