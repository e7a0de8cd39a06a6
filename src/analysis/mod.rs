// Statistics and aggregation over loaded sample series

pub mod stats;

pub use stats::{
    CORRELATION_METRICS, MetricSummary, SummaryStatistics, correlation_matrix, median,
    sample_std_dev,
};
