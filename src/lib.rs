//! perfviz - visualize load-test performance metrics from CSV
//!
//! Reads a CSV of periodic monitoring samples (rps, latency percentiles,
//! memory, CPU, connections, success rate) and produces a multi-panel
//! dashboard image, a distribution/correlation analysis image, an HTML
//! summary report, and a console statistics summary.

pub mod analysis;
pub mod charts;
pub mod cli;
pub mod core;
pub mod data;
pub mod discovery;
pub mod logging;
pub mod preflight;
pub mod reporting;

pub use crate::analysis::SummaryStatistics;
pub use crate::core::{PerfVizError, Result};
pub use crate::data::{Sample, SampleSeries, load_metrics};
