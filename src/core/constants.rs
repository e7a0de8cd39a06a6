//! Application-wide constants to avoid magic values throughout the codebase.

/// Sampling cadence of the metrics producer
pub mod sampling {
    /// Assumed fixed spacing between consecutive samples, in seconds.
    ///
    /// Matches the producer's cadence. Deliberately NOT inferred from actual
    /// timestamp deltas; duration and total-request figures are
    /// extrapolations from this constant.
    pub const INTERVAL_SECONDS: f64 = 5.0;
}

/// Input file constants
pub mod input {
    /// Filename pattern used to auto-detect the newest metrics CSV
    pub const METRICS_FILE_PATTERN: &str = r"^metrics_.*\.csv$";

    /// Columns the CSV header must contain
    pub const REQUIRED_COLUMNS: [&str; 8] = [
        "timestamp",
        "rps",
        "avg_latency_ms",
        "p99_latency_ms",
        "memory_mb",
        "cpu_percent",
        "connections",
        "success_rate",
    ];
}

/// Output directory and file name constants
pub mod output {
    /// Output directory for full-report runs
    pub const REPORT_DIR: &str = "./performance_charts";

    /// Default output directory when chart functions are called standalone.
    ///
    /// Differs from REPORT_DIR on purpose: the original tool used "./charts"
    /// as the per-function default and "./performance_charts" in the main
    /// flow. Retained as-is since downstream tooling may rely on either.
    pub const STANDALONE_CHART_DIR: &str = "./charts";

    /// Multi-panel time-series dashboard image
    pub const DASHBOARD_FILE: &str = "performance_dashboard.png";

    /// Distribution and correlation analysis image
    pub const ANALYSIS_FILE: &str = "performance_analysis.png";

    /// HTML summary report
    pub const REPORT_FILE: &str = "performance_report.html";
}

/// Console summary format constants
pub mod summary_formats {
    /// Human-readable text summary
    pub const TEXT: &str = "text";
    /// Structured JSON summary for automation
    pub const JSON: &str = "json";

    /// Default summary format
    pub const DEFAULT: &str = TEXT;

    /// All valid summary formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Chart geometry constants
pub mod charts {
    /// Dashboard canvas size in pixels (width, height)
    pub const DASHBOARD_SIZE: (u32, u32) = (1600, 900);
    /// Distribution/correlation canvas size in pixels (width, height)
    pub const ANALYSIS_SIZE: (u32, u32) = (1600, 1000);
    /// Number of histogram bins
    pub const HISTOGRAM_BINS: usize = 20;
}
