// Console statistics summary (text and JSON renditions)

use crate::analysis::stats::SummaryStatistics;
use crate::core::error::{PerfVizError, Result};

/// Render the human-readable statistics summary block.
pub fn render_text(stats: &SummaryStatistics) -> String {
    let mut out = String::new();

    out.push_str("\n\u{1F4CA} PERFORMANCE STATISTICS SUMMARY\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');

    out.push_str("\n\u{1F680} REQUESTS PER SECOND:\n");
    out.push_str(&format!("   Average: {:.2}\n", stats.rps.mean));
    out.push_str(&format!("   Maximum: {:.2}\n", stats.rps.max));
    out.push_str(&format!("   Minimum: {:.2}\n", stats.rps.min));
    out.push_str(&format!("   Std Dev: {:.2}\n", stats.rps_std));

    out.push_str("\n\u{23F1}\u{FE0F}  RESPONSE LATENCY (ms):\n");
    out.push_str(&format!("   Avg Latency - Mean: {:.2}\n", stats.avg_latency.mean));
    out.push_str(&format!("   Avg Latency - Max:  {:.2}\n", stats.avg_latency.max));
    out.push_str(&format!("   P99 Latency - Mean: {:.2}\n", stats.p99_latency.mean));
    out.push_str(&format!("   P99 Latency - Max:  {:.2}\n", stats.p99_latency.max));

    out.push_str("\n\u{1F4BB} SYSTEM RESOURCES:\n");
    out.push_str(&format!("   Memory - Average: {:.2} MB\n", stats.memory.mean));
    out.push_str(&format!("   Memory - Peak:    {:.2} MB\n", stats.memory.max));
    out.push_str(&format!("   CPU - Average:    {:.2}%\n", stats.cpu.mean));
    out.push_str(&format!("   CPU - Peak:       {:.2}%\n", stats.cpu.max));
    out.push_str(&format!("   Connections - Avg: {:.0}\n", stats.connections.mean));
    out.push_str(&format!("   Connections - Max: {:.0}\n", stats.connections.max));

    out.push_str("\n\u{1F4C8} OVERALL PERFORMANCE:\n");
    out.push_str(&format!("   Test Duration:     {:.1} minutes\n", stats.duration_minutes));
    out.push_str(&format!("   Total Requests:    ~{:.0}\n", stats.total_requests));
    out.push_str(&format!("   Success Rate:      {:.1}%\n", stats.success_rate_mean));
    out.push_str(&format!("   Stability Score:   {:.1}%\n", stats.stability_score));

    out
}

/// Print the text summary to stdout.
pub fn print_summary(stats: &SummaryStatistics) {
    println!("{}", render_text(stats));
}

/// Serialize the summary as pretty-printed JSON for automation.
pub fn render_json(stats: &SummaryStatistics) -> Result<String> {
    serde_json::to_string_pretty(stats).map_err(|e| PerfVizError::Serialization(e.to_string()))
}
