// Report composition and console summaries

pub mod report;
pub mod summary;

pub use report::HtmlReport;
pub use summary::{print_summary, render_json, render_text};
