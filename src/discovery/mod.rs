// Input file discovery

pub mod finder;

pub use finder::find_latest_metrics_csv;
