// Data loading and the in-memory sample model

pub mod loader;
pub mod series;

pub use loader::load_metrics;
pub use series::{Sample, SampleSeries};
