// Core module containing shared functionality

pub mod constants;
pub mod error;

// Re-export commonly used items
pub use error::{PerfVizError, Result};
