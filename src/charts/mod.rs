// Static chart rendering (PNG via the plotters bitmap backend)

pub mod dashboard;
pub mod distribution;
pub mod style;

pub use dashboard::{render_dashboard, render_dashboard_standalone};
pub use distribution::{render_distribution, render_distribution_standalone};

use crate::core::error::PerfVizError;

/// Collapse plotters' backend-generic error types into our rendering error.
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> PerfVizError {
    PerfVizError::Rendering(err.to_string())
}
