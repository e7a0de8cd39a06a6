// Startup checks for the rendering environment
//
// Chart text rendering resolves fonts at runtime, so a host without any
// installed fonts fails deep inside chart generation with an opaque
// backend error. Checking up front keeps the failure early and actionable,
// the same way the original tool verified its libraries before doing work.

use crate::core::error::{PerfVizError, Result};

use plotters::style::{FontDesc, IntoFont};

/// Verify the bitmap font subsystem can load and measure a sans-serif
/// face. Called once before any processing.
pub fn check_rendering_support() -> Result<()> {
    let font: FontDesc = ("sans-serif", 16).into_font();
    font.box_size("perfviz").map_err(|e| {
        PerfVizError::Environment(format!(
            "cannot load a sans-serif font for chart rendering ({e:?}); \
             install a font package (e.g. fontconfig + DejaVu) and retry"
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rendering_support_reports_cleanly() {
        // On hosts with fonts this succeeds; on bare hosts it must fail
        // with the Environment variant rather than panicking
        match check_rendering_support() {
            Ok(()) => {}
            Err(PerfVizError::Environment(msg)) => {
                assert!(msg.contains("font"));
            }
            Err(other) => panic!("Unexpected error variant: {other:?}"),
        }
    }
}
