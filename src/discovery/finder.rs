// Auto-detection of the newest metrics CSV in a directory

use crate::core::constants::input;
use crate::core::error::Result;

use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Find the newest file matching `metrics_*.csv` in `dir`, by modification
/// time. Returns `None` when nothing matches; the caller turns that into a
/// usage error.
pub fn find_latest_metrics_csv(dir: &Path) -> Result<Option<PathBuf>> {
    // The pattern is a compile-time constant; a failure here is a bug
    let pattern = Regex::new(input::METRICS_FILE_PATTERN)
        .map_err(|e| crate::core::error::PerfVizError::Environment(e.to_string()))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !pattern.is_match(name) {
            continue;
        }

        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified()?;
        match &newest {
            Some((best, _)) if *best >= modified => {}
            _ => newest = Some((modified, entry.path())),
        }
    }

    if let Some((_, path)) = &newest {
        debug!("Auto-detected metrics file: {}", path.display());
    }
    Ok(newest.map(|(_, path)| path))
}
