use log::debug;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process, so guard with
        // catch_unwind; the test passes if no panic escapes
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }
}
