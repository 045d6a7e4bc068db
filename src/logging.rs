// src/logging.rs
// =============================================================================
// Logger setup.
//
// Diagnostics go through the `log` macros (log::debug!, log::warn!, ...) and
// are printed by simplelog's terminal logger on STDERR. Stdout is reserved for
// the report itself, so `link-crawler URL > report.txt` only captures the
// report lines.
// =============================================================================

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

// Installs the global logger
//
// Parameters:
//   verbose: log debug details (every request) instead of only warnings
pub fn initialize(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Ignore the error if a logger was already installed
    let _ = TermLogger::init(level, build_config(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // reqwest/hyper are chatty at debug level
        .add_filter_allow_str("link_crawler")
        .build()
}

/// Installs a debug-level logger for unit tests; no-op if one already exists.
#[cfg(test)]
pub fn initialize_for_tests() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
