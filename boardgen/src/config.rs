//! Configuration for the boardgen runtime.
//!
//! Only the output destination and log filter are tunable. The board itself
//! (size, labels, class names) is fixed. Every value has a compile-time default
//! and can be overridden at runtime via a dedicated environment variable.

use std::path::PathBuf;

/// Default tracing filter. Logs go to stderr, so this never touches the markup.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Get the file the markup should be written to.
///
/// Priority:
/// 1. `--output` on the command line (passed in as `cli_path`)
/// 2. `BOARDGEN_OUTPUT_PATH` env variable if set and non-empty
/// 3. `None`, meaning stdout
pub fn get_output_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_output_path(cli_path, std::env::var("BOARDGEN_OUTPUT_PATH").ok())
}

fn resolve_output_path(cli_path: Option<PathBuf>, env_path: Option<String>) -> Option<PathBuf> {
    if cli_path.is_some() {
        return cli_path;
    }

    env_path.filter(|path| !path.is_empty()).map(PathBuf::from)
}

/// Get the tracing filter directive.
///
/// Priority:
/// 1. `BOARDGEN_LOG` env variable if set (env-filter syntax, e.g. `boardgen=debug`)
/// 2. `warn` as fallback
pub fn get_log_filter() -> String {
    if let Ok(filter) = std::env::var("BOARDGEN_LOG") {
        return filter;
    }

    DEFAULT_LOG_FILTER.to_string()
}
