use std::{env, path::PathBuf, sync::Once};

use ventureflow_config::Config;

static TRACING_INIT: Once = Once::new();

/// Overrides the base directory holding config and wizard state.
pub const HOME_ENV: &str = "VENTUREFLOW_HOME";
/// Overrides `api_base_url` from the config file.
pub const API_URL_ENV: &str = "VENTUREFLOW_API_URL";

const DEFAULT_DIRECTIVE: &str = "ventureflow=info";

/// Initializes the global tracing subscriber. Logs go to stderr so command
/// output on stdout stays machine readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Base directory from `VENTUREFLOW_HOME`, else the platform default.
pub fn resolve_base_dir() -> PathBuf {
    env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_base_dir)
}

/// Backend URL from `VENTUREFLOW_API_URL`, if set and non-empty.
pub fn api_url_override() -> Option<String> {
    env::var(API_URL_ENV)
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
}
