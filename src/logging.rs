use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CGI_ECHO_LOG";

/// Picks the filter directive: `$CGI_ECHO_LOG` when set and non-empty, the
/// configured level otherwise.
pub fn filter_directive<'a>(env_override: Option<&'a str>, configured: &'a str) -> &'a str {
    env_override
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(configured)
}

/// Installs a stderr-only subscriber. Standard output carries the HTTP
/// response and must never receive log lines.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
