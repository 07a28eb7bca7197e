pub mod commands;
pub mod core;
pub mod ingest;
pub mod providers;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "IDEAVAULT_LOG";

fn log_level_from_env() -> &'static str {
    match std::env::var(LOG_ENV)
        .unwrap_or_else(|_| "info".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

fn http_debug_enabled() -> bool {
    matches!(
        std::env::var("IDEAVAULT_HTTP_DEBUG")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing() {
    let level = log_level_from_env();
    let directives = if http_debug_enabled() {
        level.to_string()
    } else {
        format!("{level},hyper=warn,reqwest=warn")
    };
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
