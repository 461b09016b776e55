use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file base path.
pub const LOG_PATH_ENV: &str = "PERSONA_FORM_LOG";

/// Initialize tracing with file output.
///
/// Logging is disabled unless a path is given, because the form view owns
/// the terminal. Path precedence: `cli_path`, then `PERSONA_FORM_LOG`, then
/// `logging.file` from config. Filter precedence: `RUST_LOG`, then
/// `logging.filter`.
///
/// Returns the file actually written, if any.
pub fn init_tracing(config: &LoggingConfig, cli_path: Option<&Path>) -> Option<PathBuf> {
    let env_path = std::env::var_os(LOG_PATH_ENV);
    let base = resolve_log_path(cli_path, env_path.as_deref(), config)?;

    let unique_path = unique_log_path(&base);

    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(resolve_log_filter(env_filter.as_deref(), config))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    Some(unique_path)
}

/// Log file base path: `cli`, then the env value, then `logging.file`.
pub fn resolve_log_path(
    cli: Option<&Path>,
    env: Option<&OsStr>,
    config: &LoggingConfig,
) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.file.clone())
}

/// Filter directive: `RUST_LOG` when set and non-empty, else `logging.filter`.
pub fn resolve_log_filter<'a>(env: Option<&'a str>, config: &'a LoggingConfig) -> &'a str {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => &config.filter,
    }
}

/// `{base}.{timestamp}.{pid}` so concurrent instances never share a file.
fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
