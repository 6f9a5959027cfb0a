use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins when set; otherwise the configured level applies to this
/// crate and to request tracing, while the database driver stays at `warn`.
pub(crate) fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    let level = level.trim();
    // a full directive list is passed through untouched
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    format!("{level},feed_server={level},tower_http={level},sqlx=warn")
}
