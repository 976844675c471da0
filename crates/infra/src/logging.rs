use crate::config::AppConfig;
use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` overrides the configured level; an unparsable directive
/// falls back to plain `info`.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_target(false);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.compact().init();
    }

    Ok(())
}
