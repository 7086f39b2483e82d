use dug_domain::config::{CliOverrides, ResolverConfig};
use tracing_subscriber::EnvFilter;

pub fn load_config(
    path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<ResolverConfig> {
    let config = ResolverConfig::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so answer output on stdout stays clean.
pub fn init_logging(config: &ResolverConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
