use rootwalk_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Emitted once logging is up, since loading happens before the subscriber exists.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    debug!(
        config_file = config_path.unwrap_or("default"),
        root_servers = config.resolver.root_servers.len(),
        port = config.resolver.port,
        query_timeout_ms = config.resolver.query_timeout,
        max_depth = config.resolver.max_depth,
        "Configuration loaded"
    );
}
