use {crate::config::ReproConfig, env_logger::Env};

/// Installs the global logger. `RUST_LOG` wins over the configured filter.
pub fn init(config: &ReproConfig) -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str()))
        .format_timestamp(None)
        .try_init()?;
    log::debug!("Effective configuration:\n{}", config.to_toml()?);
    Ok(())
}
