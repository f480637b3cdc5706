use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub pendencies_file: Option<PathBuf>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            pendencies_file: None,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            port: match var("PORT") {
                Some(port) => port
                    .trim()
                    .parse()
                    .ok()
                    .filter(|p| *p > 0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("PORT must be a valid number between 1-65535")
                    })?,
                None => defaults.port,
            },
            pendencies_file: var("PENDENCIES_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            rate_limit_per_second: match var("RATE_LIMIT_PER_SECOND") {
                Some(value) => value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a positive integer")
                    })?,
                None => defaults.rate_limit_per_second,
            },
            rate_limit_burst: match var("RATE_LIMIT_BURST") {
                Some(value) => value
                    .trim()
                    .parse()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| anyhow::anyhow!("RATE_LIMIT_BURST must be a positive integer"))?,
                None => defaults.rate_limit_burst,
            },
        };

        tracing::debug!("Server Port: {}", config.port);
        if let Some(ref path) = config.pendencies_file {
            tracing::info!("Pendencies file configured: {}", path.display());
        }
        tracing::debug!(
            "Rate limit: {}/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );

        Ok(config)
    }
}
