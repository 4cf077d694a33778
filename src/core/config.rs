//! Configuration management

use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Prefix for environment overrides, e.g. `PALETTE_PORT=9000`
pub const ENV_PREFIX: &str = "PALETTE";

/// Default provider endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Configuration for the translation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Provider endpoint URL
    pub api_endpoint: String,
    /// Source language sent to the provider
    pub source_lang: String,
    /// Extra attempts after a retryable failure
    pub max_retries: u32,
    /// Base backoff delay
    pub retry_delay_ms: u64,
    /// Per-request provider timeout
    pub timeout_ms: u64,
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            source_lang: "auto".to_string(),
            max_retries: 3,
            retry_delay_ms: 500,
            timeout_ms: 10000,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl TranslatorConfig {
    /// Load defaults overlaid with `PALETTE_*` environment variables
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_environment(Environment::with_prefix(ENV_PREFIX))?;
        info!(
            "Loaded configuration: endpoint={}, listen={}:{}",
            config.api_endpoint, config.host, config.port
        );
        Ok(config)
    }

    /// Build from an explicit environment source
    pub fn from_environment(env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("api_endpoint", defaults.api_endpoint)?
            .set_default("source_lang", defaults.source_lang)?
            .set_default("max_retries", i64::from(defaults.max_retries))?
            .set_default("retry_delay_ms", defaults.retry_delay_ms as i64)?
            .set_default("timeout_ms", defaults.timeout_ms as i64)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .add_source(env.try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.source_lang.is_empty() {
            return Err(anyhow::anyhow!("source_lang must not be empty"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("port must be greater than 0"));
        }

        Ok(())
    }
}
