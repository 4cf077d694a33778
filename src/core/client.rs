//! Google Translate client with retry logic

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::provider::Provider;

/// Client for the public `translate_a/single` endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl GoogleTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Send one request, retrying transient failures with exponential backoff
    async fn translate_with_retry(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            if attempt > 0 {
                let delay = backoff_delay_ms(self.config.retry_delay_ms, attempt);
                debug!("Retry attempt {} after {}ms", attempt, delay);
                sleep(Duration::from_millis(delay)).await;
            }

            match self.send_request(text, from, to).await {
                Ok(translation) => {
                    if attempt > 0 {
                        info!("Successfully translated after {} retries", attempt);
                    }
                    return Ok(translation);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    warn!("Provider request failed: {}", e);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Send actual HTTP request
    async fn send_request(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::TimeoutError
                } else {
                    TranslationError::NetworkError {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value =
                response
                    .json()
                    .await
                    .map_err(|e| TranslationError::InvalidResponseError {
                        message: e.to_string(),
                    })?;

            parse_translation(&json)
        } else {
            let status_code = status.as_u16();

            if status_code == 429 {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                return Err(TranslationError::RateLimitError { retry_after });
            }

            let error_text = response.text().await.unwrap_or_default();
            Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl Provider for GoogleTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        self.translate_with_retry(text, from, to).await
    }
}

/// Delay before retry `attempt` (1-based): `base * 2^(attempt-1)`, saturating
pub fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    2_u64
        .saturating_pow(attempt.saturating_sub(1))
        .saturating_mul(base_ms)
}

/// Concatenate the translated segments found at `[0][i][0]`
pub fn parse_translation(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: "missing segment array".to_string(),
        })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(TranslationError::InvalidResponseError {
            message: "No translation in response".to_string(),
        });
    }

    Ok(translation)
}
