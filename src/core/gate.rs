//! Process-wide serialization of provider calls

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::errors::Result;
use crate::core::provider::Provider;

/// Wraps a provider so that at most one call is in flight at a time.
///
/// Clones share the same lock, so a single gate created at startup covers
/// every request the server handles.
#[derive(Debug)]
pub struct TranslationGate<P> {
    provider: Arc<P>,
    lock: Arc<Mutex<()>>,
}

impl<P> Clone for TranslationGate<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            lock: Arc::clone(&self.lock),
        }
    }
}

impl<P: Provider> TranslationGate<P> {
    /// Create a new gate around `provider`
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Translate while holding the gate; released as soon as the provider returns
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let _guard = self.lock.lock().await;
        debug!("Gate acquired, translating {} bytes to {}", text.len(), to);
        self.provider.translate(text, from, to).await
    }

    /// Underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
