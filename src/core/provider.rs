//! Translation provider abstraction

use async_trait::async_trait;

use crate::core::errors::Result;

/// Source language value that asks the provider to detect the language
pub const AUTO_DETECT: &str = "auto";

/// Something that turns `text` in `from` into `to`.
///
/// Implementations are not assumed to tolerate concurrent calls; wrap them
/// in a [`TranslationGate`](crate::core::gate::TranslationGate).
#[async_trait]
pub trait Provider: Send + Sync {
    /// Translate a single piece of text
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;
}
