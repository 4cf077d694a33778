//! Palette Translator - batched color-name translation service
//!
//! Translates a list of named colors plus a display string into a target
//! language through an external provider, packing all names into a single
//! provider call and keeping every color code untouched.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use core::{
    batch::BatchTranslator,
    client::GoogleTranslator,
    config::TranslatorConfig,
    errors::TranslationError,
    gate::TranslationGate,
    models::{Color, RequestError, TranslateRequest, TranslateResponse},
    provider::Provider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
