//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::batch::BatchTranslator;
use crate::core::client::GoogleTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::gate::TranslationGate;
use crate::core::models::{RequestError, TranslateRequest, TranslateResponse};
use crate::core::provider::Provider;

/// Commands for the palette translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server
    Server {
        /// Bind address (default: from config, 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: from config, 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single request file without starting the server
    Translate {
        /// JSON file holding a translate request (required)
        #[arg(short, long)]
        file: PathBuf,

        /// Write the response here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle server command
pub async fn handle_server(
    mut config: TranslatorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    println!("🚀 Server starting on http://{}:{}", config.host, config.port);

    run_server(config).await?;

    Ok(())
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    file: PathBuf,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source_lang = config.source_lang.clone();
    let gate = TranslationGate::new(GoogleTranslator::new(config)?);
    let translator = BatchTranslator::new(gate).with_source_lang(source_lang);

    let response = translate_file(&translator, &file).await?;
    let json = serde_json::to_string_pretty(&response)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("✅ Translated {} colors into {}", response.colors.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Read a request file and translate it with `translator`
pub async fn translate_file<P: Provider>(
    translator: &BatchTranslator<P>,
    file: &Path,
) -> anyhow::Result<TranslateResponse> {
    info!("Reading request from {}", file.display());

    let content = std::fs::read_to_string(file)?;
    let request: TranslateRequest = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("{}: {}", RequestError::InvalidPayload, e))?;
    request.validate()?;

    Ok(translator.translate_request(&request).await)
}
