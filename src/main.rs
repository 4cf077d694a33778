//! Main entry point for the palette translator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_translator::cli::commands::{self, Commands};
use palette_translator::TranslatorConfig;

/// Palette Translator - translate color names in one batched provider call
#[derive(Parser, Debug)]
#[command(name = "palette-translator", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional .env file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            dotenv().ok();
        }
    }

    // Initialize logging
    let debug = args.verbose || matches!(args.command, Some(Commands::Server { debug: true, .. }));
    let log_level = if debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("palette_translator={},tower_http={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TranslatorConfig::load()?;

    // Execute command
    match args.command {
        Some(Commands::Server { host, port, .. }) => {
            commands::handle_server(config, host, port).await?;
        }
        Some(Commands::Translate { file, output }) => {
            commands::handle_translate(config, file, output).await?;
        }
        None => {
            commands::handle_server(config, None, None).await?;
        }
    }

    Ok(())
}
