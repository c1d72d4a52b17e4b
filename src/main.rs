//! Shellchat CLI entry point
//!
//! Startup order: logging, config (prompting for the API key on first
//! run), assistant bootstrap (created once, persisted to config), then
//! the interactive session. Setup failures exit non-zero; everything
//! after setup is per-turn and recoverable.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use shellchat::api::{AssistantApi, AssistantProfile, OpenAIAssistants};
use shellchat::cli::Cli;
use shellchat::config::{Config, prompt_for_config};
use shellchat::repl;

fn setup_logging(verbose: bool) -> Result<()> {
    // Log to a file so stdout stays clean for the chat itself
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shellchat")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("shellchat.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    // First run (or an unreadable/empty config) prompts for the API key
    let mut config = match Config::load(cli.config.as_ref()) {
        Ok(config) if !config.api_key.is_empty() => config,
        _ => prompt_for_config(&config_path).context("Failed to obtain API key")?,
    };

    let api: Arc<dyn AssistantApi> =
        Arc::new(OpenAIAssistants::from_config(&config).map_err(|e| eyre::eyre!("Failed to create API client: {}", e))?);

    // The assistant persona is minted once and reused across sessions
    let assistant_id = match &config.assistant_id {
        Some(id) => id.clone(),
        None => {
            let profile = AssistantProfile::from_config(&config);
            let id = api
                .create_assistant(&profile)
                .await
                .map_err(|e| eyre::eyre!("Failed to create assistant: {}", e))?;
            info!(assistant_id = %id, "Created assistant");

            config.assistant_id = Some(id.clone());
            config.store(&config_path).context("Failed to persist assistant id")?;
            id
        }
    };

    repl::run(api, assistant_id).await
}
