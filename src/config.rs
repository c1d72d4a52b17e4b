//! Configuration load/store and first-run setup
//!
//! One JSON file holds the API key plus the assistant id once it has
//! been minted. Everything else has a sensible default and only shows
//! up in the file if the user writes it there.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credential, presented as a bearer token on every call
    pub api_key: String,

    /// Server-assigned assistant id; minted on first run, then reused
    pub assistant_id: Option<String>,

    /// API base URL
    pub base_url: String,

    /// Model for the assistant persona created on first run
    pub model: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            assistant_id: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4-1106-preview".to_string(),
            timeout_ms: 120_000,
        }
    }
}

impl Config {
    /// Default config file location: ~/.config/shellchat/config.json
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shellchat")
            .join("config.json")
    }

    /// Load configuration from the explicit path or the default location
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let path = config_path.cloned().unwrap_or_else(Self::default_path);
        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse config at {}", path.display()))?;

        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Write configuration to disk, creating parent directories as needed
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context(format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Stored config at: {}", path.display());
        Ok(())
    }
}

/// First-run setup: ask for the API key on stdin and persist the config
///
/// Failures here are fatal - without a credential there is nothing the
/// rest of the program can do.
pub fn prompt_for_config(path: &Path) -> Result<Config> {
    let stdin = io::stdin();
    let mut line = String::new();

    print!("Enter your OpenAI API Key: ");
    io::stdout().flush().context("Failed to flush stdout")?;
    stdin.lock().read_line(&mut line).context("Failed to read API key")?;

    let config = Config {
        api_key: line.trim().to_string(),
        ..Config::default()
    };

    config.store(path)?;
    Ok(config)
}
