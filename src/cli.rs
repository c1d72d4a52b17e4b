//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Shellchat - terminal chat with a persistent OpenAI assistant
#[derive(Parser)]
#[command(
    name = "shellchat",
    about = "Chat with a persistent OpenAI assistant from the terminal",
    version,
    after_help = "Logs are written to: ~/.local/share/shellchat/logs/shellchat.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_defaults() {
        let cli = Cli::parse_from(["shellchat"]);
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::parse_from(["shellchat", "-v", "--no-color", "-c", "/tmp/cfg.json"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfg.json")));
    }
}
