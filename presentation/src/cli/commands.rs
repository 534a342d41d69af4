//! CLI command definitions

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// How the user supplies input for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Read-eval-print loop until the user quits
    Interactive,
    /// Send one message given on the command line
    Message(String),
    /// Send one message read from a file
    File(PathBuf),
}

/// CLI arguments for claude-cli
#[derive(Parser, Debug)]
#[command(name = "claude-cli")]
#[command(author, version, about = "Interact with Claude AI from the command line")]
#[command(long_about = r#"
claude-cli sends messages to the Anthropic Messages API and keeps the
conversation history for follow-up questions.

Exactly one input mode is required: --interactive, --message or --file.

The API key is taken from --api-key, then the ANTHROPIC_API_KEY environment
variable, then `providers.anthropic.api_key` in a config file.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./claude-cli.toml   Project-level config
3. ~/.config/claude-cli/config.toml   Global config

Example:
  claude-cli -m "What's the best way to handle errors in Rust?"
  claude-cli -f prompt.txt --system "Answer in one paragraph" --save chat.json
  claude-cli -i --load chat.json
"#)]
#[command(group(
    ArgGroup::new("mode")
        .args(["interactive", "message", "file"])
        .multiple(false)
))]
pub struct Cli {
    /// Anthropic API key (or set ANTHROPIC_API_KEY env var)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Claude model to use (default: claude-sonnet-4-20250514)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum tokens in response (default: 1000)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: Option<u32>,

    /// System prompt to use
    #[arg(long, value_name = "TEXT")]
    pub system: Option<String>,

    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Send a single message
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Read message from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Load conversation from file before running
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Save conversation to file after completion
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The selected input mode, if any.
    pub fn input_mode(&self) -> Option<InputMode> {
        if self.interactive {
            Some(InputMode::Interactive)
        } else if let Some(message) = &self.message {
            Some(InputMode::Message(message.clone()))
        } else {
            self.file.clone().map(InputMode::File)
        }
    }
}
