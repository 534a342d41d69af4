//! CLI entrypoint for claude-cli
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod run;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use claude_cli_application::{ChatSession, SessionDefaults};
use claude_cli_domain::Model;
use claude_cli_infrastructure::{
    AnthropicTransport, ConfigLoader, FileConfig, JsonTranscriptStore, resolve_credential_from_env,
};
use claude_cli_presentation::{Cli, ConsoleFormatter, InputMode, OutputConfig, ReplConfig};
use run::RunPlan;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries replies only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return ExitCode::SUCCESS;
    }

    let Some(mode) = cli.input_mode() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "Must specify one of: --interactive, --message, or --file",
            )
            .exit()
    };

    match execute(cli, mode).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli, mode: InputMode) -> Result<ExitCode> {
    info!("Starting claude-cli");

    let config = load_config(&cli)?;

    OutputConfig {
        color: config.output.color && !cli.no_color,
    }
    .apply();

    // === Dependency Injection ===
    let credential = resolve_credential_from_env(
        cli.api_key.as_deref(),
        config.providers.anthropic.api_key.as_deref(),
    );
    let transport = Arc::new(AnthropicTransport::from_config(&config.providers.anthropic));
    let store = Arc::new(JsonTranscriptStore::new());

    let mut session = match ChatSession::new(credential, session_defaults(&cli, &config), transport, store)
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };

    let plan = RunPlan {
        mode,
        load: cli.load.clone(),
        save: cli.save.clone(),
        repl: ReplConfig::default()
            .with_progress(!cli.quiet)
            .with_history_file(config.repl.history_path()),
    };

    let status = run::drive(&mut session, plan).await?;
    Ok(status.into())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        warn!("Configuration issue: {}", issue);
    }
    Ok(config)
}

/// Config file defaults, overridden by command-line flags.
fn session_defaults(cli: &Cli, config: &FileConfig) -> SessionDefaults {
    let mut defaults = config.defaults.to_session_defaults();
    if let Some(model) = cli.model.as_deref() {
        defaults = defaults.with_model(Model::from(model));
    }
    if let Some(max_tokens) = cli.max_tokens {
        defaults = defaults.with_max_tokens(max_tokens);
    }
    if let Some(system) = cli.system.as_deref() {
        defaults = defaults.with_system_prompt(system);
    }
    defaults
}
