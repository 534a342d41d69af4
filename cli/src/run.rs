//! Drives an assembled session: `--load`, the selected input mode, `--save`.

use anyhow::{Context, Result};
use claude_cli_application::ChatSession;
use claude_cli_domain::ExchangeOutcome;
use claude_cli_presentation::{ChatRepl, ConsoleFormatter, InputMode, ReplConfig, read_message_file};
use std::path::PathBuf;
use std::process::ExitCode;

/// How a run ended. Every failure has already been reported on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

/// What to do with the session, taken from the command line.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub mode: InputMode,
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub repl: ReplConfig,
}

/// Load, run the mode, then save. A failed step ends the run; `--save` is
/// skipped when the mode failed.
pub async fn drive(session: &mut ChatSession, plan: RunPlan) -> Result<RunStatus> {
    if let Some(path) = &plan.load {
        if let Err(e) = session.load_from_path(path) {
            eprintln!("{}", ConsoleFormatter::load_failed(&e.to_string()));
            return Ok(RunStatus::Failed);
        }
        eprintln!("{}", ConsoleFormatter::loaded(path));
    }

    let completed = match plan.mode {
        InputMode::Interactive => {
            ChatRepl::new(plan.repl)
                .run(session)
                .await
                .context("Interactive input failed")?;
            true
        }
        InputMode::Message(message) => send_single(session, &message).await,
        InputMode::File(path) => match read_message_file(&path) {
            Ok(message) => send_single(session, &message).await,
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                false
            }
        },
    };

    if !completed {
        return Ok(RunStatus::Failed);
    }

    if let Some(path) = &plan.save {
        if let Err(e) = session.save_to_path(path) {
            eprintln!("{}", ConsoleFormatter::save_failed(&e.to_string()));
            return Ok(RunStatus::Failed);
        }
        eprintln!("{}", ConsoleFormatter::saved(path));
    }

    Ok(RunStatus::Completed)
}

/// One exchange; reply on stdout, usage and errors on stderr.
async fn send_single(session: &mut ChatSession, message: &str) -> bool {
    match session.exchange(message).await {
        ExchangeOutcome::Success {
            assistant_text,
            usage,
            ..
        } => {
            println!("{}", assistant_text);
            if let Some(line) = ConsoleFormatter::usage(&usage) {
                eprintln!("\n{}", line);
            }
            true
        }
        failure => {
            let message = failure.error_message().unwrap_or_default();
            eprintln!("{}", ConsoleFormatter::error(&message));
            false
        }
    }
}
