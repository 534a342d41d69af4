//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ExchangeSpinner;
use claude_cli_application::ChatSession;
use claude_cli_domain::ExchangeOutcome;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(config: ReplConfig) -> Self {
        Self { config }
    }

    /// Run the interactive loop until the user quits or input ends.
    ///
    /// Exchange and persistence failures are reported inline and never end
    /// the loop. Only a terminal I/O error is returned.
    pub async fn run(&self, session: &mut ChatSession) -> io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("You".to_string()),
            DefaultPromptSegment::Empty,
        );

        print!(
            "{}",
            ConsoleFormatter::banner(session.defaults().system_prompt.as_deref())
        );

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let command = ReplCommand::parse(&line);
                    if self.dispatch(session, command).await == LoopControl::Exit {
                        break;
                    }
                }
                Signal::CtrlC | Signal::CtrlD => {
                    println!("\n{}", ConsoleFormatter::goodbye());
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute one classified input line against the session.
    pub async fn dispatch(&self, session: &mut ChatSession, command: ReplCommand) -> LoopControl {
        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("{}", ConsoleFormatter::goodbye());
                return LoopControl::Exit;
            }
            ReplCommand::Clear => {
                session.clear();
                println!("{}", ConsoleFormatter::cleared());
            }
            ReplCommand::Save(path) => match session.save_to_path(&path) {
                Ok(()) => println!("{}", ConsoleFormatter::saved(&path)),
                Err(e) => println!("{}", ConsoleFormatter::save_failed(&e.to_string())),
            },
            ReplCommand::Load(path) => match session.load_from_path(&path) {
                Ok(()) => println!("{}", ConsoleFormatter::loaded(&path)),
                Err(e) => println!("{}", ConsoleFormatter::load_failed(&e.to_string())),
            },
            ReplCommand::MissingPath(keyword) => {
                println!("Usage: {} <filename>", keyword);
            }
            ReplCommand::Message(text) => self.send(session, &text).await,
        }
        LoopControl::Continue
    }

    async fn send(&self, session: &mut ChatSession, text: &str) {
        let spinner = ExchangeSpinner::start(self.config.show_progress, "Waiting for Claude...");
        let outcome = session.exchange(text).await;
        spinner.finish();

        print!("{}", ConsoleFormatter::reply_label());
        match outcome {
            ExchangeOutcome::Success {
                assistant_text,
                usage,
                ..
            } => {
                println!("{}", assistant_text);
                if let Some(line) = ConsoleFormatter::usage(&usage) {
                    println!("\n{}", line);
                }
            }
            ExchangeOutcome::Failure { kind, detail } => {
                println!(
                    "{}",
                    ConsoleFormatter::error(&format!("{}: {}", kind.prefix(), detail))
                );
            }
        }
        println!();
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_file.as_deref() else {
            return editor;
        };

        match Self::file_history(path) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    fn file_history(path: &Path) -> Option<FileBackedHistory> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                debug!("Could not create {}: {}", parent.display(), e);
            }
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
            Ok(history) => {
                debug!("Line history at {}", path.display());
                Some(history)
            }
            Err(e) => {
                warn!("Line history disabled ({}): {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use claude_cli_application::{
        MessagesTransport, PersistenceError, SessionDefaults, TranscriptStore,
    };
    use claude_cli_domain::{ApiKey, ExchangeRequest, Model, Turn, Usage};
    use std::collections::{HashMap, VecDeque};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct ScriptedTransport {
        outcomes: Mutex<VecDeque<ExchangeOutcome>>,
    }

    #[async_trait]
    impl MessagesTransport for ScriptedTransport {
        async fn perform_exchange(
            &self,
            _request: &ExchangeRequest,
            _credential: &ApiKey,
        ) -> ExchangeOutcome {
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ExchangeOutcome::request_failed("no scripted outcome"))
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        files: Mutex<HashMap<PathBuf, Vec<Turn>>>,
    }

    impl TranscriptStore for MemoryStore {
        fn save(&self, turns: &[Turn], path: &Path) -> Result<(), PersistenceError> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), turns.to_vec());
            Ok(())
        }

        fn load(&self, path: &Path) -> Result<Vec<Turn>, PersistenceError> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                PersistenceError::io(path, io::Error::from(io::ErrorKind::NotFound))
            })
        }
    }

    fn session(outcomes: Vec<ExchangeOutcome>) -> ChatSession {
        let transport = Arc::new(ScriptedTransport {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
        });
        ChatSession::new(
            Some("sk-ant-test".to_string()),
            SessionDefaults::default(),
            transport,
            Arc::new(MemoryStore::default()),
        )
        .unwrap()
    }

    fn repl() -> ChatRepl {
        ChatRepl::new(ReplConfig::default().with_progress(false))
    }

    fn reply(text: &str) -> ExchangeOutcome {
        ExchangeOutcome::success(text, Usage::new(3, 4), Model::default())
    }

    #[tokio::test]
    async fn test_quit_exits_loop() {
        let mut session = session(vec![]);
        let control = repl().dispatch(&mut session, ReplCommand::Quit).await;
        assert_eq!(control, LoopControl::Exit);
    }

    #[tokio::test]
    async fn test_message_commits_exchange() {
        let mut session = session(vec![reply("Hi there")]);
        let control = repl()
            .dispatch(&mut session, ReplCommand::Message("Hello".to_string()))
            .await;

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(
            session.transcript().turns(),
            &[Turn::user("Hello"), Turn::assistant("Hi there")]
        );
    }

    #[tokio::test]
    async fn test_failed_exchange_keeps_looping() {
        let mut session = session(vec![ExchangeOutcome::request_failed("HTTP 500: boom")]);
        let control = repl()
            .dispatch(&mut session, ReplCommand::Message("Hello".to_string()))
            .await;

        assert_eq!(control, LoopControl::Continue);
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_transcript() {
        let mut session = session(vec![reply("Hi")]);
        let repl = repl();
        repl.dispatch(&mut session, ReplCommand::Message("Hello".to_string()))
            .await;
        repl.dispatch(&mut session, ReplCommand::Clear).await;

        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_save_clear_load_restores_history() {
        let mut session = session(vec![reply("Hi")]);
        let repl = repl();
        let path = PathBuf::from("chat.json");

        repl.dispatch(&mut session, ReplCommand::Message("Hello".to_string()))
            .await;
        repl.dispatch(&mut session, ReplCommand::Save(path.clone()))
            .await;
        repl.dispatch(&mut session, ReplCommand::Clear).await;
        let control = repl.dispatch(&mut session, ReplCommand::Load(path)).await;

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_history() {
        let mut session = session(vec![reply("Hi")]);
        let repl = repl();
        repl.dispatch(&mut session, ReplCommand::Message("Hello".to_string()))
            .await;

        let control = repl
            .dispatch(&mut session, ReplCommand::Load(PathBuf::from("missing.json")))
            .await;

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_and_missing_path_do_nothing() {
        let mut session = session(vec![]);
        let repl = repl();
        assert_eq!(
            repl.dispatch(&mut session, ReplCommand::Empty).await,
            LoopControl::Continue
        );
        assert_eq!(
            repl.dispatch(&mut session, ReplCommand::MissingPath("save"))
                .await,
            LoopControl::Continue
        );
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_history_under_a_file_is_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(ChatRepl::file_history(&blocker.join("history.txt")).is_none());
    }

    #[test]
    fn test_history_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        assert!(ChatRepl::file_history(&path).is_some());
        assert!(dir.path().join("nested").is_dir());
    }
}
