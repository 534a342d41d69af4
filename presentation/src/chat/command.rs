//! Interactive input parsing

use std::path::PathBuf;

/// One line of interactive input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line; ignored
    Empty,
    Quit,
    Clear,
    Save(PathBuf),
    Load(PathBuf),
    /// `save` or `load` given without a path
    MissingPath(&'static str),
    /// Anything else is sent to the model
    Message(String),
}

impl ReplCommand {
    /// Classify a raw input line.
    ///
    /// Keywords are matched case-insensitively after trimming. A path keeps
    /// its original case.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        if input.is_empty() {
            return ReplCommand::Empty;
        }

        let (keyword, rest) = match input.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (input, ""),
        };

        let is = |word: &str| keyword.eq_ignore_ascii_case(word);

        if rest.is_empty() {
            if is("quit") || is("exit") || is("q") {
                return ReplCommand::Quit;
            }
            if is("clear") {
                return ReplCommand::Clear;
            }
            if is("save") {
                return ReplCommand::MissingPath("save");
            }
            if is("load") {
                return ReplCommand::MissingPath("load");
            }
        } else if is("save") {
            return ReplCommand::Save(PathBuf::from(rest));
        } else if is("load") {
            return ReplCommand::Load(PathBuf::from(rest));
        }

        ReplCommand::Message(input.to_string())
    }
}
