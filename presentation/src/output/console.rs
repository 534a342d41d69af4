//! Console output formatter for chat replies and diagnostics

use claude_cli_domain::Usage;
use colored::Colorize;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Interactive-mode banner listing the available commands
    pub fn banner(system_prompt: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Claude CLI - Interactive Mode".cyan().bold()));
        output.push_str("Type 'quit', 'exit', or 'q' to quit\n");
        output.push_str("Type 'clear' to clear conversation history\n");
        output.push_str("Type 'save <filename>' to save conversation\n");
        output.push_str("Type 'load <filename>' to load conversation\n");
        output.push_str(&Self::rule());

        if let Some(prompt) = system_prompt.filter(|p| !p.trim().is_empty()) {
            output.push_str(&format!("{} {}\n", "System prompt:".cyan().bold(), prompt));
            output.push_str(&Self::rule());
        }

        output
    }

    /// Label printed before an interactive reply
    pub fn reply_label() -> String {
        format!("\n{} ", "Claude:".green().bold())
    }

    /// Token usage line, or `None` when the service reported no usage.
    ///
    /// Missing counts are shown as `N/A`.
    pub fn usage(usage: &Usage) -> Option<String> {
        if usage.is_empty() {
            return None;
        }
        let line = format!(
            "[Tokens - Input: {}, Output: {}]",
            Self::count(usage.input_tokens),
            Self::count(usage.output_tokens)
        );
        Some(line.dimmed().to_string())
    }

    /// One-line error, e.g. `Error: API request failed: timeout`
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn cleared() -> String {
        "Conversation cleared.".yellow().to_string()
    }

    pub fn saved(path: &Path) -> String {
        format!("Conversation saved to {}", path.display())
    }

    pub fn loaded(path: &Path) -> String {
        format!("Conversation loaded from {}", path.display())
    }

    pub fn save_failed(detail: &str) -> String {
        format!("{} {}", "Error saving conversation:".red(), detail)
    }

    pub fn load_failed(detail: &str) -> String {
        format!("{} {}", "Error loading conversation:".red(), detail)
    }

    pub fn goodbye() -> &'static str {
        "Goodbye!"
    }

    fn count(value: Option<u32>) -> String {
        value.map_or_else(|| "N/A".to_string(), |n| n.to_string())
    }

    fn rule() -> String {
        format!("{}\n", "-".repeat(RULE_WIDTH))
    }
}
