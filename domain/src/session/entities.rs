//! Conversation entities: turns and the transcript that orders them

use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
///
/// The system instruction is not a turn: it travels beside the transcript
/// on every request and is never stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role-tagged message in a conversation (Entity)
///
/// Fields are private so a turn cannot change once it is in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Chronologically ordered dialogue history.
///
/// Strict user/assistant alternation is not enforced. Turns are only ever
/// appended; removal happens wholesale through [`clear`](Self::clear) or
/// [`replace`](Self::replace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Commit a completed exchange: the user turn first, then the reply.
    pub fn commit_exchange(&mut self, user: Turn, assistant: Turn) {
        self.turns.reserve(2);
        self.turns.push(user);
        self.turns.push(assistant);
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Swap in a fully parsed replacement history.
    pub fn replace(&mut self, turns: Vec<Turn>) {
        self.turns = turns;
    }

    /// The outgoing message list: the full history plus a pending user turn
    /// that is not yet part of the transcript.
    pub fn with_pending(&self, pending: &Turn) -> Vec<Turn> {
        let mut messages = Vec::with_capacity(self.turns.len() + 1);
        messages.extend_from_slice(&self.turns);
        messages.push(pending.clone());
        messages
    }
}

impl From<Vec<Turn>> for Transcript {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert!(serde_json::from_str::<Role>("\"system\"").is_err());
    }

    #[test]
    fn test_turn_wire_shape() {
        let json = serde_json::to_value(Turn::user("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "Hello"}));
    }

    #[test]
    fn test_commit_exchange_order() {
        let mut transcript = Transcript::new();
        transcript.commit_exchange(Turn::user("Hello"), Turn::assistant("Hi"));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0], Turn::user("Hello"));
        assert_eq!(transcript.turns()[1], Turn::assistant("Hi"));
    }

    #[test]
    fn test_alternation_not_enforced() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("first"));
        transcript.push(Turn::user("second"));
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut transcript = Transcript::from(vec![Turn::user("a"), Turn::assistant("b")]);
        transcript.clear();
        assert!(transcript.is_empty());
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_with_pending_does_not_mutate() {
        let transcript = Transcript::from(vec![Turn::user("a"), Turn::assistant("b")]);
        let messages = transcript.with_pending(&Turn::user("c"));

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], Turn::user("c"));
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_transcript_is_a_plain_json_array() {
        let transcript = Transcript::from(vec![Turn::user("q"), Turn::assistant("a")]);
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "user", "content": "q"},
                {"role": "assistant", "content": "a"}
            ])
        );
    }
}
