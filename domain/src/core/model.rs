//! Model value object representing an Anthropic model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Anthropic models addressable through the Messages API (Value Object)
///
/// Identifiers not listed here are carried verbatim in [`Model::Custom`],
/// so new model releases work without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeOpus41,
    ClaudeOpus4,
    ClaudeSonnet4,
    ClaudeSonnet37,
    ClaudeSonnet35,
    ClaudeHaiku35,
    Custom(String),
}

impl Model {
    /// Get the API identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeOpus41 => "claude-opus-4-1-20250805",
            Model::ClaudeOpus4 => "claude-opus-4-20250514",
            Model::ClaudeSonnet4 => "claude-sonnet-4-20250514",
            Model::ClaudeSonnet37 => "claude-3-7-sonnet-20250219",
            Model::ClaudeSonnet35 => "claude-3-5-sonnet-20241022",
            Model::ClaudeHaiku35 => "claude-3-5-haiku-20241022",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Claude Sonnet 4)
    fn default() -> Self {
        Model::ClaudeSonnet4
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-opus-4-1-20250805" => Model::ClaudeOpus41,
            "claude-opus-4-20250514" => Model::ClaudeOpus4,
            "claude-sonnet-4-20250514" => Model::ClaudeSonnet4,
            "claude-3-7-sonnet-20250219" => Model::ClaudeSonnet37,
            "claude-3-5-sonnet-20241022" => Model::ClaudeSonnet35,
            "claude-3-5-haiku-20241022" => Model::ClaudeHaiku35,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_models_roundtrip_through_str() {
        let named = [
            Model::ClaudeOpus41,
            Model::ClaudeOpus4,
            Model::ClaudeSonnet4,
            Model::ClaudeSonnet37,
            Model::ClaudeSonnet35,
            Model::ClaudeHaiku35,
        ];
        for model in named {
            let parsed: Model = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_unknown_id_becomes_custom() {
        let model = Model::from("claude-next-preview");
        assert_eq!(model, Model::Custom("claude-next-preview".to_string()));
        assert_eq!(model.as_str(), "claude-next-preview");
    }

    #[test]
    fn test_default_is_sonnet_4() {
        assert_eq!(Model::default().to_string(), "claude-sonnet-4-20250514");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::ClaudeHaiku35).unwrap();
        assert_eq!(json, "\"claude-3-5-haiku-20241022\"");

        let model: Model = serde_json::from_str("\"my-finetune\"").unwrap();
        assert_eq!(model, Model::Custom("my-finetune".to_string()));
    }
}
