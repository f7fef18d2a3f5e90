//! OpenAI model identifiers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// OpenAI chat models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum OpenAiModel {
    #[strum(serialize = "gpt-4")]
    Gpt4,
    #[strum(serialize = "gpt-4-turbo")]
    Gpt4Turbo,
    #[strum(serialize = "gpt-4o")]
    Gpt4o,
    #[strum(serialize = "gpt-4o-mini")]
    Gpt4oMini,
    #[strum(serialize = "gpt-3.5-turbo")]
    Gpt35Turbo,
    /// Custom/unknown OpenAI model by ID.
    #[strum(default)]
    Custom(String),
}

impl OpenAiModel {
    /// Get the API model identifier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gpt4 => "gpt-4",
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Custom(id) => id,
        }
    }
}

impl Default for OpenAiModel {
    fn default() -> Self {
        Self::Gpt4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_parses_to_variant() {
        let model: OpenAiModel = "gpt-4".parse().unwrap();
        assert_eq!(model, OpenAiModel::Gpt4);
        assert_eq!(model.as_str(), "gpt-4");
    }

    #[test]
    fn unknown_model_falls_back_to_custom() {
        let model: OpenAiModel = "gpt-9-experimental".parse().unwrap();
        assert_eq!(model.as_str(), "gpt-9-experimental");
    }
}
