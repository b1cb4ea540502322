//! Model identifiers accepted by the completion endpoint.

use serde::{Deserialize, Serialize};

/// Supported completion models. The wire identifiers are fixed by the
/// service; `Mixtral` is the default used for documentation generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "llama2-70b-4096")]
    Llama2,
    #[default]
    #[serde(rename = "mixtral-8x7b-32768")]
    Mixtral,
    #[serde(rename = "Gemma-7b-it")]
    Gemma,
}

impl Model {
    /// The identifier sent on the wire.
    pub fn wire_id(&self) -> &'static str {
        match self {
            Model::Llama2 => "llama2-70b-4096",
            Model::Mixtral => "mixtral-8x7b-32768",
            Model::Gemma => "Gemma-7b-it",
        }
    }

    /// Parse a configuration value. Accepts both the short name and the
    /// full wire identifier.
    pub fn parse(value: &str) -> Option<Model> {
        match value {
            "llama2" | "llama2-70b-4096" => Some(Model::Llama2),
            "mixtral" | "mixtral-8x7b-32768" => Some(Model::Mixtral),
            "gemma" | "Gemma-7b-it" => Some(Model::Gemma),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_match_serde_renames() {
        for model in [Model::Llama2, Model::Mixtral, Model::Gemma] {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.wire_id()));
        }
    }

    #[test]
    fn parse_accepts_short_and_wire_names() {
        assert_eq!(Model::parse("mixtral"), Some(Model::Mixtral));
        assert_eq!(Model::parse("mixtral-8x7b-32768"), Some(Model::Mixtral));
        assert_eq!(Model::parse("gpt-4"), None);
    }

    #[test]
    fn default_is_mixtral() {
        assert_eq!(Model::default(), Model::Mixtral);
    }
}
