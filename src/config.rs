//! Deployment configuration for the editor.

use serde::{Deserialize, Serialize};

/// Tunables that vary between deployments.
///
/// Every field has a default, so a partial JSON object is a valid config:
///
/// ```
/// use headline_studio::EditorConfig;
///
/// let config = EditorConfig::from_json(r#"{ "maxTextLength": 50 }"#).unwrap();
/// assert_eq!(config.max_text_length, 50);
/// assert_eq!(config.letter_stagger_ms, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct EditorConfig {
    /// Maximum headline length in characters.
    pub max_text_length: usize,

    /// Delay between consecutive letters in per-letter mode.
    pub letter_stagger_ms: u32,

    /// How many letters get their own delay rule in the embed code.
    pub max_staggered_letters: usize,

    /// Headline used when an import carries no text.
    pub import_placeholder_text: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 100,
            letter_stagger_ms: 80,
            max_staggered_letters: 100,
            import_placeholder_text: "Imported Headline".into(),
        }
    }
}

impl EditorConfig {
    /// Sets the maximum headline length.
    pub fn with_max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
