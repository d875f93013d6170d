//! Serializable headline settings.
//!
//! [`Settings`] is the single root value the editor works on. It serializes
//! to the same camelCase JSON shape the export file carries, so a settings
//! blob written by [`ExportData::to_json_pretty`] can be fed straight back
//! through the JSON importer.
//!
//! # Example
//!
//! ```
//! use headline_studio::{GradientDirection, Settings, StyleType};
//!
//! let mut settings = Settings::default().with_text("Ship It");
//! settings.gradient.direction = GradientDirection::ToBottom;
//! settings.apply_word_style("It", StyleType::Highlight);
//!
//! let json = settings.to_json().unwrap();
//! let restored = Settings::from_json(&json).unwrap();
//! assert_eq!(restored, settings);
//! ```

use serde::{Deserialize, Serialize};

use crate::text;

/// Background value meaning "no block behind the word".
pub const TRANSPARENT: &str = "transparent";

/// Background colour a word gets when styled as a block.
pub const DEFAULT_BLOCK_COLOR: &str = "#8b5cf6";

// ============================================================================
// Typography
// ============================================================================

/// Font settings applied to the whole headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Typography {
    /// Font size in px (8-200).
    pub font_size: f64,

    /// A CSS font stack. Not checked against a fixed list.
    pub font_family: String,

    /// Numeric font weight (100-900).
    pub font_weight: u16,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_size: 56.0,
            font_family: "Inter, system-ui, sans-serif".into(),
            font_weight: 700,
        }
    }
}

// ============================================================================
// Gradient
// ============================================================================

/// Direction of the two-stop gradient, stored as a compass arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum GradientDirection {
    /// Left to right.
    #[default]
    #[serde(rename = "→")]
    ToRight,
    /// Right to left.
    #[serde(rename = "←")]
    ToLeft,
    /// Top to bottom.
    #[serde(rename = "↓")]
    ToBottom,
    /// Bottom to top.
    #[serde(rename = "↑")]
    ToTop,
}

impl GradientDirection {
    /// All directions, in arrow order.
    pub const ALL: [Self; 4] = [Self::ToRight, Self::ToLeft, Self::ToBottom, Self::ToTop];

    /// The arrow symbol used in the settings JSON.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::ToRight => "→",
            Self::ToLeft => "←",
            Self::ToBottom => "↓",
            Self::ToTop => "↑",
        }
    }

    /// Parses an arrow symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.symbol() == symbol)
    }

    /// The `linear-gradient` side keyword (`to right`, ...).
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::ToRight => "to right",
            Self::ToLeft => "to left",
            Self::ToBottom => "to bottom",
            Self::ToTop => "to top",
        }
    }

    /// The equivalent CSS gradient angle in degrees.
    pub fn angle_deg(self) -> u16 {
        match self {
            Self::ToTop => 0,
            Self::ToRight => 90,
            Self::ToBottom => 180,
            Self::ToLeft => 270,
        }
    }

    /// True for `→` and `←`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::ToRight | Self::ToLeft)
    }
}

/// Two-colour gradient fill settings.
///
/// When `enabled` is false the colours are kept but have no effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Gradient {
    pub enabled: bool,
    pub direction: GradientDirection,
    /// Hex colour (`#rrggbb`).
    pub start_color: String,
    /// Hex colour (`#rrggbb`).
    pub end_color: String,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: GradientDirection::ToRight,
            start_color: "#06b6d4".into(),
            end_color: "#8b5cf6".into(),
        }
    }
}

impl Gradient {
    /// The `linear-gradient(...)` value for this gradient's direction.
    pub fn css(&self) -> String {
        format!(
            "linear-gradient({}, {}, {})",
            self.direction.css_keyword(),
            self.start_color,
            self.end_color
        )
    }
}

// ============================================================================
// Word Styling
// ============================================================================

/// A style override keyed by one word of the headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct WordStyle {
    /// The word key (whitespace-free, punctuation stripped).
    pub text: String,
    pub highlight: bool,
    pub underline: bool,
    /// Hex colour or `"transparent"`.
    pub background_color: String,
}

impl WordStyle {
    /// Creates an entry for `word` with the flags of `style`.
    pub fn new(word: impl Into<String>, style: StyleType) -> Self {
        let mut entry = Self {
            text: word.into(),
            highlight: false,
            underline: false,
            background_color: TRANSPARENT.into(),
        };
        entry.set_style(style);
        entry
    }

    /// Replaces the flags with those of `style`.
    pub fn set_style(&mut self, style: StyleType) {
        self.highlight = style == StyleType::Highlight;
        self.underline = style == StyleType::Underline;
        self.background_color = match style {
            StyleType::Block => DEFAULT_BLOCK_COLOR.into(),
            _ => TRANSPARENT.into(),
        };
    }

    /// True if the word paints a block behind itself.
    pub fn has_block(&self) -> bool {
        !self.background_color.is_empty() && self.background_color != TRANSPARENT
    }
}

/// The kinds of override a word can be given from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StyleType {
    Highlight,
    Underline,
    Block,
}

// ============================================================================
// Animation & Effects
// ============================================================================

/// Independent animation and effect toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Animation {
    pub fade_in: bool,
    pub hover_glow: bool,
    pub per_letter: bool,
    pub text_shadow: bool,
    pub outline: bool,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            fade_in: true,
            hover_glow: false,
            per_letter: false,
            text_shadow: false,
            outline: false,
        }
    }
}

/// Parameters for the shadow and outline effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Effects {
    /// A raw CSS `text-shadow` value.
    pub text_shadow: String,
    /// Hex colour of the solid stroke.
    pub outline_color: String,
    /// Outline width in px (0-10).
    pub outline_width: f64,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            text_shadow: "0 0 20px rgba(59, 130, 246, 0.6)".into(),
            outline_color: "#ffffff".into(),
            outline_width: 1.0,
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Everything needed to render one headline.
///
/// # JSON Format
///
/// ```json
/// {
///   "text": "Create Amazing Headlines",
///   "typography": { "fontSize": 56.0, "fontFamily": "Inter, system-ui, sans-serif", "fontWeight": 700 },
///   "gradient": { "enabled": true, "direction": "→", "startColor": "#06b6d4", "endColor": "#8b5cf6" },
///   "wordStyling": [],
///   "animation": { "fadeIn": true, "hoverGlow": false, "perLetter": false, "textShadow": false, "outline": false },
///   "effects": { "textShadow": "0 0 20px rgba(59, 130, 246, 0.6)", "outlineColor": "#ffffff", "outlineWidth": 1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct Settings {
    pub text: String,
    pub typography: Typography,
    pub gradient: Gradient,
    /// At most one entry per word, kept in insertion order.
    pub word_styling: Vec<WordStyle>,
    pub animation: Animation,
    pub effects: Effects,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            text: "Create Amazing Headlines".into(),
            typography: Typography::default(),
            gradient: Gradient::default(),
            word_styling: Vec::new(),
            animation: Animation::default(),
            effects: Effects::default(),
        }
    }
}

impl Settings {
    /// Replaces the headline text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a word style entry.
    pub fn with_word_style(mut self, style: WordStyle) -> Self {
        self.word_styling.push(style);
        self
    }

    /// Returns the entry for `word`, if any.
    pub fn word_style(&self, word: &str) -> Option<&WordStyle> {
        self.word_styling.iter().find(|s| s.text == word)
    }

    /// Returns the index of the entry for `word`, if any.
    pub fn word_style_index(&self, word: &str) -> Option<usize> {
        self.word_styling.iter().position(|s| s.text == word)
    }

    /// Styles `word`, replacing the flags of an existing entry in place.
    ///
    /// Applying the same style twice leaves the list unchanged.
    pub fn apply_word_style(&mut self, word: &str, style: StyleType) {
        match self.word_styling.iter_mut().find(|s| s.text == word) {
            Some(entry) => entry.set_style(style),
            None => self.word_styling.push(WordStyle::new(word, style)),
        }
    }

    /// Removes the entry for `word`. Returns true if one was removed.
    pub fn remove_word_style(&mut self, word: &str) -> bool {
        let before = self.word_styling.len();
        self.word_styling.retain(|s| s.text != word);
        self.word_styling.len() != before
    }

    /// Drops entries whose word no longer appears in `text`, and any
    /// duplicate entries for the same word (first one wins).
    ///
    /// Returns the number of entries removed.
    pub fn prune_word_styling(&mut self) -> usize {
        let words = text::unique_words(&self.text);
        let mut seen: Vec<String> = Vec::with_capacity(self.word_styling.len());
        let before = self.word_styling.len();

        self.word_styling.retain(|s| {
            if !words.contains(&s.text) || seen.contains(&s.text) {
                return false;
            }
            seen.push(s.text.clone());
            true
        });

        before - self.word_styling.len()
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the settings to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from a JSON string.
    ///
    /// This is the plain serde path. Use [`crate::parse_json`] for imports,
    /// which expects the export envelope and reports field-level errors.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// JSON schema of the settings object.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Settings)
    }
}

// ============================================================================
// Export File
// ============================================================================

/// The downloadable export file.
///
/// ```json
/// { "settings": { ... }, "embedCode": "<style>...</style><div ...>...</div>", "timestamp": "2026-01-01T00:00:00.000Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct ExportData {
    pub settings: Settings,
    pub embed_code: String,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
}

impl ExportData {
    /// Serializes the export to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the export to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_serialization_roundtrip() {
        let settings = Settings::default()
            .with_text("Ship It")
            .with_word_style(WordStyle::new("It", StyleType::Block));

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();

        assert_eq!(restored, settings);
        assert_eq!(restored.word_styling[0].background_color, DEFAULT_BLOCK_COLOR);
    }

    #[test]
    fn settings_json_format() {
        let json = Settings::default().to_json_pretty().unwrap();

        assert!(json.contains("\"wordStyling\""));
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"perLetter\""));
        assert!(json.contains("\"outlineWidth\""));
        assert!(json.contains("\"→\""));
    }

    #[test]
    fn direction_symbols_roundtrip() {
        for direction in GradientDirection::ALL {
            assert_eq!(GradientDirection::from_symbol(direction.symbol()), Some(direction));
        }
        assert_eq!(GradientDirection::from_symbol("to right"), None);
    }

    #[test]
    fn direction_angles_are_distinct() {
        let mut angles: Vec<u16> = GradientDirection::ALL.iter().map(|d| d.angle_deg()).collect();
        angles.sort_unstable();
        angles.dedup();
        assert_eq!(angles, vec![0, 90, 180, 270]);
    }

    #[test]
    fn gradient_css() {
        let gradient = Gradient::default();
        assert_eq!(gradient.css(), "linear-gradient(to right, #06b6d4, #8b5cf6)");
    }

    #[test]
    fn apply_word_style_twice_is_noop() {
        let mut settings = Settings::default().with_text("Ship It");
        settings.apply_word_style("It", StyleType::Highlight);
        let once = settings.clone();
        settings.apply_word_style("It", StyleType::Highlight);

        assert_eq!(settings, once);
        assert_eq!(settings.word_styling.len(), 1);
    }

    #[test]
    fn apply_word_style_replaces_flags() {
        let mut settings = Settings::default().with_text("Ship It");
        settings.apply_word_style("It", StyleType::Block);
        settings.apply_word_style("It", StyleType::Underline);

        let entry = settings.word_style("It").unwrap();
        assert!(entry.underline);
        assert!(!entry.highlight);
        assert!(!entry.has_block());
    }

    #[test]
    fn remove_word_style() {
        let mut settings = Settings::default().with_text("Ship It");
        settings.apply_word_style("Ship", StyleType::Underline);

        assert!(settings.remove_word_style("Ship"));
        assert!(!settings.remove_word_style("Ship"));
        assert!(settings.word_styling.is_empty());
    }

    #[test]
    fn prune_drops_removed_words() {
        let mut settings = Settings::default()
            .with_text("Launch Day")
            .with_word_style(WordStyle::new("Launch", StyleType::Highlight))
            .with_word_style(WordStyle::new("Day", StyleType::Underline));

        settings.text = "Release Day!".into();
        let removed = settings.prune_word_styling();

        assert_eq!(removed, 1);
        assert!(settings.word_style("Launch").is_none());
        assert!(settings.word_style("Day").is_some());
    }

    #[test]
    fn prune_collapses_duplicates() {
        let mut settings = Settings::default()
            .with_text("Go Go")
            .with_word_style(WordStyle::new("Go", StyleType::Highlight))
            .with_word_style(WordStyle::new("Go", StyleType::Block));

        assert_eq!(settings.prune_word_styling(), 1);
        assert!(settings.word_styling[0].highlight);
    }

    #[test]
    fn export_data_format() {
        let export = ExportData {
            settings: Settings::default(),
            embed_code: "<style></style>".into(),
            timestamp: "2026-01-01T00:00:00.000Z".into(),
        };

        let json = export.to_json_pretty().unwrap();
        assert!(json.contains("\"embedCode\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"settings\""));
    }
}
