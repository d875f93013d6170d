//! JSON import of an export file.
//!
//! The input is read as generic JSON first, then walked field by field so
//! that every failure names the offending path. Types are never coerced:
//! `"true"` where a boolean is expected is an error.

use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::settings::{
    Animation, Effects, Gradient, GradientDirection, Settings, Typography, WordStyle,
};

const SETTINGS_KEYS: [&str; 6] = [
    "text",
    "typography",
    "gradient",
    "wordStyling",
    "animation",
    "effects",
];

/// Parses the `settings` object of an export file.
///
/// `embedCode`, `timestamp` and unknown keys are ignored.
pub fn parse_json(input: &str) -> Result<Settings, ParseError> {
    let root: Value =
        serde_json::from_str(input).map_err(|e| ParseError::Syntax(e.to_string()))?;
    let root = root
        .as_object()
        .ok_or_else(|| ParseError::wrong_type("(root)", "an object"))?;

    let settings = Fields::root(root).object("settings")?;
    for key in SETTINGS_KEYS {
        settings.get(key)?;
    }
    read_settings(&settings)
}

fn read_settings(fields: &Fields) -> Result<Settings, ParseError> {
    let typography = fields.object("typography")?;
    let gradient = fields.object("gradient")?;
    let animation = fields.object("animation")?;
    let effects = fields.object("effects")?;

    Ok(Settings {
        text: fields.string("text")?,
        typography: Typography {
            font_size: typography.number("fontSize")?,
            font_family: typography.string("fontFamily")?,
            font_weight: typography.integer("fontWeight")?,
        },
        gradient: Gradient {
            enabled: gradient.boolean("enabled")?,
            direction: gradient.direction("direction")?,
            start_color: gradient.string("startColor")?,
            end_color: gradient.string("endColor")?,
        },
        word_styling: fields
            .objects("wordStyling")?
            .iter()
            .map(|entry| {
                Ok(WordStyle {
                    text: entry.string("text")?,
                    highlight: entry.boolean("highlight")?,
                    underline: entry.boolean("underline")?,
                    background_color: entry.string("backgroundColor")?,
                })
            })
            .collect::<Result<_, ParseError>>()?,
        animation: Animation {
            fade_in: animation.boolean("fadeIn")?,
            hover_glow: animation.boolean("hoverGlow")?,
            per_letter: animation.boolean("perLetter")?,
            text_shadow: animation.boolean("textShadow")?,
            outline: animation.boolean("outline")?,
        },
        effects: Effects {
            text_shadow: effects.string("textShadow")?,
            outline_color: effects.string("outlineColor")?,
            outline_width: effects.number("outlineWidth")?,
        },
    })
}

// ============================================================================
// Field Reader
// ============================================================================

/// A JSON object together with its path from the document root.
struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn root(map: &'a Map<String, Value>) -> Self {
        Self {
            path: String::new(),
            map,
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// Returns the value at `key`; `null` counts as missing.
    fn get(&self, key: &str) -> Result<&'a Value, ParseError> {
        self.map
            .get(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ParseError::missing(self.path_of(key)))
    }

    fn object(&self, key: &str) -> Result<Fields<'a>, ParseError> {
        let map = self
            .get(key)?
            .as_object()
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "an object"))?;
        Ok(Fields {
            path: self.path_of(key),
            map,
        })
    }

    fn objects(&self, key: &str) -> Result<Vec<Fields<'a>>, ParseError> {
        let items = self
            .get(key)?
            .as_array()
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "an array"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let path = format!("{}[{i}]", self.path_of(key));
                match item.as_object() {
                    Some(map) => Ok(Fields { path, map }),
                    None => Err(ParseError::wrong_type(path, "an object")),
                }
            })
            .collect()
    }

    fn string(&self, key: &str) -> Result<String, ParseError> {
        self.get(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "a string"))
    }

    fn boolean(&self, key: &str) -> Result<bool, ParseError> {
        self.get(key)?
            .as_bool()
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "a boolean"))
    }

    fn number(&self, key: &str) -> Result<f64, ParseError> {
        self.get(key)?
            .as_f64()
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "a number"))
    }

    /// A whole number that fits a `u16`; `700.0` is accepted, `700.5` is not.
    fn integer(&self, key: &str) -> Result<u16, ParseError> {
        let value = self.get(key)?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| ParseError::wrong_type(self.path_of(key), "an integer"))
    }

    fn direction(&self, key: &str) -> Result<GradientDirection, ParseError> {
        let symbol = self.get(key)?.as_str().ok_or_else(|| {
            ParseError::wrong_type(self.path_of(key), "one of \"→\", \"←\", \"↓\", \"↑\"")
        })?;
        GradientDirection::from_symbol(symbol).ok_or_else(|| ParseError::InvalidValue {
            field: self.path_of(key),
            value: symbol.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
