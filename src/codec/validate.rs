//! Range and format checks for imported settings.

use crate::color::is_hex;
use crate::config::EditorConfig;
use crate::embed::CSS_BREAKOUT_CHARS;
use crate::error::ValidationError;
use crate::settings::{Settings, TRANSPARENT};

pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f64> = 8.0..=200.0;
pub const FONT_WEIGHT_RANGE: std::ops::RangeInclusive<u16> = 100..=900;
pub const OUTLINE_WIDTH_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Validates `settings` with the default config.
pub fn validate(settings: Settings) -> Result<Settings, ValidationError> {
    validate_with(settings, &EditorConfig::default())
}

/// Checks numeric ranges, text length, colour formats and free-form CSS
/// values.
///
/// Runs after either parser, and returns the settings unchanged on success.
/// NaN fails every range.
pub fn validate_with(settings: Settings, config: &EditorConfig) -> Result<Settings, ValidationError> {
    let typography = &settings.typography;
    if !FONT_SIZE_RANGE.contains(&typography.font_size) {
        return Err(ValidationError::FontSize(typography.font_size));
    }
    if !FONT_WEIGHT_RANGE.contains(&typography.font_weight) {
        return Err(ValidationError::FontWeight(typography.font_weight));
    }
    if !OUTLINE_WIDTH_RANGE.contains(&settings.effects.outline_width) {
        return Err(ValidationError::OutlineWidth(settings.effects.outline_width));
    }

    let len = settings.text.chars().count();
    if len > config.max_text_length {
        return Err(ValidationError::TextTooLong {
            len,
            max: config.max_text_length,
        });
    }

    check_css_value("typography.fontFamily", &typography.font_family)?;
    check_css_value("effects.textShadow", &settings.effects.text_shadow)?;

    check_hex("gradient.startColor", &settings.gradient.start_color)?;
    check_hex("gradient.endColor", &settings.gradient.end_color)?;
    check_hex("effects.outlineColor", &settings.effects.outline_color)?;
    for (i, style) in settings.word_styling.iter().enumerate() {
        if style.background_color != TRANSPARENT {
            check_hex(&format!("wordStyling[{i}].backgroundColor"), &style.background_color)?;
        }
    }

    Ok(settings)
}

fn check_hex(field: &str, value: &str) -> Result<(), ValidationError> {
    if is_hex(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_css_value(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.contains(CSS_BREAKOUT_CHARS) {
        Err(ValidationError::UnsafeCssValue {
            field: field.to_string(),
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}
