//! Settings import: JSON and CSS parsers plus the shared validator.
//!
//! Both parsers produce a candidate [`Settings`]; [`import`] runs the
//! chosen parser and then [`validate_with`], so a caller only ever sees
//! settings that passed every check.
//!
//! ```
//! use headline_studio::{import, EditorConfig, ImportError, ImportMode};
//!
//! let config = EditorConfig::default();
//! let css = ".headline-widget { font-size: 300px; }";
//! let err = import(ImportMode::Css, css, &config).unwrap_err();
//! assert!(matches!(err, ImportError::Validation(_)));
//! ```

pub mod css;
pub mod json;
pub mod validate;

pub use css::{parse_css, parse_css_with};
pub use json::parse_json;
pub use validate::{validate, validate_with};

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::error::ImportError;
use crate::settings::Settings;

/// Which parser an import goes through. Chosen by the user, never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ImportMode {
    /// An export file (`{ "settings": ..., ... }`).
    Json,
    /// CSS or a full embed code.
    Css,
}

/// Parses and validates `input`.
pub fn import(mode: ImportMode, input: &str, config: &EditorConfig) -> Result<Settings, ImportError> {
    let candidate = match mode {
        ImportMode::Json => parse_json(input)?,
        ImportMode::Css => parse_css_with(input, config)?,
    };
    Ok(validate_with(candidate, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::export_settings;
    use crate::error::{ParseError, ValidationError};

    #[test]
    fn json_import_roundtrips() {
        let settings = Settings::default().with_text("Ship It");
        let json = export_settings(&settings).to_json().unwrap();

        let imported = import(ImportMode::Json, &json, &EditorConfig::default()).unwrap();
        assert_eq!(imported, settings);
    }

    #[test]
    fn json_import_is_validated() {
        let mut settings = Settings::default();
        settings.typography.font_weight = 50;
        let json = export_settings(&settings).to_json().unwrap();

        assert_eq!(
            import(ImportMode::Json, &json, &EditorConfig::default()),
            Err(ImportError::Validation(ValidationError::FontWeight(50)))
        );
    }

    #[test]
    fn css_import_uses_config_limits() {
        let config = EditorConfig::default().with_max_text_length(3);
        let embed = crate::embed::emit(&Settings::default().with_text("Long")).embed_code();

        assert_eq!(
            import(ImportMode::Css, &embed, &config),
            Err(ImportError::Validation(ValidationError::TextTooLong { len: 4, max: 3 }))
        );
        assert_eq!(
            import(ImportMode::Css, "p {}", &config),
            Err(ImportError::Parse(ParseError::MissingHeadlineRule))
        );
    }
}
