//! headline-studio: headline styling, embed code and settings import
//!
//! This crate turns a serializable [`Settings`] value into a render plan
//! for a live preview and a self-contained `<style>` + `<div>` embed
//! snippet, and reads settings back from export files or CSS.
//!
//! # Example
//!
//! ```
//! use headline_studio::{emit, resolve, FillMode, Settings, StyleType};
//!
//! let mut settings = Settings::default().with_text("Ship It");
//! settings.apply_word_style("It", StyleType::Highlight);
//!
//! // Live preview
//! let plan = resolve(&settings);
//! assert_eq!(plan.fill_mode, FillMode::GradientFill);
//!
//! // Embed code
//! let embed = emit(&settings).embed_code();
//! assert!(embed.contains("<span class=\"word-styling-0\">It</span>"));
//! ```
//!
//! # Import & Export
//!
//! Imports go through a parser and the validator, and are applied by
//! [`HeadlineEditor`] all or nothing:
//!
//! ```
//! use headline_studio::{HeadlineEditor, ImportMode};
//!
//! let mut source = HeadlineEditor::default();
//! source.set_text("Launch Day");
//! let file = source.export_json().unwrap();
//!
//! let mut target = HeadlineEditor::default();
//! target.import(ImportMode::Json, &file).unwrap();
//! assert_eq!(target.settings(), source.settings());
//! ```

mod codec;
mod color;
mod config;
mod editor;
mod embed;
mod error;
mod layer;
mod resolver;
mod settings;
mod store;
mod text;

#[cfg(feature = "tsify")]
mod bindings;

#[cfg(feature = "tsify")]
pub use bindings::EditorHandle;
pub use codec::{import, parse_css, parse_css_with, parse_json, validate, validate_with, ImportMode};
pub use config::EditorConfig;
pub use editor::HeadlineEditor;
pub use embed::{
    emit, emit_plan, emit_with, escape_html, export_settings, export_settings_with,
    EmbedArtifact, WIDGET_CLASS, WORD_CLASS_PREFIX,
};
pub use error::{ImportError, ParseError, ValidationError};
pub use layer::{Declaration, Declarations, FillMode};
pub use resolver::{resolve, resolve_with, Letter, RenderPlan, Segment};
pub use settings::{
    Animation, Effects, ExportData, Gradient, GradientDirection, Settings, StyleType,
    Typography, WordStyle, DEFAULT_BLOCK_COLOR, TRANSPARENT,
};
pub use store::{
    AnimationPatch, EffectsPatch, GradientPatch, HeadlineStore, SettingsPatch, SettingsStore,
    TypographyPatch,
};
pub use text::{tokenize, unique_words, word_key, SegmentKind};
