//! JavaScript bindings for the editor.
//!
//! [`EditorHandle`] wraps a [`HeadlineEditor`] for a web frontend. Settings
//! and patches cross the boundary as typed objects (via `tsify`); the
//! render plan goes through `serde-wasm-bindgen`.
//!
//! # Feature Flag
//!
//! Only available with the `tsify` feature:
//!
//! ```toml
//! [dependencies]
//! headline-studio = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { EditorHandle } from 'headline-studio';
//!
//! await init();
//!
//! const editor = new EditorHandle();
//! editor.setText("Ship It");
//! editor.applyWordStyle("It", "highlight");
//! editor.updateGradient({ direction: "↓" });
//!
//! const plan = editor.renderPlan();
//! const embed = editor.embedCode();
//! ```

use wasm_bindgen::prelude::*;

use crate::codec::ImportMode;
use crate::config::EditorConfig;
use crate::editor::HeadlineEditor;
use crate::settings::{Settings, StyleType};
use crate::store::{AnimationPatch, EffectsPatch, GradientPatch, SettingsStore, TypographyPatch};

/// A [`HeadlineEditor`] exposed to JavaScript.
#[wasm_bindgen]
pub struct EditorHandle {
    editor: HeadlineEditor,
}

#[wasm_bindgen]
impl EditorHandle {
    /// Creates an editor with the default config.
    #[wasm_bindgen(constructor)]
    pub fn new() -> EditorHandle {
        Self {
            editor: HeadlineEditor::default(),
        }
    }

    /// Creates an editor from a (partial) config JSON string.
    #[wasm_bindgen(js_name = "withConfigJson")]
    pub fn with_config_json(json: &str) -> Result<EditorHandle, JsError> {
        let config = EditorConfig::from_json(json)
            .map_err(|e| JsError::new(&format!("Failed to parse config: {}", e)))?;
        Ok(Self {
            editor: HeadlineEditor::new(config),
        })
    }

    /// The current settings.
    pub fn settings(&self) -> Settings {
        self.editor.settings().clone()
    }

    /// The store revision; changes whenever the settings do.
    pub fn revision(&self) -> f64 {
        self.editor.store().revision() as f64
    }

    // ---- Commands ----

    #[wasm_bindgen(js_name = "setText")]
    pub fn set_text(&mut self, text: &str) -> bool {
        self.editor.set_text(text)
    }

    /// The distinct styleable words of the headline.
    pub fn words(&self) -> Vec<String> {
        self.editor.words()
    }

    #[wasm_bindgen(js_name = "applyWordStyle")]
    pub fn apply_word_style(&mut self, word: &str, style: StyleType) -> bool {
        self.editor.apply_word_style(word, style)
    }

    #[wasm_bindgen(js_name = "removeWordStyle")]
    pub fn remove_word_style(&mut self, word: &str) -> bool {
        self.editor.remove_word_style(word)
    }

    #[wasm_bindgen(js_name = "updateTypography")]
    pub fn update_typography(&mut self, patch: TypographyPatch) -> bool {
        self.editor.store_mut().update_typography(patch)
    }

    #[wasm_bindgen(js_name = "updateGradient")]
    pub fn update_gradient(&mut self, patch: GradientPatch) -> bool {
        self.editor.store_mut().update_gradient(patch)
    }

    #[wasm_bindgen(js_name = "updateAnimation")]
    pub fn update_animation(&mut self, patch: AnimationPatch) -> bool {
        self.editor.store_mut().update_animation(patch)
    }

    #[wasm_bindgen(js_name = "updateEffects")]
    pub fn update_effects(&mut self, patch: EffectsPatch) -> bool {
        self.editor.store_mut().update_effects(patch)
    }

    pub fn reset(&mut self) -> bool {
        self.editor.reset()
    }

    // ---- Rendering ----

    /// The render plan for the live preview.
    #[wasm_bindgen(js_name = "renderPlan")]
    pub fn render_plan(&mut self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.editor.render_plan())
            .map_err(|e| JsError::new(&format!("Failed to serialize render plan: {}", e)))
    }

    /// The `<style>` + `<div>` embed code.
    #[wasm_bindgen(js_name = "embedCode")]
    pub fn embed_code(&self) -> String {
        self.editor.embed().embed_code()
    }

    // ---- Import/Export ----

    /// The export file as a JSON string.
    #[wasm_bindgen(js_name = "exportJson")]
    pub fn export_json(&self) -> Result<String, JsError> {
        self.editor
            .export_json()
            .map_err(|e| JsError::new(&format!("Failed to serialize export: {}", e)))
    }

    /// Imports an export file (`"json"`) or CSS (`"css"`).
    ///
    /// Throws with the parse or validation message; nothing changes then.
    pub fn import(&mut self, mode: ImportMode, input: &str) -> Result<(), JsError> {
        self.editor
            .import(mode, input)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}
