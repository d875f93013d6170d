//! The editor: commands over an injected settings store.

use log::{debug, info, warn};

use crate::codec::{self, ImportMode};
use crate::config::EditorConfig;
use crate::embed::{emit_with, export_settings_with, EmbedArtifact};
use crate::error::ImportError;
use crate::resolver::{resolve_with, RenderPlan};
use crate::settings::{ExportData, Settings, StyleType};
use crate::store::{HeadlineStore, SettingsStore};
use crate::text::{truncate_chars, unique_words, word_key};

/// The command surface a presentation layer drives.
///
/// Wraps a [`SettingsStore`] and keeps the settings consistent: text is
/// truncated to the configured length, word styles follow the words in
/// the text, and imports are applied whole or not at all.
///
/// # Example
///
/// ```
/// use headline_studio::{EditorConfig, HeadlineEditor, ImportMode, StyleType};
///
/// let mut editor = HeadlineEditor::new(EditorConfig::default());
/// editor.set_text("Launch Day");
/// editor.apply_word_style("Launch", StyleType::Highlight);
///
/// editor.set_text("Release Day");
/// assert!(editor.settings().word_style("Launch").is_none());
///
/// assert!(editor.import(ImportMode::Json, "{}").is_err());
/// assert_eq!(editor.settings().text, "Release Day");
/// ```
pub struct HeadlineEditor<S: SettingsStore = HeadlineStore> {
    store: S,
    config: EditorConfig,
    /// Last resolved plan and the store revision it was built from.
    plan: Option<(u64, RenderPlan)>,
}

impl HeadlineEditor {
    /// Creates an editor over a fresh in-memory store.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_store(HeadlineStore::new(), config)
    }
}

impl Default for HeadlineEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<S: SettingsStore> HeadlineEditor<S> {
    /// Creates an editor over `store`.
    pub fn with_store(store: S, config: EditorConfig) -> Self {
        Self {
            store,
            config,
            plan: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The store, for the scoped control updates (sliders, toggles).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ---- Text & Words ----

    /// Sets the headline text, truncated to `maxTextLength` characters,
    /// and drops word styles whose word is gone.
    pub fn set_text(&mut self, text: &str) -> bool {
        let text = truncate_chars(text, self.config.max_text_length);
        self.store.modify("text", |settings| {
            let mut changed = settings.text != text;
            if changed {
                settings.text = text.to_string();
            }
            changed |= settings.prune_word_styling() > 0;
            changed
        })
    }

    /// The distinct styleable words of the headline.
    pub fn words(&self) -> Vec<String> {
        unique_words(&self.settings().text)
    }

    /// Styles `word`. Punctuation is ignored; words not in the text are
    /// rejected.
    pub fn apply_word_style(&mut self, word: &str, style: StyleType) -> bool {
        let key = word_key(word);
        if !self.words().contains(&key) {
            debug!("editor: {word:?} is not a word of the headline");
            return false;
        }
        self.store.modify("word styling", |settings| {
            let before = settings.word_styling.clone();
            settings.apply_word_style(&key, style);
            settings.word_styling != before
        })
    }

    /// Removes the style of `word`.
    pub fn remove_word_style(&mut self, word: &str) -> bool {
        let key = word_key(word);
        self.store
            .modify("word styling", |settings| settings.remove_word_style(&key))
    }

    // ---- Import & Export ----

    /// Parses, validates and applies `input`. On error nothing changes.
    pub fn import(&mut self, mode: ImportMode, input: &str) -> Result<(), ImportError> {
        match codec::import(mode, input, &self.config) {
            Ok(settings) => {
                self.store.replace(settings);
                info!("editor: imported settings ({mode:?})");
                Ok(())
            }
            Err(err) => {
                warn!("editor: rejected {mode:?} import: {err}");
                Err(err)
            }
        }
    }

    /// The export file for the current settings.
    pub fn export(&self) -> ExportData {
        export_settings_with(self.settings(), &self.config)
    }

    /// The export file as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.export().to_json_pretty()
    }

    /// The embed code for the current settings.
    pub fn embed(&self) -> EmbedArtifact {
        emit_with(self.settings(), &self.config)
    }

    // ---- Rendering ----

    /// The render plan for the current settings.
    ///
    /// Resolved at most once per store revision.
    pub fn render_plan(&mut self) -> &RenderPlan {
        let revision = self.store.revision();
        if !self.plan.as_ref().is_some_and(|(r, _)| *r == revision) {
            self.plan = None;
        }
        let (_, plan) = self
            .plan
            .get_or_insert_with(|| (revision, resolve_with(self.store.settings(), &self.config)));
        plan
    }

    /// Restores the default settings.
    pub fn reset(&mut self) -> bool {
        let changed = self.store.reset();
        if changed {
            info!("editor: settings reset");
        }
        changed
    }
}
