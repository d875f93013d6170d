//! The settings store and its partial-update commands.
//!
//! A [`SettingsStore`] holds exactly one [`Settings`] value. All writes go
//! through [`SettingsStore::modify`]; the scoped updaters merge a patch
//! into one nested object and leave its siblings alone. Updates are not
//! validated here: controls clamp their own values, and imports are
//! validated before they reach the store.
//!
//! # Example
//!
//! ```
//! use headline_studio::{GradientPatch, HeadlineStore, SettingsStore};
//!
//! let mut store = HeadlineStore::new();
//! let changed = store.update_gradient(GradientPatch {
//!     end_color: Some("#f43f5e".into()),
//!     ..Default::default()
//! });
//!
//! assert!(changed);
//! assert_eq!(store.settings().gradient.end_color, "#f43f5e");
//! assert_eq!(store.settings().gradient.start_color, "#06b6d4");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::settings::{
    Animation, Effects, Gradient, GradientDirection, Settings, Typography, WordStyle,
};

// ============================================================================
// Patches
// ============================================================================

/// Overwrites `slot` if a value is given. Returns true if it changed.
fn merge<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}

/// Partial top-level settings. Given fields replace the whole field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct SettingsPatch {
    pub text: Option<String>,
    pub typography: Option<Typography>,
    pub gradient: Option<Gradient>,
    pub word_styling: Option<Vec<WordStyle>>,
    pub animation: Option<Animation>,
    pub effects: Option<Effects>,
}

impl SettingsPatch {
    /// Replaces the headline text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Replaces the word styling list.
    pub fn word_styling(word_styling: Vec<WordStyle>) -> Self {
        Self {
            word_styling: Some(word_styling),
            ..Self::default()
        }
    }

    pub fn apply_to(self, settings: &mut Settings) -> bool {
        // Non-short-circuiting `|` so every field is merged.
        merge(&mut settings.text, self.text)
            | merge(&mut settings.typography, self.typography)
            | merge(&mut settings.gradient, self.gradient)
            | merge(&mut settings.word_styling, self.word_styling)
            | merge(&mut settings.animation, self.animation)
            | merge(&mut settings.effects, self.effects)
    }
}

/// Partial [`Typography`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct TypographyPatch {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<u16>,
}

impl TypographyPatch {
    pub fn apply_to(self, typography: &mut Typography) -> bool {
        merge(&mut typography.font_size, self.font_size)
            | merge(&mut typography.font_family, self.font_family)
            | merge(&mut typography.font_weight, self.font_weight)
    }
}

/// Partial [`Gradient`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct GradientPatch {
    pub enabled: Option<bool>,
    pub direction: Option<GradientDirection>,
    pub start_color: Option<String>,
    pub end_color: Option<String>,
}

impl GradientPatch {
    pub fn apply_to(self, gradient: &mut Gradient) -> bool {
        merge(&mut gradient.enabled, self.enabled)
            | merge(&mut gradient.direction, self.direction)
            | merge(&mut gradient.start_color, self.start_color)
            | merge(&mut gradient.end_color, self.end_color)
    }
}

/// Partial [`Animation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct AnimationPatch {
    pub fade_in: Option<bool>,
    pub hover_glow: Option<bool>,
    pub per_letter: Option<bool>,
    pub text_shadow: Option<bool>,
    pub outline: Option<bool>,
}

impl AnimationPatch {
    pub fn apply_to(self, animation: &mut Animation) -> bool {
        merge(&mut animation.fade_in, self.fade_in)
            | merge(&mut animation.hover_glow, self.hover_glow)
            | merge(&mut animation.per_letter, self.per_letter)
            | merge(&mut animation.text_shadow, self.text_shadow)
            | merge(&mut animation.outline, self.outline)
    }
}

/// Partial [`Effects`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct EffectsPatch {
    pub text_shadow: Option<String>,
    pub outline_color: Option<String>,
    pub outline_width: Option<f64>,
}

impl EffectsPatch {
    pub fn apply_to(self, effects: &mut Effects) -> bool {
        merge(&mut effects.text_shadow, self.text_shadow)
            | merge(&mut effects.outline_color, self.outline_color)
            | merge(&mut effects.outline_width, self.outline_width)
    }
}

// ============================================================================
// SettingsStore Trait
// ============================================================================

/// A container for one [`Settings`] value with named update commands.
///
/// Implementors provide storage and [`modify`](Self::modify); the
/// commands are built on top of it. Every command returns whether the
/// settings actually changed, and [`revision`](Self::revision) increases
/// exactly when they do.
pub trait SettingsStore {
    /// The current settings.
    fn settings(&self) -> &Settings;

    /// Counter bumped on every effective change.
    fn revision(&self) -> u64;

    /// Runs `edit` on the settings and records the change, if any.
    ///
    /// `scope` names the command for logging.
    fn modify(&mut self, scope: &str, edit: impl FnOnce(&mut Settings) -> bool) -> bool;

    /// Replaces the whole settings value.
    fn replace(&mut self, settings: Settings) -> bool {
        self.modify("replace", |current| merge(current, Some(settings)))
    }

    /// Merges top-level fields.
    fn update(&mut self, patch: SettingsPatch) -> bool {
        self.modify("settings", |s| patch.apply_to(s))
    }

    fn update_typography(&mut self, patch: TypographyPatch) -> bool {
        self.modify("typography", |s| patch.apply_to(&mut s.typography))
    }

    fn update_gradient(&mut self, patch: GradientPatch) -> bool {
        self.modify("gradient", |s| patch.apply_to(&mut s.gradient))
    }

    fn update_animation(&mut self, patch: AnimationPatch) -> bool {
        self.modify("animation", |s| patch.apply_to(&mut s.animation))
    }

    fn update_effects(&mut self, patch: EffectsPatch) -> bool {
        self.modify("effects", |s| patch.apply_to(&mut s.effects))
    }

    /// Restores [`Settings::default`].
    fn reset(&mut self) -> bool {
        self.modify("reset", |current| merge(current, Some(Settings::default())))
    }
}

// ============================================================================
// HeadlineStore
// ============================================================================

/// In-memory [`SettingsStore`].
#[derive(Debug, Clone, Default)]
pub struct HeadlineStore {
    settings: Settings,
    revision: u64,
}

impl HeadlineStore {
    /// Creates a store holding the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            revision: 0,
        }
    }
}

impl SettingsStore for HeadlineStore {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn modify(&mut self, scope: &str, edit: impl FnOnce(&mut Settings) -> bool) -> bool {
        let changed = edit(&mut self.settings);
        if changed {
            self.revision += 1;
            debug!("store: {scope} update, revision {}", self.revision);
        }
        changed
    }
}

// ============================================================================
// Tests
// ============================================================================
