//! Style layers for headline rendering.
//!
//! The resolver builds every style in the render plan by running a fixed
//! sequence of layers over a [`Declarations`] list. Each layer is a small
//! type implementing [`StyleLayer`] that reads the [`ResolveContext`] and
//! writes (or overwrites) the CSS properties it owns.
//!
//! # Architecture
//!
//! - [`BaseLayer`]: font, effect shadow, solid stroke, hover transition
//! - [`FillLayer`]: the headline fill for the active [`FillMode`]
//! - [`HoverLayer`]: the hover-glow style
//! - [`LetterLayer`]: per-letter colour in per-letter mode
//! - [`WordOverlay`]: highlight / underline / block overrides for a word
//!
//! The fill mode is computed once per resolve and carried in the context,
//! so every layer branches on the same tag.

pub mod base;
pub mod fill;
pub mod letter;
pub mod word;

pub use base::{BaseLayer, HoverLayer};
pub use fill::{FillLayer, FillMode};
pub use letter::LetterLayer;
pub use word::WordOverlay;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::EditorConfig;
use crate::settings::Settings;

// ============================================================================
// Declarations
// ============================================================================

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// An ordered list of CSS declarations with unique property names.
///
/// Setting a property that is already present replaces its value in
/// place, so later layers override earlier ones without reordering.
/// Serializes as an ordered `{ property: value }` map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declarations(Vec<Declaration>);

impl Declarations {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing any previous value.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.0.push(Declaration { property, value }),
        }
    }

    /// Returns the value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Checks if `property` is set.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter()
    }

    /// Runs `layer` over this list.
    pub fn apply(&mut self, layer: &impl StyleLayer, ctx: &ResolveContext) -> &mut Self {
        layer.apply(ctx, self);
        self
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for d in &self.0 {
            map.serialize_entry(d.property, &d.value)?;
        }
        map.end()
    }
}

// ============================================================================
// Resolve Context
// ============================================================================

/// Inputs shared by every layer during one resolve.
pub struct ResolveContext<'a> {
    pub settings: &'a Settings,
    pub config: &'a EditorConfig,
    /// Computed once from the gradient and outline toggles.
    pub fill: FillMode,
}

impl<'a> ResolveContext<'a> {
    pub fn new(settings: &'a Settings, config: &'a EditorConfig) -> Self {
        Self {
            settings,
            config,
            fill: FillMode::from_settings(settings),
        }
    }

    /// True when each character is rendered as its own unit.
    pub fn per_letter(&self) -> bool {
        self.settings.animation.per_letter
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A stage that contributes declarations to a style.
pub trait StyleLayer {
    /// Writes this layer's declarations into `decls`.
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations);
}

/// Formats a px length, printing zero without a sign.
pub(crate) fn px(value: f64) -> String {
    if value == 0.0 {
        "0px".into()
    } else {
        format!("{value}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut decls = Declarations::new();
        decls.set("color", "#ffffff");
        decls.set("font-size", "56px");
        decls.set("color", "transparent");

        let props: Vec<_> = decls.iter().map(|d| d.property).collect();
        assert_eq!(props, vec!["color", "font-size"]);
        assert_eq!(decls.get("color"), Some("transparent"));
    }

    #[test]
    fn serializes_as_ordered_map() {
        let mut decls = Declarations::new();
        decls.set("font-weight", "700");
        decls.set("color", "#ffffff");

        let json = serde_json::to_string(&decls).unwrap();
        assert_eq!(json, r##"{"font-weight":"700","color":"#ffffff"}"##);
    }

    #[test]
    fn px_formatting() {
        assert_eq!(px(1.0), "1px");
        assert_eq!(px(2.5), "2.5px");
        assert_eq!(px(-3.0), "-3px");
        assert_eq!(px(-0.0), "0px");
    }
}
