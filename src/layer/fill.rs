//! Headline fill: solid, gradient-clipped, or outlined.

use serde::Serialize;

use super::{px, Declarations, ResolveContext, StyleLayer};
use crate::settings::{Gradient, Settings};

/// Solid text colour when no gradient is active.
pub const SOLID_TEXT_COLOR: &str = "#ffffff";

// ============================================================================
// FillMode
// ============================================================================

/// How the glyphs of the headline are painted.
///
/// Exactly one mode applies per resolve. A stroke and a gradient fill
/// never coexist: with the gradient on, the outline is synthesized from
/// shadows instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FillMode {
    /// Opaque white text.
    SolidFill,
    /// Linear gradient clipped to the glyphs.
    GradientFill,
    /// Transparent text ringed by eight shadows in the gradient colours.
    GradientOutline,
    /// Transparent text with a solid `-webkit-text-stroke`.
    SolidOutline,
}

impl FillMode {
    pub fn from_settings(settings: &Settings) -> Self {
        match (settings.gradient.enabled, settings.animation.outline) {
            (false, false) => Self::SolidFill,
            (true, false) => Self::GradientFill,
            (true, true) => Self::GradientOutline,
            (false, true) => Self::SolidOutline,
        }
    }

    /// True for the two modes driven by the gradient colours.
    pub fn uses_gradient(self) -> bool {
        matches!(self, Self::GradientFill | Self::GradientOutline)
    }
}

// ============================================================================
// FillLayer
// ============================================================================

/// Writes the container fill for the active [`FillMode`].
///
/// In per-letter mode the gradient fill moves onto the letters (see
/// [`LetterLayer`](super::LetterLayer)), so the container only keeps the
/// fill for the other three modes.
pub struct FillLayer;

impl StyleLayer for FillLayer {
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations) {
        let settings = ctx.settings;
        match ctx.fill {
            FillMode::SolidFill => {
                decls.set("color", SOLID_TEXT_COLOR);
            }
            FillMode::SolidOutline => {
                decls.set("color", "transparent");
            }
            FillMode::GradientFill if ctx.per_letter() => {}
            FillMode::GradientFill => {
                gradient_clip(decls, &settings.gradient.css());
            }
            FillMode::GradientOutline => {
                decls.set("color", "transparent");
                decls.set("-webkit-text-fill-color", "transparent");
                decls.set(
                    "text-shadow",
                    outline_shadow(&settings.gradient, settings.effects.outline_width),
                );
            }
        }
    }
}

/// Clips `background` to the glyphs and hides the text colour.
pub(crate) fn gradient_clip(decls: &mut Declarations, background: &str) {
    decls.set("color", "transparent");
    decls.set("background", background);
    decls.set("-webkit-background-clip", "text");
    decls.set("background-clip", "text");
    decls.set("-webkit-text-fill-color", "transparent");
}

/// Offsets of the synthesized outline, as unit steps.
///
/// The first four (top row and left) take the start colour, the last four
/// (right and bottom row) the end colour.
pub const OUTLINE_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Builds the eight-shadow gradient outline at `width` px.
pub fn outline_shadow(gradient: &Gradient, width: f64) -> String {
    OUTLINE_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, &(dx, dy))| {
            let color = if i < 4 {
                &gradient.start_color
            } else {
                &gradient.end_color
            };
            format!(
                "{} {} 0 {}",
                px(dx as f64 * width),
                px(dy as f64 * width),
                color
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
