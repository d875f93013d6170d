//! Per-letter colour for per-letter mode.

use super::fill::gradient_clip;
use super::{Declarations, FillMode, ResolveContext, StyleLayer};
use crate::color::{lerp, parse_hex, rgb_css};
use crate::settings::GradientDirection;

/// Colours one character of the headline.
///
/// Only the gradient-fill mode needs per-letter work; the other modes are
/// inherited from the container.
///
/// - `→` / `←`: the letter gets a solid colour interpolated between the
///   gradient stops by its position (`index / (count - 1)`, reversed for
///   `←`).
/// - `↓` / `↑`: a single glyph cannot show a horizontal position, so each
///   letter is clipped to the full vertical gradient. A vertical gradient
///   spans the line height either way, so this matches the whole-line
///   rendering.
pub struct LetterLayer {
    pub index: usize,
    pub count: usize,
}

impl LetterLayer {
    /// Position of this letter along the gradient, 0..=1.
    pub fn progress(&self, direction: GradientDirection) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let t = self.index as f64 / (self.count - 1) as f64;
        match direction {
            GradientDirection::ToLeft => 1.0 - t,
            _ => t,
        }
    }
}

impl StyleLayer for LetterLayer {
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations) {
        if ctx.fill != FillMode::GradientFill {
            return;
        }
        let gradient = &ctx.settings.gradient;

        if !gradient.direction.is_horizontal() {
            gradient_clip(decls, &gradient.css());
            return;
        }

        match (parse_hex(&gradient.start_color), parse_hex(&gradient.end_color)) {
            (Some(start), Some(end)) => {
                let color = lerp(start, end, self.progress(gradient.direction));
                decls.set("color", rgb_css(color));
            }
            // Not hex: fall back to the nearer stop as given.
            _ => {
                let color = if self.progress(gradient.direction) < 0.5 {
                    &gradient.start_color
                } else {
                    &gradient.end_color
                };
                decls.set("color", color.as_str());
            }
        }
    }
}
