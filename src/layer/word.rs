//! Per-word overlay styles.

use super::{Declarations, ResolveContext, StyleLayer};
use crate::color::with_alpha;
use crate::settings::WordStyle;

const AMBER_PILL: &str = "rgba(251, 191, 36, 0.4)";
const AMBER_GLOW: &str = "0 0 8px rgba(251, 191, 36, 0.3)";
const DEFAULT_UNDERLINE: &str = "#06b6d4";
const WHITE: &str = "#ffffff";

/// Overrides for one styled word, layered over the headline style.
///
/// Applied in order: highlight, underline, block. A block replaces the
/// background of the other two and always paints white text.
pub struct WordOverlay<'a>(pub &'a WordStyle);

impl StyleLayer for WordOverlay<'_> {
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations) {
        let style = self.0;
        let gradient = &ctx.settings.gradient;

        decls.set("display", "inline-block");

        if style.highlight {
            if gradient.enabled {
                decls.set(
                    "background",
                    format!(
                        "linear-gradient(90deg, {}, {})",
                        with_alpha(&gradient.start_color, "40"),
                        with_alpha(&gradient.end_color, "40")
                    ),
                );
                decls.set(
                    "box-shadow",
                    format!(
                        "0 0 8px {}, 0 0 16px {}",
                        with_alpha(&gradient.start_color, "30"),
                        with_alpha(&gradient.end_color, "20")
                    ),
                );
            } else {
                decls.set("background", AMBER_PILL);
                decls.set("box-shadow", AMBER_GLOW);
            }
            decls.set("padding", "2px 6px");
            decls.set("border-radius", "6px");
            solid_white(decls);
        }

        if style.underline {
            let color = if gradient.enabled {
                gradient.end_color.as_str()
            } else {
                DEFAULT_UNDERLINE
            };
            decls.set("text-decoration", "underline");
            decls.set("text-decoration-color", color);
            decls.set("text-decoration-thickness", "3px");
            decls.set("text-underline-offset", "4px");
            decls.set("text-decoration-style", "solid");
            decls.set(
                "filter",
                format!("drop-shadow(0 2px 4px {})", with_alpha(color, "40")),
            );

            // Show the gradient on the word itself, even in outline mode.
            if gradient.enabled {
                decls.set("color", "transparent");
                decls.set("background", gradient.css());
                decls.set("-webkit-background-clip", "text");
                decls.set("background-clip", "text");
                decls.set("-webkit-text-fill-color", "transparent");
            } else {
                decls.set("color", WHITE);
                decls.set("-webkit-text-fill-color", WHITE);
            }
        }

        if style.has_block() {
            if gradient.enabled {
                decls.set(
                    "background",
                    format!(
                        "linear-gradient(135deg, {}, {})",
                        gradient.start_color, gradient.end_color
                    ),
                );
                decls.set(
                    "box-shadow",
                    format!(
                        "0 0 12px {}, 0 0 24px {}",
                        with_alpha(&gradient.start_color, "40"),
                        with_alpha(&gradient.end_color, "30")
                    ),
                );
            } else {
                decls.set("background", style.background_color.as_str());
                decls.set(
                    "box-shadow",
                    format!("0 0 12px {}", with_alpha(&style.background_color, "40")),
                );
            }
            solid_white(decls);
            decls.set("padding", "4px 8px");
            decls.set("border-radius", "8px");
            decls.set("margin", "0 2px");
            decls.set("font-weight", "600");
        }
    }
}

/// White text on an unclipped background.
fn solid_white(decls: &mut Declarations) {
    decls.set("color", WHITE);
    decls.set("-webkit-text-fill-color", WHITE);
    decls.set("-webkit-background-clip", "border-box");
    decls.set("background-clip", "border-box");
}
