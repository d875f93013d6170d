//! Base text style and hover glow.

use super::{px, Declarations, FillMode, ResolveContext, StyleLayer};
use crate::color::hex_to_rgba;

/// Soft white glow standing in for the text shadow on gradient text.
pub const GRADIENT_SHADOW_FILTER: &str = "drop-shadow(0 0 10px rgba(255, 255, 255, 0.5))";

const SOLID_GLOW: &str = "drop-shadow(0 0 8px rgba(255, 255, 255, 0.8)) \
drop-shadow(0 0 8px rgba(59, 130, 246, 0.6)) drop-shadow(0 0 16px rgba(59, 130, 246, 0.4))";

const HOVER_TRANSITION: &str = "filter 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94), \
transform 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// ============================================================================
// BaseLayer
// ============================================================================

/// Font, shadow effect and solid stroke.
///
/// The shadow toggle maps to `text-shadow` only in the solid modes. A
/// text shadow would show through gradient-clipped glyphs, and in
/// gradient-outline mode `text-shadow` carries the outline itself, so the
/// gradient modes get [`GRADIENT_SHADOW_FILTER`] instead.
pub struct BaseLayer;

impl StyleLayer for BaseLayer {
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations) {
        let settings = ctx.settings;
        let typography = &settings.typography;

        decls.set("font-family", typography.font_family.as_str());
        decls.set("font-size", px(typography.font_size));
        decls.set("font-weight", typography.font_weight.to_string());

        if let Some(filter) = base_filter(ctx) {
            decls.set("filter", filter);
        } else if settings.animation.text_shadow {
            decls.set("text-shadow", settings.effects.text_shadow.as_str());
        }

        if ctx.fill == FillMode::SolidOutline {
            decls.set(
                "-webkit-text-stroke",
                format!(
                    "{} {}",
                    px(settings.effects.outline_width),
                    settings.effects.outline_color
                ),
            );
        }

        if settings.animation.hover_glow {
            decls.set("transition", HOVER_TRANSITION);
        }
    }
}

/// The resting filter, present only for shadowed gradient text.
fn base_filter(ctx: &ResolveContext) -> Option<&'static str> {
    (ctx.fill.uses_gradient() && ctx.settings.animation.text_shadow)
        .then_some(GRADIENT_SHADOW_FILTER)
}

// ============================================================================
// HoverLayer
// ============================================================================

/// The style applied while the headline is hovered.
///
/// Combines the resting filter with a glow in the gradient colours (or a
/// fixed white/blue glow without a gradient) and a slight scale-up.
pub struct HoverLayer;

impl StyleLayer for HoverLayer {
    fn apply(&self, ctx: &ResolveContext, decls: &mut Declarations) {
        let gradient = &ctx.settings.gradient;

        let glow = if gradient.enabled {
            let start = hex_to_rgba(&gradient.start_color, 0.4)
                .unwrap_or_else(|| gradient.start_color.clone());
            let end = hex_to_rgba(&gradient.end_color, 0.3)
                .unwrap_or_else(|| gradient.end_color.clone());
            format!("drop-shadow(0 0 12px {start}) drop-shadow(0 0 18px {end})")
        } else {
            SOLID_GLOW.to_string()
        };

        let filter = match base_filter(ctx) {
            Some(base) => format!("{base} {glow}"),
            None => glow,
        };

        decls.set("filter", filter);
        decls.set("transform", "scale(1.02)");
    }
}
