//! Settings → render plan.
//!
//! [`resolve`] turns a [`Settings`] value into a [`RenderPlan`]: the
//! headline container style, an optional hover style, and one entry per
//! word/whitespace segment with its overlay and (in per-letter mode) its
//! letters. The plan carries every decision, so a renderer only has to
//! paint it. The live preview and the [embed emitter](crate::emit) both
//! consume the same plan.
//!
//! # Example
//!
//! ```
//! use headline_studio::{resolve, Settings, StyleType};
//!
//! let mut settings = Settings::default().with_text("Ship It");
//! settings.apply_word_style("It", StyleType::Highlight);
//!
//! let plan = resolve(&settings);
//! assert_eq!(plan.segments.len(), 3);
//! assert!(plan.segments[0].overlay.is_none());
//! assert!(plan.segments[2].overlay.is_some());
//! ```

use serde::Serialize;

use crate::config::EditorConfig;
use crate::layer::{
    BaseLayer, Declarations, FillLayer, FillMode, HoverLayer, LetterLayer, ResolveContext,
    WordOverlay,
};
use crate::settings::Settings;
use crate::text::{tokenize, word_key, SegmentKind};

// ============================================================================
// RenderPlan
// ============================================================================

/// Everything needed to paint the headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub fill_mode: FillMode,

    /// Style of the headline element.
    pub container: Declarations,

    /// Style while hovered, when hover glow is on.
    pub hover: Option<Declarations>,

    pub fade_in: bool,
    pub per_letter: bool,

    /// Word and whitespace runs, in text order. Empty for empty text.
    pub segments: Vec<Segment>,
}

/// One word or whitespace run of the headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,

    /// Index of the matching `wordStyling` entry.
    pub word_style: Option<usize>,

    /// Overlay style for a styled word.
    pub overlay: Option<Declarations>,

    /// The segment's characters in per-letter mode, otherwise empty.
    pub letters: Vec<Letter>,
}

/// A single character in per-letter mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub ch: char,
    /// Position among all characters of the headline.
    pub index: usize,
    /// Entrance delay, staggered by `index`.
    pub delay_ms: u32,
    pub style: Declarations,
}

impl Letter {
    /// The character to paint; spaces become non-breaking so they keep
    /// their width as standalone inline blocks.
    pub fn display_char(&self) -> char {
        if self.ch == ' ' { '\u{00A0}' } else { self.ch }
    }
}

impl RenderPlan {
    /// Total number of letters across all segments.
    pub fn letter_count(&self) -> usize {
        self.segments.iter().map(|s| s.letters.len()).sum()
    }

    /// Segments that carry a word overlay.
    pub fn styled_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.overlay.is_some())
    }
}

// ============================================================================
// Resolve
// ============================================================================

/// Resolves `settings` with the default [`EditorConfig`].
pub fn resolve(settings: &Settings) -> RenderPlan {
    resolve_with(settings, &EditorConfig::default())
}

/// Resolves `settings`.
///
/// Pure: equal inputs give equal plans.
pub fn resolve_with(settings: &Settings, config: &EditorConfig) -> RenderPlan {
    let ctx = ResolveContext::new(settings, config);

    let mut container = Declarations::new();
    container.apply(&BaseLayer, &ctx).apply(&FillLayer, &ctx);

    let hover = settings.animation.hover_glow.then(|| {
        let mut hover = Declarations::new();
        hover.apply(&HoverLayer, &ctx);
        hover
    });

    let letter_total = settings.text.chars().count();
    let mut next_letter = 0;

    let segments = tokenize(&settings.text)
        .into_iter()
        .map(|(kind, text)| {
            let word_style = match kind {
                SegmentKind::Word => settings.word_style_index(&word_key(text)),
                SegmentKind::Whitespace => None,
            };
            let overlay = word_style.map(|i| {
                let mut decls = Declarations::new();
                decls.apply(&WordOverlay(&settings.word_styling[i]), &ctx);
                decls
            });

            let letters = if ctx.per_letter() {
                text.chars()
                    .map(|ch| {
                        let index = next_letter;
                        next_letter += 1;
                        let mut style = Declarations::new();
                        // A styled word paints its own text colour.
                        if overlay.is_none() {
                            style.apply(
                                &LetterLayer {
                                    index,
                                    count: letter_total,
                                },
                                &ctx,
                            );
                        }
                        Letter {
                            ch,
                            index,
                            delay_ms: index as u32 * ctx.config.letter_stagger_ms,
                            style,
                        }
                    })
                    .collect()
            } else {
                Vec::new()
            };

            Segment {
                kind,
                text: text.to_string(),
                word_style,
                overlay,
                letters,
            }
        })
        .collect();

    RenderPlan {
        fill_mode: ctx.fill,
        container,
        hover,
        fade_in: settings.animation.fade_in,
        per_letter: settings.animation.per_letter,
        segments,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{GradientDirection, StyleType, WordStyle};

    fn ship_it() -> Settings {
        let mut settings = Settings::default().with_text("Ship It");
        settings.gradient.start_color = "#06b6d4".into();
        settings.gradient.end_color = "#8b5cf6".into();
        settings
    }

    #[test]
    fn empty_text_has_no_segments() {
        let plan = resolve(&Settings::default().with_text(""));
        assert!(plan.segments.is_empty());
        assert!(plan.container.contains("font-size"));
    }

    #[test]
    fn gradient_direction_mapping() {
        let expected = [
            (GradientDirection::ToRight, "to right"),
            (GradientDirection::ToLeft, "to left"),
            (GradientDirection::ToBottom, "to bottom"),
            (GradientDirection::ToTop, "to top"),
        ];
        for (direction, keyword) in expected {
            let mut settings = ship_it();
            settings.gradient.direction = direction;
            let plan = resolve(&settings);
            assert_eq!(
                plan.container.get("background"),
                Some(format!("linear-gradient({keyword}, #06b6d4, #8b5cf6)").as_str())
            );
        }
    }

    #[test]
    fn scenario_gradient_fill() {
        let plan = resolve(&ship_it());

        assert_eq!(plan.fill_mode, FillMode::GradientFill);
        assert_eq!(
            plan.container.get("background"),
            Some("linear-gradient(to right, #06b6d4, #8b5cf6)")
        );
        assert_eq!(plan.container.get("-webkit-background-clip"), Some("text"));
        assert!(!plan.container.contains("-webkit-text-stroke"));
        assert!(!plan.container.contains("text-shadow"));
    }

    #[test]
    fn scenario_gradient_outline() {
        let mut settings = ship_it();
        settings.animation.outline = true;
        settings.effects.outline_width = 2.0;
        let plan = resolve(&settings);

        assert_eq!(plan.fill_mode, FillMode::GradientOutline);
        assert_eq!(plan.container.get("color"), Some("transparent"));
        assert!(!plan.container.contains("background"));
        assert!(!plan.container.contains("-webkit-text-stroke"));

        let shadow = plan.container.get("text-shadow").unwrap();
        let parts: Vec<_> = shadow.split(", ").collect();
        assert_eq!(parts.len(), 8);
        assert_eq!(parts.iter().filter(|p| p.ends_with("#06b6d4")).count(), 4);
        assert_eq!(parts.iter().filter(|p| p.ends_with("#8b5cf6")).count(), 4);
        assert!(parts.iter().all(|p| p.contains("2px")));
    }

    #[test]
    fn scenario_highlight_one_word() {
        let settings = ship_it().with_word_style(WordStyle {
            text: "It".into(),
            highlight: true,
            underline: false,
            background_color: "transparent".into(),
        });
        let plan = resolve(&settings);

        assert_eq!(plan.segments[0].text, "Ship");
        assert!(plan.segments[0].overlay.is_none());
        let overlay = plan.segments[2].overlay.as_ref().unwrap();
        assert_eq!(
            overlay.get("background"),
            Some("linear-gradient(90deg, #06b6d440, #8b5cf640)")
        );
        assert_eq!(overlay.get("border-radius"), Some("6px"));
    }

    #[test]
    fn word_style_matches_every_occurrence() {
        let mut settings = Settings::default().with_text("Go go, Go!");
        settings.apply_word_style("Go", StyleType::Underline);
        let plan = resolve(&settings);

        let styled: Vec<_> = plan.styled_segments().map(|s| s.text.as_str()).collect();
        assert_eq!(styled, vec!["Go", "Go!"]);
    }

    #[test]
    fn resolve_is_deterministic() {
        let mut settings = ship_it();
        settings.animation.per_letter = true;
        settings.animation.hover_glow = true;
        settings.apply_word_style("Ship", StyleType::Block);

        assert_eq!(resolve(&settings), resolve(&settings.clone()));
    }

    #[test]
    fn hover_only_with_glow() {
        let mut settings = ship_it();
        assert!(resolve(&settings).hover.is_none());
        settings.animation.hover_glow = true;
        let plan = resolve(&settings);
        assert!(plan.hover.is_some());
        assert!(plan.container.contains("transition"));
    }

    #[test]
    fn per_letter_staggers_by_global_index() {
        let mut settings = ship_it();
        settings.animation.per_letter = true;
        let plan = resolve(&settings);

        assert_eq!(plan.letter_count(), 7);
        let it = &plan.segments[2];
        assert_eq!(it.letters[0].ch, 'I');
        assert_eq!(it.letters[0].index, 5);
        assert_eq!(it.letters[0].delay_ms, 400);
        assert_eq!(plan.segments[1].letters[0].display_char(), '\u{00A0}');

        // Container leaves the fill to the letters.
        assert!(!plan.container.contains("background"));
        assert_eq!(plan.segments[0].letters[0].style.get("color"), Some("rgb(6, 182, 212)"));
        assert_eq!(it.letters[1].style.get("color"), Some("rgb(139, 92, 246)"));
    }

    #[test]
    fn per_letter_keeps_word_grouping() {
        let mut settings = ship_it();
        settings.animation.per_letter = true;
        settings.apply_word_style("It", StyleType::Block);
        let plan = resolve(&settings);

        let it = &plan.segments[2];
        assert!(it.overlay.is_some());
        assert_eq!(it.letters.len(), 2);
        assert!(it.letters.iter().all(|l| l.style.is_empty()));
        assert_eq!(it.letters[1].delay_ms, 480);
    }

    #[test]
    fn stagger_follows_config() {
        let mut settings = ship_it();
        settings.animation.per_letter = true;
        let config = EditorConfig {
            letter_stagger_ms: 50,
            ..EditorConfig::default()
        };
        let plan = resolve_with(&settings, &config);
        assert_eq!(plan.segments[2].letters[0].delay_ms, 250);
    }
}
