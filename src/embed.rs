//! Embed code: a self-contained `<style>` + `<div>` pair.
//!
//! The emitter prints a [`RenderPlan`], so every branch of the resolver
//! has a matching CSS rule. Only literal values are written; the snippet
//! has no dependency on the host page.
//!
//! # Output
//!
//! ```text
//! <style>
//! .headline-widget { ...container... }
//! .headline-widget:hover { ...glow... }          (hover glow)
//! .word-styling-<i> { ...overlay... }            (per styled word)
//! @keyframes fadeIn { ... }                      (fade-in)
//! .headline-widget .letter { ... }               (per-letter)
//! .headline-widget .letter-<n> { ... }           (per-letter, bounded)
//! </style><div class="headline-widget">...</div>
//! ```

use std::fmt::Write;

use crate::config::EditorConfig;
use crate::layer::Declarations;
use crate::resolver::{resolve_with, RenderPlan, Segment};
use crate::settings::{ExportData, Settings};

/// Class of the headline element.
pub const WIDGET_CLASS: &str = "headline-widget";

/// Class prefix of styled words; the suffix is the `wordStyling` index.
pub const WORD_CLASS_PREFIX: &str = "word-styling-";

/// Characters that could end a declaration, a rule or the `<style>` element.
pub(crate) const CSS_BREAKOUT_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

const FADE_IN_KEYFRAMES: &str = "@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}
";

const LETTER_KEYFRAMES: &str = "@keyframes letterFadeIn {
  from { opacity: 0; transform: translateY(20px) scale(0.8); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}
";

// ============================================================================
// EmbedArtifact
// ============================================================================

/// The emitted CSS and its matching HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmbedArtifact {
    pub css: String,
    /// The `<div class="headline-widget">` element.
    pub html: String,
}

impl EmbedArtifact {
    /// `<style>css</style>html`, ready to paste into a page.
    pub fn embed_code(&self) -> String {
        format!("<style>\n{}</style>{}", self.css, self.html)
    }
}

// ============================================================================
// Emit
// ============================================================================

/// Emits the embed code for `settings` with the default config.
pub fn emit(settings: &Settings) -> EmbedArtifact {
    emit_with(settings, &EditorConfig::default())
}

/// Emits the embed code for `settings`.
pub fn emit_with(settings: &Settings, config: &EditorConfig) -> EmbedArtifact {
    emit_plan(&resolve_with(settings, config), config)
}

/// Prints an already resolved plan.
pub fn emit_plan(plan: &RenderPlan, config: &EditorConfig) -> EmbedArtifact {
    EmbedArtifact {
        css: plan_css(plan, config),
        html: plan_html(plan),
    }
}

fn plan_css(plan: &RenderPlan, config: &EditorConfig) -> String {
    let mut css = String::new();
    let widget = format!(".{WIDGET_CLASS}");

    let mut container = plan.container.clone();
    if plan.fade_in && !plan.per_letter {
        container.set("animation", "fadeIn 0.8s ease-in");
    }
    write_rule(&mut css, &widget, &container);

    if let Some(hover) = &plan.hover {
        write_rule(&mut css, &format!("{widget}:hover"), hover);
    }

    // One rule per wordStyling entry that actually occurs.
    let mut written: Vec<usize> = Vec::new();
    for segment in plan.segments.iter() {
        if let (Some(index), Some(overlay)) = (segment.word_style, &segment.overlay) {
            if !written.contains(&index) {
                written.push(index);
                write_rule(&mut css, &format!(".{WORD_CLASS_PREFIX}{index}"), overlay);
            }
        }
    }

    if plan.fade_in && !plan.per_letter {
        css.push_str(FADE_IN_KEYFRAMES);
    }

    if plan.per_letter {
        let mut letter = Declarations::new();
        letter.set("display", "inline-block");
        letter.set("opacity", "0");
        letter.set("animation", "letterFadeIn 0.6s ease-out forwards");
        write_rule(&mut css, &format!("{widget} .letter"), &letter);
        css.push_str(LETTER_KEYFRAMES);

        for l in plan.segments.iter().flat_map(|s| s.letters.iter()) {
            let mut decls = l.style.clone();
            if l.index < config.max_staggered_letters {
                decls.set("animation-delay", seconds(l.delay_ms));
            }
            if !decls.is_empty() {
                write_rule(&mut css, &format!("{widget} .letter-{}", l.index), &decls);
            }
        }
    }

    css
}

fn plan_html(plan: &RenderPlan) -> String {
    let mut html = format!("<div class=\"{WIDGET_CLASS}\">");
    for segment in &plan.segments {
        let inner = segment_html(segment, plan.per_letter);
        match segment.word_style {
            Some(index) if segment.overlay.is_some() => {
                let _ = write!(html, "<span class=\"{WORD_CLASS_PREFIX}{index}\">{inner}</span>");
            }
            _ => html.push_str(&inner),
        }
    }
    html.push_str("</div>");
    html
}

fn segment_html(segment: &Segment, per_letter: bool) -> String {
    if !per_letter {
        return escape_html(&segment.text);
    }
    let mut out = String::new();
    for letter in &segment.letters {
        let text = match letter.display_char() {
            '\u{00A0}' => "&nbsp;".to_string(),
            ch => escape_html(ch.encode_utf8(&mut [0; 4])),
        };
        let _ = write!(out, "<span class=\"letter letter-{}\">{text}</span>", letter.index);
    }
    out
}

/// Writes one rule. Values are stripped of [`CSS_BREAKOUT_CHARS`], so
/// settings that skipped validation stay inside their declaration.
fn write_rule(css: &mut String, selector: &str, decls: &Declarations) {
    let _ = writeln!(css, "{selector} {{");
    for d in decls {
        let value: String = d.value.chars().filter(|c| !CSS_BREAKOUT_CHARS.contains(c)).collect();
        let _ = writeln!(css, "  {}: {};", d.property, value);
    }
    css.push_str("}\n");
}

fn seconds(ms: u32) -> String {
    format!("{}s", ms as f64 / 1000.0)
}

/// Escapes text for use inside an HTML element.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ============================================================================
// Export
// ============================================================================

/// Builds the export file for `settings`, stamped with the current time.
pub fn export_settings(settings: &Settings) -> ExportData {
    export_settings_with(settings, &EditorConfig::default())
}

/// Builds the export file for `settings`.
pub fn export_settings_with(settings: &Settings, config: &EditorConfig) -> ExportData {
    ExportData {
        settings: settings.clone(),
        embed_code: emit_with(settings, config).embed_code(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }
}

// ============================================================================
// Tests
// ============================================================================
