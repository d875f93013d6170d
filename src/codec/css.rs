//! Best-effort CSS import.
//!
//! Reads settings back out of CSS shaped like the embed emitter's output.
//! This is pattern matching over known declarations, not a CSS parser:
//! any field that can't be found keeps its default, and the animation
//! flags are guessed from telltale substrings.
//!
//! Known losses:
//!
//! - the gradient direction always comes back as `→`;
//! - without the embed's `<div>` the headline text is unknown and the
//!   configured placeholder is used;
//! - a word styled both as highlight and block reads back as block only;
//! - per-letter embeds animate every letter whether or not fade-in is on,
//!   so `fadeIn` keeps its default there.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use palette::Srgb;

use crate::color::{is_hex, normalize, parse_hex, to_hex};
use crate::config::EditorConfig;
use crate::error::ParseError;
use crate::settings::{
    Animation, Gradient, GradientDirection, Settings, WordStyle, DEFAULT_BLOCK_COLOR, TRANSPARENT,
};
use crate::text::word_key;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static CSS import pattern")
}

static HEADLINE_RULE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\.headline-widget\s*\{([^}]*)\}"));
static LOOSE_HEADLINE_RULE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\.headline-widget[^{}]*\{([^}]*)\}"));
static PX_VALUE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\d+(?:\.\d+)?)px$"));
static STROKE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(\d+(?:\.\d+)?)px\s+(.+)$"));
static SHADOW_STEP: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(-?\d+(?:\.\d+)?)px\s+(-?\d+(?:\.\d+)?)px\s+0(?:px)?\s+(.+)$")
});
static LINEAR_GRADIENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^linear-gradient\((.*)\)$"));
static LETTER_RULE: LazyLock<Regex> = LazyLock::new(|| compile(r"\.letter-(\d+)\s*\{([^}]*)\}"));
static LETTER_CLASS: LazyLock<Regex> = LazyLock::new(|| compile(r"\.letter\b"));
static WORD_RULE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\.word-styling-(\d+)\s*\{([^}]*)\}"));
static WIDGET_DIV: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?s)<div class="headline-widget">(.*)</div>"#));
static LETTER_SPAN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?s)<span class="letter letter-\d+">(.*?)</span>"#));
static WORD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?s)<span class="word-styling-(\d+)">(.*?)</span>"#));
static TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>"));

/// Parses CSS with the default config.
pub fn parse_css(input: &str) -> Result<Settings, ParseError> {
    parse_css_with(input, &EditorConfig::default())
}

/// Parses CSS (or a whole embed code) into settings.
///
/// Fails only when there is no `.headline-widget` rule at all.
pub fn parse_css_with(input: &str, config: &EditorConfig) -> Result<Settings, ParseError> {
    let widget = WIDGET_DIV.captures(input);
    let stylesheet = match widget.as_ref().and_then(|caps| caps.get(0)) {
        Some(div) => &input[..div.start()],
        None => input,
    };

    let body = headline_rule(stylesheet).ok_or(ParseError::MissingHeadlineRule)?;
    let decls = declarations(body);
    let letter_count = widget
        .as_ref()
        .and_then(|caps| caps.get(1))
        .map(|markup| LETTER_SPAN.find_iter(markup.as_str()).count())
        .filter(|count| *count > 0);

    let mut settings = Settings::default().with_text(config.import_placeholder_text.clone());
    read_typography(&decls, &mut settings);
    read_fill(&decls, stylesheet, letter_count, &mut settings);
    read_flags(stylesheet, &mut settings);

    match widget.as_ref().and_then(|caps| caps.get(1)) {
        Some(markup) => read_markup(markup.as_str(), stylesheet, &mut settings),
        None => debug!("css import: no headline markup, using placeholder text"),
    }

    Ok(settings)
}

fn headline_rule(stylesheet: &str) -> Option<&str> {
    HEADLINE_RULE
        .captures(stylesheet)
        .or_else(|| LOOSE_HEADLINE_RULE.captures(stylesheet))
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}

// ============================================================================
// Fields
// ============================================================================

fn read_typography(decls: &[(&str, &str)], settings: &mut Settings) {
    let typography = &mut settings.typography;

    match value(decls, "font-family") {
        Some(family) => typography.font_family = family.to_string(),
        None => debug!("css import: no font-family, using {:?}", typography.font_family),
    }

    match value(decls, "font-size").and_then(px_value) {
        Some(size) => typography.font_size = size,
        None => debug!("css import: no px font-size, using {}", typography.font_size),
    }

    match value(decls, "font-weight").and_then(|w| w.parse::<u16>().ok()) {
        Some(weight) => typography.font_weight = weight,
        None => debug!("css import: no numeric font-weight, using {}", typography.font_weight),
    }
}

fn read_fill(
    decls: &[(&str, &str)],
    stylesheet: &str,
    letter_count: Option<usize>,
    settings: &mut Settings,
) {
    settings.gradient.enabled = false;

    let background = value(decls, "background").or_else(|| value(decls, "background-image"));
    let stops = background
        .and_then(gradient_stops)
        .or_else(|| letter_gradient(stylesheet, letter_count));
    match stops {
        Some((start, end)) => enable_gradient(&mut settings.gradient, start, end),
        None => debug!("css import: no linear-gradient, gradient disabled"),
    }

    if let Some(stroke) = value(decls, "-webkit-text-stroke") {
        match STROKE.captures(stroke) {
            Some(caps) => {
                settings.animation.outline = true;
                settings.effects.outline_width = caps[1].parse().unwrap_or(1.0);
                settings.effects.outline_color = normalize(&caps[2]);
            }
            None => debug!("css import: unreadable -webkit-text-stroke {stroke:?}"),
        }
    }

    if let Some(shadow) = value(decls, "text-shadow") {
        match outline_from_shadow(shadow) {
            Some((width, start, end)) => {
                enable_gradient(&mut settings.gradient, start, end);
                settings.animation.outline = true;
                settings.effects.outline_width = width;
            }
            None => {
                settings.animation.text_shadow = true;
                settings.effects.text_shadow = shadow.to_string();
            }
        }
    }

    // Gradient text carries its shadow as a filter.
    if value(decls, "filter").is_some_and(|f| f.contains("drop-shadow")) {
        settings.animation.text_shadow = true;
    }
}

fn enable_gradient(gradient: &mut Gradient, start: String, end: String) {
    gradient.enabled = true;
    gradient.direction = GradientDirection::ToRight;
    gradient.start_color = start;
    gradient.end_color = end;
}

fn read_flags(stylesheet: &str, settings: &mut Settings) {
    let animation = &mut settings.animation;

    animation.per_letter = stylesheet.contains("letterFadeIn")
        || LETTER_CLASS.is_match(stylesheet)
        || (stylesheet.contains("span") && stylesheet.contains("animation"));
    if animation.per_letter {
        animation.fade_in = Animation::default().fade_in;
    } else {
        animation.fade_in = stylesheet.contains("fadeIn");
    }
    animation.hover_glow = stylesheet.contains(":hover");
}

/// Recovers the headline text and word styling from the embed markup.
fn read_markup(markup: &str, stylesheet: &str, settings: &mut Settings) {
    let markup = LETTER_SPAN.replace_all(markup, "${1}");

    let mut word_styling: Vec<WordStyle> = Vec::new();
    for caps in WORD_SPAN.captures_iter(&markup) {
        let key = word_key(&decode_entities(&TAG.replace_all(&caps[2], "")));
        if key.is_empty() || word_styling.iter().any(|s| s.text == key) {
            continue;
        }
        match word_rule(stylesheet, &caps[1]).and_then(|rule| word_style_from_rule(&key, rule)) {
            Some(style) => word_styling.push(style),
            None => debug!("css import: no usable rule for word-styling-{}", &caps[1]),
        }
    }

    settings.text = decode_entities(&TAG.replace_all(&markup, ""));
    settings.word_styling = word_styling;
}

fn word_rule<'a>(stylesheet: &'a str, index: &str) -> Option<&'a str> {
    WORD_RULE
        .captures_iter(stylesheet)
        .find(|caps| &caps[1] == index)
        .and_then(|caps| caps.get(2))
        .map(|body| body.as_str())
}

fn word_style_from_rule(key: &str, rule: &str) -> Option<WordStyle> {
    let decls = declarations(rule);
    let padding = value(&decls, "padding");

    let block = padding == Some("4px 8px");
    let highlight = padding == Some("2px 6px");
    let underline = value(&decls, "text-decoration") == Some("underline");
    if !(block || highlight || underline) {
        return None;
    }

    // A gradient block stores the default colour; only a flat one is kept.
    let background_color = if block {
        value(&decls, "background")
            .map(normalize)
            .filter(|c| is_hex(c))
            .unwrap_or_else(|| DEFAULT_BLOCK_COLOR.to_string())
    } else {
        TRANSPARENT.to_string()
    };

    Some(WordStyle {
        text: key.to_string(),
        highlight,
        underline,
        background_color,
    })
}

// ============================================================================
// Values
// ============================================================================

/// Splits a rule body into `(property, value)` pairs.
fn declarations(body: &str) -> Vec<(&str, &str)> {
    body.split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            (!property.is_empty() && !value.is_empty()).then_some((property, value))
        })
        .collect()
}

/// The last value declared for `property`.
fn value<'a>(decls: &[(&'a str, &'a str)], property: &str) -> Option<&'a str> {
    decls
        .iter()
        .rev()
        .find(|(p, _)| p.eq_ignore_ascii_case(property))
        .map(|(_, v)| *v)
}

fn px_value(value: &str) -> Option<f64> {
    PX_VALUE.captures(value)?[1].parse().ok()
}

/// Splits on commas that are not inside parentheses.
fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(value[start..].trim());
    parts
}

/// The two colour stops of a `linear-gradient(...)`, ignoring its direction.
fn gradient_stops(value: &str) -> Option<(String, String)> {
    let caps = LINEAR_GRADIENT.captures(value.trim())?;
    let parts = split_top_level(caps.get(1)?.as_str());
    match parts[..] {
        [start, end] | [_, start, end] => Some((stop_color(start), stop_color(end))),
        _ => {
            debug!("css import: expected two gradient stops in {value:?}");
            None
        }
    }
}

/// The colour of a stop, dropping any position (`red 10%` → `#ff0000`).
fn stop_color(stop: &str) -> String {
    let color = match stop.find(')') {
        Some(end) => &stop[..=end],
        None => stop.split_whitespace().next().unwrap_or(stop),
    };
    normalize(color)
}

/// Recognises the eight-shadow gradient outline.
///
/// Returns the outline width and the first and last shadow colours.
fn outline_from_shadow(shadow: &str) -> Option<(f64, String, String)> {
    let parts = split_top_level(shadow);
    if parts.len() != 8 {
        return None;
    }

    let mut steps = Vec::with_capacity(8);
    for part in parts {
        let caps = SHADOW_STEP.captures(part)?;
        let x: f64 = caps[1].parse().ok()?;
        let y: f64 = caps[2].parse().ok()?;
        steps.push((x, y, caps[3].to_string()));
    }

    let width = steps[0].0.abs();
    let on_ring = |d: f64| d == 0.0 || d.abs() == width;
    if !steps.iter().all(|(x, y, _)| on_ring(*x) && on_ring(*y)) {
        return None;
    }

    Some((width, normalize(&steps[0].2), normalize(&steps[7].2)))
}

/// Start and end colours read off the per-letter colour rules.
///
/// Letters inside styled words carry no colour, so the stops are
/// extrapolated from the outermost coloured letters and their positions
/// among `letter_count` letters. Without a count the highest rule index
/// stands in.
fn letter_gradient(stylesheet: &str, letter_count: Option<usize>) -> Option<(String, String)> {
    let mut colors: Vec<(usize, Srgb<u8>)> = Vec::new();
    let mut highest = 0;

    for caps in LETTER_RULE.captures_iter(stylesheet) {
        let decls = declarations(caps.get(2).map_or("", |m| m.as_str()));
        // Vertical gradients clip each letter to the whole gradient.
        if let Some(stops) = value(&decls, "background").and_then(gradient_stops) {
            return Some(stops);
        }
        let Ok(index) = caps[1].parse::<usize>() else {
            continue;
        };
        highest = highest.max(index);
        if let Some(color) = value(&decls, "color").and_then(|c| parse_hex(&normalize(c))) {
            colors.push((index, color));
        }
    }

    let (first, start) = *colors.iter().min_by_key(|(i, _)| *i)?;
    let (last, end) = *colors.iter().max_by_key(|(i, _)| *i)?;
    let count = letter_count.unwrap_or(highest + 1);
    if first == last || count < 2 {
        return Some((to_hex(start), to_hex(end)));
    }

    let span = (count - 1) as f64;
    let (t0, t1) = (first as f64 / span, last as f64 / span);
    let stop = |t: f64| {
        let channel = |a: u8, b: u8| {
            let slope = (b as f64 - a as f64) / (t1 - t0);
            (a as f64 + slope * (t - t0)).round().clamp(0.0, 255.0) as u8
        };
        to_hex(Srgb::new(
            channel(start.red, end.red),
            channel(start.green, end.green),
            channel(start.blue, end.blue),
        ))
    };
    Some((stop(0.0), stop(1.0)))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::emit;
    use crate::settings::StyleType;

    fn roundtrip(settings: &Settings) -> Settings {
        parse_css(&emit(settings).embed_code()).unwrap()
    }

    #[test]
    fn missing_rule_is_an_error() {
        assert_eq!(
            parse_css("h1 { color: red; }").unwrap_err(),
            ParseError::MissingHeadlineRule
        );
    }

    #[test]
    fn no_gradient_disables_gradient() {
        let settings = parse_css(".headline-widget { font-size: 40px; color: #ffffff; }").unwrap();

        assert!(!settings.gradient.enabled);
        assert_eq!(settings.gradient.start_color, "#06b6d4");
        assert_eq!(settings.gradient.end_color, "#8b5cf6");
        assert_eq!(settings.typography.font_size, 40.0);
        assert_eq!(settings.text, "Imported Headline");
        assert!(settings.word_styling.is_empty());
    }

    #[test]
    fn placeholder_follows_config() {
        let config = EditorConfig {
            import_placeholder_text: "Untitled".into(),
            ..EditorConfig::default()
        };
        let settings = parse_css_with(".headline-widget { }", &config).unwrap();
        assert_eq!(settings.text, "Untitled");
    }

    #[test]
    fn embed_code_roundtrips() {
        let mut settings = Settings::default().with_text("Ship It");
        settings.apply_word_style("It", StyleType::Block);
        assert_eq!(roundtrip(&settings), settings);
    }

    #[test]
    fn gradient_outline_is_recognised() {
        let mut settings = Settings::default().with_text("Ship It");
        settings.gradient.start_color = "#ff0000".into();
        settings.gradient.end_color = "#0000ff".into();
        settings.animation.outline = true;
        settings.effects.outline_width = 2.0;

        assert_eq!(roundtrip(&settings), settings);
    }

    #[test]
    fn solid_outline_and_shadow() {
        let mut settings = Settings::default().with_text("Solid");
        settings.gradient.enabled = false;
        settings.animation.outline = true;
        settings.animation.text_shadow = true;
        settings.effects.outline_color = "#ff0000".into();
        settings.effects.outline_width = 1.5;

        assert_eq!(roundtrip(&settings), settings);
    }

    #[test]
    fn gradient_shadow_filter_sets_flag() {
        let mut settings = Settings::default().with_text("Glow");
        settings.animation.text_shadow = true;
        settings.animation.hover_glow = true;

        let parsed = roundtrip(&settings);
        assert!(parsed.animation.text_shadow);
        assert!(parsed.animation.hover_glow);
        assert_eq!(parsed, settings);
    }

    #[test]
    fn per_letter_recovers_gradient_and_text() {
        let mut settings = Settings::default().with_text("Hi there");
        settings.animation.per_letter = true;

        let parsed = roundtrip(&settings);
        assert!(parsed.animation.per_letter);
        assert_eq!(parsed.text, "Hi there");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn styled_edge_word_keeps_gradient_stops() {
        let mut settings = Settings::default().with_text("Hi there");
        settings.animation.per_letter = true;
        settings.apply_word_style("Hi", StyleType::Highlight);

        let parsed = roundtrip(&settings);
        assert_eq!(parsed.gradient.start_color, "#06b6d4");
        assert_eq!(parsed.gradient.end_color, "#8b5cf6");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn fade_in_needs_the_fade_in_animation() {
        let mut settings = Settings::default().with_text("Still");
        settings.animation.fade_in = false;
        assert!(!roundtrip(&settings).animation.fade_in);

        let css = ".headline-widget { animation: pulse 1s; }\n@keyframes pulse { }";
        assert!(!parse_css(css).unwrap().animation.fade_in);

        // Per-letter embeds animate regardless, so the default stands.
        let mut settings = Settings::default().with_text("Hi there");
        settings.animation.per_letter = true;
        settings.animation.fade_in = false;
        assert_eq!(roundtrip(&settings).animation.fade_in, Animation::default().fade_in);
    }

    #[test]
    fn markup_text_is_decoded() {
        let mut settings = Settings::default().with_text("Tom & \"Jerry\" <rock>");
        settings.gradient.enabled = false;
        settings.apply_word_style("Jerry", StyleType::Highlight);
        settings.apply_word_style("rock", StyleType::Underline);

        let parsed = roundtrip(&settings);
        assert_eq!(parsed.text, settings.text);
        assert_eq!(parsed.word_styling, settings.word_styling);
    }

    #[test]
    fn flat_block_keeps_its_colour() {
        let mut settings = Settings::default().with_text("Red Alert");
        settings.gradient.enabled = false;
        settings.word_styling.push(WordStyle {
            text: "Red".into(),
            highlight: false,
            underline: false,
            background_color: "#ff0000".into(),
        });

        assert_eq!(roundtrip(&settings).word_styling, settings.word_styling);
    }

    #[test]
    fn hand_written_css() {
        let css = "div.headline-widget, h1 {
            font-family: 'Playfair Display', serif;
            font-size: 48.5px;
            font-weight: bold;
            background: linear-gradient(45deg, red 0%, rgb(0, 0, 255) 100%);
            -webkit-background-clip: text;
        }";
        let settings = parse_css(css).unwrap();

        assert_eq!(settings.typography.font_family, "'Playfair Display', serif");
        assert_eq!(settings.typography.font_size, 48.5);
        assert_eq!(settings.typography.font_weight, 700);
        assert!(settings.gradient.enabled);
        assert_eq!(settings.gradient.direction, GradientDirection::ToRight);
        assert_eq!(settings.gradient.start_color, "#ff0000");
        assert_eq!(settings.gradient.end_color, "#0000ff");
        assert!(!settings.animation.fade_in);
    }

    #[test]
    fn direction_is_not_recovered() {
        let mut settings = Settings::default().with_text("Down");
        settings.gradient.direction = GradientDirection::ToBottom;
        assert_eq!(roundtrip(&settings).gradient.direction, GradientDirection::ToRight);
    }

    #[test]
    fn plain_shadow_is_not_an_outline() {
        assert!(outline_from_shadow("0 0 20px rgba(59, 130, 246, 0.6)").is_none());
        assert_eq!(
            split_top_level("1px 1px 0 rgb(1, 2, 3), 2px 2px 0 red"),
            vec!["1px 1px 0 rgb(1, 2, 3)", "2px 2px 0 red"]
        );
    }
}
