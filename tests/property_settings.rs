// Property-based tests for export round-trips and resolver invariants.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use headline_studio::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_hex() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

/// Up to six short words, some with trailing punctuation.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(r"[A-Za-z]{1,8}[!?,]?", 0..6).prop_map(|words| words.join(" "))
}

fn arb_direction() -> impl Strategy<Value = GradientDirection> {
    prop::sample::select(GradientDirection::ALL.to_vec())
}

fn arb_style_type() -> impl Strategy<Value = StyleType> {
    prop_oneof![
        Just(StyleType::Highlight),
        Just(StyleType::Underline),
        Just(StyleType::Block),
    ]
}

fn arb_typography() -> impl Strategy<Value = Typography> {
    (
        8.0..=200.0f64,
        prop::sample::select(vec![
            "Inter, system-ui, sans-serif",
            "'Playfair Display', serif",
            "Georgia, serif",
            "monospace",
        ]),
        100u16..=900,
    )
        .prop_map(|(font_size, family, font_weight)| Typography {
            font_size,
            font_family: family.to_string(),
            font_weight,
        })
}

fn arb_animation() -> impl Strategy<Value = Animation> {
    any::<[bool; 5]>().prop_map(|[fade_in, hover_glow, per_letter, text_shadow, outline]| Animation {
        fade_in,
        hover_glow,
        per_letter,
        text_shadow,
        outline,
    })
}

/// Valid settings: in range, hex colours, word styles on words of the text.
fn arb_settings() -> impl Strategy<Value = Settings> {
    (
        arb_text(),
        arb_typography(),
        (any::<bool>(), arb_direction(), arb_hex(), arb_hex()),
        prop::collection::vec((any::<prop::sample::Index>(), arb_style_type()), 0..4),
        arb_animation(),
        (arb_hex(), 0.0..=10.0f64),
    )
        .prop_map(
            |(text, typography, (enabled, direction, start, end), picks, animation, (outline_color, width))| {
                let mut settings = Settings {
                    text,
                    typography,
                    gradient: Gradient {
                        enabled,
                        direction,
                        start_color: start,
                        end_color: end,
                    },
                    word_styling: Vec::new(),
                    animation,
                    effects: Effects {
                        outline_color,
                        outline_width: width,
                        ..Effects::default()
                    },
                };
                let words = unique_words(&settings.text);
                if !words.is_empty() {
                    for (index, style) in picks {
                        settings.apply_word_style(index.get::<String>(&words), style);
                    }
                }
                settings
            },
        )
}

// ---------------------------------------------------------------------------
// Export round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn export_roundtrip(settings in arb_settings()) {
        let json = export_settings(&settings).to_json().unwrap();
        let parsed = parse_json(&json).unwrap();
        let validated = validate(parsed).unwrap();
        prop_assert_eq!(validated, settings);
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn css_import_keeps_typography(settings in arb_settings()) {
        let embed = emit(&settings).embed_code();
        let parsed = parse_css(&embed).unwrap();
        prop_assert_eq!(parsed.typography, settings.typography);
        prop_assert_eq!(parsed.animation.outline, settings.animation.outline);
        prop_assert_eq!(parsed.animation.hover_glow, settings.animation.hover_glow);
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn resolve_is_deterministic(settings in arb_settings()) {
        prop_assert_eq!(resolve(&settings), resolve(&settings.clone()));
        prop_assert_eq!(emit(&settings), emit(&settings));
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn stroke_and_gradient_clip_never_coexist(settings in arb_settings()) {
        let plan = resolve(&settings);
        let stroke = plan.container.contains("-webkit-text-stroke");
        let clipped = plan.container.get("background-clip") == Some("text");
        prop_assert!(!(stroke && clipped));

        if settings.animation.outline && settings.gradient.enabled {
            prop_assert_eq!(plan.fill_mode, FillMode::GradientOutline);
            prop_assert!(!stroke);
            prop_assert!(!clipped);
            let shadow = plan.container.get("text-shadow").unwrap_or_default();
            prop_assert_eq!(shadow.split(", ").count(), 8);
        }
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn word_style_is_idempotent(settings in arb_settings(), style in arb_style_type()) {
        let words = unique_words(&settings.text);
        prop_assume!(!words.is_empty());

        let mut once = settings.clone();
        once.apply_word_style(&words[0], style);
        let mut twice = once.clone();
        twice.apply_word_style(&words[0], style);

        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(resolve(&twice), resolve(&once));
    }
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn segments_cover_text(settings in arb_settings()) {
        let plan = resolve(&settings);
        let joined: String = plan.segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, settings.text.clone());
        if settings.animation.per_letter {
            prop_assert_eq!(plan.letter_count(), settings.text.chars().count());
        }
    }
}
