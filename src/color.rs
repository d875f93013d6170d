//! Hex colour helpers built on `palette`.

use palette::Srgb;

/// Parses a strict `#rrggbb` colour.
///
/// Shorthand (`#fff`) and bare (`ffffff`) forms are rejected; the settings
/// model stores the long form only.
pub fn parse_hex(value: &str) -> Option<Srgb<u8>> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    value.parse::<Srgb<u8>>().ok()
}

/// True if `value` is a strict `#rrggbb` colour.
pub fn is_hex(value: &str) -> bool {
    parse_hex(value).is_some()
}

/// Converts a CSS colour token to `#rrggbb` where possible.
///
/// Understands long and short hex, `rgb(r, g, b)` and CSS colour names.
/// Anything else is returned trimmed but otherwise untouched.
pub fn normalize(value: &str) -> String {
    let value = value.trim();
    if is_hex(value) {
        return value.to_ascii_lowercase();
    }
    let parsed = match value.strip_prefix('#') {
        Some(digits) if digits.len() == 3 => value.parse::<Srgb<u8>>().ok(),
        Some(_) => None,
        None => parse_rgb_fn(value).or_else(|| palette::named::from_str(&value.to_ascii_lowercase())),
    };
    match parsed {
        Some(c) => to_hex(c),
        None => value.to_string(),
    }
}

/// `#rrggbb` for a colour.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

fn parse_rgb_fn(value: &str) -> Option<Srgb<u8>> {
    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels: Vec<u8> = inner
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some(Srgb::new(r, g, b)),
        _ => None,
    }
}

/// Linear RGB interpolation between two colours (`t` in 0..=1).
///
/// Channels are mixed in gamma-encoded sRGB, like a plain CSS colour mix.
pub fn lerp(start: Srgb<u8>, end: Srgb<u8>, t: f64) -> Srgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Srgb::new(
        mix(start.red, end.red),
        mix(start.green, end.green),
        mix(start.blue, end.blue),
    )
}

/// `rgb(r, g, b)`.
pub fn rgb_css(color: Srgb<u8>) -> String {
    format!("rgb({}, {}, {})", color.red, color.green, color.blue)
}

/// `rgba(r, g, b, a)` for a hex colour, or `None` if it isn't one.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<String> {
    let c = parse_hex(hex)?;
    Some(format!("rgba({}, {}, {}, {})", c.red, c.green, c.blue, alpha))
}

/// Appends a two-digit hex alpha to a colour (`#8b5cf6` + `40`).
///
/// Only meaningful for `#rrggbb` input; other values pass through with the
/// suffix appended, which a browser will ignore as invalid.
pub fn with_alpha(hex: &str, alpha: &str) -> String {
    format!("{hex}{alpha}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_strict() {
        let c = parse_hex("#06b6d4").unwrap();
        assert_eq!((c.red, c.green, c.blue), (0x06, 0xb6, 0xd4));

        assert!(parse_hex("06b6d4").is_none());
        assert!(parse_hex("#fff").is_none());
        assert!(parse_hex("#06b6dz").is_none());
        assert!(parse_hex("transparent").is_none());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let start = Srgb::new(0u8, 0, 0);
        let end = Srgb::new(255u8, 100, 10);

        assert_eq!(lerp(start, end, 0.0), start);
        assert_eq!(lerp(start, end, 1.0), end);

        let mid = lerp(start, end, 0.5);
        assert_eq!((mid.red, mid.green, mid.blue), (128, 50, 5));
    }

    #[test]
    fn normalize_css_colors() {
        assert_eq!(normalize(" #06B6D4 "), "#06b6d4");
        assert_eq!(normalize("#fff"), "#ffffff");
        assert_eq!(normalize("rgb(6, 182, 212)"), "#06b6d4");
        assert_eq!(normalize("White"), "#ffffff");
        assert_eq!(normalize("currentColor"), "currentColor");
        assert_eq!(normalize("rgb(300, 0, 0)"), "rgb(300, 0, 0)");
    }

    #[test]
    fn css_formats() {
        assert_eq!(rgb_css(Srgb::new(1u8, 2, 3)), "rgb(1, 2, 3)");
        assert_eq!(
            hex_to_rgba("#ff0000", 0.4).as_deref(),
            Some("rgba(255, 0, 0, 0.4)")
        );
        assert_eq!(with_alpha("#8b5cf6", "40"), "#8b5cf640");
    }
}
