//! Theme palettes and per-link accent styling

use crate::Theme;

/// Every theme-dependent styling decision for the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub page_background: &'static str,
    pub text_color: &'static str,
    pub tagline_color: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub link_background: &'static str,
    pub link_border: &'static str,
    pub toggle_icon: &'static str,
}

const DARK_PALETTE: ThemePalette = ThemePalette {
    page_background: "linear-gradient(135deg, #4c1d95 0%, #312e81 100%)",
    text_color: "#ffffff",
    tagline_color: "#c7d2fe",
    card_background: "rgba(255, 255, 255, 0.2)",
    card_border: "rgba(255, 255, 255, 0.3)",
    link_background: "rgba(255, 255, 255, 0.1)",
    link_border: "rgba(255, 255, 255, 0.2)",
    toggle_icon: "☀️",
};

const LIGHT_PALETTE: ThemePalette = ThemePalette {
    page_background: "linear-gradient(135deg, #ede9fe 0%, #e0e7ff 100%)",
    text_color: "#1e1b4b",
    tagline_color: "#4338ca",
    card_background: "rgba(255, 255, 255, 0.7)",
    card_border: "rgba(49, 46, 129, 0.2)",
    link_background: "rgba(255, 255, 255, 0.6)",
    link_border: "rgba(49, 46, 129, 0.15)",
    toggle_icon: "🌙",
};

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> &'static ThemePalette {
        match theme {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }
}

/// Alpha used for the glow and overlay tint (0x66 ≈ 40%).
const ACCENT_ALPHA_HEX: &str = "66";
const ACCENT_ALPHA_PERCENT: u8 = 40;
const OVERLAY_HOVER_OPACITY: f32 = 0.2;

/// Styling derived from a link's accent color
#[derive(Debug, Clone, PartialEq)]
pub struct AccentStyle {
    pub icon_color: String,
    pub glow_shadow: String,
    pub overlay_color: String,
    /// Overlay opacity while hovered; zero otherwise
    pub overlay_hover_opacity: f32,
}

pub fn style_for(accent_color: &str) -> AccentStyle {
    let color = accent_color.trim();
    AccentStyle {
        icon_color: color.to_string(),
        glow_shadow: format!("0 0 20px {}", translucent(color)),
        overlay_color: color.to_string(),
        overlay_hover_opacity: OVERLAY_HOVER_OPACITY,
    }
}

/// The accent at reduced alpha, as a CSS color.
fn translucent(color: &str) -> String {
    match expand_hex(color) {
        Some(hex) => format!("{hex}{ACCENT_ALPHA_HEX}"),
        None => format!("color-mix(in srgb, {color} {ACCENT_ALPHA_PERCENT}%, transparent)"),
    }
}

/// `#rgb` / `#rrggbb` as lowercase `#rrggbb`; `None` for anything else.
fn expand_hex(color: &str) -> Option<String> {
    let digits = color.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some(format!("#{}", digits.to_ascii_lowercase())),
        3 => {
            let doubled: String = digits
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
                .to_ascii_lowercase();
            Some(format!("#{doubled}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_on_every_theme_dependent_field() {
        let dark = ThemePalette::for_theme(Theme::Dark);
        let light = ThemePalette::for_theme(Theme::Light);

        assert_ne!(dark.page_background, light.page_background);
        assert_ne!(dark.text_color, light.text_color);
        assert_ne!(dark.toggle_icon, light.toggle_icon);
        assert_eq!(dark.text_color, "#ffffff");
    }

    #[test]
    fn six_digit_hex_gets_alpha_suffix() {
        let style = style_for("#6B7280");
        assert_eq!(style.icon_color, "#6B7280");
        assert_eq!(style.overlay_color, "#6B7280");
        assert_eq!(style.glow_shadow, "0 0 20px #6b728066");
        assert_eq!(style.overlay_hover_opacity, 0.2);
    }

    #[test]
    fn short_hex_is_expanded() {
        assert_eq!(style_for("#f0a").glow_shadow, "0 0 20px #ff00aa66");
    }

    #[test]
    fn other_color_syntax_uses_color_mix() {
        assert_eq!(
            style_for("rgb(29, 161, 242)").glow_shadow,
            "0 0 20px color-mix(in srgb, rgb(29, 161, 242) 40%, transparent)"
        );
        assert_eq!(
            style_for("#12345").glow_shadow,
            "0 0 20px color-mix(in srgb, #12345 40%, transparent)"
        );
    }
}
