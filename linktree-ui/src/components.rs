use dioxus::prelude::*;
use linktree_core::page::{NEW_CONTEXT_REL, NEW_CONTEXT_TARGET};
use linktree_core::{
    Avatar, Glyph, LinkView, PageConfig, PageView, Theme, ThemePalette, ThemeStore,
};

use crate::ambient::AmbientCanvas;
use crate::interop::BrowserNavigator;
use crate::styles::PAGE_STYLES;
use crate::theme::apply_theme_to_document;

// ============================================================================
// LinkTreePage - Main Container
// ============================================================================

/// Renders the page for the `ThemeStore` found in context.
#[component]
pub fn LinkTreePage(config: PageConfig) -> Element {
    let mut theme_store = use_context::<Signal<ThemeStore>>();
    let theme = theme_store.read().current();

    use_effect(move || {
        apply_theme_to_document(theme_store.read().current());
    });

    let toggle_theme = use_callback(move |_| {
        let next = theme_store.write().toggle();
        dioxus_logger::tracing::debug!("Theme switched to {}", next);
    });

    let view = config.view(theme);
    let title = view.title.clone();
    let palette = *view.palette;
    let background = palette.page_background;
    let text_color = palette.text_color;

    rsx! {
        style { {PAGE_STYLES} }

        div {
            class: "linktree-page",
            "data-theme": theme.as_str(),
            style: "background: {background}; color: {text_color};",

            AmbientCanvas { scene: config.ambient.clone() }

            ThemeToggle {
                theme,
                palette,
                on_toggle: toggle_theme,
            }

            div {
                class: "linktree-content",

                if let Some(title) = title {
                    h1 {
                        class: "linktree-title",
                        style: "color: {text_color};",
                        "{title}"
                    }
                }

                ProfileCard { view }
            }
        }
    }
}

// ============================================================================
// Theme Toggle
// ============================================================================

#[component]
pub fn ThemeToggle(theme: Theme, palette: ThemePalette, on_toggle: Callback<()>) -> Element {
    let icon = palette.toggle_icon;
    let background = palette.card_background;
    let border = palette.card_border;
    let label = if theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    rsx! {
        button {
            class: "theme-toggle",
            style: "background: {background}; border: 1px solid {border};",
            title: "Toggle theme",
            aria_label: label,
            onclick: move |_| on_toggle.call(()),
            "{icon}"
        }
    }
}

// ============================================================================
// Profile Card
// ============================================================================

#[component]
pub fn ProfileCard(view: PageView) -> Element {
    let palette = *view.palette;
    let card_background = palette.card_background;
    let card_border = palette.card_border;
    let tagline_color = palette.tagline_color;
    let display_name = view.profile.display_name.clone();
    let tagline = view.profile.tagline.clone();
    let has_links = view.has_links();

    let avatar = match &view.profile.avatar {
        Avatar::Image { src, alt } => rsx! {
            img {
                class: "profile-avatar",
                src: "{src}",
                alt: "{alt}",
            }
        },
        Avatar::Monogram { .. } => {
            let monogram = view.monogram.clone();
            rsx! {
                div {
                    class: "profile-avatar",
                    "{monogram}"
                }
            }
        }
    };

    rsx! {
        div {
            class: "profile-card",
            style: "background: {card_background}; border-color: {card_border};",

            div {
                class: "profile-header",
                {avatar}
                h2 { class: "profile-name", "{display_name}" }
                if !tagline.is_empty() {
                    p {
                        class: "profile-tagline",
                        style: "color: {tagline_color};",
                        "{tagline}"
                    }
                }
            }

            if has_links {
                nav {
                    class: "link-grid",
                    for link in view.links.iter() {
                        LinkButton {
                            key: "{link.label}",
                            link: link.clone(),
                            palette,
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Link Button
// ============================================================================

#[component]
pub fn LinkButton(link: LinkView, palette: ThemePalette) -> Element {
    let navigable = link.target.is_navigable();
    let href = link.target.href().map(str::to_string);
    let label = link.label.clone();
    let symbol = glyph_symbol(link.glyph);
    let delay = link.entrance_delay_ms;
    let icon_color = link.accent.icon_color.clone();
    let glow = link.accent.glow_shadow.clone();
    let overlay_color = link.accent.overlay_color.clone();
    let overlay_opacity = link.accent.overlay_hover_opacity;
    let background = palette.link_background;
    let border = palette.link_border;

    rsx! {
        a {
            class: "link-button",
            href,
            target: navigable.then_some(NEW_CONTEXT_TARGET),
            rel: navigable.then_some(NEW_CONTEXT_REL),
            aria_disabled: (!navigable).then_some("true"),
            style: "background: {background}; border-color: {border}; box-shadow: {glow}; animation-delay: {delay}ms;",
            onclick: move |evt| {
                evt.prevent_default();
                link.activate(&BrowserNavigator);
            },

            span {
                class: "link-glyph",
                style: "color: {icon_color};",
                "{symbol}"
            }
            span { class: "link-label", "{label}" }
            div {
                class: "link-overlay",
                style: "background-color: {overlay_color}; --overlay-hover-opacity: {overlay_opacity};",
            }
        }
    }
}

pub fn glyph_symbol(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Globe => "🌐",
        Glyph::Mail => "✉️",
        Glyph::Newspaper => "📰",
        Glyph::Youtube => "▶️",
        Glyph::Facebook => "📘",
        Glyph::Gamepad => "🎮",
        Glyph::Instagram => "📸",
        Glyph::Github => "🐙",
        Glyph::Discord => "💬",
        Glyph::Twitter => "𝕏",
        Glyph::StackOverflow => "📚",
        Glyph::Link => "🔗",
    }
}
