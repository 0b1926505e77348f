//! Core types for the link tree page
//!
//! Everything here is plain data and pure functions so it can be used by:
//! - the Dioxus web front-end (WASM)
//! - host-side tests
//!
//! Serializable with serde so the page content can be shipped as JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod ambient;
pub mod config;
pub mod page;
pub mod store;
pub mod style;

pub use ambient::{rotation_at, AmbientScene, Rotation};
pub use config::{ConfigError, PageConfig};
pub use page::{render, LinkTarget, LinkView, Navigator, PageView};
pub use store::{KeyValueStorage, MemoryStorage, StorageError, ThemeStore, THEME_STORAGE_KEY};
pub use style::{style_for, AccentStyle, ThemePalette};

// ============================================================================
// Theme
// ============================================================================

/// Visual mode of the whole page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The string persisted to storage and mirrored onto `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

// ============================================================================
// Page Content
// ============================================================================

/// Icon reference for a link. Artwork lives in the front-end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Globe,
    Mail,
    Newspaper,
    Youtube,
    Facebook,
    Gamepad,
    Instagram,
    Github,
    Discord,
    Twitter,
    StackOverflow,
    /// Fallback for glyph names this build does not know
    #[serde(other)]
    Link,
}

/// One external profile link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntry {
    /// Display text, unique across the list
    pub label: String,

    /// Where the link goes. Opened in a new browsing context.
    #[serde(rename = "href")]
    pub destination_url: String,

    /// Any CSS color value
    #[serde(rename = "color")]
    pub accent_color: String,

    #[serde(rename = "icon", default = "default_glyph")]
    pub glyph: Glyph,
}

fn default_glyph() -> Glyph {
    Glyph::Link
}

impl LinkEntry {
    pub fn new(
        label: impl Into<String>,
        destination_url: impl Into<String>,
        accent_color: impl Into<String>,
        glyph: Glyph,
    ) -> Self {
        Self {
            label: label.into(),
            destination_url: destination_url.into(),
            accent_color: accent_color.into(),
            glyph,
        }
    }
}

/// Avatar shown at the top of the card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Avatar {
    Image { src: String, alt: String },
    Monogram { text: String },
}

impl Default for Avatar {
    fn default() -> Self {
        Avatar::Monogram {
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub tagline: String,
    #[serde(default)]
    pub avatar: Avatar,
}

impl Profile {
    /// Text for a monogram avatar. Falls back to the first letter of the
    /// display name when no monogram is configured.
    pub fn monogram(&self) -> String {
        if let Avatar::Monogram { text } = &self.avatar {
            let text = text.trim();
            if !text.is_empty() {
                return text.to_string();
            }
        }
        self.display_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
