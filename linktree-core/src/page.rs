//! Page view model
//!
//! `render` turns the active theme and the static page content into a
//! fully resolved description of what the front-end draws. It is pure, so
//! the same inputs always give the same tree.

use tracing::debug;
use url::Url;

use crate::style::{style_for, AccentStyle, ThemePalette};
use crate::{Glyph, LinkEntry, Profile, Theme};

/// Browsing context used for every external link
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// No opener back-reference, no referrer
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Delay between consecutive link entrance animations
pub const ENTRANCE_STAGGER_MS: u32 = 100;

const NAVIGABLE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];
/// Schemes whose address lives in the path; an empty path goes nowhere
const PATH_ADDRESSED_SCHEMES: &[&str] = &["mailto", "tel"];

/// Where activating a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Opens in a new browsing context
    External(String),
    /// Renders, but activation does nothing
    Inert,
}

impl LinkTarget {
    pub fn resolve(destination_url: &str) -> Self {
        let destination = destination_url.trim();
        if destination.is_empty() || destination.starts_with('#') {
            return LinkTarget::Inert;
        }

        match Url::parse(destination) {
            Ok(url)
                if PATH_ADDRESSED_SCHEMES.contains(&url.scheme())
                    && url.path().trim().is_empty() =>
            {
                debug!(scheme = url.scheme(), "Link has no address, rendering inert");
                LinkTarget::Inert
            }
            Ok(url) if NAVIGABLE_SCHEMES.contains(&url.scheme()) => {
                LinkTarget::External(url.to_string())
            }
            Ok(url) => {
                debug!(scheme = url.scheme(), "Link scheme not navigable, rendering inert");
                LinkTarget::Inert
            }
            Err(e) => {
                debug!(error = %e, destination, "Malformed link destination, rendering inert");
                LinkTarget::Inert
            }
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            LinkTarget::External(url) => Some(url),
            LinkTarget::Inert => None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

/// Opens URLs outside the current page.
pub trait Navigator {
    fn open_in_new_context(&self, url: &str);
}

/// One rendered link element
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub label: String,
    pub glyph: Glyph,
    pub target: LinkTarget,
    pub accent: AccentStyle,
    pub entrance_delay_ms: u32,
}

impl LinkView {
    /// Follow the link. Returns whether navigation happened.
    pub fn activate(&self, navigator: &dyn Navigator) -> bool {
        match &self.target {
            LinkTarget::External(url) => {
                navigator.open_in_new_context(url);
                true
            }
            LinkTarget::Inert => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub theme: Theme,
    pub palette: &'static ThemePalette,
    pub title: Option<String>,
    pub profile: Profile,
    pub monogram: String,
    pub links: Vec<LinkView>,
}

impl PageView {
    /// The link section is left out entirely for an empty list.
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

pub fn render(theme: Theme, links: &[LinkEntry], profile: &Profile) -> PageView {
    let links = links
        .iter()
        .enumerate()
        .map(|(index, entry)| LinkView {
            label: entry.label.clone(),
            glyph: entry.glyph,
            target: LinkTarget::resolve(&entry.destination_url),
            accent: style_for(&entry.accent_color),
            entrance_delay_ms: u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(ENTRANCE_STAGGER_MS),
        })
        .collect();

    PageView {
        theme,
        palette: ThemePalette::for_theme(theme),
        title: None,
        monogram: profile.monogram(),
        profile: profile.clone(),
        links,
    }
}
