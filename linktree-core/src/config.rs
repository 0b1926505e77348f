//! Page content configuration
//!
//! The link list and profile are data, not code. A default page is
//! embedded at build time; other deployments can ship their own JSON.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::ambient::AmbientScene;
use crate::page::{render, PageView};
use crate::{Avatar, LinkEntry, Profile, Theme};

const BUILTIN_PAGE_JSON: &str = include_str!("../assets/default_page.json");

/// Errors that can occur while loading page content
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid page config: {0}")]
    Parse(String),

    #[error("Duplicate link label: {0}")]
    DuplicateLabel(String),

    #[error("Link #{index} has an empty label")]
    EmptyLabel { index: usize },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Heading above the card; omitted when absent
    #[serde(default)]
    pub title: Option<String>,

    pub profile: Profile,

    /// Display order is list order
    #[serde(default)]
    pub links: Vec<LinkEntry>,

    #[serde(default)]
    pub ambient: AmbientScene,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The embedded default page. Never fails: a broken asset degrades to
    /// a bare profile card.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_PAGE_JSON) {
            Ok(config) => {
                info!(links = config.links.len(), "Loaded built-in page config");
                config
            }
            Err(e) => {
                error!(error = %e, "Built-in page config rejected, using fallback profile");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Self {
        Self {
            title: None,
            profile: Profile {
                display_name: "Developer".to_string(),
                tagline: String::new(),
                avatar: Avatar::default(),
            },
            links: Vec::new(),
            ambient: AmbientScene::default(),
        }
    }

    /// Labels identify links, so they must be present and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, link) in self.links.iter().enumerate() {
            if link.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if !seen.insert(link.label.as_str()) {
                return Err(ConfigError::DuplicateLabel(link.label.clone()));
            }
        }
        Ok(())
    }

    pub fn view(&self, theme: Theme) -> PageView {
        let mut view = render(theme, &self.links, &self.profile);
        view.title = self
            .title
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .cloned();
        view
    }
}
