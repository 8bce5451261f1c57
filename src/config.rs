//! Portfolio content loaded from `~/.folio/portfolio.yaml`
//!
//! Every field has a default, so a missing or partial file still yields a
//! complete page.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::models::{Link, Profile, Project};

/// Static content for the four portfolio sections
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub profile: Profile,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub links: Vec<Link>,
    pub footer_note: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            profile: Profile::default(),
            about: vec![
                String::from("I am learning to build user interfaces from small, reusable components."),
                String::from("This page is built from a header, about, projects and footer."),
            ],
            projects: vec![
                Project::new("Portfolio", "This page: four static components composed in order"),
                Project::new("Counter", "A single piece of state and a button that increments it"),
            ],
            links: vec![Link::new("GitHub", "https://github.com/")],
            footer_note: String::from("Built as coursework"),
        }
    }
}

/// Locates and reads the portfolio config file
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR);
        ConfigStore { config_dir }
    }

    /// Use an explicit directory instead of the home directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        ConfigStore {
            config_dir: config_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Load the config, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load(&self) -> PortfolioConfig {
        let path = self.path();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no portfolio config, using defaults");
            return PortfolioConfig::default();
        }

        match load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded portfolio config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid portfolio config, using defaults");
                PortfolioConfig::default()
            }
        }
    }
}

/// Parse a portfolio config file
pub fn load_from(path: &Path) -> Result<PortfolioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&content)
}

/// Parse portfolio config YAML; an empty document yields the defaults
pub fn parse_config(content: &str) -> Result<PortfolioConfig> {
    if content.trim().is_empty() {
        return Ok(PortfolioConfig::default());
    }
    let config = serde_yaml::from_str(content).context("failed to parse portfolio config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        assert_eq!(store.load(), PortfolioConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        fs::write(
            store.path(),
            "profile:\n  name: Ada\nprojects:\n  - title: Engine\n    url: https://example.com\n",
        )
        .unwrap();

        let config = store.load();
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.tagline, Profile::default().tagline);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].url.as_deref(), Some("https://example.com"));
        assert_eq!(config.projects[0].description, "");
        assert_eq!(config.links, PortfolioConfig::default().links);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        fs::write(store.path(), "projects: [unclosed").unwrap();

        assert!(load_from(&store.path()).is_err());
        assert_eq!(store.load(), PortfolioConfig::default());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_config("  \n").unwrap(), PortfolioConfig::default());
    }
}
