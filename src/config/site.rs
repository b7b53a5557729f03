//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use chrono_tz::Tz;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    /// Content root, relative to the site base directory
    pub content_dir: String,

    /// IANA time zone name; empty means the system local zone
    pub timezone: String,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            url: "http://example.com".to_string(),
            content_dir: "src/content".to_string(),
            timezone: String::new(),
            markdown: MarkdownConfig::default(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the configured time zone; `None` means the system local zone
    pub fn tz(&self) -> Result<Option<Tz>> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let tz = name
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Invalid timezone {:?}: {}", name, e))?;
        Ok(Some(tz))
    }
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Any theme bundled with syntect, e.g. `base16-ocean.dark`, `InspiredGitHub`
    pub highlight_theme: String,
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}
