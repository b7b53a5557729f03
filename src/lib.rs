//! site-content: build-time content loading for static sites
//!
//! Discovers markdown files below a content root, parses their front-matter,
//! and produces listings: blog posts sorted newest first and legal pages as
//! loaded.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

use content::{GlobEnumerator, MarkdownRenderer, PostSummary, RawModule};

/// A site on disk
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root (blog/, legal/, ...)
    pub content_dir: PathBuf,
    /// Configured time zone; `None` is the system local zone
    pub tz: Option<Tz>,
    enumerator: GlobEnumerator,
}

impl Site {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Open the site in `base_dir` with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let tz = config.tz()?;
        let renderer = MarkdownRenderer::from_config(&config.markdown)?;
        let enumerator = GlobEnumerator::new(&content_dir, renderer);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            tz,
            enumerator,
        })
    }

    /// All blog posts, most recent first
    pub async fn list_posts(&self) -> content::Result<Vec<PostSummary>> {
        content::list_posts(&self.enumerator).await
    }

    /// All legal pages
    pub async fn list_legal_pages(&self) -> content::Result<Vec<RawModule>> {
        content::list_legal_pages(&self.enumerator).await
    }

    /// Start of a post's publish date in the site time zone
    pub fn published_at(&self, post: &PostSummary) -> Option<DateTime<FixedOffset>> {
        match self.tz {
            Some(tz) => post.published_at(&tz).map(|dt| dt.fixed_offset()),
            None => post.published_at(&Local).map(|dt| dt.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn blog_post(title: &str, date: &str) -> String {
        format!(
            "---\ntitle: {}\ndescription: About {}\nauthors:\n  - Ada\npublishDate: {}\n---\n\n# {}\n",
            title, title, date, title
        )
    }

    #[tokio::test]
    async fn test_site_lists_posts_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("src/content");
        write(&root, "blog/old.md", &blog_post("Old", "March 1, 2023"));
        write(&root, "blog/2024/new.md", &blog_post("New", "March 1, 2024"));
        write(&root, "blog/mid.md", &blog_post("Mid", "February 1, 2024"));

        let site = Site::new(dir.path()).unwrap();
        let posts = site.list_posts().await.unwrap();

        let hrefs: Vec<_> = posts.iter().map(|p| p.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/blog/2024/new", "/blog/mid", "/blog/old"]);
        assert_eq!(
            posts[0].publish_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(posts[0].authors, Some(vec!["Ada".to_string()]));
    }

    #[tokio::test]
    async fn test_site_lists_legal_pages_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_config.yml", "content_dir: content\n");
        write(
            dir.path(),
            "content/legal/terms.md",
            "---\ntitle: Terms\nlastUpdated: 2024\n---\n# Terms of Service\n",
        );
        write(
            dir.path(),
            "content/legal/privacy.md",
            "---\ntitle: Privacy\n---\n# Privacy Policy\n",
        );

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("content"));

        let pages = site.list_legal_pages().await.unwrap();
        let mut titles: Vec<_> = pages
            .iter()
            .filter_map(|p| p.frontmatter.title.as_deref())
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Privacy", "Terms"]);

        let terms = pages
            .iter()
            .find(|p| p.frontmatter.title.as_deref() == Some("Terms"))
            .unwrap();
        assert!(terms.frontmatter.extra.contains_key("lastUpdated"));
        assert!(terms.compiled_content.contains("<h1>Terms of Service</h1>"));
    }

    #[test]
    fn test_site_time_zone() {
        let dir = tempfile::tempdir().unwrap();
        let config = config::SiteConfig {
            timezone: "Asia/Tokyo".to_string(),
            ..Default::default()
        };
        let site = Site::with_config(dir.path(), config).unwrap();

        let post = PostSummary {
            title: None,
            description: None,
            authors: None,
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            href: "/blog/x".to_string(),
        };
        let at = site.published_at(&post).unwrap();
        assert_eq!(at.to_rfc3339(), "2024-01-03T00:00:00+09:00");
    }

    #[test]
    fn test_site_rejects_bad_time_zone() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_config.yml", "timezone: Nowhere/Special\n");
        assert!(Site::new(dir.path()).is_err());
    }

    #[tokio::test]
    async fn test_site_without_blog_dir_has_no_posts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/content")).unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert!(site.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_site_with_one_bad_post_fails() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("src/content");
        write(&root, "blog/good.md", &blog_post("Good", "March 1, 2023"));
        write(&root, "blog/bad.md", &blog_post("Bad", "2023-03-01"));

        let site = Site::new(dir.path()).unwrap();
        assert!(matches!(
            site.list_posts().await,
            Err(content::ContentError::PublishDate { .. })
        ));
    }
}
