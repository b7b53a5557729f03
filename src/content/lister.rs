//! Content listings - blog posts newest first, legal pages as loaded

use chrono::{DateTime, NaiveDate, TimeZone};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use super::date::{parse_publish_date, start_of_day};
use super::enumerator::{ContentEnumerator, Entries};
use super::error::{ContentError, Result};
use super::{ContentPath, RawModule};

/// Every markdown file below `blog/`
pub const BLOG_PATTERN: &str = "./blog/**/*.md";

/// Every markdown file below `legal/`
pub const LEGAL_PATTERN: &str = "./legal/**/*.md";

/// Listing entry for a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: Option<String>,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    pub publish_date: NaiveDate,
    pub href: String,
}

impl PostSummary {
    /// Project a loaded module onto its listing entry
    fn from_module(path: &ContentPath, module: RawModule) -> Result<Self> {
        let fm = module.frontmatter;

        let value = fm
            .publish_date
            .ok_or_else(|| ContentError::MissingPublishDate {
                path: path.to_string(),
            })?;
        let publish_date =
            parse_publish_date(&value).map_err(|source| ContentError::PublishDate {
                path: path.to_string(),
                value,
                source,
            })?;

        if fm.title.is_none() || fm.description.is_none() || fm.authors.is_none() {
            tracing::debug!("{} is missing title, description or authors", path);
        }

        Ok(Self {
            title: fm.title,
            description: fm.description,
            authors: fm.authors,
            publish_date,
            href: path.href(),
        })
    }

    /// Start of the publish date in `tz`
    pub fn published_at<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        start_of_day(self.publish_date, tz)
    }
}

/// Invoke every loader concurrently; the first failure fails the whole batch.
///
/// Results keep enumeration order.
async fn resolve_all(entries: Entries) -> Result<Vec<(ContentPath, RawModule)>> {
    try_join_all(entries.into_iter().map(|(path, load)| {
        let pending = load();
        async move { Ok::<_, ContentError>((path, pending.await?)) }
    }))
    .await
}

/// List every blog post, most recent first.
///
/// Posts sharing a publish date keep their enumeration order.
pub async fn list_posts<E>(enumerator: &E) -> Result<Vec<PostSummary>>
where
    E: ContentEnumerator + ?Sized,
{
    let entries = enumerator.enumerate(BLOG_PATTERN)?;
    let modules = resolve_all(entries).await?;

    let mut posts = modules
        .into_iter()
        .map(|(path, module)| PostSummary::from_module(&path, module))
        .collect::<Result<Vec<_>>>()?;

    posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

    tracing::debug!("Listed {} posts", posts.len());
    Ok(posts)
}

/// List every legal page, unmodified, in enumeration order
pub async fn list_legal_pages<E>(enumerator: &E) -> Result<Vec<RawModule>>
where
    E: ContentEnumerator + ?Sized,
{
    let entries = enumerator.enumerate(LEGAL_PATTERN)?;
    let pages: Vec<RawModule> = resolve_all(entries)
        .await?
        .into_iter()
        .map(|(_, module)| module)
        .collect();

    tracing::debug!("Listed {} legal pages", pages.len());
    Ok(pages)
}
