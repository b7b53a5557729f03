//! List site content

use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt::Write;

use crate::content::date::format_publish_date;
use crate::content::{PostSummary, RawModule};
use crate::Site;

/// List site content by type
pub async fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    let output = match content_type {
        "post" | "posts" | "blog" => {
            let posts = site.list_posts().await?;
            if json {
                let listing: Vec<_> = posts
                    .iter()
                    .map(|post| PostListing {
                        post,
                        published_at: site.published_at(post),
                    })
                    .collect();
                serde_json::to_string_pretty(&listing)?
            } else {
                posts_table(&posts)
            }
        }
        "legal" => {
            let pages = site.list_legal_pages().await?;
            if json {
                serde_json::to_string_pretty(&pages)?
            } else {
                legal_table(site, &pages)
            }
        }
        _ => {
            bail!("Unknown type: {}. Available: posts, legal", content_type);
        }
    };

    println!("{}", output);
    Ok(())
}

/// JSON form of a post: the summary plus its publish instant in the site zone
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostListing<'a> {
    #[serde(flatten)]
    post: &'a PostSummary,
    published_at: Option<DateTime<FixedOffset>>,
}

fn posts_table(posts: &[PostSummary]) -> String {
    let mut out = format!("Posts ({}):", posts.len());
    for post in posts {
        let _ = write!(
            out,
            "\n  {} - {} [{}]",
            format_publish_date(post.publish_date),
            post.title.as_deref().unwrap_or("(untitled)"),
            post.href
        );
        if let Some(authors) = post.authors.as_ref().filter(|a| !a.is_empty()) {
            let _ = write!(out, " by {}", authors.join(", "));
        }
    }
    out
}

fn legal_table(site: &Site, pages: &[RawModule]) -> String {
    let mut out = format!("Legal pages ({}):", pages.len());
    for page in pages {
        let source = page.file.strip_prefix(&site.content_dir).unwrap_or(page.file.as_path());
        let _ = write!(
            out,
            "\n  {} [{}]",
            page.frontmatter.title.as_deref().unwrap_or("(untitled)"),
            source.display()
        );
    }
    out
}
