//! Content paths and loaded content modules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::{FrontMatter, Heading};

/// Location of a content file relative to the content root, e.g. `./blog/intro.md`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPath(String);

impl ContentPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Site-relative link for this file: one leading `.` and a trailing `.md` removed.
    ///
    /// `./blog/2024-intro.md` becomes `/blog/2024-intro`.
    pub fn href(&self) -> String {
        let path = self.0.strip_prefix('.').unwrap_or(&self.0);
        path.strip_suffix(".md").unwrap_or(path).to_string()
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ContentPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// A resolved markdown content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModule {
    pub frontmatter: FrontMatter,

    /// Full source file path
    pub file: PathBuf,

    /// Markdown body without front-matter
    pub raw_content: String,

    /// Body rendered to HTML
    pub compiled_content: String,

    pub headings: Vec<Heading>,
}

impl RawModule {
    /// A module with only front-matter, as produced by in-memory loaders
    pub fn from_frontmatter(frontmatter: FrontMatter) -> Self {
        Self {
            frontmatter,
            file: PathBuf::new(),
            raw_content: String::new(),
            compiled_content: String::new(),
            headings: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_strips_dot_and_extension() {
        assert_eq!(ContentPath::from("./blog/2024-intro.md").href(), "/blog/2024-intro");
        assert_eq!(
            ContentPath::from("./blog/2024/nested/post.md").href(),
            "/blog/2024/nested/post"
        );
    }

    #[test]
    fn test_href_alters_nothing_else() {
        // Only the last `.md` goes, only the first `.` goes
        assert_eq!(ContentPath::from("./blog/a.md.bak.md").href(), "/blog/a.md.bak");
        assert_eq!(ContentPath::from("../blog/x.md").href(), "./blog/x");
        assert_eq!(ContentPath::from("/blog/x.md").href(), "/blog/x");
        assert_eq!(ContentPath::from("./blog/x.markdown").href(), "/blog/x.markdown");
    }

    #[test]
    fn test_raw_module_serializes_camel_case() {
        let module = RawModule::from_frontmatter(FrontMatter {
            title: Some("Terms".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["frontmatter"]["title"], "Terms");
        assert!(json.get("compiledContent").is_some());
        assert!(json.get("rawContent").is_some());
    }
}
