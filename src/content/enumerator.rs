//! Content enumeration - matches content files and hands out lazy loaders

use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{ContentError, Result};
use super::{ContentPath, FrontMatter, MarkdownRenderer, RawModule};

/// Pending resolution of one content module
pub type LoadFuture = BoxFuture<'static, Result<RawModule>>;

/// Deferred load of one content module, invoked at most once
pub type Loader = Box<dyn FnOnce() -> LoadFuture + Send>;

/// Matched paths and their loaders, in enumeration order
pub type Entries = IndexMap<ContentPath, Loader>;

/// Source of content files for the listers
pub trait ContentEnumerator {
    /// Match `pattern` (e.g. `./blog/**/*.md`) against the content root.
    ///
    /// Nothing is read yet: each entry carries a loader for its module.
    fn enumerate(&self, pattern: &str) -> Result<Entries>;
}

/// Enumerates markdown files on disk below a content root
pub struct GlobEnumerator {
    root: PathBuf,
    renderer: Arc<MarkdownRenderer>,
}

impl GlobEnumerator {
    /// Create an enumerator rooted at `root`
    pub fn new<P: AsRef<Path>>(root: P, renderer: MarkdownRenderer) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            renderer: Arc::new(renderer),
        }
    }

    /// `<root>/blog/a/b.md` -> `./blog/a/b.md`
    fn content_path(&self, file: &Path) -> Option<ContentPath> {
        let relative = file.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(ContentPath::new(format!("./{}", parts.join("/"))))
    }

    fn loader(&self, path: ContentPath, file: PathBuf) -> Loader {
        let renderer = Arc::clone(&self.renderer);
        Box::new(move || -> LoadFuture {
            Box::pin(async move {
                load_module(&renderer, &file)
                    .await
                    .map_err(|e| ContentError::resolve(path.as_str(), e))
            })
        })
    }
}

impl ContentEnumerator for GlobEnumerator {
    fn enumerate(&self, pattern: &str) -> Result<Entries> {
        let relative = pattern
            .strip_prefix("./")
            .ok_or_else(|| ContentError::Pattern {
                pattern: pattern.to_string(),
                message: "pattern must start with ./".to_string(),
            })?;

        if !self.root.is_dir() {
            return Err(ContentError::Enumerate {
                pattern: pattern.to_string(),
                message: format!("content root {} is not a directory", self.root.display()),
            });
        }

        let root = self.root.to_str().ok_or_else(|| ContentError::Enumerate {
            pattern: pattern.to_string(),
            message: format!("content root {} is not valid UTF-8", self.root.display()),
        })?;
        let full_pattern = Path::new(&glob::Pattern::escape(root)).join(relative);

        let matches = glob::glob(&full_pattern.to_string_lossy()).map_err(|e| {
            ContentError::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;

        let mut entries = Entries::new();
        for entry in matches {
            let file = entry.map_err(|e| ContentError::Enumerate {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            if !file.is_file() {
                continue;
            }
            let path = self.content_path(&file).ok_or_else(|| ContentError::Enumerate {
                pattern: pattern.to_string(),
                message: format!("{} is outside the content root", file.display()),
            })?;
            let loader = self.loader(path.clone(), file);
            entries.insert(path, loader);
        }

        tracing::debug!("Matched {} files for {}", entries.len(), pattern);
        Ok(entries)
    }
}

/// Read, split and render one markdown file
async fn load_module(renderer: &MarkdownRenderer, file: &Path) -> anyhow::Result<RawModule> {
    let content = tokio::fs::read_to_string(file).await?;
    let (frontmatter, body) = FrontMatter::parse(&content)?;

    Ok(RawModule {
        frontmatter,
        file: file.to_path_buf(),
        raw_content: body.to_string(),
        compiled_content: renderer.render(body),
        headings: MarkdownRenderer::headings(body),
    })
}
