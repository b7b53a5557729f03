//! Content module - discovers, loads and lists markdown content

pub mod date;
pub mod enumerator;
mod error;
mod frontmatter;
pub mod lister;
mod markdown;
mod module;

pub use enumerator::{ContentEnumerator, GlobEnumerator};
pub use error::{ContentError, Result};
pub use frontmatter::FrontMatter;
pub use lister::{list_legal_pages, list_posts, PostSummary};
pub use markdown::{Heading, MarkdownRenderer};
pub use module::{ContentPath, RawModule};
