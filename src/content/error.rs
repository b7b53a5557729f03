//! Content loading errors

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while enumerating, loading or listing content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid content pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Failed to enumerate {pattern:?}: {message}")]
    Enumerate { pattern: String, message: String },

    #[error("Failed to load {path}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid publishDate {value:?} in {path}: {source}")]
    PublishDate {
        path: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Missing publishDate in {path}")]
    MissingPublishDate { path: String },
}

impl ContentError {
    /// Wrap a loader failure for the given content path
    pub fn resolve(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Resolve {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
