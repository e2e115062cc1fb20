// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Document-level failures. Anything that aborts a run ends up here;
/// per-row oddities are absorbed where they happen and never surface.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("failed to render feed: {0}")]
    Render(#[from] std::io::Error),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl FeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FeedError::Io { path: path.into(), source }
    }
}
