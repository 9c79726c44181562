//! Chapter loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a chapter list.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    #[error("Failed to read chapter file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML chapter file: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("Invalid JSON chapter file: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Unsupported chapter file extension '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Chapter list is empty")]
    Empty,

    #[error("Chapter {index} ('{title}') has an invalid start time: {value}")]
    InvalidStart {
        index: usize,
        title: String,
        value: String,
    },

    #[error("Chapter {index} starts at {start}s, before the previous chapter ({previous}s)")]
    Unsorted {
        index: usize,
        start: f64,
        previous: f64,
    },
}
