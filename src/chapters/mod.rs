//! Chapter registry
//!
//! A chapter list is an ordered, immutable sequence of `(title, start_time)`
//! pairs. It is built once (from the built-in demo list or a chapter file)
//! and only read afterwards.
//!
//! Chapter files come in two flavours, picked by extension:
//!
//! ```toml
//! duration = "24:00"
//!
//! [[chapter]]
//! title = "Introduction"
//! time = 0
//!
//! [[chapter]]
//! title = "Execution plan"
//! time = "9:35"
//! ```
//!
//! ```json
//! { "duration": 1440, "chapters": [{ "title": "Introduction", "time": 0 }] }
//! ```
//!
//! A bare JSON array of chapters is accepted too.

mod error;

pub use error::ChapterError;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::player::format::parse_time;

/// A named point in playback.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    /// Display title
    pub title: String,
    /// Start time in seconds
    pub start_time: f64,
}

impl Chapter {
    pub fn new(title: impl Into<String>, start_time: f64) -> Self {
        Self {
            title: title.into(),
            start_time,
        }
    }
}

/// Validated, ascending list of chapters.
///
/// Construction guarantees the list is non-empty, every start time is finite
/// and non-negative, and start times never decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterList {
    chapters: Vec<Chapter>,
}

impl ChapterList {
    /// Validate and wrap a chapter vector.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self, ChapterError> {
        if chapters.is_empty() {
            return Err(ChapterError::Empty);
        }

        let mut previous = 0.0f64;
        for (index, chapter) in chapters.iter().enumerate() {
            if !chapter.start_time.is_finite() || chapter.start_time < 0.0 {
                return Err(ChapterError::InvalidStart {
                    index,
                    title: chapter.title.clone(),
                    value: chapter.start_time.to_string(),
                });
            }
            if chapter.start_time < previous {
                return Err(ChapterError::Unsorted {
                    index,
                    start: chapter.start_time,
                    previous,
                });
            }
            previous = chapter.start_time;
        }

        Ok(Self { chapters })
    }

    /// The built-in demo chapter list (a 24 minute talk).
    pub fn demo() -> Self {
        let chapters = [
            ("Introduction", 0.0),
            ("Legacy VB.NET Inventory App", 72.0),
            ("Legacy application repository & pain points", 357.0),
            ("Solution: Controlled modernization", 474.0),
            ("Execution plan", 575.0),
            ("CodeFWD and CodeFWD demo", 626.0),
            ("Microservice API visualization", 1006.0),
            ("Product vision", 1086.0),
            ("What it solves?", 1187.0),
            ("Coexistence with VB.NET", 1278.0),
            ("Closing", 1359.0),
        ];
        Self {
            chapters: chapters
                .iter()
                .map(|(title, time)| Chapter::new(*title, *time))
                .collect(),
        }
    }

    /// Duration of the demo recording in seconds.
    pub const DEMO_DURATION: f64 = 1440.0;

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always false for a validated list; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn as_slice(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Effective end of chapter `index`: the next chapter's start, or
    /// `duration` for the last chapter.
    pub fn end_time(&self, index: usize, duration: f64) -> f64 {
        self.chapters
            .get(index + 1)
            .map(|next| next.start_time)
            .unwrap_or(duration)
    }
}

impl<'a> IntoIterator for &'a ChapterList {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}

/// Result of loading a chapter file.
#[derive(Debug, Clone)]
pub struct LoadedChapters {
    pub chapters: ChapterList,
    /// Media duration declared by the file, if any
    pub duration: Option<f64>,
}

/// A start time as written in a chapter file: seconds or a time string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawTime {
    Seconds(f64),
    Text(String),
}

impl RawTime {
    fn resolve(&self) -> Option<f64> {
        match self {
            RawTime::Seconds(secs) => Some(*secs),
            RawTime::Text(text) => parse_time(text),
        }
    }

    fn describe(&self) -> String {
        match self {
            RawTime::Seconds(secs) => secs.to_string(),
            RawTime::Text(text) => format!("\"{}\"", text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    title: String,
    #[serde(alias = "start_time", alias = "start")]
    time: RawTime,
}

#[derive(Debug, Deserialize)]
struct ChapterFile {
    #[serde(default)]
    duration: Option<RawTime>,
    #[serde(default, alias = "chapters")]
    chapter: Vec<RawChapter>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonChapterFile {
    Bare(Vec<RawChapter>),
    Full(ChapterFile),
}

/// Load chapters from a `.toml` or `.json` file.
pub fn load_chapters(path: impl AsRef<Path>) -> Result<LoadedChapters, ChapterError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path).map_err(|source| ChapterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_str() {
        "toml" => parse_toml_chapters(&content),
        "json" => parse_json_chapters(&content),
        _ => Err(ChapterError::UnsupportedFormat { extension }),
    }
}

/// Parse a TOML chapter document.
pub fn parse_toml_chapters(content: &str) -> Result<LoadedChapters, ChapterError> {
    let file: ChapterFile = toml::from_str(content)?;
    resolve(file)
}

/// Parse a JSON chapter document (bare array or object form).
pub fn parse_json_chapters(content: &str) -> Result<LoadedChapters, ChapterError> {
    let file = match serde_json::from_str::<JsonChapterFile>(content)? {
        JsonChapterFile::Bare(chapter) => ChapterFile {
            duration: None,
            chapter,
        },
        JsonChapterFile::Full(file) => file,
    };
    resolve(file)
}

fn resolve(file: ChapterFile) -> Result<LoadedChapters, ChapterError> {
    let mut chapters = Vec::with_capacity(file.chapter.len());
    for (index, raw) in file.chapter.into_iter().enumerate() {
        let start_time = raw.time.resolve().ok_or_else(|| ChapterError::InvalidStart {
            index,
            title: raw.title.clone(),
            value: raw.time.describe(),
        })?;
        chapters.push(Chapter::new(raw.title, start_time));
    }

    // An unparseable or non-positive duration is treated as unknown
    let duration = file
        .duration
        .and_then(|raw| raw.resolve())
        .filter(|secs| secs.is_finite() && *secs > 0.0);

    Ok(LoadedChapters {
        chapters: ChapterList::new(chapters)?,
        duration,
    })
}
