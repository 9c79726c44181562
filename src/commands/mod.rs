//! Subcommand handlers

pub mod chapters;
pub mod completions;
pub mod config;
pub mod play;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use chapterbar::chapters::{load_chapters, ChapterList};

/// Chapters to work on, with the media duration that applies to them.
pub struct ChapterSource {
    /// File name, or "demo" for the built-in list
    pub name: String,
    pub chapters: ChapterList,
    pub duration: Option<f64>,
}

/// Load `path`, or the demo list when no path is given.
///
/// An explicit `duration` overrides the one declared in the file.
pub fn load_source(path: Option<&Path>, duration: Option<f64>) -> Result<ChapterSource> {
    let Some(path) = path else {
        return Ok(ChapterSource {
            name: "demo".to_string(),
            chapters: ChapterList::demo(),
            duration: duration.or(Some(ChapterList::DEMO_DURATION)),
        });
    };

    let loaded = load_chapters(path)
        .with_context(|| format!("Failed to load chapters from {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(
        file = %path.display(),
        chapters = loaded.chapters.len(),
        duration = ?loaded.duration,
        "chapters loaded"
    );

    Ok(ChapterSource {
        name,
        chapters: loaded.chapters,
        duration: duration.or(loaded.duration),
    })
}

/// Apply an ANSI style only when stdout is a terminal.
pub fn paint(text: &str, style: impl Fn(&str) -> String) -> String {
    if atty::is(atty::Stream::Stdout) {
        style(text)
    } else {
        text.to_string()
    }
}
