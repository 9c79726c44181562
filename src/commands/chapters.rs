//! Chapters command handler

use std::path::Path;

use anyhow::Result;

use chapterbar::chapters::ChapterList;
use chapterbar::player::format::format_time;
use chapterbar::theme::current_theme;
use chapterbar::Config;

use super::{load_source, paint};

/// Print the chapter table.
pub fn handle(config: &Config, path: Option<&Path>, duration: Option<f64>) -> Result<()> {
    let source = load_source(path, duration)?;
    let theme = current_theme(config);

    let mut lines = format_table(&source.chapters, source.duration).into_iter();
    if let Some(header) = lines.next() {
        println!("{}", paint(&header, |text| theme.accent_text(text)));
    }
    for line in lines {
        println!("{}", line);
    }

    let summary = match source.duration {
        Some(duration) => format!(
            "{} chapters, {} total",
            source.chapters.len(),
            format_time(duration)
        ),
        None => format!("{} chapters, duration unknown", source.chapters.len()),
    };
    println!();
    println!("{}", paint(&summary, |text| theme.secondary_text(text)));
    Ok(())
}

/// Header plus one row per chapter: number, start, end and title.
///
/// The last chapter's end is `-` when the duration is unknown.
fn format_table(chapters: &ChapterList, duration: Option<f64>) -> Vec<String> {
    let mut lines = Vec::with_capacity(chapters.len() + 1);
    lines.push(format!("{:>3}  {:<8}  {:<8}  {}", "#", "Start", "End", "Title"));

    for (index, chapter) in chapters.iter().enumerate() {
        let end_time = chapters.end_time(index, duration.unwrap_or(f64::NAN));
        let end = if end_time.is_finite() {
            format_time(end_time)
        } else {
            "-".to_string()
        };
        lines.push(format!(
            "{:>3}  {:<8}  {:<8}  {}",
            index + 1,
            format_time(chapter.start_time),
            end,
            chapter.title
        ));
    }
    lines
}
