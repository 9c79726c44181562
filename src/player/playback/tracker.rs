//! Active chapter tracking.
//!
//! Maps a playback position to the chapter whose interval contains it and
//! remembers which chapter is currently highlighted.

use crate::chapters::ChapterList;

/// Find the chapter active at `time`.
///
/// Chapter `i` covers `[start_i, start_{i+1})` and the last chapter covers
/// `[start_last, duration]`. The first matching chapter wins, so a position
/// exactly on a boundary belongs to the later chapter. While the duration is
/// unknown the last chapter is open-ended.
///
/// Returns `None` for positions before the first chapter or past the
/// duration.
pub fn find_active_chapter_index(chapters: &ChapterList, time: f64, duration: f64) -> Option<usize> {
    if !time.is_finite() {
        return None;
    }
    let last = chapters.len().checked_sub(1)?;

    chapters.iter().enumerate().position(|(i, chapter)| {
        if time < chapter.start_time {
            return false;
        }
        if i == last {
            return !duration.is_finite() || time <= duration;
        }
        time < chapters.end_time(i, duration)
    })
}

/// Highlighted chapter.
///
/// The chapter list, markers and segments all read this one index, so at
/// most one of each is highlighted at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveChapter {
    index: Option<usize>,
}

impl ActiveChapter {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Move the highlight. Returns false when `index` is already active.
    pub fn set(&mut self, index: Option<usize>) -> bool {
        if self.index == index {
            return false;
        }
        self.index = index;
        true
    }
}
