//! Playback logic for the chapter player.
//!
//! This module handles timeline layout, active chapter tracking and seek arithmetic.

mod seeking;
mod timeline;
mod tracker;

pub use seeking::{clamp_to_media, seek_by, time_at_track_offset};
pub use timeline::{
    layout_timeline, percent_to_column, segment_columns, MarkerPosition, SegmentSpan,
    TimelineLayout, TimelineSettings,
};
pub use tracker::{find_active_chapter_index, ActiveChapter};
