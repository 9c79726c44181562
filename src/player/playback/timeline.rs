//! Timeline layout: marker and segment positions.
//!
//! Positions are expressed as percentages of the track width so the layout
//! only depends on chapter times, the media duration and the track width.
//! The renderer maps percentages to terminal columns.

use crate::chapters::ChapterList;
use crate::player::format::format_time;

/// Layout tuning for the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSettings {
    /// Markers are kept at least this far (percent) from either track edge
    pub safe_edge_percent: f64,
    /// Minimum rendered segment width in track cells, so short chapters stay clickable
    pub min_segment_width: f64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            safe_edge_percent: 0.6,
            min_segment_width: 1.0,
        }
    }
}

/// Marker information for the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPosition {
    /// Chapter this marker belongs to
    pub chapter: usize,
    /// Left position in percent of the track, edge-clamped
    pub percent: f64,
    /// `"M:SS - Title"` label
    pub label: String,
}

/// Clickable region spanning a chapter's interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpan {
    /// Chapter this segment belongs to
    pub chapter: usize,
    /// Natural start in percent
    pub start_percent: f64,
    /// Natural end in percent (next chapter's start, or 100 for the last)
    pub end_percent: f64,
    /// Rendered width in percent, at least the minimum-width floor
    pub width_percent: f64,
    /// `"M:SS - Title"` label
    pub label: String,
}

impl SegmentSpan {
    /// Rendered end in percent (`start + width`, never past 100).
    pub fn display_end_percent(&self) -> f64 {
        self.start_percent + self.width_percent
    }
}

/// Computed timeline for one duration/track-width pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub duration: f64,
    pub track_width: u16,
    pub markers: Vec<MarkerPosition>,
    pub segments: Vec<SegmentSpan>,
}

impl TimelineLayout {
    /// Column a percentage falls on for this track width.
    pub fn column_for_percent(&self, percent: f64) -> u16 {
        percent_to_column(percent, self.track_width)
    }

    /// Segment under a track column.
    ///
    /// Segments are drawn in order, so where a widened segment overlaps its
    /// neighbour the later one is on top and wins the hit.
    pub fn segment_at_column(&self, column: u16) -> Option<&SegmentSpan> {
        if column >= self.track_width {
            return None;
        }
        self.segments.iter().rev().find(|segment| {
            let (start, end) = segment_columns(segment, self.track_width);
            segment.width_percent > 0.0 && column >= start && column < end
        })
    }

    /// Marker drawn on a track column, if any. Later markers win ties.
    pub fn marker_at_column(&self, column: u16) -> Option<&MarkerPosition> {
        self.markers
            .iter()
            .rev()
            .find(|marker| self.column_for_percent(marker.percent) == column)
    }
}

/// Build marker and segment positions.
///
/// Returns `None` when nothing can be drawn: unknown, non-finite or zero
/// duration, or a zero-width track.
pub fn layout_timeline(
    chapters: &ChapterList,
    duration: f64,
    track_width: u16,
    settings: &TimelineSettings,
) -> Option<TimelineLayout> {
    if !duration.is_finite() || duration <= 0.0 || track_width == 0 {
        return None;
    }

    let edge = settings.safe_edge_percent.clamp(0.0, 50.0);
    let floor = (settings.min_segment_width.max(0.0) / track_width as f64 * 100.0).min(100.0);
    let to_percent = |time: f64| (time / duration * 100.0).clamp(0.0, 100.0);

    let mut markers = Vec::with_capacity(chapters.len());
    let mut segments = Vec::with_capacity(chapters.len());

    for (index, chapter) in chapters.iter().enumerate() {
        let label = format!("{} - {}", format_time(chapter.start_time), chapter.title);

        let percent = to_percent(chapter.start_time).clamp(edge, 100.0 - edge);
        markers.push(MarkerPosition {
            chapter: index,
            percent,
            label: label.clone(),
        });

        let start_percent = to_percent(chapter.start_time);
        let end_percent = to_percent(chapters.end_time(index, duration)).max(start_percent);
        let natural = end_percent - start_percent;
        let width_percent = natural.max(floor).min(100.0 - start_percent);
        segments.push(SegmentSpan {
            chapter: index,
            start_percent,
            end_percent,
            width_percent,
            label,
        });
    }

    Some(TimelineLayout {
        duration,
        track_width,
        markers,
        segments,
    })
}

/// Map a percentage to a column on a track of `width` cells.
pub fn percent_to_column(percent: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let column = (percent / 100.0 * width as f64).floor();
    (column.max(0.0) as u16).min(width - 1)
}

/// Half-open column range `[start, end)` a segment occupies. Always at
/// least one column wide.
pub fn segment_columns(segment: &SegmentSpan, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let start = percent_to_column(segment.start_percent, width);
    let end = (segment.display_end_percent() / 100.0 * width as f64).ceil() as u16;
    (start, end.clamp(start + 1, width))
}
