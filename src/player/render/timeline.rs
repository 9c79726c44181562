//! Timeline rendering: marker row, segment row and scrub track.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::player::playback::{segment_columns, TimelineLayout};
use crate::player::render::layout::ViewLayout;
use crate::player::widget::ChapterWidget;
use crate::theme::Theme;

pub const MARKER_CHAR: char = '◆';
pub const SEGMENT_CHAR: char = '▬';
pub const PLAYHEAD_CHAR: char = '⏺';

/// Build the track character array.
///
/// Returns `(chars, filled)` where `filled` is the number of played cells.
/// The playhead sits on the first unplayed cell.
pub fn build_track_chars(width: usize, current_time: f64, duration: f64) -> (Vec<char>, usize) {
    let progress = if duration.is_finite() && duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (width as f64 * progress) as usize;
    let mut bar: Vec<char> = vec!['─'; width];
    for cell in bar.iter_mut().take(filled) {
        *cell = '━';
    }
    if filled < width {
        bar[filled] = PLAYHEAD_CHAR;
    }

    (bar, filled)
}

/// Marker row cells: which chapter's marker is drawn on each column.
pub fn build_marker_cells(layout: &TimelineLayout) -> Vec<Option<usize>> {
    let mut cells = vec![None; layout.track_width as usize];
    for marker in &layout.markers {
        let column = layout.column_for_percent(marker.percent) as usize;
        if let Some(cell) = cells.get_mut(column) {
            *cell = Some(marker.chapter);
        }
    }
    cells
}

/// Segment row cells: which chapter's segment is drawn on each column.
///
/// Later segments overwrite earlier ones, matching hit-testing.
pub fn build_segment_cells(layout: &TimelineLayout) -> Vec<Option<usize>> {
    let width = layout.track_width as usize;
    let mut cells = vec![None; width];
    for segment in &layout.segments {
        if segment.width_percent <= 0.0 {
            continue;
        }
        let (start, end) = segment_columns(segment, layout.track_width);
        for cell in cells.iter_mut().take(end as usize).skip(start as usize) {
            *cell = Some(segment.chapter);
        }
    }
    cells
}

/// Render the timeline block.
pub fn render_timeline(
    frame: &mut Frame,
    view: &ViewLayout,
    widget: &ChapterWidget,
    current_time: f64,
    duration: f64,
    theme: &Theme,
) {
    let title = widget
        .active_index()
        .and_then(|i| widget.layout().and_then(|layout| layout.segments.get(i)))
        .map(|segment| format!(" {} ", segment.label))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(title, theme.accent_style()));
    frame.render_widget(block, view.timeline);

    let Some(layout) = widget.layout() else {
        // No duration yet: only an empty track
        frame.render_widget(
            Paragraph::new("─".repeat(view.track.width as usize))
                .style(theme.text_secondary_style()),
            view.track,
        );
        return;
    };

    let marker_spans: Vec<Span> = build_marker_cells(layout)
        .into_iter()
        .map(|cell| match cell {
            Some(chapter) => Span::styled(
                MARKER_CHAR.to_string(),
                theme.marker_style(widget.is_active(chapter)),
            ),
            None => Span::raw(" "),
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(marker_spans)), view.markers_row);

    let segment_spans: Vec<Span> = build_segment_cells(layout)
        .into_iter()
        .map(|cell| match cell {
            Some(chapter) if widget.is_active(chapter) => {
                Span::styled(SEGMENT_CHAR.to_string(), theme.highlight_style())
            }
            Some(chapter) => Span::styled(SEGMENT_CHAR.to_string(), theme.segment_style(chapter)),
            None => Span::raw(" "),
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(segment_spans)), view.segments_row);

    let (bar, filled) = build_track_chars(view.track.width as usize, current_time, duration);
    let track_spans: Vec<Span> = bar
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i < filled {
                theme.accent_style()
            } else if i == filled {
                Style::default().fg(theme.text_primary)
            } else {
                theme.text_secondary_style()
            };
            Span::styled(c.to_string(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(track_spans)), view.track);
}
