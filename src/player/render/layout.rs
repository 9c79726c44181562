//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Most chapter rows shown at once before the list scrolls.
pub const MAX_LIST_ROWS: u16 = 8;

/// Rows used by the timeline block (border + markers + segments + track + border).
pub const TIMELINE_HEIGHT: u16 = 5;

/// Where each part of the player is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Main pane; double-taps here seek
    pub screen: Rect,
    /// Timeline block including its border
    pub timeline: Rect,
    pub markers_row: Rect,
    pub segments_row: Rect,
    /// Scrub track
    pub track: Rect,
    /// Chapter list block including its border
    pub chapter_block: Rect,
    /// Chapter list rows
    pub chapter_rows: Rect,
    pub status: Rect,
}

impl ViewLayout {
    /// Split `area` for a list of `chapter_count` chapters.
    pub fn compute(area: Rect, chapter_count: usize) -> Self {
        let list_rows = (chapter_count as u16).clamp(1, MAX_LIST_ROWS);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(TIMELINE_HEIGHT),
                Constraint::Length(list_rows + 2),
                Constraint::Length(1),
            ])
            .split(area);

        let timeline = chunks[1];
        let timeline_inner = inner(timeline);
        let row = |offset: u16| {
            if offset < timeline_inner.height {
                Rect::new(timeline_inner.x, timeline_inner.y + offset, timeline_inner.width, 1)
            } else {
                Rect::new(timeline_inner.x, timeline_inner.y, timeline_inner.width, 0)
            }
        };

        Self {
            screen: chunks[0],
            timeline,
            markers_row: row(0),
            segments_row: row(1),
            track: row(2),
            chapter_block: chunks[2],
            chapter_rows: inner(chunks[2]),
            status: chunks[3],
        }
    }

    /// Number of chapter rows the list can display.
    pub fn list_rows(&self) -> usize {
        self.chapter_rows.height as usize
    }
}

/// Area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Whether the cell at (`column`, `row`) lies in `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.width > 0
        && area.height > 0
        && column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
