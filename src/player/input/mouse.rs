//! Mouse input handling for the chapter player.
//!
//! Handles clicks on the chapter list, markers and segments, drag-to-scrub on
//! the track and double-click skipping on the screen pane.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::media::MediaElement;
use crate::player::render::chapter_at_row;
use crate::player::render::layout::contains;
use crate::player::state::{ClickSource, InputResult, ScrubState, UiState};
use crate::player::widget::ChapterWidget;

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    widget: &mut ChapterWidget,
    media: &mut dyn MediaElement,
    ui: &mut UiState,
    now: Instant,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if ui.show_help {
                ui.show_help = false;
                ui.needs_render = true;
                return InputResult::Continue;
            }
            if press(mouse.column, mouse.row, widget, media, ui) {
                ui.needs_render = true;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if widget.scrub_state() == ScrubState::Dragging {
                widget.pointer_move(track_offset(mouse.column, ui), media);
                ui.needs_render = true;
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if widget.pointer_up() {
                ui.needs_render = true;
            } else if contains(ui.view.screen, mouse.column, mouse.row) {
                let x = mouse.column - ui.view.screen.x;
                if widget.tap(x, ui.view.screen.width, now, media) {
                    ui.needs_render = true;
                }
            }
        }
        _ => {}
    }

    InputResult::Continue
}

/// Left button pressed at (`column`, `row`). Returns true if anything changed.
fn press(
    column: u16,
    row: u16,
    widget: &mut ChapterWidget,
    media: &mut dyn MediaElement,
    ui: &UiState,
) -> bool {
    let view = &ui.view;

    if contains(view.track, column, row) {
        return widget.pointer_down(track_offset(column, ui), media);
    }

    if contains(view.markers_row, column, row) {
        let hit = widget
            .layout()
            .and_then(|layout| layout.marker_at_column(column - view.markers_row.x))
            .map(|marker| marker.chapter);
        if let Some(index) = hit {
            widget.click_chapter(index, ClickSource::Marker, media);
            return true;
        }
        return false;
    }

    if contains(view.segments_row, column, row) {
        let hit = widget
            .layout()
            .and_then(|layout| layout.segment_at_column(column - view.segments_row.x))
            .map(|segment| segment.chapter);
        if let Some(index) = hit {
            widget.click_chapter(index, ClickSource::Segment, media);
            return true;
        }
        return false;
    }

    if contains(view.chapter_rows, column, row) {
        if let Some(index) = chapter_at_row(view, widget, row) {
            widget.click_chapter(index, ClickSource::ChapterList, media);
            return true;
        }
    }

    false
}

/// Offset from the track's left edge; negative left of the track.
fn track_offset(column: u16, ui: &UiState) -> f64 {
    column as f64 - ui.view.track.x as f64
}
