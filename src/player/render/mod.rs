//! Rendering components for the chapter player.
//!
//! This module contains all the UI rendering functions for the player:
//! the main pane, the timeline, the chapter list, the status line and the
//! help overlay. Geometry lives in `layout` so mouse handling hit-tests
//! against exactly what was drawn.

mod chapters;
mod help;
pub mod layout;
mod screen;
mod status;
mod timeline;

pub use chapters::{chapter_at_row, chapter_row_text, render_chapter_list, truncate_to_width};
pub use help::{help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use layout::ViewLayout;
pub use screen::render_screen;
pub use status::{build_status_spans, position_text, render_status, KEY_HINTS};
pub use timeline::{
    build_marker_cells, build_segment_cells, build_track_chars, render_timeline, MARKER_CHAR,
    PLAYHEAD_CHAR, SEGMENT_CHAR,
};

use ratatui::Frame;

use crate::player::media::MediaElement;
use crate::player::widget::ChapterWidget;
use crate::theme::Theme;

/// Media state captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub speed: f64,
}

impl PlaybackSnapshot {
    pub fn capture(media: &dyn MediaElement, speed: f64) -> Self {
        Self {
            current_time: media.current_time(),
            duration: media.duration(),
            paused: media.is_paused(),
            speed,
        }
    }
}

/// Draw the whole player.
pub fn render_player(
    frame: &mut Frame,
    widget: &ChapterWidget,
    playback: &PlaybackSnapshot,
    show_help: bool,
    theme: &Theme,
) {
    let view = ViewLayout::compute(frame.area(), widget.chapters().len());

    render_screen(frame, &view, widget, playback, theme);
    render_timeline(
        frame,
        &view,
        widget,
        playback.current_time,
        playback.duration,
        theme,
    );
    render_chapter_list(frame, &view, widget, theme);
    render_status(frame, &view, playback, theme);

    if show_help {
        render_help(frame, theme);
    }
}
