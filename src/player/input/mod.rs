//! Input handling for the chapter player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::media::MediaElement;
use crate::player::state::{InputResult, UiState};
use crate::player::widget::ChapterWidget;

/// Handle any input event, dispatching to the appropriate handler.
///
/// `now` timestamps the event for double-tap detection.
pub fn handle_event(
    event: Event,
    widget: &mut ChapterWidget,
    media: &mut dyn MediaElement,
    ui: &mut UiState,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, widget, media, ui),
        Event::Mouse(mouse) => handle_mouse_event(mouse, widget, media, ui, now),
        Event::Resize(new_cols, new_rows) => {
            let chapter_count = widget.chapters().len();
            ui.handle_resize(new_cols, new_rows, chapter_count);
            widget.resize(ui.view.track.width, ui.view.list_rows(), media.duration());
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}
