//! Keyboard input handling for the chapter player.
//!
//! Handles playback controls, fixed-step seeking, chapter navigation and
//! the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::player::media::MediaElement;
use crate::player::state::{InputResult, SeekDirection, UiState};
use crate::player::widget::ChapterWidget;

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    widget: &mut ChapterWidget,
    media: &mut dyn MediaElement,
    ui: &mut UiState,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if ui.show_help {
        ui.show_help = false;
        ui.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        // === Help ===
        KeyCode::Char('?') => ui.toggle_help(),

        // === Playback controls ===
        KeyCode::Char(' ') => media.toggle_play(),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            media.set_playback_rate(media.playback_rate() * 1.5);
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            media.set_playback_rate(media.playback_rate() / 1.5);
        }

        // === Seeking ===
        KeyCode::Left => {
            widget.seek_step(SeekDirection::Backward, media);
        }
        KeyCode::Right => {
            widget.seek_step(SeekDirection::Forward, media);
        }
        KeyCode::Home => media.set_current_time(0.0),
        KeyCode::End => {
            let duration = media.duration();
            if duration.is_finite() {
                media.set_current_time(duration);
            }
        }

        // === Chapter navigation ===
        KeyCode::Char('n') => {
            widget.next_chapter(media);
        }
        KeyCode::Char('p') => widget.previous_chapter(media),

        _ => return InputResult::Continue,
    }

    debug!(code = ?key.code, "key handled");
    ui.needs_render = true;
    InputResult::Continue
}
