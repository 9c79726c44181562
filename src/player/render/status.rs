//! Status line rendering for the chapter player.
//!
//! Displays play state, position/duration, speed and keyboard shortcuts.

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::PlaybackSnapshot;
use crate::player::format::format_time;
use crate::player::render::layout::ViewLayout;
use crate::theme::Theme;

/// Key hints shown after the playback readout.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("space", "play"),
    ("←/→", "seek"),
    ("n/p", "chapter"),
    ("?", "help"),
    ("q", "quit"),
];

/// `"1:23 / 24:00"`
pub fn position_text(current_time: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current_time), format_time(duration))
}

/// Build styled spans for the status line.
pub fn build_status_spans(playback: &PlaybackSnapshot, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(6 + KEY_HINTS.len() * 2);

    let state = if playback.paused { " ▶ " } else { " ⏸ " };
    spans.push(Span::styled(state.to_string(), theme.text_style()));
    spans.push(Span::styled(
        position_text(playback.current_time, playback.duration),
        theme.text_style(),
    ));
    spans.push(Span::styled("  spd:".to_string(), theme.text_secondary_style()));
    spans.push(Span::styled(
        format!("{:.1}x ", playback.speed),
        theme.text_style(),
    ));
    spans.push(Span::styled("│".to_string(), theme.text_secondary_style()));

    for (key, desc) in KEY_HINTS {
        spans.push(Span::styled(format!(" {}", key), theme.accent_style()));
        spans.push(Span::styled(
            format!(":{}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

pub fn render_status(frame: &mut Frame, view: &ViewLayout, playback: &PlaybackSnapshot, theme: &Theme) {
    let line = Line::from(build_status_spans(playback, theme));
    frame.render_widget(Paragraph::new(line), view.status);
}
