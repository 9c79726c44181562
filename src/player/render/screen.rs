//! Main pane: the active chapter, in place of the picture.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::PlaybackSnapshot;
use crate::player::format::format_time;
use crate::player::render::layout::ViewLayout;
use crate::player::widget::ChapterWidget;
use crate::theme::Theme;

pub fn render_screen(
    frame: &mut Frame,
    view: &ViewLayout,
    widget: &ChapterWidget,
    playback: &PlaybackSnapshot,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(" chapterbar ", theme.accent_bold_style()));

    let chapters = widget.chapters();
    let mut lines = Vec::new();

    match widget.active_index().and_then(|i| chapters.get(i).map(|c| (i, c))) {
        Some((index, chapter)) => {
            lines.push(Line::from(Span::styled(
                chapter.title.clone(),
                theme.accent_bold_style(),
            )));
            let end = chapters.end_time(index, playback.duration);
            lines.push(Line::from(Span::styled(
                format!(
                    "Chapter {}/{}  ·  {} – {}",
                    index + 1,
                    chapters.len(),
                    format_time(chapter.start_time),
                    format_time(end)
                ),
                theme.text_secondary_style(),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "No chapter",
            theme.text_secondary_style(),
        ))),
    }

    lines.push(Line::default());
    let state = if playback.paused { "⏸ paused" } else { "▶ playing" };
    lines.push(Line::from(Span::styled(state, theme.text_style())));
    lines.push(Line::from(Span::styled(
        "double-click left/right half to skip",
        theme.text_secondary_style(),
    )));

    // Centre the text block vertically inside the border
    let inner_height = view.screen.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::default(); pad];
    padded.extend(lines);

    let paragraph = Paragraph::new(padded)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, view.screen);
}
