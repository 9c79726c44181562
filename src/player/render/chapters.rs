//! Chapter list rendering.

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::format::format_time;
use crate::player::render::layout::ViewLayout;
use crate::player::widget::ChapterWidget;
use crate::theme::Theme;

/// Width of the time column including padding.
const TIME_COLUMN: usize = 10;

/// Truncate `text` to at most `max_width` display columns, ending with `…`
/// when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Text of one chapter row for a list `width` columns wide.
pub fn chapter_row_text(start_time: f64, title: &str, width: usize) -> String {
    let time = format!(" {:>7}  ", format_time(start_time));
    let title = truncate_to_width(title, width.saturating_sub(TIME_COLUMN));
    let mut line = format!("{}{}", time, title);
    let pad = width.saturating_sub(line.width());
    line.push_str(&" ".repeat(pad));
    line
}

/// Render the chapter list, scrolled so the active chapter is visible.
pub fn render_chapter_list(frame: &mut Frame, view: &ViewLayout, widget: &ChapterWidget, theme: &Theme) {
    let chapters = widget.chapters();
    let title = format!(" Chapters ({}) ", chapters.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(Span::styled(title, theme.text_style()));
    frame.render_widget(block, view.chapter_block);

    let width = view.chapter_rows.width as usize;
    let lines: Vec<Line> = chapters
        .iter()
        .enumerate()
        .skip(widget.list_offset())
        .take(view.list_rows())
        .map(|(index, chapter)| {
            let text = chapter_row_text(chapter.start_time, &chapter.title, width);
            let style = if widget.is_active(index) {
                theme.highlight_style()
            } else {
                theme.text_style()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), view.chapter_rows);
}

/// Chapter index under a row of the list, if any.
pub fn chapter_at_row(view: &ViewLayout, widget: &ChapterWidget, row: u16) -> Option<usize> {
    if row < view.chapter_rows.y || row >= view.chapter_rows.y + view.chapter_rows.height {
        return None;
    }
    let index = widget.list_offset() + (row - view.chapter_rows.y) as usize;
    (index < widget.chapters().len()).then_some(index)
}
