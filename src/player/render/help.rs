//! Help overlay rendering for the chapter player.
//!
//! Displays a centered help box with all available shortcuts.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space        Play / Pause",
    "    ←/→          Seek -/+ one step",
    "    Home/End     Go to start / end",
    "    +/-          Speed up / down",
    "",
    "  Chapters",
    "    n / p        Next / previous chapter",
    "    Click        Jump to a chapter, marker",
    "                 or segment",
    "",
    "  Timeline",
    "    Drag track   Scrub",
    "    Double-click Skip back (left half) or",
    "                 forward (right half)",
    "",
    "  General",
    "    ?            Show this help",
    "    q / Esc      Quit player",
    "",
    "        Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 44;

/// Centered rectangle for the help box, shrunk to fit small terminals.
pub fn help_area(area: Rect) -> Rect {
    let width = HELP_BOX_WIDTH.min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the help overlay on top of the player.
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = help_area(frame.area());
    let lines: Vec<Line> = HELP_LINES.iter().map(|line| Line::from(*line)).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" chapterbar help ");

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(theme.text_style()),
        area,
    );
}
