//! Terminal player loop.
//!
//! Owns the terminal for the lifetime of a session: raw mode, alternate
//! screen and mouse capture are enabled on entry and restored on every
//! exit path, including panics.

use std::io::{self, Stdout};
use std::panic;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::chapters::ChapterList;
use crate::player::format::format_time;
use crate::player::input::handle_event;
use crate::player::media::{MediaElement, SimulatedMedia};
use crate::player::render::{render_player, PlaybackSnapshot};
use crate::player::state::{InputResult, UiState, WidgetSettings};
use crate::player::widget::ChapterWidget;
use crate::theme::Theme;

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// Playback reached the end before the user quit
    Finished(String),
    /// User quit before the end, at the given position
    Interrupted { name: String, position: f64 },
}

impl PlaybackResult {
    /// One-line summary for the shell after the terminal is restored.
    pub fn message(&self) -> String {
        match self {
            PlaybackResult::Finished(name) => format!("Finished: {}", name),
            PlaybackResult::Interrupted { name, position } => {
                format!("Stopped: {} at {}", name, format_time(*position))
            }
        }
    }
}

/// Options for one player session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Media duration in seconds; `None` keeps the timeline empty
    pub duration: Option<f64>,
    /// Start playing immediately
    pub autoplay: bool,
    /// Initial playback speed
    pub speed: f64,
    /// Poll timeout of the event loop
    pub tick: Duration,
    pub settings: WidgetSettings,
    pub theme: Theme,
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Play `chapters` in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_chapters(
    name: &str,
    chapters: ChapterList,
    options: PlayerOptions,
) -> Result<PlaybackResult> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
        original_hook(info);
    }));

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
    .context("Failed to enter alternate screen")?;
    let guard = TerminalGuard;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let result = run_loop(&mut terminal, name, chapters, &options);

    drop(guard);
    let _ = panic::take_hook();

    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    name: &str,
    chapters: ChapterList,
    options: &PlayerOptions,
) -> Result<PlaybackResult> {
    let (cols, rows) = terminal::size()?;
    let mut ui = UiState::new(cols, rows, chapters.len());
    let mut widget = ChapterWidget::new(chapters, options.settings);
    let mut media = SimulatedMedia::new(options.duration);

    media.set_playback_rate(options.speed);
    if options.autoplay {
        media.play();
    }
    widget.resize(ui.view.track.width, ui.view.list_rows(), media.duration());
    info!(name, chapters = widget.chapters().len(), "player started");

    loop {
        for media_event in media.poll_events() {
            widget.on_media_event(media_event, &media);
            ui.needs_render = true;
        }

        if ui.needs_render {
            let playback = PlaybackSnapshot::capture(&media, media.playback_rate());
            terminal.draw(|frame| {
                render_player(frame, &widget, &playback, ui.show_help, &options.theme)
            })?;
            ui.needs_render = false;
        }

        if event::poll(options.tick)? {
            let input = event::read()?;
            if handle_event(input, &mut widget, &mut media, &mut ui, Instant::now())
                == InputResult::Quit
            {
                break;
            }
        }
    }

    let position = media.current_time();
    let ended = position >= media.duration();
    debug!(position, ended, "player stopped");
    Ok(if ended {
        PlaybackResult::Finished(name.to_string())
    } else {
        PlaybackResult::Interrupted {
            name: name.to_string(),
            position,
        }
    })
}
