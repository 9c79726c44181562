//! Play command handler

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use chapterbar::player::{play_chapters, PlayerOptions, WidgetSettings};
use chapterbar::theme::current_theme;
use chapterbar::Config;

use super::{load_source, paint};

/// Open the player for a chapter file (or the demo list).
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    path: Option<&Path>,
    duration: Option<f64>,
    paused: bool,
    speed: f64,
) -> Result<()> {
    let source = load_source(path, duration)?;
    let theme = current_theme(config);

    let options = PlayerOptions {
        duration: source.duration,
        autoplay: !paused,
        speed,
        tick: Duration::from_millis(config.player.tick_ms),
        settings: WidgetSettings::from_config(config),
        theme: theme.clone(),
    };

    let result = play_chapters(&source.name, source.chapters, options)?;
    println!("{}", paint(&result.message(), |text| theme.primary_text(text)));
    Ok(())
}
