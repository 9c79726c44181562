//! Command line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::player::format::parse_time;

/// Chapter timeline player for the terminal
#[derive(Parser, Debug)]
#[command(name = "chapterbar")]
#[command(version)]
#[command(
    about = "Chapter timeline player for the terminal",
    long_about = "Plays a chaptered timeline in the terminal: a chapter list, timeline \
                  markers and segments, drag-to-scrub, arrow key seeking and \
                  double-click skipping. Without a chapters file the built-in demo \
                  chapters are used."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a chapter file in the terminal
    Play {
        /// Chapter file (.toml or .json); the demo chapters if omitted
        chapters: Option<PathBuf>,

        /// Media duration (seconds, M:SS or H:MM:SS); overrides the file
        #[arg(short, long, value_name = "TIME", value_parser = parse_duration_arg)]
        duration: Option<f64>,

        /// Start paused instead of playing
        #[arg(long)]
        paused: bool,

        /// Initial playback speed
        #[arg(short, long, default_value_t = 1.0, value_parser = parse_speed_arg)]
        speed: f64,
    },

    /// Print the chapter table
    Chapters {
        /// Chapter file (.toml or .json); the demo chapters if omitted
        chapters: Option<PathBuf>,

        /// Media duration (seconds, M:SS or H:MM:SS); overrides the file
        #[arg(short, long, value_name = "TIME", value_parser = parse_duration_arg)]
        duration: Option<f64>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

fn parse_duration_arg(value: &str) -> Result<f64, String> {
    match parse_time(value) {
        Some(seconds) if seconds > 0.0 => Ok(seconds),
        Some(_) => Err("duration must be greater than zero".to_string()),
        None => Err(format!(
            "invalid time '{}': expected seconds, M:SS or H:MM:SS",
            value
        )),
    }
}

fn parse_speed_arg(value: &str) -> Result<f64, String> {
    let speed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid speed '{}'", value))?;
    if speed.is_finite() && (0.1..=16.0).contains(&speed) {
        Ok(speed)
    } else {
        Err("speed must be between 0.1 and 16".to_string())
    }
}
