//! chapterbar - chapter timeline player for the terminal
//!
//! Chapter navigation for a media timeline: a chapter registry, timeline
//! markers and segments, active chapter tracking, click-to-jump,
//! drag-to-scrub, arrow key seeking and double-tap skipping.

pub mod chapters;
pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod theme;

pub use chapters::{Chapter, ChapterList};
pub use config::Config;
pub use player::ChapterWidget;
