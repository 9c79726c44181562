//! Chapter player module
//!
//! Provides the chapter widget and a terminal player around it:
//!
//! - `widget`: Chapter registry state, active chapter tracking, click, scrub
//!   and double-tap handling
//! - `native`: Terminal session (raw mode, event loop, redraws)
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `format`: Clock time formatting and parsing
//! - `media`: The `MediaElement` seam and a wall-clock implementation
//! - `state`: Shared types (InputResult, ScrubState, UiState, settings)
//! - `input/`: Keyboard and mouse input handling
//! - `playback/`: Timeline layout, active chapter lookup and seeking
//! - `render/`: UI rendering (screen, timeline, chapter list, status bar, help)
//!
//! # Usage
//!
//! ```no_run
//! use chapterbar::chapters::ChapterList;
//! use chapterbar::player::{play_chapters, PlayerOptions, WidgetSettings};
//! use chapterbar::theme::Theme;
//! use std::time::Duration;
//!
//! let options = PlayerOptions {
//!     duration: Some(ChapterList::DEMO_DURATION),
//!     autoplay: true,
//!     speed: 1.0,
//!     tick: Duration::from_millis(100),
//!     settings: WidgetSettings::default(),
//!     theme: Theme::default(),
//! };
//! let result = play_chapters("demo", ChapterList::demo(), options).unwrap();
//! println!("{}", result.message());
//! ```

pub mod format;
pub(crate) mod input;
pub mod media;
mod native;
pub mod playback;
pub mod render;
pub mod state;
pub mod widget;

pub use media::{MediaElement, MediaEvent, SimulatedMedia};
pub use native::{play_chapters, PlaybackResult, PlayerOptions};
pub use state::{ClickSource, InputResult, ScrubState, SeekDirection, WidgetSettings};
pub use widget::ChapterWidget;
