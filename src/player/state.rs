//! Player state types
//!
//! Shared types used across the player modules: control flow results,
//! terminal UI state, widget settings, the scrub state machine and the
//! double-tap detector.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::Config;
use crate::player::playback::TimelineSettings;
use crate::player::render::ViewLayout;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Where a chapter click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSource {
    /// An entry in the chapter list
    ChapterList,
    /// A marker on the timeline
    Marker,
    /// A segment on the timeline
    Segment,
}

/// Direction of a fixed-step seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// Signed multiplier for a step.
    pub fn sign(self) -> f64 {
        match self {
            SeekDirection::Backward => -1.0,
            SeekDirection::Forward => 1.0,
        }
    }
}

/// Scrubbing state machine.
///
/// `Idle -> Dragging` on pointer-down over the track, `Dragging -> Idle` on
/// pointer-up. While dragging every pointer move seeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrubState {
    #[default]
    Idle,
    Dragging,
}

/// Terminal-side UI state: overlay visibility and the current geometry.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Geometry of the last layout pass
    pub view: ViewLayout,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl UiState {
    pub fn new(term_cols: u16, term_rows: u16, chapter_count: usize) -> Self {
        Self {
            show_help: false,
            view: ViewLayout::compute(Rect::new(0, 0, term_cols, term_rows), chapter_count),
            needs_render: true,
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, term_cols: u16, term_rows: u16, chapter_count: usize) {
        self.view = ViewLayout::compute(Rect::new(0, 0, term_cols, term_rows), chapter_count);
        self.needs_render = true;
    }
}

/// Behaviour knobs for the chapter widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetSettings {
    /// Arrow key and double-tap seek step in seconds
    pub seek_step: f64,
    /// Maximum gap between two taps of a double-tap
    pub double_tap_window: Duration,
    /// Resume playback after a marker or segment click
    pub resume_on_timeline_click: bool,
    pub timeline: TimelineSettings,
}

impl WidgetSettings {
    /// Settings derived from the user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            seek_step: config.player.seek_step_secs,
            double_tap_window: Duration::from_millis(config.player.double_tap_ms),
            resume_on_timeline_click: config.player.resume_on_timeline_click,
            timeline: TimelineSettings {
                safe_edge_percent: config.timeline.safe_edge_percent,
                min_segment_width: config.timeline.min_segment_width,
            },
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            seek_step: 10.0,
            double_tap_window: Duration::from_millis(300),
            resume_on_timeline_click: false,
            timeline: TimelineSettings::default(),
        }
    }
}

/// Detects two taps within a time window.
#[derive(Debug, Clone)]
pub struct TapDetector {
    window: Duration,
    last_tap: Option<Instant>,
}

impl TapDetector {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Record a tap at `now`. Returns true if it completes a double-tap.
    ///
    /// The last tap time is always updated, so a third quick tap pairs
    /// with the second one.
    pub fn register(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_tap
            .and_then(|last| now.checked_duration_since(last))
            .is_some_and(|gap| gap < self.window);
        self.last_tap = Some(now);
        is_double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tap_is_not_double() {
        let mut taps = TapDetector::new(Duration::from_millis(300));
        assert!(!taps.register(Instant::now()));
    }

    #[test]
    fn two_quick_taps_are_double() {
        let mut taps = TapDetector::new(Duration::from_millis(300));
        let start = Instant::now();
        assert!(!taps.register(start));
        assert!(taps.register(start + Duration::from_millis(299)));
    }

    #[test]
    fn slow_taps_are_not_double() {
        let mut taps = TapDetector::new(Duration::from_millis(300));
        let start = Instant::now();
        taps.register(start);
        assert!(!taps.register(start + Duration::from_millis(300)));
        assert!(!taps.register(start + Duration::from_millis(900)));
    }

    #[test]
    fn third_quick_tap_pairs_with_second() {
        let mut taps = TapDetector::new(Duration::from_millis(300));
        let start = Instant::now();
        taps.register(start);
        assert!(taps.register(start + Duration::from_millis(100)));
        assert!(taps.register(start + Duration::from_millis(200)));
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.player.seek_step_secs = 5.0;
        config.player.double_tap_ms = 250;
        config.timeline.min_segment_width = 2.0;

        let settings = WidgetSettings::from_config(&config);
        assert_eq!(settings.seek_step, 5.0);
        assert_eq!(settings.double_tap_window, Duration::from_millis(250));
        assert_eq!(settings.timeline.min_segment_width, 2.0);
    }

    #[test]
    fn default_settings_match_default_config() {
        assert_eq!(
            WidgetSettings::from_config(&Config::default()),
            WidgetSettings::default()
        );
    }

    #[test]
    fn ui_state_tracks_resize() {
        let mut ui = UiState::new(80, 30, 11);
        assert_eq!(ui.view.track.width, 78);
        ui.needs_render = false;

        ui.handle_resize(120, 40, 11);
        assert_eq!(ui.view.track.width, 118);
        assert!(ui.needs_render);
    }

    #[test]
    fn toggle_help_flips_overlay() {
        let mut ui = UiState::new(80, 30, 11);
        ui.toggle_help();
        assert!(ui.show_help);
        ui.toggle_help();
        assert!(!ui.show_help);
    }

    #[test]
    fn seek_direction_sign() {
        assert_eq!(SeekDirection::Backward.sign(), -1.0);
        assert_eq!(SeekDirection::Forward.sign(), 1.0);
    }
}
