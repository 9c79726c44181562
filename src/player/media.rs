//! Media element abstraction.
//!
//! The chapter widget never owns playback. It talks to a `MediaElement`
//! the same way a page script talks to a native video element: read and
//! write the current position, read the duration (NaN until metadata is
//! known), play, pause and change speed. Lifecycle notifications arrive as
//! `MediaEvent`s.
//!
//! `SimulatedMedia` is a wall-clock medium: the position is `time_offset`
//! plus the wall time elapsed since `start_time`, scaled by the speed.

use std::time::Instant;

use tracing::{debug, info};

/// Lifecycle events fired by a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Metadata (including duration) became available
    LoadedMetadata,
    /// Duration changed
    DurationChange,
    /// Playback position changed, by playing or by seeking
    TimeUpdate,
    /// Playback reached the end
    Ended,
}

/// The playback surface a chapter widget drives.
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// Seek to `time` seconds.
    fn set_current_time(&mut self, time: f64);
    /// Total duration in seconds, `f64::NAN` while unknown.
    fn duration(&self) -> f64;
    /// Start or resume playback.
    fn play(&mut self);
    /// Pause playback.
    fn pause(&mut self);
    /// Whether playback is paused.
    fn is_paused(&self) -> bool;

    /// Playback speed multiplier (1.0 = normal).
    fn playback_rate(&self) -> f64 {
        1.0
    }
    /// Change the playback speed. Media without variable speed ignore this.
    fn set_playback_rate(&mut self, _rate: f64) {}

    /// Toggle between playing and paused.
    fn toggle_play(&mut self) {
        if self.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }
}

/// Wall-clock media element used by the terminal player.
#[derive(Debug)]
pub struct SimulatedMedia {
    duration: Option<f64>,
    paused: bool,
    /// Playback speed multiplier (1.0 = normal)
    speed: f64,
    /// Wall clock time when playback started/resumed
    start_time: Instant,
    /// Position at `start_time`
    time_offset: f64,

    metadata_sent: bool,
    ended_sent: bool,
    seeked: bool,
    last_reported: f64,
}

impl SimulatedMedia {
    /// Create a paused medium at position 0.
    ///
    /// A `None` duration behaves like a stream whose metadata never loads:
    /// the duration stays NaN and playback never ends.
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            duration: duration.filter(|d| d.is_finite() && *d > 0.0),
            paused: true,
            speed: 1.0,
            start_time: Instant::now(),
            time_offset: 0.0,
            metadata_sent: false,
            ended_sent: false,
            seeked: false,
            last_reported: f64::NAN,
        }
    }

    /// Collect events that happened since the previous poll.
    ///
    /// The first poll reports `LoadedMetadata` and `DurationChange` when the
    /// duration is known. `TimeUpdate` fires whenever the position moved or
    /// a seek happened, and `Ended` fires once when the end is reached.
    pub fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.poll_events_at(Instant::now())
    }

    fn poll_events_at(&mut self, now: Instant) -> Vec<MediaEvent> {
        let mut events = Vec::new();

        if !self.metadata_sent {
            self.metadata_sent = true;
            if let Some(duration) = self.duration {
                info!(duration, "media metadata loaded");
                events.push(MediaEvent::LoadedMetadata);
                events.push(MediaEvent::DurationChange);
            }
        }

        let position = self.position_at(now);
        let reached_end = self.duration.is_some_and(|d| position >= d);
        if reached_end && !self.paused {
            self.paused = true;
            self.rebase(position);
        }

        if self.seeked || position != self.last_reported {
            self.seeked = false;
            self.last_reported = position;
            events.push(MediaEvent::TimeUpdate);
        }

        if reached_end && !self.ended_sent {
            self.ended_sent = true;
            debug!("media ended");
            events.push(MediaEvent::Ended);
        }

        events
    }

    fn position_at(&self, now: Instant) -> f64 {
        let position = if self.paused {
            self.time_offset
        } else {
            self.time_offset + now.duration_since(self.start_time).as_secs_f64() * self.speed
        };
        match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        }
    }

    fn rebase(&mut self, position: f64) {
        self.time_offset = position;
        self.start_time = Instant::now();
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn set_current_time(&mut self, time: f64) {
        let mut time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        if let Some(duration) = self.duration {
            time = time.min(duration);
        }
        self.rebase(time);
        self.seeked = true;
        if self.duration.is_some_and(|d| time < d) {
            self.ended_sent = false;
        }
    }

    fn duration(&self) -> f64 {
        self.duration.unwrap_or(f64::NAN)
    }

    fn play(&mut self) {
        if !self.paused {
            return;
        }
        let mut position = self.time_offset;
        // Playing from the end restarts, like a native element
        if self.duration.is_some_and(|d| position >= d) {
            position = 0.0;
            self.seeked = true;
            self.ended_sent = false;
        }
        self.paused = false;
        self.rebase(position);
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        let position = self.position_at(Instant::now());
        self.paused = true;
        self.rebase(position);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn playback_rate(&self) -> f64 {
        self.speed
    }

    /// Clamped to 0.1x..16x.
    fn set_playback_rate(&mut self, rate: f64) {
        let position = self.position_at(Instant::now());
        self.speed = if rate.is_finite() { rate.clamp(0.1, 16.0) } else { 1.0 };
        self.rebase(position);
    }
}
