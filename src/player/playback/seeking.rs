//! Seek arithmetic shared by the keyboard, pointer and tap handlers.

use tracing::debug;

use crate::player::media::MediaElement;

/// Clamp a target position to `[0, duration]`.
///
/// While the duration is unknown only the lower bound applies.
pub fn clamp_to_media(time: f64, duration: f64) -> f64 {
    let time = if time.is_nan() { 0.0 } else { time.max(0.0) };
    if duration.is_finite() && duration >= 0.0 {
        time.min(duration)
    } else {
        time
    }
}

/// Seek relative to the current position, clamped to the media bounds.
///
/// Returns the new position.
pub fn seek_by(media: &mut dyn MediaElement, delta: f64) -> f64 {
    let from = media.current_time();
    let target = clamp_to_media(from + delta, media.duration());
    debug!(from, to = target, delta, "seek by step");
    media.set_current_time(target);
    target
}

/// Map a horizontal offset on the track to a playback time.
///
/// `offset` is measured in cells from the track's left edge and may fall
/// outside the track while the pointer is captured; the result is clamped to
/// `[0, duration]`. Returns `None` for a zero-width track or an unknown
/// duration.
pub fn time_at_track_offset(offset: f64, track_width: u16, duration: f64) -> Option<f64> {
    if track_width == 0 || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let ratio = offset / track_width as f64;
    Some((ratio * duration).clamp(0.0, duration))
}
