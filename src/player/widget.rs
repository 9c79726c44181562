//! The chapter widget.
//!
//! `ChapterWidget` owns everything the chapter UI needs between events:
//! the chapter list, the current timeline layout, the active chapter, the
//! scrub state, the double-tap detector and the chapter list scroll
//! position. The event loop forwards media events and user input to it, and
//! the renderer reads it back.

use std::time::Instant;

use tracing::{debug, info};

use crate::chapters::ChapterList;
use crate::player::media::{MediaElement, MediaEvent};
use crate::player::playback::{
    find_active_chapter_index, layout_timeline, seek_by, time_at_track_offset, ActiveChapter,
    TimelineLayout,
};
use crate::player::state::{ClickSource, ScrubState, SeekDirection, TapDetector, WidgetSettings};

#[derive(Debug, Clone)]
pub struct ChapterWidget {
    chapters: ChapterList,
    settings: WidgetSettings,
    layout: Option<TimelineLayout>,
    track_width: u16,
    active: ActiveChapter,
    scrub: ScrubState,
    taps: TapDetector,
    /// First chapter shown in the list
    list_offset: usize,
    /// Number of chapter rows the list can show
    list_rows: usize,
}

impl ChapterWidget {
    pub fn new(chapters: ChapterList, settings: WidgetSettings) -> Self {
        Self {
            chapters,
            settings,
            layout: None,
            track_width: 0,
            active: ActiveChapter::default(),
            scrub: ScrubState::Idle,
            taps: TapDetector::new(settings.double_tap_window),
            list_offset: 0,
            list_rows: 0,
        }
    }

    pub fn chapters(&self) -> &ChapterList {
        &self.chapters
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Current timeline layout, `None` until the duration is known.
    pub fn layout(&self) -> Option<&TimelineLayout> {
        self.layout.as_ref()
    }

    pub fn track_width(&self) -> u16 {
        self.track_width
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.index()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.is_active(index)
    }

    pub fn scrub_state(&self) -> ScrubState {
        self.scrub
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Dispatch a media lifecycle event.
    pub fn on_media_event(&mut self, event: MediaEvent, media: &dyn MediaElement) {
        match event {
            MediaEvent::LoadedMetadata | MediaEvent::DurationChange => {
                self.render_timeline(media.duration());
            }
            MediaEvent::TimeUpdate | MediaEvent::Ended => {
                self.track(media.current_time(), media.duration());
            }
        }
    }

    /// Viewport changed: new track width and chapter list height.
    pub fn resize(&mut self, track_width: u16, list_rows: usize, duration: f64) {
        self.track_width = track_width;
        self.list_rows = list_rows;
        self.render_timeline(duration);
        if let Some(index) = self.active.index() {
            self.scroll_into_view(index);
        } else {
            self.clamp_list_offset();
        }
    }

    /// Recompute marker and segment positions for `duration`.
    ///
    /// Leaves the timeline empty while the duration is unknown or the track
    /// has no width.
    pub fn render_timeline(&mut self, duration: f64) {
        self.layout = layout_timeline(
            &self.chapters,
            duration,
            self.track_width,
            &self.settings.timeline,
        );
        match &self.layout {
            Some(layout) => debug!(
                duration,
                track_width = self.track_width,
                markers = layout.markers.len(),
                "timeline rebuilt"
            ),
            None => debug!(duration, track_width = self.track_width, "timeline cleared"),
        }
    }

    /// Highlight the chapter containing `time`. Returns true if the
    /// highlight moved.
    pub fn track(&mut self, time: f64, duration: f64) -> bool {
        let index = find_active_chapter_index(&self.chapters, time, duration);
        self.activate(index)
    }

    /// Move the highlight to `index` and scroll it into view.
    ///
    /// A no-op when `index` is already active.
    pub fn activate(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|i| *i < self.chapters.len());
        if !self.active.set(index) {
            return false;
        }
        match index {
            Some(i) => {
                if let Some(chapter) = self.chapters.get(i) {
                    info!(index = i, title = %chapter.title, "active chapter changed");
                }
                self.scroll_into_view(i);
            }
            None => debug!("active chapter cleared"),
        }
        true
    }

    /// Jump to a chapter's start and highlight it without waiting for the
    /// next time update.
    pub fn click_chapter(&mut self, index: usize, source: ClickSource, media: &mut dyn MediaElement) {
        let Some(chapter) = self.chapters.get(index) else {
            return;
        };
        debug!(index, ?source, start = chapter.start_time, "chapter clicked");
        media.set_current_time(chapter.start_time);

        let resume = match source {
            ClickSource::ChapterList => true,
            ClickSource::Marker | ClickSource::Segment => self.settings.resume_on_timeline_click,
        };
        if resume {
            media.play();
        }
        self.activate(Some(index));
    }

    /// Pointer pressed on the track at `offset` cells from its left edge.
    ///
    /// Starts scrubbing and seeks to the pressed position. Returns false when
    /// nothing can be mapped (zero-width track or unknown duration).
    pub fn pointer_down(&mut self, offset: f64, media: &mut dyn MediaElement) -> bool {
        let Some(time) = time_at_track_offset(offset, self.track_width, media.duration()) else {
            return false;
        };
        self.scrub = ScrubState::Dragging;
        debug!(time, "scrub started");
        media.set_current_time(time);
        true
    }

    /// Pointer moved. Seeks while dragging; the pointer is captured, so
    /// offsets outside the track clamp to its ends.
    pub fn pointer_move(&mut self, offset: f64, media: &mut dyn MediaElement) {
        if self.scrub != ScrubState::Dragging {
            return;
        }
        if let Some(time) = time_at_track_offset(offset, self.track_width, media.duration()) {
            media.set_current_time(time);
        }
    }

    /// Pointer released or cancelled. Returns true if a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.scrub == ScrubState::Dragging;
        if was_dragging {
            debug!("scrub ended");
        }
        self.scrub = ScrubState::Idle;
        was_dragging
    }

    /// Seek one step backward or forward, clamped to the media bounds.
    pub fn seek_step(&mut self, direction: SeekDirection, media: &mut dyn MediaElement) -> f64 {
        seek_by(media, direction.sign() * self.settings.seek_step)
    }

    /// Register a tap at column `x` of a screen `screen_width` wide.
    ///
    /// The second tap of a double-tap seeks one step: forward on the right
    /// half of the screen, backward on the left. Returns true if it seeked.
    pub fn tap(&mut self, x: u16, screen_width: u16, now: Instant, media: &mut dyn MediaElement) -> bool {
        if !self.taps.register(now) {
            return false;
        }
        let direction = if x as f64 > screen_width as f64 / 2.0 {
            SeekDirection::Forward
        } else {
            SeekDirection::Backward
        };
        debug!(x, screen_width, ?direction, "double tap");
        self.seek_step(direction, media);
        true
    }

    /// Jump to the first chapter starting after the current position.
    pub fn next_chapter(&mut self, media: &mut dyn MediaElement) -> bool {
        let now = media.current_time();
        let next = self
            .chapters
            .iter()
            .position(|chapter| chapter.start_time > now + 0.1);
        match next {
            Some(index) => {
                self.seek_to_chapter(index, media);
                true
            }
            None => false,
        }
    }

    /// Jump to the start of the previous chapter.
    ///
    /// A position more than a second into a chapter counts as "in" it, so
    /// the first press returns to the current chapter's start.
    pub fn previous_chapter(&mut self, media: &mut dyn MediaElement) {
        let now = media.current_time();
        let index = self
            .chapters
            .iter()
            .rposition(|chapter| chapter.start_time < now - 1.0)
            .unwrap_or(0);
        self.seek_to_chapter(index, media);
    }

    fn seek_to_chapter(&mut self, index: usize, media: &mut dyn MediaElement) {
        if let Some(chapter) = self.chapters.get(index) {
            media.set_current_time(chapter.start_time);
            self.activate(Some(index));
        }
    }

    /// Centre `index` in the chapter list where possible.
    fn scroll_into_view(&mut self, index: usize) {
        self.list_offset = index.saturating_sub(self.list_rows / 2);
        self.clamp_list_offset();
    }

    fn clamp_list_offset(&mut self) {
        let max_offset = self.chapters.len().saturating_sub(self.list_rows);
        self.list_offset = self.list_offset.min(max_offset);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::chapters::Chapter;
    use std::time::Duration;

    /// Media element with a manually controlled position.
    #[derive(Debug)]
    pub(crate) struct ManualMedia {
        pub time: f64,
        pub duration: f64,
        pub paused: bool,
    }

    impl ManualMedia {
        pub(crate) fn new(duration: f64) -> Self {
            Self {
                time: 0.0,
                duration,
                paused: true,
            }
        }
    }

    impl MediaElement for ManualMedia {
        fn current_time(&self) -> f64 {
            self.time
        }
        fn set_current_time(&mut self, time: f64) {
            self.time = time;
        }
        fn duration(&self) -> f64 {
            self.duration
        }
        fn play(&mut self) {
            self.paused = false;
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    fn widget() -> ChapterWidget {
        let chapters = ChapterList::new(vec![
            Chapter::new("Intro", 0.0),
            Chapter::new("Middle", 30.0),
            Chapter::new("End", 60.0),
        ])
        .unwrap();
        let mut widget = ChapterWidget::new(chapters, WidgetSettings::default());
        widget.resize(50, 3, 100.0);
        widget
    }

    #[test]
    fn timeline_waits_for_metadata() {
        let mut widget = ChapterWidget::new(ChapterList::demo(), WidgetSettings::default());
        widget.resize(80, 5, f64::NAN);
        assert!(widget.layout().is_none());

        let media = ManualMedia::new(ChapterList::DEMO_DURATION);
        widget.on_media_event(MediaEvent::LoadedMetadata, &media);
        assert_eq!(widget.layout().unwrap().markers.len(), 11);
    }

    #[test]
    fn time_update_moves_highlight() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);
        media.time = 45.0;
        widget.on_media_event(MediaEvent::TimeUpdate, &media);
        assert_eq!(widget.active_index(), Some(1));
    }

    #[test]
    fn repeated_ticks_are_idempotent() {
        let mut widget = widget();
        assert!(widget.track(10.0, 100.0));
        assert!(!widget.track(11.0, 100.0));
        assert!(!widget.activate(Some(0)));

        let highlighted = (0..widget.chapters().len())
            .filter(|i| widget.is_active(*i))
            .count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn out_of_range_activation_clears() {
        let mut widget = widget();
        widget.activate(Some(1));
        widget.activate(Some(99));
        assert_eq!(widget.active_index(), None);
    }

    #[test]
    fn chapter_list_click_seeks_plays_and_activates() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);

        widget.click_chapter(2, ClickSource::ChapterList, &mut media);

        assert_eq!(media.time, 60.0);
        assert!(!media.paused);
        assert_eq!(widget.active_index(), Some(2));
    }

    #[test]
    fn marker_click_does_not_resume_by_default() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);

        widget.click_chapter(1, ClickSource::Marker, &mut media);

        assert_eq!(media.time, 30.0);
        assert!(media.paused);
        assert_eq!(widget.active_index(), Some(1));
    }

    #[test]
    fn segment_click_resumes_when_configured() {
        let chapters = ChapterList::demo();
        let settings = WidgetSettings {
            resume_on_timeline_click: true,
            ..WidgetSettings::default()
        };
        let mut widget = ChapterWidget::new(chapters, settings);
        let mut media = ManualMedia::new(ChapterList::DEMO_DURATION);

        widget.click_chapter(4, ClickSource::Segment, &mut media);
        assert_eq!(media.time, 575.0);
        assert!(!media.paused);
    }

    #[test]
    fn scrub_state_machine() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);

        // Moves without a press do nothing
        widget.pointer_move(10.0, &mut media);
        assert_eq!(media.time, 0.0);

        assert!(widget.pointer_down(25.0, &mut media));
        assert_eq!(widget.scrub_state(), ScrubState::Dragging);
        assert_eq!(media.time, 50.0);

        widget.pointer_move(40.0, &mut media);
        assert_eq!(media.time, 80.0);

        // Captured: outside the track clamps
        widget.pointer_move(75.0, &mut media);
        assert_eq!(media.time, 100.0);
        widget.pointer_move(-5.0, &mut media);
        assert_eq!(media.time, 0.0);

        assert!(widget.pointer_up());
        assert_eq!(widget.scrub_state(), ScrubState::Idle);

        widget.pointer_move(40.0, &mut media);
        assert_eq!(media.time, 0.0);
        assert!(!widget.pointer_up());
    }

    #[test]
    fn scrub_is_a_no_op_on_zero_width_track() {
        let mut widget = widget();
        widget.resize(0, 3, 100.0);
        let mut media = ManualMedia::new(100.0);

        assert!(!widget.pointer_down(5.0, &mut media));
        assert_eq!(widget.scrub_state(), ScrubState::Idle);
        assert_eq!(media.time, 0.0);
    }

    #[test]
    fn arrow_seek_stays_in_bounds() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);

        media.time = 95.0;
        assert_eq!(widget.seek_step(SeekDirection::Forward, &mut media), 100.0);
        media.time = 3.0;
        assert_eq!(widget.seek_step(SeekDirection::Backward, &mut media), 0.0);
        media.time = 50.0;
        assert_eq!(widget.seek_step(SeekDirection::Forward, &mut media), 60.0);
    }

    #[test]
    fn double_tap_on_right_half_adds_one_step() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);
        media.time = 20.0;
        let start = Instant::now();

        assert!(!widget.tap(70, 80, start, &mut media));
        assert_eq!(media.time, 20.0);
        assert!(widget.tap(70, 80, start + Duration::from_millis(200), &mut media));
        assert_eq!(media.time, 30.0);
    }

    #[test]
    fn double_tap_on_left_half_goes_back_and_clamps() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);
        media.time = 4.0;
        let start = Instant::now();

        widget.tap(10, 80, start, &mut media);
        assert!(widget.tap(10, 80, start + Duration::from_millis(100), &mut media));
        assert_eq!(media.time, 0.0);
    }

    #[test]
    fn double_tap_forward_clamps_at_duration() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);
        media.time = 97.0;
        let start = Instant::now();

        widget.tap(79, 80, start, &mut media);
        widget.tap(79, 80, start + Duration::from_millis(50), &mut media);
        assert_eq!(media.time, 100.0);
    }

    #[test]
    fn slow_taps_do_not_seek() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);
        media.time = 50.0;
        let start = Instant::now();

        widget.tap(70, 80, start, &mut media);
        assert!(!widget.tap(70, 80, start + Duration::from_millis(400), &mut media));
        assert_eq!(media.time, 50.0);
    }

    #[test]
    fn next_and_previous_chapter() {
        let mut widget = widget();
        let mut media = ManualMedia::new(100.0);

        media.time = 10.0;
        assert!(widget.next_chapter(&mut media));
        assert_eq!(media.time, 30.0);
        assert_eq!(widget.active_index(), Some(1));

        assert!(widget.next_chapter(&mut media));
        assert_eq!(media.time, 60.0);
        assert!(!widget.next_chapter(&mut media));

        // 60.0 is the start of "End"; back goes to "Middle"
        widget.previous_chapter(&mut media);
        assert_eq!(media.time, 30.0);

        // Well into "Middle": back returns to its start
        media.time = 45.0;
        widget.previous_chapter(&mut media);
        assert_eq!(media.time, 30.0);

        media.time = 0.5;
        widget.previous_chapter(&mut media);
        assert_eq!(media.time, 0.0);
    }

    #[test]
    fn active_chapter_is_scrolled_into_view() {
        let mut widget = ChapterWidget::new(ChapterList::demo(), WidgetSettings::default());
        widget.resize(80, 4, ChapterList::DEMO_DURATION);

        widget.activate(Some(6));
        assert_eq!(widget.list_offset(), 4); // 6 - 4/2

        widget.activate(Some(0));
        assert_eq!(widget.list_offset(), 0);

        // Near the end the list stops scrolling
        widget.activate(Some(10));
        assert_eq!(widget.list_offset(), 7); // 11 - 4
    }

    #[test]
    fn resize_rebuilds_timeline_for_new_width() {
        let mut widget = widget();
        assert_eq!(widget.layout().unwrap().track_width, 50);
        widget.resize(120, 3, 100.0);
        assert_eq!(widget.layout().unwrap().track_width, 120);
        assert_eq!(widget.track_width(), 120);
    }
}
