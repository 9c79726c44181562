//! Integration tests for chapter file loading and the widget built from it

use chapterbar::chapters::{load_chapters, ChapterError};
use chapterbar::player::playback::find_active_chapter_index;
use chapterbar::player::{ChapterWidget, WidgetSettings};

use crate::helpers::fixture;

#[test]
fn toml_fixture_loads_with_duration() {
    let loaded = load_chapters(fixture("talk.toml")).expect("Should load talk.toml");

    assert_eq!(loaded.chapters.len(), 3);
    assert_eq!(loaded.duration, Some(750.0));
    let starts: Vec<f64> = loaded.chapters.iter().map(|c| c.start_time).collect();
    assert_eq!(starts, vec![0.0, 125.0, 380.5]);
}

#[test]
fn json_fixtures_load_in_both_forms() {
    let bare = load_chapters(fixture("bare.json")).expect("Should load bare.json");
    assert_eq!(bare.duration, None);
    assert_eq!(bare.chapters.get(2).unwrap().title, "Credits");

    let full = load_chapters(fixture("full.json")).expect("Should load full.json");
    assert_eq!(full.duration, Some(600.0));
    assert_eq!(full.chapters.get(1).unwrap().start_time, 450.0);
}

#[test]
fn unsorted_fixture_reports_offending_chapter() {
    match load_chapters(fixture("unsorted.toml")) {
        Err(ChapterError::Unsorted { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected Unsorted error, got {:?}", other.map(|l| l.chapters)),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let result = load_chapters("/nonexistent/path/chapters.toml");
    assert!(matches!(result, Err(ChapterError::Read { .. })));
}

#[test]
fn loaded_chapters_drive_the_widget() {
    let loaded = load_chapters(fixture("talk.toml")).unwrap();
    let duration = loaded.duration.unwrap();
    let mut widget = ChapterWidget::new(loaded.chapters.clone(), WidgetSettings::default());
    widget.resize(100, 3, duration);

    let layout = widget.layout().expect("duration is known");
    assert_eq!(layout.markers.len(), 3);
    assert_eq!(layout.segments.last().unwrap().end_percent, 100.0);

    // Every boundary belongs to the chapter that starts there
    for (index, chapter) in loaded.chapters.iter().enumerate() {
        assert_eq!(
            find_active_chapter_index(&loaded.chapters, chapter.start_time, duration),
            Some(index)
        );
    }

    assert!(widget.track(400.0, duration));
    assert_eq!(widget.active_index(), Some(2));
}
