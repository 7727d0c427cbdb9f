//! Integration tests for the timeline widget driven through its public API

use seekline::widget::clock::{PlaybackSource, SeekOutcome};
use seekline::widget::highlight::HighlightRegion;
use seekline::widget::input::PointerEvent;
use seekline::widget::render::{DrawOp, Rect, RecordingSurface};
use seekline::widget::{Dimension, WidgetController, WidgetPhase};
use seekline::WidgetConfig;

use super::helpers::ready_widget;

/// Rectangle of the last fill in the current frame (the progress fill).
fn progress_rect(ops: &[DrawOp]) -> Rect {
    match ops.last() {
        Some(DrawOp::Fill { rect, .. }) => *rect,
        other => panic!("frame should end with a fill, got {:?}", other),
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn widget_becomes_ready_once_laid_out() {
    let mut widget = WidgetController::new(WidgetConfig::new("a.ogg"));
    assert_eq!(widget.phase(), WidgetPhase::Unmounted);

    let mut source = seekline::widget::clock::SimulatedSource::new();
    source.load(60.0);
    widget.attach(source, RecordingSurface::unlaid()).unwrap();
    assert_eq!(widget.phase(), WidgetPhase::Initializing);

    widget.pump();
    assert_eq!(widget.frames_rendered(), 0, "no frames before layout");

    widget
        .surface_mut()
        .unwrap()
        .set_layout_size(Dimension::new(300, 10));
    assert!(widget.sync_layout());
    assert_eq!(widget.phase(), WidgetPhase::Ready);
    assert_eq!(widget.frames_rendered(), 1);
}

#[test]
fn detach_unsubscribes_from_source() {
    let mut widget = ready_widget(WidgetConfig::new("a.ogg"), 60.0, 100, 4);
    assert_eq!(widget.source().unwrap().subscriber_count(), 1);

    let (source, _surface) = widget.detach().unwrap();
    assert_eq!(source.subscriber_count(), 0);
    assert_eq!(widget.phase(), WidgetPhase::Unmounted);
}

// ============================================================================
// Seeking
// ============================================================================

#[test]
fn click_at_quarter_width_seeks_to_quarter_duration() {
    let mut widget = ready_widget(WidgetConfig::new("a.ogg"), 200.0, 1000, 20);

    let outcome = widget.click(PointerEvent::new(250.0, 10.0));
    assert_eq!(outcome, Some(SeekOutcome::Issued(50.0)));

    widget.pump();
    assert_eq!(widget.state().current_time, 50.0);
    assert_eq!(
        progress_rect(widget.surface().unwrap().ops()),
        Rect::new(0.0, 0.0, 250.0, 20.0)
    );
}

#[test]
fn click_respects_surface_origin() {
    let mut source = seekline::widget::clock::SimulatedSource::new();
    source.load(200.0);
    let surface = RecordingSurface::new(Dimension::new(1000, 20)).at(40.0, 300.0);

    let mut widget = WidgetController::new(WidgetConfig::new("a.ogg"));
    widget.attach(source, surface).unwrap();
    widget.pump();

    assert_eq!(
        widget.click(PointerEvent::new(290.0, 310.0)),
        Some(SeekOutcome::Issued(50.0))
    );
    // Above the track
    assert_eq!(widget.click(PointerEvent::new(290.0, 299.0)), None);
}

#[test]
fn skip_controls_stay_within_track() {
    let mut config = WidgetConfig::new("a.ogg");
    config.skip_amount_seconds = 15.0;
    let mut widget = ready_widget(config, 20.0, 100, 4);

    widget.skip_forward();
    widget.pump();
    assert_eq!(widget.state().current_time, 15.0);

    widget.skip_forward();
    widget.pump();
    assert_eq!(widget.state().current_time, 20.0);

    widget.skip_backward();
    widget.pump();
    assert_eq!(widget.state().current_time, 5.0);

    widget.skip_backward();
    widget.pump();
    assert_eq!(widget.state().current_time, 0.0);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn short_highlight_is_drawn_one_pixel_wide() {
    // 1 second = 5 pixels
    let mut config = WidgetConfig::new("a.ogg");
    config.highlight_regions = vec![HighlightRegion::new(10.0, 10.05).unwrap()];
    let widget = ready_widget(config, 200.0, 1000, 20);

    let ops = widget.surface().unwrap().ops();
    assert!(matches!(
        &ops[2],
        DrawOp::Fill { rect, .. } if *rect == Rect::new(50.0, 0.0, 1.0, 20.0)
    ));
}

#[test]
fn resize_rescales_progress_without_moving_time() {
    let mut widget = ready_widget(WidgetConfig::new("a.ogg"), 200.0, 1000, 20);
    widget.seek(50.0);
    widget.pump();
    assert_eq!(progress_rect(widget.surface().unwrap().ops()).width, 250.0);

    widget
        .surface_mut()
        .unwrap()
        .set_layout_size(Dimension::new(500, 20));
    assert!(widget.sync_layout());

    assert_eq!(widget.state().current_time, 50.0);
    assert_eq!(progress_rect(widget.surface().unwrap().ops()).width, 125.0);
}

#[test]
fn rapid_pause_resume_pause_redraws_each_time() {
    let mut widget = ready_widget(WidgetConfig::new("a.ogg"), 200.0, 100, 4);
    widget.source_mut().unwrap().play().unwrap();
    widget.pump();
    assert!(!widget.state().is_paused);

    let before = widget.frames_rendered();
    {
        let source = widget.source_mut().unwrap();
        source.pause().unwrap();
        source.play().unwrap();
        source.pause().unwrap();
    }
    assert_eq!(widget.pump(), 3);
    assert_eq!(widget.frames_rendered(), before + 3);
    assert!(widget.state().is_paused);
}

#[test]
fn every_frame_starts_with_a_full_clear() {
    let mut widget = ready_widget(WidgetConfig::new("a.ogg"), 200.0, 100, 4);
    widget.seek(100.0);
    widget.pump();

    let ops = widget.surface().unwrap().ops();
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[0], DrawOp::Clear { rect: Rect::new(0.0, 0.0, 100.0, 4.0) });
}

#[test]
fn display_list_for_configured_widget() {
    let mut config = WidgetConfig::new("a.ogg");
    config.colors.track = Some("#000".parse().unwrap());
    config.colors.progress = Some("#fff".parse().unwrap());
    config.highlight_regions = vec![
        HighlightRegion::new(0.0, 10.0).unwrap(),
        HighlightRegion::new(5.0, 15.0)
            .unwrap()
            .with_color("#ff0000".parse().unwrap()),
    ];
    let mut widget = ready_widget(config, 20.0, 40, 2);
    widget.seek(10.0);
    widget.pump();

    insta::assert_snapshot!(widget.surface().unwrap().display_list(), @r"
    clear 0,0 40x2
    fill  0,0 40x2 #000000
    fill  0,0 20x2 #ffd900
    fill  10,0 20x2 #ff0000
    fill  0,0 20x2 #ffffff
    ");
}
