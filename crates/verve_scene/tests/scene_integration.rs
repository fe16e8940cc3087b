//! Integration tests for the full engine stack
//!
//! These tests verify that:
//! - tracker events flow through mappers and springs into element properties
//! - one tick delivers a single consistent, idempotent snapshot
//! - per-element evaluation failures are contained and leave the rest of
//!   the scene running
//! - teardown releases every timeline, spring, and listener

use verve_animation::keyframe::{KeyValue, KeyframeTrack};
use verve_animation::timeline::TimelineSpec;
use verve_core::events::{shared_hub, InputEvent, Viewport};
use verve_core::geometry::{Color, Point, Rect};
use verve_core::mapper::RangeMapper;
use verve_animation::spring::SpringConfig;
use verve_input::OffsetWindow;
use verve_scene::{hero, ElementDecl, Property, PropertySet, RecordingComposer, Scene};

const DT: f64 = 1.0 / 60.0;

fn container() -> Rect {
    Rect::new(100.0, 100.0, 424.0, 424.0)
}

// Element of height 400 at document y = 1000, 600 px viewport: the
// enter-to-exit window spans scroll 400..=1400.
fn page_target() -> Rect {
    Rect::new(0.0, 1000.0, 800.0, 400.0)
}

fn viewport(scroll_y: f32) -> Viewport {
    Viewport::new(scroll_y, 600.0)
}

/// Pointer offset maps to a tilt target which a spring then chases.
#[test]
fn pointer_tilt_pipeline() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    let (dx, dy) = scene.pointer_nodes();
    let target = scene
        .map(dx, RangeMapper::new([-300.0, 300.0], [-5.0, 5.0]).unwrap())
        .unwrap();
    let tilt_x = scene
        .map(dy, RangeMapper::new([-300.0, 300.0], [5.0, -5.0]).unwrap())
        .unwrap();
    let smoothed = scene.smooth(target, SpringConfig::smooth()).unwrap();

    let card = scene.add_element(ElementDecl::new("card")).unwrap();
    scene.bind(card, Property::RotateY, smoothed).unwrap();

    // Pointer at dead center: no tilt at all.
    let center = container().center();
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(center.x, center.y),
        container: container(),
    });
    scene.tick(0.0, &mut composer);
    assert_eq!(scene.committed(card).unwrap().resolved_rotate_y(), 0.0);

    // 300 px right of center: the raw mapped target is 5 immediately, and
    // the inverted vertical mapper stays at 0 since dy has not moved.
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(center.x + 300.0, center.y),
        container: container(),
    });
    scene.tick(DT, &mut composer);
    assert_eq!(scene.graph().get(target), Some(5.0));
    assert_eq!(scene.graph().get(tilt_x), Some(0.0));

    // 300 px below center inverts to -5 before any smoothing.
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(center.x, center.y + 300.0),
        container: container(),
    });
    scene.tick(DT * 2.0, &mut composer);
    assert_eq!(scene.graph().get(tilt_x), Some(-5.0));

    // Back to the horizontal push for the rest of the test.
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(center.x + 300.0, center.y),
        container: container(),
    });
    scene.tick(DT * 3.0, &mut composer);

    // ...while the smoothed tilt takes its time getting there.
    let early = scene.committed(card).unwrap().resolved_rotate_y();
    assert!(early < 5.0);

    let mut now = DT;
    for _ in 0..600 {
        now += DT;
        scene.tick(now, &mut composer);
    }
    let settled = scene.committed(card).unwrap().resolved_rotate_y();
    assert!((settled - 5.0).abs() < 1e-3);
}

/// Scroll progress feeds parallax mappers bound to element translation.
#[test]
fn scroll_parallax_pipeline() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    let progress = scene.scroll_node();
    let y1 = scene
        .map(progress, RangeMapper::new([0.0, 1.0], [0.0, -50.0]).unwrap())
        .unwrap();
    let layer = scene.add_element(ElementDecl::new("layer")).unwrap();
    scene.bind(layer, Property::TranslateY, y1).unwrap();

    // Sweep from before-enter to after-exit; parallax must never regress.
    let mut last = f32::INFINITY;
    let mut now = 0.0;
    for i in 0..=40 {
        hub.borrow_mut().dispatch(&InputEvent::Scroll {
            viewport: viewport(i as f32 * 50.0),
            target: page_target(),
        });
        now += DT;
        scene.tick(now, &mut composer);
        let y = scene.committed(layer).unwrap().resolved_translate().1;
        assert!(y <= last + 1e-6, "parallax regressed at step {i}");
        last = y;
    }
    assert_eq!(last, -50.0);

    // Window midpoint lands exactly halfway.
    hub.borrow_mut().dispatch(&InputEvent::Scroll {
        viewport: viewport(900.0),
        target: page_target(),
    });
    scene.tick(now + DT, &mut composer);
    let y = scene.committed(layer).unwrap().resolved_translate().1;
    assert!((y - -25.0).abs() < 1e-4);
}

/// Repeated evaluation at the same instant yields identical snapshots.
#[test]
fn tick_is_idempotent_for_same_now() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    let pulse = scene
        .add_element(ElementDecl::new("pulse").animate(
            Property::Scale,
            TimelineSpec::new(KeyframeTrack::scalars([1.0, 1.1, 1.0]).unwrap(), 2.0).infinite(),
        ))
        .unwrap();

    scene.tick(0.0, &mut composer);
    scene.tick(0.7, &mut composer);
    let first = scene.committed(pulse).unwrap().clone();
    scene.tick(0.7, &mut composer);
    let second = scene.committed(pulse).unwrap().clone();
    assert_eq!(first, second);
}

/// A kind mismatch surfaces during one element's evaluation; that element
/// freezes at its last committed values while its neighbors keep moving.
#[test]
fn element_failure_is_isolated() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    // Color keyframes aimed at a scalar property: passes configuration
    // (properties are dynamically typed at the boundary) and fails when the
    // value is applied.
    let broken = scene
        .add_element(
            ElementDecl::new("broken")
                .base(PropertySet::default().with_translate(7.0, 0.0))
                .animate(
                    Property::TranslateX,
                    TimelineSpec::new(
                        KeyframeTrack::new(vec![
                            KeyValue::Color(Color::BLACK),
                            KeyValue::Color(Color::WHITE),
                        ])
                        .unwrap(),
                        1.0,
                    ),
                ),
        )
        .unwrap();
    let healthy = scene
        .add_element(ElementDecl::new("healthy").animate(
            Property::Opacity,
            TimelineSpec::new(KeyframeTrack::scalars([0.0, 1.0]).unwrap(), 1.0),
        ))
        .unwrap();

    scene.tick(0.0, &mut composer);
    scene.tick(0.5, &mut composer);

    // The broken element froze at its base appearance.
    assert!(scene.is_frozen(broken));
    assert_eq!(
        scene.committed(broken).unwrap().resolved_translate().0,
        7.0
    );

    // The healthy element advanced normally and both were composed.
    assert!(!scene.is_frozen(healthy));
    assert_eq!(scene.committed(healthy).unwrap().resolved_opacity(), 0.5);
    assert_eq!(composer.element_count(), 2);
}

/// Unmounting mid-animation leaves zero timelines, springs, and listeners,
/// and later events are ignored.
#[test]
fn unmount_releases_everything() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    let (dx, _) = scene.pointer_nodes();
    let smoothed = scene.smooth(dx, SpringConfig::gentle()).unwrap();
    let card = scene.add_element(ElementDecl::new("card").animate(
        Property::Opacity,
        TimelineSpec::new(KeyframeTrack::scalars([0.0, 1.0]).unwrap(), 2.0).infinite(),
    )).unwrap();
    scene.bind(card, Property::TranslateX, smoothed).unwrap();

    scene.tick(0.0, &mut composer);
    scene.tick(0.5, &mut composer);
    assert_eq!(scene.active_timelines(), 1);
    assert_eq!(scene.active_springs(), 1);
    assert_eq!(hub.borrow().handler_count(), 2);

    scene.unmount();
    assert_eq!(scene.active_timelines(), 0);
    assert_eq!(scene.active_springs(), 0);
    assert_eq!(scene.listener_count(), 0);
    assert_eq!(hub.borrow().handler_count(), 0);

    // Events after unmount reach no one; ticking is a no-op.
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(0.0, 0.0),
        container: container(),
    });
    let applies = composer.applies();
    scene.tick(1.0, &mut composer);
    assert_eq!(composer.applies(), applies);
}

/// Any number of pointer events between two ticks publishes exactly once.
#[test]
fn input_coalesces_at_the_frame_boundary() {
    let hub = shared_hub();
    let mut scene = Scene::mount(&hub, OffsetWindow::default());
    let mut composer = RecordingComposer::new();

    let (dx, _) = scene.pointer_nodes();
    scene.tick(0.0, &mut composer);
    let v0 = scene.graph().version(dx).unwrap();

    let center = container().center();
    for i in 0..25 {
        hub.borrow_mut().dispatch(&InputEvent::PointerMove {
            position: Point::new(center.x + i as f32, center.y),
            container: container(),
        });
    }
    scene.tick(DT, &mut composer);
    assert_eq!(scene.graph().version(dx), Some(v0 + 1));
    assert_eq!(scene.graph().get(dx), Some(24.0));
}

// =============================================================================
// Hero composition end-to-end
// =============================================================================

#[test]
fn hero_scene_runs_headless() {
    let hub = shared_hub();
    let mut scene = hero::build(&hub).unwrap();
    let mut composer = RecordingComposer::new();

    // Mid-window scroll and a pointer push to the right.
    hub.borrow_mut().dispatch(&InputEvent::Scroll {
        viewport: viewport(900.0),
        target: page_target(),
    });
    let center = container().center();
    hub.borrow_mut().dispatch(&InputEvent::PointerMove {
        position: Point::new(center.x + 300.0, center.y),
        container: container(),
    });

    let mut now = 0.0;
    for _ in 0..240 {
        scene.tick(now, &mut composer);
        now += DT;
    }

    // Entrances have finished: the container is fully visible.
    let container_props = scene
        .committed(scene.element_by_name("container").unwrap())
        .unwrap();
    assert!((container_props.resolved_opacity() - 1.0).abs() < 1e-3);

    // Pointer tilt settled through the spring: +300 px -> -5 degrees of
    // X-tilt is for vertical offset only, so here the Y-turn carries it.
    assert!((container_props.resolved_rotate_y() - 5.0).abs() < 0.05);
    assert_eq!(container_props.resolved_rotate_x(), 0.0);

    // Parallax: mid-window progress shifts layer one by -25.
    let left = scene
        .committed(scene.element_by_name("left-character").unwrap())
        .unwrap();
    assert!((left.resolved_translate().1 - -25.0).abs() < 1e-3);

    // Every element was composed every frame.
    assert_eq!(composer.element_count(), scene.element_count());
    assert_eq!(composer.applies(), 240 * scene.element_count());

    // Nothing froze.
    for (id, _) in composer.snapshots() {
        assert!(!scene.is_frozen(*id));
    }
}

#[test]
fn hero_blink_closes_eyes_on_schedule() {
    let hub = shared_hub();
    let mut scene = hero::build(&hub).unwrap();
    let mut composer = RecordingComposer::new();

    // Timelines anchor at the first tick; the blink runs over the first
    // 0.3 s of every 3.8 s cycle.
    scene.tick(0.0, &mut composer);
    scene.tick(0.15, &mut composer);
    let eyes = scene
        .committed(scene.element_by_name("left-eyes").unwrap())
        .unwrap();
    assert!((eyes.resolved_scale().1 - 0.1).abs() < 1e-4);

    // Wide open while waiting out the pause between blinks.
    scene.tick(2.0, &mut composer);
    let eyes = scene
        .committed(scene.element_by_name("left-eyes").unwrap())
        .unwrap();
    assert_eq!(eyes.resolved_scale().1, 1.0);
}

#[test]
fn hero_hearts_wait_for_their_turn() {
    let hub = shared_hub();
    let mut scene = hero::build(&hub).unwrap();
    let mut composer = RecordingComposer::new();

    scene.tick(0.0, &mut composer);
    scene.tick(1.0, &mut composer);

    // Before its 2 s delay the first heart is still invisible.
    let heart = scene
        .committed(scene.element_by_name("heart-0").unwrap())
        .unwrap();
    assert_eq!(heart.resolved_opacity(), 0.0);
    assert_eq!(heart.resolved_translate().1, 0.0);

    // Mid-flight it is visible and rising.
    scene.tick(4.0, &mut composer);
    let heart = scene
        .committed(scene.element_by_name("heart-0").unwrap())
        .unwrap();
    assert!(heart.resolved_opacity() > 0.5);
    assert!(heart.resolved_translate().1 < -20.0);
}

#[test]
fn hero_smile_morph_stays_structural() {
    let hub = shared_hub();
    let mut scene = hero::build(&hub).unwrap();
    let mut composer = RecordingComposer::new();

    scene.tick(0.0, &mut composer);
    // Quarter cycle in: the smile path is between its two shapes.
    scene.tick(0.625, &mut composer);
    let smile = scene
        .committed(scene.element_by_name("left-smile").unwrap())
        .unwrap();
    let d = smile.path_d.as_ref().unwrap().to_svg();
    assert!(d.starts_with("M 305"));
    // The morph only moves Y coordinates between 580/585 and 610/618.
    assert!(d.contains("Q 340"));
}
