//! Stock hero composition
//!
//! A ready-made decorative scene: three bobbing characters with blinking
//! eyes and wandering pupils, speech bubbles, twinkling stars, floating
//! hearts, falling confetti, drifting particles, and a shelf of props —
//! driven by scroll parallax at three depths and pointer tilt smoothed by
//! springs. All coordinates, colors, and timings here are content data; the
//! engine treats them like any other declaration.
//!
//! The composer decides what the named elements look like; this module only
//! declares how their properties move.

use verve_animation::easing::{CubicBezier, Easing, Power};
use verve_animation::keyframe::{KeyValue, KeyframeTrack, PathData};
use verve_animation::spring::SpringConfig;
use verve_animation::timeline::{StaggerSpec, TimelineSpec};
use verve_core::events::SharedEventHub;
use verve_core::geometry::Color;
use verve_core::mapper::RangeMapper;
use verve_input::OffsetWindow;

use crate::element::{ElementDecl, Property, PropertySet};
use crate::error::Result;
use crate::scene::Scene;

const GREEN: Color = Color::rgb(0.345, 0.8, 0.008); // #58CC02
const GREEN_ALT: Color = Color::rgb(0.298, 0.686, 0.314); // #4CAF50
const BLUE: Color = Color::rgb(0.11, 0.69, 0.965); // #1CB0F6
const BLUE_ALT: Color = Color::rgb(0.129, 0.588, 0.953); // #2196F3
const RED: Color = Color::rgb(1.0, 0.294, 0.294); // #FF4B4B
const YELLOW: Color = Color::rgb(1.0, 0.784, 0.0); // #FFC800

/// The soft in-out curve used by most idle motion
const SOFT: Easing = Easing::Bezier(CubicBezier::new(0.45, 0.05, 0.55, 0.95));
/// The expo-like curve used by entrances
const ENTER: Easing = Easing::Bezier(CubicBezier::new(0.16, 1.0, 0.3, 1.0));

/// Endless ease-in-out cycle over scalar keyframes.
fn cycle(values: impl IntoIterator<Item = f32>, duration: f32, delay: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::scalars(values).expect("static keyframes"),
        duration,
    )
    .easing(Easing::InOut(Power::Cubic))
    .delay(delay)
    .infinite()
}

/// Endless cycle with the softer bezier curve.
fn sway(values: impl IntoIterator<Item = f32>, duration: f32, delay: f32) -> TimelineSpec {
    cycle(values, duration, delay).easing(SOFT)
}

/// One-shot entrance with the expo-like curve.
fn entrance(values: impl IntoIterator<Item = f32>, duration: f32, delay: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::scalars(values).expect("static keyframes"),
        duration,
    )
    .easing(ENTER)
    .delay(delay)
}

/// Entrance that overshoots before settling, for pop-in bubbles and props.
fn pop(duration: f32, delay: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::with_times(
            vec![
                KeyValue::Scalar(0.0),
                KeyValue::Scalar(1.08),
                KeyValue::Scalar(1.0),
            ],
            vec![0.0, 0.7, 1.0],
        )
        .expect("static keyframes"),
        duration,
    )
    .easing(Easing::Out(Power::Cubic))
    .delay(delay)
}

/// Eyelid blink: hold open, snap shut, snap open, then wait out the pause.
fn blink(pause: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::with_times(
            vec![
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(0.1),
                KeyValue::Scalar(1.0),
                KeyValue::Scalar(1.0),
            ],
            vec![0.0, 0.4, 0.5, 0.6, 1.0],
        )
        .expect("static keyframes"),
        0.3,
    )
    .repeat_delay(pause)
    .infinite()
}

/// Gradient stop drifting between two colors and back.
fn color_cycle(from: Color, to: Color, duration: f32, delay: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::new(vec![
            KeyValue::Color(from),
            KeyValue::Color(to),
            KeyValue::Color(from),
        ])
        .expect("static keyframes"),
        duration,
    )
    .easing(Easing::InOut(Power::Cubic))
    .delay(delay)
    .infinite()
}

/// Smile path morphing a touch deeper and back.
fn smile_morph(rest: &str, wide: &str, duration: f32, delay: f32) -> TimelineSpec {
    TimelineSpec::new(
        KeyframeTrack::new(vec![
            KeyValue::Path(PathData::parse(rest)),
            KeyValue::Path(PathData::parse(wide)),
            KeyValue::Path(PathData::parse(rest)),
        ])
        .expect("static keyframes"),
        duration,
    )
    .easing(SOFT)
    .delay(delay)
    .infinite()
}

/// Build the hero composition into a freshly mounted scene.
///
/// Scroll progress runs over the default enter-to-exit window; pointer
/// offsets of ±300 px tilt the container by ∓5 degrees through 100/30
/// springs.
pub fn build(hub: &SharedEventHub) -> Result<Scene> {
    let mut scene = Scene::mount(hub, OffsetWindow::enter_to_exit());

    // Parallax depths
    let progress = scene.scroll_node();
    let y1 = scene.map(progress, RangeMapper::new([0.0, 1.0], [0.0, -50.0])?)?;
    let y2 = scene.map(progress, RangeMapper::new([0.0, 1.0], [0.0, -100.0])?)?;
    let y3 = scene.map(progress, RangeMapper::new([0.0, 1.0], [0.0, -150.0])?)?;

    // Pointer tilt
    let (dx, dy) = scene.pointer_nodes();
    let tilt_x_target = scene.map(dy, RangeMapper::new([-300.0, 300.0], [5.0, -5.0])?)?;
    let tilt_y_target = scene.map(dx, RangeMapper::new([-300.0, 300.0], [-5.0, 5.0])?)?;
    let tilt_x = scene.smooth(tilt_x_target, SpringConfig::smooth())?;
    let tilt_y = scene.smooth(tilt_y_target, SpringConfig::smooth())?;

    // Container: fades and scales in, then follows the pointer.
    let container = scene.add_element(
        ElementDecl::new("container")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 0.0))
            .animate(Property::Scale, entrance([0.8, 1.0], 0.8, 0.0)),
    )?;
    scene.bind(container, Property::RotateX, tilt_x)?;
    scene.bind(container, Property::RotateY, tilt_y)?;

    // Morphing backdrop circle.
    scene.add_element(
        ElementDecl::new("backdrop")
            .animate(Property::Scale, cycle([1.0, 1.05, 1.0], 8.0, 0.0))
            .animate(Property::Rotate, cycle([0.0, 5.0, 0.0], 8.0, 0.0)),
    )?;

    // Drifting background particles.
    let drift = StaggerSpec::new(0.2);
    for i in 0..8 {
        let delay = drift.delay_for_index(i, 8);
        let duration = 3.0 + i as f32 * 0.5;
        scene.add_element(
            ElementDecl::new(format!("particle-{i}"))
                .base(PropertySet::default().with_opacity(0.3))
                .animate(Property::TranslateY, cycle([0.0, -30.0, 0.0], duration, delay))
                .animate(
                    Property::TranslateX,
                    cycle([0.0, (i as f32).sin() * 20.0, 0.0], duration, delay),
                )
                .animate(Property::Scale, cycle([1.0, 1.5, 1.0], duration, delay))
                .animate(Property::Opacity, cycle([0.3, 0.6, 0.3], duration, delay)),
        )?;
    }

    build_characters(&mut scene, y1, y2)?;
    build_bubbles(&mut scene, y3)?;
    build_ornaments(&mut scene)?;
    build_props(&mut scene)?;

    Ok(scene)
}

fn build_characters(
    scene: &mut Scene,
    y1: verve_core::value::NodeId,
    y2: verve_core::value::NodeId,
) -> Result<()> {
    // Left character: slides in from the left with a 3D turn, rides the
    // shallow parallax layer.
    let left = scene.add_element(
        ElementDecl::new("left-character")
            .animate(Property::TranslateX, entrance([-200.0, 0.0], 1.2, 0.2))
            .animate(Property::Opacity, entrance([0.0, 1.0], 1.2, 0.2))
            .animate(Property::RotateY, entrance([-90.0, 0.0], 1.2, 0.2)),
    )?;
    scene.bind(left, Property::TranslateY, y1)?;

    scene.add_element(
        ElementDecl::new("left-body")
            .base(PropertySet::default().with_fill(GREEN))
            .animate(Property::TranslateY, cycle([0.0, -12.0, 0.0], 3.0, 0.0))
            .animate(Property::ScaleY, cycle([1.0, 1.02, 1.0], 3.0, 0.0))
            .animate(Property::Fill, color_cycle(GREEN, GREEN_ALT, 4.0, 0.0)),
    )?;
    scene.add_element(ElementDecl::new("left-eyes").animate(Property::ScaleY, blink(3.5)))?;
    scene.add_element(
        ElementDecl::new("left-pupils")
            .animate(Property::TranslateX, cycle([0.0, 4.0, 0.0, -4.0, 0.0], 5.0, 0.0))
            .animate(Property::TranslateY, cycle([0.0, 2.0, 0.0, -2.0, 0.0], 5.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("left-smile").animate(
            Property::PathD,
            smile_morph(
                "M305 580Q340 610 375 580",
                "M305 585Q340 618 375 585",
                2.5,
                0.0,
            ),
        ),
    )?;
    scene.add_element(
        ElementDecl::new("left-arm-near")
            .animate(Property::Rotate, sway([0.0, -20.0, 5.0, -20.0, 0.0], 3.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("left-arm-far")
            .animate(Property::Rotate, sway([0.0, 20.0, -5.0, 20.0, 0.0], 3.0, 0.3)),
    )?;

    // Center character: rises from below on the deep parallax layer.
    let center = scene.add_element(
        ElementDecl::new("center-character")
            .animate(
                Property::TranslateY,
                entrance([200.0, 0.0], 1.0, 0.4).easing(Easing::Out(Power::Cubic)),
            )
            .animate(Property::Opacity, entrance([0.0, 1.0], 1.0, 0.4)),
    )?;
    scene.bind(center, Property::TranslateY, y2)?;

    scene.add_element(
        ElementDecl::new("center-body")
            .base(PropertySet::default().with_fill(RED))
            .animate(Property::TranslateY, cycle([0.0, -15.0, 0.0], 2.5, 0.2))
            .animate(Property::ScaleX, cycle([1.0, 1.05, 1.0], 2.5, 0.2)),
    )?;
    scene.add_element(
        ElementDecl::new("center-pupils")
            .animate(Property::Scale, cycle([1.0, 1.15, 1.0], 4.0, 0.0))
            .animate(Property::TranslateX, cycle([0.0, 3.0, 0.0, -3.0, 0.0], 4.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("center-sparkles")
            .animate(Property::Opacity, cycle([0.5, 1.0, 0.5], 2.0, 0.0))
            .animate(Property::Scale, cycle([0.8, 1.2, 0.8], 2.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("center-smile").animate(
            Property::PathD,
            smile_morph(
                "M505 570Q540 605 575 570",
                "M505 575Q540 612 575 575",
                2.8,
                0.0,
            ),
        ),
    )?;
    scene.add_element(
        ElementDecl::new("center-arm-near")
            .animate(Property::Rotate, cycle([0.0, -15.0, 0.0, -10.0, 0.0], 2.8, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("center-arm-far")
            .animate(Property::Rotate, cycle([0.0, 15.0, 0.0, 10.0, 0.0], 2.8, 0.4)),
    )?;

    // Right character: slides in from the right, untwisting.
    let right = scene.add_element(
        ElementDecl::new("right-character")
            .animate(Property::TranslateX, entrance([200.0, 0.0], 1.2, 0.6))
            .animate(Property::Opacity, entrance([0.0, 1.0], 1.2, 0.6))
            .animate(Property::Rotate, entrance([45.0, 0.0], 1.2, 0.6)),
    )?;
    scene.bind(right, Property::TranslateY, y1)?;

    scene.add_element(
        ElementDecl::new("right-body")
            .base(PropertySet::default().with_fill(BLUE))
            .animate(Property::TranslateY, cycle([0.0, -10.0, 0.0], 3.5, 0.4))
            .animate(Property::Rotate, cycle([0.0, 2.0, 0.0, -2.0, 0.0], 3.5, 0.4))
            .animate(Property::Fill, color_cycle(BLUE, BLUE_ALT, 4.0, 0.5)),
    )?;
    scene.add_element(ElementDecl::new("right-eyes").animate(Property::ScaleY, blink(4.5)))?;
    scene.add_element(
        ElementDecl::new("right-pupils")
            .animate(Property::TranslateX, cycle([0.0, -4.0, 0.0, 4.0, 0.0], 5.5, 0.0))
            .animate(Property::TranslateY, cycle([0.0, 2.0, 0.0, -2.0, 0.0], 5.5, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("right-smile").animate(
            Property::PathD,
            smile_morph(
                "M705 580Q740 610 775 580",
                "M705 585Q740 618 775 585",
                2.4,
                0.5,
            ),
        ),
    )?;
    scene.add_element(
        ElementDecl::new("right-arm-near")
            .animate(Property::Rotate, cycle([0.0, -18.0, 0.0, -12.0, 0.0], 3.2, 0.2)),
    )?;
    scene.add_element(
        ElementDecl::new("right-arm-far")
            .animate(Property::Rotate, cycle([0.0, 18.0, 0.0, 12.0, 0.0], 3.2, 0.5)),
    )?;

    Ok(())
}

fn build_bubbles(scene: &mut Scene, y3: verve_core::value::NodeId) -> Result<()> {
    // Speech bubbles pop in late and float on the deepest parallax layer.
    let specs: [(&str, f32, f32, f32, f32); 3] = [
        // name, entrance delay, spin-in from, float duration, float delay
        ("bubble-left", 1.0, -180.0, 3.0, 0.0),
        ("bubble-right", 1.2, 180.0, 3.5, 0.3),
        ("bubble-center", 1.4, 0.0, 2.8, 0.5),
    ];
    for (name, delay, spin_from, float_dur, float_delay) in specs {
        let mut decl = ElementDecl::new(name)
            .animate(Property::Scale, pop(0.8, delay))
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, delay));
        if spin_from != 0.0 {
            decl = decl.animate(Property::Rotate, entrance([spin_from, 0.0], 0.8, delay));
        }
        let bubble = scene.add_element(decl)?;
        if name != "bubble-center" {
            scene.bind(bubble, Property::TranslateY, y3)?;
        }

        scene.add_element(
            ElementDecl::new(format!("{name}-body"))
                .animate(
                    Property::TranslateY,
                    cycle([0.0, -8.0, 0.0], float_dur, float_delay),
                )
                .animate(
                    Property::Rotate,
                    cycle([0.0, -2.0, 0.0, 2.0, 0.0], float_dur, float_delay),
                ),
        )?;
        scene.add_element(
            ElementDecl::new(format!("{name}-text"))
                .animate(Property::Scale, cycle([1.0, 1.1, 1.0], 2.0, float_delay))
                .animate(Property::TranslateY, cycle([0.0, -2.0, 0.0], 2.0, float_delay)),
        )?;
    }
    Ok(())
}

fn build_ornaments(scene: &mut Scene) -> Result<()> {
    // Twinkling stars, staggered outward.
    let star_colors = [YELLOW, RED, GREEN, BLUE, YELLOW];
    let twinkle = StaggerSpec::new(0.3);
    for (i, color) in star_colors.into_iter().enumerate() {
        let delay = twinkle.delay_for_index(i, star_colors.len());
        scene.add_element(
            ElementDecl::new(format!("star-{i}"))
                .base(PropertySet::default().with_fill(color))
                .animate(
                    Property::Scale,
                    cycle([1.0, 1.4, 1.0], 4.0 + i as f32 * 0.5, delay),
                )
                .animate(
                    Property::Rotate,
                    TimelineSpec::new(
                        KeyframeTrack::scalars([0.0, 360.0]).expect("static keyframes"),
                        4.0 + i as f32 * 0.5,
                    )
                    .easing(Easing::InOut(Power::Cubic))
                    .delay(delay)
                    .infinite(),
                )
                .animate(
                    Property::Opacity,
                    cycle([0.3, 0.6, 0.3], 2.0 + i as f32 * 0.3, delay),
                ),
        )?;
    }

    // Hearts rise, swell, and fade, one per second.
    for i in 0..5 {
        let delay = 2.0 + i as f32;
        let rise = TimelineSpec::new(
            KeyframeTrack::scalars([0.0, -150.0]).expect("static keyframes"),
            5.0,
        )
        .easing(Easing::Out(Power::Cubic))
        .delay(delay)
        .infinite();
        scene.add_element(
            ElementDecl::new(format!("heart-{i}"))
                .base(PropertySet::default().with_fill(RED).with_opacity(0.0))
                .animate(Property::TranslateY, rise)
                .animate(
                    Property::TranslateX,
                    cycle([0.0, (i as f32).sin() * 30.0, 0.0], 5.0, delay),
                )
                .animate(
                    Property::Opacity,
                    TimelineSpec::new(
                        KeyframeTrack::scalars([0.0, 1.0, 1.0, 0.0]).expect("static keyframes"),
                        5.0,
                    )
                    .delay(delay)
                    .infinite(),
                )
                .animate(
                    Property::Scale,
                    cycle([0.5, 1.0, 0.8], 5.0, delay).easing(Easing::Out(Power::Cubic)),
                )
                .animate(
                    Property::Rotate,
                    TimelineSpec::new(
                        KeyframeTrack::scalars([0.0, 360.0]).expect("static keyframes"),
                        5.0,
                    )
                    .easing(Easing::Out(Power::Cubic))
                    .delay(delay)
                    .infinite(),
                ),
        )?;
    }

    // Confetti rains across the full height.
    let scatter = StaggerSpec::new(0.2);
    for i in 0..12 {
        let delay = scatter.delay_for_index(i, 12);
        let duration = 4.0 + i as f32 * 0.3;
        let spin_to = if i % 2 == 0 { 360.0 } else { -360.0 };
        scene.add_element(
            ElementDecl::new(format!("confetti-{i}"))
                .base(PropertySet::default().with_opacity(0.0))
                .animate(
                    Property::TranslateY,
                    cycle([150.0, 900.0], duration, delay),
                )
                .animate(
                    Property::TranslateX,
                    cycle([0.0, (i as f32).sin() * 100.0], duration, delay),
                )
                .animate(Property::Rotate, cycle([0.0, spin_to], duration, delay))
                .animate(
                    Property::Opacity,
                    cycle([0.0, 1.0, 1.0, 0.0], duration, delay),
                ),
        )?;
    }
    Ok(())
}

fn build_props(scene: &mut Scene) -> Result<()> {
    // Book with a page-flip shimmer.
    scene.add_element(
        ElementDecl::new("book")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 1.8))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 1.8))
            .animate(Property::Rotate, entrance([-30.0, 0.0], 0.8, 1.8)),
    )?;
    scene.add_element(
        ElementDecl::new("book-cover")
            .base(PropertySet::default().with_fill(BLUE))
            .animate(Property::Rotate, cycle([-3.0, 3.0, -3.0], 3.0, 0.0))
            .animate(Property::TranslateY, cycle([0.0, -5.0, 0.0], 3.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("book-page").animate(
            Property::ScaleX,
            cycle([0.0, 1.0, 0.0], 2.0, 0.0).repeat_delay(1.0),
        ),
    )?;

    // Trophy with a periodic shine.
    scene.add_element(
        ElementDecl::new("trophy")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 2.0))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 2.0))
            .animate(Property::Scale, pop(0.8, 2.0)),
    )?;
    scene.add_element(
        ElementDecl::new("trophy-body")
            .base(PropertySet::default().with_fill(YELLOW))
            .animate(Property::TranslateY, cycle([0.0, -10.0, 0.0], 2.5, 0.0))
            .animate(Property::Scale, cycle([1.0, 1.05, 1.0], 2.5, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("trophy-shine")
            .animate(
                Property::Opacity,
                cycle([0.0, 1.0, 0.0], 2.0, 0.0).repeat_delay(1.0),
            )
            .animate(
                Property::Scale,
                cycle([0.5, 1.5, 0.5], 2.0, 0.0).repeat_delay(1.0),
            ),
    )?;

    // Pencil resting at a slant.
    scene.add_element(
        ElementDecl::new("pencil")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 2.2))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 2.2))
            .animate(Property::Rotate, entrance([-45.0, -25.0], 0.8, 2.2)),
    )?;
    scene.add_element(
        ElementDecl::new("pencil-body")
            .base(PropertySet::default().with_fill(YELLOW))
            .animate(Property::Rotate, cycle([-25.0, -20.0, -25.0], 3.0, 0.0))
            .animate(Property::TranslateY, cycle([0.0, -5.0, 0.0], 3.0, 0.0)),
    )?;

    // Notebook tilted the other way.
    scene.add_element(
        ElementDecl::new("notebook")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 2.4))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 2.4))
            .animate(Property::Rotate, entrance([15.0, 8.0], 0.8, 2.4)),
    )?;
    scene.add_element(
        ElementDecl::new("notebook-body")
            .base(PropertySet::default().with_fill(GREEN))
            .animate(Property::Rotate, cycle([8.0, 12.0, 8.0], 3.5, 0.3))
            .animate(Property::TranslateY, cycle([0.0, -6.0, 0.0], 3.5, 0.3)),
    )?;

    // Globe: bobbing sphere, slow continuous spin.
    scene.add_element(
        ElementDecl::new("globe")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 2.6))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 2.6))
            .animate(Property::Scale, pop(0.8, 2.6)),
    )?;
    scene.add_element(
        ElementDecl::new("globe-sphere")
            .base(PropertySet::default().with_fill(BLUE))
            .animate(Property::TranslateY, cycle([0.0, -8.0, 0.0], 3.0, 0.0)),
    )?;
    scene.add_element(
        ElementDecl::new("globe-spin").animate(
            Property::Rotate,
            TimelineSpec::new(
                KeyframeTrack::scalars([0.0, 360.0]).expect("static keyframes"),
                20.0,
            )
            .infinite(),
        ),
    )?;

    // Letter blocks.
    scene.add_element(
        ElementDecl::new("block-a")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 2.8))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 2.8))
            .animate(Property::Rotate, entrance([-20.0, -10.0], 0.8, 2.8)),
    )?;
    scene.add_element(
        ElementDecl::new("block-a-body")
            .base(PropertySet::default().with_fill(RED))
            .animate(Property::Rotate, cycle([-10.0, -5.0, -10.0], 2.8, 0.1))
            .animate(Property::TranslateY, cycle([0.0, -7.0, 0.0], 2.8, 0.1)),
    )?;
    scene.add_element(
        ElementDecl::new("block-b")
            .animate(Property::Opacity, entrance([0.0, 1.0], 0.8, 3.0))
            .animate(Property::TranslateY, entrance([50.0, 0.0], 0.8, 3.0))
            .animate(Property::Rotate, entrance([15.0, 10.0], 0.8, 3.0)),
    )?;
    scene.add_element(
        ElementDecl::new("block-b-body")
            .base(PropertySet::default().with_fill(YELLOW))
            .animate(Property::Rotate, cycle([10.0, 15.0, 10.0], 3.2, 0.2))
            .animate(Property::TranslateY, cycle([0.0, -6.0, 0.0], 3.2, 0.2)),
    )?;

    Ok(())
}
